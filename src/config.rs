use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::shaders::{GLSLANG_VALIDATOR, SHADOWMAP_SHADERS};

/// What to compile and with which tool. The default is the shadowmap sample's
/// fixed list compiled with `glslangValidator`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
	pub tool : String,
	pub shaders : Vec<String>,
}

impl Default for DriverConfig {
	fn default() -> Self {
		Self {
			tool: GLSLANG_VALIDATOR.to_owned(),
			shaders: SHADOWMAP_SHADERS.iter().map(|s| s.to_string()).collect(),
		}
	}
}

impl DriverConfig {
	pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
		let config : DriverConfig = toml::from_str(contents)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let contents = fs::read_to_string(path).map_err(ConfigError::Read)?;
		Self::from_toml_str(&contents)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.tool.trim().is_empty() {
			return Err(ConfigError::EmptyTool);
		}
		if self.shaders.is_empty() {
			return Err(ConfigError::EmptyShaderList);
		}
		Ok(())
	}
}
