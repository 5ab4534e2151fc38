use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
	#[error("could not find {program} on the search path")]
	NotFound { program: String },
	#[error("running {program} failed")]
	Io {
		program: String,
		#[source]
		source: io::Error,
	},
}

impl LaunchError {
	pub fn from_io(program: &str, source: io::Error) -> Self {
		match source.kind() {
			io::ErrorKind::NotFound => LaunchError::NotFound { program: program.to_owned() },
			_ => LaunchError::Io { program: program.to_owned(), source },
		}
	}
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("reading config failed")]
	Read(#[source] io::Error),
	#[error(transparent)]
	Parse(#[from] toml::de::Error),
	#[error("Missing shader list.")]
	EmptyShaderList,
	#[error("Missing compiler tool name.")]
	EmptyTool,
}
