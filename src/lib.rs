pub mod config;
pub mod driver;
pub mod error;
pub mod invocation;
pub mod launcher;
pub mod shaders;

pub use config::DriverConfig;
pub use driver::{BuildReport, Outcome, ReportEntry, ShaderBuildDriver};
pub use error::{ConfigError, LaunchError};
pub use invocation::CompilerInvocation;
pub use launcher::{Launcher, ProcessLauncher};
