use std::path::PathBuf;

use log::debug;

use crate::error::LaunchError;
use crate::invocation::CompilerInvocation;

/// Runs one invocation to completion.
///
/// Returns the child's exit code, or `None` when it was terminated without one
/// (e.g. by a signal).
pub trait Launcher {
	fn launch(&mut self, invocation: &CompilerInvocation) -> Result<Option<i32>, LaunchError>;
}

/// Spawns the compiler as a child process and blocks until it exits.
/// The child inherits stdin, stdout and stderr.
#[derive(Clone, Debug, Default)]
pub struct ProcessLauncher {
	working_dir : Option<PathBuf>,
}

impl ProcessLauncher {
	pub fn new() -> Self {
		Self::default()
	}

	/// Run children in `dir` instead of the current directory.
	pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
		Self { working_dir: Some(dir.into()) }
	}
}

impl Launcher for ProcessLauncher {
	fn launch(&mut self, invocation: &CompilerInvocation) -> Result<Option<i32>, LaunchError> {
		let mut command = invocation.command();
		if let Some(dir) = &self.working_dir {
			command.current_dir(dir);
		}
		debug!("running {}", invocation);
		let status = command.status()
			.map_err(|e| LaunchError::from_io(invocation.program(), e))?;
		Ok(status.code())
	}
}
