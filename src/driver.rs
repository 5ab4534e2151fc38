use log::{info, warn};
use owo_colors::OwoColorize;

use crate::config::DriverConfig;
use crate::error::LaunchError;
use crate::invocation::CompilerInvocation;
use crate::launcher::Launcher;

#[derive(Debug)]
pub enum Outcome {
	Exited(Option<i32>),
	LaunchFailed(LaunchError),
}

impl Outcome {
	pub fn is_success(&self) -> bool {
		matches!(self, Outcome::Exited(Some(0)))
	}
}

#[derive(Debug)]
pub struct ReportEntry {
	pub input : String,
	pub outcome : Outcome,
}

/// What one pass observed, in list order. Informational only.
#[derive(Debug, Default)]
pub struct BuildReport {
	entries : Vec<ReportEntry>,
}

impl BuildReport {
	pub fn entries(&self) -> &[ReportEntry] {
		&self.entries
	}

	pub fn succeeded(&self) -> usize {
		self.entries.iter().filter(|e| e.outcome.is_success()).count()
	}

	pub fn failed(&self) -> impl Iterator<Item = &ReportEntry> {
		self.entries.iter().filter(|e| !e.outcome.is_success())
	}

	pub fn is_clean(&self) -> bool {
		self.failed().next().is_none()
	}
}

/// Compiles every shader of its plan, one child process at a time, ignoring
/// how each one went.
pub struct ShaderBuildDriver {
	config : DriverConfig,
}

impl ShaderBuildDriver {
	pub fn new(config: DriverConfig) -> Self {
		Self { config }
	}

	pub fn builtin() -> Self {
		Self::new(DriverConfig::default())
	}

	pub fn config(&self) -> &DriverConfig {
		&self.config
	}

	pub fn invocations(&self) -> impl Iterator<Item = CompilerInvocation> + '_ {
		self.config.shaders.iter()
			.map(move |shader| CompilerInvocation::new(&self.config.tool, shader))
	}

	pub fn run<L: Launcher>(&self, launcher: &mut L) -> BuildReport {
		info!("compiling {} shaders with {}", self.config.shaders.len(), self.config.tool);

		let mut report = BuildReport::default();
		for invocation in self.invocations() {
			let outcome = match launcher.launch(&invocation) {
				Ok(code) => Outcome::Exited(code),
				Err(e) => Outcome::LaunchFailed(e),
			};
			log_outcome(&invocation, &outcome);
			report.entries.push(ReportEntry {
				input: invocation.input().to_owned(),
				outcome,
			});
		}
		report
	}
}

fn log_outcome(invocation: &CompilerInvocation, outcome: &Outcome) {
	match outcome {
		Outcome::Exited(Some(0)) => {
			println!("{} -> {}", invocation.input(), invocation.output().green());
		}
		Outcome::Exited(code) => {
			println!("{} -> {}", invocation.input(), "failed".red());
			match code {
				Some(code) => warn!("{} exited with status {}", invocation, code),
				None => warn!("{} was terminated by a signal", invocation),
			}
		}
		Outcome::LaunchFailed(e) => {
			println!("{} -> {}", invocation.input(), "not run".red());
			warn!("{}: {}", invocation, e);
		}
	}
}
