use anyhow::Result;
use log::info;
use owo_colors::OwoColorize;

use compile_shaders::{ProcessLauncher, ShaderBuildDriver};

// Takes no arguments and reads no config: always the built-in list, in the
// current directory. Exit status is 0 whatever the compiler did.
fn main() -> Result<()> {
	pretty_env_logger::init();

	let driver = ShaderBuildDriver::builtin();
	let report = driver.run(&mut ProcessLauncher::new());

	let total = report.entries().len();
	info!("{} of {} shaders compiled", report.succeeded(), total);
	if !report.is_clean() {
		println!("{} of {} shaders {}",
			total - report.succeeded(), total, "failed".red());
	}
	Ok(())
}
