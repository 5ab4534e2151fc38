use std::fmt;
use std::process::Command;

use crate::shaders::{OUTPUT_FLAG, SPV_SUFFIX, VULKAN_FLAG};

/// One `<tool> -V <input> -o <input>.spv` command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerInvocation {
	program : String,
	input : String,
	output : String,
}

impl CompilerInvocation {
	pub fn new(program: &str, input: &str) -> Self {
		// appended, so "quad.frag" becomes "quad.frag.spv"
		let output = format!("{}{}", input, SPV_SUFFIX);
		Self { program: program.to_owned(), input: input.to_owned(), output }
	}

	pub fn program(&self) -> &str {
		&self.program
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn output(&self) -> &str {
		&self.output
	}

	pub fn args(&self) -> [&str; 4] {
		[VULKAN_FLAG, &self.input, OUTPUT_FLAG, &self.output]
	}

	/// Relative paths resolve against whatever directory the command runs in.
	pub fn command(&self) -> Command {
		let mut command = Command::new(&self.program);
		command.args(self.args());
		command
	}
}

impl fmt::Display for CompilerInvocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.program, self.args().join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::ffi::OsStr;

	#[test]
	fn output_appends_spv_suffix() {
		let invocation = CompilerInvocation::new("glslangValidator", "simple.vert");
		assert_eq!(invocation.output(), "simple.vert.spv");
		assert_eq!(invocation.args(), ["-V", "simple.vert", "-o", "simple.vert.spv"]);
	}

	#[test]
	fn suffix_is_not_an_extension_swap() {
		let invocation = CompilerInvocation::new("glslangValidator", "bbox_inst.vert");
		assert_eq!(invocation.output(), "bbox_inst.vert.spv");
	}

	#[test]
	fn command_carries_program_and_args() {
		let invocation = CompilerInvocation::new("glslangValidator", "quad.frag");
		let command = invocation.command();
		assert_eq!(command.get_program(), OsStr::new("glslangValidator"));
		let args : Vec<_> = command.get_args().collect();
		assert_eq!(args, ["-V", "quad.frag", "-o", "quad.frag.spv"]);
		assert!(command.get_current_dir().is_none());
	}

	#[test]
	fn display_is_the_command_line() {
		let invocation = CompilerInvocation::new("glslangValidator", "bbox.frag");
		assert_eq!(invocation.to_string(), "glslangValidator -V bbox.frag -o bbox.frag.spv");
	}
}
