use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

// Stands in for glslangValidator: checks the argument shape, then writes a
// tagged copy of the input to the output path.
const FAKE_COMPILER : &str = r#"#!/bin/sh
[ "$1" = "-V" ] && [ "$3" = "-o" ] || exit 64
[ -f "$2" ] || { echo "cannot open $2" >&2; exit 2; }
echo "$2" >> calls.log
{ echo "SPIRV"; cat "$2"; } > "$4"
"#;

pub fn install_fake_compiler(bin_dir: &Path, name: &str) -> PathBuf {
	fs::create_dir_all(bin_dir).unwrap();
	let path = bin_dir.join(name);
	fs::write(&path, FAKE_COMPILER).unwrap();
	fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
	path
}

pub fn write_sources(dir: &Path, names: &[&str]) {
	for name in names {
		fs::write(dir.join(name), format!("// {}\nvoid main() {{}}\n", name)).unwrap();
	}
}
