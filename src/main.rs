use std::{fs, path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use palc::Parser;
use wearc::{WearError, Wearc, cli::Cli};

fn main() {
	let wearc = Wearc;

	if let Err(e) = translate_command(&wearc, Cli::parse()) {
		eprintln!("{}", failure(&e));
		exit(1);
	}
}

/// The stderr line for a failed invocation, naming the stage that failed.
fn failure(e: &WearError) -> String {
	match e {
		WearError::Toolchain(_) => format!("Failed build or run: {e}"),
		_ => format!("Failed translate: {e}"),
	}
}

fn translate_command(wearc: &Wearc, cli: Cli) -> Result<(), WearError> {
	println!("[wearc] reading: {}", cli.input.display());
	let document = wearc.translate_file(&cli.input)?;

	let output = cli.output.unwrap_or_else(|| cli.input.with_extension("c"));
	fs::write(&output, &document).context("Failed write generated C file")?;
	println!("[wearc] generated: {}", output.display());

	if cli.compile || cli.run {
		let executable = executable_path(&output);
		wearc.build(&output, &executable)?;
		println!("[wearc] built: {}", executable.display());
		if cli.run {
			wearc.run(&executable)?;
		}
	}
	Ok(())
}

/// The executable path for a generated C file: same name without the
/// extension, plus `.exe` on Windows.
fn executable_path(c_file: &Path) -> PathBuf {
	if cfg!(windows) { c_file.with_extension("exe") } else { c_file.with_extension("") }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failure_lines_name_the_stage() {
		let toolchain = WearError::Toolchain("gcc failed with exit status: 1".to_string());
		assert_eq!(failure(&toolchain), "Failed build or run: gcc failed with exit status: 1");

		let syntax = Wearc.translate("jika (").unwrap_err();
		assert!(failure(&syntax).starts_with("Failed translate: line 1"));
	}

	#[test]
	fn executable_path_strips_the_extension() {
		let path = executable_path(Path::new("demo/hello.c"));
		if cfg!(windows) {
			assert_eq!(path, Path::new("demo/hello.exe"));
		} else {
			assert_eq!(path, Path::new("demo/hello"));
		}
	}
}
