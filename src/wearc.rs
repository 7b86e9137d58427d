use std::{fs::read_to_string, path::Path, process::Command};

use anyhow::Context;

use crate::{WearError, error::translator::TranslatorError, scanner::Scanner, translator::Translator};

/// Wearc is the driver for the WeaR to C pipeline: translate a source
/// file, and optionally hand the result to gcc and run what comes out.
pub struct Wearc;

impl Wearc {
	/// Translate a WeaR source file into a C document.
	pub fn translate_file<P: AsRef<Path>>(&self, path: P) -> Result<String, WearError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.translate(&source)
	}

	/// Translate WeaR source text into a C document. Each call scans and
	/// translates with fresh state; nothing carries over between calls.
	pub fn translate(&self, source: &str) -> Result<String, WearError> {
		let tokens = Scanner::new(source).scan_tokens();
		match Translator::new(tokens).translate() {
			Ok(document) => Ok(document),
			Err(TranslatorError::InternalError(e)) => Err(e.into()),
			Err(TranslatorError::TranslateError(e)) => Err(WearError::SyntaxError(e)),
		}
	}

	/// Compile a generated C file with gcc.
	pub fn build(&self, c_file: &Path, executable: &Path) -> Result<(), WearError> {
		println!("[wearc] compiling: gcc -O2 -o {} {}", executable.display(), c_file.display());
		let status = Command::new("gcc")
			.arg("-O2")
			.arg("-o")
			.arg(executable)
			.arg(c_file)
			.status()
			.context("Failed run gcc")?;
		if !status.success() {
			return Err(WearError::Toolchain(format!("gcc failed with {status}")));
		}
		Ok(())
	}

	/// Run a freshly built executable and surface its exit status.
	pub fn run(&self, executable: &Path) -> Result<(), WearError> {
		// A bare file name would be resolved on PATH instead of here.
		let path = if executable.components().count() == 1 {
			Path::new(".").join(executable)
		} else {
			executable.to_path_buf()
		};
		println!("[wearc] running: {}", path.display());
		println!("----------------------------------------");
		let status = Command::new(&path).status().context("Failed run the built program")?;
		if !status.success() {
			return Err(WearError::Toolchain(format!("program exited with {status}")));
		}
		Ok(())
	}
}
