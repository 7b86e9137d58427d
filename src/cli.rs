use std::path::PathBuf;

use palc::Parser;

#[derive(Parser)]
#[command(name = "wearc", after_long_help = "This is the WeaR Lang to C translator.")]
pub struct Cli {
	/// WeaR source file to translate
	pub input: PathBuf,

	/// Where to write the generated C (default: the input with a `.c` extension)
	#[arg(short, long)]
	pub output: Option<PathBuf>,

	/// Compile the generated C with gcc
	#[arg(long)]
	pub compile: bool,

	/// Compile and run the generated program
	#[arg(long)]
	pub run: bool,
}
