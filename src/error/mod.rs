pub mod translator;

/// WearError is the top-level error type for the WeaR translator.
#[derive(thiserror::Error, Debug)]
pub enum WearError {
	/// Internal translator error, should never happen
	#[error("TranslatorInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// A syntax error in the WeaR source
	#[error("{0}")]
	SyntaxError(#[from] translator::TranslateError),
	/// The external C toolchain or the built program failed
	#[error("{0}")]
	Toolchain(String),
}
