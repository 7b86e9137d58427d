/// Translator related errors
#[derive(thiserror::Error, Debug)]
pub enum TranslatorError {
	/// Internal translator error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Syntax errors encountered during translation
	#[error(transparent)]
	TranslateError(#[from] TranslateError),
}

/// A specific syntax error with source position and type.
#[derive(thiserror::Error, Debug)]
#[error("line {line}, column {column}: {type}")]
pub struct TranslateError {
	/// The line number where the error occurred.
	line:   usize,
	/// The column where the error occurred.
	column: usize,
	/// The type of syntax error.
	r#type: TranslateErrorType,
}

impl TranslateError {
	pub fn new(line: usize, column: usize, r#type: TranslateErrorType) -> Self {
		Self { line, column, r#type }
	}

	pub fn line(&self) -> usize { self.line }

	pub fn column(&self) -> usize { self.column }
}

/// Types of syntax errors.
#[derive(Debug)]
pub enum TranslateErrorType {
	/// A mandatory token was missing at a grammar position.
	Expected { expected: String, found: String },
	/// The input ended inside a construct that still needed tokens.
	UnexpectedEndOfInput { expected: String },
}

impl std::fmt::Display for TranslateErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TranslateErrorType::*;
		match self {
			Expected { expected, found } => {
				write!(f, "expected {expected}, found '{found}'")
			}
			UnexpectedEndOfInput { expected } => {
				write!(f, "expected {expected}, but the input ended")
			}
		}
	}
}
