//! # How WeaR source text becomes a C program
//!
//! User's source code: `var salam = "halo " + nama`

//! ## Scanning
//!
//! The scanner converts characters into tokens: keywords `var`, operators
//! `+`, literals `"halo "` and `123`, identifiers `nama`. WeaR keywords
//! are bilingual (`cetak`/`print`, `selama`/`while`, ...) and both
//! spellings collapse to one token kind here, so the rest of the pipeline
//! never knows which language the program was written in.
//!
//! Unlike most languages, the newline is not whitespace: WeaR has no
//! mandatory `;`, a line break ends the statement. So the scanner skips
//! spaces and comments but keeps newlines as tokens. It also never fails;
//! a character it cannot place still becomes a token and flows on.

//! ## Translating, without an AST
//!
//! This is a `single-pass compiler`: parsing, the little type analysis
//! WeaR needs, and code generation are interleaved, and no syntax tree is
//! ever allocated. The translator looks at the leading token of each
//! statement, consumes the construct, and immediately appends C text to
//! an output buffer. Block bodies recurse back into the same statement
//! dispatcher. Nothing previously translated is ever revisited, which is
//! exactly what makes the approach fit: WeaR is small enough that no
//! global analysis wants the whole program in memory.
//!
//! There is no expression grammar in the usual sense either. An
//! expression is scanned linearly into (fragment, kind) parts and the
//! fragments are spliced back together verbatim, so the generated C
//! reuses C's own operator precedence instead of reimplementing it.

//! ## Two kinds
//!
//! The output language is static, so every WeaR value must land on `int`
//! or `char*`. Inference is a binary classification: literals and builtin
//! calls have known kinds, a declaration fixes its variable's kind in a
//! flat table, and everything unresolved defaults to integer. The one
//! place the kind changes what is emitted is concatenation: `"halo " +
//! nama` cannot stay a `+` in C, so chains mixing text fold into nested
//! runtime calls (`__wear_concat`, `__wear_concat_str_int`, ...).

//! ## Assembly
//!
//! The translator keeps two buffers, one for hoisted function bodies and
//! one for top-level statements. The final document is stitched together
//! once: a header comment, the fixed C runtime library, the functions,
//! then `int main` wrapping the top-level statements. The runtime is
//! injected verbatim; the translator only ever calls into it by name.

pub mod cli;
mod error;
mod kinds;
mod runtime;
mod scanner;
mod translator;
mod wearc;

pub use error::{WearError, translator::{TranslateError, TranslateErrorType, TranslatorError}};
pub use wearc::Wearc;
