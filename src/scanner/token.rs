/// A token produced by the scanner
#[derive(Debug, Clone)]
pub(crate) struct Token {
	pub kind:   TokenKind,
	pub lexeme: String,
	pub line:   usize,
	pub column: usize,
}

impl Token {
	pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
		Self { kind, lexeme: lexeme.into(), line, column }
	}
}

/// The different kinds of WeaR tokens. Keywords come in two spellings,
/// Indonesian and English, and both map to the same kind here so the
/// translator never sees which one was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
	/// Variable declaration keyword `var`.
	Var,
	/// Print keyword `cetak` / `print`.
	Print,
	/// Loop keyword `selama` / `while`.
	While,
	/// Conditional keyword `jika` / `if`.
	If,
	/// Alternative-branch keyword `lainnya` / `else`.
	Else,
	/// Function declaration keyword `fungsi` / `function`.
	Function,
	/// Return keyword `kembalikan` / `return`.
	Return,
	/// File-read builtin `baca_file` / `read_file`.
	ReadFile,
	/// File-write builtin `tulis_file` / `write_file`.
	WriteFile,
	/// String-equality builtin `sama` / `streq`.
	StrEq,
	/// String-length builtin `panjang` / `strlen`.
	StrLen,
	/// Character-at-index builtin `char_at`.
	CharAt,
	/// Quote-test builtin `is_quote`.
	IsQuote,
	/// Quote-constant builtin `quote_char`.
	QuoteChar,
	/// Newline-test builtin `is_newline`.
	IsNewline,
	/// Newline-constant builtin `newline_char`.
	NewlineChar,
	/// Identifier, e.g. variable or function name.
	Identifier,
	/// Integer literal, e.g. `123`.
	Integer,
	/// Text literal, e.g. `"halo"`. The lexeme holds the unescaped value
	/// without the surrounding quotes.
	Text,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
	/// Equal `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Bang equal `!=`.
	BangEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Left bracket `[`. Scanned but not part of any statement form.
	LeftBracket,
	/// Right bracket `]`. Scanned but not part of any statement form.
	RightBracket,
	/// Comma `,`.
	Comma,
	/// Semicolon `;`. Statements end at newlines, a semicolon is tolerated
	/// and discarded.
	Semicolon,
	/// Newline, the statement terminator.
	Newline,
	/// Any character the scanner does not recognize. Kept in the stream,
	/// the translator decides whether it matters.
	Unknown,
	/// End of input.
	Eof,
}

impl TokenKind {
	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"var" => TokenKind::Var,
			"cetak" | "print" => TokenKind::Print,
			"selama" | "while" => TokenKind::While,
			"jika" | "if" => TokenKind::If,
			"lainnya" | "else" => TokenKind::Else,
			"fungsi" | "function" => TokenKind::Function,
			"kembalikan" | "return" => TokenKind::Return,
			"baca_file" | "read_file" => TokenKind::ReadFile,
			"tulis_file" | "write_file" => TokenKind::WriteFile,
			"sama" | "streq" => TokenKind::StrEq,
			"panjang" | "strlen" => TokenKind::StrLen,
			"char_at" => TokenKind::CharAt,
			"is_quote" => TokenKind::IsQuote,
			"quote_char" => TokenKind::QuoteChar,
			"is_newline" => TokenKind::IsNewline,
			"newline_char" => TokenKind::NewlineChar,
			_ => TokenKind::Identifier,
		}
	}
}
