//! Turns WeaR source text into a flat token sequence.
//!
//! WeaR is newline-terminated: a line break ends a statement the way `;`
//! does in C, so unlike most scanners this one does not throw newlines
//! away. Spaces, tabs and carriage returns are skipped, `//` comments are
//! discarded up to the end of the line, and every other character becomes
//! a token. There is deliberately no scan error: a character the scanner
//! cannot classify still becomes a token (of kind `Unknown`) and it is the
//! translator's business to skip or reject it. This keeps scanning total
//! and pushes all diagnostics to one place.
//!
//! Keywords are bilingual. `cetak` and `print` are the same keyword, as
//! are `selama`/`while`, `jika`/`if` and so on; the scanner resolves the
//! spelling and downstream passes only ever see the kind. We can't tell a
//! reserved word from an identifier until the end of the run of word
//! characters (`maximal munch`), so identifiers are scanned first and
//! looked up in the keyword table afterwards.
//!
//! Text literals know two escapes. `\"` is unescaped at scan time, the
//! lexeme holds a bare quote. `\n` is *not* unescaped: both characters
//! pass through so the later emission of the lexeme into C source keeps a
//! working newline escape. An unterminated literal stops at end of input
//! without complaint.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenKind::*;
pub(crate) use token::*;

/// A scanner for WeaR source code
pub(crate) struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Line `cursor` is on, so tokens know their location
	line:        usize,
	/// Column `cursor` is on, 1-based; a newline resets it
	column:      usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, column: 1 }
	}

	/// Scan all tokens from the source code. Always succeeds; the sequence
	/// ends with an `Eof` token.
	pub fn scan_tokens(mut self) -> Vec<Token> {
		let mut tokens = Vec::new();
		loop {
			self.skip_whitespace();
			let Some(&(index, _)) = self.source_iter.peek() else { break };
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			let line = self.line;
			let column = self.column;
			let Some(next_char) = self.advance() else { break };
			#[rustfmt::skip]
			let (kind, lexeme) = match next_char {
				'(' => (LeftParen, self.lexeme()),
				')' => (RightParen, self.lexeme()),
				'{' => (LeftBrace, self.lexeme()),
				'}' => (RightBrace, self.lexeme()),
				'[' => (LeftBracket, self.lexeme()),
				']' => (RightBracket, self.lexeme()),
				',' => (Comma, self.lexeme()),
				';' => (Semicolon, self.lexeme()),
				'+' => (Plus, self.lexeme()),
				'-' => (Minus, self.lexeme()),
				'*' => (Star, self.lexeme()),
				'!' => if self.match_next('=') { (BangEqual, self.lexeme()) } else { (Unknown, self.lexeme()) },
				'=' => if self.match_next('=') { (EqualEqual, self.lexeme()) } else { (Equal, self.lexeme()) },
				'<' => if self.match_next('=') { (LessEqual, self.lexeme()) } else { (Less, self.lexeme()) },
				'>' => if self.match_next('=') { (GreaterEqual, self.lexeme()) } else { (Greater, self.lexeme()) },
				'/' => if self.match_next('/') {
					self.skip_line_comment();
					continue;
				} else { (Slash, self.lexeme()) },
				'\n' => (Newline, String::from(r"\n")),
				'"' => (Text, self.text_literal()),
				c if c.is_ascii_digit() => { self.integer_literal(); (Integer, self.lexeme()) }
				c if c.is_ascii_alphabetic() || c == '_' => {
					self.identifier();
					let text = self.lexeme();
					(TokenKind::keyword_or_identifier(&text), text)
				}
				_ => (Unknown, self.lexeme()),
			};

			tokens.push(Token::new(kind, lexeme, line, column));
		}
		tokens.push(Token::new(Eof, "", self.line, self.column));
		tokens
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		if c == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// The source slice of the lexeme scanned so far
	fn lexeme(&self) -> String { self.source[self.start..self.cursor].to_string() }

	/// Skip insignificant whitespace; newlines are statement terminators
	/// and stay in the stream.
	fn skip_whitespace(&mut self) {
		while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
			self.advance();
		}
	}

	/// Skip a `//` comment up to, not including, the terminating newline
	fn skip_line_comment(&mut self) {
		while self.peek().is_some_and(|c| c != '\n') {
			self.advance();
		}
	}

	/// Scan a text literal, the opening quote already consumed. Returns the
	/// unescaped value: `\"` collapses to a quote, `\n` stays two characters.
	fn text_literal(&mut self) -> String {
		let mut value = String::new();
		loop {
			match self.peek() {
				None | Some('"') => break,
				Some('\\') if self.peek_second() == Some('"') => {
					self.advance();
					self.advance();
					value.push('"');
				}
				Some('\\') if self.peek_second() == Some('n') => {
					self.advance();
					self.advance();
					value.push_str(r"\n");
				}
				Some(c) => {
					value.push(c);
					self.advance();
				}
			}
		}
		if self.peek() == Some('"') {
			self.advance(); // The closing "
		}
		value
	}

	/// Scan the remaining digits of an integer literal
	fn integer_literal(&mut self) {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
	}

	/// Scan the remaining characters of an identifier or keyword
	fn identifier(&mut self) {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scan(input: &str) -> Vec<Token> { Scanner::new(input).scan_tokens() }

	fn kinds(input: &str) -> Vec<TokenKind> { scan(input).into_iter().map(|t| t.kind).collect() }

	#[test]
	fn scan_declaration() {
		assert_eq!(kinds("var x = 5"), vec![Var, Identifier, Equal, Integer, Eof]);
	}

	#[test]
	fn scan_empty_input() {
		let tokens = scan("");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, Eof);
		assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
	}

	#[test]
	fn scan_newline_is_a_token() {
		let tokens = scan("a\nb");
		assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![
			Identifier, Newline, Identifier, Eof
		]);
		assert_eq!(tokens[1].lexeme, r"\n");
	}

	#[test]
	fn scan_operators() {
		assert_eq!(kinds("+ - * /"), vec![Plus, Minus, Star, Slash, Eof]);
		assert_eq!(kinds("== != <= >="), vec![EqualEqual, BangEqual, LessEqual, GreaterEqual, Eof]);
		assert_eq!(kinds("= < >"), vec![Equal, Less, Greater, Eof]);
		assert_eq!(kinds("(){};,"), vec![LeftParen, RightParen, LeftBrace, RightBrace, Semicolon, Comma, Eof]);
		assert_eq!(kinds("[]"), vec![LeftBracket, RightBracket, Eof]);
	}

	#[test]
	fn scan_lone_bang_is_unknown() {
		assert_eq!(kinds("!"), vec![Unknown, Eof]);
		assert_eq!(kinds("!="), vec![BangEqual, Eof]);
	}

	#[test]
	fn scan_unrecognized_characters_become_tokens() {
		let tokens = scan("@");
		assert_eq!(tokens[0].kind, Unknown);
		assert_eq!(tokens[0].lexeme, "@");
	}

	#[test]
	fn scan_comments_are_discarded() {
		assert_eq!(kinds("// a comment\nvar"), vec![Newline, Var, Eof]);
		assert_eq!(kinds("var x // trailing"), vec![Var, Identifier, Eof]);
	}

	#[test]
	fn scan_keywords_both_spellings() {
		assert_eq!(kinds("cetak x"), kinds("print x"));
		assert_eq!(kinds("selama jika lainnya"), vec![While, If, Else, Eof]);
		assert_eq!(kinds("while if else"), vec![While, If, Else, Eof]);
	}

	#[test]
	fn scan_integer_literals() {
		let tokens = scan("123 45");
		assert_eq!(tokens[0].lexeme, "123");
		assert_eq!(tokens[1].lexeme, "45");
		assert_eq!(tokens[0].kind, Integer);
	}

	#[test]
	fn scan_text_literal() {
		let tokens = scan(r#""halo dunia""#);
		assert_eq!(tokens[0].kind, Text);
		assert_eq!(tokens[0].lexeme, "halo dunia");
	}

	#[test]
	fn scan_text_literal_unescapes_quotes() {
		let tokens = scan(r#""say \"hi\"""#);
		assert_eq!(tokens.len(), 2);
		assert_eq!(tokens[0].lexeme, r#"say "hi""#);
	}

	#[test]
	fn scan_text_literal_keeps_newline_escape() {
		let tokens = scan(r#""a\nb""#);
		assert_eq!(tokens[0].lexeme, r"a\nb");
	}

	#[test]
	fn scan_unterminated_text_literal() {
		let tokens = scan(r#""abc"#);
		assert_eq!(tokens[0].kind, Text);
		assert_eq!(tokens[0].lexeme, "abc");
		assert_eq!(tokens[1].kind, Eof);
	}

	#[test]
	fn scan_raw_newline_inside_text_counts_lines() {
		let tokens = scan("\"a\nb\"\nc");
		assert_eq!(tokens[0].lexeme, "a\nb");
		let c = tokens.iter().find(|t| t.lexeme == "c").unwrap();
		assert_eq!(c.line, 3);
	}

	#[test]
	fn scan_positions() {
		let tokens = scan("var x\ncetak");
		assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
		assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
		assert_eq!((tokens[2].line, tokens[2].column), (1, 6));
		assert_eq!((tokens[3].line, tokens[3].column), (2, 1));
	}
}
