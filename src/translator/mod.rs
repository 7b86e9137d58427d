//! Fused parser and emitter: WeaR has no AST. The translator walks the
//! token sequence once, left to right, and emits C for every construct
//! the moment it is recognized, with one token of lookahead to tell an
//! assignment from a call. Statements end at newlines; blank lines and
//! semicolons are discarded.
//!
//! |Leading token|Translation
//! --|--
//! `var`|`int x = ...;` or `char* x = ...;`, kind recorded in the table
//! `cetak`/`print`|`__wear_print_int(...)` or `__wear_print_str(...)` by expression kind
//! `selama`/`while`|`while (...) { ... }`
//! `jika`/`if`|`if (...) { ... }` with optional `else if`/`else` chain
//! `fungsi`/`function`|hoisted `int name(char* a, ...) { ... }` ahead of `main`
//! `kembalikan`/`return`|`return ...;`
//! `tulis_file`/`write_file`|`__wear_write_file(a, b);`
//! `baca_file`/`read_file`|`__wear_read_file(a);`, result discarded
//! identifier|assignment `x = ...;` or call `f(...);`
//! anything else|skipped
//!
//! Expressions are not parsed by precedence. One linear scan collects
//! (fragment, kind) parts, operators included, and the parts are spliced
//! back together verbatim, so C inherits WeaR's operator precedence.
//! The single exception is a concatenation chain (some text, some `+`,
//! three or more parts), which folds into nested runtime calls because C
//! cannot `+` a `char*`.
//!
//! Function bodies are translated into their own buffer and the buffers
//! are stitched together at the end: header comment, runtime library,
//! hoisted functions, then `main` around the top-level statements.

mod expression;

use std::{iter::Peekable, vec::IntoIter};

use TokenKind::*;
use anyhow::anyhow;

use crate::{
	error::translator::{TranslateError, TranslateErrorType, TranslatorError},
	kinds::{Kind, KindTable},
	runtime::RUNTIME,
	scanner::{Token, TokenKind},
	translator::expression::{Emitted, fold_concat, is_concat_chain},
};

/// Single-pass translator from WeaR tokens to a C document.
pub(crate) struct Translator {
	/// The tokens to translate.
	tokens:       Peekable<IntoIter<Token>>,
	/// Inferred kind of every declared variable, fixed at first declaration.
	kinds:        KindTable,
	/// Function translations, hoisted ahead of the entry point.
	functions:    String,
	/// Current emission depth, in four-space steps.
	indent_level: usize,
}

impl Translator {
	pub fn new(tokens: Vec<Token>) -> Self {
		Self {
			tokens:       tokens.into_iter().peekable(),
			kinds:        KindTable::new(),
			functions:    String::new(),
			indent_level: 1,
		}
	}

	/// Translate the whole token sequence into one C document. Consumes the
	/// translator; every call starts from a fresh table and fresh buffers.
	pub fn translate(mut self) -> Result<String, TranslatorError> {
		let mut body = String::new();
		while !matches!(self.peek()?.kind, Eof) {
			if matches!(self.peek()?.kind, RightBrace) {
				// A close brace with nothing to close; drop it.
				self.advance()?;
				continue;
			}
			self.translate_statement(&mut body)?;
		}
		Ok(self.assemble(&body))
	}

	/// Translate a single statement into `out`.
	fn translate_statement(&mut self, out: &mut String) -> Result<(), TranslatorError> {
		while matches!(self.peek()?.kind, Newline) {
			self.advance()?;
		}
		if matches!(self.peek()?.kind, RightBrace | Eof) {
			return Ok(());
		}
		match self.peek()?.kind {
			Var => self.translate_declaration(out),
			Print => self.translate_print(out),
			While => self.translate_while(out),
			If => {
				out.push_str(&self.indent());
				self.translate_if(out)
			}
			Function => self.translate_function(),
			Return => self.translate_return(out),
			WriteFile => self.translate_write_file(out),
			ReadFile => {
				let call = self.builtin_call("__wear_read_file", 1, Kind::Text, "'(' after 'baca_file'")?;
				self.emit_line(out, &format!("{};", call.code));
				Ok(())
			}
			Identifier => self.translate_identifier_statement(out),
			_ => {
				// Skip tokens no statement starts with.
				self.advance()?;
				Ok(())
			}
		}
	}

	/// `var name = expr`. The expression kind picks the C type and is
	/// recorded; reassignment later never changes it.
	fn translate_declaration(&mut self, out: &mut String) -> Result<(), TranslatorError> {
		self.advance()?; // skip `var`
		let name = self.declared_name()?;
		self.expect(Equal, "'=' after variable name")?;
		let value = self.translate_expression()?;
		if value.kind == Kind::Text {
			self.emit_line(out, &format!("char* {name} = {};", value.code));
			self.kinds.define(&name, Kind::Text);
		} else {
			self.emit_line(out, &format!("int {name} = {};", value.code));
			self.kinds.define(&name, Kind::Integer);
		}
		Ok(())
	}

	fn translate_print(&mut self, out: &mut String) -> Result<(), TranslatorError> {
		self.advance()?; // skip `cetak`
		let value = self.translate_expression()?;
		if value.kind == Kind::Text {
			self.emit_line(out, &format!("__wear_print_str({});", value.code));
		} else {
			self.emit_line(out, &format!("__wear_print_int({});", value.code));
		}
		Ok(())
	}

	fn translate_while(&mut self, out: &mut String) -> Result<(), TranslatorError> {
		self.advance()?; // skip `selama`
		self.expect(LeftParen, "'(' after 'selama'")?;
		let condition = self.translate_expression()?;
		self.expect(RightParen, "')' after condition")?;
		self.emit_line(out, &format!("while ({}) {{", condition.code));
		self.expect(LeftBrace, "'{' to start while body")?;
		self.translate_block(out, "'}' to end while body")?;
		self.emit_line(out, "}");
		Ok(())
	}

	/// Translate an `if` and any trailing `lainnya jika`/`lainnya` chain.
	/// The caller has already written the leading indent (and `else ` when
	/// chaining), so the header goes out bare and chains read `else if`.
	/// `lainnya` only continues a chain when it follows the `}` on the same
	/// line; after a newline it is an ordinary (skipped) token.
	fn translate_if(&mut self, out: &mut String) -> Result<(), TranslatorError> {
		self.advance()?; // skip `jika`
		self.expect(LeftParen, "'(' after 'jika'")?;
		let condition = self.translate_expression()?;
		self.expect(RightParen, "')' after condition")?;
		out.push_str(&format!("if ({}) {{\n", condition.code));
		self.expect(LeftBrace, "'{' to start if body")?;
		self.translate_block(out, "'}' to end if body")?;
		self.emit_line(out, "}");
		if matches!(self.peek()?.kind, Else) {
			self.advance()?;
			if matches!(self.peek()?.kind, If) {
				out.push_str(&self.indent());
				out.push_str("else ");
				return self.translate_if(out);
			}
			self.emit_line(out, "else {");
			self.expect(LeftBrace, "'{' after 'lainnya'")?;
			self.translate_block(out, "'}' to end else body")?;
			self.emit_line(out, "}");
		}
		Ok(())
	}

	/// `fungsi name(a, b) { ... }`. Parameters carry no annotations in WeaR
	/// and are bound as `char*`; the return type is always `int`. The body
	/// is translated into the hoisted-functions buffer at depth one.
	fn translate_function(&mut self) -> Result<(), TranslatorError> {
		self.advance()?; // skip `fungsi`
		let name = self.declared_name()?;
		self.expect(LeftParen, "'(' after function name")?;
		let mut params: Vec<String> = Vec::new();
		while !matches!(self.peek()?.kind, RightParen | Eof) {
			if !params.is_empty() {
				self.expect(Comma, "',' between parameters")?;
			}
			if matches!(self.peek()?.kind, Identifier) {
				params.push(self.advance()?.lexeme);
			} else {
				// Let the close-paren check report the stray token.
				break;
			}
		}
		self.expect(RightParen, "')' after parameters")?;

		let signature = params.iter().map(|p| format!("char* {p}")).collect::<Vec<_>>().join(", ");
		self.expect(LeftBrace, "'{' to start function body")?;
		let mut body = String::new();
		let previous_indent = self.indent_level;
		self.indent_level = 0;
		let translated = self.translate_block(&mut body, "'}' to end function body");
		self.indent_level = previous_indent;
		translated?;

		self.functions.push_str(&format!("int {name}({signature}) {{\n"));
		self.functions.push_str(&body);
		self.functions.push_str("}\n\n");
		Ok(())
	}

	fn translate_return(&mut self, out: &mut String) -> Result<(), TranslatorError> {
		self.advance()?; // skip `kembalikan`
		let value = self.translate_expression()?;
		self.emit_line(out, &format!("return {};", value.code));
		Ok(())
	}

	fn translate_write_file(&mut self, out: &mut String) -> Result<(), TranslatorError> {
		self.advance()?; // skip `tulis_file`
		self.expect(LeftParen, "'(' after 'tulis_file'")?;
		let filename = self.translate_expression()?;
		self.expect(Comma, "',' between arguments")?;
		let content = self.translate_expression()?;
		self.expect(RightParen, "')'")?;
		self.emit_line(out, &format!("__wear_write_file({}, {});", filename.code, content.code));
		Ok(())
	}

	/// An identifier leads either an assignment or a call statement. A bare
	/// identifier with neither `=` nor `(` after it translates to nothing.
	fn translate_identifier_statement(&mut self, out: &mut String) -> Result<(), TranslatorError> {
		let name = self.advance()?.lexeme;
		if matches!(self.peek()?.kind, Equal) {
			self.advance()?;
			let value = self.translate_expression()?;
			self.emit_line(out, &format!("{name} = {};", value.code));
		} else if matches!(self.peek()?.kind, LeftParen) {
			self.advance()?;
			let arguments = self.translate_arguments()?;
			self.emit_line(out, &format!("{name}({arguments});"));
		}
		Ok(())
	}

	/// Translate the statements of a `{ ... }` body into `out`, one indent
	/// level deeper, and consume the closing brace. Running out of input
	/// inside a block is fatal.
	fn translate_block(&mut self, out: &mut String, closing: &'static str) -> Result<(), TranslatorError> {
		self.indent_level += 1;
		while !matches!(self.peek()?.kind, RightBrace | Eof) {
			self.translate_statement(out)?;
		}
		self.indent_level -= 1;
		self.expect(RightBrace, closing)?;
		Ok(())
	}

	/// Translate a comma-separated argument list; the caller consumed the
	/// `(`, the closing `)` is consumed here.
	fn translate_arguments(&mut self) -> Result<String, TranslatorError> {
		let mut arguments = String::new();
		let mut first = true;
		while !matches!(self.peek()?.kind, RightParen | Eof) {
			if !first {
				self.expect(Comma, "','")?;
				arguments.push_str(", ");
			}
			first = false;
			let argument = self.translate_expression()?;
			arguments.push_str(&argument.code);
		}
		self.expect(RightParen, "')'")?;
		Ok(arguments)
	}

	/// Translate one expression: scan parts up to a statement boundary,
	/// then either fold a concatenation chain or splice the fragments back
	/// together unchanged. Parentheses are tracked so a `)` or `,` inside a
	/// sub-expression is not mistaken for a terminator.
	fn translate_expression(&mut self) -> Result<Emitted, TranslatorError> {
		let mut parts: Vec<Emitted> = Vec::new();
		let mut paren_depth = 0usize;

		loop {
			let token = self.peek()?;
			if matches!(token.kind, Eof) {
				break;
			}
			if paren_depth == 0
				&& matches!(token.kind, RightParen | LeftBrace | RightBrace | Comma | Semicolon | Newline)
			{
				break;
			}
			match token.kind {
				Text => {
					let value = self.advance()?.lexeme;
					parts.push(Emitted::new(format!("\"{}\"", value.replace('"', "\\\"")), Kind::Text));
				}
				Integer => parts.push(Emitted::new(self.advance()?.lexeme, Kind::Integer)),
				ReadFile => {
					parts.push(self.builtin_call("__wear_read_file", 1, Kind::Text, "'(' after 'baca_file'")?)
				}
				StrEq => parts.push(self.builtin_call("__wear_streq", 2, Kind::Integer, "'(' after 'sama'")?),
				StrLen => {
					parts.push(self.builtin_call("__wear_strlen", 1, Kind::Integer, "'(' after 'panjang'")?)
				}
				CharAt => {
					parts.push(self.builtin_call("__wear_char_at", 2, Kind::Text, "'(' after 'char_at'")?)
				}
				IsQuote => {
					parts.push(self.builtin_call("__wear_is_quote", 1, Kind::Integer, "'(' after 'is_quote'")?)
				}
				QuoteChar => {
					parts.push(self.builtin_call("__wear_quote_char", 0, Kind::Text, "'(' after 'quote_char'")?)
				}
				IsNewline => parts.push(self.builtin_call(
					"__wear_is_newline",
					1,
					Kind::Integer,
					"'(' after 'is_newline'",
				)?),
				NewlineChar => parts.push(self.builtin_call(
					"__wear_newline_char",
					0,
					Kind::Text,
					"'(' after 'newline_char'",
				)?),
				Identifier => {
					let name = self.advance()?.lexeme;
					if matches!(self.peek()?.kind, LeftParen) {
						self.advance()?;
						let arguments = self.translate_arguments()?;
						// Calls are assumed integer-valued; WeaR functions
						// cannot return text through ordinary translation.
						parts.push(Emitted::new(format!("{name}({arguments})"), Kind::Integer));
					} else {
						let kind = self.kinds.kind_of(&name);
						parts.push(Emitted::new(name, kind));
					}
				}
				Plus | Minus | Star | Slash | Less | Greater | LessEqual | GreaterEqual | EqualEqual
				| BangEqual => {
					parts.push(Emitted::new(self.advance()?.lexeme, Kind::Unknown));
				}
				LeftParen => {
					paren_depth += 1;
					parts.push(Emitted::new(self.advance()?.lexeme, Kind::Unknown));
				}
				RightParen => {
					paren_depth -= 1;
					parts.push(Emitted::new(self.advance()?.lexeme, Kind::Unknown));
				}
				_ => break,
			}
		}

		if is_concat_chain(&parts) {
			return Ok(fold_concat(&parts));
		}

		let mut code = String::new();
		let mut kind = Kind::Integer;
		for part in &parts {
			code.push_str(&part.code);
			if part.kind == Kind::Text {
				kind = Kind::Text;
			}
		}
		Ok(Emitted::new(code, kind))
	}

	/// Translate a builtin call with a fixed argument count and a statically
	/// known result kind. The builtin keyword is the current token.
	fn builtin_call(
		&mut self,
		c_name: &'static str,
		arity: usize,
		kind: Kind,
		open: &'static str,
	) -> Result<Emitted, TranslatorError> {
		self.advance()?; // skip the builtin keyword
		self.expect(LeftParen, open)?;
		let mut arguments = String::new();
		for i in 0..arity {
			if i > 0 {
				self.expect(Comma, "',' between arguments")?;
				arguments.push_str(", ");
			}
			let argument = self.translate_expression()?;
			arguments.push_str(&argument.code);
		}
		self.expect(RightParen, "')'")?;
		Ok(Emitted::new(format!("{c_name}({arguments})"), kind))
	}

	/// The next token's lexeme, taken as a declared name. Any token will
	/// do except the `Eof` sentinel, which stays in the stream so the
	/// `expect` that follows reports the truncated declaration at its
	/// position instead of running the stream dry.
	fn declared_name(&mut self) -> Result<String, TranslatorError> {
		if matches!(self.peek()?.kind, Eof) {
			return Ok(String::new());
		}
		Ok(self.advance()?.lexeme)
	}

	/// Consume the next token if it has the expected kind, or fail with a
	/// syntax error at the offending token's position.
	fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, TranslatorError> {
		if self.peek()?.kind == kind {
			return self.advance();
		}
		let token = self.peek()?;
		let r#type = if matches!(token.kind, Eof) {
			TranslateErrorType::UnexpectedEndOfInput { expected: expected.to_string() }
		} else {
			TranslateErrorType::Expected { expected: expected.to_string(), found: token.lexeme.clone() }
		};
		Err(TranslateError::new(token.line, token.column, r#type).into())
	}

	/// Advance to the next token.
	fn advance(&mut self) -> Result<Token, TranslatorError> {
		self.tokens.next().ok_or_else(|| anyhow!("Ran out of tokens past end of input").into())
	}

	/// Peek at the current token.
	fn peek(&mut self) -> Result<&Token, TranslatorError> {
		self.tokens.peek().ok_or_else(|| anyhow!("Ran out of tokens past end of input").into())
	}

	fn indent(&self) -> String { "    ".repeat(self.indent_level) }

	fn emit_line(&self, out: &mut String, code: &str) {
		out.push_str(&self.indent());
		out.push_str(code);
		out.push('\n');
	}

	/// Stitch the final document together: header comment, runtime library,
	/// hoisted functions, then the entry point around the top-level body.
	fn assemble(&self, body: &str) -> String {
		let mut document = String::new();
		document.push_str("/* Generated by wearc */\n");
		document.push_str(RUNTIME);
		if !self.functions.is_empty() {
			document.push_str("// User-defined functions\n");
			document.push_str(&self.functions);
		}
		document.push_str("int main(int argc, char* argv[]) {\n");
		document.push_str(body);
		document.push_str("\n    return 0;\n");
		document.push_str("}\n");
		document
	}
}
