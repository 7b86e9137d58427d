use crate::kinds::Kind;

/// A translated expression fragment: the C code plus its inferred kind.
/// Lives only as long as the statement being translated.
#[derive(Debug, Clone)]
pub(crate) struct Emitted {
	pub code: String,
	pub kind: Kind,
}

impl Emitted {
	pub fn new(code: impl Into<String>, kind: Kind) -> Self { Self { code: code.into(), kind } }
}

/// Whether the collected parts form a concatenation chain: at least one
/// text part, at least one `+`, and three or more parts in total. Anything
/// short of that is spliced through as plain arithmetic.
pub(crate) fn is_concat_chain(parts: &[Emitted]) -> bool {
	let has_text = parts.iter().any(|p| p.kind == Kind::Text);
	let has_plus = parts.iter().any(|p| p.code == "+");
	has_text && has_plus && parts.len() >= 3
}

/// Left-fold a concatenation chain into nested runtime calls. Operator and
/// parenthesis fragments (kind `Unknown`) are dropped; only the remaining
/// operands take part. Each pairwise step picks the runtime helper from the
/// two operand kinds, and the running kind turns `Text` as soon as a text
/// operand is folded in.
pub(crate) fn fold_concat(parts: &[Emitted]) -> Emitted {
	let operands: Vec<&Emitted> = parts.iter().filter(|p| p.kind != Kind::Unknown).collect();
	let Some(first) = operands.first() else {
		return Emitted::new("\"\"", Kind::Text);
	};
	let mut code = first.code.clone();
	let mut kind = first.kind;
	for operand in &operands[1..] {
		code = match (kind, operand.kind) {
			(Kind::Text, Kind::Text) => format!("__wear_concat({code}, {})", operand.code),
			(Kind::Text, _) => format!("__wear_concat_str_int({code}, {})", operand.code),
			(_, Kind::Text) => format!("__wear_concat_int_str({code}, {})", operand.code),
			_ => format!("({code} + {})", operand.code),
		};
		if operand.kind == Kind::Text {
			kind = Kind::Text;
		}
	}
	Emitted::new(code, kind)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text(code: &str) -> Emitted { Emitted::new(code, Kind::Text) }

	fn integer(code: &str) -> Emitted { Emitted::new(code, Kind::Integer) }

	fn plus() -> Emitted { Emitted::new("+", Kind::Unknown) }

	#[test]
	fn chain_needs_text_plus_and_three_parts() {
		assert!(is_concat_chain(&[text("\"a\""), plus(), integer("1")]));
		assert!(!is_concat_chain(&[integer("1"), plus(), integer("2")]));
		assert!(!is_concat_chain(&[text("\"a\""), text("\"b\"")]));
		assert!(!is_concat_chain(&[text("\"a\"")]));
	}

	#[test]
	fn fold_two_texts() {
		let folded = fold_concat(&[text("\"a\""), plus(), text("\"b\"")]);
		assert_eq!(folded.code, "__wear_concat(\"a\", \"b\")");
		assert_eq!(folded.kind, Kind::Text);
	}

	#[test]
	fn fold_text_then_integer() {
		let folded = fold_concat(&[text("\"a\""), plus(), integer("1")]);
		assert_eq!(folded.code, "__wear_concat_str_int(\"a\", 1)");
		assert_eq!(folded.kind, Kind::Text);
	}

	#[test]
	fn fold_integer_prefix_stays_arithmetic_until_text() {
		let parts = [integer("1"), plus(), integer("2"), plus(), text("\"a\"")];
		let folded = fold_concat(&parts);
		assert_eq!(folded.code, "__wear_concat_int_str((1 + 2), \"a\")");
		assert_eq!(folded.kind, Kind::Text);
	}

	#[test]
	fn fold_nests_left_to_right() {
		let parts = [text("\"a\""), plus(), text("\"b\""), plus(), integer("1"), plus(), text("\"c\"")];
		let folded = fold_concat(&parts);
		assert_eq!(
			folded.code,
			"__wear_concat(__wear_concat_str_int(__wear_concat(\"a\", \"b\"), 1), \"c\")"
		);
	}

	#[test]
	fn fold_single_operand_is_unwrapped() {
		let folded = fold_concat(&[text("\"a\""), plus()]);
		assert_eq!(folded.code, "\"a\"");
		assert_eq!(folded.kind, Kind::Text);
	}

	#[test]
	fn fold_without_operands_yields_empty_text() {
		let folded = fold_concat(&[plus()]);
		assert_eq!(folded.code, "\"\"");
		assert_eq!(folded.kind, Kind::Text);
	}
}
