//! The two-valued type model of WeaR.
//!
//! Every value in a generated program is either an `int` or a `char*`,
//! so inference reduces to a binary classification. The table is flat
//! and shared by the whole translation unit: function bodies do not get
//! their own scope, a declaration anywhere fixes the name's kind
//! everywhere. Reassignment does not re-infer; only the first `var`
//! declaration writes the table.

use std::collections::HashMap;

/// The inferred classification of an expression or variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
	/// An `int` in the generated program.
	Integer,
	/// A `char*` in the generated program.
	Text,
	/// Not yet resolved: raw operator and parenthesis fragments carry this
	/// until the surrounding expression decides what they mean.
	Unknown,
}

/// Flat mapping from variable name to its declared kind.
#[derive(Debug, Default)]
pub(crate) struct KindTable {
	kinds: HashMap<String, Kind>,
}

impl KindTable {
	pub fn new() -> Self { Self::default() }

	/// Record the kind a declaration inferred. A re-declaration of the same
	/// name overwrites.
	pub fn define(&mut self, name: &str, kind: Kind) { self.kinds.insert(name.to_string(), kind); }

	/// Kind of a referenced name. Names never declared read as `Integer`,
	/// silently; undeclared references are not an error in WeaR.
	pub fn kind_of(&self, name: &str) -> Kind { self.kinds.get(name).copied().unwrap_or(Kind::Integer) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn undeclared_names_default_to_integer() {
		let table = KindTable::new();
		assert_eq!(table.kind_of("tidak_ada"), Kind::Integer);
	}

	#[test]
	fn declarations_fix_the_kind() {
		let mut table = KindTable::new();
		table.define("nama", Kind::Text);
		table.define("umur", Kind::Integer);
		assert_eq!(table.kind_of("nama"), Kind::Text);
		assert_eq!(table.kind_of("umur"), Kind::Integer);
	}

	#[test]
	fn redeclaration_overwrites() {
		let mut table = KindTable::new();
		table.define("x", Kind::Text);
		table.define("x", Kind::Integer);
		assert_eq!(table.kind_of("x"), Kind::Integer);
	}
}
