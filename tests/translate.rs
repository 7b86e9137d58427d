#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use wearc::{WearError, Wearc};

	fn fixture(name: &str) -> PathBuf {
		PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name)
	}

	#[test]
	fn test_translate_wear_file() {
		let wearc = Wearc;
		let document = wearc.translate_file(fixture("hello.wr")).unwrap();
		assert!(document.starts_with("/* Generated by wearc */\n"));
		assert!(document.contains("WeaR Lang Runtime Library"));
		assert!(document.contains("// User-defined functions\n"));
		assert!(document.contains("int sapa(char* nama) {"));
		assert!(document.contains("int main(int argc, char* argv[]) {"));
		assert!(document.contains("__wear_print_str"));
		assert!(document.contains("__wear_write_file"));
		assert!(document.ends_with("    return 0;\n}\n"));
	}

	#[test]
	fn test_translation_is_deterministic() {
		let wearc = Wearc;
		let first = wearc.translate_file(fixture("hello.wr")).unwrap();
		let second = wearc.translate_file(fixture("hello.wr")).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_missing_source_file() {
		let wearc = Wearc;
		let result = wearc.translate_file(fixture("tidak_ada.wr"));
		assert!(matches!(result, Err(WearError::InternalError(_))));
	}

	#[test]
	fn test_syntax_error_has_no_document() {
		let wearc = Wearc;
		let result = wearc.translate("jika (x > 0 { cetak x }");
		match result {
			Err(WearError::SyntaxError(e)) => {
				assert_eq!((e.line(), e.column()), (1, 13));
			}
			other => panic!("expected a syntax error, got {other:?}"),
		}
	}
}
