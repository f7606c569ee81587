//! Gero Asm grammar for tree-sitter.
//!
//! This crate provides the grammar of the Gero VM assembly language for use
//! with tree-sitter. Parse tables are generated from `grammar/grammar.json`
//! when the crate is built.
//!
//! ```
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_gero_asm::LANGUAGE.into())
//!     .expect("Error loading Gero Asm grammar");
//! let tree = parser.parse("mov $0A, r1\n", None).unwrap();
//! assert_eq!(tree.root_node().kind(), "source_file");
//! ```

use tree_sitter_language::LanguageFn;

unsafe extern "C" {
    fn tree_sitter_gero_asm() -> *const ();
}

/// The tree-sitter [`LanguageFn`] for the Gero Asm grammar.
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_gero_asm) };

/// Grammar identifier, as declared in `grammar.json`.
pub const NAME: &str = "gero_asm";

/// Human-readable grammar name used in diagnostics.
pub const DISPLAY_NAME: &str = "Gero Asm";

/// The grammar definition the parse tables were generated from.
pub const GRAMMAR_JSON: &str = include_str!("../grammar/grammar.json");

/// Returns the Gero Asm tree-sitter language.
pub fn language() -> tree_sitter::Language {
    LANGUAGE.into()
}

#[cfg(test)]
mod lib_tests;
