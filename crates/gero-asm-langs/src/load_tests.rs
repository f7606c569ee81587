use std::error::Error;

use tree_sitter_language::LanguageFn;

use super::*;

unsafe extern "C" fn null_language() -> *const () {
    std::ptr::null()
}

/// Artifact stub whose accessor returns a null handle.
struct NullGrammar(&'static str);

impl GrammarSource for NullGrammar {
    fn display_name(&self) -> &str {
        self.0
    }

    fn accessor(&self) -> LanguageFn {
        unsafe { LanguageFn::from_raw(null_language) }
    }
}

#[test]
fn linked_grammar_loads() {
    let language = verify_grammar_loads().expect("Error loading Gero Asm grammar");

    assert!(language.node_kind_count() > 0);
    assert!(language.field_count() > 0);
}

#[test]
fn linked_grammar_source_names_gero_asm() {
    assert_eq!(GeroAsmGrammar.display_name(), "Gero Asm");
}

#[test]
fn check_is_idempotent() {
    let first = verify_grammar_loads().unwrap();
    let second = verify_grammar_loads().unwrap();

    assert_eq!(first.version(), second.version());
    assert_eq!(first.node_kind_count(), second.node_kind_count());
    assert_eq!(
        first.id_for_node_kind("instruction", true),
        second.id_for_node_kind("instruction", true)
    );
}

#[test]
fn null_handle_fails_with_message() {
    let err = verify_grammar(&NullGrammar("Gero Asm")).unwrap_err();

    assert_eq!(err.to_string(), "Error loading Gero Asm grammar");
    assert_eq!(err.grammar(), "Gero Asm");
    assert_eq!(err.reason(), &LoadFailureReason::NullHandle);
}

#[test]
fn null_handle_reason_is_error_source() {
    let err = verify_grammar(&NullGrammar("Gero Asm")).unwrap_err();
    let source = err.source().expect("failure should carry a reason");

    assert_eq!(
        source.to_string(),
        "language accessor returned a null handle"
    );
}

#[test]
fn null_handle_failure_is_idempotent() {
    let stub = NullGrammar("Gero Asm");

    let first = verify_grammar(&stub).unwrap_err();
    let second = verify_grammar(&stub).unwrap_err();

    assert_eq!(first, second);
}

#[test]
fn failure_names_the_failing_grammar() {
    let err = verify_grammar(&NullGrammar("Gero Disasm")).unwrap_err();

    assert_eq!(err.to_string(), "Error loading Gero Disasm grammar");
}

#[test]
fn incompatible_version_message() {
    let reason = LoadFailureReason::IncompatibleVersion {
        version: 99,
        min: 13,
        max: 14,
    };
    let err = GrammarLoadFailure::new("Gero Asm", reason);

    assert_eq!(err.to_string(), "Error loading Gero Asm grammar");
    assert_eq!(
        err.source().unwrap().to_string(),
        "ABI version 99 is outside the supported range 13..=14"
    );
}
