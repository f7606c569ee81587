use super::*;

#[test]
fn can_load_grammar() {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&LANGUAGE.into())
        .expect("Error loading Gero Asm grammar");
}

#[test]
fn language_is_compatible_with_runtime() {
    let version = language().version();
    assert!(version >= tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION);
    assert!(version <= tree_sitter::LANGUAGE_VERSION);
}

#[test]
fn grammar_json_matches_name() {
    assert!(GRAMMAR_JSON.contains(&format!("\"name\": \"{NAME}\"")));
}

#[test]
fn exposes_statement_kinds() {
    let lang = language();
    for kind in ["source_file", "label", "directive", "instruction", "comment"] {
        assert_ne!(lang.id_for_node_kind(kind, true), 0, "missing node kind {kind}");
    }
}

#[test]
fn parses_program_without_errors() {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&language()).unwrap();

    let source = "start:\n  mov $0A, r1\n  push &r2\n  jmp start\n  hlt\n";
    let tree = parser.parse(source, None).unwrap();
    let root = tree.root_node();

    assert_eq!(root.kind(), "source_file");
    assert!(!root.has_error(), "{}", root.to_sexp());
}
