use std::io::Write;
use std::path::Path;

use indoc::indoc;

use super::tree::*;

fn dump(source: &str, raw: bool, spans: bool) -> String {
    let tree = gero_asm_langs::gero_asm().parse(source);
    dump_tree(&tree, source, raw, spans)
}

#[test]
fn dumps_named_nodes_with_fields() {
    let expected = indoc! {r#"
        (source_file
          (instruction
            mnemonic: (mnemonic "hlt"))
          (newline "\n"))
    "#};

    assert_eq!(dump("hlt\n", false, false), expected);
}

#[test]
fn dumps_operands() {
    let expected = indoc! {r#"
        (source_file
          (instruction
            mnemonic: (mnemonic "mov")
            (operands
              (hex_number "$0A")
              (register "r1")))
          (newline "\n"))
    "#};

    assert_eq!(dump("mov $0A, r1\n", false, false), expected);
}

#[test]
fn raw_includes_anonymous_nodes() {
    let expected = indoc! {r#"
        (source_file
          (label
            name: (identifier "start")
            (":"))
          (newline "\n"))
    "#};

    assert_eq!(dump("start:\n", true, false), expected);
}

#[test]
fn spans_show_row_and_column() {
    let expected = indoc! {r#"
        (source_file [0:0-1:0]
          (instruction [0:0-0:3]
            mnemonic: (mnemonic "hlt") [0:0-0:3])
          (newline "\n") [0:3-1:0])
    "#};

    assert_eq!(dump("hlt\n", false, true), expected);
}

#[test]
fn inline_source_is_used_verbatim() {
    assert_eq!(load_source(Some("hlt"), None).unwrap(), "hlt");
}

#[test]
fn reads_source_file() {
    let mut file = tempfile::Builder::new().suffix(".gasm").tempfile().unwrap();
    file.write_all(b"start:\n  hlt\n").unwrap();

    let source = load_source(None, Some(file.path())).unwrap();
    assert_eq!(source, "start:\n  hlt\n");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.gasm");

    let err = load_source(None, Some(&path)).unwrap_err();
    assert!(matches!(err, SourceError::NotFound(_)));
    assert_eq!(err.to_string(), format!("file not found: {}", path.display()));
}

#[test]
fn requires_exactly_one_source() {
    assert!(matches!(load_source(None, None), Err(SourceError::Missing)));
    assert!(matches!(
        load_source(Some("hlt"), Some(Path::new("boot.gasm"))),
        Err(SourceError::Ambiguous)
    ));
}
