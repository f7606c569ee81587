use std::fs;
use std::path::PathBuf;

fn main() {
    let manifest_dir =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));

    // The parse tables are generated from grammar.json on every build, so the
    // crate carries no generated C. Layout inside OUT_DIR mirrors what the
    // tree-sitter CLI writes:
    //   grammar/src/
    //     parser.c
    //     tree_sitter/parser.h
    let grammar_path = manifest_dir.join("grammar/grammar.json");
    let grammar_json = fs::read_to_string(&grammar_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", grammar_path.display()));

    let (name, parser_c) = tree_sitter_generate::generate_parser_for_grammar(&grammar_json)
        .unwrap_or_else(|e| {
            panic!("failed to generate parser for {}: {e}", grammar_path.display())
        });
    assert_eq!(name, "gero_asm", "grammar.json declares an unexpected grammar name");

    let src_dir = out_dir.join("grammar/src");
    let header_dir = src_dir.join("tree_sitter");
    fs::create_dir_all(&header_dir).expect("failed to create tree_sitter header dir");
    fs::write(header_dir.join("parser.h"), tree_sitter::PARSER_HEADER)
        .expect("failed to write tree_sitter/parser.h");
    fs::write(src_dir.join("parser.c"), parser_c).expect("failed to write parser.c");

    cc::Build::new()
        .std("c11")
        .include(&src_dir)
        .warnings(false)
        .flag_if_supported("-Wno-unused-parameter")
        .flag_if_supported("-Wno-unused-but-set-variable")
        .flag_if_supported("-Wno-trigraphs")
        .file(src_dir.join("parser.c"))
        .compile("tree_sitter_gero_asm");

    println!("cargo::rerun-if-changed={}", grammar_path.display());
    println!("cargo::rerun-if-changed=build.rs");
}
