use gero_asm_core::grammar::Grammar;

use super::grammar::GrammarRenderer;

const MINI: &str = r#"{
    "name": "mini",
    "word": "identifier",
    "extras": [{ "type": "PATTERN", "value": "\\s" }],
    "rules": {
        "program": { "type": "REPEAT", "content": { "type": "SYMBOL", "name": "_item" } },
        "_item": {
            "type": "CHOICE",
            "members": [
                { "type": "SYMBOL", "name": "label" },
                { "type": "SYMBOL", "name": "identifier" }
            ]
        },
        "label": {
            "type": "SEQ",
            "members": [
                { "type": "FIELD", "name": "name", "content": { "type": "SYMBOL", "name": "identifier" } },
                { "type": "CHOICE", "members": [{ "type": "STRING", "value": ":" }, { "type": "BLANK" }] }
            ]
        },
        "identifier": { "type": "TOKEN", "content": { "type": "PATTERN", "value": "[a-z]+" } }
    }
}"#;

#[test]
fn renders_small_grammar() {
    let grammar = Grammar::from_json(MINI).unwrap();
    let output = GrammarRenderer::new(&grammar).render();

    insta::assert_snapshot!(output, @r#"
    /*
     * Grammar: mini
     *
     *   (kind)           named node
     *   "text"           anonymous node
     *   (_hidden ...)    hidden rule, children appear in the parent
     *   {...}            sequence
     *   [...]            choice
     *   ?  *  +          optional, zero or more, one or more
     *   "x"!             immediate token
     *   field: ...       named field
     *   T :: supertype   supertype declaration
     */

    extras = [
      /\s/
    ]

    word = (identifier)

    program = (_item ...)*

    _item = [
      (label)
      (identifier)
    ]

    label = {
      name: (identifier)
      ":"?
    }

    identifier = /[a-z]+/

    fields = name
    "#);
}

#[test]
fn renders_gero_asm_grammar() {
    let lang = gero_asm_langs::gero_asm();
    let output = GrammarRenderer::new(lang.grammar()).render();

    assert!(output.starts_with("/*\n * Grammar: gero_asm\n"));
    assert!(output.contains("word = (identifier)\n"));
    assert!(output.contains("instruction = {\n  mnemonic: (mnemonic)\n  (operands)?\n}\n"));
    assert!(output.contains("label = {\n  name: (identifier)\n  \":\"\n}\n"));
    assert!(output.ends_with("fields = export, keyword, mnemonic, name, object, property, type\n"));
}

#[test]
fn supertypes_render_first() {
    let json = r#"{
        "name": "st",
        "supertypes": ["_operand"],
        "rules": {
            "program": { "type": "SYMBOL", "name": "_operand" },
            "_operand": {
                "type": "CHOICE",
                "members": [
                    { "type": "STRING", "value": "a" },
                    { "type": "IMMEDIATE_TOKEN", "content": { "type": "STRING", "value": "b" } }
                ]
            }
        }
    }"#;
    let grammar = Grammar::from_json(json).unwrap();
    let output = GrammarRenderer::new(&grammar).render();

    let body = output.split_once(" */\n\n").unwrap().1;
    assert_eq!(
        body,
        "_operand :: supertype = [\n  \"a\"\n  \"b\"!\n]\n\nprogram = (_operand ...)\n\n"
    );
}
