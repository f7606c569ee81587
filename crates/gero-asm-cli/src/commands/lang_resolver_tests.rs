use std::path::Path;

use super::lang_resolver::*;

#[test]
fn explicit_name_wins_over_extension() {
    let lang = resolve_lang(Some("gasm"), Some(Path::new("boot.txt"))).unwrap();
    assert_eq!(lang.name(), "gero_asm");
}

#[test]
fn infers_from_extension() {
    let lang = resolve_lang(None, Some(Path::new("src/boot.GERO"))).unwrap();
    assert_eq!(lang.name(), "gero_asm");
}

#[test]
fn falls_back_to_default_for_stdin_and_inline() {
    assert_eq!(resolve_lang(None, Some(Path::new("-"))).unwrap().name(), "gero_asm");
    assert_eq!(resolve_lang(None, None).unwrap().name(), "gero_asm");
    assert_eq!(
        resolve_lang(None, Some(Path::new("notes.txt"))).unwrap().name(),
        "gero_asm"
    );
}

#[test]
fn unknown_name_suggests_alias() {
    let Err(msg) = resolve_lang(Some("gero_ams"), None) else {
        panic!("expected unknown language");
    };

    assert_eq!(
        msg,
        "unknown language: 'gero_ams'\n\nDid you mean 'gero_asm'?\n\nRun 'gero-asm langs' for the full list."
    );
}

#[test]
fn unknown_name_without_close_match() {
    let Err(msg) = resolve_lang_required("javascript") else {
        panic!("expected unknown language");
    };

    assert_eq!(
        msg,
        "unknown language: 'javascript'\n\nRun 'gero-asm langs' for the full list."
    );
}

#[test]
fn suggestion_is_case_insensitive() {
    assert_eq!(suggest_language("GASN"), Some("gasm"));
    assert_eq!(suggest_language("python"), None);
}
