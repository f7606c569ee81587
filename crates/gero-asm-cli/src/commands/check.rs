use std::fmt::Write as _;
use std::process::exit;

use gero_asm_langs::{GrammarLoadFailure, LangInfo};
use tracing::{debug, info};

use super::lang_resolver::unknown_language_message;

pub struct CheckArgs {
    pub lang: Option<String>,
}

/// Verify grammar artifacts load. Silent on success.
pub fn run(args: CheckArgs) {
    let results = match check(args.lang.as_deref()) {
        Ok(results) => results,
        Err(msg) => {
            eprintln!("error: {msg}");
            exit(1);
        }
    };

    let mut failed = false;
    for (lang, result) in &results {
        match result {
            Ok(()) => debug!(lang = lang.name, "grammar ok"),
            Err(failure) => {
                eprint!("{}", render_failure(failure));
                failed = true;
            }
        }
    }

    if failed {
        exit(1);
    }
    info!(checked = results.len(), "all grammars load");
}

/// Runs the loader check, optionally restricted to one language name.
pub fn check(
    lang: Option<&str>,
) -> Result<Vec<(LangInfo, Result<(), GrammarLoadFailure>)>, String> {
    let selected = lang.map(str::to_ascii_lowercase);
    let results: Vec<_> = gero_asm_langs::verify_all()
        .into_iter()
        .filter(|(info, _)| match &selected {
            Some(name) => info.aliases.contains(&name.as_str()),
            None => true,
        })
        .map(|(info, result)| (info, result.map(drop)))
        .collect();

    if results.is_empty()
        && let Some(name) = lang
    {
        return Err(unknown_language_message(name));
    }
    Ok(results)
}

pub fn render_failure(failure: &GrammarLoadFailure) -> String {
    let mut out = format!("error: {failure}\n");
    let _ = writeln!(out, "  caused by: {}", failure.reason());
    out
}
