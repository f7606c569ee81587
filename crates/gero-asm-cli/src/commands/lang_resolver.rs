use std::path::Path;

use gero_asm_langs::Lang;

/// Resolve the language for a source.
///
/// An explicit `-l` name wins. Otherwise the source file extension is used,
/// falling back to Gero Asm for stdin, inline text, and unknown extensions.
pub fn resolve_lang(explicit: Option<&str>, source_path: Option<&Path>) -> Result<Lang, String> {
    if let Some(name) = explicit {
        return resolve_lang_required(name);
    }

    if let Some(path) = source_path
        && path.as_os_str() != "-"
        && let Some(ext) = path.extension().and_then(|e| e.to_str())
        && let Some(lang) = gero_asm_langs::from_ext(ext)
    {
        return Ok(lang);
    }

    Ok(gero_asm_langs::gero_asm())
}

/// Resolve a language by name, returning a user-facing message if unknown.
pub fn resolve_lang_required(name: &str) -> Result<Lang, String> {
    gero_asm_langs::from_name(name).ok_or_else(|| unknown_language_message(name))
}

pub fn unknown_language_message(name: &str) -> String {
    let mut msg = format!("unknown language: '{name}'");
    if let Some(suggestion) = suggest_language(name) {
        msg.push_str(&format!("\n\nDid you mean '{suggestion}'?"));
    }
    msg.push_str("\n\nRun 'gero-asm langs' for the full list.");
    msg
}

/// Suggest the closest known alias for a typo.
pub fn suggest_language(input: &str) -> Option<&'static str> {
    let input_lower = input.to_lowercase();
    gero_asm_langs::all_info()
        .into_iter()
        .flat_map(|info| info.aliases.iter().copied())
        .map(|alias| (alias, levenshtein(alias, &input_lower)))
        .filter(|&(_, distance)| distance <= 2)
        .min_by_key(|&(_, distance)| distance)
        .map(|(alias, _)| alias)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    if a_chars.is_empty() {
        return n;
    }
    if n == 0 {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
