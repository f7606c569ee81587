use gero_asm_langs::LangInfo;

/// List supported languages with aliases and file extensions.
pub fn run() {
    print!("{}", render(&gero_asm_langs::all_info()));
}

fn render(infos: &[LangInfo]) -> String {
    let mut out = format!("Supported languages ({}):\n", infos.len());
    for info in infos {
        out.push_str("  ");
        out.push_str(info.name);

        let aliases: Vec<_> = info.aliases.iter().skip(1).copied().collect();
        if !aliases.is_empty() {
            out.push_str(&format!(" ({})", aliases.join(", ")));
        }
        if !info.extensions.is_empty() {
            let exts: Vec<_> = info.extensions.iter().map(|e| format!(".{e}")).collect();
            out.push_str(&format!(" [{}]", exts.join(" ")));
        }
        out.push('\n');
    }
    out
}
