//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gero-asm")
        .about("Tree-sitter grammar tooling for the Gero VM assembly language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(tree_command())
        .subcommand(grammar_command())
        .subcommand(langs_command())
}

/// Verify that the compiled grammar loads.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Verify that the compiled grammar loads")
        .override_usage(
            "\
  gero-asm check
  gero-asm check -l <LANG>",
        )
        .after_help(
            r#"EXAMPLES:
  gero-asm check                # every built-in grammar
  gero-asm check -l gasm        # a single grammar
  gero-asm check -v             # log the loaded ABI version"#,
        )
        .arg(lang_arg().help("Only check this language"))
}

/// Show the syntax tree of a source file.
pub fn tree_command() -> Command {
    Command::new("tree")
        .about("Show the syntax tree of a source file")
        .override_usage(
            "\
  gero-asm tree <SOURCE>
  gero-asm tree -s <TEXT> [-l <LANG>]",
        )
        .after_help(
            r#"EXAMPLES:
  gero-asm tree boot.gasm             # named nodes only
  gero-asm tree boot.gasm --raw       # include punctuation
  gero-asm tree boot.gasm --spans     # with row:column ranges
  gero-asm tree -s 'mov $0A, r1'      # inline source
  cat boot.gasm | gero-asm tree -     # stdin"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
        .arg(raw_arg())
        .arg(spans_arg())
}

/// Dump the grammar rules.
pub fn grammar_command() -> Command {
    Command::new("grammar")
        .about("Dump grammar rules in a compact notation")
        .arg(lang_arg())
}

/// List supported languages.
pub fn langs_command() -> Command {
    Command::new("langs").about("List supported languages with aliases and extensions")
}
