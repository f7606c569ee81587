use std::sync::{Arc, LazyLock};

use gero_asm_core::grammar::Grammar;

use crate::load::{GrammarLoadFailure, GrammarSource, verify_grammar};
use crate::{Lang, LangInfo, LangInner};

macro_rules! define_langs {
    (
        $(
            $fn_name:ident => {
                name: $name:literal,
                source: $source:expr,
                grammar_json: $grammar_json:expr,
                names: [$($alias:literal),* $(,)?],
                extensions: [$($ext:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        // Static Lang definitions, built on first use.
        $(
            /// # Panics
            ///
            /// Panics with the loader check's message if the statically linked
            /// grammar artifact does not load.
            pub fn $fn_name() -> Lang {
                static LANG: LazyLock<Lang> = LazyLock::new(|| {
                    let source = $source;
                    let ts_lang = verify_grammar(&source).unwrap_or_else(|e| panic!("{e}"));
                    let grammar = Grammar::from_json($grammar_json).unwrap_or_else(|e| {
                        panic!("invalid grammar.json for {}: {e}", source.display_name())
                    });
                    Arc::new(LangInner::new($name, source.display_name(), ts_lang, grammar))
                });
                Arc::clone(&LANG)
            }
        )*

        pub fn from_name(s: &str) -> Option<Lang> {
            match s.to_ascii_lowercase().as_str() {
                $(
                    $($alias)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn from_ext(ext: &str) -> Option<Lang> {
            match ext.to_ascii_lowercase().as_str() {
                $(
                    $($ext)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn all() -> Vec<Lang> {
            vec![
                $(
                    $fn_name(),
                )*
            ]
        }

        pub fn all_info() -> Vec<LangInfo> {
            vec![
                $(
                    LangInfo {
                        name: $name,
                        aliases: &[$($alias),*],
                        extensions: &[$($ext),*],
                    },
                )*
            ]
        }

        /// Runs the loader check against every built-in grammar artifact,
        /// in the same order as [`all_info`].
        pub fn verify_all() -> Vec<(LangInfo, Result<tree_sitter::Language, GrammarLoadFailure>)> {
            all_info()
                .into_iter()
                .zip([
                    $(
                        verify_grammar(&$source),
                    )*
                ])
                .collect()
        }
    };
}

define_langs! {
    gero_asm => {
        name: "gero_asm",
        source: crate::load::GeroAsmGrammar,
        grammar_json: tree_sitter_gero_asm::GRAMMAR_JSON,
        names: ["gero_asm", "gero-asm", "geroasm", "gasm"],
        extensions: ["gasm", "gero"],
    },
}
