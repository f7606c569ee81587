//! Grammar loader check.
//!
//! Obtains the language handle from a compiled grammar artifact and verifies
//! that it is usable: the accessor must return a non-null handle, and the
//! tree-sitter runtime must accept the handle's ABI version.
//!
//! A failure here is a leaf-level sanity check failing. Callers surface it
//! as-is; there is nothing to retry.

use thiserror::Error;
use tracing::debug;
use tree_sitter::{LANGUAGE_VERSION, Language, MIN_COMPATIBLE_LANGUAGE_VERSION, Parser};
use tree_sitter_language::LanguageFn;

/// A compiled grammar artifact exposing a language accessor.
pub trait GrammarSource {
    /// Name used in diagnostics, e.g. "Gero Asm".
    fn display_name(&self) -> &str;

    /// The artifact's language accessor.
    fn accessor(&self) -> LanguageFn;
}

/// The statically linked Gero Asm grammar artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeroAsmGrammar;

impl GrammarSource for GeroAsmGrammar {
    fn display_name(&self) -> &str {
        tree_sitter_gero_asm::DISPLAY_NAME
    }

    fn accessor(&self) -> LanguageFn {
        tree_sitter_gero_asm::LANGUAGE
    }
}

/// The grammar artifact did not yield a usable language handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error loading {grammar} grammar")]
pub struct GrammarLoadFailure {
    grammar: String,
    #[source]
    reason: LoadFailureReason,
}

/// Detail attached to a [`GrammarLoadFailure`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailureReason {
    #[error("language accessor returned a null handle")]
    NullHandle,
    #[error("ABI version {version} is outside the supported range {min}..={max}")]
    IncompatibleVersion {
        version: usize,
        min: usize,
        max: usize,
    },
}

impl GrammarLoadFailure {
    pub fn new(grammar: impl Into<String>, reason: LoadFailureReason) -> Self {
        Self {
            grammar: grammar.into(),
            reason,
        }
    }

    /// Display name of the grammar that failed to load.
    pub fn grammar(&self) -> &str {
        &self.grammar
    }

    pub fn reason(&self) -> &LoadFailureReason {
        &self.reason
    }
}

/// Verifies that the statically linked Gero Asm grammar loads.
pub fn verify_grammar_loads() -> Result<Language, GrammarLoadFailure> {
    verify_grammar(&GeroAsmGrammar)
}

/// Verifies that `source` yields a usable language handle.
///
/// Repeated calls against the same source give the same result; nothing is
/// cached between calls.
pub fn verify_grammar(source: &impl GrammarSource) -> Result<Language, GrammarLoadFailure> {
    let grammar = source.display_name();

    // SAFETY: the accessor is a generated `tree_sitter_<name>` function. It
    // takes no arguments and returns a pointer to static parse tables.
    let raw = unsafe { (source.accessor().into_raw())() };
    if raw.is_null() {
        debug!(grammar, "language accessor returned a null handle");
        return Err(GrammarLoadFailure::new(
            grammar,
            LoadFailureReason::NullHandle,
        ));
    }

    let language = Language::from(source.accessor());
    let mut parser = Parser::new();
    if parser.set_language(&language).is_err() {
        let version = language.version();
        debug!(grammar, version, "runtime rejected language ABI version");
        return Err(GrammarLoadFailure::new(
            grammar,
            LoadFailureReason::IncompatibleVersion {
                version,
                min: MIN_COMPATIBLE_LANGUAGE_VERSION,
                max: LANGUAGE_VERSION,
            },
        ));
    }

    debug!(
        grammar,
        version = language.version(),
        node_kinds = language.node_kind_count(),
        fields = language.field_count(),
        "grammar loaded"
    );
    Ok(language)
}
