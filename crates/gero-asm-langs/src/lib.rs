use std::num::NonZeroU16;
use std::sync::Arc;

use tracing::debug;
use tree_sitter::Language;

use gero_asm_core::grammar::Grammar;

pub mod builtin;
pub mod load;

pub use builtin::*;
pub use load::{
    GeroAsmGrammar, GrammarLoadFailure, GrammarSource, LoadFailureReason, verify_grammar,
    verify_grammar_loads,
};

/// Node kind id as assigned by the generated parse tables.
pub type NodeTypeId = u16;

/// Field id as assigned by the generated parse tables. Zero is never a field.
pub type NodeFieldId = NonZeroU16;

/// User-facing language type.
pub type Lang = Arc<dyn LangImpl>;

/// Static description of a built-in language.
#[derive(Debug, Clone, Copy)]
pub struct LangInfo {
    /// Canonical name (first alias).
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub extensions: &'static [&'static str],
}

/// Trait providing a unified facade for tree-sitter's Language API
/// combined with the grammar definition the tables were generated from.
pub trait LangImpl: Send + Sync {
    fn name(&self) -> &str;

    /// Name used in diagnostics, e.g. "Gero Asm".
    fn display_name(&self) -> &str;

    fn language(&self) -> &Language;
    fn grammar(&self) -> &Grammar;

    /// Parse source code into a tree-sitter tree.
    fn parse(&self, source: &str) -> tree_sitter::Tree;

    fn resolve_named_node(&self, kind: &str) -> Option<NodeTypeId>;
    fn resolve_anonymous_node(&self, kind: &str) -> Option<NodeTypeId>;
    fn resolve_field(&self, name: &str) -> Option<NodeFieldId>;

    // Enumeration methods for suggestions
    fn all_named_node_kinds(&self) -> Vec<&'static str>;
    fn all_field_names(&self) -> Vec<&'static str>;
    fn node_type_name(&self, node_type_id: NodeTypeId) -> Option<&'static str>;
    fn field_name(&self, field_id: NodeFieldId) -> Option<&'static str>;
}

#[derive(Debug)]
pub struct LangInner {
    name: String,
    display_name: String,
    ts_lang: Language,
    grammar: Grammar,
}

impl LangInner {
    pub fn new(name: &str, display_name: &str, ts_lang: Language, grammar: Grammar) -> Self {
        Self {
            name: name.to_owned(),
            display_name: display_name.to_owned(),
            ts_lang,
            grammar,
        }
    }
}

impl LangImpl for LangInner {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn language(&self) -> &Language {
        &self.ts_lang
    }

    fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    fn parse(&self, source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.ts_lang)
            .expect("failed to set language");
        let tree = parser.parse(source, None).expect("failed to parse source");
        debug!(
            lang = %self.name,
            bytes = source.len(),
            has_error = tree.root_node().has_error(),
            "parsed source"
        );
        tree
    }

    fn resolve_named_node(&self, kind: &str) -> Option<NodeTypeId> {
        let id = self.ts_lang.id_for_node_kind(kind, true);
        // For named nodes, 0 always means "not found"
        (id != 0).then_some(id)
    }

    fn resolve_anonymous_node(&self, kind: &str) -> Option<NodeTypeId> {
        let id = self.ts_lang.id_for_node_kind(kind, false);
        // Tree-sitter returns 0 for both "not found" AND the valid anonymous "end" node.
        // We disambiguate via reverse lookup.
        if id != 0 {
            return Some(id);
        }
        (self.ts_lang.node_kind_for_id(0) == Some(kind)).then_some(0)
    }

    fn resolve_field(&self, name: &str) -> Option<NodeFieldId> {
        self.ts_lang.field_id_for_name(name)
    }

    fn all_named_node_kinds(&self) -> Vec<&'static str> {
        let count = self.ts_lang.node_kind_count();
        let mut kinds: Vec<_> = (0..count as u16)
            .filter(|&id| self.ts_lang.node_kind_is_named(id))
            .filter(|&id| self.ts_lang.node_kind_is_visible(id))
            .filter_map(|id| self.ts_lang.node_kind_for_id(id))
            .collect();
        // A kind can be listed under several ids (aliases, keyword tokens).
        kinds.sort_unstable();
        kinds.dedup();
        kinds
    }

    fn all_field_names(&self) -> Vec<&'static str> {
        let count = self.ts_lang.field_count();
        (1..=count as u16)
            .filter_map(|id| self.ts_lang.field_name_for_id(id))
            .collect()
    }

    fn node_type_name(&self, node_type_id: NodeTypeId) -> Option<&'static str> {
        self.ts_lang.node_kind_for_id(node_type_id)
    }

    fn field_name(&self, field_id: NodeFieldId) -> Option<&'static str> {
        self.ts_lang.field_name_for_id(field_id.get())
    }
}

#[cfg(test)]
mod load_tests;
