//! Grammar types for tree-sitter grammars.
//!
//! This module provides types for representing tree-sitter `grammar.json` files
//! and loading them from JSON.

mod json;
mod types;


pub use json::GrammarError;
pub use types::{Grammar, Precedence, PrecedenceEntry, Rule};
