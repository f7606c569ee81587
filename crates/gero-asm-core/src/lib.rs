#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the Gero Asm tree-sitter binding.
//!
//! The grammar artifact ships the `grammar.json` its parse tables were
//! generated from; [`grammar::Grammar`] is the typed view of that file.

pub mod grammar;
