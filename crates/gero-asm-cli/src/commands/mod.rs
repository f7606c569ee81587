pub mod check;
pub mod grammar;
pub mod lang_resolver;
pub mod langs;
pub mod tree;

#[cfg(test)]
mod grammar_tests;
#[cfg(test)]
mod lang_resolver_tests;
#[cfg(test)]
mod tree_tests;
