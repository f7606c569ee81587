use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::exit;

use thiserror::Error;
use tree_sitter::{Node, Tree};

use super::lang_resolver::resolve_lang;

pub struct TreeArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub raw: bool,
    pub spans: bool,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot use both --source and positional SOURCE")]
    Ambiguous,
    #[error("source required (positional or --source)")]
    Missing,
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}", path = .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn run(args: TreeArgs) {
    let source = load_source(args.source_text.as_deref(), args.source_path.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("error: {e}");
            exit(1);
        });

    let lang = resolve_lang(args.lang.as_deref(), args.source_path.as_deref()).unwrap_or_else(
        |msg| {
            eprintln!("error: {msg}");
            exit(1);
        },
    );

    let tree = lang.parse(&source);
    print!("{}", dump_tree(&tree, &source, args.raw, args.spans));
}

/// Read source text from inline text, a file, or stdin (`-`).
pub fn load_source(text: Option<&str>, path: Option<&Path>) -> Result<String, SourceError> {
    match (text, path) {
        (Some(text), None) => Ok(text.to_owned()),
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| SourceError::Read {
                    path: path.to_owned(),
                    source,
                })?;
            Ok(buf)
        }
        (None, Some(path)) => fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound(path.to_owned())
            } else {
                SourceError::Read {
                    path: path.to_owned(),
                    source,
                }
            }
        }),
        (Some(_), Some(_)) => Err(SourceError::Ambiguous),
        (None, None) => Err(SourceError::Missing),
    }
}

/// Render a tree as an indented s-expression, one node per line.
///
/// Without `raw`, anonymous nodes (punctuation, keywords) are skipped.
pub fn dump_tree(tree: &Tree, source: &str, raw: bool, spans: bool) -> String {
    let printer = TreePrinter { source, raw, spans };
    let mut out = String::new();
    printer.write_node(&mut out, tree.root_node(), None, 0);
    out.push('\n');
    out
}

struct TreePrinter<'s> {
    source: &'s str,
    raw: bool,
    spans: bool,
}

impl TreePrinter<'_> {
    fn write_node(&self, out: &mut String, node: Node, field: Option<&str>, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        if let Some(field) = field {
            out.push_str(field);
            out.push_str(": ");
        }

        let children = self.children(node);
        if children.is_empty() {
            let text = node
                .utf8_text(self.source.as_bytes())
                .unwrap_or("<invalid utf8>");
            out.push('(');
            if text != node.kind() {
                out.push_str(node.kind());
                out.push(' ');
            }
            out.push('"');
            out.push_str(&escape_string(text));
            out.push_str("\")");
            self.write_span(out, node);
            return;
        }

        out.push('(');
        out.push_str(node.kind());
        self.write_span(out, node);
        for (child, child_field) in children {
            out.push('\n');
            self.write_node(out, child, child_field, depth + 1);
        }
        out.push(')');
    }

    fn children<'t>(&self, node: Node<'t>) -> Vec<(Node<'t>, Option<&'static str>)> {
        let mut cursor = node.walk();
        let mut result = Vec::new();
        if !cursor.goto_first_child() {
            return result;
        }
        loop {
            let child = cursor.node();
            if self.raw || child.is_named() {
                result.push((child, cursor.field_name()));
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        result
    }

    fn write_span(&self, out: &mut String, node: Node) {
        if !self.spans {
            return;
        }
        let start = node.start_position();
        let end = node.end_position();
        out.push_str(&format!(
            " [{}:{}-{}:{}]",
            start.row, start.column, end.row, end.column
        ));
    }
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c if c.is_control() => result.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => result.push(c),
        }
    }
    result
}
