use std::fmt::Write as _;
use std::process::exit;

use gero_asm_core::grammar::{Grammar, Rule};

use super::lang_resolver::resolve_lang;

pub struct GrammarArgs {
    pub lang: Option<String>,
}

/// Dump grammar rules for a language.
pub fn run(args: GrammarArgs) {
    let lang = resolve_lang(args.lang.as_deref(), None).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        exit(1);
    });

    print!("{}", GrammarRenderer::new(lang.grammar()).render());
}

const LEGEND: &str = r#" *
 *   (kind)           named node
 *   "text"           anonymous node
 *   (_hidden ...)    hidden rule, children appear in the parent
 *   {...}            sequence
 *   [...]            choice
 *   ?  *  +          optional, zero or more, one or more
 *   "x"!             immediate token
 *   field: ...       named field
 *   T :: supertype   supertype declaration
 */
"#;

/// Renders a [`Grammar`] in a compact, query-oriented notation.
pub struct GrammarRenderer<'a> {
    grammar: &'a Grammar,
}

impl<'a> GrammarRenderer<'a> {
    pub fn new(grammar: &'a Grammar) -> Self {
        Self { grammar }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "/*\n * Grammar: {}", self.grammar.name);
        out.push_str(LEGEND);
        out.push('\n');

        self.render_list(&mut out, "extras", &self.grammar.extras);
        self.render_list(&mut out, "externals", &self.grammar.externals);
        if let Some(word) = &self.grammar.word {
            let _ = writeln!(out, "word = ({word})\n");
        }

        for supertype in &self.grammar.supertypes {
            if let Some(rule) = self.grammar.rule(supertype) {
                self.render_definition(&mut out, &format!("{supertype} :: supertype"), rule);
            }
        }
        for (name, rule) in &self.grammar.rules {
            if !self.grammar.supertypes.contains(name) {
                self.render_definition(&mut out, name, rule);
            }
        }

        let fields = self.grammar.field_names();
        if !fields.is_empty() {
            let _ = writeln!(out, "fields = {}", fields.join(", "));
        }
        out
    }

    fn render_list(&self, out: &mut String, label: &str, rules: &[Rule]) {
        if rules.is_empty() {
            return;
        }
        let _ = writeln!(out, "{label} = [");
        for rule in rules {
            out.push_str("  ");
            self.render_rule(out, rule, 1);
            out.push('\n');
        }
        out.push_str("]\n\n");
    }

    fn render_definition(&self, out: &mut String, label: &str, rule: &Rule) {
        out.push_str(label);
        out.push_str(" = ");
        self.render_rule(out, rule, 0);
        out.push_str("\n\n");
    }

    fn render_rule(&self, out: &mut String, rule: &Rule, indent: usize) {
        if let Some(inner) = rule.as_optional() {
            self.render_rule(out, inner, indent);
            out.push('?');
            return;
        }

        match rule {
            Rule::Blank => out.push_str("()"),
            Rule::String(s) => write_quoted(out, s),
            Rule::Pattern { value, flags } => {
                let _ = write!(out, "/{value}/{}", flags.as_deref().unwrap_or(""));
            }
            Rule::Symbol(name) if name.starts_with('_') => {
                let _ = write!(out, "({name} ...)");
            }
            Rule::Symbol(name) => {
                let _ = write!(out, "({name})");
            }
            Rule::Seq(members) => self.render_block(out, members, ('{', '}'), indent),
            Rule::Choice(members) => self.render_block(out, members, ('[', ']'), indent),
            Rule::Repeat(inner) => {
                self.render_rule(out, inner, indent);
                out.push('*');
            }
            Rule::Repeat1(inner) => {
                self.render_rule(out, inner, indent);
                out.push('+');
            }
            Rule::Field { name, content } => {
                let _ = write!(out, "{name}: ");
                self.render_rule(out, content, indent);
            }
            Rule::Alias { value, named, .. } => {
                if *named {
                    let _ = write!(out, "({value})");
                } else {
                    write_quoted(out, value);
                }
            }
            Rule::ImmediateToken(inner) => {
                self.render_rule(out, inner, indent);
                out.push('!');
            }
            Rule::Token(content)
            | Rule::Prec { content, .. }
            | Rule::PrecLeft { content, .. }
            | Rule::PrecRight { content, .. }
            | Rule::PrecDynamic { content, .. } => self.render_rule(out, content, indent),
        }
    }

    fn render_block(&self, out: &mut String, members: &[Rule], delims: (char, char), indent: usize) {
        out.push(delims.0);
        out.push('\n');
        let prefix = "  ".repeat(indent + 1);
        for member in members {
            out.push_str(&prefix);
            self.render_rule(out, member, indent + 1);
            out.push('\n');
        }
        out.push_str(&"  ".repeat(indent));
        out.push(delims.1);
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
}
