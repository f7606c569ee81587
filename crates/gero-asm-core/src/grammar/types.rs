//! Grammar type definitions.

use std::collections::BTreeSet;

/// Complete tree-sitter grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    /// Grammar name (e.g., "gero_asm").
    pub name: String,
    /// Production rules, preserving definition order.
    pub rules: Vec<(String, Rule)>,
    /// Extra/trivia nodes (whitespace, comments).
    pub extras: Vec<Rule>,
    /// Precedence orderings.
    pub precedences: Vec<Vec<PrecedenceEntry>>,
    /// Expected conflicts.
    pub conflicts: Vec<Vec<String>>,
    /// External scanner tokens.
    pub externals: Vec<Rule>,
    /// Rules to inline (hidden).
    pub inline: Vec<String>,
    /// Supertype rules.
    pub supertypes: Vec<String>,
    /// Keyword identifier rule.
    pub word: Option<String>,
}

/// Grammar rule variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Epsilon (empty match).
    Blank,
    /// Literal token.
    String(String),
    /// Regex token.
    Pattern {
        value: String,
        flags: Option<String>,
    },
    /// Reference to another rule.
    Symbol(String),
    /// Sequence of rules (must match in order).
    Seq(Vec<Rule>),
    /// Alternation.
    Choice(Vec<Rule>),
    /// Zero or more repetitions.
    Repeat(Box<Rule>),
    /// One or more repetitions.
    Repeat1(Box<Rule>),
    /// Named field.
    Field { name: String, content: Box<Rule> },
    /// Rename node.
    Alias {
        content: Box<Rule>,
        value: String,
        named: bool,
    },
    /// Force tokenization.
    Token(Box<Rule>),
    /// Immediate tokenization.
    ImmediateToken(Box<Rule>),
    /// Precedence.
    Prec {
        value: Precedence,
        content: Box<Rule>,
    },
    /// Left-associative precedence.
    PrecLeft {
        value: Precedence,
        content: Box<Rule>,
    },
    /// Right-associative precedence.
    PrecRight {
        value: Precedence,
        content: Box<Rule>,
    },
    /// Dynamic precedence.
    PrecDynamic { value: i32, content: Box<Rule> },
}

/// Precedence value (numeric or named).
#[derive(Debug, Clone, PartialEq)]
pub enum Precedence {
    Integer(i32),
    Name(String),
}

/// Entry in precedence ordering.
#[derive(Debug, Clone, PartialEq)]
pub enum PrecedenceEntry {
    /// Named precedence level.
    Name(String),
    /// Symbol reference.
    Symbol(String),
}

impl Grammar {
    /// The entry rule. Tree-sitter always treats the first rule as the root.
    pub fn entry_rule(&self) -> Option<(&str, &Rule)> {
        self.rules
            .first()
            .map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rule)| rule)
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.rule(name).is_some()
    }

    /// Rules that produce nodes in the syntax tree.
    ///
    /// Hidden rules (leading `_`) and inlined rules are skipped.
    pub fn visible_rules(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(move |name| {
                !name.starts_with('_') && !self.inline.iter().any(|i| i.as_str() == *name)
            })
    }

    /// Sorted, deduplicated names of every field used by any rule.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names = BTreeSet::new();
        for (_, rule) in &self.rules {
            rule.visit(&mut |r| {
                if let Rule::Field { name, .. } = r {
                    names.insert(name.as_str());
                }
            });
        }
        names.into_iter().collect()
    }

    /// Every symbol referenced from rules or extras that has no
    /// definition, paired with the rule it was referenced from.
    pub fn undefined_symbols(&self) -> Vec<(&str, &str)> {
        let externals: Vec<&str> = self
            .externals
            .iter()
            .filter_map(|r| match r {
                Rule::Symbol(name) => Some(name.as_str()),
                _ => None,
            })
            .collect();
        let is_defined = |name: &str| self.has_rule(name) || externals.contains(&name);

        let mut missing = Vec::new();
        let referencing = self
            .rules
            .iter()
            .map(|(name, rule)| (name.as_str(), rule))
            .chain(self.extras.iter().map(|rule| ("extras", rule)));
        for (owner, rule) in referencing {
            rule.visit(&mut |r| {
                if let Rule::Symbol(name) = r
                    && !is_defined(name.as_str())
                {
                    missing.push((owner, name.as_str()));
                }
            });
        }

        if let Some(word) = &self.word
            && !self.has_rule(word)
        {
            missing.push(("word", word.as_str()));
        }

        missing
    }
}

impl Rule {
    /// Direct sub-rules, in definition order.
    pub fn children(&self) -> &[Rule] {
        match self {
            Rule::Blank | Rule::String(_) | Rule::Pattern { .. } | Rule::Symbol(_) => &[],
            Rule::Seq(members) | Rule::Choice(members) => members,
            Rule::Repeat(content)
            | Rule::Repeat1(content)
            | Rule::Token(content)
            | Rule::ImmediateToken(content)
            | Rule::Field { content, .. }
            | Rule::Alias { content, .. }
            | Rule::Prec { content, .. }
            | Rule::PrecLeft { content, .. }
            | Rule::PrecRight { content, .. }
            | Rule::PrecDynamic { content, .. } => std::slice::from_ref(content.as_ref()),
        }
    }

    /// Pre-order traversal over this rule and all nested rules.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Rule)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }

    /// `optional(x)` is encoded as `CHOICE [x, BLANK]`; returns `x`.
    pub fn as_optional(&self) -> Option<&Rule> {
        let Rule::Choice(members) = self else {
            return None;
        };
        match members.as_slice() {
            [Rule::Blank, other] | [other, Rule::Blank] => Some(other),
            _ => None,
        }
    }
}
