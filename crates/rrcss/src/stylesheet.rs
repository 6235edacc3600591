//! Rule and stylesheet data structures.
//!
//! A [`StyleSheet`] is an ordered list of [`Rule`]s. A rule has a
//! [`Prelude`] (a selector list or an at-rule such as
//! `@media (min-width: 48rem)`) and an ordered list of items, each either a
//! [`Declaration`] or a nested rule. This is the same shape a Tailwind plugin
//! passes to `addBase`: a mapping from selector to declarations, where an
//! at-rule key maps to further selectors.
//!
//! Order is preserved everywhere so that output is byte-for-byte stable.

use std::fmt;

use crate::error::CssError;
use crate::parser::selectors::{parse_selector_list, split_selector_list};

/// A single `property: value` pair. Values are carried verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Custom properties start with `--`.
    pub fn is_custom_property(&self) -> bool {
        self.property.starts_with("--")
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectorList {
    pub selectors: Vec<String>,
}

impl SelectorList {
    pub fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }

    /// Parses a comma separated selector list, rejecting malformed input.
    pub fn parse(input: &str) -> Result<Self, CssError> {
        parse_selector_list(input).map(Self::new)
    }
}

impl From<&str> for SelectorList {
    fn from(input: &str) -> Self {
        Self::new(split_selector_list(input))
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selectors.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prelude {
    Selectors(SelectorList),
    /// Raw at-rule text, e.g. `@media (min-width: 48rem)`.
    AtRule(String),
}

impl fmt::Display for Prelude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prelude::Selectors(list) => list.fmt(f),
            Prelude::AtRule(text) => f.write_str(text),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleItem {
    Declaration(Declaration),
    NestedRule(Rule),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub prelude: Prelude,
    pub items: Vec<RuleItem>,
}

impl Rule {
    /// Creates a style rule. Text starting with `@` becomes an at-rule.
    pub fn new(selector: &str) -> Self {
        let trimmed = selector.trim();
        let prelude = if trimmed.starts_with('@') {
            Prelude::AtRule(trimmed.to_string())
        } else {
            Prelude::Selectors(SelectorList::from(trimmed))
        };
        Self {
            prelude,
            items: Vec::new(),
        }
    }

    pub fn at(prelude: impl Into<String>) -> Self {
        Self {
            prelude: Prelude::AtRule(prelude.into()),
            items: Vec::new(),
        }
    }

    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_declaration(Declaration::new(property, value));
        self
    }

    pub fn nest(mut self, rule: Rule) -> Self {
        self.push_rule(rule);
        self
    }

    pub fn push_declaration(&mut self, declaration: Declaration) {
        self.items.push(RuleItem::Declaration(declaration));
    }

    pub fn push_rule(&mut self, rule: Rule) {
        self.items.push(RuleItem::NestedRule(rule));
    }

    pub fn is_at_rule(&self) -> bool {
        matches!(self.prelude, Prelude::AtRule(_))
    }

    /// The prelude as it would be printed.
    pub fn selector_text(&self) -> String {
        self.prelude.to_string()
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.items.iter().filter_map(|item| match item {
            RuleItem::Declaration(d) => Some(d),
            RuleItem::NestedRule(_) => None,
        })
    }

    pub fn nested_rules(&self) -> impl Iterator<Item = &Rule> {
        self.items.iter().filter_map(|item| match item {
            RuleItem::NestedRule(r) => Some(r),
            RuleItem::Declaration(_) => None,
        })
    }

    /// Value of `property`; the last declaration wins, as in the cascade.
    pub fn declaration(&self, property: &str) -> Option<&str> {
        self.declarations()
            .filter(|d| d.property == property)
            .last()
            .map(|d| d.value.as_str())
    }

    /// First directly nested rule whose prelude prints as `selector`.
    pub fn nested(&self, selector: &str) -> Option<&Rule> {
        self.nested_rules().find(|r| r.selector_text() == selector)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn extend(&mut self, other: StyleSheet) {
        self.rules.extend(other.rules);
    }

    /// First top-level rule whose prelude prints as `selector`.
    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.selector_text() == selector)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Flattens nesting and prints the stylesheet as CSS text.
    pub fn to_css(&self) -> String {
        crate::render::render_stylesheet(self)
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
