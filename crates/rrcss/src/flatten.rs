//! Nested rule flattening.
//!
//! Rules built for the grid may nest, SCSS-style, the way Tailwind plugin
//! objects do:
//!
//! ```css
//! .rail {
//!     overflow-x: auto;
//!     &::-webkit-scrollbar { display: none; }
//! }
//! ```
//!
//! This flattens to:
//!
//! ```css
//! .rail { overflow-x: auto; }
//! .rail::-webkit-scrollbar { display: none; }
//! ```
//!
//! ## Flattening Rules
//!
//! - `&` is replaced by the parent selector
//! - Nested without `&` implies descendant combinator
//! - Every parent/child pair of a selector list is combined
//! - At-rules (`@media ...`) stay as blocks; their children are flattened
//!   inside them, keeping the enclosing selector context

use crate::parser::selectors::combine_selector;
use crate::stylesheet::{Prelude, Rule, RuleItem, SelectorList, StyleSheet};

/// Flattens a stylesheet of potentially nested rules.
///
/// The result only nests style rules directly inside at-rules.
pub fn flatten_stylesheet(sheet: &StyleSheet) -> StyleSheet {
    let mut flat_rules = Vec::new();
    for rule in &sheet.rules {
        flatten_rule(rule, None, &mut flat_rules);
    }
    StyleSheet { rules: flat_rules }
}

fn flatten_rule(rule: &Rule, parent: Option<&SelectorList>, output: &mut Vec<Rule>) {
    match &rule.prelude {
        Prelude::AtRule(text) => {
            let mut inner = Vec::new();

            // Declarations directly in an at-rule apply to the enclosing selector
            let decls = local_declarations(rule);
            if let (Some(parent), false) = (parent, decls.is_empty()) {
                inner.push(Rule {
                    prelude: Prelude::Selectors(parent.clone()),
                    items: decls,
                });
            }

            for nested in rule.nested_rules() {
                flatten_rule(nested, parent, &mut inner);
            }

            if !inner.is_empty() {
                output.push(Rule {
                    prelude: Prelude::AtRule(text.clone()),
                    items: inner.into_iter().map(RuleItem::NestedRule).collect(),
                });
            }
        }
        Prelude::Selectors(own) => {
            let selectors = match parent {
                Some(parent) => combine_selectors(parent, own),
                None => own.clone(),
            };

            // 1. Local declarations first
            let decls = local_declarations(rule);
            if !decls.is_empty() {
                output.push(Rule {
                    prelude: Prelude::Selectors(selectors.clone()),
                    items: decls,
                });
            }

            // 2. Lift nested rules with the combined selectors as their parent
            for nested in rule.nested_rules() {
                flatten_rule(nested, Some(&selectors), output);
            }
        }
    }
}

fn local_declarations(rule: &Rule) -> Vec<RuleItem> {
    rule.items
        .iter()
        .filter(|i| matches!(i, RuleItem::Declaration(_)))
        .cloned()
        .collect()
}

fn combine_selectors(parents: &SelectorList, children: &SelectorList) -> SelectorList {
    let mut combined = Vec::new();
    for p in &parents.selectors {
        for c in &children.selectors {
            combined.push(combine_selector(p, c));
        }
    }
    SelectorList::new(combined)
}
