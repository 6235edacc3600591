//! CSS text output.
//!
//! Output is deterministic: rules and declarations print in insertion order,
//! two-space indentation, one blank line between top-level blocks, and a
//! trailing newline after the last block.

use crate::flatten::flatten_stylesheet;
use crate::stylesheet::{Rule, RuleItem, StyleSheet};

const INDENT: &str = "  ";

/// Flattens `sheet` and prints it as CSS.
pub fn render_stylesheet(sheet: &StyleSheet) -> String {
    let flat = flatten_stylesheet(sheet);
    let mut out = String::new();
    for (i, rule) in flat.rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_rule(&mut out, rule, 0);
    }
    out
}

fn write_rule(out: &mut String, rule: &Rule, depth: usize) {
    push_indent(out, depth);
    out.push_str(&rule.selector_text());
    out.push_str(" {\n");

    for item in &rule.items {
        match item {
            RuleItem::Declaration(decl) => {
                push_indent(out, depth + 1);
                out.push_str(&decl.to_string());
                out.push_str(";\n");
            }
            RuleItem::NestedRule(nested) => write_rule(out, nested, depth + 1),
        }
    }

    push_indent(out, depth);
    out.push_str("}\n");
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
