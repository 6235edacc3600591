use crate::error::CssError;

/// Splits a selector list on top-level commas.
///
/// Commas inside `(...)` or `[...]` belong to the selector
/// (`.rail:is(.a, .b)` stays whole). Parts are trimmed and empty parts are
/// dropped.
pub fn split_selector_list(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in input.chars() {
        match c {
            '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                push_part(&mut parts, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }
    push_part(&mut parts, &current);
    parts
}

fn push_part(parts: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

/// Strict variant of [`split_selector_list`] that rejects empty lists, empty
/// list entries and unbalanced brackets.
pub fn parse_selector_list(input: &str) -> Result<Vec<String>, CssError> {
    let mut depth = 0i32;
    for c in input.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(CssError::InvalidSelector(input.to_string()));
        }
    }
    if depth != 0 {
        return Err(CssError::InvalidSelector(input.to_string()));
    }

    let parts = split_selector_list(input);
    let commas = count_top_level_commas(input);
    if parts.is_empty() || parts.len() != commas + 1 {
        return Err(CssError::InvalidSelector(input.to_string()));
    }
    Ok(parts)
}

fn count_top_level_commas(input: &str) -> usize {
    let mut depth = 0usize;
    let mut commas = 0;
    for c in input.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => commas += 1,
            _ => {}
        }
    }
    commas
}

/// Combines a parent selector with a nested child selector.
///
/// - `&` in the child is replaced by the parent (`&::-webkit-scrollbar`)
/// - Without `&` the child becomes a descendant of the parent
pub fn combine_selector(parent: &str, child: &str) -> String {
    if child.contains('&') {
        child.replace('&', parent)
    } else {
        format!("{parent} {child}")
    }
}
