use std::fmt;
use std::str::FromStr;

use crate::error::CssError;
use crate::parser::values::parse_var_reference;

/// A `var(--name)` reference, optionally with a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarReference {
    /// Custom property name including the leading `--`.
    pub name: String,
    pub fallback: Option<String>,
}

impl VarReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

impl fmt::Display for VarReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fallback {
            Some(fallback) => write!(f, "var({}, {})", self.name, fallback),
            None => write!(f, "var({})", self.name),
        }
    }
}

impl FromStr for VarReference {
    type Err = CssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_var_reference(s.trim()) {
            Ok((rest, reference)) if rest.trim().is_empty() => Ok(reference),
            _ => Err(CssError::InvalidVarReference(s.to_string())),
        }
    }
}
