//! The grid configuration table.
//!
//! Everything the grid emits comes from one [`GridConfig`]:
//!
//! | Field          | Shape                                      |
//! |----------------|--------------------------------------------|
//! | `system`       | [`SystemConstants`]                        |
//! | `viewports`    | ordered list of [`Viewport`] breakpoints   |
//! | `rack_columns` | breakpoint → column 1..=12 → percentage    |
//! | `rail_columns` | breakpoint → column 1..=12 → fixed length  |
//! | `offsets`      | breakpoint → offset 0..=11 → percentage    |
//!
//! Values are pre-computed CSS strings and are emitted verbatim. A value of
//! `auto` (or an empty string) means "no rule for this index at this
//! breakpoint", exactly like a missing entry.
//!
//! The table is plain serde data so fixtures can be stored as JSON and diffed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rrcss::Length;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Number of columns in a full row.
pub const MAX_COLUMNS: u8 = 12;

/// Column (or offset) index → CSS value for one breakpoint.
pub type ColumnRow = BTreeMap<u8, String>;

/// Breakpoint name → [`ColumnRow`].
pub type ColumnTable = BTreeMap<String, ColumnRow>;

/// Returns false for values that must not produce a declaration.
pub fn is_declared(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("auto")
}

/// System-wide constants shared by every breakpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SystemConstants {
    /// Default container padding, used below the smallest breakpoint.
    pub container_padding: String,
    /// Gap between columns.
    pub gap: String,
    /// Client storage key holding the debug flag.
    pub debug_mode_key: String,
    pub max_columns: u8,
    /// Smallest supported viewport width in px.
    pub min_viewport: u32,
    /// Largest supported viewport width in px.
    pub max_viewport: u32,
    /// Custom property prefix: `--{namespace}-rack-col-1`.
    pub namespace: String,
}

impl Default for SystemConstants {
    fn default() -> Self {
        Self {
            container_padding: "1.5rem".into(),
            gap: "1rem".into(),
            debug_mode_key: "rack-rail-debug-mode".into(),
            max_columns: MAX_COLUMNS,
            min_viewport: 320,
            max_viewport: 2560,
            namespace: "tw".into(),
        }
    }
}

/// How a breakpoint's offsets relate to its rack columns.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OffsetPolicy {
    /// `offset(N) = (100% - rack_col(12 - N)) / 2`, centering the column.
    Centering,
    /// `offset(N) = N / 12`.
    Uniform,
    /// Hand-tuned values; nothing is checked.
    #[default]
    Custom,
}

/// One breakpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Breakpoint identifier (`sm`, `md`, ...).
    pub name: String,
    /// Design target width in px.
    pub viewport_width: u32,
    /// Media query threshold, in rem (`23.4375rem` for 375px).
    pub min_width: String,
    /// Padding on each side of the container, in px.
    pub container_padding: u32,
    /// `viewport_width - 2 * container_padding`, in px.
    pub available_space: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub offset_policy: OffsetPolicy,
}

impl Viewport {
    /// `@media (min-width: <min_width>)`
    pub fn media_query(&self) -> String {
        format!("@media (min-width: {})", self.min_width)
    }

    /// Container padding converted to rem.
    pub fn padding_rem(&self) -> Length {
        Length::rem_from_px(f64::from(self.container_padding))
    }

    /// Both paddings together, in rem.
    pub fn padding_total_rem(&self) -> Length {
        Length::rem_from_px(f64::from(self.container_padding) * 2.0)
    }

    /// Available space as recomputed from width and padding.
    pub fn expected_available_space(&self) -> i64 {
        i64::from(self.viewport_width) - 2 * i64::from(self.container_padding)
    }
}

/// Which column table a container reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Flexible, percentage columns that wrap.
    Rack,
    /// Fixed-width columns that scroll horizontally.
    Rail,
}

impl ContainerKind {
    /// Class name of the container (`rack` / `rail`).
    pub fn class_name(&self) -> &'static str {
        match self {
            ContainerKind::Rack => "rack",
            ContainerKind::Rail => "rail",
        }
    }

    /// Label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::Rack => "Rack",
            ContainerKind::Rail => "Rail",
        }
    }
}

/// The complete configuration table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct GridConfig {
    #[serde(default)]
    pub system: SystemConstants,
    pub viewports: Vec<Viewport>,
    #[serde(default)]
    pub rack_columns: ColumnTable,
    #[serde(default)]
    pub rail_columns: ColumnTable,
    #[serde(default)]
    pub offsets: ColumnTable,
}

impl GridConfig {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    /// Pretty JSON, stable key order (all maps are `BTreeMap`s).
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    pub fn viewport(&self, name: &str) -> Option<&Viewport> {
        self.viewports.iter().find(|v| v.name == name)
    }

    pub fn breakpoint_names(&self) -> Vec<&str> {
        self.viewports.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn columns(&self, kind: ContainerKind) -> &ColumnTable {
        match kind {
            ContainerKind::Rack => &self.rack_columns,
            ContainerKind::Rail => &self.rail_columns,
        }
    }

    /// Declared column width, skipping `auto` and absent entries.
    pub fn column_value(&self, kind: ContainerKind, breakpoint: &str, column: u8) -> Option<&str> {
        declared(self.columns(kind), breakpoint, column)
    }

    pub fn rack_value(&self, breakpoint: &str, column: u8) -> Option<&str> {
        self.column_value(ContainerKind::Rack, breakpoint, column)
    }

    pub fn rail_value(&self, breakpoint: &str, column: u8) -> Option<&str> {
        self.column_value(ContainerKind::Rail, breakpoint, column)
    }

    pub fn offset_value(&self, breakpoint: &str, offset: u8) -> Option<&str> {
        declared(&self.offsets, breakpoint, offset)
    }
}

fn declared<'a>(table: &'a ColumnTable, breakpoint: &str, index: u8) -> Option<&'a str> {
    table
        .get(breakpoint)
        .and_then(|row| row.get(&index))
        .map(String::as_str)
        .filter(|value| is_declared(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Viewport {
        Viewport {
            name: "sm".into(),
            viewport_width: 375,
            min_width: "23.4375rem".into(),
            container_padding: 24,
            available_space: 327,
            description: None,
            offset_policy: OffsetPolicy::Custom,
        }
    }

    #[test]
    fn test_viewport_media_query_and_padding() {
        let vp = small();
        assert_eq!(vp.media_query(), "@media (min-width: 23.4375rem)");
        assert_eq!(vp.padding_rem().to_string(), "1.5rem");
        assert_eq!(vp.padding_total_rem().to_string(), "3rem");
        assert_eq!(vp.expected_available_space(), 327);
    }

    #[test]
    fn test_auto_and_empty_are_not_declared() {
        assert!(is_declared("50%"));
        assert!(!is_declared("auto"));
        assert!(!is_declared(" Auto "));
        assert!(!is_declared(""));
    }

    #[test]
    fn test_column_lookup_skips_auto() {
        let mut config = GridConfig {
            viewports: vec![small()],
            ..Default::default()
        };
        let row: ColumnRow = [(1, "auto".to_string()), (6, "50%".to_string())].into();
        config.rack_columns.insert("sm".into(), row);

        assert_eq!(config.rack_value("sm", 6), Some("50%"));
        assert_eq!(config.rack_value("sm", 1), None);
        assert_eq!(config.rack_value("sm", 2), None);
        assert_eq!(config.rack_value("md", 6), None);
    }

    #[test]
    fn test_policy_serializes_lowercase() {
        let json = serde_json::to_string(&OffsetPolicy::Centering).unwrap();
        assert_eq!(json, "\"centering\"");
    }
}
