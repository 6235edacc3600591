//! Validation pass over a [`GridConfig`].
//!
//! Only a broken breakpoint order (or a duplicated breakpoint name) is fatal:
//! media queries cascade by ascending `min-width`, so an out-of-order table
//! silently produces broken overrides. Everything else is a warning and the
//! emitter still runs, skipping whatever is missing.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rrcss::{Length, Unit};
use serde::Serialize;

use crate::config::{ColumnTable, ContainerKind, GridConfig, OffsetPolicy, Viewport, is_declared};

/// Allowed deviation from an offset policy, in percentage points.
pub const POLICY_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when there are no errors; warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }
}

/// Checks breakpoint ordering, table completeness, value sanity and offset
/// policies.
pub fn validate(config: &GridConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_system(config, &mut report);
    check_ordering(config, &mut report);
    for vp in &config.viewports {
        check_viewport(config, vp, &mut report);
    }

    let max = config.system.max_columns;
    let column_range = 1..=max;
    #[allow(clippy::reversed_empty_ranges)]
    let offset_range = if max == 0 { 1..=0 } else { 0..=max - 1 };
    check_table(config, &config.rack_columns, "Rack columns", &column_range, &mut report);
    check_table(config, &config.rail_columns, "Rail columns", &column_range, &mut report);
    check_table(config, &config.offsets, "Offsets", &offset_range, &mut report);

    check_column_values(config, ContainerKind::Rack, &mut report);
    check_column_values(config, ContainerKind::Rail, &mut report);
    check_offset_values(config, &mut report);

    for vp in &config.viewports {
        check_offset_policy(config, vp, &mut report);
    }

    report
}

fn check_system(config: &GridConfig, report: &mut ValidationReport) {
    if config.system.max_columns == 0 {
        report.error("max_columns must be at least 1".into());
    }
}

fn check_ordering(config: &GridConfig, report: &mut ValidationReport) {
    if config.viewports.is_empty() {
        report.warn("No breakpoints configured".into());
        return;
    }

    let mut seen = HashSet::new();
    for vp in &config.viewports {
        if !seen.insert(vp.name.as_str()) {
            report.error(format!("Duplicate breakpoint name '{}'", vp.name));
        }
    }

    for pair in config.viewports.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.viewport_width <= prev.viewport_width {
            report.error(format!(
                "Breakpoints must be in ascending order: '{}' ({}px) follows '{}' ({}px)",
                next.name, next.viewport_width, prev.name, prev.viewport_width
            ));
        }
    }
}

fn check_viewport(config: &GridConfig, vp: &Viewport, report: &mut ValidationReport) {
    let expected = vp.expected_available_space();
    if i64::from(vp.available_space) != expected {
        report.warn(format!(
            "Breakpoint '{}': available space {}px does not match {}px - 2 x {}px = {}px",
            vp.name, vp.available_space, vp.viewport_width, vp.container_padding, expected
        ));
    }

    match vp.min_width.parse::<Length>() {
        Err(_) => report.warn(format!(
            "Breakpoint '{}': min-width '{}' is not a valid length",
            vp.name, vp.min_width
        )),
        Ok(length) if length.unit != Unit::Rem => report.warn(format!(
            "Breakpoint '{}': min-width '{}' should be expressed in rem",
            vp.name, vp.min_width
        )),
        Ok(length) => {
            let px = length.to_px().unwrap_or_default();
            if (px - f64::from(vp.viewport_width)).abs() > 0.01 {
                report.warn(format!(
                    "Breakpoint '{}': min-width {} ({}px) does not correspond to viewport width {}px",
                    vp.name, vp.min_width, px, vp.viewport_width
                ));
            }
        }
    }

    let system = &config.system;
    if vp.viewport_width < system.min_viewport || vp.viewport_width > system.max_viewport {
        report.warn(format!(
            "Breakpoint '{}': viewport width {}px is outside the supported range {}px..{}px",
            vp.name, vp.viewport_width, system.min_viewport, system.max_viewport
        ));
    }
}

fn check_table(
    config: &GridConfig,
    table: &ColumnTable,
    label: &str,
    range: &RangeInclusive<u8>,
    report: &mut ValidationReport,
) {
    let expected = range.clone().count();

    for vp in &config.viewports {
        let Some(row) = table.get(&vp.name) else {
            report.warn(format!("{label} have no entries for breakpoint '{}'", vp.name));
            continue;
        };

        let missing: Vec<u8> = range.clone().filter(|i| !row.contains_key(i)).collect();
        if !missing.is_empty() {
            report.warn(format!(
                "{label} for breakpoint '{}' define {} of {} indices (missing {:?})",
                vp.name,
                expected - missing.len(),
                expected,
                missing
            ));
        }

        let extra: Vec<u8> = row.keys().filter(|i| !range.contains(i)).copied().collect();
        if !extra.is_empty() {
            report.warn(format!(
                "{label} for breakpoint '{}' include out-of-range indices {:?}",
                vp.name, extra
            ));
        }
    }

    for name in table.keys() {
        if config.viewport(name).is_none() {
            report.warn(format!("{label} reference unknown breakpoint '{name}'"));
        }
    }
}

fn check_column_values(config: &GridConfig, kind: ContainerKind, report: &mut ValidationReport) {
    for (breakpoint, row) in config.columns(kind) {
        for (column, value) in row.iter().filter(|(_, v)| is_declared(v)) {
            let label = kind.label();
            let Ok(length) = value.parse::<Length>() else {
                report.warn(format!(
                    "{label} column {column} at '{breakpoint}' has unreadable width '{value}'"
                ));
                continue;
            };

            if kind == ContainerKind::Rack && length.as_percent().is_none() {
                report.warn(format!(
                    "{label} column {column} at '{breakpoint}' should be a percentage, got '{value}'"
                ));
            }
            if length.value < 0.0 || (length.is_percent() && length.value > 100.0) {
                report.warn(format!(
                    "{label} column {column} at '{breakpoint}' width '{value}' is outside 0%..100%"
                ));
            }
        }
    }
}

fn check_offset_values(config: &GridConfig, report: &mut ValidationReport) {
    for (breakpoint, row) in &config.offsets {
        for (offset, value) in row.iter().filter(|(_, v)| is_declared(v)) {
            let percent = value.parse::<Length>().ok().and_then(|l| l.as_percent());
            match percent {
                None => report.warn(format!(
                    "Offset {offset} at '{breakpoint}' should be a percentage, got '{value}'"
                )),
                Some(p) if !(0.0..=100.0).contains(&p) => report.warn(format!(
                    "Offset {offset} at '{breakpoint}' value '{value}' is outside 0%..100%"
                )),
                Some(_) => {}
            }
        }
    }
}

/// Expected offset for `offset` under the breakpoint's policy, in percent.
///
/// `None` for custom policies, missing values, or values that are not
/// percentages.
pub fn policy_expectation(config: &GridConfig, vp: &Viewport, offset: u8) -> Option<f64> {
    let max = config.system.max_columns;
    match vp.offset_policy {
        OffsetPolicy::Custom => None,
        OffsetPolicy::Uniform => Some(f64::from(offset) / f64::from(max) * 100.0),
        OffsetPolicy::Centering => {
            let column = config.rack_value(&vp.name, max.checked_sub(offset)?)?;
            let width = column.parse::<Length>().ok()?.as_percent()?;
            Some((100.0 - width) / 2.0)
        }
    }
}

/// `offset + column + offset - 100`, for the column complementing `offset`.
///
/// Zero means the column is exactly centered.
pub fn centering_deviation(config: &GridConfig, breakpoint: &str, offset: u8) -> Option<f64> {
    let max = config.system.max_columns;
    let offset_pct = percent(config.offset_value(breakpoint, offset)?)?;
    let column_pct = percent(config.rack_value(breakpoint, max.checked_sub(offset)?)?)?;
    Some(offset_pct * 2.0 + column_pct - 100.0)
}

fn percent(value: &str) -> Option<f64> {
    value.parse::<Length>().ok()?.as_percent()
}

fn check_offset_policy(config: &GridConfig, vp: &Viewport, report: &mut ValidationReport) {
    let Some(row) = config.offsets.get(&vp.name) else {
        return;
    };

    for (offset, value) in row.iter().filter(|(_, v)| is_declared(v)) {
        let Some(actual) = percent(value) else {
            continue;
        };
        let Some(expected) = policy_expectation(config, vp, *offset) else {
            continue;
        };
        if (actual - expected).abs() > POLICY_TOLERANCE + 1e-9 {
            report.warn(format!(
                "Offset {offset} at '{}' is {value} but the {:?} policy expects {expected:.2}%",
                vp.name, vp.offset_policy
            ));
        }
    }
}
