//! Helpers for authoring configuration tables.
//!
//! All grid arithmetic happens here, when a table is generated. The derivation
//! engine only ever copies the resulting strings into CSS.
//!
//! Percentages are rounded to two decimals with trailing zeros trimmed, so a
//! twelfth prints as `8.33%` and a quarter as `25%`.

use rrcss::Length;

use crate::config::{ColumnRow, OffsetPolicy, Viewport};

/// Rounds to two decimals and prints as a percentage.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".into();
    }
    format!("{text}%")
}

/// `px` as a percentage of `available` px.
pub fn percent_of(px: f64, available: f64) -> String {
    if available <= 0.0 {
        return format_percent(0.0);
    }
    format_percent(px / available * 100.0)
}

/// Builds a breakpoint, deriving `available_space` and a rem `min_width`.
pub fn viewport(name: &str, width: u32, padding: u32) -> Viewport {
    Viewport {
        name: name.to_string(),
        viewport_width: width,
        min_width: Length::rem_from_px(f64::from(width)).to_string(),
        container_padding: padding,
        available_space: width.saturating_sub(padding * 2),
        description: None,
        offset_policy: OffsetPolicy::Custom,
    }
}

/// Builds a row from consecutive values, the first at index `start`.
pub fn row(start: u8, values: &[&str]) -> ColumnRow {
    values
        .iter()
        .zip(start..)
        .map(|(value, index)| (index, (*value).to_string()))
        .collect()
}

/// `n / max` for every column `1..=max`.
pub fn uniform_rack_columns(max: u8) -> ColumnRow {
    (1..=max)
        .map(|n| (n, format_percent(f64::from(n) / f64::from(max) * 100.0)))
        .collect()
}

/// `n / max` for every offset `0..max`.
pub fn uniform_offsets(max: u8) -> ColumnRow {
    (0..max)
        .map(|n| (n, format_percent(f64::from(n) / f64::from(max) * 100.0)))
        .collect()
}

/// Offsets that center column `max - n` after offset `n`.
///
/// Offsets whose complementary column is missing or not a percentage are left
/// out.
pub fn centered_offsets(rack: &ColumnRow, max: u8) -> ColumnRow {
    (0..max)
        .filter_map(|n| {
            let column = rack.get(&(max - n))?;
            let width = column.parse::<Length>().ok()?.as_percent()?;
            Some((n, format_percent((100.0 - width) / 2.0)))
        })
        .collect()
}

/// Percentage rack widths from measured pixel widths, first width = column 1.
pub fn rack_columns_from_px(widths: &[f64], available: f64) -> ColumnRow {
    widths
        .iter()
        .zip(1u8..)
        .map(|(px, n)| (n, percent_of(*px, available)))
        .collect()
}

/// Fixed rail widths in rem, first width = column 1.
pub fn fixed_rail_columns(rems: &[f64]) -> ColumnRow {
    rems.iter()
        .zip(1u8..)
        .map(|(rem, n)| (n, Length::rem(*rem).to_string()))
        .collect()
}

/// Makes the last column span the whole rail ("slide" behavior).
pub fn with_slide(mut rail: ColumnRow, max: u8) -> ColumnRow {
    rail.insert(max, "100%".into());
    rail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(100.0 / 12.0), "8.33%");
        assert_eq!(format_percent(200.0 / 12.0), "16.67%");
        assert_eq!(format_percent(25.0), "25%");
        assert_eq!(format_percent(15.7), "15.7%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(-0.001), "0%");
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(100.0, 1376.0), "7.27%");
        assert_eq!(percent_of(161.0, 335.0), "48.06%");
        assert_eq!(percent_of(10.0, 0.0), "0%");
    }

    #[test]
    fn test_viewport_derives_rem_and_available_space() {
        let vp = viewport("sm", 375, 24);
        assert_eq!(vp.min_width, "23.4375rem");
        assert_eq!(vp.available_space, 327);
    }

    #[test]
    fn test_row_indices() {
        let offsets = row(0, &["0%", "1%"]);
        assert_eq!(offsets.get(&0).map(String::as_str), Some("0%"));
        assert_eq!(offsets.get(&1).map(String::as_str), Some("1%"));
    }

    #[test]
    fn test_uniform_tables() {
        let columns = uniform_rack_columns(12);
        assert_eq!(columns.len(), 12);
        assert_eq!(columns[&6], "50%");
        assert_eq!(columns[&12], "100%");

        let offsets = uniform_offsets(12);
        assert_eq!(offsets.len(), 12);
        assert_eq!(offsets[&0], "0%");
        assert_eq!(offsets[&3], "25%");
    }

    #[test]
    fn test_centered_offsets() {
        let offsets = centered_offsets(&uniform_rack_columns(12), 12);
        assert_eq!(offsets[&0], "0%");
        assert_eq!(offsets[&6], "25%");
        assert_eq!(offsets[&9], "37.5%");
    }

    #[test]
    fn test_rack_columns_from_measured_px() {
        // lg: 1376px available
        let columns = rack_columns_from_px(&[100.0, 216.0, 1376.0], 1376.0);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[&1], "7.27%");
        assert_eq!(columns[&2], "15.7%");
        assert_eq!(columns[&3], "100%");
        assert!(rack_columns_from_px(&[], 1376.0).is_empty());
    }

    #[test]
    fn test_fixed_rail_with_slide() {
        let rail = with_slide(fixed_rail_columns(&[16.0, 20.0]), 12);
        assert_eq!(rail[&1], "16rem");
        assert_eq!(rail[&12], "100%");
    }
}
