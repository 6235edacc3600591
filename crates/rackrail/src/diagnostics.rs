//! Read-only helpers for debug displays: which breakpoint is active, and what
//! a column or offset resolves to there.

use rrcss::{Length, PX_PER_REM};

use crate::config::{ContainerKind, GridConfig, Viewport};

/// Breakpoint active at `width` px: the widest one whose viewport width is
/// reached. `None` below the smallest breakpoint, where only the base styles
/// apply; the demo page's script reported its smallest breakpoint there instead.
pub fn breakpoint_for_width(config: &GridConfig, width: u32) -> Option<&Viewport> {
    config
        .viewports
        .iter()
        .filter(|vp| width >= vp.viewport_width)
        .max_by_key(|vp| vp.viewport_width)
}

/// `"1024px (md)"`, or `"300px (base)"` below every breakpoint.
pub fn viewport_label(config: &GridConfig, width: u32) -> String {
    let name = breakpoint_for_width(config, width).map_or("base", |vp| vp.name.as_str());
    format!("{width}px ({name})")
}

/// Absolute size of a CSS length in px (`"16rem"` → 256).
pub fn rem_to_px(value: &str) -> Option<f64> {
    value.parse::<Length>().ok()?.to_px()
}

/// Rounds to whole pixels: `163.6` → `"164px"`.
pub fn format_px(px: f64) -> String {
    format!("{}px", px.round() as i64)
}

/// Text for a column's info display.
///
/// - rack: `"50% / 164px / 10.25rem"` (configured width, measured px, the same px in rem)
/// - rail: `"16rem / 256px"` (configured width, its px size)
///
/// A column with no configured width shows `auto`; a rail column that has no
/// absolute size falls back to the measured width.
pub fn column_info(
    config: &GridConfig,
    breakpoint: &str,
    container: ContainerKind,
    column: u8,
    measured_px: f64,
) -> String {
    let configured = config
        .column_value(container, breakpoint, column)
        .unwrap_or("auto");

    match container {
        ContainerKind::Rack => {
            // rem follows the whole pixels shown, rounded half up
            let px = measured_px.round();
            let rem = (px / PX_PER_REM * 100.0).round() / 100.0;
            format!("{configured} / {} / {rem:.2}rem", format_px(px))
        }
        ContainerKind::Rail => {
            let px = rem_to_px(configured).unwrap_or(measured_px);
            format!("{configured} / {}", format_px(px))
        }
    }
}

/// Text for an offset's info display, naming the column it pairs with:
/// `"Offset: 87px (centered), Column: 58.33%"`.
pub fn offset_info(config: &GridConfig, breakpoint: &str, offset: u8, measured_px: f64) -> String {
    let column = config
        .system
        .max_columns
        .checked_sub(offset)
        .and_then(|n| config.rack_value(breakpoint, n))
        .unwrap_or("auto");
    format!(
        "Offset: {} (centered), Column: {column}",
        format_px(measured_px)
    )
}

/// One line per breakpoint describing its geometry.
pub fn viewport_legend(config: &GridConfig) -> Vec<String> {
    config
        .viewports
        .iter()
        .map(|vp| {
            let mut line = format!(
                "{}: {}px and up ({}), padding {}px, available {}px",
                vp.name, vp.viewport_width, vp.min_width, vp.container_padding, vp.available_space
            );
            if let Some(description) = &vp.description {
                line.push_str(&format!(", {description}"));
            }
            line
        })
        .collect()
}
