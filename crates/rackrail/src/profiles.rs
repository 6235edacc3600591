//! Named configuration profiles.
//!
//! The grid ships several table variants that differ only in their numbers.
//! Each is a [`GridConfig`] registered under a name and selected at build
//! time; the derivation engine never branches on which one is active.
//!
//! | Profile     | Breakpoints (px)          | Offsets    |
//! |-------------|---------------------------|------------|
//! | `rack-rail` | 375 / 770 / 1450 / 1800   | hand-tuned |
//! | `twlayout`  | 375 / 768 / 1440 / 1920   | centering  |
//! | `tailwind`  | 640 / 768 / 1024 / 1280   | uniform    |
//!
//! Profiles are built on first use and cached for the life of the process.

use once_cell::sync::Lazy;
use phf::phf_map;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::author::{
    centered_offsets, fixed_rail_columns, row, uniform_offsets, uniform_rack_columns, viewport,
    with_slide,
};
use crate::config::{GridConfig, MAX_COLUMNS, OffsetPolicy, SystemConstants, Viewport};
use crate::error::{GridError, Result};

/// Profile used when none is named.
pub const DEFAULT_PROFILE: &str = "rack-rail";

/// Map of profile names to their constructors.
static PROFILES: phf::Map<&'static str, fn() -> GridConfig> = phf_map! {
    "rack-rail" => rack_rail as fn() -> GridConfig,
    "twlayout" => twlayout as fn() -> GridConfig,
    "tailwind" => tailwind as fn() -> GridConfig,
};

/// Global cache of built profiles.
static PROFILE_CACHE: Lazy<RwLock<HashMap<&'static str, Arc<GridConfig>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Looks up a profile by name, building it on first use.
pub fn profile(name: &str) -> Result<Arc<GridConfig>> {
    let (key, build) = PROFILES
        .get_entry(name)
        .ok_or_else(|| GridError::UnknownProfile(name.to_string()))?;

    // Try read lock first
    if let Ok(cache) = PROFILE_CACHE.read() {
        if let Some(cached) = cache.get(key) {
            return Ok(Arc::clone(cached));
        }
    }

    // Build and cache
    let config = Arc::new(build());
    if let Ok(mut cache) = PROFILE_CACHE.write() {
        let entry = cache.entry(*key).or_insert_with(|| Arc::clone(&config));
        return Ok(Arc::clone(entry));
    }
    Ok(config)
}

/// Registered profile names, sorted.
pub fn profile_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PROFILES.keys().copied().collect();
    names.sort_unstable();
    names
}

fn described(mut vp: Viewport, description: &str, policy: OffsetPolicy) -> Viewport {
    vp.description = Some(description.to_string());
    vp.offset_policy = policy;
    vp
}

/// Rack & Rail package tables: measured column widths, offsets compensating
/// for the container padding.
fn rack_rail() -> GridConfig {
    let mut config = GridConfig {
        system: SystemConstants::default(),
        viewports: vec![
            viewport("sm", 375, 20),
            viewport("md", 770, 40),
            viewport("lg", 1450, 32),
            viewport("xl", 1800, 32),
        ],
        ..Default::default()
    };

    let rack = [
        ("sm", row(1, &["48.06%", "100%", "100%", "100%", "100%", "100%", "100%", "100%", "100%", "100%", "100%", "100%"])),
        ("md", row(1, &["32.17%", "40.14%", "49.13%", "49.13%", "58.12%", "66.09%", "100%", "100%", "100%", "100%", "100%", "100%"])),
        ("lg", row(1, &["7.27%", "15.7%", "24.13%", "32.56%", "40.99%", "49.42%", "57.85%", "66.28%", "74.71%", "83.14%", "91.57%", "100%"])),
        ("xl", row(1, &["5.76%", "12.44%", "19.12%", "25.81%", "32.49%", "39.17%", "45.85%", "52.53%", "59.22%", "65.9%", "72.58%", "100%"])),
    ];
    let wide_rail = fixed_rail_columns(&[16.25, 20.0, 23.75, 28.75, 33.75, 40.0, 46.25, 52.5, 58.75, 65.0, 71.25, 77.5]);
    let rail = [
        ("sm", fixed_rail_columns(&[16.25, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0])),
        ("md", fixed_rail_columns(&[16.25, 20.0, 20.0, 25.0, 28.125, 30.75, 33.375, 36.0625, 38.75, 41.4375, 44.125, 46.125])),
        ("lg", wide_rail.clone()),
        ("xl", wide_rail),
    ];
    let offsets = [
        ("sm", row(0, &["0%", "0%", "0%", "0%", "0%", "0%", "0%", "0%", "0%", "0%", "0%", "25.97%"])),
        ("md", row(0, &["0%", "0%", "0%", "0%", "0%", "0%", "16.96%", "19.20%", "23.70%", "23.70%", "28.19%", "32.75%"])),
        ("lg", row(0, &["0%", "0%", "0%", "0%", "0%", "0%", "8.43%", "8.43%", "16.79%", "16.79%", "25.15%", "25.15%"])),
        ("xl", row(0, &["0%", "0%", "0%", "0%", "0%", "0%", "6.68%", "6.68%", "13.31%", "13.31%", "19.93%", "19.93%"])),
    ];

    for (name, columns) in rack {
        config.rack_columns.insert(name.into(), columns);
    }
    for (name, columns) in rail {
        config.rail_columns.insert(name.into(), columns);
    }
    for (name, values) in offsets {
        config.offsets.insert(name.into(), values);
    }
    config
}

/// Rail widths shared by the demo profiles; the last column slides.
fn demo_rail() -> crate::config::ColumnRow {
    with_slide(
        fixed_rail_columns(&[16.0, 20.0, 24.0, 28.0, 32.0, 36.0, 40.0, 44.0, 48.0, 52.0, 56.0]),
        MAX_COLUMNS,
    )
}

/// TWLayout demo tables: uniform columns on small screens, measured columns on
/// large screens, offsets centering the complementary column.
fn twlayout() -> GridConfig {
    let mut config = GridConfig {
        system: SystemConstants {
            debug_mode_key: "twlayout-debug-mode".into(),
            ..SystemConstants::default()
        },
        viewports: vec![
            described(viewport("sm", 375, 24), "Mobile devices", OffsetPolicy::Centering),
            described(viewport("md", 768, 32), "Tablets and small laptops", OffsetPolicy::Centering),
            described(viewport("lg", 1440, 32), "Desktop and large laptops", OffsetPolicy::Centering),
            described(viewport("xl", 1920, 32), "Large desktop screens", OffsetPolicy::Centering),
        ],
        ..Default::default()
    };

    let rack = [
        ("sm", uniform_rack_columns(MAX_COLUMNS)),
        ("md", uniform_rack_columns(MAX_COLUMNS)),
        ("lg", row(1, &["7.27%", "15.7%", "24.13%", "32.56%", "40.99%", "49.42%", "57.85%", "66.28%", "74.71%", "83.14%", "91.57%", "100%"])),
        ("xl", row(1, &["5.76%", "12.44%", "19.12%", "25.81%", "32.49%", "39.17%", "45.85%", "52.53%", "59.22%", "65.9%", "72.58%", "100%"])),
    ];

    for (name, columns) in rack {
        config
            .offsets
            .insert(name.into(), centered_offsets(&columns, MAX_COLUMNS));
        config.rack_columns.insert(name.into(), columns);
        config.rail_columns.insert(name.into(), demo_rail());
    }
    config
}

/// Standard Tailwind breakpoints with a plain twelve-column grid.
fn tailwind() -> GridConfig {
    let mut config = GridConfig {
        system: SystemConstants {
            debug_mode_key: "twlayout-debug-mode".into(),
            ..SystemConstants::default()
        },
        viewports: vec![
            described(viewport("sm", 640, 24), "Small devices (Tailwind sm)", OffsetPolicy::Uniform),
            described(viewport("md", 768, 32), "Medium devices (Tailwind md)", OffsetPolicy::Uniform),
            described(viewport("lg", 1024, 32), "Desktop and large laptops (Tailwind lg)", OffsetPolicy::Uniform),
            described(viewport("xl", 1280, 32), "Large desktop screens (Tailwind xl)", OffsetPolicy::Uniform),
        ],
        ..Default::default()
    };

    let names: Vec<String> = config.viewports.iter().map(|v| v.name.clone()).collect();
    for name in names {
        config
            .rack_columns
            .insert(name.clone(), uniform_rack_columns(MAX_COLUMNS));
        config.rail_columns.insert(name.clone(), demo_rail());
        config.offsets.insert(name, uniform_offsets(MAX_COLUMNS));
    }
    config
}
