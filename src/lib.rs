//! Rack & Rail: a configuration-driven responsive grid for Tailwind-style
//! builds.
//!
//! This crate ties together [`rrcss`] (CSS values and stylesheet output) and
//! [`rackrail`] (grid tables, validation, derivation, emission).
//!
//! ```rust
//! let css = rack_rail::generate_css("rack-rail").unwrap();
//! assert!(css.contains("@media (min-width: 23.4375rem)"));
//! ```

pub mod error;

pub use error::{RackRailError, Result};
pub use rackrail::{
    ContainerKind, CssCollector, DebugMode, EmitOutcome, GridConfig, GridPlugin, StyleSink,
    ValidationReport, Viewport, init_logger, profile, profile_names, validate,
};
pub use rrcss::{Length, Rule, StyleSheet};

pub use rackrail;
pub use rrcss;

// Re-export the log crate so users can use rack_rail::log::info!, etc.
pub use log;

/// Generates the full stylesheet for a configuration.
///
/// Unlike [`GridPlugin::emit`], which logs and carries on, this surfaces
/// validation errors and generation failures as errors.
pub fn generate_css_for(config: &GridConfig) -> Result<String> {
    let mut collector = CssCollector::new();
    match GridPlugin::new(config).emit(&mut collector) {
        EmitOutcome::Emitted { .. } => Ok(collector.to_css()),
        EmitOutcome::Skipped { errors } => Err(RackRailError::InvalidConfig(errors)),
        EmitOutcome::Failed(reason) => Err(RackRailError::GenerationFailed(reason)),
    }
}

/// Generates the full stylesheet for a named profile.
pub fn generate_css(profile_name: &str) -> Result<String> {
    let config = profile(profile_name)?;
    generate_css_for(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_profile_is_an_error() {
        let err = generate_css("bootstrap").unwrap_err();
        assert!(matches!(err, RackRailError::Grid(rackrail::GridError::UnknownProfile(_))));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut config = (*profile("tailwind").unwrap()).clone();
        config.viewports.reverse();
        let err = generate_css_for(&config).unwrap_err();
        assert!(matches!(err, RackRailError::InvalidConfig(ref errors) if !errors.is_empty()));
        assert!(err.to_string().contains("ascending order"));
    }

    #[test]
    fn test_css_value_errors_surface_through_grid_error() {
        let css_error = "wide".parse::<Length>().unwrap_err();
        let err = RackRailError::from(rackrail::GridError::from(css_error));
        assert!(matches!(err, RackRailError::Grid(rackrail::GridError::Css(_))));
        assert_eq!(err.to_string(), "Grid error: CSS value error: Invalid CSS length: wide");
    }

    #[test]
    fn test_every_profile_generates() {
        for name in profile_names() {
            let css = generate_css(name).unwrap();
            assert!(css.contains(".rack .col-12"), "{name}");
        }
    }
}
