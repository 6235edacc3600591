//! Plugin emitter.
//!
//! [`GridPlugin::emit`] is the checked path from a configuration to a styling
//! sink:
//!
//! 1. Validate. Errors and warnings go to the log.
//! 2. Invalid configuration: nothing reaches the sink.
//! 3. Base rules, then one media block per breakpoint (ascending), all as base
//!    styles; then the flex utilities.
//!
//! Generation never fails the caller. A sink error or a panic while
//! generating is logged and reported as [`EmitOutcome::Failed`]; the grid then
//! contributes partial or no styles instead of taking the host build down.

use std::panic::{self, AssertUnwindSafe};

use rrcss::StyleSheet;

use crate::config::GridConfig;
use crate::derive::{base_styles, derive_all, utility_styles};
use crate::error::Result;
use crate::validate::validate;

/// Host side of the plugin: where generated styles are submitted.
///
/// Mirrors Tailwind's `addBase` / `addComponents` / `addUtilities`. Each call
/// receives a stylesheet whose top-level rules may be at-rules wrapping
/// selectors.
pub trait StyleSink {
    fn add_base(&mut self, styles: StyleSheet) -> Result<()>;

    fn add_components(&mut self, styles: StyleSheet) -> Result<()>;

    fn add_utilities(&mut self, styles: StyleSheet) -> Result<()>;
}

/// What a call to [`GridPlugin::emit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Styles were submitted for every breakpoint.
    Emitted { breakpoints: usize, warnings: usize },
    /// Validation failed; the sink was not called.
    Skipped { errors: Vec<String> },
    /// Generation stopped part way; the sink may hold partial output.
    Failed(String),
}

impl EmitOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, EmitOutcome::Emitted { .. })
    }
}

/// Drives validation and derivation for one configuration.
#[derive(Debug, Clone)]
pub struct GridPlugin<'a> {
    config: &'a GridConfig,
    utilities: bool,
}

impl<'a> GridPlugin<'a> {
    pub fn new(config: &'a GridConfig) -> Self {
        Self {
            config,
            utilities: true,
        }
    }

    /// Skip the `.flex-*` helper utilities.
    pub fn without_utilities(mut self) -> Self {
        self.utilities = false;
        self
    }

    pub fn emit(&self, sink: &mut dyn StyleSink) -> EmitOutcome {
        let report = validate(self.config);

        if !report.is_valid() {
            log::error!("Rack & Rail: configuration errors detected:");
            for error in &report.errors {
                log::error!("  - {error}");
            }
        }
        if report.has_warnings() {
            log::warn!("Rack & Rail: configuration warnings:");
            for warning in &report.warnings {
                log::warn!("  - {warning}");
            }
        }

        if !report.is_valid() {
            log::error!("Rack & Rail: skipping generation due to configuration errors");
            return EmitOutcome::Skipped {
                errors: report.errors,
            };
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.submit(sink)));
        match result {
            Ok(Ok(breakpoints)) => {
                log::info!("Rack & Rail: generated styles for {breakpoints} breakpoints");
                EmitOutcome::Emitted {
                    breakpoints,
                    warnings: report.warnings.len(),
                }
            }
            Ok(Err(err)) => {
                log::error!("Rack & Rail: generation failed: {err}");
                EmitOutcome::Failed(err.to_string())
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                log::error!("Rack & Rail: generation panicked: {reason}");
                EmitOutcome::Failed(reason)
            }
        }
    }

    fn submit(&self, sink: &mut dyn StyleSink) -> Result<usize> {
        sink.add_base(base_styles(self.config))?;

        let blocks = derive_all(self.config);
        for styles in &blocks {
            log::debug!(
                "Rack & Rail: {} -> {} variables, {} rules",
                styles.breakpoint,
                styles.variables.len(),
                styles.rules.len()
            );
            sink.add_base(StyleSheet::new().with(styles.to_rule()))?;
        }

        if self.utilities {
            sink.add_utilities(utility_styles())?;
        }
        Ok(blocks.len())
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
