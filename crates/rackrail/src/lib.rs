//! # rackrail
//!
//! Responsive grid derivation for the Rack & Rail layout system.
//!
//! A [`GridConfig`] holds per-breakpoint tables of pre-computed column widths
//! and offsets. This crate checks those tables, derives CSS custom properties
//! and selector rules from them, and hands the result to a [`StyleSink`].
//!
//! - **Rack**: wrapping flex container, percentage columns.
//! - **Rail**: horizontally scrolling container, fixed-width columns.
//!
//! ## Example
//!
//! ```rust
//! use rackrail::{CssCollector, EmitOutcome, GridPlugin, profile};
//!
//! let config = profile("twlayout").unwrap();
//! let mut css = CssCollector::new();
//! let outcome = GridPlugin::new(&config).emit(&mut css);
//!
//! assert!(matches!(outcome, EmitOutcome::Emitted { breakpoints: 4, .. }));
//! assert!(css.to_css().contains("--tw-rack-col-6: 50%;"));
//! ```

pub mod author;
pub mod collector;
pub mod config;
pub mod debug_mode;
pub mod derive;
pub mod diagnostics;
pub mod emitter;
pub mod error;
mod log_init;
pub mod profiles;
pub mod slots;
pub mod validate;

pub use collector::CssCollector;
pub use config::{
    ColumnRow, ColumnTable, ContainerKind, GridConfig, MAX_COLUMNS, OffsetPolicy,
    SystemConstants, Viewport,
};
pub use debug_mode::{DebugMode, JsonFileStore, KeyValueStore, MemoryStore};
pub use derive::{BreakpointStyles, VarNames, derive_all, derive_breakpoint, stylesheet};
pub use emitter::{EmitOutcome, GridPlugin, StyleSink};
pub use error::{GridError, Result};
pub use log_init::{init_logger, init_logger_with_level};
pub use profiles::{DEFAULT_PROFILE, profile, profile_names};
pub use slots::{InfoSlot, InfoSlots, SlotTarget};
pub use validate::{ValidationReport, validate};

// Re-export the log crate so hosts can install their own logger.
pub use log;
