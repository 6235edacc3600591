//! # RRCSS - CSS building blocks for Rack & Rail
//!
//! The small slice of CSS the grid system needs in order to describe, check and
//! print its output. It does not parse whole stylesheets; the grid tables are
//! authored as data and turned into rules by `rackrail`. This crate provides:
//!
//! - **Values**: [`Length`](types::Length) with px/rem/em/% units and the
//!   fixed `16px` per `rem` conversion, plus `var()` references
//! - **Rules**: nested [`StyleSheet`] / [`Rule`] structures mirroring the
//!   selector → declarations mapping a Tailwind plugin hands to its host
//! - **Output**: flattening of `&` nested rules and deterministic CSS text
//!
//! ## Quick Start
//!
//! ```rust
//! use rrcss::{Rule, StyleSheet};
//!
//! let sheet = StyleSheet::new().with(
//!     Rule::new(".rail")
//!         .declare("overflow-x", "auto")
//!         .nest(Rule::new("&::-webkit-scrollbar").declare("display", "none")),
//! );
//!
//! let css = sheet.to_css();
//! assert!(css.contains(".rail::-webkit-scrollbar {"));
//! ```
//!
//! ## Units
//! - Pixels: `24px`
//! - Root em: `1.5rem` (16px each)
//! - Em: `2em` (treated like rem when converting)
//! - Percentage: `48.06%`
//! - Unitless numbers: `0`
//! - Auto: `auto`
//!
//! ## Modules
//!
//! - [`parser`]: nom parsers for lengths, `var()` references and selector lists
//! - [`types`]: value types
//! - [`stylesheet`]: rule and stylesheet data structures
//! - [`flatten`]: nested rule flattening
//! - [`render`]: CSS text output
//! - [`error`]: error types

pub mod error;
pub mod flatten;
pub mod parser;
pub mod render;
pub mod stylesheet;
pub mod types;

pub use error::CssError;
pub use flatten::flatten_stylesheet;
pub use render::render_stylesheet;
pub use stylesheet::{Declaration, Prelude, Rule, RuleItem, SelectorList, StyleSheet};
pub use types::{Length, PX_PER_REM, Unit, VarReference};
