//! Parsers for the CSS values the grid system reads back.
//!
//! - [`units`]: numbers and lengths (`24px`, `1.5rem`, `48.06%`, `auto`)
//! - [`values`]: custom property names and `var()` references
//! - [`selectors`]: selector list splitting and `&` nesting
//!
//! ## Example
//!
//! ```rust
//! use rrcss::parser::parse_length;
//! use rrcss::Unit;
//!
//! let (_, length) = parse_length("23.4375rem").unwrap();
//! assert_eq!(length.unit, Unit::Rem);
//! assert_eq!(length.to_px(), Some(375.0));
//! ```

pub mod selectors;
pub mod units;
pub mod values;

pub use selectors::{combine_selector, parse_selector_list, split_selector_list};
pub use units::{parse_length, parse_number};
pub use values::{parse_custom_property_name, parse_var_reference};
