//! Integration tests for CSS value parsing.
//!
//! - Lengths with units: px, rem, em, %, unitless, auto
//! - var() references with and without fallbacks
//! - Selector lists

use rrcss::parser::{parse_length, parse_selector_list, split_selector_list};
use rrcss::{CssError, Length, SelectorList, Unit, VarReference};

// ============================================================================
// LENGTHS
// ============================================================================

#[test]
fn test_length_percent() {
    let (remaining, length) = parse_length("48.06%").unwrap();
    assert!(remaining.is_empty());
    assert!((length.value - 48.06).abs() < 1e-9);
    assert_eq!(length.unit, Unit::Percent);
}

#[test]
fn test_length_rem() {
    let (_, length) = parse_length("16.25rem").unwrap();
    assert_eq!(length, Length::rem(16.25));
    assert_eq!(length.to_px(), Some(260.0));
}

#[test]
fn test_length_em_is_not_confused_with_rem() {
    let (_, length) = parse_length("2em").unwrap();
    assert_eq!(length.unit, Unit::Em);
}

#[test]
fn test_length_px() {
    let (_, length) = parse_length("327px").unwrap();
    assert_eq!(length, Length::px(327.0));
}

#[test]
fn test_length_unitless_zero() {
    let (_, length) = parse_length("0").unwrap();
    assert_eq!(length, Length::ZERO);
    assert_eq!(length.as_percent(), Some(0.0));
}

#[test]
fn test_length_leading_dot() {
    let (_, length) = parse_length(".5rem").unwrap();
    assert_eq!(length, Length::rem(0.5));
}

#[test]
fn test_length_negative() {
    let (_, length) = parse_length("-5%").unwrap();
    assert_eq!(length, Length::percent(-5.0));
}

#[test]
fn test_length_auto_any_case() {
    assert!("auto".parse::<Length>().unwrap().is_auto());
    assert!("AUTO".parse::<Length>().unwrap().is_auto());
}

#[test]
fn test_length_invalid() {
    assert_eq!(
        "wide".parse::<Length>(),
        Err(CssError::InvalidLength("wide".into()))
    );
    assert!("".parse::<Length>().is_err());
    assert!("12 px".parse::<Length>().is_err());
}

// ============================================================================
// VAR REFERENCES
// ============================================================================

#[test]
fn test_var_reference() {
    let reference: VarReference = "var(--tw-rack-col-6)".parse().unwrap();
    assert_eq!(reference.name, "--tw-rack-col-6");
    assert_eq!(reference.fallback, None);
}

#[test]
fn test_var_reference_with_fallback() {
    let reference: VarReference = "var( --tw-layout-gap , 1rem )".parse().unwrap();
    assert_eq!(reference.name, "--tw-layout-gap");
    assert_eq!(reference.fallback.as_deref(), Some("1rem"));
    assert_eq!(reference.to_string(), "var(--tw-layout-gap, 1rem)");
}

#[test]
fn test_var_reference_invalid() {
    assert!("var(tw-gap)".parse::<VarReference>().is_err());
    assert!("--tw-gap".parse::<VarReference>().is_err());
    assert!("var(--tw-gap".parse::<VarReference>().is_err());
}

#[test]
fn test_var_reference_display_round_trip() {
    let reference = VarReference::new("--tw-offset-3");
    let parsed: VarReference = reference.to_string().parse().unwrap();
    assert_eq!(parsed, reference);
}

// ============================================================================
// SELECTOR LISTS
// ============================================================================

#[test]
fn test_split_selector_list() {
    assert_eq!(split_selector_list(".rack, .rail"), vec![".rack", ".rail"]);
    assert_eq!(split_selector_list(" .rack "), vec![".rack"]);
}

#[test]
fn test_split_keeps_commas_inside_parentheses() {
    assert_eq!(
        split_selector_list(".rail:is(.a, .b), .rack"),
        vec![".rail:is(.a, .b)", ".rack"]
    );
}

#[test]
fn test_parse_selector_list_rejects_malformed() {
    assert!(parse_selector_list("").is_err());
    assert!(parse_selector_list(".rack,").is_err());
    assert!(parse_selector_list(".rail:has(> .col-12").is_err());
    assert!(SelectorList::parse(".rack, .rail").is_ok());
}
