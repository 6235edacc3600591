use crate::types::var::VarReference;
use nom::{
    IResult,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{opt, recognize},
    sequence::{delimited, pair, preceded, tuple},
};

/// Returns true for characters allowed in a custom property name after `--`.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Parse a custom property name (e.g., `--tw-rack-col-6`).
pub fn parse_custom_property_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(tag("--"), take_while1(is_ident_char)))(input)
}

/// Parse `var(--name)` or `var(--name, fallback)`.
///
/// The fallback is kept as raw text up to the closing parenthesis; nested
/// `var()` fallbacks are not supported.
pub fn parse_var_reference(input: &str) -> IResult<&str, VarReference> {
    let (input, (name, fallback)) = delimited(
        pair(tag("var("), multispace0),
        tuple((
            parse_custom_property_name,
            opt(preceded(
                tuple((multispace0, char(','), multispace0)),
                take_while(|c: char| c != ')'),
            )),
        )),
        pair(multispace0, char(')')),
    )(input)?;

    let reference = VarReference {
        name: name.to_string(),
        fallback: fallback
            .map(|f: &str| f.trim().to_string())
            .filter(|f| !f.is_empty()),
    };
    Ok((input, reference))
}
