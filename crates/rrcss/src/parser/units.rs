use crate::types::length::{Length, Unit};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit0, digit1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse a floating point or integer number (`10`, `-5`, `48.06`, `.5`).
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse the unit suffix (e.g., px, rem, %).
fn parse_unit_suffix(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag("rem"), |_| Unit::Rem),
        map(tag("em"), |_| Unit::Em),
        map(tag("px"), |_| Unit::Px),
        map(char('%'), |_| Unit::Percent),
    ))(input)
}

/// Parse a single length value (e.g., "24px", "1.5rem", "50%", "0", "auto").
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let input = input.trim_start();

    if let Ok((remaining, _)) = tag_no_case::<&str, &str, nom::error::Error<&str>>("auto")(input) {
        return Ok((remaining, Length::AUTO));
    }

    let (input, value) = parse_number(input)?;
    let (input, unit) = opt(parse_unit_suffix)(input)?;

    Ok((
        input,
        Length {
            value,
            unit: unit.unwrap_or(Unit::Number),
        },
    ))
}
