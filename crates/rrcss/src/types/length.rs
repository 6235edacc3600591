use std::fmt;
use std::str::FromStr;

use crate::error::CssError;
use crate::parser::units::parse_length;

/// Pixels per `rem`. Fixed; the grid never reads the document font size.
pub const PX_PER_REM: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Absolute pixels.
    #[default]
    Px,
    /// Root em, 16px each.
    Rem,
    /// Em, converted like rem.
    Em,
    /// Percentage of the containing block.
    Percent,
    /// Bare number, only meaningful as `0`.
    Number,
    /// Automatic sizing; never emitted as a grid value.
    Auto,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::Number | Unit::Auto => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const AUTO: Self = Self {
        value: 0.0,
        unit: Unit::Auto,
    };
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: Unit::Number,
    };

    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn rem(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Rem,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    /// Converts a pixel count to rem.
    pub fn rem_from_px(px: f64) -> Self {
        Self::rem(px / PX_PER_REM)
    }

    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }

    pub fn is_percent(&self) -> bool {
        self.unit == Unit::Percent
    }

    /// Absolute size in pixels, if the unit has one.
    ///
    /// Percentages need a containing block and return `None`; so does `auto`.
    /// A bare `0` is zero pixels.
    pub fn to_px(&self) -> Option<f64> {
        match self.unit {
            Unit::Px => Some(self.value),
            Unit::Rem | Unit::Em => Some(self.value * PX_PER_REM),
            Unit::Number if self.value == 0.0 => Some(0.0),
            Unit::Number | Unit::Percent | Unit::Auto => None,
        }
    }

    /// Percentage value, if this is a percentage (or a bare `0`).
    pub fn as_percent(&self) -> Option<f64> {
        match self.unit {
            Unit::Percent => Some(self.value),
            Unit::Number if self.value == 0.0 => Some(0.0),
            _ => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            return f.write_str("auto");
        }
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = CssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match parse_length(trimmed) {
            Ok((rest, length)) if rest.trim().is_empty() => Ok(length),
            _ => Err(CssError::InvalidLength(s.to_string())),
        }
    }
}
