//! Selector for the supported series.
//!
//! ## Purpose
//!
//! `SeriesFunction` names one of the four functions the crate can expand.
//! It is the tagged replacement for string selectors: string tags are only
//! accepted at the parsing boundary (`FromStr`), everything past that point
//! dispatches by exhaustive `match`.
//!
//! ## Invariants
//!
//! * `SeriesFunction::ALL` lists every variant exactly once, in display order.
//! * `tag()` and `FromStr` round-trip.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use core::fmt;
use core::str::FromStr;

// Internal dependencies
use crate::primitives::errors::TaylorError;

/// A function with a truncated Taylor expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeriesFunction {
    /// `exp(x)` expanded at 0.
    Exp,

    /// `cos(x)` expanded at 0.
    Cos,

    /// `(1 + x)^a` expanded at 0, `a` is the exponent.
    Binom,

    /// `ln(x)` expanded at `a`.
    Ln,
}

impl SeriesFunction {
    /// Every supported function, in plotting order.
    pub const ALL: [SeriesFunction; 4] = [Self::Exp, Self::Cos, Self::Binom, Self::Ln];

    /// Short selector tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Cos => "cos",
            Self::Binom => "binom",
            Self::Ln => "ln",
        }
    }

    /// Human-readable label used in plot legends.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exp => "exp(x)",
            Self::Cos => "cos(x)",
            Self::Binom => "(1+x)^a",
            Self::Ln => "ln(x)",
        }
    }

    /// Whether the expansion depends on the parameter `a`.
    pub fn uses_center(self) -> bool {
        matches!(self, Self::Binom | Self::Ln)
    }
}

impl fmt::Display for SeriesFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SeriesFunction {
    type Err = TaylorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|func| func.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| TaylorError::UnknownFunction(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for func in SeriesFunction::ALL {
            assert_eq!(func.tag().parse::<SeriesFunction>(), Ok(func));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" LN ".parse::<SeriesFunction>(), Ok(SeriesFunction::Ln));
        assert_eq!("Binom".parse::<SeriesFunction>(), Ok(SeriesFunction::Binom));
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            "sin".parse::<SeriesFunction>(),
            Err(TaylorError::UnknownFunction("sin".into()))
        );
    }
}
