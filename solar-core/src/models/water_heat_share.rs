use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Share of the gas bill spent on heating water, as picked on an option card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterHeatShare {
    /// Gas is mostly used for cooking or space heating (30%).
    Low,
    /// Typical household (50%).
    #[default]
    Typical,
    /// Water heating dominates the bill (70%).
    High,
}

/// Error returned when a value is not one of the offered water-heating shares.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised water heating share '{0}' (expected low, typical, high, 0.3, 0.5 or 0.7)")]
pub struct ParseWaterHeatShareError(String);

impl WaterHeatShare {
    pub fn all() -> &'static [WaterHeatShare] {
        &[
            WaterHeatShare::Low,
            WaterHeatShare::Typical,
            WaterHeatShare::High,
        ]
    }

    /// The share as a fraction of the monthly gas bill.
    pub fn fraction(&self) -> Decimal {
        match self {
            Self::Low => Decimal::new(30, 2),
            Self::Typical => Decimal::new(50, 2),
            Self::High => Decimal::new(70, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Typical => "typical",
            Self::High => "high",
        }
    }

    /// Maps a fraction back to its option. `0.5` and `0.50` are the same value.
    pub fn from_fraction(fraction: Decimal) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|share| share.fraction() == fraction)
    }
}

impl FromStr for WaterHeatShare {
    type Err = ParseWaterHeatShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "low" => return Ok(Self::Low),
            "typical" => return Ok(Self::Typical),
            "high" => return Ok(Self::High),
            _ => {}
        }

        trimmed
            .parse::<Decimal>()
            .ok()
            .and_then(Self::from_fraction)
            .ok_or_else(|| ParseWaterHeatShareError(s.to_string()))
    }
}

impl fmt::Display for WaterHeatShare {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}%", (self.fraction() * Decimal::ONE_HUNDRED).normalize())
    }
}
