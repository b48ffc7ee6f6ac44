use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ClientError;

const PRECISION: u32 = 6;

/// A longitude or latitude normalised to at most six fractional digits.
///
/// Equivalent inputs always produce the same stored string, so `"17.0412345678"`
/// and `"17.041235"` compare equal once parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    value: String,
}

impl Coordinate {
    pub fn from_decimal(value: Decimal) -> Self {
        let rounded = value
            .round_dp_with_strategy(PRECISION, RoundingStrategy::MidpointNearestEven)
            .normalize();
        let value = if rounded.scale() == 0 {
            format!("{rounded}.0")
        } else {
            rounded.to_string()
        };
        Self { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FromStr for Coordinate {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| ClientError::invalid_coordinate(s, e.to_string()))?;
        Ok(Self::from_decimal(parsed))
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = ClientError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Coordinate {
    type Error = ClientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<f64> for Coordinate {
    type Error = ClientError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Decimal::from_f64(value)
            .map(Self::from_decimal)
            .ok_or_else(|| ClientError::invalid_coordinate(value.to_string(), "not a finite number"))
    }
}

impl AsRef<str> for Coordinate {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
