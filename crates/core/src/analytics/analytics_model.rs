use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Bucket width for spend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Weekly,
    Monthly,
    Yearly,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
            Interval::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Interval::Weekly),
            "monthly" => Ok(Interval::Monthly),
            "yearly" => Ok(Interval::Yearly),
            _ => Err(ValidationError::UnknownInterval(s.to_string())),
        }
    }
}

/// One point of a spend series.
///
/// Keys are `YYYY-MM-DD` (the week's Sunday), `YYYY-MM` or `YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub key: String,
    pub total: Decimal,
    /// Synthetic zero point added so a series always renders
    pub is_placeholder: bool,
}

impl SeriesPoint {
    pub fn new(key: impl Into<String>, total: Decimal) -> Self {
        Self {
            key: key.into(),
            total,
            is_placeholder: false,
        }
    }

    pub fn placeholder(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            total: Decimal::ZERO,
            is_placeholder: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Spend per category across a user's full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub total: Decimal,
    /// Largest first; ties ordered by category name
    pub categories: Vec<CategoryTotal>,
}
