//! Categorizer.
//!
//! Two threshold sets exist. [`CategoryScale::Standard`] (5/15/25) is the
//! canonical one used by [`categorize`]; [`CategoryScale::Impact`]
//! (10/20/30, "... Impact" labels) is kept as a named variant that a
//! deployment can select through configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal band of a daily footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Threshold set used to band a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryScale {
    /// `<5` Low, `<15` Moderate, `<25` High, otherwise Very High.
    #[default]
    Standard,
    /// `<10`, `<20`, `<30`, labelled "Low Impact" and so on.
    Impact,
}

impl CategoryScale {
    fn thresholds(self) -> [f64; 3] {
        match self {
            CategoryScale::Standard => [5.0, 15.0, 25.0],
            CategoryScale::Impact => [10.0, 20.0, 30.0],
        }
    }

    /// Bands a total. Lower bounds are inclusive.
    pub fn categorize(self, total: f64) -> FootprintCategory {
        let [moderate, high, very_high] = self.thresholds();
        if total < moderate {
            FootprintCategory::Low
        } else if total < high {
            FootprintCategory::Moderate
        } else if total < very_high {
            FootprintCategory::High
        } else {
            FootprintCategory::VeryHigh
        }
    }

    /// Human-readable label for a band on this scale.
    pub fn label(self, category: FootprintCategory) -> &'static str {
        match (self, category) {
            (CategoryScale::Standard, FootprintCategory::Low) => "Low",
            (CategoryScale::Standard, FootprintCategory::Moderate) => "Moderate",
            (CategoryScale::Standard, FootprintCategory::High) => "High",
            (CategoryScale::Standard, FootprintCategory::VeryHigh) => "Very High",
            (CategoryScale::Impact, FootprintCategory::Low) => "Low Impact",
            (CategoryScale::Impact, FootprintCategory::Moderate) => "Moderate Impact",
            (CategoryScale::Impact, FootprintCategory::High) => "High Impact",
            (CategoryScale::Impact, FootprintCategory::VeryHigh) => "Very High Impact",
        }
    }
}

impl fmt::Display for CategoryScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryScale::Standard => write!(f, "standard"),
            CategoryScale::Impact => write!(f, "impact"),
        }
    }
}

impl fmt::Display for FootprintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CategoryScale::Standard.label(*self))
    }
}

/// Bands a total on the standard scale.
pub fn categorize(total: f64) -> FootprintCategory {
    CategoryScale::Standard.categorize(total)
}
