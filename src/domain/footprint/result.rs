//! Footprint result value and the shared rounding rule.

use serde::{Deserialize, Serialize};

/// Unit attached to every result.
pub const FOOTPRINT_UNIT: &str = "kg CO2e per day";

/// Rounds to two decimals, half away from zero.
///
/// Non-finite input maps to `0.0` so a corrupted intermediate value can
/// never leak `NaN` or infinity into a stored result.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        tracing::warn!(value = %value, "non-finite footprint value replaced with 0");
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Per-domain daily emissions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    pub transport: f64,
    pub diet: f64,
    pub electricity: f64,
    pub lifestyle: f64,
}

impl Breakdown {
    /// Unrounded sum of the four domains.
    pub fn sum(&self) -> f64 {
        self.transport + self.diet + self.electricity + self.lifestyle
    }

    /// Domain with the largest contribution, ties resolved in declaration
    /// order.
    pub fn largest(&self) -> (&'static str, f64) {
        [
            ("transport", self.transport),
            ("diet", self.diet),
            ("electricity", self.electricity),
            ("lifestyle", self.lifestyle),
        ]
        .into_iter()
        .fold(("transport", f64::MIN), |best, current| {
            if current.1 > best.1 {
                current
            } else {
                best
            }
        })
    }
}

/// Daily footprint: total plus per-domain breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonResult {
    pub total: f64,
    pub breakdown: Breakdown,
    pub unit: String,
}

impl CarbonResult {
    /// Builds a result from already-rounded domain values.
    pub fn from_breakdown(breakdown: Breakdown) -> Self {
        Self {
            total: round2(breakdown.sum()),
            breakdown,
            unit: FOOTPRINT_UNIT.to_string(),
        }
    }

    /// Result with every domain at zero.
    pub fn zero() -> Self {
        Self::from_breakdown(Breakdown::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_up_for_positive_values() {
        assert_eq!(round2(1.005_f64 + 1e-9), 1.01);
        assert_eq!(round2(4.864), 4.86);
        assert_eq!(round2(4.865_1), 4.87);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn round2_guards_non_finite() {
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round2(f64::INFINITY), 0.0);
        assert_eq!(round2(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn result_total_is_rounded_sum() {
        let result = CarbonResult::from_breakdown(Breakdown {
            transport: 1.11,
            diet: 2.22,
            electricity: 3.33,
            lifestyle: 0.01,
        });
        assert_eq!(result.total, 6.67);
        assert_eq!(result.unit, "kg CO2e per day");
    }

    #[test]
    fn largest_domain_is_found() {
        let breakdown = Breakdown {
            transport: 1.0,
            diet: 4.0,
            electricity: 4.0,
            lifestyle: 0.5,
        };
        assert_eq!(breakdown.largest(), ("diet", 4.0));
    }

    #[test]
    fn zero_result_serializes_with_unit() {
        let json = serde_json::to_value(CarbonResult::zero()).unwrap();
        assert_eq!(json["total"], 0.0);
        assert_eq!(json["breakdown"]["lifestyle"], 0.0);
        assert_eq!(json["unit"], "kg CO2e per day");
    }
}
