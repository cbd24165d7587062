//! Walking-offset estimator.

use super::result::round2;

/// Average stride length in metres.
pub const STRIDE_LENGTH_M: f64 = 0.762;

/// Emissions of an average car per kilometre, in kg CO2e.
pub const CAR_KG_CO2E_PER_KM: f64 = 0.21;

/// Car-trip emissions avoided by walking `steps` steps, in kg CO2e.
pub fn avoided_carbon_from_steps(steps: u64) -> f64 {
    let km = steps as f64 * STRIDE_LENGTH_M / 1000.0;
    round2(km * CAR_KG_CO2E_PER_KM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_thousand_steps() {
        assert_eq!(
            avoided_carbon_from_steps(10_000),
            round2(10_000.0 * 0.762 / 1000.0 * 0.21)
        );
        assert_eq!(avoided_carbon_from_steps(10_000), 1.6);
    }

    #[test]
    fn no_steps_no_offset() {
        assert_eq!(avoided_carbon_from_steps(0), 0.0);
    }

    #[test]
    fn offset_grows_with_steps() {
        assert!(avoided_carbon_from_steps(20_000) > avoided_carbon_from_steps(10_000));
    }
}
