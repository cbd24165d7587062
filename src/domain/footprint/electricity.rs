//! Electricity calculator.

use super::factors::ElectricityFactors;
use super::profile::ElectricityProfile;
use super::result::round2;

/// Days used to turn monthly figures into daily ones.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Daily electricity emissions in kg CO2e attributable to one person.
///
/// # Algorithm
/// - Grid intensity comes from the renewable-share answer; unknown or
///   absent answers get the worst-case grid factor.
/// - `monthly_kwh * intensity / household_size`, scaled by time at home.
/// - Plus a per-appliance surcharge (estimated monthly kWh times the same
///   intensity). The surcharge is not split across the household.
/// - Divided by 30 for a daily figure.
pub fn electricity_emissions(profile: &ElectricityProfile, factors: &ElectricityFactors) -> f64 {
    round2(electricity_emissions_unrounded(profile, factors))
}

/// [`electricity_emissions`] before rounding.
pub(super) fn electricity_emissions_unrounded(
    profile: &ElectricityProfile,
    factors: &ElectricityFactors,
) -> f64 {
    let intensity = factors.emission_factor(profile.renewable_energy);

    let monthly = profile.monthly_kwh.unwrap_or(0.0) * intensity;
    let household = f64::from(profile.household_size.unwrap_or(1).max(1));
    let mut per_person = monthly / household;

    if let Some(time) = profile.time_at_home {
        per_person *= factors.time_at_home.multiplier(&time);
    }

    let appliance_surcharge: f64 = profile
        .appliances
        .iter()
        .flatten()
        .map(|appliance| factors.appliance_monthly_kwh.addend(appliance) * intensity)
        .sum();

    (per_person + appliance_surcharge) / DAYS_PER_MONTH
}
