//! Lifestyle calculator.

use super::electricity::DAYS_PER_MONTH;
use super::factors::LifestyleFactors;
use super::profile::LifestyleProfile;
use super::result::round2;

/// Average weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Daily lifestyle emissions in kg CO2e.
///
/// Screen time, non-essential shopping, fashion and online orders each add
/// a monthly amount; the waste-management multiplier then scales the sum.
pub fn lifestyle_emissions(profile: &LifestyleProfile, factors: &LifestyleFactors) -> f64 {
    round2(lifestyle_emissions_unrounded(profile, factors))
}

/// [`lifestyle_emissions`] before rounding.
pub(super) fn lifestyle_emissions_unrounded(
    profile: &LifestyleProfile,
    factors: &LifestyleFactors,
) -> f64 {
    let mut monthly = 0.0;

    if let Some(screen) = profile.screen_time {
        monthly += factors.screen_time_weekly.addend(&screen) * WEEKS_PER_MONTH;
    }
    if let Some(freq) = profile.non_essential_shopping {
        monthly += factors.non_essential_shopping.addend(&freq);
    }
    if let Some(freq) = profile.fashion_shopping {
        monthly += factors.fashion_shopping.addend(&freq);
    }
    if let Some(orders) = profile.online_orders {
        monthly += factors.online_orders.addend(&orders);
    }

    if let Some(waste) = profile.waste_management {
        monthly *= factors.waste_management.multiplier(&waste);
    }

    monthly / DAYS_PER_MONTH
}
