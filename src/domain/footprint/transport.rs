//! Transport calculator.

use super::factors::TransportFactors;
use super::profile::{EvChargingSource, FuelType, Mileage, TransportProfile};
use super::result::round2;

/// Daily transport emissions in kg CO2e.
///
/// # Algorithm
/// 1. Unknown or absent commute mode contributes nothing.
/// 2. Start from the mode's base.
/// 3. Fuel-sensitive modes are scaled by fuel type, EV charging source
///    (electric only) and mileage band. Other modes ignore those answers.
/// 4. Scale by the distance band and by occupancy.
/// 5. Add the annualised daily flight contribution.
pub fn transport_emissions(profile: &TransportProfile, factors: &TransportFactors) -> f64 {
    round2(transport_emissions_unrounded(profile, factors))
}

/// [`transport_emissions`] before rounding.
pub(super) fn transport_emissions_unrounded(
    profile: &TransportProfile,
    factors: &TransportFactors,
) -> f64 {
    let Some(mode) = profile
        .primary_mode
        .and_then(|mode| factors.primary_mode.get(&mode))
    else {
        return 0.0;
    };

    let mut value = mode.base;

    if mode.fuel_multiplier {
        value *= vehicle_multiplier(
            profile.fuel_type,
            profile.ev_charging_source,
            profile.mileage,
            factors,
        );
    }

    if let Some(distance) = profile.daily_distance {
        value *= factors.daily_distance.multiplier(&distance);
    }

    if let Some(passengers) = profile.passengers {
        value *= factors.passengers.multiplier(&passengers);
    }

    if let Some(flights) = profile.flights_per_year {
        value += factors.flights_per_year.addend(&flights);
    }

    value
}

/// Combined fuel, charging and efficiency multiplier for a vehicle.
pub(super) fn vehicle_multiplier(
    fuel: Option<FuelType>,
    charging: Option<EvChargingSource>,
    mileage: Option<Mileage>,
    factors: &TransportFactors,
) -> f64 {
    let mut multiplier = 1.0;

    if let Some(fuel) = fuel {
        multiplier *= factors.fuel_type.multiplier(&fuel);

        if fuel == FuelType::Electric {
            if let Some(source) = charging {
                multiplier *= factors.ev_charging_source.multiplier(&source);
            }
        }
    }

    if let Some(mileage) = mileage.filter(|m| *m != Mileage::Unknown) {
        multiplier *= factors.mileage.multiplier(&mileage);
    }

    multiplier
}
