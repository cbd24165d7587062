//! Override composer for what-if recomputation.
//!
//! A stored baseline profile is combined with a partial override of the same
//! shape. Each domain is merged independently and field by field: a field
//! present in the override wins, an absent one keeps the baseline value.
//! The baseline itself is never modified.

use super::profile::{
    DietProfile, ElectricityProfile, LifestyleProfile, Profile, TransportProfile,
};

/// Builds a struct whose every listed field prefers the override.
macro_rules! overlay_fields {
    ($ty:ident, $base:expr, $over:expr; $($field:ident),+ $(,)?) => {
        $ty {
            $($field: $over.$field.clone().or_else(|| $base.$field.clone()),)+
        }
    };
}

/// Field-level merge of two optional domain slices.
trait Overlay: Clone {
    fn overlay(&self, over: &Self) -> Self;
}

impl Overlay for TransportProfile {
    fn overlay(&self, over: &Self) -> Self {
        overlay_fields!(TransportProfile, self, over;
            primary_mode,
            fuel_type,
            ev_charging_source,
            daily_distance,
            passengers,
            flights_per_year,
            mileage,
        )
    }
}

impl Overlay for DietProfile {
    fn overlay(&self, over: &Self) -> Self {
        overlay_fields!(DietProfile, self, over;
            meals_per_day,
            meat_percentage,
            dairy_percentage,
            plant_percentage,
            ordered_meals_freq,
            junk_food_freq,
            food_waste,
        )
    }
}

impl Overlay for ElectricityProfile {
    fn overlay(&self, over: &Self) -> Self {
        overlay_fields!(ElectricityProfile, self, over;
            monthly_kwh,
            household_size,
            time_at_home,
            appliances,
            renewable_energy,
        )
    }
}

impl Overlay for LifestyleProfile {
    fn overlay(&self, over: &Self) -> Self {
        overlay_fields!(LifestyleProfile, self, over;
            screen_time,
            non_essential_shopping,
            fashion_shopping,
            online_orders,
            waste_management,
        )
    }
}

fn merge_slice<T: Overlay>(base: &Option<T>, over: &Option<T>) -> Option<T> {
    match (base, over) {
        (Some(base), Some(over)) => Some(base.overlay(over)),
        (Some(base), None) => Some(base.clone()),
        (None, over) => over.clone(),
    }
}

/// Merges `over` onto `baseline`, returning a new profile.
pub fn compose_override(baseline: &Profile, over: &Profile) -> Profile {
    Profile {
        transport: merge_slice(&baseline.transport, &over.transport),
        diet: merge_slice(&baseline.diet, &over.diet),
        electricity: merge_slice(&baseline.electricity, &over.electricity),
        lifestyle: merge_slice(&baseline.lifestyle, &over.lifestyle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::footprint::profile::{
        Appliance, DailyDistance, FuelType, Passengers, RenewableEnergy, TravelMode,
    };
    use std::collections::BTreeSet;

    fn baseline() -> Profile {
        Profile {
            transport: Some(TransportProfile {
                primary_mode: Some(TravelMode::PersonalCar),
                fuel_type: Some(FuelType::Petrol),
                daily_distance: Some(DailyDistance::From16To30Km),
                passengers: Some(Passengers::Alone),
                ..Default::default()
            }),
            electricity: Some(ElectricityProfile {
                monthly_kwh: Some(200.0),
                appliances: Some(BTreeSet::from([Appliance::Refrigerator])),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn empty_override_returns_baseline() {
        assert_eq!(compose_override(&baseline(), &Profile::default()), baseline());
    }

    #[test]
    fn override_wins_field_by_field() {
        let over = Profile {
            transport: Some(TransportProfile {
                primary_mode: Some(TravelMode::Bus),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = compose_override(&baseline(), &over);
        let transport = merged.transport.unwrap();

        assert_eq!(transport.primary_mode, Some(TravelMode::Bus));
        assert_eq!(transport.fuel_type, Some(FuelType::Petrol));
        assert_eq!(transport.daily_distance, Some(DailyDistance::From16To30Km));
        assert_eq!(merged.electricity, baseline().electricity);
    }

    #[test]
    fn override_can_add_missing_domain() {
        let over = Profile {
            diet: Some(DietProfile {
                meals_per_day: Some(2),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = compose_override(&baseline(), &over);
        assert_eq!(merged.diet.unwrap().meals_per_day, Some(2));
    }

    #[test]
    fn appliance_set_is_replaced_not_unioned() {
        let over = Profile {
            electricity: Some(ElectricityProfile {
                appliances: Some(BTreeSet::from([Appliance::Microwave])),
                renewable_energy: Some(RenewableEnergy::FullyRenewable),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = compose_override(&baseline(), &over).electricity.unwrap();
        assert_eq!(merged.appliances, Some(BTreeSet::from([Appliance::Microwave])));
        assert_eq!(merged.monthly_kwh, Some(200.0));
    }

    #[test]
    fn baseline_is_untouched() {
        let base = baseline();
        let over = Profile {
            transport: Some(TransportProfile {
                fuel_type: Some(FuelType::Electric),
                ..Default::default()
            }),
            ..Default::default()
        };
        let _ = compose_override(&base, &over);
        assert_eq!(base, baseline());
    }
}
