//! Daily-log pipeline.
//!
//! Scores one day's observed activity. The input is shaped differently from
//! a [`Profile`](super::Profile) (counts and measured quantities instead of
//! bands and percentages), but each domain mirrors the profile calculator
//! and reads the same registry, so a day that matches the baseline answers
//! scores the same as the baseline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::electricity::DAYS_PER_MONTH;
use super::factors::EmissionFactors;
use super::profile::{
    Appliance, EvChargingSource, FoodWaste, FuelType, MealFrequency, Mileage, Passengers,
    RenewableEnergy, ScreenTime, TravelMode, WasteManagement,
};
use super::result::{round2, Breakdown, CarbonResult};
use super::transport::vehicle_multiplier;

/// Days per week, for turning weekly screen-time factors into a day.
const DAYS_PER_WEEK: f64 = 7.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTransportLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TravelMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ev_charging_source: Option<EvChargingSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<Mileage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passengers: Option<Passengers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDietLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals_today: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meat_meals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dairy_meals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_meals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub junk_food: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_waste: Option<FoodWaste>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyElectricityLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kwh_today: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewable_energy: Option<RenewableEnergy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliances_used: Option<BTreeSet<Appliance>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLifestyleLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_time_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_essential_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fashion_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_orders: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_management: Option<WasteManagement>,
}

/// One day's recorded activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<DailyTransportLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<DailyDietLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity: Option<DailyElectricityLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<DailyLifestyleLog>,
    /// Steps walked; feeds the walking offset, not the footprint itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u64>,
}

pub fn daily_transport_emissions(log: &DailyTransportLog, factors: &EmissionFactors) -> f64 {
    round2(daily_transport_emissions_unrounded(log, factors))
}

pub(super) fn daily_transport_emissions_unrounded(
    log: &DailyTransportLog,
    factors: &EmissionFactors,
) -> f64 {
    let transport = &factors.transport;
    let Some(mode) = log.mode.and_then(|mode| transport.primary_mode.get(&mode)) else {
        return 0.0;
    };

    let mut value = mode.base;

    if mode.fuel_multiplier {
        value *= vehicle_multiplier(log.fuel_type, log.ev_charging_source, log.mileage, transport);
    }

    if let Some(km) = log.distance_km {
        value *= km / factors.daily_log.km_per_distance_unit;
    }

    if let Some(passengers) = log.passengers {
        value *= transport.passengers.multiplier(&passengers);
    }

    if let Some(hours) = log.flight_hours {
        value += hours * factors.daily_log.per_flight_hour;
    }

    value
}

pub fn daily_diet_emissions(log: &DailyDietLog, factors: &EmissionFactors) -> f64 {
    round2(daily_diet_emissions_unrounded(log, factors))
}

pub(super) fn daily_diet_emissions_unrounded(log: &DailyDietLog, factors: &EmissionFactors) -> f64 {
    let diet = &factors.diet;
    let meals = log.meals_today.unwrap_or(0);
    let meat = log.meat_meals.unwrap_or(0);
    let dairy = log.dairy_meals.unwrap_or(0);
    let plant = meals.saturating_sub(meat.saturating_add(dairy));

    let mut value = f64::from(meat) * diet.meal_type.meat
        + f64::from(dairy) * diet.meal_type.dairy
        + f64::from(plant) * diet.meal_type.plant;

    if let Some(ordered) = log.ordered_meals {
        value += f64::from(ordered) * diet.delivery_packaging;
    }

    if log.junk_food == Some(true) {
        value *= diet.junk_food.multiplier(&MealFrequency::Daily);
    }

    if let Some(waste) = log.food_waste {
        value *= diet.food_waste.multiplier(&waste);
    }

    value
}

pub fn daily_electricity_emissions(log: &DailyElectricityLog, factors: &EmissionFactors) -> f64 {
    round2(daily_electricity_emissions_unrounded(log, factors))
}

pub(super) fn daily_electricity_emissions_unrounded(
    log: &DailyElectricityLog,
    factors: &EmissionFactors,
) -> f64 {
    let electricity = &factors.electricity;
    let intensity = electricity.emission_factor(log.renewable_energy);
    let household = f64::from(log.household_size.unwrap_or(1).max(1));

    let per_person = log.kwh_today.unwrap_or(0.0) * intensity / household;

    let appliance_surcharge: f64 = log
        .appliances_used
        .iter()
        .flatten()
        .map(|appliance| {
            electricity.appliance_monthly_kwh.addend(appliance) / DAYS_PER_MONTH * intensity
        })
        .sum();

    per_person + appliance_surcharge
}

pub fn daily_lifestyle_emissions(log: &DailyLifestyleLog, factors: &EmissionFactors) -> f64 {
    round2(daily_lifestyle_emissions_unrounded(log, factors))
}

pub(super) fn daily_lifestyle_emissions_unrounded(
    log: &DailyLifestyleLog,
    factors: &EmissionFactors,
) -> f64 {
    let lifestyle = &factors.lifestyle;
    let per_item = &factors.daily_log;
    let mut value = 0.0;

    if let Some(hours) = log.screen_time_hours {
        let band = ScreenTime::from_daily_hours(hours);
        value += lifestyle.screen_time_weekly.addend(&band) / DAYS_PER_WEEK;
    }
    if let Some(items) = log.non_essential_items {
        value += f64::from(items) * per_item.non_essential_item;
    }
    if let Some(items) = log.fashion_items {
        value += f64::from(items) * per_item.fashion_item;
    }
    if let Some(orders) = log.online_orders {
        value += f64::from(orders) * per_item.online_order;
    }

    if let Some(waste) = log.waste_management {
        value *= lifestyle.waste_management.multiplier(&waste);
    }

    value
}

/// Scores a whole daily log. Absent sections contribute zero.
pub fn daily_log_footprint(log: &DailyLogInput, factors: &EmissionFactors) -> CarbonResult {
    CarbonResult::from_breakdown(Breakdown {
        transport: log
            .transport
            .as_ref()
            .map_or(0.0, |t| daily_transport_emissions(t, factors)),
        diet: log
            .diet
            .as_ref()
            .map_or(0.0, |d| daily_diet_emissions(d, factors)),
        electricity: log
            .electricity
            .as_ref()
            .map_or(0.0, |e| daily_electricity_emissions(e, factors)),
        lifestyle: log
            .lifestyle
            .as_ref()
            .map_or(0.0, |l| daily_lifestyle_emissions(l, factors)),
    })
}
