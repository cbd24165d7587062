//! Emission factor registry.
//!
//! Maps every categorical answer to the number that converts it into a CO2e
//! contribution. The registry is an immutable value: the built-in tables
//! are available through [`EmissionFactors::global`], and callers that need
//! different numbers (tests, regional deployments) build or load their own
//! instance and pass it in.
//!
//! # Fallback policy
//!
//! A key missing from a table (including every `Unknown` answer) never
//! fails a lookup:
//!
//! | Kind of factor | Missing key resolves to |
//! |----------------|-------------------------|
//! | multiplier     | [`NEUTRAL_MULTIPLIER`] (`1.0`) |
//! | additive base  | [`NEUTRAL_ADDEND`] (`0.0`) |
//! | grid intensity | [`ElectricityFactors::grid_fallback`] (worst case) |
//!
//! A loaded file is laid over the built-in tables key by key, so it only
//! needs the entries it changes. Keys that name no known answer are
//! rejected; they would otherwise land on the `Unknown` catch-all and
//! stop it resolving to the neutral value.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;
use thiserror::Error;

use super::profile::{
    Appliance, DailyDistance, EvChargingSource, FlightsPerYear, FoodWaste, FuelType,
    MealFrequency, Mileage, OnlineOrders, Passengers, RenewableEnergy, ScreenTime,
    ShoppingFrequency, TimeAtHome, TravelMode, WasteManagement,
};

/// Multiplier used when an answer has no registry entry.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Additive contribution used when an answer has no registry entry.
pub const NEUTRAL_ADDEND: f64 = 0.0;

static STANDARD_FACTORS: Lazy<EmissionFactors> = Lazy::new(EmissionFactors::standard);

/// Errors raised while loading a factor table from disk.
#[derive(Debug, Error)]
pub enum FactorLoadError {
    #[error("Failed to read emission factor file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed emission factor table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Emission factor '{0}' must be a finite, non-negative number")]
    InvalidFactor(String),

    #[error("Emission factor table '{0}' contains a key that names no known answer")]
    UnrecognisedKey(String),
}

// ════════════════════════════════════════════════════════════════════════════════
// Factor table
// ════════════════════════════════════════════════════════════════════════════════

/// One answer-to-number lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorTable<K: Eq + Hash>(HashMap<K, f64>);

impl<K: Eq + Hash> FactorTable<K> {
    /// Raw lookup; `None` when the answer is not modelled.
    pub fn lookup(&self, key: &K) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Lookup for multiplicative factors.
    pub fn multiplier(&self, key: &K) -> f64 {
        self.lookup(key).unwrap_or(NEUTRAL_MULTIPLIER)
    }

    /// Lookup for additive contributions.
    pub fn addend(&self, key: &K) -> f64 {
        self.lookup(key).unwrap_or(NEUTRAL_ADDEND)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }
}

impl<K: Eq + Hash> FromIterator<(K, f64)> for FactorTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Per-domain groups
// ════════════════════════════════════════════════════════════════════════════════

/// Base emission of a commute mode and whether fuel answers scale it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeFactor {
    /// kg CO2e per day before distance and occupancy scaling.
    pub base: f64,
    /// Whether fuel type, charging source and mileage apply.
    pub fuel_multiplier: bool,
}

impl ModeFactor {
    pub const fn new(base: f64, fuel_multiplier: bool) -> Self {
        Self {
            base,
            fuel_multiplier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportFactors {
    pub primary_mode: HashMap<TravelMode, ModeFactor>,
    pub fuel_type: FactorTable<FuelType>,
    pub ev_charging_source: FactorTable<EvChargingSource>,
    pub mileage: FactorTable<Mileage>,
    pub daily_distance: FactorTable<DailyDistance>,
    pub passengers: FactorTable<Passengers>,
    /// Annual flights expressed as kg CO2e per day.
    pub flights_per_year: FactorTable<FlightsPerYear>,
}

impl Default for TransportFactors {
    fn default() -> Self {
        Self {
            primary_mode: HashMap::from([
                (TravelMode::PersonalCar, ModeFactor::new(4.5, true)),
                (TravelMode::TwoWheeler, ModeFactor::new(2.0, true)),
                (TravelMode::Taxi, ModeFactor::new(5.0, true)),
                (TravelMode::Bus, ModeFactor::new(0.35, false)),
                (TravelMode::Metro, ModeFactor::new(0.15, false)),
                (TravelMode::Train, ModeFactor::new(0.2, false)),
                (TravelMode::Bicycle, ModeFactor::new(0.0, false)),
                (TravelMode::Walking, ModeFactor::new(0.0, false)),
                (TravelMode::RemoteWork, ModeFactor::new(0.0, false)),
            ]),
            fuel_type: FactorTable::from_iter([
                (FuelType::Petrol, 0.25),
                (FuelType::Diesel, 0.27),
                (FuelType::Cng, 0.18),
                (FuelType::Hybrid, 0.15),
                (FuelType::Electric, 0.08),
            ]),
            ev_charging_source: FactorTable::from_iter([
                (EvChargingSource::HomeGrid, 1.0),
                (EvChargingSource::HomeSolar, 0.1),
                (EvChargingSource::PublicStation, 0.9),
                (EvChargingSource::Workplace, 0.8),
            ]),
            mileage: FactorTable::from_iter([
                (Mileage::Below10, 1.4),
                (Mileage::From10To15, 1.2),
                (Mileage::From15To20, 1.0),
                (Mileage::From20To25, 0.85),
                (Mileage::Above25, 0.7),
            ]),
            daily_distance: FactorTable::from_iter([
                (DailyDistance::UpTo5Km, 0.5),
                (DailyDistance::From6To15Km, 2.0),
                (DailyDistance::From16To30Km, 4.0),
                (DailyDistance::From31To50Km, 7.0),
                (DailyDistance::Above50Km, 10.0),
            ]),
            passengers: FactorTable::from_iter([
                (Passengers::Alone, 1.0),
                (Passengers::WithOne, 0.5),
                (Passengers::TwoToThree, 0.33),
                (Passengers::FourOrMore, 0.22),
            ]),
            flights_per_year: FactorTable::from_iter([
                (FlightsPerYear::None, 0.0),
                (FlightsPerYear::OneToTwo, 0.7),
                (FlightsPerYear::ThreeToFive, 2.0),
                (FlightsPerYear::SixToTen, 4.5),
                (FlightsPerYear::MoreThanTen, 8.0),
            ]),
        }
    }
}

/// kg CO2e per meal for each meal type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealTypeFactors {
    pub meat: f64,
    pub dairy: f64,
    pub plant: f64,
}

impl Default for MealTypeFactors {
    fn default() -> Self {
        Self {
            meat: 3.0,
            dairy: 1.4,
            plant: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietFactors {
    pub meal_type: MealTypeFactors,
    /// Ordered-meal frequency expressed as delivered meals per day.
    pub ordered_meals: FactorTable<MealFrequency>,
    /// kg CO2e of packaging and delivery per ordered meal.
    pub delivery_packaging: f64,
    pub junk_food: FactorTable<MealFrequency>,
    pub food_waste: FactorTable<FoodWaste>,
}

impl Default for DietFactors {
    fn default() -> Self {
        Self {
            meal_type: MealTypeFactors::default(),
            ordered_meals: FactorTable::from_iter([
                (MealFrequency::Never, 0.0),
                (MealFrequency::Rarely, 0.05),
                (MealFrequency::Weekly, 0.15),
                (MealFrequency::FewTimesWeek, 0.45),
                (MealFrequency::Daily, 1.0),
            ]),
            delivery_packaging: 0.6,
            junk_food: FactorTable::from_iter([
                (MealFrequency::Never, 1.0),
                (MealFrequency::Rarely, 1.02),
                (MealFrequency::Weekly, 1.05),
                (MealFrequency::FewTimesWeek, 1.1),
                (MealFrequency::Daily, 1.2),
            ]),
            food_waste: FactorTable::from_iter([
                (FoodWaste::None, 1.0),
                (FoodWaste::Little, 1.05),
                (FoodWaste::Moderate, 1.15),
                (FoodWaste::ALot, 1.3),
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElectricityFactors {
    /// kg CO2e per kWh by renewable share.
    pub renewable_energy: FactorTable<RenewableEnergy>,
    /// Grid intensity assumed when the source is unknown or absent.
    pub grid_fallback: f64,
    pub time_at_home: FactorTable<TimeAtHome>,
    /// Estimated monthly kWh drawn by each appliance.
    pub appliance_monthly_kwh: FactorTable<Appliance>,
}

impl ElectricityFactors {
    /// kg CO2e per kWh for the given source answer.
    ///
    /// Unlike every other lookup this one is pessimistic: an unmodelled or
    /// missing answer gets the plain grid intensity.
    pub fn emission_factor(&self, source: Option<RenewableEnergy>) -> f64 {
        source
            .and_then(|s| self.renewable_energy.lookup(&s))
            .unwrap_or(self.grid_fallback)
    }
}

impl Default for ElectricityFactors {
    fn default() -> Self {
        Self {
            renewable_energy: FactorTable::from_iter([
                (RenewableEnergy::FullyRenewable, 0.05),
                (RenewableEnergy::PartiallyRenewable, 0.45),
                (RenewableEnergy::NoRenewable, 0.82),
            ]),
            grid_fallback: 0.82,
            time_at_home: FactorTable::from_iter([
                (TimeAtHome::LessThan6h, 0.8),
                (TimeAtHome::From6To12h, 1.0),
                (TimeAtHome::From12To18h, 1.2),
                (TimeAtHome::MoreThan18h, 1.4),
            ]),
            appliance_monthly_kwh: FactorTable::from_iter([
                (Appliance::AirConditioner, 150.0),
                (Appliance::Refrigerator, 35.0),
                (Appliance::WashingMachine, 15.0),
                (Appliance::WaterHeater, 60.0),
                (Appliance::Microwave, 10.0),
                (Appliance::Dishwasher, 25.0),
                (Appliance::Television, 12.0),
                (Appliance::Computer, 20.0),
                (Appliance::ElectricStove, 50.0),
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifestyleFactors {
    /// kg CO2e per week of streaming and device use.
    pub screen_time_weekly: FactorTable<ScreenTime>,
    /// kg CO2e per month.
    pub non_essential_shopping: FactorTable<ShoppingFrequency>,
    /// kg CO2e per month.
    pub fashion_shopping: FactorTable<ShoppingFrequency>,
    /// kg CO2e per month.
    pub online_orders: FactorTable<OnlineOrders>,
    pub waste_management: FactorTable<WasteManagement>,
}

impl Default for LifestyleFactors {
    fn default() -> Self {
        Self {
            screen_time_weekly: FactorTable::from_iter([
                (ScreenTime::LessThan2h, 0.5),
                (ScreenTime::From2To4h, 1.2),
                (ScreenTime::From4To6h, 2.0),
                (ScreenTime::From6To8h, 2.8),
                (ScreenTime::MoreThan8h, 3.5),
            ]),
            non_essential_shopping: FactorTable::from_iter([
                (ShoppingFrequency::Never, 0.0),
                (ShoppingFrequency::Rarely, 5.0),
                (ShoppingFrequency::EveryFewMonths, 10.0),
                (ShoppingFrequency::Monthly, 20.0),
                (ShoppingFrequency::Weekly, 45.0),
            ]),
            fashion_shopping: FactorTable::from_iter([
                (ShoppingFrequency::Never, 0.0),
                (ShoppingFrequency::Rarely, 8.0),
                (ShoppingFrequency::EveryFewMonths, 20.0),
                (ShoppingFrequency::Monthly, 40.0),
                (ShoppingFrequency::Weekly, 120.0),
            ]),
            online_orders: FactorTable::from_iter([
                (OnlineOrders::UpTo2, 1.5),
                (OnlineOrders::From3To5, 4.0),
                (OnlineOrders::From6To10, 8.0),
                (OnlineOrders::MoreThan10, 15.0),
            ]),
            waste_management: FactorTable::from_iter([
                (WasteManagement::RecycleAndCompost, 0.7),
                (WasteManagement::RecycleOnly, 0.85),
                (WasteManagement::SometimesSegregate, 1.0),
                (WasteManagement::ThrowEverythingTogether, 1.2),
            ]),
        }
    }
}

/// Conversion factors used only by the daily-log pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyLogFactors {
    /// Kilometres per unit of the banded distance factor. 5.75 km makes a
    /// 23 km day score the same as the `16_30km` band.
    pub km_per_distance_unit: f64,
    /// kg CO2e per hour in the air.
    pub per_flight_hour: f64,
    /// kg CO2e per non-essential item bought.
    pub non_essential_item: f64,
    /// kg CO2e per clothing item bought.
    pub fashion_item: f64,
    /// kg CO2e per online order delivered.
    pub online_order: f64,
}

impl Default for DailyLogFactors {
    fn default() -> Self {
        Self {
            km_per_distance_unit: 5.75,
            per_flight_hour: 90.0,
            non_essential_item: 4.0,
            fashion_item: 10.0,
            online_order: 0.9,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Registry
// ════════════════════════════════════════════════════════════════════════════════

/// The complete emission factor registry.
///
/// Anything a loaded file leaves out keeps its built-in value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmissionFactors {
    pub transport: TransportFactors,
    pub diet: DietFactors,
    pub electricity: ElectricityFactors,
    pub lifestyle: LifestyleFactors,
    pub daily_log: DailyLogFactors,
}

impl EmissionFactors {
    /// Builds the built-in factor tables.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Process-wide built-in registry, initialised on first use.
    pub fn global() -> &'static EmissionFactors {
        &STANDARD_FACTORS
    }

    /// Parses a registry from JSON, overlaying it on the built-in tables.
    pub fn from_json_str(json: &str) -> Result<Self, FactorLoadError> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::standard())?;
        overlay(&mut merged, overrides);

        let factors: EmissionFactors = serde_json::from_value(merged)?;
        factors.check()?;
        Ok(factors)
    }

    /// Reads and parses a registry from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FactorLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| FactorLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Rejects negative or non-finite numbers, which would break the
    /// non-negative breakdown guarantee.
    fn check(&self) -> Result<(), FactorLoadError> {
        fn ensure(name: &str, values: impl IntoIterator<Item = f64>) -> Result<(), FactorLoadError> {
            if values.into_iter().all(|v| v.is_finite() && v >= 0.0) {
                Ok(())
            } else {
                Err(FactorLoadError::InvalidFactor(name.to_string()))
            }
        }

        fn known<K: Eq + Hash>(
            name: &str,
            table: &FactorTable<K>,
            unknown: K,
        ) -> Result<(), FactorLoadError> {
            match table.lookup(&unknown) {
                Some(_) => Err(FactorLoadError::UnrecognisedKey(name.to_string())),
                None => Ok(()),
            }
        }

        let t = &self.transport;
        if t.primary_mode.contains_key(&TravelMode::Unknown) {
            return Err(FactorLoadError::UnrecognisedKey("transport.primaryMode".to_string()));
        }
        known("transport.fuelType", &t.fuel_type, FuelType::Unknown)?;
        known("transport.evChargingSource", &t.ev_charging_source, EvChargingSource::Unknown)?;
        known("transport.mileage", &t.mileage, Mileage::Unknown)?;
        known("transport.dailyDistance", &t.daily_distance, DailyDistance::Unknown)?;
        known("transport.passengers", &t.passengers, Passengers::Unknown)?;
        known("transport.flightsPerYear", &t.flights_per_year, FlightsPerYear::Unknown)?;
        ensure("transport.primaryMode", t.primary_mode.values().map(|m| m.base))?;
        ensure("transport.fuelType", t.fuel_type.values())?;
        ensure("transport.evChargingSource", t.ev_charging_source.values())?;
        ensure("transport.mileage", t.mileage.values())?;
        ensure("transport.dailyDistance", t.daily_distance.values())?;
        ensure("transport.passengers", t.passengers.values())?;
        ensure("transport.flightsPerYear", t.flights_per_year.values())?;

        let d = &self.diet;
        known("diet.orderedMeals", &d.ordered_meals, MealFrequency::Unknown)?;
        known("diet.junkFood", &d.junk_food, MealFrequency::Unknown)?;
        known("diet.foodWaste", &d.food_waste, FoodWaste::Unknown)?;
        ensure(
            "diet.mealType",
            [d.meal_type.meat, d.meal_type.dairy, d.meal_type.plant],
        )?;
        ensure("diet.orderedMeals", d.ordered_meals.values())?;
        ensure("diet.deliveryPackaging", [d.delivery_packaging])?;
        ensure("diet.junkFood", d.junk_food.values())?;
        ensure("diet.foodWaste", d.food_waste.values())?;

        let e = &self.electricity;
        known("electricity.renewableEnergy", &e.renewable_energy, RenewableEnergy::Unknown)?;
        known("electricity.timeAtHome", &e.time_at_home, TimeAtHome::Unknown)?;
        known("electricity.applianceMonthlyKwh", &e.appliance_monthly_kwh, Appliance::Unknown)?;
        ensure("electricity.renewableEnergy", e.renewable_energy.values())?;
        ensure("electricity.gridFallback", [e.grid_fallback])?;
        ensure("electricity.timeAtHome", e.time_at_home.values())?;
        ensure("electricity.applianceMonthlyKwh", e.appliance_monthly_kwh.values())?;

        let l = &self.lifestyle;
        known("lifestyle.screenTimeWeekly", &l.screen_time_weekly, ScreenTime::Unknown)?;
        known(
            "lifestyle.nonEssentialShopping",
            &l.non_essential_shopping,
            ShoppingFrequency::Unknown,
        )?;
        known("lifestyle.fashionShopping", &l.fashion_shopping, ShoppingFrequency::Unknown)?;
        known("lifestyle.onlineOrders", &l.online_orders, OnlineOrders::Unknown)?;
        known("lifestyle.wasteManagement", &l.waste_management, WasteManagement::Unknown)?;
        ensure("lifestyle.screenTimeWeekly", l.screen_time_weekly.values())?;
        ensure("lifestyle.nonEssentialShopping", l.non_essential_shopping.values())?;
        ensure("lifestyle.fashionShopping", l.fashion_shopping.values())?;
        ensure("lifestyle.onlineOrders", l.online_orders.values())?;
        ensure("lifestyle.wasteManagement", l.waste_management.values())?;

        let g = &self.daily_log;
        ensure(
            "dailyLog",
            [
                g.per_flight_hour,
                g.non_essential_item,
                g.fashion_item,
                g.online_order,
            ],
        )?;
        if !(g.km_per_distance_unit.is_finite() && g.km_per_distance_unit > 0.0) {
            return Err(FactorLoadError::InvalidFactor(
                "dailyLog.kmPerDistanceUnit".to_string(),
            ));
        }

        Ok(())
    }
}

/// Recursively lays `overrides` over `base`: objects merge per key, any
/// other value replaces what was there.
fn overlay(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
