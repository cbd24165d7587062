//! Lifestyle profile types answered during onboarding.
//!
//! Every categorical answer is a closed enum with an `Unknown` catch-all so
//! values added to the question catalog before the factor registry knows
//! about them still deserialize. Lookups for `Unknown` fall through to the
//! registry's neutral defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ════════════════════════════════════════════════════════════════════════════════
// Transport answers
// ════════════════════════════════════════════════════════════════════════════════

/// Main way the person commutes on a typical day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    PersonalCar,
    TwoWheeler,
    Taxi,
    Bus,
    Metro,
    Train,
    Bicycle,
    Walking,
    RemoteWork,
    #[serde(other)]
    Unknown,
}

/// Fuel of a car or two-wheeler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Petrol,
    Diesel,
    Cng,
    Hybrid,
    Electric,
    #[serde(other)]
    Unknown,
}

/// Where an electric vehicle is usually charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvChargingSource {
    HomeGrid,
    HomeSolar,
    PublicStation,
    Workplace,
    #[serde(other)]
    Unknown,
}

/// Typical round-trip distance per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DailyDistance {
    #[serde(rename = "0_5km")]
    UpTo5Km,
    #[serde(rename = "6_15km")]
    From6To15Km,
    #[serde(rename = "16_30km")]
    From16To30Km,
    #[serde(rename = "31_50km")]
    From31To50Km,
    #[serde(rename = "above_50km")]
    Above50Km,
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// Vehicle occupancy on the usual commute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Passengers {
    Alone,
    WithOne,
    TwoToThree,
    FourOrMore,
    #[serde(other)]
    Unknown,
}

/// Flights taken per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlightsPerYear {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "1_2")]
    OneToTwo,
    #[serde(rename = "3_5")]
    ThreeToFive,
    #[serde(rename = "6_10")]
    SixToTen,
    #[serde(rename = "more_than_10")]
    MoreThanTen,
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// Vehicle fuel efficiency band (km per litre or equivalent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mileage {
    #[serde(rename = "below_10")]
    Below10,
    #[serde(rename = "10_15")]
    From10To15,
    #[serde(rename = "15_20")]
    From15To20,
    #[serde(rename = "20_25")]
    From20To25,
    #[serde(rename = "above_25")]
    Above25,
    #[serde(other, rename = "unknown")]
    Unknown,
}

// ════════════════════════════════════════════════════════════════════════════════
// Diet answers
// ════════════════════════════════════════════════════════════════════════════════

/// How often something food-related happens. Shared by ordered meals and
/// junk food, which are looked up in separate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealFrequency {
    Never,
    Rarely,
    Weekly,
    FewTimesWeek,
    Daily,
    #[serde(other)]
    Unknown,
}

/// How much food ends up thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodWaste {
    None,
    Little,
    Moderate,
    ALot,
    #[serde(other)]
    Unknown,
}

// ════════════════════════════════════════════════════════════════════════════════
// Electricity answers
// ════════════════════════════════════════════════════════════════════════════════

/// Waking hours spent at home on a typical day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeAtHome {
    #[serde(rename = "less_than_6h")]
    LessThan6h,
    #[serde(rename = "6_12h")]
    From6To12h,
    #[serde(rename = "12_18h")]
    From12To18h,
    #[serde(rename = "more_than_18h")]
    MoreThan18h,
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// Major household appliances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appliance {
    AirConditioner,
    Refrigerator,
    WashingMachine,
    WaterHeater,
    Microwave,
    Dishwasher,
    Television,
    Computer,
    ElectricStove,
    #[serde(other)]
    Unknown,
}

/// Share of household electricity from renewable sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewableEnergy {
    FullyRenewable,
    PartiallyRenewable,
    NoRenewable,
    NotSure,
    #[serde(other)]
    Unknown,
}

// ════════════════════════════════════════════════════════════════════════════════
// Lifestyle answers
// ════════════════════════════════════════════════════════════════════════════════

/// Recreational screen time per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScreenTime {
    #[serde(rename = "less_than_2h")]
    LessThan2h,
    #[serde(rename = "2_4h")]
    From2To4h,
    #[serde(rename = "4_6h")]
    From4To6h,
    #[serde(rename = "6_8h")]
    From6To8h,
    #[serde(rename = "more_than_8h")]
    MoreThan8h,
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl ScreenTime {
    /// Band that a measured number of hours falls into.
    pub fn from_daily_hours(hours: f64) -> Self {
        if hours < 2.0 {
            ScreenTime::LessThan2h
        } else if hours < 4.0 {
            ScreenTime::From2To4h
        } else if hours < 6.0 {
            ScreenTime::From4To6h
        } else if hours <= 8.0 {
            ScreenTime::From6To8h
        } else {
            ScreenTime::MoreThan8h
        }
    }
}

/// How often purchases of a given kind are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingFrequency {
    Never,
    Rarely,
    EveryFewMonths,
    Monthly,
    Weekly,
    #[serde(other)]
    Unknown,
}

/// Online orders delivered per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OnlineOrders {
    #[serde(rename = "0_2")]
    UpTo2,
    #[serde(rename = "3_5")]
    From3To5,
    #[serde(rename = "6_10")]
    From6To10,
    #[serde(rename = "more_than_10")]
    MoreThan10,
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// How household waste is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteManagement {
    RecycleAndCompost,
    RecycleOnly,
    SometimesSegregate,
    ThrowEverythingTogether,
    #[serde(other)]
    Unknown,
}

// ════════════════════════════════════════════════════════════════════════════════
// Profile
// ════════════════════════════════════════════════════════════════════════════════

/// Transport slice of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_mode: Option<TravelMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ev_charging_source: Option<EvChargingSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_distance: Option<DailyDistance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passengers: Option<Passengers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flights_per_year: Option<FlightsPerYear>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<Mileage>,
}

/// Diet slice of a profile.
///
/// The three percentages are taken as given; nothing here checks that
/// they add up to 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meat_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dairy_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_meals_freq: Option<MealFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub junk_food_freq: Option<MealFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_waste: Option<FoodWaste>,
}

/// Electricity slice of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricityProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_at_home: Option<TimeAtHome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliances: Option<BTreeSet<Appliance>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewable_energy: Option<RenewableEnergy>,
}

/// Lifestyle slice of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_time: Option<ScreenTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_essential_shopping: Option<ShoppingFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fashion_shopping: Option<ShoppingFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_orders: Option<OnlineOrders>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_management: Option<WasteManagement>,
}

/// A lifestyle profile: four independently optional domain slices.
///
/// The same shape doubles as a partial override for what-if computations,
/// where every absent field means "keep the baseline value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<DietProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity: Option<ElectricityProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<LifestyleProfile>,
}

impl Profile {
    /// True when no domain slice is present.
    pub fn is_empty(&self) -> bool {
        self.transport.is_none()
            && self.diet.is_none()
            && self.electricity.is_none()
            && self.lifestyle.is_none()
    }
}
