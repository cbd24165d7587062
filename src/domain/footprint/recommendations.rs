//! Rule-based recommendation generator.
//!
//! Rules are evaluated in declaration order and every match contributes its
//! suggestion; the list is then cut to the configured limit. Nothing here
//! reads the factor registry.

use super::profile::{
    Appliance, DailyDistance, EvChargingSource, FlightsPerYear, FoodWaste, FuelType,
    MealFrequency, Profile, RenewableEnergy, ScreenTime, ShoppingFrequency, TravelMode,
    WasteManagement,
};

/// Default and maximum number of suggestions returned.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Share of meat meals at or above which a reduction is suggested.
const HIGH_MEAT_PERCENTAGE: f64 = 50.0;

/// Monthly usage above which efficiency advice applies.
const HIGH_MONTHLY_KWH: f64 = 300.0;

/// Daily total above which the closing nudge is added.
const HIGH_TOTAL: f64 = 15.0;

/// Returned when no rule matches.
pub const ENCOURAGEMENT: &str =
    "Great job! Your lifestyle already has a low carbon impact. Keep up the sustainable habits.";

struct Rule {
    applies: fn(&Profile, f64) -> bool,
    message: &'static str,
}

static RULES: &[Rule] = &[
    Rule {
        applies: |p, _| {
            p.transport.as_ref().is_some_and(|t| {
                t.primary_mode == Some(TravelMode::PersonalCar)
                    || t.fuel_type == Some(FuelType::Diesel)
            })
        },
        message: "Try carpooling or public transport a few days a week to cut commute emissions.",
    },
    Rule {
        applies: |p, _| {
            p.transport.as_ref().is_some_and(|t| {
                t.fuel_type == Some(FuelType::Electric)
                    && t.ev_charging_source == Some(EvChargingSource::HomeGrid)
            })
        },
        message: "Charge your EV from solar or a green electricity tariff to make every kilometre cleaner.",
    },
    Rule {
        applies: |p, _| {
            p.transport.as_ref().is_some_and(|t| {
                t.primary_mode != Some(TravelMode::RemoteWork)
                    && matches!(
                        t.daily_distance,
                        Some(DailyDistance::From31To50Km | DailyDistance::Above50Km)
                    )
            })
        },
        message: "Your commute is long. Working remotely one or two days a week avoids those trips entirely.",
    },
    Rule {
        applies: |p, _| {
            p.transport.as_ref().is_some_and(|t| {
                matches!(
                    t.flights_per_year,
                    Some(FlightsPerYear::SixToTen | FlightsPerYear::MoreThanTen)
                )
            })
        },
        message: "Flights dominate your travel footprint. Replace short-haul flights with rail where you can.",
    },
    Rule {
        applies: |p, _| {
            p.diet
                .as_ref()
                .and_then(|d| d.meat_percentage)
                .is_some_and(|pct| pct >= HIGH_MEAT_PERCENTAGE)
        },
        message: "Swapping a few meat meals a week for plant-based ones can cut your diet emissions sharply.",
    },
    Rule {
        applies: |p, _| {
            p.diet.as_ref().is_some_and(|d| {
                matches!(
                    d.ordered_meals_freq,
                    Some(MealFrequency::FewTimesWeek | MealFrequency::Daily)
                )
            })
        },
        message: "Cooking at home more often avoids delivery trips and single-use packaging.",
    },
    Rule {
        applies: |p, _| {
            p.diet.as_ref().is_some_and(|d| {
                matches!(d.food_waste, Some(FoodWaste::Moderate | FoodWaste::ALot))
            })
        },
        message: "Plan meals and store leftovers to reduce food waste.",
    },
    Rule {
        applies: |p, _| {
            p.electricity.as_ref().is_some_and(|e| {
                e.monthly_kwh.is_some_and(|kwh| kwh > HIGH_MONTHLY_KWH)
                    || e.appliances
                        .as_ref()
                        .is_some_and(|set| set.contains(&Appliance::AirConditioner))
            })
        },
        message: "Switch to efficient appliances and set the air conditioner a degree or two warmer to save electricity.",
    },
    Rule {
        applies: |p, _| {
            p.electricity.as_ref().is_some_and(|e| {
                matches!(
                    e.renewable_energy,
                    Some(RenewableEnergy::NoRenewable | RenewableEnergy::NotSure)
                )
            })
        },
        message: "Consider rooftop solar or a renewable energy plan from your utility.",
    },
    Rule {
        applies: |p, _| {
            p.lifestyle.as_ref().is_some_and(|l| {
                matches!(
                    l.screen_time,
                    Some(ScreenTime::From6To8h | ScreenTime::MoreThan8h)
                )
            })
        },
        message: "Cut back on streaming and screen time, or lower the video quality, to reduce data-centre energy use.",
    },
    Rule {
        applies: |p, _| {
            p.lifestyle.as_ref().is_some_and(|l| {
                matches!(
                    l.fashion_shopping,
                    Some(ShoppingFrequency::Monthly | ShoppingFrequency::Weekly)
                )
            })
        },
        message: "Buy fewer new clothes: choose second-hand, repair and rewear.",
    },
    Rule {
        applies: |p, _| {
            p.lifestyle.as_ref().is_some_and(|l| {
                l.waste_management == Some(WasteManagement::ThrowEverythingTogether)
            })
        },
        message: "Separate recyclables and compost kitchen scraps to keep waste out of landfill.",
    },
    Rule {
        applies: |_, total| total >= HIGH_TOTAL,
        message: "Your daily footprint is well above average. Start with the largest category in your breakdown.",
    },
];

/// Suggestions for `profile` with daily `total`, at most `limit` of them.
///
/// `limit` is clamped to `1..=DEFAULT_RECOMMENDATION_LIMIT`. When no rule
/// matches a single encouragement message is returned.
pub fn recommend(profile: &Profile, total: f64, limit: usize) -> Vec<String> {
    let limit = limit.clamp(1, DEFAULT_RECOMMENDATION_LIMIT);

    let matched: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(profile, total))
        .take(limit)
        .map(|rule| rule.message.to_string())
        .collect();

    if matched.is_empty() {
        vec![ENCOURAGEMENT.to_string()]
    } else {
        matched
    }
}
