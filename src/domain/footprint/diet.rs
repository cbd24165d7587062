//! Diet calculator.

use super::factors::DietFactors;
use super::profile::DietProfile;
use super::result::round2;

/// Daily diet emissions in kg CO2e.
///
/// Per-meal footprint is the percentage-weighted sum of the meat, dairy and
/// plant factors. The percentages are used exactly as given, with no
/// renormalisation when they do not add up to 100.
pub fn diet_emissions(profile: &DietProfile, factors: &DietFactors) -> f64 {
    round2(diet_emissions_unrounded(profile, factors))
}

/// [`diet_emissions`] before rounding.
pub(super) fn diet_emissions_unrounded(profile: &DietProfile, factors: &DietFactors) -> f64 {
    let share = |pct: Option<f64>| pct.unwrap_or(0.0) / 100.0;

    let per_meal = share(profile.meat_percentage) * factors.meal_type.meat
        + share(profile.dairy_percentage) * factors.meal_type.dairy
        + share(profile.plant_percentage) * factors.meal_type.plant;

    let meals = f64::from(profile.meals_per_day.unwrap_or(0));
    let mut value = per_meal * meals;

    if let Some(freq) = profile.ordered_meals_freq {
        value += factors.ordered_meals.addend(&freq) * factors.delivery_packaging;
    }

    if let Some(freq) = profile.junk_food_freq {
        value *= factors.junk_food.multiplier(&freq);
    }

    if let Some(waste) = profile.food_waste {
        value *= factors.food_waste.multiplier(&waste);
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::footprint::profile::{FoodWaste, MealFrequency};

    fn mixed() -> DietProfile {
        DietProfile {
            meals_per_day: Some(3),
            meat_percentage: Some(50.0),
            dairy_percentage: Some(25.0),
            plant_percentage: Some(25.0),
            ..Default::default()
        }
    }

    #[test]
    fn weighted_meal_footprint() {
        // (0.5 * 3.0 + 0.25 * 1.4 + 0.25 * 0.6) * 3 = 6.0
        assert_eq!(diet_emissions(&mixed(), &DietFactors::default()), 6.0);
    }

    #[test]
    fn percentages_are_not_renormalised() {
        let profile = DietProfile {
            meals_per_day: Some(2),
            meat_percentage: Some(50.0),
            ..Default::default()
        };
        // Only half a meal's worth of weight is given: 0.5 * 3.0 * 2
        assert_eq!(diet_emissions(&profile, &DietFactors::default()), 3.0);
    }

    #[test]
    fn ordered_meals_add_packaging() {
        let mut profile = mixed();
        profile.ordered_meals_freq = Some(MealFrequency::Daily);
        // 6.0 + 1.0 meals/day * 0.6
        assert_eq!(diet_emissions(&profile, &DietFactors::default()), 6.6);
    }

    #[test]
    fn junk_food_then_waste_multipliers() {
        let mut profile = mixed();
        profile.junk_food_freq = Some(MealFrequency::Daily);
        profile.food_waste = Some(FoodWaste::ALot);
        // 6.0 * 1.2 * 1.3
        assert_eq!(diet_emissions(&profile, &DietFactors::default()), 9.36);
    }

    #[test]
    fn multipliers_never_reduce() {
        let factors = DietFactors::default();
        let base = diet_emissions(&mixed(), &factors);
        for freq in [
            MealFrequency::Never,
            MealFrequency::Rarely,
            MealFrequency::Weekly,
            MealFrequency::FewTimesWeek,
            MealFrequency::Daily,
            MealFrequency::Unknown,
        ] {
            let mut profile = mixed();
            profile.junk_food_freq = Some(freq);
            assert!(diet_emissions(&profile, &factors) >= base);
        }
    }

    #[test]
    fn unknown_answers_pass_through() {
        let factors = DietFactors::default();
        let mut profile = mixed();
        profile.ordered_meals_freq = Some(MealFrequency::Unknown);
        profile.junk_food_freq = Some(MealFrequency::Unknown);
        profile.food_waste = Some(FoodWaste::Unknown);
        assert_eq!(diet_emissions(&profile, &factors), diet_emissions(&mixed(), &factors));
    }

    #[test]
    fn empty_diet_is_zero() {
        assert_eq!(diet_emissions(&DietProfile::default(), &DietFactors::default()), 0.0);
    }
}
