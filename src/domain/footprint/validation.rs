//! Upstream completeness and range checks.
//!
//! The calculators trust their input. These functions are what callers run
//! before handing a profile or daily log to the engine; field names in the
//! errors use the JSON paths clients send.

use crate::domain::foundation::ValidationError;

use super::daily_log::DailyLogInput;
use super::profile::{DietProfile, ElectricityProfile, Profile};

/// Slack allowed when the three diet percentages are summed.
pub const PERCENTAGE_SUM_TOLERANCE: f64 = 0.5;

fn check_percentage(field: &str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !(v.is_finite() && (0.0..=100.0).contains(&v)) => {
            Err(ValidationError::out_of_range(field, 0.0, 100.0, v))
        }
        _ => Ok(()),
    }
}

fn check_non_negative(field: &str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() => Err(ValidationError::invalid_format(
            field,
            "must be a finite number",
        )),
        Some(v) if v < 0.0 => Err(ValidationError::out_of_range(field, 0.0, f64::MAX, v)),
        _ => Ok(()),
    }
}

fn check_at_least_one(field: &str, value: Option<u32>) -> Result<(), ValidationError> {
    match value {
        Some(0) => Err(ValidationError::out_of_range(field, 1.0, f64::from(u32::MAX), 0.0)),
        _ => Ok(()),
    }
}

fn check_diet_ranges(diet: &DietProfile) -> Result<(), ValidationError> {
    check_at_least_one("diet.mealsPerDay", diet.meals_per_day)?;
    check_percentage("diet.meatPercentage", diet.meat_percentage)?;
    check_percentage("diet.dairyPercentage", diet.dairy_percentage)?;
    check_percentage("diet.plantPercentage", diet.plant_percentage)
}

fn check_electricity_ranges(electricity: &ElectricityProfile) -> Result<(), ValidationError> {
    check_non_negative("electricity.monthlyKwh", electricity.monthly_kwh)?;
    check_at_least_one("electricity.householdSize", electricity.household_size)
}

/// Checks that a baseline profile is complete and in range.
pub fn validate_baseline_profile(profile: &Profile) -> Result<(), ValidationError> {
    let transport = profile
        .transport
        .as_ref()
        .ok_or_else(|| ValidationError::empty_field("transport"))?;
    let diet = profile
        .diet
        .as_ref()
        .ok_or_else(|| ValidationError::empty_field("diet"))?;
    let electricity = profile
        .electricity
        .as_ref()
        .ok_or_else(|| ValidationError::empty_field("electricity"))?;
    if profile.lifestyle.is_none() {
        return Err(ValidationError::empty_field("lifestyle"));
    }

    if transport.primary_mode.is_none() {
        return Err(ValidationError::empty_field("transport.primaryMode"));
    }

    if diet.meals_per_day.is_none() {
        return Err(ValidationError::empty_field("diet.mealsPerDay"));
    }
    check_diet_ranges(diet)?;

    let sum = diet.meat_percentage.unwrap_or(0.0)
        + diet.dairy_percentage.unwrap_or(0.0)
        + diet.plant_percentage.unwrap_or(0.0);
    if (sum - 100.0).abs() > PERCENTAGE_SUM_TOLERANCE {
        return Err(ValidationError::invalid_format(
            "diet",
            format!("meat, dairy and plant percentages must sum to 100, got {}", sum),
        ));
    }

    if electricity.monthly_kwh.is_none() {
        return Err(ValidationError::empty_field("electricity.monthlyKwh"));
    }
    check_electricity_ranges(electricity)
}

/// Range checks on whatever fields a what-if override carries.
pub fn validate_override(over: &Profile) -> Result<(), ValidationError> {
    if let Some(diet) = &over.diet {
        check_diet_ranges(diet)?;
    }
    if let Some(electricity) = &over.electricity {
        check_electricity_ranges(electricity)?;
    }
    Ok(())
}

/// Checks a daily log's numbers before it is scored.
pub fn validate_daily_log(log: &DailyLogInput) -> Result<(), ValidationError> {
    if let Some(transport) = &log.transport {
        check_non_negative("transport.distanceKm", transport.distance_km)?;
        check_non_negative("transport.flightHours", transport.flight_hours)?;
    }

    if let Some(diet) = &log.diet {
        if let (Some(meals), Some(meat), Some(dairy)) =
            (diet.meals_today, diet.meat_meals, diet.dairy_meals)
        {
            let counted = u64::from(meat) + u64::from(dairy);
            if counted > u64::from(meals) {
                return Err(ValidationError::invalid_format(
                    "diet",
                    format!(
                        "meatMeals + dairyMeals ({}) exceeds mealsToday ({})",
                        counted, meals
                    ),
                ));
            }
        }
    }

    if let Some(electricity) = &log.electricity {
        check_non_negative("electricity.kwhToday", electricity.kwh_today)?;
        check_at_least_one("electricity.householdSize", electricity.household_size)?;
    }

    if let Some(lifestyle) = &log.lifestyle {
        check_non_negative("lifestyle.screenTimeHours", lifestyle.screen_time_hours)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::footprint::daily_log::{
        DailyDietLog, DailyElectricityLog, DailyTransportLog,
    };
    use crate::domain::footprint::profile::{LifestyleProfile, TransportProfile, TravelMode};

    fn complete() -> Profile {
        Profile {
            transport: Some(TransportProfile {
                primary_mode: Some(TravelMode::Bus),
                ..Default::default()
            }),
            diet: Some(DietProfile {
                meals_per_day: Some(3),
                meat_percentage: Some(30.0),
                dairy_percentage: Some(20.0),
                plant_percentage: Some(50.0),
                ..Default::default()
            }),
            electricity: Some(ElectricityProfile {
                monthly_kwh: Some(150.0),
                household_size: Some(2),
                ..Default::default()
            }),
            lifestyle: Some(LifestyleProfile::default()),
        }
    }

    #[test]
    fn complete_profile_passes() {
        assert!(validate_baseline_profile(&complete()).is_ok());
    }

    #[test]
    fn missing_domain_is_reported() {
        let mut profile = complete();
        profile.lifestyle = None;
        let err = validate_baseline_profile(&profile).unwrap_err();
        assert_eq!(err.field(), "lifestyle");
    }

    #[test]
    fn missing_primary_mode_is_reported() {
        let mut profile = complete();
        profile.transport = Some(TransportProfile::default());
        let err = validate_baseline_profile(&profile).unwrap_err();
        assert_eq!(err.field(), "transport.primaryMode");
    }

    #[test]
    fn percentages_must_sum_to_100() {
        let mut profile = complete();
        profile.diet.as_mut().unwrap().plant_percentage = Some(40.0);
        let err = validate_baseline_profile(&profile).unwrap_err();
        assert_eq!(err.field(), "diet");

        profile.diet.as_mut().unwrap().plant_percentage = Some(50.4);
        assert!(validate_baseline_profile(&profile).is_ok());
    }

    #[test]
    fn percentage_out_of_range() {
        let mut profile = complete();
        let diet = profile.diet.as_mut().unwrap();
        diet.meat_percentage = Some(120.0);
        diet.plant_percentage = Some(-40.0);
        let err = validate_baseline_profile(&profile).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
        assert_eq!(err.field(), "diet.meatPercentage");
    }

    #[test]
    fn zero_meals_or_household_rejected() {
        let mut profile = complete();
        profile.diet.as_mut().unwrap().meals_per_day = Some(0);
        assert_eq!(
            validate_baseline_profile(&profile).unwrap_err().field(),
            "diet.mealsPerDay"
        );

        let mut profile = complete();
        profile.electricity.as_mut().unwrap().household_size = Some(0);
        assert_eq!(
            validate_baseline_profile(&profile).unwrap_err().field(),
            "electricity.householdSize"
        );
    }

    #[test]
    fn non_finite_kwh_rejected() {
        let mut profile = complete();
        profile.electricity.as_mut().unwrap().monthly_kwh = Some(f64::NAN);
        let err = validate_baseline_profile(&profile).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn override_allows_single_percentage() {
        let over = Profile {
            diet: Some(DietProfile {
                meat_percentage: Some(10.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(validate_override(&over).is_ok());
        assert!(validate_override(&Profile::default()).is_ok());
    }

    #[test]
    fn override_still_range_checked() {
        let over = Profile {
            electricity: Some(ElectricityProfile {
                monthly_kwh: Some(-5.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            validate_override(&over).unwrap_err().field(),
            "electricity.monthlyKwh"
        );
    }

    #[test]
    fn daily_log_meal_counts_checked() {
        let log = DailyLogInput {
            diet: Some(DailyDietLog {
                meals_today: Some(2),
                meat_meals: Some(2),
                dairy_meals: Some(1),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(validate_daily_log(&log).unwrap_err().field(), "diet");
    }

    #[test]
    fn daily_log_numbers_checked() {
        let log = DailyLogInput {
            transport: Some(DailyTransportLog {
                distance_km: Some(-1.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            validate_daily_log(&log).unwrap_err().field(),
            "transport.distanceKm"
        );

        let log = DailyLogInput {
            electricity: Some(DailyElectricityLog {
                kwh_today: Some(f64::INFINITY),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            validate_daily_log(&log).unwrap_err().field(),
            "electricity.kwhToday"
        );

        assert!(validate_daily_log(&DailyLogInput::default()).is_ok());
    }
}
