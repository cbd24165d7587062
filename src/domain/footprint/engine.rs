//! Footprint engine: aggregation entry points over an injected registry.
//!
//! [`FootprintEngine`] bundles the factor registry with the categorization
//! and recommendation settings so application code can carry one value.
//! The free functions at the bottom use the built-in registry.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::category::{CategoryScale, FootprintCategory};
use super::daily_log::{
    daily_diet_emissions_unrounded, daily_electricity_emissions_unrounded,
    daily_lifestyle_emissions_unrounded, daily_transport_emissions_unrounded, DailyLogInput,
};
use super::diet::{diet_emissions, diet_emissions_unrounded};
use super::electricity::{electricity_emissions, electricity_emissions_unrounded};
use super::factors::EmissionFactors;
use super::lifestyle::{lifestyle_emissions, lifestyle_emissions_unrounded};
use super::profile::Profile;
use super::recommendations::{recommend, DEFAULT_RECOMMENDATION_LIMIT};
use super::result::{round2, Breakdown, CarbonResult};
use super::transport::{transport_emissions, transport_emissions_unrounded};
use super::what_if::compose_override;

/// Raised when a numeric input cannot be scored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    #[error("Invalid profile field '{field}': {reason}")]
    InvalidProfileField { field: String, reason: String },
}

impl FootprintError {
    fn invalid(field: &str, reason: &str) -> Self {
        FootprintError::InvalidProfileField {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<FootprintError> for DomainError {
    fn from(err: FootprintError) -> Self {
        let message = err.to_string();
        match err {
            FootprintError::InvalidProfileField { field, .. } => {
                DomainError::new(ErrorCode::InvalidProfileField, message).with_detail("field", field)
            }
        }
    }
}

fn ensure_scorable(field: &str, value: Option<f64>) -> Result<(), FootprintError> {
    match value {
        Some(v) if v.is_nan() => Err(FootprintError::invalid(field, "is not a number")),
        Some(v) if v.is_infinite() => Err(FootprintError::invalid(field, "is infinite")),
        Some(v) if v < 0.0 => Err(FootprintError::invalid(field, "is negative")),
        _ => Ok(()),
    }
}

fn check_profile(profile: &Profile) -> Result<(), FootprintError> {
    if let Some(diet) = &profile.diet {
        ensure_scorable("diet.meatPercentage", diet.meat_percentage)?;
        ensure_scorable("diet.dairyPercentage", diet.dairy_percentage)?;
        ensure_scorable("diet.plantPercentage", diet.plant_percentage)?;
    }
    if let Some(electricity) = &profile.electricity {
        ensure_scorable("electricity.monthlyKwh", electricity.monthly_kwh)?;
    }
    Ok(())
}

fn check_daily_log(log: &DailyLogInput) -> Result<(), FootprintError> {
    if let Some(transport) = &log.transport {
        ensure_scorable("transport.distanceKm", transport.distance_km)?;
        ensure_scorable("transport.flightHours", transport.flight_hours)?;
    }
    if let Some(electricity) = &log.electricity {
        ensure_scorable("electricity.kwhToday", electricity.kwh_today)?;
    }
    if let Some(lifestyle) = &log.lifestyle {
        ensure_scorable("lifestyle.screenTimeHours", lifestyle.screen_time_hours)?;
    }
    Ok(())
}

/// Rounds one domain's value. Finite inputs can still overflow once
/// multiplied through the factors; that is reported, not zeroed.
fn scored(domain: &str, raw: f64) -> Result<f64, FootprintError> {
    if raw.is_finite() {
        Ok(round2(raw))
    } else {
        Err(FootprintError::invalid(domain, "produces a non-finite emission value"))
    }
}

fn checked_result(breakdown: Breakdown) -> Result<CarbonResult, FootprintError> {
    if !breakdown.sum().is_finite() {
        return Err(FootprintError::invalid("total", "produces a non-finite emission value"));
    }
    Ok(CarbonResult::from_breakdown(breakdown))
}

fn checked_aggregate(
    profile: &Profile,
    factors: &EmissionFactors,
) -> Result<CarbonResult, FootprintError> {
    let domain = |name: &str, raw: Option<f64>| raw.map(|v| scored(name, v)).transpose();

    checked_result(Breakdown {
        transport: domain(
            "transport",
            profile
                .transport
                .as_ref()
                .map(|t| transport_emissions_unrounded(t, &factors.transport)),
        )?
        .unwrap_or(0.0),
        diet: domain(
            "diet",
            profile
                .diet
                .as_ref()
                .map(|d| diet_emissions_unrounded(d, &factors.diet)),
        )?
        .unwrap_or(0.0),
        electricity: domain(
            "electricity",
            profile
                .electricity
                .as_ref()
                .map(|e| electricity_emissions_unrounded(e, &factors.electricity)),
        )?
        .unwrap_or(0.0),
        lifestyle: domain(
            "lifestyle",
            profile
                .lifestyle
                .as_ref()
                .map(|l| lifestyle_emissions_unrounded(l, &factors.lifestyle)),
        )?
        .unwrap_or(0.0),
    })
}

fn checked_daily_log(
    log: &DailyLogInput,
    factors: &EmissionFactors,
) -> Result<CarbonResult, FootprintError> {
    let domain = |name: &str, raw: Option<f64>| raw.map(|v| scored(name, v)).transpose();

    checked_result(Breakdown {
        transport: domain(
            "transport",
            log.transport
                .as_ref()
                .map(|t| daily_transport_emissions_unrounded(t, factors)),
        )?
        .unwrap_or(0.0),
        diet: domain(
            "diet",
            log.diet
                .as_ref()
                .map(|d| daily_diet_emissions_unrounded(d, factors)),
        )?
        .unwrap_or(0.0),
        electricity: domain(
            "electricity",
            log.electricity
                .as_ref()
                .map(|e| daily_electricity_emissions_unrounded(e, factors)),
        )?
        .unwrap_or(0.0),
        lifestyle: domain(
            "lifestyle",
            log.lifestyle
                .as_ref()
                .map(|l| daily_lifestyle_emissions_unrounded(l, factors)),
        )?
        .unwrap_or(0.0),
    })
}

/// Sums the four calculators. Absent domains contribute zero.
pub fn aggregate(profile: &Profile, factors: &EmissionFactors) -> CarbonResult {
    CarbonResult::from_breakdown(Breakdown {
        transport: profile
            .transport
            .as_ref()
            .map_or(0.0, |t| transport_emissions(t, &factors.transport)),
        diet: profile
            .diet
            .as_ref()
            .map_or(0.0, |d| diet_emissions(d, &factors.diet)),
        electricity: profile
            .electricity
            .as_ref()
            .map_or(0.0, |e| electricity_emissions(e, &factors.electricity)),
        lifestyle: profile
            .lifestyle
            .as_ref()
            .map_or(0.0, |l| lifestyle_emissions(l, &factors.lifestyle)),
    })
}

/// Stateless footprint engine. Cheap to clone; the registry is shared.
#[derive(Debug, Clone)]
pub struct FootprintEngine {
    factors: Arc<EmissionFactors>,
    category_scale: CategoryScale,
    recommendation_limit: usize,
}

impl FootprintEngine {
    pub fn new(
        factors: Arc<EmissionFactors>,
        category_scale: CategoryScale,
        recommendation_limit: usize,
    ) -> Self {
        Self {
            factors,
            category_scale,
            recommendation_limit,
        }
    }

    /// Engine over the built-in registry with default settings.
    pub fn standard() -> Self {
        Self::new(
            Arc::new(EmissionFactors::standard()),
            CategoryScale::Standard,
            DEFAULT_RECOMMENDATION_LIMIT,
        )
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn category_scale(&self) -> CategoryScale {
        self.category_scale
    }

    pub fn recommendation_limit(&self) -> usize {
        self.recommendation_limit
    }

    /// Footprint of a (possibly partial) profile.
    pub fn compute(&self, profile: &Profile) -> Result<CarbonResult, FootprintError> {
        check_profile(profile)?;
        checked_aggregate(profile, &self.factors)
    }

    /// Footprint of one day's recorded activity.
    pub fn compute_daily_log(&self, log: &DailyLogInput) -> Result<CarbonResult, FootprintError> {
        check_daily_log(log)?;
        checked_daily_log(log, &self.factors)
    }

    /// Footprint of `baseline` with `over` merged on top.
    pub fn compute_override(
        &self,
        baseline: &Profile,
        over: &Profile,
    ) -> Result<CarbonResult, FootprintError> {
        self.compute(&compose_override(baseline, over))
    }

    pub fn categorize(&self, total: f64) -> FootprintCategory {
        self.category_scale.categorize(total)
    }

    /// Label for `category` on this engine's scale.
    pub fn category_label(&self, category: FootprintCategory) -> &'static str {
        self.category_scale.label(category)
    }

    pub fn recommend(&self, profile: &Profile, total: f64) -> Vec<String> {
        recommend(profile, total, self.recommendation_limit)
    }
}

impl Default for FootprintEngine {
    fn default() -> Self {
        Self::standard()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Built-in registry entry points
// ════════════════════════════════════════════════════════════════════════════════

pub fn compute_footprint(profile: &Profile) -> Result<CarbonResult, FootprintError> {
    check_profile(profile)?;
    checked_aggregate(profile, EmissionFactors::global())
}

pub fn compute_footprint_from_daily_log(
    log: &DailyLogInput,
) -> Result<CarbonResult, FootprintError> {
    check_daily_log(log)?;
    checked_daily_log(log, EmissionFactors::global())
}

pub fn compute_override(baseline: &Profile, over: &Profile) -> Result<CarbonResult, FootprintError> {
    compute_footprint(&compose_override(baseline, over))
}
