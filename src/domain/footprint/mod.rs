//! Carbon-footprint computation engine.
//!
//! Estimates a person's daily greenhouse-gas footprint in kg CO2e from
//! lifestyle answers. Everything in this module is synchronous and free of
//! I/O; the only shared state is the read-only [`EmissionFactors`] registry.
//!
//! # Paths
//!
//! - **Baseline**: a [`Profile`] goes through the four domain calculators
//!   and is summed into a [`CarbonResult`].
//! - **What-if**: a partial override is merged onto a stored baseline with
//!   [`compose_override`] and then scored like a baseline.
//! - **Daily log**: a [`DailyLogInput`] of observed quantities is scored by
//!   its own pipeline that mirrors the baseline rules.
//!
//! # Example
//!
//! ```
//! use carbon_footprint::domain::footprint::{compute_footprint, categorize, Profile};
//!
//! let result = compute_footprint(&Profile::default()).unwrap();
//! assert_eq!(result.total, 0.0);
//! assert_eq!(categorize(result.total).to_string(), "Low");
//! ```

mod category;
mod daily_log;
mod diet;
mod electricity;
mod engine;
mod factors;
mod lifestyle;
mod profile;
mod recommendations;
mod result;
mod transport;
pub mod validation;
mod walking;
mod what_if;

pub use category::{categorize, CategoryScale, FootprintCategory};
pub use daily_log::{
    daily_diet_emissions, daily_electricity_emissions, daily_lifestyle_emissions,
    daily_log_footprint, daily_transport_emissions, DailyDietLog, DailyElectricityLog,
    DailyLifestyleLog, DailyLogInput, DailyTransportLog,
};
pub use diet::diet_emissions;
pub use electricity::{electricity_emissions, DAYS_PER_MONTH};
pub use engine::{
    aggregate, compute_footprint, compute_footprint_from_daily_log, compute_override,
    FootprintEngine, FootprintError,
};
pub use factors::{
    DailyLogFactors, DietFactors, ElectricityFactors, EmissionFactors, FactorLoadError,
    FactorTable, LifestyleFactors, MealTypeFactors, ModeFactor, TransportFactors,
    NEUTRAL_ADDEND, NEUTRAL_MULTIPLIER,
};
pub use lifestyle::{lifestyle_emissions, WEEKS_PER_MONTH};
pub use profile::{
    Appliance, DailyDistance, DietProfile, ElectricityProfile, EvChargingSource,
    FlightsPerYear, FoodWaste, FuelType, LifestyleProfile, MealFrequency, Mileage,
    OnlineOrders, Passengers, Profile, RenewableEnergy, ScreenTime, ShoppingFrequency,
    TimeAtHome, TransportProfile, TravelMode, WasteManagement,
};
pub use recommendations::{recommend, DEFAULT_RECOMMENDATION_LIMIT, ENCOURAGEMENT};
pub use result::{round2, Breakdown, CarbonResult, FOOTPRINT_UNIT};
pub use transport::transport_emissions;
pub use validation::{validate_baseline_profile, validate_daily_log, validate_override};
pub use walking::{avoided_carbon_from_steps, CAR_KG_CO2E_PER_KM, STRIDE_LENGTH_M};
pub use what_if::compose_override;
