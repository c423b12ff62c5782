pub mod climate_zone;
pub mod engine;
pub mod rainfall;
pub mod temperature;

pub use engine::AdjustmentEngine;

use crate::models::{AdjustmentFactors, Advisory, ClimateZone, WeatherSnapshot};

/// Heavy rainfall threshold, mm/month
pub const HEAVY_RAINFALL_MM: f64 = 200.0;
/// Dry conditions threshold, mm/month
pub const DRY_RAINFALL_MM: f64 = 30.0;
/// High temperature threshold, °C
pub const HIGH_TEMP_C: f64 = 32.0;
/// Low temperature threshold, °C
pub const LOW_TEMP_C: f64 = 8.0;

/// Conditions the fertilizer rules look at.
///
/// Rainfall and temperature are only known when a weather snapshot was
/// supplied; the no-weather defaults never trigger weather rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowingConditions {
    pub climate: ClimateZone,
    pub rainfall: Option<f64>,
    pub temp: Option<f64>,
}

impl GrowingConditions {
    pub fn new(climate: ClimateZone, weather: Option<&WeatherSnapshot>) -> Self {
        Self {
            climate,
            rainfall: weather.map(|w| w.rainfall),
            temp: weather.map(|w| w.temp),
        }
    }
}

/// Trait for fertilizer adjustment rules
pub trait AdjustmentRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Apply this rule's change on top of the factors left by earlier rules
    fn adjust(&self, conditions: &GrowingConditions, factors: &mut AdjustmentFactors);

    /// Advice to print for these conditions, given the final factors
    fn advise(
        &self,
        conditions: &GrowingConditions,
        factors: &AdjustmentFactors,
    ) -> Option<Advisory>;
}
