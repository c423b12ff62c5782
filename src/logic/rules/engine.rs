use super::{
    climate_zone::ClimateZoneRule, rainfall::RainfallRule, temperature::TemperatureRule,
    AdjustmentRule, GrowingConditions,
};
use crate::models::{AdjustmentFactors, Advisory};

/// Runs the fertilizer adjustment rules in their fixed order:
/// climate zone, then rainfall, then temperature.
pub struct AdjustmentEngine {
    rules: Vec<Box<dyn AdjustmentRule>>,
}

impl AdjustmentEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn AdjustmentRule>> = vec![
            Box::new(ClimateZoneRule),
            Box::new(RainfallRule),
            Box::new(TemperatureRule),
        ];

        Self { rules }
    }

    /// Fold every rule over neutral factors
    pub fn adjust(&self, conditions: &GrowingConditions) -> AdjustmentFactors {
        let mut factors = AdjustmentFactors::default();
        for rule in &self.rules {
            rule.adjust(conditions, &mut factors);
            tracing::trace!(rule = rule.id(), ?factors, "applied adjustment rule");
        }
        factors
    }

    /// Advice blocks in rule order; the climate block is always first
    pub fn advise(
        &self,
        conditions: &GrowingConditions,
        factors: &AdjustmentFactors,
    ) -> Vec<Advisory> {
        self.rules
            .iter()
            .filter_map(|rule| rule.advise(conditions, factors))
            .collect()
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AdjustmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
