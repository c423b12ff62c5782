use super::{AdjustmentRule, GrowingConditions, HIGH_TEMP_C, LOW_TEMP_C};
use crate::models::{AdjustmentFactors, Advisory};

/// Current temperature rule
///
/// Only fires when a weather snapshot supplied temperature.
/// - Heat (>=32°C): K x1.05 for stress tolerance
/// - Cold (<=8°C): N x0.9, growth is slow and nitrogen sits unused
pub struct TemperatureRule;

impl AdjustmentRule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Temperature Adjustment"
    }

    fn adjust(&self, conditions: &GrowingConditions, factors: &mut AdjustmentFactors) {
        let Some(temp) = conditions.temp else {
            return;
        };

        if temp >= HIGH_TEMP_C {
            factors.k_factor *= 1.05;
        } else if temp <= LOW_TEMP_C {
            factors.n_factor *= 0.9;
        }
    }

    fn advise(
        &self,
        conditions: &GrowingConditions,
        _factors: &AdjustmentFactors,
    ) -> Option<Advisory> {
        let temp = conditions.temp?;

        if temp >= HIGH_TEMP_C {
            Some(
                Advisory::new(self.id())
                    .with_heading("High Temperature Management:")
                    .with_bullet("Apply foliar sprays early morning or evening")
                    .with_bullet("Consider additional potassium for stress tolerance")
                    .with_bullet("Mulch to reduce soil temperature and moisture loss"),
            )
        } else if temp <= LOW_TEMP_C {
            Some(
                Advisory::new(self.id())
                    .with_heading("Low Temperature Management:")
                    .with_bullet("Delay fertilizer application until soil warms")
                    .with_bullet("Reduce nitrogen to prevent excessive vegetative growth")
                    .with_bullet("Monitor crop for cold stress symptoms"),
            )
        } else {
            None
        }
    }
}
