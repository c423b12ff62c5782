use super::{AdjustmentRule, GrowingConditions, DRY_RAINFALL_MM, HEAVY_RAINFALL_MM};
use crate::models::{AdjustmentFactors, Advisory};

/// Monthly rainfall rule
///
/// Only fires when a weather snapshot supplied rainfall.
/// - Heavy rainfall (>=200 mm/month): nitrogen leaches, N x0.85
/// - Dry conditions (<=30 mm/month): K x1.05 for drought tolerance
pub struct RainfallRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RainfallBand {
    Heavy,
    Dry,
}

fn band(conditions: &GrowingConditions) -> Option<RainfallBand> {
    let rainfall = conditions.rainfall?;
    if rainfall >= HEAVY_RAINFALL_MM {
        Some(RainfallBand::Heavy)
    } else if rainfall <= DRY_RAINFALL_MM {
        Some(RainfallBand::Dry)
    } else {
        None
    }
}

impl AdjustmentRule for RainfallRule {
    fn id(&self) -> &'static str {
        "rainfall"
    }

    fn name(&self) -> &'static str {
        "Rainfall Adjustment"
    }

    fn adjust(&self, conditions: &GrowingConditions, factors: &mut AdjustmentFactors) {
        match band(conditions) {
            Some(RainfallBand::Heavy) => factors.n_factor *= 0.85,
            Some(RainfallBand::Dry) => factors.k_factor *= 1.05,
            None => {}
        }
    }

    fn advise(
        &self,
        conditions: &GrowingConditions,
        _factors: &AdjustmentFactors,
    ) -> Option<Advisory> {
        let advisory = match band(conditions)? {
            RainfallBand::Heavy => Advisory::new(self.id())
                .with_heading("Heavy Rainfall Considerations:")
                .with_bullet("Split nitrogen applications to minimize leaching")
                .with_bullet("Consider foliar applications for micronutrients")
                .with_bullet("Ensure good drainage to prevent waterlogging"),
            RainfallBand::Dry => Advisory::new(self.id())
                .with_heading("Dry Conditions Considerations:")
                .with_bullet("Apply fertilizers when soil moisture is adequate")
                .with_bullet("Consider fertigation if irrigation available")
                .with_bullet("Monitor soil moisture regularly"),
        };
        Some(advisory)
    }
}
