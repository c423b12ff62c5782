use super::{AdjustmentRule, GrowingConditions};
use crate::models::{AdjustmentFactors, Advisory, ClimateZone};

/// Climate zone rule
///
/// Sets the starting factors for the zone:
/// - Tropical: high rainfall leaches nitrogen, so N and both application
///   schedules are cut
/// - Arid: more potassium for drought tolerance, heavier basal and top doses
/// - Continental: slower mineralization, less N and K
/// - Mediterranean: slightly less N
/// - Temperate: baseline rates
pub struct ClimateZoneRule;

impl AdjustmentRule for ClimateZoneRule {
    fn id(&self) -> &'static str {
        "climate_zone"
    }

    fn name(&self) -> &'static str {
        "Climate Zone Adjustment"
    }

    fn adjust(&self, conditions: &GrowingConditions, factors: &mut AdjustmentFactors) {
        match conditions.climate {
            ClimateZone::Tropical => {
                factors.n_factor = 0.85;
                factors.basal_factor = 0.95;
                factors.top_factor = 0.9;
            }
            ClimateZone::Arid => {
                factors.k_factor = 1.20;
                factors.basal_factor = 1.05;
                factors.top_factor = 1.1;
            }
            ClimateZone::Continental => {
                factors.n_factor = 0.9;
                factors.k_factor = 0.95;
            }
            ClimateZone::Mediterranean => {
                factors.n_factor = 0.95;
            }
            ClimateZone::Temperate => {}
        }
    }

    fn advise(
        &self,
        conditions: &GrowingConditions,
        factors: &AdjustmentFactors,
    ) -> Option<Advisory> {
        let advisory = Advisory::new(self.id());

        let advisory = match conditions.climate {
            ClimateZone::Tropical => advisory
                .with_bullet(format!(
                    "Nitrogen reduced by {}% due to high rainfall zone",
                    factors.nitrogen_reduction_percent()
                ))
                .with_bullet("Consider split applications to reduce leaching loss")
                .with_bullet("Increase organic matter application to improve nutrient retention"),
            ClimateZone::Arid => advisory
                .with_bullet(format!(
                    "Potassium increased by {}% for drought tolerance",
                    factors.potassium_increase_percent()
                ))
                .with_bullet("Implement mulching to conserve soil moisture")
                .with_bullet("Consider drip irrigation if not already using"),
            ClimateZone::Continental => advisory
                .with_bullet("Adjusted for slower nutrient mineralization in cool climate")
                .with_bullet("Monitor soil temperature before major fertilizer applications"),
            ClimateZone::Mediterranean => advisory
                .with_bullet("Standard rates with slight adjustments for seasonal variation")
                .with_bullet("Focus on water conservation during dry season"),
            ClimateZone::Temperate => advisory
                .with_bullet("Standard fertilizer rates recommended")
                .with_bullet("Adjust based on soil test results"),
        };

        Some(advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjusted(climate: ClimateZone) -> AdjustmentFactors {
        let mut factors = AdjustmentFactors::default();
        let conditions = GrowingConditions::new(climate, None);
        ClimateZoneRule.adjust(&conditions, &mut factors);
        factors
    }

    #[test]
    fn tropical_cuts_nitrogen_and_schedules() {
        let f = adjusted(ClimateZone::Tropical);
        assert_eq!(f.n_factor, 0.85);
        assert_eq!(f.basal_factor, 0.95);
        assert_eq!(f.top_factor, 0.9);
        assert_eq!(f.k_factor, 1.0);
        assert_eq!(f.p_factor, 1.0);
    }

    #[test]
    fn arid_boosts_potassium() {
        let f = adjusted(ClimateZone::Arid);
        assert_eq!(f.k_factor, 1.20);
        assert_eq!(f.basal_factor, 1.05);
        assert_eq!(f.top_factor, 1.1);
        assert_eq!(f.n_factor, 1.0);
    }

    #[test]
    fn continental_and_mediterranean() {
        let f = adjusted(ClimateZone::Continental);
        assert_eq!(f.n_factor, 0.9);
        assert_eq!(f.k_factor, 0.95);
        assert_eq!(f.basal_factor, 1.0);

        let f = adjusted(ClimateZone::Mediterranean);
        assert_eq!(f.n_factor, 0.95);
        assert_eq!(f.k_factor, 1.0);
    }

    #[test]
    fn temperate_is_unchanged() {
        assert_eq!(adjusted(ClimateZone::Temperate), AdjustmentFactors::default());
    }

    #[test]
    fn every_zone_gets_advice() {
        for zone in ClimateZone::all() {
            let conditions = GrowingConditions::new(*zone, None);
            let advisory = ClimateZoneRule
                .advise(&conditions, &adjusted(*zone))
                .unwrap();
            assert!(advisory.heading.is_none());
            assert!(advisory.bullets.len() >= 2);
        }
    }

    #[test]
    fn tropical_advice_reports_realized_reduction() {
        let conditions = GrowingConditions::new(ClimateZone::Tropical, None);
        let factors = AdjustmentFactors {
            n_factor: 0.85 * 0.85,
            ..adjusted(ClimateZone::Tropical)
        };
        let advisory = ClimateZoneRule.advise(&conditions, &factors).unwrap();
        assert_eq!(
            advisory.bullets[0],
            "Nitrogen reduced by 28% due to high rainfall zone"
        );
    }
}
