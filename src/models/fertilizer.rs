use serde::{Deserialize, Serialize};

/// Multipliers applied to the baseline fertilizer profile.
///
/// Every factor starts at 1.0. Adjustment rules run in a fixed order and
/// multiply onto whatever earlier rules left behind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentFactors {
    pub n_factor: f64,
    pub p_factor: f64,
    pub k_factor: f64,
    pub basal_factor: f64,
    pub top_factor: f64,
}

impl AdjustmentFactors {
    /// Percentage change of nitrogen versus baseline, positive when reduced
    pub fn nitrogen_reduction_percent(&self) -> f64 {
        ((1.0 - self.n_factor) * 100.0).round()
    }

    /// Percentage change of potassium versus baseline, positive when increased
    pub fn potassium_increase_percent(&self) -> f64 {
        ((self.k_factor - 1.0) * 100.0).round()
    }
}

impl Default for AdjustmentFactors {
    fn default() -> Self {
        Self {
            n_factor: 1.0,
            p_factor: 1.0,
            k_factor: 1.0,
            basal_factor: 1.0,
            top_factor: 1.0,
        }
    }
}

/// Climate-adjusted fertilizer recommendation.
///
/// Per-hectare NPK in kg/ha; basal doses are kg for the whole area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerResult {
    pub n_per_ha: f64,
    pub p_per_ha: f64,
    pub k_per_ha: f64,
    pub basal_urea: f64,
    pub basal_dap: f64,
    pub basal_mop: f64,
    pub adj: AdjustmentFactors,
}

/// One scheduled urea top dressing, scaled to the whole area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopDressingApplication {
    pub label: String,
    pub days: u32,
    pub stage: String,
    /// kg for the whole area
    pub urea: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factors_are_neutral() {
        let adj = AdjustmentFactors::default();
        assert_eq!(adj.n_factor, 1.0);
        assert_eq!(adj.p_factor, 1.0);
        assert_eq!(adj.k_factor, 1.0);
        assert_eq!(adj.basal_factor, 1.0);
        assert_eq!(adj.top_factor, 1.0);
        assert_eq!(adj.nitrogen_reduction_percent(), 0.0);
        assert_eq!(adj.potassium_increase_percent(), 0.0);
    }

    #[test]
    fn percent_changes_round_to_whole_numbers() {
        let adj = AdjustmentFactors {
            n_factor: 0.85 * 0.85,
            k_factor: 1.2 * 1.05,
            ..AdjustmentFactors::default()
        };
        // 27.75% and 26%
        assert_eq!(adj.nitrogen_reduction_percent(), 28.0);
        assert_eq!(adj.potassium_increase_percent(), 26.0);
    }
}
