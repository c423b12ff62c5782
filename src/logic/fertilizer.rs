use super::rules::{AdjustmentEngine, GrowingConditions};
use crate::error::LookupError;
use crate::models::{
    ClimateZone, CropProfile, FertilizerResult, TopDressingApplication, WeatherSnapshot,
};
use crate::reference::ReferenceDataProvider;

/// Compute climate- and weather-adjusted fertilizer doses for one crop.
///
/// NPK are kg/ha. Basal urea and MOP are scaled by the basal factor and the
/// area; DAP is scaled by area only. Rainfall and temperature rules only
/// fire when `weather` is present.
pub fn compute_fertilizer_data(
    reference: &dyn ReferenceDataProvider,
    weather: Option<&WeatherSnapshot>,
    crop: &str,
    area: f64,
    climate: ClimateZone,
) -> Result<FertilizerResult, LookupError> {
    let baseline = &reference.crop_profile(crop)?.fertilizer;

    let conditions = GrowingConditions::new(climate, weather);
    let adj = AdjustmentEngine::new().adjust(&conditions);

    let result = FertilizerResult {
        n_per_ha: (baseline.n * adj.n_factor).round(),
        p_per_ha: (baseline.p * adj.p_factor).round(),
        k_per_ha: (baseline.k * adj.k_factor).round(),
        basal_urea: (baseline.basal.urea * adj.basal_factor * area).round(),
        basal_dap: (baseline.basal.dap * area).round(),
        basal_mop: (baseline.basal.mop * adj.basal_factor * area).round(),
        adj,
    };

    tracing::debug!(
        crop,
        %climate,
        n = result.n_per_ha,
        p = result.p_per_ha,
        k = result.k_per_ha,
        "computed fertilizer recommendation"
    );

    Ok(result)
}

/// Urea top dressings scaled by `top_factor` and area, for the stages the
/// crop actually has.
pub fn top_dressing_schedule(
    profile: &CropProfile,
    area: f64,
    top_factor: f64,
) -> Vec<TopDressingApplication> {
    let fert = &profile.fertilizer;
    [("First", fert.top1.as_ref()), ("Second", fert.top2.as_ref())]
        .into_iter()
        .filter_map(|(label, top)| {
            top.map(|top| TopDressingApplication {
                label: label.to_string(),
                days: top.days,
                stage: top.stage.clone(),
                urea: (top.urea * top_factor * area).round(),
            })
        })
        .collect()
}
