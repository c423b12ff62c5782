use super::fertilizer::compute_fertilizer_data;
use super::metrics::compute_metrics;
use crate::error::LookupError;
use crate::models::{ClimateZone, CropSelection, FertilizerResult, Metrics, WeatherSnapshot};
use crate::reference::ReferenceDataProvider;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropOutcome {
    pub metrics: Metrics,
    pub fertilizer: FertilizerResult,
}

/// Two crops evaluated under the same weather and irrigation method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropComparison {
    pub irrigation_method: String,
    pub a: CropOutcome,
    pub b: CropOutcome,
}

impl CropComparison {
    /// The crop with the smaller per-ton footprint and how many m³/ton it saves
    pub fn lower_footprint(&self) -> (&str, f64) {
        let a = &self.a.metrics;
        let b = &self.b.metrics;
        if a.total_per_ton <= b.total_per_ton {
            (&a.crop, b.total_per_ton - a.total_per_ton)
        } else {
            (&b.crop, a.total_per_ton - b.total_per_ton)
        }
    }
}

/// Evaluate one crop: water footprint first, then fertilizer using the
/// climate the footprint calculation derived.
pub fn evaluate_crop(
    reference: &dyn ReferenceDataProvider,
    weather: Option<&WeatherSnapshot>,
    selection: &CropSelection,
    irrigation_method: &str,
) -> Result<CropOutcome, LookupError> {
    evaluate_crop_with_climate(reference, weather, selection, irrigation_method, None)
}

/// Like [`evaluate_crop`], but `climate` replaces the derived zone for the
/// fertilizer step. `metrics.climate` always keeps the derived zone.
pub fn evaluate_crop_with_climate(
    reference: &dyn ReferenceDataProvider,
    weather: Option<&WeatherSnapshot>,
    selection: &CropSelection,
    irrigation_method: &str,
    climate: Option<ClimateZone>,
) -> Result<CropOutcome, LookupError> {
    let metrics = compute_metrics(
        reference,
        weather,
        &selection.crop,
        selection.area,
        selection.yield_input,
        irrigation_method,
    )?;
    let fertilizer_climate = climate.unwrap_or(metrics.climate);
    if fertilizer_climate != metrics.climate {
        tracing::info!(
            derived = %metrics.climate,
            zone = %fertilizer_climate,
            "overriding climate zone"
        );
    }
    let fertilizer = compute_fertilizer_data(
        reference,
        weather,
        &selection.crop,
        selection.area,
        fertilizer_climate,
    )?;
    Ok(CropOutcome {
        metrics,
        fertilizer,
    })
}

pub fn compare_crops(
    reference: &dyn ReferenceDataProvider,
    weather: Option<&WeatherSnapshot>,
    a: &CropSelection,
    b: &CropSelection,
    irrigation_method: &str,
) -> Result<CropComparison, LookupError> {
    Ok(CropComparison {
        irrigation_method: irrigation_method.to_string(),
        a: evaluate_crop(reference, weather, a, irrigation_method)?,
        b: evaluate_crop(reference, weather, b, irrigation_method)?,
    })
}
