use crate::error::{KisanError, Result};
use serde::{Deserialize, Serialize};

/// Area assumed when the user leaves it blank or enters something unusable (hectares)
pub const DEFAULT_AREA_HA: f64 = 1.0;

/// A validated crop choice coming from the user-facing controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSelection {
    pub crop: String,
    /// Hectares, always positive
    pub area: f64,
    /// tons/hectare, `None` means use the crop's base yield
    pub yield_input: Option<f64>,
}

impl CropSelection {
    /// Build a selection from raw text inputs.
    ///
    /// The crop identifier must be non-empty. Area falls back to
    /// `fallback_area` (itself falling back to 1 ha) and yield to `None`
    /// whenever they are not positive numbers.
    pub fn from_raw(
        crop: &str,
        area: Option<&str>,
        yield_input: Option<&str>,
        fallback_area: f64,
    ) -> Result<Self> {
        let crop = crop.trim();
        if crop.is_empty() {
            return Err(KisanError::InvalidInput("a crop must be selected".into()));
        }

        let fallback_area = if fallback_area.is_finite() && fallback_area > 0.0 {
            fallback_area
        } else {
            DEFAULT_AREA_HA
        };

        Ok(Self {
            crop: crop.to_string(),
            area: parse_positive(area).unwrap_or(fallback_area),
            yield_input: parse_positive(yield_input),
        })
    }
}

/// Parse a positive, finite number; anything else is treated as absent.
pub fn parse_positive(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}
