use super::ReferenceDataProvider;
use crate::error::{KisanError, LookupError, Result};
use crate::models::{CropProfile, TopDressing};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const EMBEDDED_TABLE: &str = include_str!("../../data/crops.yaml");

/// Crop profiles and irrigation efficiencies, keyed by identifier.
///
/// Immutable once loaded; calculators borrow it.
#[derive(Debug, Clone, Deserialize)]
pub struct CropDatabase {
    crops: BTreeMap<String, CropProfile>,
    irrigation_efficiency: BTreeMap<String, f64>,
}

impl CropDatabase {
    /// The table shipped with the binary
    pub fn embedded() -> Result<Self> {
        Self::from_yaml_str(EMBEDDED_TABLE)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KisanError::ReferenceData(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let db = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            crops = db.crops.len(),
            "loaded crop database"
        );
        Ok(db)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let db: CropDatabase = serde_yaml::from_str(content)?;
        db.validate()?;
        Ok(db)
    }

    fn validate(&self) -> Result<()> {
        if self.crops.is_empty() {
            return Err(KisanError::ReferenceData("no crops defined".into()));
        }
        if self.irrigation_efficiency.is_empty() {
            return Err(KisanError::ReferenceData(
                "no irrigation methods defined".into(),
            ));
        }

        for (id, profile) in &self.crops {
            validate_profile(id, profile)?;
        }

        for (method, efficiency) in &self.irrigation_efficiency {
            if !(efficiency.is_finite() && *efficiency > 0.0 && *efficiency <= 1.0) {
                return Err(KisanError::ReferenceData(format!(
                    "irrigation method '{}': efficiency {} must be in (0, 1]",
                    method, efficiency
                )));
            }
        }

        Ok(())
    }
}

fn validate_profile(id: &str, profile: &CropProfile) -> Result<()> {
    let invalid = |field: &str, rule: &str| {
        KisanError::ReferenceData(format!("crop '{}': {} must be {}", id, field, rule))
    };
    let positive = |v: f64| v.is_finite() && v > 0.0;
    let non_negative = |v: f64| v.is_finite() && v >= 0.0;

    if profile.growing_days == 0 {
        return Err(invalid("growing_days", "greater than 0"));
    }
    if !positive(profile.kc) {
        return Err(invalid("kc", "greater than 0"));
    }
    if !positive(profile.base_yield) {
        return Err(invalid("base_yield", "greater than 0"));
    }
    if !non_negative(profile.green) {
        return Err(invalid("green", "non-negative"));
    }
    if !non_negative(profile.grey) {
        return Err(invalid("grey", "non-negative"));
    }

    let fert = &profile.fertilizer;
    for (field, value) in [
        ("fertilizer.n", fert.n),
        ("fertilizer.p", fert.p),
        ("fertilizer.k", fert.k),
        ("fertilizer.basal.urea", fert.basal.urea),
        ("fertilizer.basal.dap", fert.basal.dap),
        ("fertilizer.basal.mop", fert.basal.mop),
    ] {
        if !non_negative(value) {
            return Err(invalid(field, "non-negative"));
        }
    }

    let check_top = |field: &str, top: &TopDressing| {
        if !non_negative(top.urea) {
            return Err(invalid(field, "non-negative urea"));
        }
        if top.days == 0 {
            return Err(invalid(field, "scheduled after day 0"));
        }
        Ok(())
    };
    if let Some(top) = &fert.top1 {
        check_top("fertilizer.top1", top)?;
    }
    if let Some(top) = &fert.top2 {
        check_top("fertilizer.top2", top)?;
    }

    let mut previous_day = 0;
    for top in fert.top_dressings() {
        if top.days <= previous_day || top.days > profile.growing_days {
            return Err(invalid(
                "top dressing days",
                "increasing and within growing_days",
            ));
        }
        previous_day = top.days;
    }

    Ok(())
}

impl ReferenceDataProvider for CropDatabase {
    fn crop_profile(&self, crop: &str) -> std::result::Result<&CropProfile, LookupError> {
        self.crops
            .get(crop)
            .ok_or_else(|| LookupError::UnknownCrop(crop.to_string()))
    }

    fn irrigation_efficiency(&self, method: &str) -> std::result::Result<f64, LookupError> {
        self.irrigation_efficiency
            .get(method)
            .copied()
            .ok_or_else(|| LookupError::UnknownIrrigationMethod(method.to_string()))
    }

    fn crop_ids(&self) -> Vec<&str> {
        self.crops.keys().map(String::as_str).collect()
    }

    fn irrigation_methods(&self) -> Vec<(&str, f64)> {
        self.irrigation_efficiency
            .iter()
            .map(|(m, e)| (m.as_str(), *e))
            .collect()
    }
}

/// Small reference table shared by calculator tests
#[cfg(test)]
pub(crate) fn fixture() -> CropDatabase {
    use crate::models::{BasalDose, FertilizerProfile};

    let mut crops = BTreeMap::new();
    crops.insert(
        "testcrop".to_string(),
        CropProfile {
            growing_days: 120,
            kc: 1.15,
            base_yield: 5.0,
            green: 300.0,
            grey: 200.0,
            fertilizer: FertilizerProfile {
                n: 120.0,
                p: 60.0,
                k: 40.0,
                basal: BasalDose {
                    urea: 87.0,
                    dap: 130.0,
                    mop: 67.0,
                },
                top1: Some(TopDressing {
                    urea: 65.0,
                    days: 21,
                    stage: "Tillering".to_string(),
                }),
                top2: Some(TopDressing {
                    urea: 65.0,
                    days: 45,
                    stage: "Panicle initiation".to_string(),
                }),
                organic: "Farmyard manure 10 t/ha".to_string(),
                micronutrients: "Zinc sulphate 25 kg/ha".to_string(),
            },
        },
    );
    crops.insert(
        "pulse".to_string(),
        CropProfile {
            growing_days: 100,
            kc: 0.95,
            base_yield: 1.5,
            green: 2972.4,
            grey: 133.5,
            fertilizer: FertilizerProfile {
                n: 20.0,
                p: 50.0,
                k: 20.0,
                basal: BasalDose {
                    urea: 4.0,
                    dap: 109.0,
                    mop: 33.0,
                },
                top1: None,
                top2: None,
                organic: "Rhizobium seed inoculation".to_string(),
                micronutrients: "Sulphur 20 kg/ha".to_string(),
            },
        },
    );

    let mut efficiency = BTreeMap::new();
    efficiency.insert("furrow".to_string(), 0.65);
    efficiency.insert("drip".to_string(), 0.90);

    CropDatabase {
        crops,
        irrigation_efficiency: efficiency,
    }
}
