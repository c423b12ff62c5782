use serde::{Deserialize, Serialize};

/// Basal (at sowing) fertilizer doses, kg per hectare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasalDose {
    pub urea: f64,
    pub dap: f64,
    pub mop: f64,
}

/// A scheduled top-dressing of urea during crop growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopDressing {
    /// kg per hectare
    pub urea: f64,
    /// Days after sowing
    pub days: u32,
    pub stage: String,
}

/// Baseline fertilizer recommendation for a crop, before any climate adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerProfile {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub basal: BasalDose,
    #[serde(default)]
    pub top1: Option<TopDressing>,
    #[serde(default)]
    pub top2: Option<TopDressing>,
    #[serde(default)]
    pub organic: String,
    #[serde(default)]
    pub micronutrients: String,
}

impl FertilizerProfile {
    /// Present top-dressing stages in application order
    pub fn top_dressings(&self) -> impl Iterator<Item = &TopDressing> {
        self.top1.iter().chain(self.top2.iter())
    }
}

/// Static agronomic reference data for one crop.
///
/// `green` and `grey` are water footprint intensities in m³/ton; `base_yield`
/// is tons/hectare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub growing_days: u32,
    pub kc: f64,
    pub base_yield: f64,
    pub green: f64,
    pub grey: f64,
    pub fertilizer: FertilizerProfile,
}
