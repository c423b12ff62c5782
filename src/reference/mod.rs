pub mod database;

pub use database::CropDatabase;

use crate::error::LookupError;
use crate::models::CropProfile;

/// Source of static agronomic reference data
pub trait ReferenceDataProvider {
    /// Look up the profile for a crop identifier
    fn crop_profile(&self, crop: &str) -> Result<&CropProfile, LookupError>;

    /// Look up the efficiency factor (0, 1] for an irrigation method
    fn irrigation_efficiency(&self, method: &str) -> Result<f64, LookupError>;

    /// All known crop identifiers, sorted
    fn crop_ids(&self) -> Vec<&str>;

    /// All known irrigation methods with their efficiency, sorted by name
    fn irrigation_methods(&self) -> Vec<(&str, f64)>;
}
