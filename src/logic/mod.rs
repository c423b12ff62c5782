pub mod climate;
pub mod compare;
pub mod fertilizer;
pub mod metrics;
pub mod report;
pub mod rules;

pub use compare::{compare_crops, evaluate_crop_with_climate, CropComparison, CropOutcome};
pub use fertilizer::{compute_fertilizer_data, top_dressing_schedule};
pub use report::{generate_report, ReportContext};
pub use rules::AdjustmentEngine;
