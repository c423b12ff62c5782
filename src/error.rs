use thiserror::Error;

/// Raised when a crop or irrigation method is not present in the reference data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown crop: {0}")]
    UnknownCrop(String),

    #[error("Unknown irrigation method: {0}")]
    UnknownIrrigationMethod(String),
}

#[derive(Error, Debug)]
pub enum KisanError {
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Reference data error: {0}")]
    ReferenceData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, KisanError>;
