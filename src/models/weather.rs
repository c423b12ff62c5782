use crate::error::{KisanError, Result};
use serde::{Deserialize, Serialize};

/// Temperature used when no weather snapshot is available (°C)
pub const DEFAULT_TEMP_C: f64 = 25.0;
/// Relative humidity used when no weather snapshot is available (%)
pub const DEFAULT_HUMIDITY: f64 = 60.0;
/// Wind speed used when no weather snapshot is available (km/h)
pub const DEFAULT_WIND_SPEED_KMH: f64 = 10.0;
/// Latitude used when no weather snapshot is available (degrees)
pub const DEFAULT_LATITUDE: f64 = 20.0;
/// Monthly rainfall used when no weather snapshot is available (mm/month)
pub const DEFAULT_RAINFALL_MM: f64 = 50.0;

/// Current conditions at the farm location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// °C
    pub temp: f64,
    /// Relative humidity, %
    pub humidity: f64,
    /// km/h
    pub wind_speed: f64,
    /// Degrees north/south
    pub lat: f64,
    /// mm/month
    pub rainfall: f64,
    #[serde(default)]
    pub city: String,
}

impl WeatherSnapshot {
    /// Reject readings no weather station can produce
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(KisanError::InvalidInput(format!(
                "humidity {}% is outside 0-100",
                self.humidity
            )));
        }
        if !(self.rainfall >= 0.0 && self.wind_speed >= 0.0) {
            return Err(KisanError::InvalidInput(
                "rainfall and wind speed cannot be negative".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateZone {
    Tropical,
    Arid,
    Continental,
    Mediterranean,
    #[default]
    Temperate,
}

impl ClimateZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateZone::Tropical => "tropical",
            ClimateZone::Arid => "arid",
            ClimateZone::Continental => "continental",
            ClimateZone::Mediterranean => "mediterranean",
            ClimateZone::Temperate => "temperate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tropical" => Some(ClimateZone::Tropical),
            "arid" | "dry" => Some(ClimateZone::Arid),
            "continental" => Some(ClimateZone::Continental),
            "mediterranean" => Some(ClimateZone::Mediterranean),
            "temperate" => Some(ClimateZone::Temperate),
            _ => None,
        }
    }

    pub fn all() -> &'static [ClimateZone] {
        &[
            ClimateZone::Tropical,
            ClimateZone::Arid,
            ClimateZone::Continental,
            ClimateZone::Mediterranean,
            ClimateZone::Temperate,
        ]
    }
}

impl std::fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
