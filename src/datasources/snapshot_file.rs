use super::WeatherProvider;
use crate::error::Result;
use crate::models::WeatherSnapshot;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

// On-disk record: a snapshot plus an optional temperature unit
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRecord {
    #[serde(flatten)]
    snapshot: WeatherSnapshot,
    #[serde(default)]
    temperature_unit: TemperatureUnit,
}

/// Weather snapshot exported to a JSON file by an external weather fetcher.
///
/// The file is parsed once at load time so a malformed file is reported
/// before any calculation runs.
pub struct WeatherFile {
    snapshot: WeatherSnapshot,
}

impl WeatherFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            city = %snapshot.city,
            "loaded weather snapshot"
        );
        Ok(Self { snapshot })
    }

    pub fn parse(content: &str) -> Result<WeatherSnapshot> {
        let record: SnapshotRecord = serde_json::from_str(content)?;
        let mut snapshot = record.snapshot;

        if record.temperature_unit == TemperatureUnit::Fahrenheit {
            snapshot.temp = fahrenheit_to_celsius(snapshot.temp);
        }

        snapshot.validate()?;

        Ok(snapshot)
    }
}

impl WeatherProvider for WeatherFile {
    fn name(&self) -> &'static str {
        "file"
    }

    fn current_weather(&self) -> Option<WeatherSnapshot> {
        Some(self.snapshot.clone())
    }
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KisanError;

    #[test]
    fn fahrenheit_to_celsius_known_values() {
        assert!((fahrenheit_to_celsius(32.0) - 0.0).abs() < 0.001);
        assert!((fahrenheit_to_celsius(212.0) - 100.0).abs() < 0.001);
        assert!((fahrenheit_to_celsius(-40.0) - (-40.0)).abs() < 0.001);
    }

    #[test]
    fn parses_celsius_snapshot() {
        let json = r#"{"temp":35,"humidity":25,"windSpeed":14,"lat":26.9,"rainfall":15,"city":"Jaipur"}"#;
        let snapshot = WeatherFile::parse(json).unwrap();
        assert_eq!(snapshot.city, "Jaipur");
        assert!((snapshot.temp - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn converts_fahrenheit_snapshot() {
        let json = r#"{"temp":95,"humidity":25,"windSpeed":14,"lat":26.9,"rainfall":15,"temperatureUnit":"fahrenheit"}"#;
        let snapshot = WeatherFile::parse(json).unwrap();
        assert!((snapshot.temp - 35.0).abs() < 0.001);
    }

    #[test]
    fn rejects_impossible_humidity() {
        let json = r#"{"temp":30,"humidity":140,"windSpeed":5,"lat":20,"rainfall":50}"#;
        assert!(matches!(
            WeatherFile::parse(json),
            Err(KisanError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_negative_rainfall() {
        let json = r#"{"temp":30,"humidity":40,"windSpeed":5,"lat":20,"rainfall":-3}"#;
        assert!(WeatherFile::parse(json).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            WeatherFile::parse("{not json"),
            Err(KisanError::Json(_))
        ));
    }
}
