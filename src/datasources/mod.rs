pub mod configured;
pub mod snapshot_file;

pub use configured::ConfiguredWeather;
pub use snapshot_file::WeatherFile;

use crate::models::WeatherSnapshot;

/// Supplier of the current weather at the farm location.
///
/// Returning `None` is a normal state: calculators fall back to default
/// conditions.
pub trait WeatherProvider {
    fn name(&self) -> &'static str;

    fn current_weather(&self) -> Option<WeatherSnapshot>;
}

/// Used when weather is disabled or nothing is configured
pub struct NoWeather;

impl WeatherProvider for NoWeather {
    fn name(&self) -> &'static str {
        "none"
    }

    fn current_weather(&self) -> Option<WeatherSnapshot> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_weather_is_absent() {
        assert!(NoWeather.current_weather().is_none());
        assert_eq!(NoWeather.name(), "none");
    }
}
