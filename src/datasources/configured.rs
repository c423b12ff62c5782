use super::WeatherProvider;
use crate::models::WeatherSnapshot;

/// Weather snapshot written into the config file
pub struct ConfiguredWeather {
    snapshot: WeatherSnapshot,
}

impl ConfiguredWeather {
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self { snapshot }
    }
}

impl WeatherProvider for ConfiguredWeather {
    fn name(&self) -> &'static str {
        "config"
    }

    fn current_weather(&self) -> Option<WeatherSnapshot> {
        Some(self.snapshot.clone())
    }
}
