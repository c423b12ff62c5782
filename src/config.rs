use crate::error::{KisanError, Result};
use crate::models::{WeatherSnapshot, DEFAULT_AREA_HA};
use chrono::FixedOffset;
use dialoguer::{Confirm, Input};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "kisan-pani";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_irrigation_method")]
    pub irrigation_method: String,
    #[serde(default = "default_area_ha")]
    pub area_ha: f64,
}

fn default_irrigation_method() -> String {
    "drip".into()
}

fn default_area_ha() -> f64 {
    DEFAULT_AREA_HA
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            irrigation_method: default_irrigation_method(),
            area_ha: default_area_ha(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReferenceConfig {
    /// YAML crop table replacing the built-in one
    #[serde(default)]
    pub crop_database: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_report_filename")]
    pub filename: String,
    /// Offset of the report timestamp from UTC; India Standard Time by default
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

fn default_report_filename() -> String {
    "WaterFootprint-Report.txt".into()
}

fn default_utc_offset_minutes() -> i32 {
    330
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            filename: default_report_filename(),
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

impl ReportConfig {
    pub fn timezone(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            KisanError::Config(format!(
                "utc_offset_minutes {} is out of range",
                self.utc_offset_minutes
            ))
        })
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(&self.filename),
            None => PathBuf::from(&self.filename),
        }
    }
}

impl Config {
    /// Load the config file, or defaults when none exists.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(KisanError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.clone()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::info!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| KisanError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Parse YAML after substituting `${VAR}` environment references
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| KisanError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.defaults.irrigation_method.trim().is_empty() {
            return Err(KisanError::Config(
                "defaults.irrigation_method cannot be empty".into(),
            ));
        }
        if !(self.defaults.area_ha.is_finite() && self.defaults.area_ha > 0.0) {
            return Err(KisanError::Config(format!(
                "defaults.area_ha must be positive, got {}",
                self.defaults.area_ha
            )));
        }
        if let Some(weather) = &self.weather {
            weather
                .validate()
                .map_err(|e| KisanError::Config(format!("weather: {}", e)))?;
        }
        self.report.timezone()?;
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/kisan-pani/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KisanError::Config("Cannot determine config directory".into()))?
            .join(APP_DIR);
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive(config_override: Option<&PathBuf>) -> Result<(Self, PathBuf)> {
        let input_err = |e: dialoguer::Error| KisanError::Config(format!("Input error: {}", e));

        println!();
        println!("Let's set up Kisan Pani!");
        println!();

        println!("Defaults");
        let irrigation_method: String = Input::new()
            .with_prompt("  Irrigation method (flood, furrow, sprinkler, drip)")
            .default(default_irrigation_method())
            .interact_text()
            .map_err(input_err)?;

        let area_ha: f64 = Input::new()
            .with_prompt("  Farm area (hectares)")
            .default(DEFAULT_AREA_HA)
            .interact_text()
            .map_err(input_err)?;

        println!();

        // --- Weather (optional) ---
        let with_weather = Confirm::new()
            .with_prompt("Enter current weather for your location?")
            .default(false)
            .interact()
            .map_err(input_err)?;

        let weather = if with_weather {
            let city: String = Input::new()
                .with_prompt("  City")
                .interact_text()
                .map_err(input_err)?;
            let temp: f64 = Input::new()
                .with_prompt("  Temperature (°C)")
                .default(25.0)
                .interact_text()
                .map_err(input_err)?;
            let humidity: f64 = Input::new()
                .with_prompt("  Humidity (%)")
                .default(60.0)
                .interact_text()
                .map_err(input_err)?;
            let wind_speed: f64 = Input::new()
                .with_prompt("  Wind speed (km/h)")
                .default(10.0)
                .interact_text()
                .map_err(input_err)?;
            let lat: f64 = Input::new()
                .with_prompt("  Latitude")
                .default(20.0)
                .interact_text()
                .map_err(input_err)?;
            let rainfall: f64 = Input::new()
                .with_prompt("  Rainfall this month (mm)")
                .default(50.0)
                .interact_text()
                .map_err(input_err)?;

            Some(WeatherSnapshot {
                temp,
                humidity,
                wind_speed,
                lat,
                rainfall,
                city,
            })
        } else {
            None
        };

        println!();

        let config = Config {
            defaults: DefaultsConfig {
                irrigation_method,
                area_ha,
            },
            weather,
            ..Config::default()
        };
        config.validate()?;

        let config_path = match config_override {
            Some(p) => p.clone(),
            None => Self::default_config_path()?,
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| KisanError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# Kisan Pani Configuration\n# Generated by `kisan-pani init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| KisanError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            match std::env::var(var_name) {
                Ok(value) => result = result.replace(placeholder, &value),
                Err(_) => tracing::warn!(var = var_name, "config references unset variable"),
            }
        }

        Ok(result)
    }
}
