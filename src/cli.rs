use crate::error::{KisanError, Result};
use crate::models::ClimateZone;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kisan-pani",
    version,
    about = "Crop water footprint and fertilizer calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Crop reference table (YAML) replacing the built-in one
    #[arg(long, global = true)]
    pub crop_db: Option<PathBuf>,

    /// Current weather as a JSON snapshot file
    #[arg(short, long, global = true, conflicts_with = "no_weather")]
    pub weather: Option<PathBuf>,

    /// Ignore configured weather and use default conditions
    #[arg(long, global = true)]
    pub no_weather: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Water footprint and fertilizer plan for one crop
    Calculate {
        #[command(flatten)]
        crop: CropArgs,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two crops under the same conditions
    Compare {
        crop_a: String,
        crop_b: String,

        /// Area of the first crop (hectares)
        #[arg(long)]
        area_a: Option<String>,

        /// Area of the second crop (hectares)
        #[arg(long)]
        area_b: Option<String>,

        /// Expected yield for both crops (tons/hectare)
        #[arg(long = "yield")]
        yield_input: Option<String>,

        /// Irrigation method
        #[arg(short, long)]
        irrigation: Option<String>,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the detailed text report
    Report {
        #[command(flatten)]
        crop: CropArgs,

        /// Report file; defaults to the configured report path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the report to stdout
        #[arg(long)]
        print: bool,
    },
    /// List known crops and irrigation methods
    Crops,
    /// Re-run interactive setup
    Init,
    /// Validate config, reference data and weather source
    Check,
}

/// Crop, area and yield as typed by the user. Area and yield stay raw
/// strings so unparsable values fall back instead of aborting.
#[derive(Args)]
pub struct CropArgs {
    pub crop: String,

    /// Farm area (hectares)
    #[arg(short, long)]
    pub area: Option<String>,

    /// Expected yield (tons/hectare); the crop's typical yield when omitted
    #[arg(short, long = "yield")]
    pub yield_input: Option<String>,

    /// Irrigation method (flood, furrow, sprinkler, drip)
    #[arg(short, long)]
    pub irrigation: Option<String>,

    /// Climate zone for fertilizer adjustment instead of the one derived from weather
    #[arg(long)]
    pub climate: Option<String>,
}

impl CropArgs {
    pub fn climate_override(&self) -> Result<Option<ClimateZone>> {
        let Some(raw) = self.climate.as_deref() else {
            return Ok(None);
        };
        ClimateZone::from_str(raw).map(Some).ok_or_else(|| {
            let known: Vec<&str> = ClimateZone::all().iter().map(|z| z.as_str()).collect();
            KisanError::InvalidInput(format!(
                "unknown climate zone '{}' (expected one of: {})",
                raw,
                known.join(", ")
            ))
        })
    }
}
