mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod reference;
mod ui;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands, CropArgs};
use config::Config;
use datasources::{ConfiguredWeather, NoWeather, WeatherFile, WeatherProvider};
use logic::report::climate_advice;
use logic::rules::GrowingConditions;
use logic::{
    compare_crops, evaluate_crop_with_climate, generate_report, top_dressing_schedule,
    AdjustmentEngine, CropOutcome, ReportContext,
};
use models::{Advisory, ClimateZone, CropSelection, TopDressingApplication, WeatherSnapshot};
use reference::{CropDatabase, ReferenceDataProvider};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// JSON shape printed by `calculate --json`
#[derive(Serialize)]
struct CalculationOutput<'a> {
    irrigation_method: &'a str,
    #[serde(flatten)]
    outcome: &'a CropOutcome,
    top_dressings: Vec<TopDressingApplication>,
    advice: Vec<Advisory>,
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Init runs before loading so a broken config can be replaced
    if let Commands::Init = cli.command {
        Config::setup_interactive(cli.config.as_ref()).context("Setup failed")?;
        return Ok(());
    }

    let config = Config::load(cli.config.as_ref()).context("Configuration error")?;
    let reference = load_reference(&cli, &config)?;
    let weather_source = weather_provider(&cli, &config)?;
    let weather = weather_source.current_weather();
    tracing::debug!(
        source = weather_source.name(),
        available = weather.is_some(),
        "selected weather source"
    );

    match &cli.command {
        Commands::Calculate { crop, json } => {
            run_calculate(&reference, &config, weather.as_ref(), crop, *json)
        }
        Commands::Compare {
            crop_a,
            crop_b,
            area_a,
            area_b,
            yield_input,
            irrigation,
            json,
        } => {
            let fallback_area = config.defaults.area_ha;
            let a = CropSelection::from_raw(
                crop_a,
                area_a.as_deref(),
                yield_input.as_deref(),
                fallback_area,
            )?;
            let b = CropSelection::from_raw(
                crop_b,
                area_b.as_deref(),
                yield_input.as_deref(),
                fallback_area,
            )?;
            let method = irrigation_method(irrigation.as_deref(), &config);
            let cmp = compare_crops(&reference, weather.as_ref(), &a, &b, method)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&cmp)?);
            } else {
                println!("{}", ui::render_comparison(&cmp));
            }
            Ok(())
        }
        Commands::Report {
            crop,
            output,
            print,
        } => {
            let report = build_report(&reference, &config, weather.as_ref(), crop)?;
            let path = output
                .clone()
                .unwrap_or_else(|| config.report.output_path());
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote report");

            if *print {
                println!("{}", report);
            } else {
                println!("Report saved to {}", path.display());
            }
            Ok(())
        }
        Commands::Crops => {
            println!("{}", ui::render_catalog(&reference));
            Ok(())
        }
        Commands::Check => run_check(&reference, &config, weather_source.as_ref()),
        Commands::Init => Ok(()),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// `--crop-db` wins over the configured table, which wins over the built-in one
fn load_reference(cli: &Cli, config: &Config) -> Result<CropDatabase> {
    let path = cli
        .crop_db
        .as_ref()
        .or(config.reference.crop_database.as_ref());
    match path {
        Some(p) => CropDatabase::from_file(p)
            .with_context(|| format!("Failed to load crop database {}", p.display())),
        None => CropDatabase::embedded().context("Built-in crop database is invalid"),
    }
}

fn weather_provider(cli: &Cli, config: &Config) -> Result<Box<dyn WeatherProvider>> {
    if cli.no_weather {
        return Ok(Box::new(NoWeather));
    }
    if let Some(path) = &cli.weather {
        let file = WeatherFile::load(path)
            .with_context(|| format!("Failed to read weather from {}", path.display()))?;
        return Ok(Box::new(file));
    }
    Ok(match &config.weather {
        Some(snapshot) => Box::new(ConfiguredWeather::new(snapshot.clone())),
        None => Box::new(NoWeather),
    })
}

fn irrigation_method<'a>(flag: Option<&'a str>, config: &'a Config) -> &'a str {
    flag.unwrap_or(&config.defaults.irrigation_method)
}

/// Evaluate the crop, applying `--climate` to the fertilizer step. The
/// returned zone is the one the fertilizer plan and advice were built for.
fn evaluate(
    reference: &CropDatabase,
    config: &Config,
    weather: Option<&WeatherSnapshot>,
    args: &CropArgs,
) -> Result<(CropSelection, CropOutcome, ClimateZone)> {
    let selection = CropSelection::from_raw(
        &args.crop,
        args.area.as_deref(),
        args.yield_input.as_deref(),
        config.defaults.area_ha,
    )?;
    let method = irrigation_method(args.irrigation.as_deref(), config);
    let climate_override = args.climate_override()?;
    let outcome =
        evaluate_crop_with_climate(reference, weather, &selection, method, climate_override)?;
    let climate = climate_override.unwrap_or(outcome.metrics.climate);

    Ok((selection, outcome, climate))
}

fn run_calculate(
    reference: &CropDatabase,
    config: &Config,
    weather: Option<&WeatherSnapshot>,
    args: &CropArgs,
    json: bool,
) -> Result<()> {
    let (selection, outcome, climate) = evaluate(reference, config, weather, args)?;
    let method = irrigation_method(args.irrigation.as_deref(), config);
    let profile = reference.crop_profile(&selection.crop)?;

    if json {
        let output = CalculationOutput {
            irrigation_method: method,
            outcome: &outcome,
            top_dressings: top_dressing_schedule(
                profile,
                selection.area,
                outcome.fertilizer.adj.top_factor,
            ),
            advice: climate_advice(climate, weather, &outcome.fertilizer.adj),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}",
            ui::render_summary(&outcome, profile, method, climate, weather)
        );
    }
    Ok(())
}

fn build_report(
    reference: &CropDatabase,
    config: &Config,
    weather: Option<&WeatherSnapshot>,
    args: &CropArgs,
) -> Result<String> {
    let (selection, outcome, climate) = evaluate(reference, config, weather, args)?;
    let tz = config.report.timezone()?;

    let ctx = ReportContext {
        crop: &selection.crop,
        profile: reference.crop_profile(&selection.crop)?,
        area: selection.area,
        irrigation_method: irrigation_method(args.irrigation.as_deref(), config),
        metrics: &outcome.metrics,
        fertilizer: &outcome.fertilizer,
        climate,
        weather,
        generated_at: Utc::now().with_timezone(&tz),
    };
    Ok(generate_report(&ctx))
}

fn run_check(
    reference: &CropDatabase,
    config: &Config,
    weather_source: &dyn WeatherProvider,
) -> Result<()> {
    println!("Configuration: OK");
    println!(
        "  defaults: {} irrigation, {} ha",
        config.defaults.irrigation_method, config.defaults.area_ha
    );
    match reference.irrigation_efficiency(&config.defaults.irrigation_method) {
        Ok(efficiency) => println!("  default irrigation efficiency: {}", efficiency),
        Err(e) => println!("  WARNING: {}", e),
    }

    println!(
        "Reference data: OK ({} crops, {} irrigation methods)",
        reference.crop_ids().len(),
        reference.irrigation_methods().len()
    );

    match weather_source.current_weather() {
        Some(w) => println!(
            "Weather ({}): {} | {}°C, {}% humidity, {} mm/month",
            weather_source.name(),
            w.city,
            w.temp,
            w.humidity,
            w.rainfall
        ),
        None => println!("Weather: not available, default conditions will be used"),
    }

    let engine = AdjustmentEngine::new();
    println!();
    println!("Fertilizer rules:");
    for (id, name) in engine.list_rules() {
        println!("  {:<14} {}", id, name);
    }

    println!();
    println!("Baseline factors by climate zone (N / K / basal / top):");
    for zone in ClimateZone::all() {
        let adj = engine.adjust(&GrowingConditions::new(*zone, None));
        println!(
            "  {:<14} {:.2} / {:.2} / {:.2} / {:.2}",
            zone.as_str(),
            adj.n_factor,
            adj.k_factor,
            adj.basal_factor,
            adj.top_factor
        );
    }

    Ok(())
}
