use super::heading;
use crate::logic::report::{climate_advice, format_grouped, render_advice};
use crate::logic::{top_dressing_schedule, CropOutcome};
use crate::models::{ClimateZone, CropProfile, WeatherSnapshot};
use crate::reference::ReferenceDataProvider;

/// Terminal summary for `calculate`: footprint, fertilizer plan and advice.
///
/// `climate` is the zone the fertilizer plan was built for, which differs
/// from `metrics.climate` when the user overrode it.
pub fn render_summary(
    outcome: &CropOutcome,
    profile: &CropProfile,
    irrigation_method: &str,
    climate: ClimateZone,
    weather: Option<&WeatherSnapshot>,
) -> String {
    let m = &outcome.metrics;
    let f = &outcome.fertilizer;
    let mut lines = Vec::new();

    let conditions = match weather {
        Some(w) => format!(
            "{} | {}°C, {}% humidity, {} mm/month rain",
            w.city, w.temp, w.humidity, w.rainfall
        ),
        None => "default conditions (no weather data)".to_string(),
    };
    lines.push(format!(
        "{} on {} ha, {} irrigation | {} climate | {}",
        m.crop, m.area, irrigation_method, climate, conditions
    ));
    lines.push(String::new());

    heading(&mut lines, "Water footprint");
    lines.push(format!("  Blue   {:>8} m³/ton", m.blue));
    lines.push(format!("  Green  {:>8} m³/ton", m.green));
    lines.push(format!("  Grey   {:>8} m³/ton", m.grey));
    lines.push(format!(
        "  Total  {:>8} m³/ton ({:.0}% irrigation)",
        m.total_per_ton,
        m.blue_share() * 100.0
    ));
    lines.push(format!(
        "  {} tons at {} t/ha use {} m³ of water",
        m.total_production,
        m.actual_yield,
        format_grouped(m.total_consumption_value)
    ));
    lines.push(format!("  ET0 {:.2} mm/day", m.et0));
    lines.push(String::new());

    heading(&mut lines, "Fertilizer");
    lines.push(format!(
        "  N {} / P {} / K {} kg/ha",
        f.n_per_ha, f.p_per_ha, f.k_per_ha
    ));
    lines.push(format!(
        "  Basal: urea {} kg, DAP {} kg, MOP {} kg",
        f.basal_urea, f.basal_dap, f.basal_mop
    ));
    for application in top_dressing_schedule(profile, m.area, f.adj.top_factor) {
        lines.push(format!(
            "  Day {} ({}): urea {} kg",
            application.days, application.stage, application.urea
        ));
    }
    lines.push(String::new());

    heading(&mut lines, "Advice");
    lines.push(render_advice(&climate_advice(climate, weather, &f.adj)));

    lines.join("\n")
}

/// Crop table and irrigation efficiencies for `crops`
pub fn render_catalog(reference: &dyn ReferenceDataProvider) -> String {
    let mut lines = Vec::new();

    heading(&mut lines, "Crops");
    for id in reference.crop_ids() {
        // ids come from the provider itself
        if let Ok(profile) = reference.crop_profile(id) {
            lines.push(format!(
                "  {:<12} {:>4} days  Kc {:<5} {} t/ha",
                id, profile.growing_days, profile.kc, profile.base_yield
            ));
        }
    }
    lines.push(String::new());

    heading(&mut lines, "Irrigation methods");
    for (method, efficiency) in reference.irrigation_methods() {
        lines.push(format!("  {:<12} {:.0}% efficient", method, efficiency * 100.0));
    }

    lines.join("\n")
}
