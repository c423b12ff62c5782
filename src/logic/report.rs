use super::fertilizer::top_dressing_schedule;
use super::rules::{AdjustmentEngine, GrowingConditions};
use crate::models::{
    AdjustmentFactors, Advisory, ClimateZone, CropProfile, FertilizerResult, Metrics,
    TopDressingApplication, WeatherSnapshot,
};
use chrono::{DateTime, FixedOffset};

const RULE: &str = "=======================================================";
const TITLE: &str = "           किसान पानी कैलकुलेटर - DETAILED REPORT";

/// Everything the report needs. The timestamp is passed in so the same
/// inputs always render the same text.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub crop: &'a str,
    pub profile: &'a CropProfile,
    pub area: f64,
    pub irrigation_method: &'a str,
    pub metrics: &'a Metrics,
    pub fertilizer: &'a FertilizerResult,
    pub climate: ClimateZone,
    pub weather: Option<&'a WeatherSnapshot>,
    pub generated_at: DateTime<FixedOffset>,
}

/// Render the detailed plain-text report
pub fn generate_report(ctx: &ReportContext<'_>) -> String {
    let metrics = ctx.metrics;
    let fert = ctx.fertilizer;
    let mut lines: Vec<String> = Vec::new();

    lines.push(RULE.into());
    lines.push(TITLE.into());
    lines.push(RULE.into());
    lines.push(format!(
        "Generated on: {}",
        ctx.generated_at.format("%-d %B %Y at %I:%M %P")
    ));
    lines.push(String::new());

    match ctx.weather {
        Some(w) => {
            lines.push(format!("Location: {}", w.city));
            lines.push(format!("Temperature: {}°C", w.temp));
            lines.push(format!("Humidity: {}%", w.humidity));
            lines.push(format!("Rainfall: {} mm/month", w.rainfall));
            lines.push(format!("Wind Speed: {} km/h", w.wind_speed));
        }
        None => lines.push("Weather data not available".into()),
    }
    lines.push(format!("Climate Zone: {}", ctx.climate));
    lines.push(String::new());

    section(&mut lines, "CROP INFORMATION", "---------------");
    lines.push(format!("Crop: {}", ctx.crop));
    lines.push(format!("Area: {} hectares", ctx.area));
    lines.push(format!(
        "Expected Yield: {} tons/hectare",
        metrics.actual_yield
    ));
    lines.push(format!("Irrigation Method: {}", ctx.irrigation_method));
    lines.push(format!("Growing Period: {} days", ctx.profile.growing_days));
    lines.push(String::new());

    section(&mut lines, "WATER FOOTPRINT ANALYSIS", "----------------------");
    lines.push(format!("Blue Water (Irrigation): {} m³/ton", metrics.blue));
    lines.push(format!("Green Water (Rainfall): {} m³/ton", metrics.green));
    lines.push(format!("Grey Water (Pollution Control): {} m³/ton", metrics.grey));
    lines.push(String::new());
    lines.push(format!("Total Water per Ton: {} m³/ton", metrics.total_per_ton));
    lines.push(format!("Total Production: {} tons", metrics.total_production));
    lines.push(format!(
        "Total Water Consumption: {} m³",
        format_grouped(metrics.total_consumption_value)
    ));
    lines.push(String::new());

    section(&mut lines, "FERTILIZER RECOMMENDATIONS", "------------------------");
    lines.push("NPK Requirements (per hectare):".into());
    lines.push(format!("- Nitrogen (N): {} kg/ha", fert.n_per_ha));
    lines.push(format!("- Phosphorus (P): {} kg/ha", fert.p_per_ha));
    lines.push(format!("- Potassium (K): {} kg/ha", fert.k_per_ha));
    lines.push(String::new());
    lines.push("Application Schedule (for total area):".into());
    lines.push("1. At Sowing:".into());
    lines.push(format!("   - Urea: {} kg", fert.basal_urea));
    lines.push(format!("   - DAP: {} kg", fert.basal_dap));
    lines.push(format!("   - MOP: {} kg", fert.basal_mop));
    lines.push(String::new());
    let schedule = top_dressing_schedule(ctx.profile, ctx.area, fert.adj.top_factor);
    lines.extend(top_dressing_lines(&schedule));
    lines.push(String::new());

    lines.push("Organic & Micronutrients:".into());
    lines.push(ctx.profile.fertilizer.organic.clone());
    lines.push(ctx.profile.fertilizer.micronutrients.clone());
    lines.push(String::new());

    section(
        &mut lines,
        "CLIMATE ADJUSTMENTS & RECOMMENDATIONS",
        "----------------------------------",
    );
    let advice = climate_advice(ctx.climate, ctx.weather, &fert.adj);
    lines.push(render_advice(&advice));
    lines.push(String::new());

    lines.push(RULE.into());
    lines.push("                   End of Report".into());
    lines.push("        Save water today for a better tomorrow".into());
    lines.push(RULE.into());

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn section(lines: &mut Vec<String>, title: &str, underline: &str) {
    lines.push(title.into());
    lines.push(underline.into());
}

fn top_dressing_lines(schedule: &[TopDressingApplication]) -> Vec<String> {
    let mut lines = vec!["2. Top Dressing:".to_string()];
    for application in schedule {
        lines.push(format!(
            "   {} Application ({} days - {}):",
            application.label, application.days, application.stage
        ));
        lines.push(format!("   - Urea: {} kg", application.urea));
    }
    lines
}

/// Advisory blocks for the climate zone and, when weather is known, the
/// rainfall and temperature extremes.
pub fn climate_advice(
    climate: ClimateZone,
    weather: Option<&WeatherSnapshot>,
    adj: &AdjustmentFactors,
) -> Vec<Advisory> {
    let conditions = GrowingConditions::new(climate, weather);
    AdjustmentEngine::new().advise(&conditions, adj)
}

/// Bullet list text; headed blocks are separated by a blank line
pub fn render_advice(advice: &[Advisory]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for block in advice {
        if let Some(heading) = &block.heading {
            lines.push(String::new());
            lines.push(heading.clone());
        }
        lines.extend(block.bullets.iter().map(|b| format!("• {}", b)));
    }
    lines.join("\n")
}

/// Thousands-separated number with at most three decimals
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value * 1000.0).round() / 1000.0;
    let digits = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::compute_fertilizer_data;
    use crate::logic::metrics::compute_metrics;
    use crate::reference::database::fixture;
    use crate::reference::ReferenceDataProvider;
    use chrono::TimeZone;

    fn ist_timestamp() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(330 * 60)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 5, 14, 30, 0)
            .unwrap()
    }

    fn render(crop: &str, weather: Option<&WeatherSnapshot>) -> String {
        let db = fixture();
        let metrics = compute_metrics(&db, weather, crop, 2.0, None, "drip").unwrap();
        let fert = compute_fertilizer_data(&db, weather, crop, 2.0, metrics.climate).unwrap();
        let ctx = ReportContext {
            crop,
            profile: db.crop_profile(crop).unwrap(),
            area: 2.0,
            irrigation_method: "drip",
            metrics: &metrics,
            fertilizer: &fert,
            climate: metrics.climate,
            weather,
            generated_at: ist_timestamp(),
        };
        generate_report(&ctx)
    }

    fn hot_dry_weather() -> WeatherSnapshot {
        WeatherSnapshot {
            temp: 35.0,
            humidity: 25.0,
            wind_speed: 14.0,
            lat: 26.9,
            rainfall: 15.0,
            city: "Jaipur".to_string(),
        }
    }

    #[test]
    fn report_without_weather() {
        let report = render("testcrop", None);
        assert!(report.contains("Weather data not available"));
        assert!(report.contains("Climate Zone: temperate"));
        assert!(report.contains("Generated on: 5 March 2026 at 02:30 pm"));
        assert!(report.contains("Expected Yield: 5 tons/hectare\n"));
        assert!(report.contains("Growing Period: 120 days"));
        assert!(report.contains("Green Water (Rainfall): 300 m³/ton"));
        assert!(report.contains("• Standard fertilizer rates recommended"));
        assert!(!report.contains("Considerations:"));
        assert!(!report.contains("Temperature Management:"));
    }

    #[test]
    fn report_sections_in_order() {
        let report = render("testcrop", None);
        let order = [
            "DETAILED REPORT",
            "CROP INFORMATION",
            "WATER FOOTPRINT ANALYSIS",
            "FERTILIZER RECOMMENDATIONS",
            "1. At Sowing:",
            "2. Top Dressing:",
            "Organic & Micronutrients:",
            "CLIMATE ADJUSTMENTS & RECOMMENDATIONS",
            "End of Report",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|s| report.find(s).unwrap_or_else(|| panic!("missing {}", s)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn arid_dry_hot_report_has_all_three_advisory_blocks() {
        let weather = hot_dry_weather();
        let report = render("testcrop", Some(&weather));

        assert!(report.contains("Location: Jaipur"));
        assert!(report.contains("Temperature: 35°C"));
        assert!(report.contains("Climate Zone: arid"));
        // 1.20 * 1.05 * 1.05
        assert!(report.contains("• Potassium increased by 32% for drought tolerance"));
        assert!(report.contains("\nDry Conditions Considerations:"));
        assert!(report.contains("\nHigh Temperature Management:"));
    }

    #[test]
    fn top_dressing_lines_follow_schedule() {
        let report = render("testcrop", None);
        assert!(report.contains("   First Application (21 days - Tillering):"));
        assert!(report.contains("   Second Application (45 days - Panicle initiation):"));
        assert!(report.contains("   - Urea: 130 kg"));
    }

    #[test]
    fn absent_top_dressings_are_omitted() {
        let report = render("pulse", None);
        assert!(report.contains("2. Top Dressing:"));
        assert!(!report.contains("First Application"));
        assert!(!report.contains("Second Application"));
    }

    #[test]
    fn rendered_advice_separates_headed_blocks() {
        let advice = vec![
            Advisory::new("climate_zone").with_bullet("Standard fertilizer rates recommended"),
            Advisory::new("rainfall")
                .with_heading("Heavy Rainfall Considerations:")
                .with_bullet("Split nitrogen applications to minimize leaching"),
        ];
        assert_eq!(
            render_advice(&advice),
            "• Standard fertilizer rates recommended\n\nHeavy Rainfall Considerations:\n\
             • Split nitrogen applications to minimize leaching"
        );
    }

    #[test]
    fn climate_advice_independent_of_adjustment_path() {
        let weather = WeatherSnapshot {
            temp: 5.0,
            humidity: 80.0,
            wind_speed: 5.0,
            lat: 45.0,
            rainfall: 250.0,
            city: String::new(),
        };
        let adj = AdjustmentFactors::default();
        let advice = climate_advice(ClimateZone::Continental, Some(&weather), &adj);
        let headings: Vec<Option<&str>> =
            advice.iter().map(|a| a.heading.as_deref()).collect();
        assert_eq!(
            headings,
            vec![
                None,
                Some("Heavy Rainfall Considerations:"),
                Some("Low Temperature Management:"),
            ]
        );
    }

    #[test]
    fn format_grouped_values() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1234567.0), "1,234,567");
        assert_eq!(format_grouped(12345.5), "12,345.5");
        assert_eq!(format_grouped(2.0 / 3.0), "0.667");
        assert_eq!(format_grouped(-4500.25), "-4,500.25");
    }
}
