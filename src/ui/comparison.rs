use super::heading;
use crate::logic::report::format_grouped;
use crate::logic::CropComparison;

const LABEL_WIDTH: usize = 22;
const COLUMN_WIDTH: usize = 16;

/// Side-by-side card for `compare`
pub fn render_comparison(cmp: &CropComparison) -> String {
    let (a, b) = (&cmp.a, &cmp.b);
    let mut lines = Vec::new();

    heading(
        &mut lines,
        &format!("{} vs {} ({} irrigation)", a.metrics.crop, b.metrics.crop, cmp.irrigation_method),
    );

    let mut row = |label: &str, left: String, right: String| {
        lines.push(format!(
            "{:<lw$}{:>cw$}{:>cw$}",
            label,
            left,
            right,
            lw = LABEL_WIDTH,
            cw = COLUMN_WIDTH
        ));
    };

    row("", a.metrics.crop.clone(), b.metrics.crop.clone());
    row("Area (ha)", a.metrics.area.to_string(), b.metrics.area.to_string());
    row(
        "Yield (t/ha)",
        a.metrics.actual_yield.to_string(),
        b.metrics.actual_yield.to_string(),
    );
    row("Climate", a.metrics.climate.to_string(), b.metrics.climate.to_string());
    row(
        "Water (m³/ton)",
        a.metrics.total_per_ton.to_string(),
        b.metrics.total_per_ton.to_string(),
    );
    row("  blue", a.metrics.blue.to_string(), b.metrics.blue.to_string());
    row("  green", a.metrics.green.to_string(), b.metrics.green.to_string());
    row("  grey", a.metrics.grey.to_string(), b.metrics.grey.to_string());
    row(
        "Total water (m³)",
        format_grouped(a.metrics.total_consumption_value),
        format_grouped(b.metrics.total_consumption_value),
    );
    row(
        "N/P/K (kg/ha)",
        npk(a.fertilizer.n_per_ha, a.fertilizer.p_per_ha, a.fertilizer.k_per_ha),
        npk(b.fertilizer.n_per_ha, b.fertilizer.p_per_ha, b.fertilizer.k_per_ha),
    );
    row(
        "Basal urea (kg)",
        a.fertilizer.basal_urea.to_string(),
        b.fertilizer.basal_urea.to_string(),
    );
    row(
        "Basal DAP (kg)",
        a.fertilizer.basal_dap.to_string(),
        b.fertilizer.basal_dap.to_string(),
    );
    row(
        "Basal MOP (kg)",
        a.fertilizer.basal_mop.to_string(),
        b.fertilizer.basal_mop.to_string(),
    );

    let (winner, saved) = cmp.lower_footprint();
    lines.push(String::new());
    if saved > 0.0 {
        lines.push(format!(
            "{} uses {} m³ less water per ton",
            winner,
            format_grouped(saved)
        ));
    } else {
        lines.push("Both crops use the same water per ton".to_string());
    }

    lines.join("\n")
}

fn npk(n: f64, p: f64, k: f64) -> String {
    format!("{}/{}/{}", n, p, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::compare_crops;
    use crate::models::{CropSelection, DEFAULT_AREA_HA};
    use crate::reference::database::fixture;

    #[test]
    fn card_shows_both_columns() {
        let db = fixture();
        let a = CropSelection::from_raw("testcrop", Some("2"), None, DEFAULT_AREA_HA).unwrap();
        let b = CropSelection::from_raw("pulse", None, None, DEFAULT_AREA_HA).unwrap();
        let cmp = compare_crops(&db, None, &a, &b, "drip").unwrap();

        let text = render_comparison(&cmp);
        assert!(text.starts_with("testcrop vs pulse (drip irrigation)"));
        assert!(text.contains("120/60/40"));
        assert!(text.contains("20/50/20"));
        assert!(text.contains("m³ less water per ton"));

        let area_row = text
            .lines()
            .find(|l| l.starts_with("Area (ha)"))
            .unwrap();
        assert!(area_row.trim_end().ends_with('1'));
        assert!(area_row.contains('2'));
    }
}
