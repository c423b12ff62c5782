use super::weather::ClimateZone;
use serde::{Deserialize, Serialize};

/// Water footprint figures for one crop, area, yield and irrigation method.
///
/// `blue`, `green`, `grey` and `total_per_ton` are m³/ton, already rounded to
/// whole numbers. `total_production` is tons and `total_consumption_value`
/// is m³ for the whole area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub crop: String,
    pub area: f64,
    pub actual_yield: f64,
    pub blue: f64,
    pub green: f64,
    pub grey: f64,
    pub total_per_ton: f64,
    pub total_production: f64,
    pub total_consumption_value: f64,
    /// mm/month used for the calculation
    pub rainfall: f64,
    /// Reference evapotranspiration, mm/day
    pub et0: f64,
    pub climate: ClimateZone,
}

impl Metrics {
    /// Share of the per-ton footprint that comes from irrigation, 0..=1
    pub fn blue_share(&self) -> f64 {
        if self.total_per_ton > 0.0 {
            self.blue / self.total_per_ton
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(blue: f64, green: f64, grey: f64) -> Metrics {
        Metrics {
            crop: "wheat".to_string(),
            area: 1.0,
            actual_yield: 4.0,
            blue,
            green,
            grey,
            total_per_ton: blue + green + grey,
            total_production: 4.0,
            total_consumption_value: (blue + green + grey) * 4.0,
            rainfall: 50.0,
            et0: 4.0,
            climate: ClimateZone::Temperate,
        }
    }

    #[test]
    fn blue_share_of_total() {
        let m = metrics(500.0, 300.0, 200.0);
        assert!((m.blue_share() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn blue_share_with_zero_total() {
        let m = metrics(0.0, 0.0, 0.0);
        assert_eq!(m.blue_share(), 0.0);
    }
}
