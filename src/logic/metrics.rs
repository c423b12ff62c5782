use super::climate::{classify_climate, reference_et0};
use crate::error::LookupError;
use crate::models::{
    ClimateZone, Metrics, WeatherSnapshot, DEFAULT_HUMIDITY, DEFAULT_LATITUDE,
    DEFAULT_RAINFALL_MM, DEFAULT_TEMP_C, DEFAULT_WIND_SPEED_KMH,
};
use crate::reference::ReferenceDataProvider;

/// Days per month when spreading monthly rainfall over days
const DAYS_PER_MONTH: f64 = 30.0;
/// mm of water over one hectare is 10 m³
const MM_HA_TO_M3: f64 = 10.0;

/// Compute the water footprint of one crop.
///
/// Irrigation need is crop evapotranspiration minus daily rainfall, floored
/// at zero, summed over the growing period. Blue water is that volume per
/// ton of yield, grossed up by the irrigation method's efficiency; green and
/// grey come straight from the crop profile.
///
/// `yield_input` is tons/hectare and only used when positive. Fails only
/// when the crop or irrigation method is unknown.
pub fn compute_metrics(
    reference: &dyn ReferenceDataProvider,
    weather: Option<&WeatherSnapshot>,
    crop: &str,
    area: f64,
    yield_input: Option<f64>,
    irrigation_method: &str,
) -> Result<Metrics, LookupError> {
    let profile = reference.crop_profile(crop)?;
    let efficiency = reference.irrigation_efficiency(irrigation_method)?;

    let (et0, rainfall, climate) = match weather {
        Some(w) => (
            reference_et0(w.temp, w.humidity, w.wind_speed, w.lat),
            w.rainfall,
            classify_climate(w.temp, w.humidity),
        ),
        None => (
            reference_et0(
                DEFAULT_TEMP_C,
                DEFAULT_HUMIDITY,
                DEFAULT_WIND_SPEED_KMH,
                DEFAULT_LATITUDE,
            ),
            DEFAULT_RAINFALL_MM,
            ClimateZone::Temperate,
        ),
    };

    let daily_rainfall = rainfall / DAYS_PER_MONTH;
    let crop_et = et0 * profile.kc;
    let daily_irrigation_need = (crop_et - daily_rainfall).max(0.0);
    let total_irrigation_mm = daily_irrigation_need * f64::from(profile.growing_days);

    let actual_yield = yield_input
        .filter(|y| *y > 0.0)
        .unwrap_or(profile.base_yield);
    let blue_water_per_ton = (total_irrigation_mm * MM_HA_TO_M3) / actual_yield / efficiency;

    let blue = blue_water_per_ton.round();
    let green = profile.green.round();
    let grey = profile.grey.round();

    let total_per_ton = blue + green + grey;
    let total_production = actual_yield * area;
    let total_consumption_value = total_per_ton * total_production;

    tracing::debug!(
        crop,
        irrigation_method,
        et0,
        crop_et,
        daily_irrigation_need,
        total_irrigation_mm,
        blue,
        "computed water footprint"
    );

    Ok(Metrics {
        crop: crop.to_string(),
        area,
        actual_yield,
        blue,
        green,
        grey,
        total_per_ton,
        total_production,
        total_consumption_value,
        rainfall,
        et0,
        climate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::database::fixture;

    fn snapshot(temp: f64, humidity: f64, rainfall: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temp,
            humidity,
            wind_speed: 10.0,
            lat: 20.0,
            rainfall,
            city: "Test".to_string(),
        }
    }

    #[test]
    fn worked_example_without_weather() {
        let db = fixture();
        let m = compute_metrics(&db, None, "testcrop", 2.0, None, "furrow").unwrap();

        let x = reference_et0(25.0, 60.0, 10.0, 20.0);
        let need = (x * 1.15 - 50.0 / 30.0).max(0.0);
        let blue = (need * 120.0 * 10.0 / 5.0 / 0.65).round();

        assert_eq!(m.et0, x);
        assert_eq!(m.rainfall, 50.0);
        assert_eq!(m.climate, ClimateZone::Temperate);
        assert_eq!(m.actual_yield, 5.0);
        assert_eq!(m.blue, blue);
        assert_eq!(m.green, 300.0);
        assert_eq!(m.grey, 200.0);
        assert_eq!(m.total_per_ton, blue + 500.0);
        assert_eq!(m.total_production, 10.0);
        // about 1260 m³/ton of blue water with the default conditions
        assert!((m.blue - 1260.0).abs() <= 2.0, "blue = {}", m.blue);
    }

    #[test]
    fn totals_are_exact() {
        let db = fixture();
        let weather = snapshot(33.0, 40.0, 12.0);
        for (crop, area, yield_input) in [
            ("testcrop", 1.0, None),
            ("testcrop", 3.7, Some(6.2)),
            ("pulse", 0.4, Some(1.1)),
        ] {
            for w in [None, Some(&weather)] {
                let m = compute_metrics(&db, w, crop, area, yield_input, "drip").unwrap();
                assert_eq!(m.total_production, m.actual_yield * area);
                assert_eq!(m.total_per_ton, m.blue + m.green + m.grey);
                assert_eq!(m.total_consumption_value, m.total_per_ton * m.total_production);
            }
        }
    }

    #[test]
    fn green_and_grey_are_rounded() {
        let db = fixture();
        let m = compute_metrics(&db, None, "pulse", 1.0, None, "drip").unwrap();
        assert_eq!(m.green, 2972.0);
        assert_eq!(m.grey, 134.0);
    }

    #[test]
    fn yield_input_overrides_base_yield_only_when_positive() {
        let db = fixture();
        let m = compute_metrics(&db, None, "testcrop", 1.0, Some(8.0), "drip").unwrap();
        assert_eq!(m.actual_yield, 8.0);

        let m = compute_metrics(&db, None, "testcrop", 1.0, Some(0.0), "drip").unwrap();
        assert_eq!(m.actual_yield, 5.0);

        let m = compute_metrics(&db, None, "testcrop", 1.0, Some(-3.0), "drip").unwrap();
        assert_eq!(m.actual_yield, 5.0);
    }

    #[test]
    fn more_rain_never_increases_blue_water() {
        let db = fixture();
        let mut prev = f64::MAX;
        for rainfall in [0.0, 20.0, 50.0, 100.0, 150.0, 200.0, 400.0, 800.0] {
            let w = snapshot(28.0, 55.0, rainfall);
            let m = compute_metrics(&db, Some(&w), "testcrop", 1.0, None, "furrow").unwrap();
            assert!(m.blue <= prev, "blue rose to {} at {} mm", m.blue, rainfall);
            assert!(m.blue >= 0.0);
            prev = m.blue;
        }
        // Rainfall surplus floors irrigation at zero
        assert_eq!(prev, 0.0);
    }

    #[test]
    fn better_efficiency_needs_less_blue_water() {
        let db = fixture();
        let furrow = compute_metrics(&db, None, "testcrop", 1.0, None, "furrow").unwrap();
        let drip = compute_metrics(&db, None, "testcrop", 1.0, None, "drip").unwrap();
        assert!(drip.blue < furrow.blue);
        assert_eq!(drip.green, furrow.green);
    }

    #[test]
    fn weather_drives_climate_and_rainfall() {
        let db = fixture();
        let w = snapshot(35.0, 25.0, 15.0);
        let m = compute_metrics(&db, Some(&w), "testcrop", 1.0, None, "drip").unwrap();
        assert_eq!(m.climate, ClimateZone::Arid);
        assert_eq!(m.rainfall, 15.0);
        assert_eq!(m.et0, reference_et0(35.0, 25.0, 10.0, 20.0));
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let db = fixture();
        let w = snapshot(30.0, 70.0, 90.0);
        let a = compute_metrics(&db, Some(&w), "testcrop", 2.5, Some(4.4), "drip").unwrap();
        let b = compute_metrics(&db, Some(&w), "testcrop", 2.5, Some(4.4), "drip").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.blue.to_bits(), b.blue.to_bits());
        assert_eq!(
            a.total_consumption_value.to_bits(),
            b.total_consumption_value.to_bits()
        );
    }

    #[test]
    fn unknown_keys_are_lookup_errors() {
        let db = fixture();
        assert_eq!(
            compute_metrics(&db, None, "quinoa", 1.0, None, "drip").unwrap_err(),
            LookupError::UnknownCrop("quinoa".to_string())
        );
        assert_eq!(
            compute_metrics(&db, None, "testcrop", 1.0, None, "bucket").unwrap_err(),
            LookupError::UnknownIrrigationMethod("bucket".to_string())
        );
    }
}
