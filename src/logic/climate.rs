use crate::models::ClimateZone;
use std::f64::consts::PI;

/// Solar constant, MJ m⁻² min⁻¹
const SOLAR_CONSTANT: f64 = 0.0820;
/// Stefan-Boltzmann constant, MJ K⁻⁴ m⁻² day⁻¹
const STEFAN_BOLTZMANN: f64 = 4.903e-9;
/// Psychrometric constant near sea level, kPa/°C
const PSYCHROMETRIC: f64 = 0.066;
/// Reference grass albedo
const ALBEDO: f64 = 0.23;
/// Angstrom coefficients at a sunshine fraction of 0.5
const SOLAR_FRACTION: f64 = 0.25 + 0.50 * 0.5;
const CLEAR_SKY_FRACTION: f64 = 0.75;
/// Log wind profile conversion from 10 m to 2 m measurement height
const WIND_10M_TO_2M: f64 = 0.748;

/// Classify a location into a climate zone from temperature (°C) and
/// relative humidity (%).
///
/// Total over all inputs: anything that matches no rule (including NaN)
/// is temperate.
pub fn classify_climate(temp: f64, humidity: f64) -> ClimateZone {
    if temp >= 24.0 && humidity >= 70.0 {
        ClimateZone::Tropical
    } else if humidity < 35.0 {
        ClimateZone::Arid
    } else if temp < 10.0 {
        ClimateZone::Continental
    } else if temp >= 18.0 && humidity < 55.0 {
        ClimateZone::Mediterranean
    } else {
        ClimateZone::Temperate
    }
}

/// Reference evapotranspiration ET0 in mm/day.
///
/// FAO-56 Penman-Monteith for a daily step with radiation estimated from
/// latitude alone (equinox extraterrestrial radiation, half sunshine) and
/// soil heat flux taken as zero. Wind speed is km/h measured at 10 m.
///
/// Never negative; non-finite inputs yield 0.
pub fn reference_et0(temp: f64, humidity: f64, wind_speed_kmh: f64, lat: f64) -> f64 {
    let rh = humidity.clamp(0.0, 100.0);

    // Vapour pressure, kPa
    let es = 0.6108 * (17.27 * temp / (temp + 237.3)).exp();
    let ea = es * rh / 100.0;
    let slope = 4098.0 * es / (temp + 237.3).powi(2);

    let u2 = (wind_speed_kmh / 3.6).max(0.0) * WIND_10M_TO_2M;

    // Radiation, MJ m⁻² day⁻¹
    let ra = ((24.0 * 60.0 / PI) * SOLAR_CONSTANT * lat.to_radians().cos()).max(0.0);
    let rs = SOLAR_FRACTION * ra;
    let rns = (1.0 - ALBEDO) * rs;
    let relative_shortwave = SOLAR_FRACTION / CLEAR_SKY_FRACTION;
    let tk = temp + 273.16;
    let rnl = STEFAN_BOLTZMANN
        * tk.powi(4)
        * (0.34 - 0.14 * ea.sqrt())
        * (1.35 * relative_shortwave - 0.35);
    let rn = rns - rnl;

    let radiation_term = 0.408 * slope * rn;
    let aerodynamic_term = PSYCHROMETRIC * 900.0 / (temp + 273.0) * u2 * (es - ea);
    let et0 = (radiation_term + aerodynamic_term) / (slope + PSYCHROMETRIC * (1.0 + 0.34 * u2));

    if et0.is_finite() {
        et0.max(0.0)
    } else {
        0.0
    }
}
