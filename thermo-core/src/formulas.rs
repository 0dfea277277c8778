//! Psychrometric Formulas
//!
//! Stateless functions over a temperature/humidity pair. The comfort façade
//! calls these with the last recorded reading; they can also be used on
//! their own.
//!
//! ## Dew Point
//!
//! All closed-form variants use the Magnus form:
//!
//! ```text
//! γ(T,RH) = ln(RH/100) + a·T / (b + T)
//! Td      = b·γ / (a - γ)
//! ```
//!
//! | Algorithm      | Constants                         | Error (0-50°C) |
//! |----------------|-----------------------------------|----------------|
//! | `Accurate`     | Arden Buck (1981), a = 18.678 - T/234.5, b = 257.14 | ~0.05°C |
//! | `AccurateFast` | Sonntag (1990), a = 17.62, b = 243.12 | ~0.1°C |
//! | `Fast`         | Magnus, a = 17.27, b = 237.7      | ~0.4°C |
//! | `Fastest`      | `T - (100 - RH)/5` above 50%RH, lookup grid below | ~1°C |
//!
//! ## Heat Index (US)
//!
//! NOAA's Rothfusz regression, evaluated in Fahrenheit, with the simple
//! Steadman formula for mild conditions and the two NOAA adjustments for
//! very dry and very humid air.
//!
//! ## Humidex (Canada)
//!
//! ```text
//! e = 6.11 · exp(5417.7530 · (1/273.16 - 1/(273.15 + Td)))
//! H = T + 0.5555 · (e - 10)
//! ```

use crate::{
    constants::physics::{ABSOLUTE_ZERO_CELSIUS, WATER_TRIPLE_POINT_K},
    errors::{ComfortError, ComfortResult},
    lookup::dew_point_lookup,
    units::{convert_c_to_f, convert_f_to_c},
};

/// Dew point algorithm, trading accuracy for speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DewPointAlgorithm {
    /// Arden Buck equation
    Accurate,
    /// Magnus with the classic 17.27/237.7 constants
    Fast,
    /// Magnus with Sonntag constants
    #[default]
    AccurateFast,
    /// Linear rule of thumb, lookup grid below 50%RH
    Fastest,
}

fn check_reading(temp_c: f32, rh_percent: f32) -> ComfortResult<()> {
    if !temp_c.is_finite() {
        return Err(ComfortError::InvalidReading { value: temp_c });
    }
    if !rh_percent.is_finite() || rh_percent <= 0.0 || rh_percent > 100.0 {
        return Err(ComfortError::InvalidReading { value: rh_percent });
    }
    Ok(())
}

fn magnus(temp_c: f32, rh_percent: f32, a: f32, b: f32) -> f32 {
    let gamma = libm::logf(rh_percent / 100.0) + a * temp_c / (b + temp_c);
    b * gamma / (a - gamma)
}

/// Dew point (°C) of air at `temp_c` and `rh_percent`
///
/// Humidity must be in (0, 100]; dry air has no dew point.
pub fn dew_point(temp_c: f32, rh_percent: f32, algorithm: DewPointAlgorithm) -> ComfortResult<f32> {
    check_reading(temp_c, rh_percent)?;

    let dew_point = match algorithm {
        DewPointAlgorithm::Accurate => {
            const B: f32 = 18.678;
            const C: f32 = 257.14;
            const D: f32 = 234.5;
            let gamma = libm::logf(rh_percent / 100.0)
                + (B - temp_c / D) * (temp_c / (C + temp_c));
            C * gamma / (B - gamma)
        }
        DewPointAlgorithm::Fast => magnus(temp_c, rh_percent, 17.27, 237.7),
        DewPointAlgorithm::AccurateFast => magnus(temp_c, rh_percent, 17.62, 243.12),
        DewPointAlgorithm::Fastest => {
            if rh_percent >= 50.0 {
                temp_c - (100.0 - rh_percent) / 5.0
            } else {
                // Grid clamps out-of-range input, so this only fails on a table bug
                dew_point_lookup(temp_c, rh_percent)
                    .ok_or(ComfortError::InvalidReading { value: temp_c })?
            }
        }
    };

    if dew_point.is_finite() {
        Ok(dew_point)
    } else {
        Err(ComfortError::InvalidReading { value: rh_percent })
    }
}

/// NOAA heat index (°C) for air at `temp_c` and `rh_percent`
pub fn heat_index_us(temp_c: f32, rh_percent: f32) -> ComfortResult<f32> {
    check_reading(temp_c, rh_percent)?;

    let t = convert_c_to_f(temp_c);
    let rh = rh_percent;

    let simple = 0.5 * (t + 61.0 + (t - 68.0) * 1.2 + rh * 0.094);
    if (simple + t) / 2.0 < 80.0 {
        return Ok(convert_f_to_c(simple));
    }

    let mut hi = -42.379 + 2.049_015_2 * t + 10.143_331 * rh
        - 0.224_755_4 * t * rh
        - 6.837_83e-3 * t * t
        - 5.481_717e-2 * rh * rh
        + 1.228_74e-3 * t * t * rh
        + 8.5282e-4 * t * rh * rh
        - 1.99e-6 * t * t * rh * rh;

    if rh < 13.0 && (80.0..=112.0).contains(&t) {
        hi -= (13.0 - rh) / 4.0 * libm::sqrtf((17.0 - libm::fabsf(t - 95.0)) / 17.0);
    } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
        hi += (rh - 85.0) / 10.0 * ((87.0 - t) / 5.0);
    }

    Ok(convert_f_to_c(hi))
}

/// Canadian humidex (°C) from air temperature and dew point
pub fn humindex_canada(temp_c: f32, dew_point_c: f32) -> f32 {
    let dew_point_k = dew_point_c - ABSOLUTE_ZERO_CELSIUS;
    let vapour_pressure_hpa =
        6.11 * libm::expf(5417.753 * (1.0 / WATER_TRIPLE_POINT_K - 1.0 / dew_point_k));
    temp_c + 0.5555 * (vapour_pressure_hpa - 10.0)
}

/// Lowest recommended summer indoor temperature (°C) for an outdoor
/// temperature
///
/// Source: Engineering ToolBox, "Indoor Design Temperatures", linearised
pub fn recommended_min_indoor_temp_summer(outdoor_c: f32) -> f32 {
    outdoor_c * 0.035_714 + 16.25
}

/// Highest recommended summer indoor temperature (°C) for an outdoor
/// temperature
pub fn recommended_max_indoor_temp_summer(outdoor_c: f32) -> f32 {
    outdoor_c * 0.357_142 + 14.5
}
