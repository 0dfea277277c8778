//! Comfort Envelope Parameters
//!
//! Compile-time shape of the comfort profile and its factory defaults.
//! The envelope lives in the humidity/temperature plane: x is relative
//! humidity (%RH), y is temperature (°C).
//!
//! ```text
//!  °C
//!  30 ┤━━━━━━━┓
//!  28 ┤       ┗━━━━━━━━━━━━━┓            hot boundary
//!  26 ┤                     ┗━━━━━━━━
//!     │        comfortable
//!  20 ┤━━━━━━━┓
//!  18 ┤       ┗━━━━━━━━━━━━━┓            cold boundary
//!  16 ┤                     ┗━━━━━━━━
//!     └──┬──────┬──────┬──────┬──────┬──  %RH
//!        0     25     50     75    100
//!          dry │    (30..60)    │ humid
//! ```

use super::physics::{HEALTHY_RH_HIGH_PCT, HEALTHY_RH_LOW_PCT};

/// Number of control points on each boundary polyline.
///
/// Each polyline has `COMFORT_CTRL_POINTS - 1` line segments.
pub const COMFORT_CTRL_POINTS: usize = 5;

/// Number of line segments per boundary polyline.
pub const COMFORT_CTRL_LINES: usize = COMFORT_CTRL_POINTS - 1;

/// Humidity of the factory control points (%RH), shared by both boundaries.
pub const DEFAULT_CONTROL_HUMIDITIES: [f32; COMFORT_CTRL_POINTS] =
    [0.0, 25.0, 50.0, 75.0, 100.0];

/// Factory "too hot" temperatures (°C) at [`DEFAULT_CONTROL_HUMIDITIES`].
///
/// Humid air feels warmer, so the ceiling drops as humidity rises.
///
/// Source: ASHRAE Standard 55 summer comfort zone, linearised
pub const DEFAULT_HOT_TEMPERATURES: [f32; COMFORT_CTRL_POINTS] =
    [30.0, 29.0, 28.0, 27.0, 26.0];

/// Factory "too cold" temperatures (°C) at [`DEFAULT_CONTROL_HUMIDITIES`].
pub const DEFAULT_COLD_TEMPERATURES: [f32; COMFORT_CTRL_POINTS] =
    [20.0, 19.0, 18.0, 17.0, 16.0];

/// Winter "too hot" temperatures (°C): heavier clothing lowers the ceiling.
///
/// Source: ASHRAE Standard 55 winter comfort zone, linearised
pub const WINTER_HOT_TEMPERATURES: [f32; COMFORT_CTRL_POINTS] =
    [26.0, 25.0, 24.0, 23.0, 22.0];

/// Winter "too cold" temperatures (°C).
pub const WINTER_COLD_TEMPERATURES: [f32; COMFORT_CTRL_POINTS] =
    [21.0, 20.5, 20.0, 19.5, 19.0];

/// Default dry threshold (%RH): the healthy band's lower edge.
pub const DEFAULT_DRY_LINE_PCT: f32 = HEALTHY_RH_LOW_PCT;

/// Default humid threshold (%RH): the healthy band's upper edge.
pub const DEFAULT_HUMID_LINE_PCT: f32 = HEALTHY_RH_HIGH_PCT;

/// Temperature excess reported as 100% discomfort when the envelope width
/// cannot be used as the scale (°C).
///
/// Only reached when extrapolating far outside the control humidities,
/// where the two boundary lines may meet.
pub const COMFORT_TEMP_SATURATION_C: f32 = 10.0;

/// Upper bound of the comfort percent scale.
pub const COMFORT_PERCENT_MAX: f32 = 100.0;
