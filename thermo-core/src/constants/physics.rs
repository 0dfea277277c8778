//! Physical and Physiological Constants
//!
//! Fundamental constants used by the psychrometric formulas and the human
//! physiology figures that the comfort engine exposes to callers.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Absolute zero in Celsius (°C).
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f32 = -273.15;

/// Triple point of water in Kelvin (K).
///
/// Reference temperature of the humidex vapour pressure expression.
///
/// Source: Environment Canada humidex definition
pub const WATER_TRIPLE_POINT_K: f32 = 273.16;

/// Freezing point of water at standard pressure (°C).
pub const WATER_FREEZING_POINT_C: f32 = 0.0;

/// Standard atmospheric pressure at sea level (hPa/mbar).
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_HPA: f32 = 1013.25;

// ===== HEALTHY HUMIDITY BAND =====

/// Lower bound of the healthy indoor relative humidity band (%RH).
///
/// Below this, bacteria survive longer and respiratory infections rise.
///
/// Source: Sterling et al., "Criteria for Human Exposure to Humidity in
/// Occupied Buildings" (ASHRAE, 1985)
pub const HEALTHY_RH_LOW_PCT: f32 = 30.0;

/// Upper bound of the healthy indoor relative humidity band (%RH).
///
/// Above this, fungi and dust mites thrive.
///
/// Source: Sterling et al. (ASHRAE, 1985)
pub const HEALTHY_RH_HIGH_PCT: f32 = 60.0;

/// Hysteresis around the healthy band edges (%RH).
pub const HEALTHY_RH_THRESHOLD_PCT: f32 = 5.0;

// ===== HUMAN PHYSIOLOGY =====

/// Heat released by a resting adult (W), valid between 19 and 34°C.
///
/// Source: Engineering ToolBox, "Human Air Consumption"
pub const HUMAN_HEAT_W: f32 = 118.0;

/// Air breathed at rest (m³/hour).
pub const HUMAN_AIR_BREATHE_AT_REST_M3_PER_H: f32 = 0.5;

/// Air breathed during light work (m³/hour).
pub const HUMAN_AIR_BREATHE_AT_LIGHT_WORK_M3_PER_H: f32 = 2.0;

/// Air breathed during hard work (m³/hour).
pub const HUMAN_AIR_BREATHE_AT_HARD_WORK_M3_PER_H: f32 = 6.0;

/// Oxygen fraction in exhaled air.
///
/// Source: Engineering ToolBox, "CO2 Persons"
pub const HUMAN_BREATHOUT_OXYGEN_FRACTION: f32 = 0.165;

/// Carbon dioxide fraction in exhaled air (the rest is nitrogen).
pub const HUMAN_BREATHOUT_CO2_FRACTION: f32 = 0.04;

/// CO2 exhaled per hour at a given breathing rate (m³/hour).
pub fn exhaled_co2_m3_per_hour(breathing_m3_per_h: f32) -> f32 {
    breathing_m3_per_h * HUMAN_BREATHOUT_CO2_FRACTION
}
