//! Constants for thermo Core
//!
//! Centralised, documented constants used by the comfort engine and its
//! formulas. Every numeric value used by more than one module lives here.
//!
//! ## Organization
//!
//! - **Comfort**: control-point count, factory envelope, percent scaling
//! - **Physics**: physical constants, healthy humidity band, human physiology
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference a standard or datasheet for every value
//! 3. Include the unit in the name

/// Shape and factory defaults of the comfort envelope.
pub mod comfort;

/// Physical constants, healthy humidity band and human physiology figures.
pub mod physics;

pub use comfort::{
    COMFORT_CTRL_POINTS, COMFORT_CTRL_LINES, COMFORT_TEMP_SATURATION_C,
    DEFAULT_DRY_LINE_PCT, DEFAULT_HUMID_LINE_PCT,
};

pub use physics::{
    ABSOLUTE_ZERO_CELSIUS, SEA_LEVEL_PRESSURE_HPA,
    HEALTHY_RH_LOW_PCT, HEALTHY_RH_HIGH_PCT,
};
