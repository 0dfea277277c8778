//! Common test utilities for integration tests
//!
//! This module provides:
//! - Profile fixtures (factory, shifted, narrow envelopes)
//! - Named room scenarios with their expected classification
//! - A deterministic RNG for sweep tests
//! - Tolerance assertion for float results

#![allow(dead_code, unused_macros)]

use thermo_core::{
    constants::comfort::{COMFORT_CTRL_POINTS, DEFAULT_CONTROL_HUMIDITIES},
    Comfort, ComfortPoint, ComfortProfile,
};

pub mod scenarios;

/// Float comparison with an absolute tolerance
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}

/// Envelope on the default humidities from two temperature tables
pub fn envelope(
    hot: [f32; COMFORT_CTRL_POINTS],
    cold: [f32; COMFORT_CTRL_POINTS],
) -> ([ComfortPoint; COMFORT_CTRL_POINTS], [ComfortPoint; COMFORT_CTRL_POINTS]) {
    let mut hot_points = [ComfortPoint::default(); COMFORT_CTRL_POINTS];
    let mut cold_points = [ComfortPoint::default(); COMFORT_CTRL_POINTS];
    for (i, humidity) in DEFAULT_CONTROL_HUMIDITIES.iter().enumerate() {
        hot_points[i] = ComfortPoint::new(*humidity, hot[i]);
        cold_points[i] = ComfortPoint::new(*humidity, cold[i]);
    }
    (hot_points, cold_points)
}

/// Factory envelope moved up or down by `offset` °C
pub fn shifted_profile(offset: f32) -> ComfortProfile {
    let base = ComfortProfile::default();
    let mut hot = *base.hot_points();
    let mut cold = *base.cold_points();
    for point in hot.iter_mut().chain(cold.iter_mut()) {
        point.temperature += offset;
    }
    ComfortProfile::new_with_envelope(hot, cold, base.dry_line(), base.humid_line())
        .expect("shifted factory envelope is valid")
}

/// Flat 2°C wide envelope, 21-23°C at every humidity
pub fn narrow_profile() -> ComfortProfile {
    let (hot, cold) = envelope([23.0; COMFORT_CTRL_POINTS], [21.0; COMFORT_CTRL_POINTS]);
    ComfortProfile::new_with_envelope(hot, cold, 30.0, 60.0)
        .expect("narrow envelope is valid")
}

/// Façade that has already seen one reading
pub fn comfort_with_reading(temperature: f32, humidity: f32) -> Comfort {
    let mut comfort = Comfort::new();
    comfort
        .on_new_temp_and_humidity(temperature, humidity)
        .expect("fixture reading is valid");
    comfort
}

/// Deterministic random number generator for tests
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        let unit = (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
        min + unit * (max - min)
    }
}
