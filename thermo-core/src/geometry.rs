//! Geometry of the Humidity/Temperature Plane
//!
//! ## Coordinates
//!
//! The comfort diagram uses relative humidity as x and temperature as y:
//!
//! ```text
//!   y (°C)
//!    │        ● B(x2, y2)
//!    │       /
//!    │      /   a·x + b·y + c = 0
//!    │     /
//!    │    ● A(x1, y1)
//!    └──────────────── x (%RH)
//! ```
//!
//! A line through two control points is kept in implicit form:
//!
//! ```text
//! a = y2 - y1
//! b = x1 - x2
//! c = x2·y1 - x1·y2
//! ```
//!
//! The implicit form avoids a special case for vertical lines when building
//! the line, and gives a signed perpendicular distance for free:
//!
//! ```text
//! d(P) = (a·x + b·y + c) / √(a² + b²)
//! ```
//!
//! ## Orientation
//!
//! The raw sign of `d` depends on the direction the line was built in. For
//! a boundary built left to right (x1 < x2), `b` is negative and points above
//! the line give a negative `d`. [`ComfortLine::height_above`] folds the sign
//! of `b` in so callers always get "positive = above the line".
//!
//! All functions are pure and allocation free.

use serde::{Deserialize, Serialize};

use crate::errors::{ComfortResult, ConfigurationError};

/// A sample or control vertex on the comfort diagram
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComfortPoint {
    /// Relative humidity (%RH), the x axis
    pub humidity: f32,
    /// Temperature (°C), the y axis
    pub temperature: f32,
}

impl ComfortPoint {
    /// Create a point from humidity and temperature
    pub const fn new(humidity: f32, temperature: f32) -> Self {
        Self { humidity, temperature }
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.humidity.is_finite() && self.temperature.is_finite()
    }
}

/// Line `a·x + b·y + c = 0` joining two adjacent control points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComfortLine {
    /// Coefficient of x (humidity)
    pub a: f32,
    /// Coefficient of y (temperature)
    pub b: f32,
    /// Constant term
    pub c: f32,
}

impl ComfortLine {
    /// Build the line through two points
    ///
    /// Fails with [`ConfigurationError::DegenerateLine`] when the points
    /// coincide, and [`ConfigurationError::NonFiniteValue`] when a coordinate
    /// is NaN or infinite.
    pub fn from_points(p1: ComfortPoint, p2: ComfortPoint) -> ComfortResult<Self> {
        if !p1.is_finite() || !p2.is_finite() {
            return Err(ConfigurationError::NonFiniteValue.into());
        }

        let line = Self::through(p1, p2);
        if line.is_degenerate() {
            return Err(ConfigurationError::DegenerateLine.into());
        }

        Ok(line)
    }

    /// Unchecked coefficients of the line through two points
    ///
    /// Callers must know the points are finite and distinct.
    pub(crate) fn through(p1: ComfortPoint, p2: ComfortPoint) -> Self {
        Self {
            a: p2.temperature - p1.temperature,
            b: p1.humidity - p2.humidity,
            c: p2.humidity * p1.temperature - p1.humidity * p2.temperature,
        }
    }

    /// True when `a` and `b` are both zero and the equation describes no line
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// Length of the normal vector, √(a² + b²)
    fn norm(&self) -> ComfortResult<f32> {
        if self.is_degenerate() {
            return Err(ConfigurationError::DegenerateLine.into());
        }
        Ok(libm::sqrtf(self.a * self.a + self.b * self.b))
    }

    /// Signed perpendicular distance from `point` to the line
    ///
    /// The sign tells which side of the line the point is on; its meaning
    /// depends on the direction the line was built in. Use
    /// [`Self::height_above`] for an orientation-independent answer.
    pub fn signed_distance(&self, point: ComfortPoint) -> ComfortResult<f32> {
        let norm = self.norm()?;
        Ok((self.a * point.humidity + self.b * point.temperature + self.c) / norm)
    }

    /// Perpendicular distance, positive when `point` lies above the line
    /// (hotter than the line at that humidity)
    pub fn height_above(&self, point: ComfortPoint) -> ComfortResult<f32> {
        let distance = self.signed_distance(point)?;
        // Raising y changes the raw value by b·dy, so b's sign decides "up"
        if self.b < 0.0 {
            Ok(-distance)
        } else {
            Ok(distance)
        }
    }

    /// Temperature of the line at the given humidity
    ///
    /// Vertical lines (`b == 0`) have no single temperature and are rejected.
    pub fn temperature_at(&self, humidity: f32) -> ComfortResult<f32> {
        if self.b == 0.0 {
            return Err(ConfigurationError::DegenerateLine.into());
        }
        Ok(-(self.a * humidity + self.c) / self.b)
    }
}
