//! Error Types for Comfort Computation Failures
//!
//! ## Design Philosophy
//!
//! The comfort engine runs on the same class of devices as the sensors it
//! reads, so its errors follow the same rules:
//!
//! 1. **No Heap Allocation**: reasons are `&'static str`, payloads are plain
//!    numbers.
//! 2. **Copy Semantics**: errors are returned from every query in the hot
//!    path and are cheap to pass around.
//! 3. **Actionable**: the variant alone tells the caller whether to fix the
//!    profile, retry persistence, or wait for a reading.
//!
//! ## Error Categories
//!
//! ### Configuration
//! The comfort envelope itself is broken: two identical control points, a
//! hot boundary that dips below the cold boundary, points out of humidity
//! order. A profile in this state is rejected at construction or load time,
//! never silently used.
//!
//! ### Serialization
//! The persisted image has the wrong length, does not decode, or the
//! destination buffer is too small.
//!
//! ### Missing Readings
//! A derived quantity (dew point, heat index, classification) was requested
//! before any sensor reading was recorded.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use thermo_core::{Comfort, ComfortError};
//!
//! let mut comfort = Comfort::new();
//! match comfort.dew_point() {
//!     Ok(_dew_point) => {}
//!     Err(ComfortError::UninitializedState { .. }) => {
//!         // No reading yet - wait for the sensor
//!     }
//!     Err(_) => {}
//! }
//! comfort.on_new_temp_and_humidity(22.0, 45.0)?;
//! assert!(comfort.dew_point().is_ok());
//! # Ok::<(), ComfortError>(())
//! ```

use thiserror_no_std::Error;

/// Result type for comfort operations
pub type ComfortResult<T> = Result<T, ComfortError>;

/// Top-level error for everything the comfort engine can reject
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ComfortError {
    /// The comfort envelope is geometrically invalid
    #[error("Configuration error: {0}")]
    Configuration(ConfigurationError),

    /// Persisted profile image could not be read or written
    #[error("Serialization error: {0}")]
    Serialization(SerializationError),

    /// A quantity was requested before the readings it depends on
    #[error("No {quantity} recorded yet")]
    UninitializedState {
        /// Name of the missing reading
        quantity: &'static str,
    },

    /// Sensor value is NaN, infinite or outside its physical range
    #[error("Invalid reading: {value}")]
    InvalidReading {
        /// The rejected value
        value: f32,
    },
}

/// Problems with the shape of a comfort envelope
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    /// Two control points coincide, so no line passes through them
    #[error("degenerate line between identical control points")]
    DegenerateLine,

    /// Hot boundary is not strictly above the cold boundary
    #[error("hot boundary below cold boundary at control point {index}")]
    InvertedEnvelope {
        /// Control point index where the envelope inverts
        index: usize,
    },

    /// Control points are not in strictly increasing humidity order
    #[error("control point {index} is out of humidity order")]
    UnorderedPoints {
        /// Index of the first point that breaks the ordering
        index: usize,
    },

    /// Dry/humid thresholds are not an increasing pair inside 0-100%
    #[error("invalid humidity band [{dry}, {humid}]")]
    InvalidHumidityBand {
        /// Dry threshold (%RH)
        dry: f32,
        /// Humid threshold (%RH)
        humid: f32,
    },

    /// Control point humidity lies outside 0-100%
    #[error("control point {index} humidity {humidity} outside 0-100%")]
    HumidityOutOfRange {
        /// Index of the offending point
        index: usize,
        /// Its humidity (%RH)
        humidity: f32,
    },

    /// Control point index does not exist
    #[error("control point index {index} out of range")]
    PointIndexOutOfRange {
        /// Requested index
        index: usize,
    },

    /// A coordinate or threshold is NaN or infinite
    #[error("non-finite value in profile")]
    NonFiniteValue,
}

/// Failures at the byte-buffer persistence boundary
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationError {
    /// Input image is not exactly the serialized profile size
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Fixed serialized size
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Destination buffer cannot hold the serialized profile
    #[error("buffer holds {available} bytes, need {required}")]
    BufferTooSmall {
        /// Fixed serialized size
        required: usize,
        /// Capacity that was supplied
        available: usize,
    },

    /// Image has the right length but does not decode
    #[error("profile image does not decode")]
    Decode,

    /// Codec refused to encode the profile
    #[error("profile could not be encoded")]
    Encode,

    /// Storage slot has never been written
    #[error("no profile stored")]
    Empty,
}

impl From<ConfigurationError> for ComfortError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl From<SerializationError> for ComfortError {
    fn from(err: SerializationError) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ComfortError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Configuration(err) =>
                defmt::write!(fmt, "Configuration: {}", err),
            Self::Serialization(err) =>
                defmt::write!(fmt, "Serialization: {}", err),
            Self::UninitializedState { quantity } =>
                defmt::write!(fmt, "No {} recorded", quantity),
            Self::InvalidReading { value } =>
                defmt::write!(fmt, "Invalid reading {}", value),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigurationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::DegenerateLine =>
                defmt::write!(fmt, "degenerate line"),
            Self::InvertedEnvelope { index } =>
                defmt::write!(fmt, "inverted envelope at {}", index),
            Self::UnorderedPoints { index } =>
                defmt::write!(fmt, "unordered point {}", index),
            Self::InvalidHumidityBand { dry, humid } =>
                defmt::write!(fmt, "humidity band [{}, {}]", dry, humid),
            Self::HumidityOutOfRange { index, humidity } =>
                defmt::write!(fmt, "point {} humidity {} out of range", index, humidity),
            Self::PointIndexOutOfRange { index } =>
                defmt::write!(fmt, "point {} out of range", index),
            Self::NonFiniteValue =>
                defmt::write!(fmt, "non-finite value"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SerializationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::LengthMismatch { expected, actual } =>
                defmt::write!(fmt, "expected {} bytes, got {}", expected, actual),
            Self::BufferTooSmall { required, available } =>
                defmt::write!(fmt, "need {} bytes, have {}", required, available),
            Self::Decode => defmt::write!(fmt, "decode failed"),
            Self::Encode => defmt::write!(fmt, "encode failed"),
            Self::Empty => defmt::write!(fmt, "empty"),
        }
    }
}
