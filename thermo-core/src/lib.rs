//! Thermal comfort engine for thermo
//!
//! Classifies temperature/humidity readings against a user comfort envelope
//! and adapts that envelope from user feedback. Designed for sensor nodes
//! with limited resources.
//!
//! Key constraints:
//! - No heap allocation (fixed-size arrays, `no_std` capable)
//! - Fixed-size profile image for flash/EEPROM persistence
//! - Classification is O(N) in the number of control points
//!
//! ```rust
//! use thermo_core::{Comfort, ComfortState};
//!
//! let mut comfort = Comfort::new();
//! comfort.on_new_temp_and_humidity(30.0, 50.0)?;
//!
//! let reading = comfort.comfort()?;
//! assert_eq!(reading.state, ComfortState::TOO_HOT);
//! assert!(reading.percent > 0.0);
//!
//! let dew_point = comfort.dew_point()?;
//! assert!(dew_point < 30.0);
//! # Ok::<(), thermo_core::ComfortError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod comfort;
pub mod constants;
pub mod errors;
pub mod formulas;
pub mod geometry;
pub mod lookup;
pub mod profile;
pub mod state;
pub mod traits;
pub mod units;

// Public API
pub use comfort::Comfort;
pub use errors::{ComfortError, ComfortResult, ConfigurationError, SerializationError};
pub use formulas::DewPointAlgorithm;
pub use geometry::{ComfortLine, ComfortPoint};
pub use profile::{Adaptation, Boundary, ComfortProfile, RamStore, PROFILE_SERIALIZED_LEN};
pub use state::{ComfortReading, ComfortState};
pub use traits::ProfileStore;
pub use units::PressureUnit;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
