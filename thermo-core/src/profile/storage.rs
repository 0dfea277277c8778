//! Profile Persistence
//!
//! ## Image Layout
//!
//! A profile is stored as a fixed-size postcard image of its control
//! points and humidity band. Cached lines are rebuilt on load and the last
//! measurement is never stored.
//!
//! ```text
//! offset  size  field
//! 0       40    hot_points   [humidity, temperature] × 5, f32 LE
//! 40      40    cold_points  [humidity, temperature] × 5, f32 LE
//! 80      4     dry_line     f32 LE
//! 84      4     humid_line   f32 LE
//! ```
//!
//! postcard writes `f32` as its four little-endian bytes and fixed arrays
//! without a length prefix, so the image size never varies.
//!
//! ## Loading
//!
//! The input length is checked before decoding, and the decoded envelope
//! goes through the same validation as a hand-built one. A failed load
//! never touches the target profile.

use serde::{Deserialize, Serialize};

use super::ComfortProfile;
use crate::{
    constants::comfort::{COMFORT_CTRL_LINES, COMFORT_CTRL_POINTS},
    errors::{ComfortResult, SerializationError},
    geometry::{ComfortLine, ComfortPoint},
    traits::ProfileStore,
};

/// Size of a saved profile in bytes
pub const PROFILE_SERIALIZED_LEN: usize =
    (4 * COMFORT_CTRL_POINTS + 2) * core::mem::size_of::<f32>();

/// On-storage form of a profile
#[derive(Serialize, Deserialize)]
struct ProfileImage {
    hot_points: [ComfortPoint; COMFORT_CTRL_POINTS],
    cold_points: [ComfortPoint; COMFORT_CTRL_POINTS],
    dry_line: f32,
    humid_line: f32,
}

impl ComfortProfile {
    /// Write the profile image into `buf`, returning the bytes written
    pub fn save(&self, buf: &mut [u8]) -> ComfortResult<usize> {
        if buf.len() < PROFILE_SERIALIZED_LEN {
            return Err(SerializationError::BufferTooSmall {
                required: PROFILE_SERIALIZED_LEN,
                available: buf.len(),
            }
            .into());
        }

        let image = ProfileImage {
            hot_points: self.hot_points,
            cold_points: self.cold_points,
            dry_line: self.dry_line,
            humid_line: self.humid_line,
        };
        let written = postcard::to_slice(&image, buf)
            .map_err(|_| SerializationError::Encode)?
            .len();
        if written != PROFILE_SERIALIZED_LEN {
            return Err(SerializationError::Encode.into());
        }

        log_debug!("Saved comfort profile ({} bytes)", written);
        Ok(written)
    }

    /// Profile image as an owned array
    pub fn to_bytes(&self) -> ComfortResult<[u8; PROFILE_SERIALIZED_LEN]> {
        let mut bytes = [0u8; PROFILE_SERIALIZED_LEN];
        self.save(&mut bytes)?;
        Ok(bytes)
    }

    /// Decode and validate a profile image
    ///
    /// The result has no recorded measurement.
    pub fn load(bytes: &[u8]) -> ComfortResult<Self> {
        if bytes.len() != PROFILE_SERIALIZED_LEN {
            return Err(SerializationError::LengthMismatch {
                expected: PROFILE_SERIALIZED_LEN,
                actual: bytes.len(),
            }
            .into());
        }

        let image: ProfileImage =
            postcard::from_bytes(bytes).map_err(|_| SerializationError::Decode)?;

        let mut profile = ComfortProfile {
            hot_points: image.hot_points,
            hot_lines: [ComfortLine::default(); COMFORT_CTRL_LINES],
            cold_points: image.cold_points,
            cold_lines: [ComfortLine::default(); COMFORT_CTRL_LINES],
            dry_line: image.dry_line,
            humid_line: image.humid_line,
            last_temperature: None,
            last_humidity: None,
        };
        if let Err(err) = profile.validate() {
            log_warn!("Stored comfort profile rejected: {}", err);
            return Err(err);
        }
        profile.init_comfort_lines();
        log_debug!("Loaded comfort profile");
        Ok(profile)
    }

    /// Replace this profile's envelope with a decoded image
    ///
    /// The last recorded measurement survives. On error `self` is unchanged.
    pub fn load_into(&mut self, bytes: &[u8]) -> ComfortResult<()> {
        let mut loaded = Self::load(bytes)?;
        loaded.last_temperature = self.last_temperature;
        loaded.last_humidity = self.last_humidity;
        *self = loaded;
        Ok(())
    }
}

/// In-memory store holding one profile image
///
/// Useful for tests and for targets that keep the profile in battery-backed
/// RAM.
#[derive(Debug, Clone)]
pub struct RamStore {
    data: [u8; PROFILE_SERIALIZED_LEN],
    len: usize,
}

impl RamStore {
    /// Empty store
    pub const fn new() -> Self {
        Self { data: [0; PROFILE_SERIALIZED_LEN], len: 0 }
    }

    /// Nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw stored bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl Default for RamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore for RamStore {
    fn read(&mut self, buf: &mut [u8]) -> ComfortResult<usize> {
        if self.len == 0 {
            return Err(SerializationError::Empty.into());
        }
        if buf.len() < self.len {
            return Err(SerializationError::BufferTooSmall {
                required: self.len,
                available: buf.len(),
            }
            .into());
        }
        buf[..self.len].copy_from_slice(&self.data[..self.len]);
        Ok(self.len)
    }

    fn write(&mut self, bytes: &[u8]) -> ComfortResult<()> {
        if bytes.len() > self.data.len() {
            return Err(SerializationError::BufferTooSmall {
                required: bytes.len(),
                available: self.data.len(),
            }
            .into());
        }
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
        Ok(())
    }
}
