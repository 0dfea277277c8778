//! Comfort State Flags
//!
//! Classification answers two independent questions: is the temperature
//! outside the envelope, and is the humidity outside the dry/humid band.
//! Each answer is a flag; the state is their union.
//!
//! ```text
//! bit 0  TOO_HOT     ┐ temperature axis (mutually exclusive)
//! bit 1  TOO_COLD    ┘
//! bit 2  TOO_DRY     ┐ humidity axis (mutually exclusive)
//! bit 3  TOO_HUMID   ┘
//! ```
//!
//! ```rust
//! use thermo_core::ComfortState;
//!
//! let state = ComfortState::TOO_HOT | ComfortState::TOO_DRY;
//! assert_eq!(state, ComfortState::HOT_AND_DRY);
//! assert!(state.contains(ComfortState::TOO_HOT));
//! assert!(!state.is_ok());
//! ```

use core::ops::{BitOr, BitOrAssign};

/// Set of comfort violations, kept in one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComfortState(u8);

impl ComfortState {
    /// Inside the envelope and the humidity band
    pub const OK: Self = Self(0);
    /// Above the hot boundary
    pub const TOO_HOT: Self = Self(1);
    /// Below the cold boundary
    pub const TOO_COLD: Self = Self(2);
    /// Below the dry line
    pub const TOO_DRY: Self = Self(4);
    /// Above the humid line
    pub const TOO_HUMID: Self = Self(8);

    /// Hot and dry
    pub const HOT_AND_DRY: Self = Self(Self::TOO_HOT.0 | Self::TOO_DRY.0);
    /// Cold and dry
    pub const COLD_AND_DRY: Self = Self(Self::TOO_COLD.0 | Self::TOO_DRY.0);
    /// Hot and humid
    pub const HOT_AND_HUMID: Self = Self(Self::TOO_HOT.0 | Self::TOO_HUMID.0);
    /// Cold and humid
    pub const COLD_AND_HUMID: Self = Self(Self::TOO_COLD.0 | Self::TOO_HUMID.0);

    const ALL: u8 = 0x0F;

    /// Raw flag bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Rebuild a state from raw bits, rejecting unknown bits
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// No flag set
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Every flag of `other` is set in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// A temperature-axis flag is set
    pub const fn has_temperature_violation(self) -> bool {
        self.0 & (Self::TOO_HOT.0 | Self::TOO_COLD.0) != 0
    }

    /// A humidity-axis flag is set
    pub const fn has_humidity_violation(self) -> bool {
        self.0 & (Self::TOO_DRY.0 | Self::TOO_HUMID.0) != 0
    }

    /// Short label for displays and logs
    pub fn description(self) -> &'static str {
        match self.0 {
            0 => "OK",
            1 => "TooHot",
            2 => "TooCold",
            4 => "TooDry",
            8 => "TooHumid",
            5 => "HotAndDry",
            6 => "ColdAndDry",
            9 => "HotAndHumid",
            10 => "ColdAndHumid",
            _ => "Inconsistent",
        }
    }
}

impl BitOr for ComfortState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ComfortState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Result of a classification: which limits are violated and how badly
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComfortReading {
    /// Violated limits
    pub state: ComfortState,
    /// Severity of the worst reported axis, 0-100
    ///
    /// Temperature takes precedence when both axes are violated.
    pub percent: f32,
}

impl ComfortReading {
    /// Reading with no violation
    pub const fn ok() -> Self {
        Self { state: ComfortState::OK, percent: 0.0 }
    }

    /// Shortcut for `self.state.is_ok()`
    pub const fn is_ok(&self) -> bool {
        self.state.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composites_match_flags() {
        assert_eq!(ComfortState::HOT_AND_DRY.bits(), 5);
        assert_eq!(ComfortState::COLD_AND_DRY.bits(), 6);
        assert_eq!(ComfortState::HOT_AND_HUMID.bits(), 9);
        assert_eq!(ComfortState::COLD_AND_HUMID.bits(), 10);
    }

    #[test]
    fn union_accumulates() {
        let mut state = ComfortState::OK;
        assert!(state.is_ok());

        state |= ComfortState::TOO_COLD;
        state |= ComfortState::TOO_HUMID;
        assert_eq!(state, ComfortState::COLD_AND_HUMID);
        assert!(state.has_temperature_violation());
        assert!(state.has_humidity_violation());
        assert_eq!(state.description(), "ColdAndHumid");
    }

    #[test]
    fn unknown_bits_rejected() {
        assert_eq!(ComfortState::from_bits(0x10), None);
        assert_eq!(ComfortState::from_bits(4), Some(ComfortState::TOO_DRY));
    }

    #[test]
    fn ok_contains_nothing_but_ok() {
        assert!(ComfortState::OK.contains(ComfortState::OK));
        assert!(!ComfortState::OK.contains(ComfortState::TOO_HOT));
    }

    #[test]
    fn ok_reading_is_default() {
        let reading = ComfortReading::ok();
        assert!(reading.is_ok());
        assert_eq!(reading.percent, 0.0);
        assert_eq!(reading, ComfortReading::default());
    }
}
