//! Comfort Façade
//!
//! [`Comfort`] is the entry point for sensor data. It keeps the latest
//! temperature/humidity pair and pressure, owns one [`ComfortProfile`], and
//! answers derived questions from the latest values.
//!
//! ```text
//!  sensor ──► on_new_temp_and_humidity
//!                       │
//!                       ▼
//!               ComfortProfile (last measurement) ──► comfort() / set_user_temperature()
//!                       │                        └──► dew_point() / heat_index_us() / humindex_canada()
//!                       ▼
//!               ProfileStore (persist / restore)
//! ```
//!
//! The profile holds the only copy of the latest temperature/humidity, so
//! classification and the derived quantities always see the same sample,
//! including one recorded through [`Comfort::comfort_profile_mut`].
//! Nothing is computed on arrival; every query works on whatever was
//! recorded last, and fails with `UninitializedState` before the first
//! reading.

use crate::{
    errors::{ComfortError, ComfortResult},
    formulas::{self, DewPointAlgorithm},
    geometry::ComfortPoint,
    profile::{check_humidity, check_temperature, Adaptation, ComfortProfile, PROFILE_SERIALIZED_LEN},
    state::ComfortReading,
    traits::ProfileStore,
    units::{convert_pressure, PressureUnit},
};

/// Latest readings plus the user's comfort profile
#[derive(Debug, Clone, PartialEq)]
pub struct Comfort {
    profile: ComfortProfile,
    pressure_mbar: Option<f32>,
    dew_point_algorithm: DewPointAlgorithm,
}

impl Default for Comfort {
    fn default() -> Self {
        Self::with_profile(ComfortProfile::default())
    }
}

impl Comfort {
    /// Façade with the factory profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Façade around an existing profile
    pub fn with_profile(profile: ComfortProfile) -> Self {
        Self {
            profile,
            pressure_mbar: None,
            dew_point_algorithm: DewPointAlgorithm::default(),
        }
    }

    /// Select the dew point algorithm used by [`Self::dew_point`] and
    /// [`Self::humindex_canada`]
    pub fn with_dew_point_algorithm(mut self, algorithm: DewPointAlgorithm) -> Self {
        self.dew_point_algorithm = algorithm;
        self
    }

    /// Active dew point algorithm
    pub fn dew_point_algorithm(&self) -> DewPointAlgorithm {
        self.dew_point_algorithm
    }

    /// Record a temperature (°C) and relative humidity (%RH) pair
    ///
    /// Both values are checked before anything is stored, so a rejected
    /// pair leaves the previous reading in place.
    pub fn on_new_temp_and_humidity(&mut self, temperature: f32, humidity: f32) -> ComfortResult<()> {
        check_temperature(temperature)?;
        check_humidity(humidity)?;

        self.profile.on_new_temperature(temperature)?;
        self.profile.on_new_humidity(humidity)
    }

    /// Record a barometric pressure (mbar)
    pub fn on_new_pressure(&mut self, pressure_mbar: f32) -> ComfortResult<()> {
        if !pressure_mbar.is_finite() || pressure_mbar <= 0.0 {
            return Err(ComfortError::InvalidReading { value: pressure_mbar });
        }
        self.pressure_mbar = Some(pressure_mbar);
        Ok(())
    }

    /// Latest temperature/humidity pair
    pub fn last_reading(&self) -> Option<ComfortPoint> {
        self.profile.last_measurement()
    }

    fn require_reading(&self) -> ComfortResult<ComfortPoint> {
        self.last_reading()
            .ok_or(ComfortError::UninitializedState { quantity: "temperature and humidity" })
    }

    /// Dew point (°C) of the latest reading
    pub fn dew_point(&self) -> ComfortResult<f32> {
        let reading = self.require_reading()?;
        formulas::dew_point(reading.temperature, reading.humidity, self.dew_point_algorithm)
    }

    /// US heat index (°C) of the latest reading
    pub fn heat_index_us(&self) -> ComfortResult<f32> {
        let reading = self.require_reading()?;
        formulas::heat_index_us(reading.temperature, reading.humidity)
    }

    /// Canadian humidex (°C) of the latest reading
    pub fn humindex_canada(&self) -> ComfortResult<f32> {
        let reading = self.require_reading()?;
        let dew_point = self.dew_point()?;
        Ok(formulas::humindex_canada(reading.temperature, dew_point))
    }

    /// Latest pressure in `unit`
    pub fn pressure(&self, unit: PressureUnit) -> ComfortResult<f32> {
        let mbar = self
            .pressure_mbar
            .ok_or(ComfortError::UninitializedState { quantity: "pressure" })?;
        Ok(convert_pressure(mbar, PressureUnit::MilliBar, unit))
    }

    /// Classify the latest reading against the profile
    pub fn comfort(&self) -> ComfortResult<ComfortReading> {
        self.profile.comfort()
    }

    /// Adapt the profile to a temperature the user finds comfortable at the
    /// latest humidity
    pub fn set_user_temperature(&mut self, temperature: f32) -> ComfortResult<Option<Adaptation>> {
        self.profile.set_user_temperature(temperature)
    }

    /// Read access to the profile
    pub fn comfort_profile(&self) -> &ComfortProfile {
        &self.profile
    }

    /// Write access to the profile
    pub fn comfort_profile_mut(&mut self) -> &mut ComfortProfile {
        &mut self.profile
    }

    /// Save the profile image to `store`
    pub fn persist_profile<S: ProfileStore>(&self, store: &mut S) -> ComfortResult<()> {
        let bytes = self.profile.to_bytes()?;
        store.write(&bytes)
    }

    /// Replace the profile envelope with the image held by `store`
    ///
    /// The latest reading survives. On error the profile is unchanged.
    pub fn restore_profile<S: ProfileStore>(&mut self, store: &mut S) -> ComfortResult<()> {
        let mut bytes = [0u8; PROFILE_SERIALIZED_LEN];
        let len = store.read(&mut bytes)?;
        self.profile.load_into(&bytes[..len])
    }
}
