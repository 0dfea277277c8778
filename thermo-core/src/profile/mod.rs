//! Comfort Profile: the Piecewise-Linear Comfort Envelope
//!
//! ## Model
//!
//! The profile owns two polylines in the humidity/temperature plane:
//!
//! ```text
//!   °C            hot_points[0..N]
//!    │  ●────────●────────●────────●────────●      ← too hot above
//!    │
//!    │              comfortable
//!    │
//!    │  ●────────●────────●────────●────────●      ← too cold below
//!    │            cold_points[0..N]
//!    └──────┬─────────────────────┬──────────── %RH
//!       dry_line              humid_line
//! ```
//!
//! Each polyline has `COMFORT_CTRL_POINTS` control points in strictly
//! increasing humidity order and `COMFORT_CTRL_POINTS - 1` derived lines.
//! Lines are cached in implicit form and are always derivable from the
//! points; they are never persisted.
//!
//! ## Classification
//!
//! 1. Find the segment whose humidity range brackets the sample. Samples
//!    outside the control range use the first/last segment, extended.
//! 2. Distance above the hot line > 0 → too hot. Otherwise distance below
//!    the cold line > 0 → too cold. A sample exactly on a line is OK.
//! 3. Humidity below `dry_line` → too dry, above `humid_line` → too humid.
//! 4. Percent: temperature excess relative to the envelope width at that
//!    humidity, or the humidity excess relative to the rest of the scale
//!    when only humidity is violated.
//!
//! ## Adaptation
//!
//! [`ComfortProfile::set_user_temperature`] takes a temperature the user
//! finds comfortable at the current humidity. Above the profile's average
//! temperature it moves the nearest hot point, below it the nearest cold
//! point. Only the 1-2 lines touching the moved point are rebuilt.
//!
//! ```rust
//! use thermo_core::{ComfortProfile, ComfortState};
//!
//! let mut profile = ComfortProfile::default();
//! profile.on_new_humidity(50.0)?;
//! profile.on_new_temperature(30.0)?;
//! assert_eq!(profile.comfort()?.state, ComfortState::TOO_HOT);
//!
//! // The user says 30°C is fine: the hot boundary moves up
//! profile.set_user_temperature(30.0)?;
//! assert!(profile.comfort()?.is_ok());
//! # Ok::<(), thermo_core::ComfortError>(())
//! ```

pub mod storage;

use heapless::Vec;

use crate::{
    constants::comfort::{
        COMFORT_CTRL_LINES, COMFORT_CTRL_POINTS, COMFORT_PERCENT_MAX, COMFORT_TEMP_SATURATION_C,
        DEFAULT_COLD_TEMPERATURES, DEFAULT_CONTROL_HUMIDITIES, DEFAULT_DRY_LINE_PCT,
        DEFAULT_HOT_TEMPERATURES, DEFAULT_HUMID_LINE_PCT, WINTER_COLD_TEMPERATURES,
        WINTER_HOT_TEMPERATURES,
    },
    errors::{ComfortError, ComfortResult, ConfigurationError},
    geometry::{ComfortLine, ComfortPoint},
    state::{ComfortReading, ComfortState},
};

pub use storage::{RamStore, PROFILE_SERIALIZED_LEN};

/// Which polyline of the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Boundary {
    /// Upper boundary: maximum comfortable temperature
    Hot,
    /// Lower boundary: minimum comfortable temperature
    Cold,
}

/// Record of one control point moved by user feedback
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Adaptation {
    /// Polyline that moved
    pub boundary: Boundary,
    /// Control point index on that polyline
    pub index: usize,
    /// Temperature before the change (°C)
    pub previous: f32,
    /// Temperature after the change (°C)
    pub current: f32,
}

/// User comfort envelope plus the last sensor measurement
#[derive(Debug, Clone, PartialEq)]
pub struct ComfortProfile {
    hot_points: [ComfortPoint; COMFORT_CTRL_POINTS],
    hot_lines: [ComfortLine; COMFORT_CTRL_LINES],
    cold_points: [ComfortPoint; COMFORT_CTRL_POINTS],
    cold_lines: [ComfortLine; COMFORT_CTRL_LINES],
    dry_line: f32,
    humid_line: f32,
    last_temperature: Option<f32>,
    last_humidity: Option<f32>,
}

impl Default for ComfortProfile {
    /// Factory summer envelope
    fn default() -> Self {
        Self::from_tables(&DEFAULT_HOT_TEMPERATURES, &DEFAULT_COLD_TEMPERATURES)
    }
}

impl ComfortProfile {
    /// Profile with a custom envelope
    ///
    /// Rejects envelopes with unordered or coincident points, control
    /// humidities outside 0-100%, an inverted hot/cold pair, or an invalid
    /// humidity band.
    pub fn new_with_envelope(
        hot_points: [ComfortPoint; COMFORT_CTRL_POINTS],
        cold_points: [ComfortPoint; COMFORT_CTRL_POINTS],
        dry_line: f32,
        humid_line: f32,
    ) -> ComfortResult<Self> {
        let mut profile = Self {
            hot_points,
            hot_lines: [ComfortLine::default(); COMFORT_CTRL_LINES],
            cold_points,
            cold_lines: [ComfortLine::default(); COMFORT_CTRL_LINES],
            dry_line,
            humid_line,
            last_temperature: None,
            last_humidity: None,
        };
        profile.validate()?;
        profile.init_comfort_lines();
        Ok(profile)
    }

    /// Factory winter envelope (narrower, cooler ceiling)
    pub fn winter() -> Self {
        Self::from_tables(&WINTER_HOT_TEMPERATURES, &WINTER_COLD_TEMPERATURES)
    }

    /// Build from the factory tables, which share `DEFAULT_CONTROL_HUMIDITIES`
    fn from_tables(
        hot: &[f32; COMFORT_CTRL_POINTS],
        cold: &[f32; COMFORT_CTRL_POINTS],
    ) -> Self {
        let mut profile = Self {
            hot_points: [ComfortPoint::default(); COMFORT_CTRL_POINTS],
            hot_lines: [ComfortLine::default(); COMFORT_CTRL_LINES],
            cold_points: [ComfortPoint::default(); COMFORT_CTRL_POINTS],
            cold_lines: [ComfortLine::default(); COMFORT_CTRL_LINES],
            dry_line: DEFAULT_DRY_LINE_PCT,
            humid_line: DEFAULT_HUMID_LINE_PCT,
            last_temperature: None,
            last_humidity: None,
        };
        for (i, humidity) in DEFAULT_CONTROL_HUMIDITIES.iter().enumerate() {
            profile.hot_points[i] = ComfortPoint::new(*humidity, hot[i]);
            profile.cold_points[i] = ComfortPoint::new(*humidity, cold[i]);
        }
        profile.init_comfort_lines();
        profile
    }

    // ===== Envelope accessors =====

    /// Control points of the hot boundary
    pub fn hot_points(&self) -> &[ComfortPoint; COMFORT_CTRL_POINTS] {
        &self.hot_points
    }

    /// Control points of the cold boundary
    pub fn cold_points(&self) -> &[ComfortPoint; COMFORT_CTRL_POINTS] {
        &self.cold_points
    }

    /// Cached lines of the hot boundary
    pub fn hot_lines(&self) -> &[ComfortLine; COMFORT_CTRL_LINES] {
        &self.hot_lines
    }

    /// Cached lines of the cold boundary
    pub fn cold_lines(&self) -> &[ComfortLine; COMFORT_CTRL_LINES] {
        &self.cold_lines
    }

    /// Control points of either boundary
    pub fn points(&self, boundary: Boundary) -> &[ComfortPoint; COMFORT_CTRL_POINTS] {
        match boundary {
            Boundary::Hot => &self.hot_points,
            Boundary::Cold => &self.cold_points,
        }
    }

    /// Cached lines of either boundary
    pub fn lines(&self, boundary: Boundary) -> &[ComfortLine; COMFORT_CTRL_LINES] {
        match boundary {
            Boundary::Hot => &self.hot_lines,
            Boundary::Cold => &self.cold_lines,
        }
    }

    /// Humidity below which air is too dry (%RH)
    pub fn dry_line(&self) -> f32 {
        self.dry_line
    }

    /// Humidity above which air is too humid (%RH)
    pub fn humid_line(&self) -> f32 {
        self.humid_line
    }

    /// Replace the dry/humid thresholds
    pub fn set_humidity_band(&mut self, dry_line: f32, humid_line: f32) -> ComfortResult<()> {
        check_humidity_band(dry_line, humid_line)?;
        self.dry_line = dry_line;
        self.humid_line = humid_line;
        Ok(())
    }

    // ===== Line maintenance =====

    /// Rebuild every cached line from the control points
    pub fn init_comfort_lines(&mut self) {
        for i in 0..COMFORT_CTRL_LINES {
            self.hot_lines[i] = segment_line(&self.hot_points, i);
            self.cold_lines[i] = segment_line(&self.cold_points, i);
        }
    }

    /// Rebuild only the lines touching control point `index` of `boundary`
    pub fn refresh_comfort_line(&mut self, boundary: Boundary, index: usize) -> ComfortResult<()> {
        let incident = incident_lines(index)?;
        let (points, lines) = match boundary {
            Boundary::Hot => (&self.hot_points, &mut self.hot_lines),
            Boundary::Cold => (&self.cold_points, &mut self.cold_lines),
        };
        for line in incident {
            lines[line] = segment_line(points, line);
        }
        Ok(())
    }

    /// Check every envelope invariant
    ///
    /// - all coordinates and thresholds are finite
    /// - `0 <= dry_line < humid_line <= 100`
    /// - each polyline is in strictly increasing humidity order
    /// - every segment is a proper line
    /// - hot boundary strictly above cold boundary at every control humidity
    pub fn validate(&self) -> ComfortResult<()> {
        check_humidity_band(self.dry_line, self.humid_line)?;
        check_polyline(&self.hot_points)?;
        check_polyline(&self.cold_points)?;
        check_envelope(&self.hot_points, &self.cold_points)
    }

    // ===== Sensor input =====

    /// Record a new temperature (°C)
    pub fn on_new_temperature(&mut self, temperature: f32) -> ComfortResult<()> {
        check_temperature(temperature)?;
        self.last_temperature = Some(temperature);
        Ok(())
    }

    /// Record a new relative humidity (%RH)
    pub fn on_new_humidity(&mut self, humidity: f32) -> ComfortResult<()> {
        check_humidity(humidity)?;
        self.last_humidity = Some(humidity);
        Ok(())
    }

    /// Last recorded temperature
    pub fn last_temperature(&self) -> Option<f32> {
        self.last_temperature
    }

    /// Last recorded humidity
    pub fn last_humidity(&self) -> Option<f32> {
        self.last_humidity
    }

    /// Last measurement as a point, once both values have been recorded
    pub fn last_measurement(&self) -> Option<ComfortPoint> {
        Some(ComfortPoint::new(self.last_humidity?, self.last_temperature?))
    }

    fn require_temperature(&self) -> ComfortResult<f32> {
        self.last_temperature
            .ok_or(ComfortError::UninitializedState { quantity: "temperature" })
    }

    fn require_humidity(&self) -> ComfortResult<f32> {
        self.last_humidity
            .ok_or(ComfortError::UninitializedState { quantity: "humidity" })
    }

    fn require_measurement(&self) -> ComfortResult<ComfortPoint> {
        let humidity = self.require_humidity()?;
        let temperature = self.require_temperature()?;
        Ok(ComfortPoint::new(humidity, temperature))
    }

    // ===== Queries =====

    /// Temperature of a boundary at `humidity`
    ///
    /// Exact control-point temperature at a control humidity, interpolated
    /// (or extrapolated) along the cached lines elsewhere.
    pub fn boundary_temperature(&self, boundary: Boundary, humidity: f32) -> ComfortResult<f32> {
        check_humidity(humidity)?;
        let points = self.points(boundary);
        if let Some(point) = points.iter().find(|p| p.humidity == humidity) {
            return Ok(point.temperature);
        }
        self.lines(boundary)[bracket(points, humidity)].temperature_at(humidity)
    }

    /// Midpoint between the hot and cold boundaries at `humidity` (°C)
    ///
    /// The profile's ideal temperature for that humidity.
    pub fn average_profile_temperature(&self, humidity: f32) -> ComfortResult<f32> {
        let hot = self.boundary_temperature(Boundary::Hot, humidity)?;
        let cold = self.boundary_temperature(Boundary::Cold, humidity)?;
        Ok((hot + cold) / 2.0)
    }

    /// Comfortable temperature at `humidity`, same as
    /// [`Self::average_profile_temperature`]
    pub fn comfort_temperature(&self, humidity: f32) -> ComfortResult<f32> {
        self.average_profile_temperature(humidity)
    }

    /// Classify an explicit sample
    pub fn classify(&self, sample: ComfortPoint) -> ComfortResult<ComfortReading> {
        check_humidity(sample.humidity)?;
        check_temperature(sample.temperature)?;

        let mut state = ComfortState::OK;
        let mut temperature_percent = 0.0;

        let hot_line = &self.hot_lines[bracket(&self.hot_points, sample.humidity)];
        let excess = hot_line.height_above(sample)?;
        if excess > 0.0 {
            state |= ComfortState::TOO_HOT;
            temperature_percent = self.temperature_percent(excess, sample.humidity)?;
        } else {
            let cold_line = &self.cold_lines[bracket(&self.cold_points, sample.humidity)];
            let deficit = -cold_line.height_above(sample)?;
            if deficit > 0.0 {
                state |= ComfortState::TOO_COLD;
                temperature_percent = self.temperature_percent(deficit, sample.humidity)?;
            }
        }

        let mut humidity_percent = 0.0;
        if sample.humidity < self.dry_line {
            state |= ComfortState::TOO_DRY;
            humidity_percent = scale_percent(self.dry_line - sample.humidity, self.dry_line);
        } else if sample.humidity > self.humid_line {
            state |= ComfortState::TOO_HUMID;
            humidity_percent =
                scale_percent(sample.humidity - self.humid_line, 100.0 - self.humid_line);
        }

        // Temperature axis wins when both are violated
        let percent = if state.has_temperature_violation() {
            temperature_percent
        } else {
            humidity_percent
        };

        if state.is_ok() {
            return Ok(ComfortReading::ok());
        }
        Ok(ComfortReading { state, percent })
    }

    /// Classify the last recorded measurement
    pub fn comfort(&self) -> ComfortResult<ComfortReading> {
        self.classify(self.require_measurement()?)
    }

    /// Last measurement is above the hot boundary
    pub fn is_too_hot(&self) -> ComfortResult<bool> {
        Ok(self.comfort()?.state.contains(ComfortState::TOO_HOT))
    }

    /// Last measurement is below the cold boundary
    pub fn is_too_cold(&self) -> ComfortResult<bool> {
        Ok(self.comfort()?.state.contains(ComfortState::TOO_COLD))
    }

    /// Last humidity is below the dry line
    pub fn is_too_dry(&self) -> ComfortResult<bool> {
        Ok(self.require_humidity()? < self.dry_line)
    }

    /// Last humidity is above the humid line
    pub fn is_too_humid(&self) -> ComfortResult<bool> {
        Ok(self.require_humidity()? > self.humid_line)
    }

    /// Explicit-argument form of [`Self::is_too_hot`]
    pub fn is_too_hot_at(&self, temperature: f32, humidity: f32) -> ComfortResult<bool> {
        let reading = self.classify(ComfortPoint::new(humidity, temperature))?;
        Ok(reading.state.contains(ComfortState::TOO_HOT))
    }

    /// Explicit-argument form of [`Self::is_too_cold`]
    pub fn is_too_cold_at(&self, temperature: f32, humidity: f32) -> ComfortResult<bool> {
        let reading = self.classify(ComfortPoint::new(humidity, temperature))?;
        Ok(reading.state.contains(ComfortState::TOO_COLD))
    }

    /// Explicit-argument form of [`Self::is_too_dry`]
    pub fn is_too_dry_at(&self, humidity: f32) -> ComfortResult<bool> {
        check_humidity(humidity)?;
        Ok(humidity < self.dry_line)
    }

    /// Explicit-argument form of [`Self::is_too_humid`]
    pub fn is_too_humid_at(&self, humidity: f32) -> ComfortResult<bool> {
        check_humidity(humidity)?;
        Ok(humidity > self.humid_line)
    }

    /// Temperature distance as a share of the envelope width
    fn temperature_percent(&self, distance: f32, humidity: f32) -> ComfortResult<f32> {
        let width = self.boundary_temperature(Boundary::Hot, humidity)?
            - self.boundary_temperature(Boundary::Cold, humidity)?;
        let scale = if width > 0.0 { width } else { COMFORT_TEMP_SATURATION_C };
        Ok(scale_percent(distance, scale))
    }

    // ===== Adaptation =====

    /// Adapt the envelope to a temperature the user finds comfortable at
    /// the last recorded humidity
    ///
    /// Returns `None` when the temperature equals the profile average and
    /// nothing moves. A change that would put the hot boundary on or below
    /// the cold boundary is rejected and leaves the profile untouched.
    pub fn set_user_temperature(&mut self, temperature: f32) -> ComfortResult<Option<Adaptation>> {
        check_temperature(temperature)?;
        let humidity = self.require_humidity()?;
        let average = self.average_profile_temperature(humidity)?;

        let boundary = if temperature > average {
            Boundary::Hot
        } else if temperature < average {
            Boundary::Cold
        } else {
            return Ok(None);
        };

        let index = nearest_point(self.points(boundary), humidity);
        let previous = self.points(boundary)[index].temperature;

        let mut moved = *self.points(boundary);
        moved[index].temperature = temperature;
        let checked = match boundary {
            Boundary::Hot => check_envelope(&moved, &self.cold_points),
            Boundary::Cold => check_envelope(&self.hot_points, &moved),
        };
        if let Err(err) = checked {
            log_warn!(
                "Rejected user temperature {} at {}%RH: would invert envelope",
                temperature, humidity
            );
            return Err(err);
        }

        match boundary {
            Boundary::Hot => self.hot_points = moved,
            Boundary::Cold => self.cold_points = moved,
        }
        self.refresh_comfort_line(boundary, index)?;

        log_debug!(
            "Adapted {:?} point {}: {} -> {} (at {}%RH)",
            boundary, index, previous, temperature, humidity
        );

        Ok(Some(Adaptation { boundary, index, previous, current: temperature }))
    }
}

// ===== Polyline helpers =====

/// Segment whose humidity range contains `humidity`
///
/// First match wins on shared endpoints; humidities outside the control
/// range map to the first or last segment.
pub fn bracket(points: &[ComfortPoint; COMFORT_CTRL_POINTS], humidity: f32) -> usize {
    (0..COMFORT_CTRL_LINES)
        .find(|&i| humidity <= points[i + 1].humidity)
        .unwrap_or(COMFORT_CTRL_LINES - 1)
}

/// Control point closest in humidity, lower index on ties
pub fn nearest_point(points: &[ComfortPoint; COMFORT_CTRL_POINTS], humidity: f32) -> usize {
    let mut nearest = 0;
    let mut best = libm::fabsf(points[0].humidity - humidity);
    for (i, point) in points.iter().enumerate().skip(1) {
        let distance = libm::fabsf(point.humidity - humidity);
        if distance < best {
            best = distance;
            nearest = i;
        }
    }
    nearest
}

/// Line indices touching control point `index`: one at the ends, two inside
pub fn incident_lines(index: usize) -> ComfortResult<Vec<usize, 2>> {
    if index >= COMFORT_CTRL_POINTS {
        return Err(ConfigurationError::PointIndexOutOfRange { index }.into());
    }
    let lines = if index == 0 {
        Vec::from_slice(&[0])
    } else if index == COMFORT_CTRL_LINES {
        Vec::from_slice(&[index - 1])
    } else {
        Vec::from_slice(&[index - 1, index])
    };
    lines.map_err(|_| ConfigurationError::PointIndexOutOfRange { index }.into())
}

/// Line of segment `i`; callers guarantee the polyline passed validation
fn segment_line(points: &[ComfortPoint; COMFORT_CTRL_POINTS], i: usize) -> ComfortLine {
    ComfortLine::through(points[i], points[i + 1])
}

/// Temperature of a polyline at `humidity`, computed from the points alone
fn polyline_temperature(points: &[ComfortPoint; COMFORT_CTRL_POINTS], humidity: f32) -> ComfortResult<f32> {
    if let Some(point) = points.iter().find(|p| p.humidity == humidity) {
        return Ok(point.temperature);
    }
    segment_line(points, bracket(points, humidity)).temperature_at(humidity)
}

fn check_polyline(points: &[ComfortPoint; COMFORT_CTRL_POINTS]) -> ComfortResult<()> {
    if points.iter().any(|p| !p.is_finite()) {
        return Err(ConfigurationError::NonFiniteValue.into());
    }
    if let Some(index) = points.iter().position(|p| !(0.0..=100.0).contains(&p.humidity)) {
        return Err(ConfigurationError::HumidityOutOfRange {
            index,
            humidity: points[index].humidity,
        }
        .into());
    }
    for i in 0..COMFORT_CTRL_LINES {
        ComfortLine::from_points(points[i], points[i + 1])?;
        if points[i + 1].humidity <= points[i].humidity {
            return Err(ConfigurationError::UnorderedPoints { index: i + 1 }.into());
        }
    }
    Ok(())
}

/// Hot polyline strictly above cold polyline at every control humidity
fn check_envelope(
    hot: &[ComfortPoint; COMFORT_CTRL_POINTS],
    cold: &[ComfortPoint; COMFORT_CTRL_POINTS],
) -> ComfortResult<()> {
    for index in 0..COMFORT_CTRL_POINTS {
        let inverted = hot[index].temperature <= cold[index].temperature
            || polyline_temperature(hot, cold[index].humidity)? <= cold[index].temperature
            || polyline_temperature(cold, hot[index].humidity)? >= hot[index].temperature;
        if inverted {
            return Err(ConfigurationError::InvertedEnvelope { index }.into());
        }
    }
    Ok(())
}

fn check_humidity_band(dry_line: f32, humid_line: f32) -> ComfortResult<()> {
    let valid = dry_line.is_finite()
        && humid_line.is_finite()
        && dry_line >= 0.0
        && dry_line < humid_line
        && humid_line <= 100.0;
    if valid {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidHumidityBand { dry: dry_line, humid: humid_line }.into())
    }
}

pub(crate) fn check_temperature(temperature: f32) -> ComfortResult<()> {
    if temperature.is_finite() {
        Ok(())
    } else {
        Err(ComfortError::InvalidReading { value: temperature })
    }
}

pub(crate) fn check_humidity(humidity: f32) -> ComfortResult<()> {
    if humidity.is_finite() && (0.0..=100.0).contains(&humidity) {
        Ok(())
    } else {
        Err(ComfortError::InvalidReading { value: humidity })
    }
}

/// `value / scale` as a 0-100 percent; a non-positive scale saturates
fn scale_percent(value: f32, scale: f32) -> f32 {
    if scale <= 0.0 {
        return COMFORT_PERCENT_MAX;
    }
    (value / scale * COMFORT_PERCENT_MAX).clamp(0.0, COMFORT_PERCENT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(profile: &ComfortProfile, humidity: f32, temperature: f32) -> ComfortReading {
        profile.classify(ComfortPoint::new(humidity, temperature)).unwrap()
    }

    #[test]
    fn default_profile_is_valid() {
        assert!(ComfortProfile::default().validate().is_ok());
        assert!(ComfortProfile::winter().validate().is_ok());
    }

    #[test]
    fn default_envelope_at_half_humidity() {
        let profile = ComfortProfile::default();
        assert_eq!(profile.boundary_temperature(Boundary::Hot, 50.0).unwrap(), 28.0);
        assert_eq!(profile.boundary_temperature(Boundary::Cold, 50.0).unwrap(), 18.0);
    }

    #[test]
    fn bracket_picks_first_matching_segment() {
        let points = ComfortProfile::default().hot_points;
        assert_eq!(bracket(&points, 0.0), 0);
        assert_eq!(bracket(&points, 25.0), 0);
        assert_eq!(bracket(&points, 25.1), 1);
        assert_eq!(bracket(&points, 100.0), 3);
    }

    #[test]
    fn bracket_clamps_outside_range() {
        let profile = ComfortProfile::new_with_envelope(
            [
                ComfortPoint::new(20.0, 30.0),
                ComfortPoint::new(35.0, 29.0),
                ComfortPoint::new(50.0, 28.0),
                ComfortPoint::new(65.0, 27.0),
                ComfortPoint::new(80.0, 26.0),
            ],
            [
                ComfortPoint::new(20.0, 20.0),
                ComfortPoint::new(35.0, 19.0),
                ComfortPoint::new(50.0, 18.0),
                ComfortPoint::new(65.0, 17.0),
                ComfortPoint::new(80.0, 16.0),
            ],
            30.0,
            60.0,
        ).unwrap();

        assert_eq!(bracket(profile.hot_points(), 5.0), 0);
        assert_eq!(bracket(profile.hot_points(), 95.0), 3);

        // Extrapolated along the end segments
        let below = profile.boundary_temperature(Boundary::Hot, 5.0).unwrap();
        assert!((below - 31.0).abs() < 1e-4);
        let above = profile.boundary_temperature(Boundary::Cold, 95.0).unwrap();
        assert!((above - 15.0).abs() < 1e-4);
    }

    #[test]
    fn sample_on_boundary_is_ok() {
        let profile = ComfortProfile::default();
        let on_hot = reading(&profile, 50.0, 28.0);
        assert_eq!(on_hot.state, ComfortState::OK);
        assert_eq!(on_hot.percent, 0.0);

        let on_cold = reading(&profile, 50.0, 18.0);
        assert_eq!(on_cold.state, ComfortState::OK);
        assert_eq!(on_cold.percent, 0.0);

        assert_eq!(reading(&profile, 45.0, 23.0), ComfortReading::ok());
    }

    #[test]
    fn hot_sample_reports_percent() {
        let profile = ComfortProfile::default();
        let hot = reading(&profile, 50.0, 30.0);
        assert_eq!(hot.state, ComfortState::TOO_HOT);
        // ~2°C over a 10°C wide envelope
        assert!(hot.percent > 19.0 && hot.percent < 21.0, "percent {}", hot.percent);
    }

    #[test]
    fn cold_sample_reports_percent() {
        let profile = ComfortProfile::default();
        let cold = reading(&profile, 50.0, 13.0);
        assert_eq!(cold.state, ComfortState::TOO_COLD);
        assert!(cold.percent > 49.0 && cold.percent < 51.0, "percent {}", cold.percent);
    }

    #[test]
    fn percent_saturates() {
        let profile = ComfortProfile::default();
        assert_eq!(reading(&profile, 50.0, 60.0).percent, 100.0);
        assert_eq!(reading(&profile, 50.0, -20.0).percent, 100.0);
    }

    #[test]
    fn humidity_axis() {
        let profile = ComfortProfile::default();

        // Comfortable temperature, dry air: 15% below a 30% dry line
        let dry = reading(&profile, 15.0, 24.0);
        assert_eq!(dry.state, ComfortState::TOO_DRY);
        assert!((dry.percent - 50.0).abs() < 1e-3);

        // 80% is half way from the 60% humid line to saturation
        let humid = reading(&profile, 80.0, 22.0);
        assert_eq!(humid.state, ComfortState::TOO_HUMID);
        assert!((humid.percent - 50.0).abs() < 1e-3);

        // Band edges are comfortable
        assert!(reading(&profile, 30.0, 23.0).is_ok());
        assert!(reading(&profile, 60.0, 23.0).is_ok());
    }

    #[test]
    fn combined_flags_prefer_temperature_percent() {
        let profile = ComfortProfile::default();
        let hot_dry = reading(&profile, 10.0, 35.0);
        assert_eq!(hot_dry.state, ComfortState::HOT_AND_DRY);

        let width = profile.boundary_temperature(Boundary::Hot, 10.0).unwrap()
            - profile.boundary_temperature(Boundary::Cold, 10.0).unwrap();
        let excess = profile.hot_lines()[0]
            .height_above(ComfortPoint::new(10.0, 35.0))
            .unwrap();
        assert!((hot_dry.percent - excess / width * 100.0).abs() < 1e-3);

        let cold_humid = reading(&profile, 90.0, 10.0);
        assert_eq!(cold_humid.state, ComfortState::COLD_AND_HUMID);
    }

    #[test]
    fn stateful_queries_need_readings() {
        let mut profile = ComfortProfile::default();
        assert_eq!(
            profile.comfort(),
            Err(ComfortError::UninitializedState { quantity: "humidity" })
        );
        assert!(profile.is_too_dry().is_err());

        profile.on_new_humidity(20.0).unwrap();
        assert_eq!(profile.is_too_dry(), Ok(true));
        assert_eq!(
            profile.is_too_hot(),
            Err(ComfortError::UninitializedState { quantity: "temperature" })
        );

        profile.on_new_temperature(16.0).unwrap();
        assert_eq!(profile.is_too_cold(), Ok(true));
        assert_eq!(profile.is_too_hot(), Ok(false));
        assert_eq!(profile.is_too_humid(), Ok(false));
        assert_eq!(profile.last_measurement(), Some(ComfortPoint::new(20.0, 16.0)));
    }

    #[test]
    fn explicit_and_stateful_forms_agree() {
        let mut profile = ComfortProfile::default();
        profile.on_new_temperature(31.0).unwrap();
        profile.on_new_humidity(70.0).unwrap();

        assert_eq!(profile.is_too_hot().unwrap(), profile.is_too_hot_at(31.0, 70.0).unwrap());
        assert_eq!(profile.is_too_cold().unwrap(), profile.is_too_cold_at(31.0, 70.0).unwrap());
        assert_eq!(profile.is_too_humid().unwrap(), profile.is_too_humid_at(70.0).unwrap());
        assert_eq!(profile.is_too_dry().unwrap(), profile.is_too_dry_at(70.0).unwrap());
        assert_eq!(profile.comfort().unwrap(), reading(&profile, 70.0, 31.0));
    }

    #[test]
    fn invalid_readings_rejected() {
        let mut profile = ComfortProfile::default();
        assert!(profile.on_new_temperature(f32::NAN).is_err());
        assert!(profile.on_new_humidity(-1.0).is_err());
        assert!(profile.on_new_humidity(100.5).is_err());
        assert!(profile.last_temperature().is_none());
        assert!(profile.classify(ComfortPoint::new(50.0, f32::INFINITY)).is_err());
    }

    #[test]
    fn average_at_control_points_is_exact_midpoint() {
        let profile = ComfortProfile::default();
        for i in 0..COMFORT_CTRL_POINTS {
            let humidity = profile.hot_points()[i].humidity;
            let expected =
                (profile.hot_points()[i].temperature + profile.cold_points()[i].temperature) / 2.0;
            assert_eq!(profile.average_profile_temperature(humidity).unwrap(), expected);
            assert_eq!(profile.comfort_temperature(humidity).unwrap(), expected);
        }
    }

    #[test]
    fn average_between_control_points() {
        let profile = ComfortProfile::default();
        // Hot 28.5, cold 18.5 at 37.5%
        let avg = profile.average_profile_temperature(37.5).unwrap();
        assert!((avg - 23.5).abs() < 1e-4);
    }

    #[test]
    fn inverted_envelope_rejected() {
        let mut hot = *ComfortProfile::default().hot_points();
        let cold = *ComfortProfile::default().cold_points();
        hot[2].temperature = 17.0;

        let result = ComfortProfile::new_with_envelope(hot, cold, 30.0, 60.0);
        assert_eq!(
            result,
            Err(ComfortError::Configuration(ConfigurationError::InvertedEnvelope { index: 2 }))
        );
    }

    #[test]
    fn touching_envelope_rejected() {
        let mut hot = *ComfortProfile::default().hot_points();
        let cold = *ComfortProfile::default().cold_points();
        hot[0].temperature = cold[0].temperature;
        assert!(ComfortProfile::new_with_envelope(hot, cold, 30.0, 60.0).is_err());
    }

    #[test]
    fn control_humidity_outside_range_rejected() {
        let mut hot = *ComfortProfile::default().hot_points();
        let mut cold = *ComfortProfile::default().cold_points();
        hot[0].humidity = -50.0;
        cold[0].humidity = -50.0;
        hot[4].humidity = 250.0;
        cold[4].humidity = 250.0;
        assert_eq!(
            ComfortProfile::new_with_envelope(hot, cold, 30.0, 60.0),
            Err(ComfortError::Configuration(ConfigurationError::HumidityOutOfRange {
                index: 0,
                humidity: -50.0,
            }))
        );

        // Ends exactly at 0% and 100% are allowed
        hot[0].humidity = 0.0;
        cold[0].humidity = 0.0;
        assert_eq!(
            ComfortProfile::new_with_envelope(hot, cold, 30.0, 60.0),
            Err(ComfortError::Configuration(ConfigurationError::HumidityOutOfRange {
                index: 4,
                humidity: 250.0,
            }))
        );
        hot[4].humidity = 100.0;
        cold[4].humidity = 100.0;
        assert!(ComfortProfile::new_with_envelope(hot, cold, 30.0, 60.0).is_ok());
    }

    #[test]
    fn unordered_points_rejected() {
        let mut hot = *ComfortProfile::default().hot_points();
        let cold = *ComfortProfile::default().cold_points();
        hot.swap(1, 2);
        assert_eq!(
            ComfortProfile::new_with_envelope(hot, cold, 30.0, 60.0),
            Err(ComfortError::Configuration(ConfigurationError::UnorderedPoints { index: 2 }))
        );
    }

    #[test]
    fn duplicate_points_rejected() {
        let mut hot = *ComfortProfile::default().hot_points();
        let cold = *ComfortProfile::default().cold_points();
        hot[1] = hot[0];
        assert_eq!(
            ComfortProfile::new_with_envelope(hot, cold, 30.0, 60.0),
            Err(ComfortError::Configuration(ConfigurationError::DegenerateLine))
        );
    }

    #[test]
    fn humidity_band_checked() {
        let mut profile = ComfortProfile::default();
        assert!(profile.set_humidity_band(60.0, 30.0).is_err());
        assert!(profile.set_humidity_band(-5.0, 30.0).is_err());
        assert!(profile.set_humidity_band(20.0, 101.0).is_err());
        assert_eq!(profile.dry_line(), 30.0);

        profile.set_humidity_band(40.0, 55.0).unwrap();
        assert_eq!((profile.dry_line(), profile.humid_line()), (40.0, 55.0));
    }

    #[test]
    fn incident_lines_by_position() {
        assert_eq!(incident_lines(0).unwrap().as_slice(), &[0]);
        assert_eq!(incident_lines(2).unwrap().as_slice(), &[1, 2]);
        assert_eq!(incident_lines(COMFORT_CTRL_POINTS - 1).unwrap().as_slice(), &[COMFORT_CTRL_LINES - 1]);
        assert!(incident_lines(COMFORT_CTRL_POINTS).is_err());

        for index in 1..COMFORT_CTRL_LINES {
            assert_eq!(incident_lines(index).unwrap().as_slice(), &[index - 1, index]);
        }
    }

    #[test]
    fn nearest_point_prefers_lower_index_on_tie() {
        let points = *ComfortProfile::default().hot_points();
        assert_eq!(nearest_point(&points, 12.5), 0);
        assert_eq!(nearest_point(&points, 13.0), 1);
        assert_eq!(nearest_point(&points, 99.0), 4);
    }

    #[test]
    fn user_warmer_moves_hot_point() {
        let mut profile = ComfortProfile::default();
        profile.on_new_humidity(48.0).unwrap();

        let adaptation = profile.set_user_temperature(29.5).unwrap().unwrap();
        assert_eq!(adaptation.boundary, Boundary::Hot);
        assert_eq!(adaptation.index, 2);
        assert_eq!(adaptation.previous, 28.0);
        assert_eq!(adaptation.current, 29.5);
        assert_eq!(profile.hot_points()[2].temperature, 29.5);
        assert_eq!(profile.cold_points()[2].temperature, 18.0);
    }

    #[test]
    fn user_cooler_moves_cold_point() {
        let mut profile = ComfortProfile::default();
        profile.on_new_humidity(80.0).unwrap();

        let adaptation = profile.set_user_temperature(15.0).unwrap().unwrap();
        assert_eq!(adaptation.boundary, Boundary::Cold);
        assert_eq!(adaptation.index, 3);
        assert_eq!(profile.cold_points()[3].temperature, 15.0);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn user_at_average_changes_nothing() {
        let mut profile = ComfortProfile::default();
        profile.on_new_humidity(50.0).unwrap();
        let before = profile.clone();

        assert_eq!(profile.set_user_temperature(23.0), Ok(None));
        assert_eq!(profile, before);
    }

    #[test]
    fn adaptation_needs_humidity() {
        let mut profile = ComfortProfile::default();
        assert_eq!(
            profile.set_user_temperature(25.0),
            Err(ComfortError::UninitializedState { quantity: "humidity" })
        );
    }

    #[test]
    fn adaptation_rejects_inverting_change() {
        // Cold point 2 raised to 25°C leaves a narrow 3°C gap at 50%RH
        let hot = *ComfortProfile::default().hot_points();
        let mut cold = *ComfortProfile::default().cold_points();
        cold[2].temperature = 25.0;
        let mut profile = ComfortProfile::new_with_envelope(hot, cold, 30.0, 60.0).unwrap();

        // Average at 62% is ~24.3°C and the nearest control point is index 2
        profile.on_new_humidity(62.0).unwrap();
        let before = profile.clone();

        // Above average moves hot[2], but 24.8 is below cold[2]
        assert_eq!(
            profile.set_user_temperature(24.8),
            Err(ComfortError::Configuration(ConfigurationError::InvertedEnvelope { index: 2 }))
        );
        assert_eq!(profile, before);

        assert!(profile.set_user_temperature(f32::NAN).is_err());
        assert_eq!(profile, before);
    }

    #[test]
    fn refresh_only_touches_incident_lines() {
        let mut profile = ComfortProfile::default();
        let before = profile.clone();
        profile.hot_points[2].temperature = 29.0;
        profile.refresh_comfort_line(Boundary::Hot, 2).unwrap();

        assert_eq!(profile.hot_lines()[0], before.hot_lines()[0]);
        assert_ne!(profile.hot_lines()[1], before.hot_lines()[1]);
        assert_ne!(profile.hot_lines()[2], before.hot_lines()[2]);
        assert_eq!(profile.hot_lines()[3], before.hot_lines()[3]);
        assert_eq!(profile.cold_lines(), before.cold_lines());

        // Same result as a full rebuild
        let mut rebuilt = profile.clone();
        rebuilt.init_comfort_lines();
        assert_eq!(rebuilt.hot_lines(), profile.hot_lines());
    }

    #[test]
    fn refresh_rejects_bad_index() {
        let mut profile = ComfortProfile::default();
        assert_eq!(
            profile.refresh_comfort_line(Boundary::Cold, 9),
            Err(ComfortError::Configuration(ConfigurationError::PointIndexOutOfRange { index: 9 }))
        );
    }
}
