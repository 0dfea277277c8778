//! Static Lookup Tables for Exposure and Comfort Thresholds
//!
//! ## Motivation
//!
//! Threshold data (gas exposure limits, heat-index warning bands) never
//! changes at runtime, so it lives in immutable statics with no lifecycle
//! beyond program start. Lookups are linear scans over a handful of entries.
//!
//! The pre-computed dew point grid serves the same purpose as on any
//! FPU-less microcontroller: trade ~200 bytes of flash for skipping a
//! logarithm per reading.
//!
//! ## Gas Exposure
//!
//! Tables are ordered by increasing concentration. The first entry whose
//! `max_value` exceeds the sample describes it:
//!
//! ```text
//! CO2 ppm:  400 │ 600 │ 1000 │ 2500 │ 5000 │ 30000 │ 50000 │ 100000
//!           Outdoor  Accept  High  Drowsy  VeryHigh Nausea Headache Death
//! ```
//!
//! Carbon monoxide also has a time limit: 20 ppm is safe for an hour but not
//! for eight, so the CO lookup also requires the exposure time to fit the
//! entry's limit.
//!
//! ## Heat Index Bands
//!
//! NOAA warning bands, expressed in Celsius:
//!
//! ```text
//! < 26.66  no warning
//! ≥ 26.66  Caution         - fatigue possible
//! ≥ 32.22  Extreme caution - heat stroke possible
//! ≥ 39.44  Danger          - heat stroke probable
//! ≥ 51.11  Extreme danger  - heat stroke likely
//! ```
//!
//! ## Dew Point Grid
//!
//! Magnus formula values (a = 17.27, b = 237.7) on a 5°C × 10%RH grid,
//! refined with bilinear interpolation:
//!
//! ```text
//! f(x,y) = Q11(1-x)(1-y) + Q21·x(1-y) + Q12(1-x)y + Q22·xy
//! ```

/// Result type for grid lookups
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur during grid lookups
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupError {
    /// Computed index fell outside the grid (cannot happen after clamping)
    IndexOutOfBounds,
}

/// Gas measured by the node's air-quality sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GasKind {
    /// Volatile organic compounds, NOx and other gases seen by an MQ135
    Voc,
    /// Carbon dioxide
    Co2,
    /// Carbon monoxide
    Co,
}

impl GasKind {
    /// Exposure band for this gas, `None` for gases without a table
    ///
    /// `minutes` only matters for carbon monoxide.
    pub fn exposure(self, ppm: f32, minutes: u16) -> Option<&'static GasLevel> {
        match self {
            GasKind::Voc => None,
            GasKind::Co2 => co2_exposure(ppm),
            GasKind::Co => co_exposure(ppm, minutes),
        }
    }
}

/// One exposure band of a gas table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasLevel {
    /// Concentrations below this value fall in this band (ppm)
    pub max_value: f32,
    /// Longest safe exposure in this band (minutes, 0 = not time limited)
    pub max_exposure_minutes: u16,
    /// Band label
    pub description: &'static str,
}

impl GasLevel {
    const fn new(max_value: f32, max_exposure_minutes: u16, description: &'static str) -> Self {
        Self { max_value, max_exposure_minutes, description }
    }
}

/// Carbon dioxide comfort bands
///
/// Source: Engineering ToolBox, "Carbon Dioxide - Concentration Levels"
pub static CO2_LEVELS: [GasLevel; 8] = [
    GasLevel::new(400.0, 0, "OutdoorNormal"),
    GasLevel::new(600.0, 0, "Acceptable"),
    GasLevel::new(1000.0, 0, "HighLevel"),
    GasLevel::new(2500.0, 0, "Drowsiness"),
    GasLevel::new(5000.0, 0, "VeryHigh"),
    GasLevel::new(30000.0, 0, "Nausea"),
    GasLevel::new(50000.0, 0, "Headaches"),
    GasLevel::new(100000.0, 0, "Death"),
];

/// Carbon monoxide exposure bands
///
/// Source: Wikipedia, "Carbon monoxide poisoning" (OSHA/NIOSH limits)
pub static CO_LEVELS: [GasLevel; 8] = [
    GasLevel::new(9.0, 8 * 60, "Safe_8hour"),
    GasLevel::new(26.0, 60, "Safe_1hour"),
    GasLevel::new(52.0, 30, "Safe_30min"),
    GasLevel::new(87.0, 15, "Safe_15min"),
    GasLevel::new(200.0, 2 * 60, "LightHeadache"),
    GasLevel::new(400.0, 60, "SeriousHeadache"),
    GasLevel::new(800.0, 45, "DizzinessNausea"),
    GasLevel::new(1600.0, 20, "DeathInOneHour"),
];

/// Band for a CO2 concentration, `None` above the table
pub fn co2_exposure(ppm: f32) -> Option<&'static GasLevel> {
    CO2_LEVELS.iter().find(|level| ppm < level.max_value)
}

/// Band for a CO concentration sustained for `minutes`
///
/// Returns the first band that both covers the concentration and allows
/// the exposure time, `None` when no band does.
pub fn co_exposure(ppm: f32, minutes: u16) -> Option<&'static GasLevel> {
    CO_LEVELS
        .iter()
        .find(|level| ppm < level.max_value && minutes <= level.max_exposure_minutes)
}

/// Description of a CO2 concentration, for display
pub fn co2_exposure_description(ppm: f32) -> &'static str {
    co2_exposure(ppm).map_or("OffScale", |level| level.description)
}

/// Description of a CO exposure, for display
pub fn co_exposure_description(ppm: f32, minutes: u16) -> &'static str {
    co_exposure(ppm, minutes).map_or("OffScale", |level| level.description)
}

/// One NOAA heat-index warning band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatIndexLevel {
    /// Lowest heat index in this band (°C)
    pub threshold_c: f32,
    /// Band label
    pub description: &'static str,
}

/// Heat-index warning bands, ascending
///
/// Source: NOAA National Weather Service, heat index chart
pub static HEAT_INDEX_LEVELS: [HeatIndexLevel; 4] = [
    HeatIndexLevel { threshold_c: 26.66, description: "Yellow_Fatigue" },
    HeatIndexLevel { threshold_c: 32.22, description: "Mustard_PossibleHeatStroke" },
    HeatIndexLevel { threshold_c: 39.44, description: "Orange_ProbableHeatStroke" },
    HeatIndexLevel { threshold_c: 51.11, description: "Red_LikelyHeatStroke" },
];

/// Highest warning band reached by a heat index, `None` below the first
pub fn heat_index_level(heat_index_c: f32) -> Option<&'static HeatIndexLevel> {
    HEAT_INDEX_LEVELS
        .iter()
        .rev()
        .find(|level| heat_index_c >= level.threshold_c)
}

/// Description of a heat index, for display
pub fn heat_index_description(heat_index_c: f32) -> &'static str {
    heat_index_level(heat_index_c).map_or("NoWarning", |level| level.description)
}

/// Dew point lookup grid
///
/// Rows are temperatures, columns relative humidities.
pub struct DewPointTable<const ROWS: usize, const COLS: usize> {
    /// Temperature of the first row (°C)
    temp_min: i8,
    /// Temperature step between rows (°C)
    temp_step: u8,
    /// Humidity of the first column (%RH)
    rh_min: u8,
    /// Humidity step between columns (%RH)
    rh_step: u8,
    /// Pre-computed dew points [temp_idx][rh_idx] (°C)
    values: &'static [[i8; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> DewPointTable<ROWS, COLS> {
    /// Look up dew point for given temperature and humidity
    ///
    /// Inputs outside the grid are clamped to its edges.
    pub fn lookup(&self, temp_c: f32, rh_percent: f32) -> LookupResult<f32> {
        let (temp, temp_clamped) = clamp(temp_c, self.temp_min as f32, self.temp_max());
        let (rh, rh_clamped) = clamp(rh_percent, self.rh_min as f32, self.rh_max());

        let (temp_idx, temp_frac) = Self::index(temp - self.temp_min as f32, self.temp_step);
        let (rh_idx, rh_frac) = Self::index(rh - self.rh_min as f32, self.rh_step);

        if temp_idx >= ROWS || rh_idx >= COLS {
            return Err(LookupError::IndexOutOfBounds);
        }

        if temp_clamped || rh_clamped {
            log_warn!(
                "Dew point lookup: inputs clamped (T: {}→{}, RH: {}→{})",
                temp_c, temp, rh_percent, rh
            );
        }

        Ok(self.interpolate_bilinear(temp_idx, rh_idx, temp_frac, rh_frac))
    }

    /// Temperature of the last row (°C)
    fn temp_max(&self) -> f32 {
        self.temp_min as f32 + (ROWS - 1) as f32 * self.temp_step as f32
    }

    /// Humidity of the last column (%RH)
    fn rh_max(&self) -> f32 {
        self.rh_min as f32 + (COLS - 1) as f32 * self.rh_step as f32
    }

    /// Grid index and fractional position of an offset from the first entry
    fn index(offset: f32, step: u8) -> (usize, f32) {
        let step = step as f32;
        let idx = (offset / step) as usize;
        let frac = (offset - idx as f32 * step) / step;
        (idx, frac)
    }

    fn value(&self, temp_idx: usize, rh_idx: usize) -> f32 {
        self.values[temp_idx.min(ROWS - 1)][rh_idx.min(COLS - 1)] as f32
    }

    fn interpolate_bilinear(&self, temp_idx: usize, rh_idx: usize, temp_frac: f32, rh_frac: f32) -> f32 {
        let q11 = self.value(temp_idx, rh_idx);
        let q21 = self.value(temp_idx + 1, rh_idx);
        let q12 = self.value(temp_idx, rh_idx + 1);
        let q22 = self.value(temp_idx + 1, rh_idx + 1);

        q11 * (1.0 - temp_frac) * (1.0 - rh_frac)
            + q21 * temp_frac * (1.0 - rh_frac)
            + q12 * (1.0 - temp_frac) * rh_frac
            + q22 * temp_frac * rh_frac
    }
}

fn clamp(value: f32, min: f32, max: f32) -> (f32, bool) {
    if value < min {
        (min, true)
    } else if value > max {
        (max, true)
    } else {
        (value, false)
    }
}

/// Rows of the standard dew point grid (-40..=50°C every 5°C)
pub const DEW_POINT_TABLE_ROWS: usize = 19;

/// Columns of the standard dew point grid (10..=100%RH every 10%)
pub const DEW_POINT_TABLE_COLS: usize = 10;

/// Standard dew point grid
/// Memory: 190 bytes
pub const DEW_POINT_STANDARD: DewPointTable<DEW_POINT_TABLE_ROWS, DEW_POINT_TABLE_COLS> = DewPointTable {
    temp_min: -40,
    temp_step: 5,
    rh_min: 10,
    rh_step: 10,
    values: &DEW_POINT_VALUES_STANDARD,
};

/// Temperature: -40 to 50°C in 5°C steps (19 rows)
/// Humidity: 10 to 100% in 10% steps (10 columns)
const DEW_POINT_VALUES_STANDARD: [[i8; DEW_POINT_TABLE_COLS]; DEW_POINT_TABLE_ROWS] = [
    // -40°C
    [-60, -54, -51, -48, -46, -45, -43, -42, -41, -40],
    // -35°C
    [-56, -50, -46, -44, -42, -40, -39, -37, -36, -35],
    // -30°C
    [-52, -46, -42, -39, -37, -35, -34, -32, -31, -30],
    // -25°C
    [-48, -41, -37, -35, -32, -30, -29, -27, -26, -25],
    // -20°C
    [-44, -37, -33, -30, -28, -26, -24, -23, -21, -20],
    // -15°C
    [-40, -33, -29, -26, -23, -21, -19, -18, -16, -15],
    // -10°C
    [-36, -29, -24, -21, -18, -16, -14, -13, -11, -10],
    // -5°C
    [-32, -24, -20, -16, -14, -12, -10, -8, -6, -5],
    // 0°C
    [-28, -20, -15, -12, -9, -7, -5, -3, -1, 0],
    // 5°C
    [-24, -16, -11, -7, -5, -2, 0, 2, 3, 5],
    // 10°C
    [-20, -12, -7, -3, 0, 3, 5, 7, 8, 10],
    // 15°C
    [-16, -8, -2, 2, 5, 7, 10, 12, 13, 15],
    // 20°C
    [-13, -4, 2, 6, 9, 12, 14, 16, 18, 20],
    // 25°C
    [-9, 0, 6, 10, 14, 17, 19, 21, 23, 25],
    // 30°C
    [-5, 5, 11, 15, 18, 21, 24, 26, 28, 30],
    // 35°C
    [-1, 9, 15, 19, 23, 26, 29, 31, 33, 35],
    // 40°C
    [3, 13, 19, 24, 28, 31, 33, 36, 38, 40],
    // 45°C
    [6, 17, 23, 28, 32, 35, 38, 41, 43, 45],
    // 50°C
    [10, 21, 28, 33, 37, 40, 43, 46, 48, 50],
];

/// Dew point from the standard grid, `None` on lookup failure
pub fn dew_point_lookup(temp_c: f32, rh_percent: f32) -> Option<f32> {
    DEW_POINT_STANDARD.lookup(temp_c, rh_percent).ok()
}
