//! Temperature and Pressure Unit Conversion
//!
//! The engine works in Celsius (what sensors report) and millibar. These
//! helpers convert inputs and results for callers that need other units.
//!
//! ## Pressure
//!
//! Every unit is stored as "how many of this unit make one Pascal". A
//! conversion normalises through Pascal:
//!
//! ```text
//! value_to = value_from × factor[to] / factor[from]
//! ```
//!
//! One table of eight factors covers all 64 unit pairs.
//!
//! ```rust
//! use thermo_core::units::{convert_pressure, PressureUnit};
//!
//! let hpa = convert_pressure(1.0, PressureUnit::StandardAtmosphere, PressureUnit::MilliBar);
//! assert!((hpa - 1013.25).abs() < 0.1);
//! ```

/// Celsius to Fahrenheit
pub fn convert_c_to_f(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// Fahrenheit to Celsius
pub fn convert_f_to_c(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) / 1.8
}

/// Supported pressure units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PressureUnit {
    /// Pascal (SI)
    Pascal = 0,
    /// Bar
    Bar,
    /// Technical atmosphere (kgf/cm²)
    TechnicalAtmosphere,
    /// Standard atmosphere
    StandardAtmosphere,
    /// Torr, ~1 mmHg
    TorrMmHg,
    /// Pounds per square inch
    Psi,
    /// Millibar, same as hPa
    MilliBar,
    /// Inches of mercury
    InchMercury,
}

/// Units per Pascal, indexed by `PressureUnit as usize`
///
/// Source: NIST Special Publication 811, Appendix B.8
const UNITS_PER_PASCAL: [f32; 8] = [
    1.0,          // Pa
    1.0e-5,       // bar
    1.019_716e-5, // at
    9.869_233e-6, // atm
    7.500_617e-3, // Torr
    1.450_377e-4, // psi
    1.0e-2,       // mbar
    2.952_998e-4, // inHg
];

impl PressureUnit {
    /// All units in table order
    pub const ALL: [PressureUnit; 8] = [
        PressureUnit::Pascal,
        PressureUnit::Bar,
        PressureUnit::TechnicalAtmosphere,
        PressureUnit::StandardAtmosphere,
        PressureUnit::TorrMmHg,
        PressureUnit::Psi,
        PressureUnit::MilliBar,
        PressureUnit::InchMercury,
    ];

    /// How many of this unit make one Pascal
    pub fn from_pascal_factor(self) -> f32 {
        UNITS_PER_PASCAL[self as usize]
    }

    /// Unit symbol
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::Bar => "bar",
            PressureUnit::TechnicalAtmosphere => "at",
            PressureUnit::StandardAtmosphere => "atm",
            PressureUnit::TorrMmHg => "Torr",
            PressureUnit::Psi => "psi",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::InchMercury => "inHg",
        }
    }
}

/// Convert a pressure between any two units
pub fn convert_pressure(value: f32, from: PressureUnit, to: PressureUnit) -> f32 {
    if from == to {
        return value;
    }
    value * to.from_pascal_factor() / from.from_pascal_factor()
}
