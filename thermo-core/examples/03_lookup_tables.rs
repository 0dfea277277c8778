//! Lookup Tables Example
//!
//! Exposure limits and warning bands are static tables. This example walks
//! through them and compares the dew point grid with the closed-form
//! algorithms.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_lookup_tables
//! ```

use thermo_core::{
    formulas::{dew_point, recommended_max_indoor_temp_summer, recommended_min_indoor_temp_summer},
    lookup::{self, GasKind, CO2_LEVELS, DEW_POINT_STANDARD},
    DewPointAlgorithm,
};

fn main() {
    println!("thermo Lookup Tables Example");
    println!("============================\n");

    println!("CO2 bands:");
    for level in CO2_LEVELS.iter() {
        println!("  < {:>7.0} ppm  {}", level.max_value, level.description);
    }

    println!("\nCarbon monoxide exposure:");
    for (ppm, minutes) in [(5.0, 480), (20.0, 60), (20.0, 480), (400.0, 30), (2000.0, 5)] {
        let band = GasKind::Co.exposure(ppm, minutes).map_or("OffScale", |l| l.description);
        println!("  {:>6.0} ppm for {:>3} min: {}", ppm, minutes, band);
    }

    println!("\nHeat index warnings:");
    for heat_index in [24.0, 28.0, 35.0, 45.0, 55.0] {
        println!("  {:>4.1}°C: {}", heat_index, lookup::heat_index_description(heat_index));
    }

    println!("\nDew point, grid vs formulas (°C):");
    println!("   T    RH    grid  accurate  fastest");
    for (temperature, humidity) in [(25.0, 60.0), (10.0, 40.0), (30.0, 20.0), (-5.0, 80.0)] {
        let grid = DEW_POINT_STANDARD.lookup(temperature, humidity).unwrap_or(f32::NAN);
        let accurate = dew_point(temperature, humidity, DewPointAlgorithm::Accurate).unwrap_or(f32::NAN);
        let fastest = dew_point(temperature, humidity, DewPointAlgorithm::Fastest).unwrap_or(f32::NAN);
        println!(
            "  {:>4.0}  {:>3.0}  {:>6.1}  {:>8.1}  {:>7.1}",
            temperature, humidity, grid, accurate, fastest
        );
    }

    println!("\nRecommended summer indoor range:");
    for outdoor in [20.0, 28.0, 35.0] {
        println!(
            "  outdoor {:>4.1}°C -> {:.1}..{:.1}°C",
            outdoor,
            recommended_min_indoor_temp_summer(outdoor),
            recommended_max_indoor_temp_summer(outdoor)
        );
    }
}
