//! Basic Comfort Classification Example
//!
//! This example shows the simplest use of thermo: feed temperature and
//! humidity readings to the façade and ask how comfortable the room is.
//!
//! ## What You'll Learn
//!
//! - Recording sensor readings
//! - Reading the comfort state and its severity
//! - Deriving dew point, heat index and humidex
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_comfort
//! ```

use thermo_core::{lookup, Comfort, ComfortError, PressureUnit};

fn main() -> Result<(), ComfortError> {
    println!("thermo Basic Comfort Example");
    println!("============================\n");

    let mut comfort = Comfort::new();

    // Before the first reading every query reports what is missing
    if let Err(err) = comfort.comfort() {
        println!("Before any reading: {}\n", err);
    }

    let readings = [
        (22.0, 45.0, "Living room, spring"),
        (31.0, 40.0, "Attic in July"),
        (14.0, 55.0, "Unheated bedroom"),
        (21.0, 18.0, "Office, heating on"),
        (24.0, 85.0, "Bathroom after a shower"),
        (33.0, 75.0, "Tropical afternoon"),
    ];

    for (temperature, humidity, place) in &readings {
        comfort.on_new_temp_and_humidity(*temperature, *humidity)?;
        let reading = comfort.comfort()?;

        println!("{} - {:.1}°C, {:.0}%RH", place, temperature, humidity);
        println!("  State:      {} ({:.0}%)", reading.state.description(), reading.percent);
        println!("  Dew point:  {:.1}°C", comfort.dew_point()?);

        let heat_index = comfort.heat_index_us()?;
        println!(
            "  Heat index: {:.1}°C ({})",
            heat_index,
            lookup::heat_index_description(heat_index)
        );
        println!("  Humidex:    {:.1}", comfort.humindex_canada()?);
        println!();
    }

    comfort.on_new_pressure(1008.5)?;
    println!("Pressure:");
    for unit in PressureUnit::ALL {
        println!("  {:>10.4} {}", comfort.pressure(unit)?, unit.symbol());
    }

    Ok(())
}
