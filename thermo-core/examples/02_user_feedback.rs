//! User Feedback Example
//!
//! The comfort envelope adapts to its user. When someone says "this
//! temperature is fine", the nearest control point of the hot or cold
//! boundary moves to that temperature.
//!
//! ## What You'll Learn
//!
//! - How feedback selects a boundary and a control point
//! - When feedback leaves the profile alone
//! - Persisting the adapted profile through a `ProfileStore`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_user_feedback
//! ```

use thermo_core::{Comfort, ComfortError, ComfortProfile, ProfileStore, RamStore};

fn print_envelope(profile: &ComfortProfile) {
    println!("  %RH   cold    hot");
    for (cold, hot) in profile.cold_points().iter().zip(profile.hot_points()) {
        println!("  {:>3.0}  {:>5.1}  {:>5.1}", hot.humidity, cold.temperature, hot.temperature);
    }
}

fn main() -> Result<(), ComfortError> {
    println!("thermo User Feedback Example");
    println!("============================\n");

    let mut comfort = Comfort::new();
    println!("Factory envelope:");
    print_envelope(comfort.comfort_profile());

    // A user who likes it warm
    comfort.on_new_temp_and_humidity(29.0, 50.0)?;
    println!("\n29°C at 50%RH: {}", comfort.comfort()?.state.description());

    if let Some(change) = comfort.set_user_temperature(29.0)? {
        println!(
            "Feedback moved {:?} point {}: {:.1}°C -> {:.1}°C",
            change.boundary, change.index, change.previous, change.current
        );
    }
    println!("29°C at 50%RH now: {}", comfort.comfort()?.state.description());

    // Feedback at the profile's own average changes nothing
    let mut winter = Comfort::with_profile(ComfortProfile::winter());
    winter.on_new_temp_and_humidity(20.0, 50.0)?;
    let average = winter.comfort_profile().average_profile_temperature(50.0)?;
    match winter.set_user_temperature(average)? {
        Some(change) => println!("\nWinter profile moved {:?} point {}", change.boundary, change.index),
        None => println!("\nWinter profile already centred on {:.1}°C at 50%RH", average),
    }

    // Keep the learned profile across reboots
    let mut store = RamStore::new();
    comfort.persist_profile(&mut store)?;
    println!("\nStored {} bytes", store.as_bytes().len());

    let mut rebooted = Comfort::new();
    rebooted.restore_profile(&mut store)?;
    println!("Restored envelope:");
    print_envelope(rebooted.comfort_profile());

    // Any medium works once it implements ProfileStore
    let mut flash_page: heapless::Vec<u8, 128> = heapless::Vec::new();
    rebooted.persist_profile(&mut flash_page)?;
    let mut buf = [0u8; 128];
    println!("\nFlash page holds {} bytes", flash_page.read(&mut buf)?);

    Ok(())
}
