//! Named room conditions with their expected classification against the
//! factory envelope

use thermo_core::ComfortState;

/// One room condition and what the factory profile should say about it
pub struct RoomScenario {
    pub name: &'static str,
    pub temperature: f32,
    pub humidity: f32,
    pub expected: ComfortState,
}

/// Pre-built scenario definitions
pub struct Scenarios;

impl Scenarios {
    /// Conditions covering every reachable state of the factory envelope
    pub fn factory_envelope() -> [RoomScenario; 9] {
        [
            RoomScenario {
                name: "spring_living_room",
                temperature: 22.0,
                humidity: 45.0,
                expected: ComfortState::OK,
            },
            RoomScenario {
                name: "attic_in_july",
                temperature: 33.0,
                humidity: 40.0,
                expected: ComfortState::TOO_HOT,
            },
            RoomScenario {
                name: "unheated_garage",
                temperature: 9.0,
                humidity: 50.0,
                expected: ComfortState::TOO_COLD,
            },
            RoomScenario {
                name: "heated_office_in_winter",
                temperature: 22.0,
                humidity: 20.0,
                expected: ComfortState::TOO_DRY,
            },
            RoomScenario {
                name: "bathroom_after_shower",
                temperature: 22.0,
                humidity: 85.0,
                expected: ComfortState::TOO_HUMID,
            },
            RoomScenario {
                name: "desert_afternoon",
                temperature: 38.0,
                humidity: 12.0,
                expected: ComfortState::HOT_AND_DRY,
            },
            RoomScenario {
                name: "ski_cabin_on_arrival",
                temperature: 8.0,
                humidity: 18.0,
                expected: ComfortState::COLD_AND_DRY,
            },
            RoomScenario {
                name: "tropical_greenhouse",
                temperature: 32.0,
                humidity: 90.0,
                expected: ComfortState::HOT_AND_HUMID,
            },
            RoomScenario {
                name: "damp_cellar",
                temperature: 11.0,
                humidity: 88.0,
                expected: ComfortState::COLD_AND_HUMID,
            },
        ]
    }
}
