//! Recommendation engine.
//!
//! Given a building's walk/run durations, the current instant, and the
//! parsed schedule, decides which bus to aim for, how urgent leaving is,
//! and which train connects after the transfer allowance.

mod config;
mod engine;
mod locations;
mod message;

#[cfg(test)]
mod engine_tests;

pub use config::AdvisorConfig;
pub use engine::{
    BusCandidate, Outcome, Recommendation, TrainConnection, Urgency, find_next_bus,
    find_next_train, recommend,
};
pub use locations::{Location, Locations, LocationsBuilder, campus_locations};
pub use message::{FETCH_FAILED_MESSAGE, render_html, render_plain};
