//! Campus shuttle departure advisor.
//!
//! A widget that answers: "if I leave this building now, can I still
//! catch the next shuttle bus to the station, and which train connects?"

pub mod advisor;
pub mod app;
pub mod feed;
pub mod schedule;
