//! Timetable feed client.
//!
//! This module provides an HTTP client for the campus shuttle timetable
//! feed, a public JSON endpoint published by the university.
//!
//! Key characteristics of the feed:
//! - One entry per hour; the `time` field is the hour as a bare digit
//!   string. Entries with non-digit `time` values are column headers and
//!   footnotes, not schedule rows.
//! - Departure minutes are dot-delimited strings (`"5.25.45"`)
//! - Some hours run "on demand" rather than at fixed minutes; the feed
//!   signals this with a marker phrase in free-text memo fields
//! - The endpoint does not send CORS headers, so browser-hosted callers
//!   go through a relay that echoes the response verbatim

mod client;
mod error;
mod mock;
mod types;

pub use client::{FeedClient, FeedConfig};
pub use error::FeedError;
pub use mock::MockFeedClient;
pub use types::{BusColumn, BusFeed, RawRow, TimesheetPage, TrainColumn};
