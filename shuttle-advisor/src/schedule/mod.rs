//! Normalized timetable schedule.
//!
//! The feed parser turns raw feed rows into a sequence of hourly
//! [`ScheduleRow`]s that the recommendation engine can search. Parsing is
//! lenient by design: the feed interleaves headers, footnotes, and
//! placeholder tokens with real schedule data, so anything that does not
//! look like a departure is dropped rather than treated as an error.

mod destination;
mod parse;
mod row;

pub use destination::destination_name;
pub use parse::{MalformedFeed, parse_feed};
pub use row::{BusBlock, ScheduleRow, TrainCall};
