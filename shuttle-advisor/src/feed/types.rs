//! Feed response DTOs.
//!
//! These types map directly to the timetable feed JSON. They use `Option`
//! liberally because the feed omits fields rather than sending null, and
//! different rows carry different subsets of columns.

use serde::Deserialize;

/// Root of the feed document.
#[derive(Debug, Clone, Deserialize)]
pub struct BusFeed {
    /// Timetable pages. The live feed publishes exactly one, for today.
    #[serde(default)]
    pub timesheet: Vec<TimesheetPage>,
}

/// A single timetable page.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesheetPage {
    /// Hourly rows, plus interleaved header/footnote pseudo-rows.
    pub list: Option<Vec<RawRow>>,
}

/// One raw feed entry.
///
/// A genuine schedule row has a digit-string `time` (the hour); header and
/// footnote entries reuse the same shape with prose in `time`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    /// Hour of day as a string, e.g. `"7"`. Non-digit values mark
    /// non-schedule metadata rows.
    pub time: Option<String>,

    /// Station-bound bus departures for this hour.
    pub bus_right: Option<BusColumn>,

    /// Up-direction train departures for this hour.
    pub train_right: Option<TrainColumn>,
}

/// Bus departures within one hour.
#[derive(Debug, Clone, Deserialize)]
pub struct BusColumn {
    /// Dot-delimited departure minutes, e.g. `"5.25.45"`.
    pub num1: Option<String>,

    /// Free-text memo. May contain the on-demand marker phrase.
    pub memo1: Option<String>,

    /// Second free-text memo, same convention as `memo1`.
    pub memo2: Option<String>,
}

/// Train departures within one hour.
///
/// Tokens are dot-delimited `<code><mm>` strings where the single
/// leading character encodes the destination (`"c12.a37"`). The feed
/// mixes in placeholder tokens that do not match this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainColumn {
    pub num1: Option<String>,
    pub num2: Option<String>,
}
