//! Normalized schedule row types.

use chrono::{NaiveDate, NaiveDateTime};

/// Bus departures within one hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusBlock {
    /// Fixed departure minutes, in feed order.
    Fixed(Vec<u32>),

    /// On-demand service: no fixed minutes, a vehicle is assumed to be
    /// available throughout the hour.
    OnDemand,
}

/// One train departure within an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainCall {
    /// Departure minute (0-59).
    pub minute: u32,

    /// Terminus name resolved from the destination code.
    pub destination: &'static str,
}

/// One hour of the parsed timetable.
///
/// Rows are transient: the parser rebuilds the whole sequence on every
/// feed fetch, and all instants derived from a row share that fetch's
/// reference date (the feed is same-day only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    /// Hour of day (0-23).
    pub hour: u32,

    /// Bus departures, if the feed published any for this hour.
    pub bus: Option<BusBlock>,

    /// Train departures, `num1` tokens before `num2` tokens.
    pub trains: Vec<TrainCall>,
}

impl ScheduleRow {
    /// Absolute instant of a departure at `minute` within this row's hour,
    /// on the given reference date.
    ///
    /// Returns `None` for out-of-range minutes; the parser never emits
    /// them, but the engine also resolves on-demand departures here.
    pub fn instant(&self, date: NaiveDate, minute: u32) -> Option<NaiveDateTime> {
        date.and_hms_opt(self.hour, minute, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_combines_hour_and_minute() {
        let row = ScheduleRow {
            hour: 14,
            bus: None,
            trains: vec![],
        };
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let instant = row.instant(date, 35).unwrap();
        assert_eq!(instant, date.and_hms_opt(14, 35, 0).unwrap());
    }

    #[test]
    fn instant_rejects_bad_minute() {
        let row = ScheduleRow {
            hour: 10,
            bus: None,
            trains: vec![],
        };
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert!(row.instant(date, 60).is_none());
    }
}
