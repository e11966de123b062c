//! Feed-to-schedule parser.
//!
//! Turns the raw feed document into [`ScheduleRow`]s. Only the root
//! structure is mandatory; everything below it is parsed leniently,
//! dropping tokens and rows that do not look like schedule data.

use tracing::debug;

use crate::feed::{BusFeed, RawRow, TrainColumn};

use super::destination::destination_name;
use super::row::{BusBlock, ScheduleRow, TrainCall};

/// Marker phrase in the memo fields signalling on-demand operation.
///
/// When present, the row's literal minute tokens are a formatting
/// artefact and the whole hour runs on demand.
const ON_DEMAND_MARKER: &str = "適時運行";

/// The feed document is missing its root structure.
///
/// Equivalent to a fetch failure for the caller: the next refresh tick
/// simply tries again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed feed: {reason}")]
pub struct MalformedFeed {
    reason: &'static str,
}

impl MalformedFeed {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a feed document into schedule rows.
///
/// Fails only when `timesheet[0].list` is absent; row-level problems are
/// dropped silently because the feed interleaves real rows with headers
/// and footnotes of the same shape.
pub fn parse_feed(feed: &BusFeed) -> Result<Vec<ScheduleRow>, MalformedFeed> {
    let page = feed
        .timesheet
        .first()
        .ok_or_else(|| MalformedFeed::new("no timesheet pages"))?;
    let list = page
        .list
        .as_ref()
        .ok_or_else(|| MalformedFeed::new("timesheet page has no list"))?;

    let rows: Vec<ScheduleRow> = list.iter().filter_map(parse_row).collect();
    debug!(
        raw_entries = list.len(),
        schedule_rows = rows.len(),
        "parsed timetable feed"
    );
    Ok(rows)
}

/// Parse one raw entry, or `None` if it is not a schedule row.
fn parse_row(raw: &RawRow) -> Option<ScheduleRow> {
    let hour = parse_hour(raw.time.as_deref()?)?;

    let bus = raw.bus_right.as_ref().and_then(|column| {
        // The on-demand marker overrides literal minute values: the feed
        // prints placeholder minutes in on-demand hours.
        let memo1 = column.memo1.as_deref().unwrap_or("");
        let memo2 = column.memo2.as_deref().unwrap_or("");
        if memo1.contains(ON_DEMAND_MARKER) || memo2.contains(ON_DEMAND_MARKER) {
            return Some(BusBlock::OnDemand);
        }

        let minutes: Vec<u32> = column
            .num1
            .as_deref()
            .unwrap_or("")
            .split('.')
            .filter_map(parse_minute)
            .collect();
        if minutes.is_empty() {
            None
        } else {
            Some(BusBlock::Fixed(minutes))
        }
    });

    let trains = raw
        .train_right
        .as_ref()
        .map(parse_train_column)
        .unwrap_or_default();

    Some(ScheduleRow { hour, bus, trains })
}

/// Parse an hour field: all ASCII digits, value 0-23.
fn parse_hour(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = s.parse().ok()?;
    (hour <= 23).then_some(hour)
}

/// Parse a bus minute token: all ASCII digits, value 0-59.
fn parse_minute(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let minute: u32 = s.parse().ok()?;
    (minute <= 59).then_some(minute)
}

/// Parse the two train number-sets of a row, `num1` before `num2`.
fn parse_train_column(column: &TrainColumn) -> Vec<TrainCall> {
    let mut calls = Vec::new();
    for set in [&column.num1, &column.num2] {
        if let Some(tokens) = set {
            calls.extend(tokens.split('.').filter_map(parse_train_token));
        }
    }
    calls
}

/// Parse one train token: a single word character followed by exactly two
/// digits (`c12`). The character is the destination code, the digits the
/// minute. Anything else is a placeholder and is dropped.
fn parse_train_token(token: &str) -> Option<TrainCall> {
    let mut chars = token.chars();
    let code = chars.next()?;
    let rest = chars.as_str();

    if !(code.is_alphanumeric() || code == '_') {
        return None;
    }
    let bytes = rest.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let minute = (u32::from(bytes[0] - b'0')) * 10 + u32::from(bytes[1] - b'0');
    if minute > 59 {
        return None;
    }

    Some(TrainCall {
        minute,
        destination: destination_name(code.encode_utf8(&mut [0u8; 4])),
    })
}
