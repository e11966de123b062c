//! Message composition.
//!
//! Renders a [`Recommendation`] into the user-facing display string,
//! either plain text or an HTML snippet with the urgency phrase wrapped
//! in a styling span.

use super::config::AdvisorConfig;
use super::engine::{Outcome, Recommendation, TrainConnection, Urgency};

/// Message shown when the fetch-parse step fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to retrieve timetable data.";

fn urgency_text(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Leeway => "You can take your time",
        Urgency::DepartSoon => "Leave right away and you will make it",
        Urgency::Hurry => "Run and you will make it",
    }
}

/// CSS class for the urgency span, matching the widget's stylesheet.
fn urgency_class(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Leeway => "message-leeway",
        Urgency::DepartSoon => "message-soon",
        Urgency::Hurry => "message-hurry",
    }
}

const ON_DEMAND_TEXT: &str = "Buses run on demand at this hour";
const ON_DEMAND_CLASS: &str = "message-temporary";

/// Format a wait: one decimal place under an hour, truncated
/// hours-and-minutes at or above it.
fn format_wait(mins: f64) -> String {
    if mins >= 60.0 {
        // Truncated, not rounded, on both parts.
        let hours = (mins / 60.0) as i64;
        let minutes = (mins % 60.0) as i64;
        format!("{hours} hours {minutes} minutes")
    } else {
        format!("{mins:.1} minutes")
    }
}

fn train_text(train: &Option<TrainConnection>) -> String {
    match train {
        Some(train) => format!(
            "The next outbound train is the {} to {}, departing in {}.",
            train.departs.format("%H:%M"),
            train.destination,
            format_wait(train.wait_mins)
        ),
        None => "No more trains today.".to_string(),
    }
}

/// Walking advisory suffix, appended when the bus wait is long enough
/// that walking to the station beats waiting.
fn advisory(bus_wait_mins: f64, config: &AdvisorConfig) -> &'static str {
    if bus_wait_mins > config.walk_advisory_mins {
        " (walking is recommended)"
    } else {
        ""
    }
}

/// Render a recommendation as plain text.
pub fn render_plain(rec: &Recommendation, config: &AdvisorConfig) -> String {
    render(rec, config, false)
}

/// Render a recommendation as an HTML snippet.
pub fn render_html(rec: &Recommendation, config: &AdvisorConfig) -> String {
    render(rec, config, true)
}

fn render(rec: &Recommendation, config: &AdvisorConfig, html: bool) -> String {
    let name = &rec.location;
    match &rec.outcome {
        Outcome::Scheduled {
            urgency,
            bus_wait_mins,
            train,
            ..
        } => {
            let phrase = if html {
                format!(
                    r#"<span class="{}">{}</span>"#,
                    urgency_class(*urgency),
                    urgency_text(*urgency)
                )
            } else {
                urgency_text(*urgency).to_string()
            };
            // The bus wait stays in decimal minutes even when long; only
            // train waits get the hour split.
            format!(
                "{name}: {phrase} (the bus comes {:.1} minutes after you reach the stop). {}{}",
                bus_wait_mins,
                train_text(train),
                advisory(*bus_wait_mins, config)
            )
        }
        Outcome::OnDemand {
            bus_wait_mins,
            train,
        } => {
            let phrase = if html {
                format!(r#"<span class="{ON_DEMAND_CLASS}">{ON_DEMAND_TEXT}</span>"#)
            } else {
                ON_DEMAND_TEXT.to_string()
            };
            format!(
                "{name}: {phrase}. {}{}",
                train_text(train),
                advisory(*bus_wait_mins, config)
            )
        }
        Outcome::NextBusOnly { wait_mins } => {
            format!(
                "{name}: Take the bus after this one (next in {:.1} minutes).",
                wait_mins
            )
        }
        Outcome::NoViableBus => {
            format!("{name}: Take the bus after this one (no more buses today).")
        }
        Outcome::NoServiceToday => format!("{name}: No more buses today."),
    }
}
