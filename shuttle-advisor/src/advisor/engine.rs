//! Next-departure search and urgency classification.
//!
//! The decision tree, in order:
//! 1. find the earliest bus reachable by walking;
//! 2. classify how urgent leaving is (or, for on-demand hours, skip
//!    straight to the transfer);
//! 3. if even running cannot make it, fall back to the bus after that;
//! 4. otherwise chain into the earliest train after the transfer
//!    allowance.
//!
//! All instants are same-day wall-clock; the feed publishes today's
//! timetable only, so nothing here wraps past midnight.

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::schedule::{BusBlock, ScheduleRow};

use super::config::AdvisorConfig;
use super::locations::Location;

/// A bus departure the user could aim for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusCandidate {
    /// Departure instant. For on-demand hours this is the search
    /// baseline resolved into the row's hour.
    pub departs: NaiveDateTime,

    /// Whether the hour runs on demand rather than at fixed minutes.
    pub on_demand: bool,
}

/// The train reachable after the transfer allowance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConnection {
    /// Departure instant.
    pub departs: NaiveDateTime,

    /// Terminus name.
    pub destination: &'static str,

    /// Minutes between the transfer instant and the departure.
    pub wait_mins: f64,
}

/// How much slack the user has before the chosen bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Walking slack at or above the leeway threshold.
    Leeway,

    /// Walking makes it, but only just.
    DepartSoon,

    /// Walking misses it; running still makes it.
    Hurry,
}

/// Terminal outcome of one recommendation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A fixed-minute bus is reachable.
    Scheduled {
        urgency: Urgency,
        bus_departs: NaiveDateTime,
        /// Minutes the user waits at the stop after walking there.
        bus_wait_mins: f64,
        train: Option<TrainConnection>,
    },

    /// The next bus hour runs on demand; no slack computation applies.
    OnDemand {
        /// Minutes from walking arrival to the resolved candidate
        /// instant. Only used for the long-wait advisory.
        bus_wait_mins: f64,
        train: Option<TrainConnection>,
    },

    /// The next bus is already out of reach even running; the one after
    /// it is still reachable. No train lookup on this branch.
    NextBusOnly {
        /// Minutes from walking arrival to the following bus.
        wait_mins: f64,
    },

    /// The next bus is out of reach and no later bus runs today.
    NoViableBus,

    /// No bus at all departs after the walking arrival today.
    NoServiceToday,
}

/// A finished recommendation for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub location: String,
    pub outcome: Outcome,
}

/// Minutes from `from` to `to`, fractional, negative when `to` is earlier.
fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / 60_000.0
}

/// Find the earliest bus departing at or after `baseline`.
///
/// On-demand hours are modelled as a departure at the baseline's own
/// minute within the row's hour ("available right now"); fixed and
/// on-demand candidates compete uniformly by resolved instant.
pub fn find_next_bus(rows: &[ScheduleRow], baseline: NaiveDateTime) -> Option<BusCandidate> {
    let date = baseline.date();
    let mut best: Option<BusCandidate> = None;

    for row in rows {
        let Some(bus) = &row.bus else { continue };

        let mut consider = |minute: u32, on_demand: bool| {
            let Some(departs) = row.instant(date, minute) else {
                return;
            };
            if departs >= baseline && best.map_or(true, |b| departs < b.departs) {
                best = Some(BusCandidate { departs, on_demand });
            }
        };

        match bus {
            BusBlock::OnDemand => consider(baseline.minute(), true),
            BusBlock::Fixed(minutes) => {
                for minute in minutes {
                    consider(*minute, false);
                }
            }
        }
    }

    best
}

/// Find the earliest train departing strictly after `after`.
///
/// Strictly after: a train at exactly the transfer instant is treated as
/// missed.
pub fn find_next_train(rows: &[ScheduleRow], after: NaiveDateTime) -> Option<TrainConnection> {
    let date = after.date();
    let mut best: Option<TrainConnection> = None;

    for row in rows {
        for call in &row.trains {
            let Some(departs) = row.instant(date, call.minute) else {
                continue;
            };
            if departs <= after {
                continue;
            }
            if best.map_or(true, |b| departs < b.departs) {
                best = Some(TrainConnection {
                    departs,
                    destination: call.destination,
                    wait_mins: minutes_between(after, departs),
                });
            }
        }
    }

    best
}

/// Produce a recommendation for one location at one instant.
///
/// Never fails: every branch of the decision tree ends in a defined
/// [`Outcome`].
pub fn recommend(
    location: &Location,
    now: NaiveDateTime,
    rows: &[ScheduleRow],
    config: &AdvisorConfig,
) -> Recommendation {
    let walk_arrival = now + location.walk();

    let Some(bus) = find_next_bus(rows, walk_arrival) else {
        debug!(location = %location.name, "no bus after walking arrival");
        return Recommendation {
            location: location.name.clone(),
            outcome: Outcome::NoServiceToday,
        };
    };

    if bus.on_demand {
        // Fixed assumed wait instead of a slack computation; measured
        // from now, not from the resolved candidate instant.
        let transfer = walk_arrival + config.on_demand_transfer();
        let train = find_next_train(rows, transfer);
        return Recommendation {
            location: location.name.clone(),
            outcome: Outcome::OnDemand {
                bus_wait_mins: minutes_between(walk_arrival, bus.departs),
                train,
            },
        };
    }

    let slack = minutes_between(walk_arrival, bus.departs);
    debug!(location = %location.name, slack, departs = %bus.departs, "next bus found");

    let urgency = if slack >= config.leeway_mins {
        Urgency::Leeway
    } else if slack >= config.depart_soon_mins {
        Urgency::DepartSoon
    } else {
        let run_arrival = now + location.run();
        let run_slack = minutes_between(run_arrival, bus.departs);
        if run_slack >= config.run_mins {
            Urgency::Hurry
        } else {
            // Even running misses this one; name the bus after it.
            // This branch terminates without a train lookup.
            let outcome = match find_next_bus(rows, bus.departs + config.next_bus_offset()) {
                Some(next) => {
                    let wait_mins = minutes_between(walk_arrival, next.departs);
                    if wait_mins >= 0.0 {
                        Outcome::NextBusOnly { wait_mins }
                    } else {
                        Outcome::NoViableBus
                    }
                }
                None => Outcome::NoViableBus,
            };
            return Recommendation {
                location: location.name.clone(),
                outcome,
            };
        }
    };

    let transfer = bus.departs + config.transfer();
    let train = find_next_train(rows, transfer);

    Recommendation {
        location: location.name.clone(),
        outcome: Outcome::Scheduled {
            urgency,
            bus_departs: bus.departs,
            bus_wait_mins: slack,
            train,
        },
    }
}
