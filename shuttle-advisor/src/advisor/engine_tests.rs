//! Scenario tests for the recommendation engine.

use chrono::{NaiveDate, NaiveDateTime};

use crate::schedule::{BusBlock, ScheduleRow, TrainCall};

use super::config::AdvisorConfig;
use super::engine::{Outcome, Urgency, find_next_bus, find_next_train, recommend};
use super::locations::Location;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    date().and_hms_opt(hour, min, sec).unwrap()
}

fn at_milli(hour: u32, min: u32, sec: u32, milli: u32) -> NaiveDateTime {
    date().and_hms_milli_opt(hour, min, sec, milli).unwrap()
}

fn bus_row(hour: u32, minutes: &[u32]) -> ScheduleRow {
    ScheduleRow {
        hour,
        bus: Some(BusBlock::Fixed(minutes.to_vec())),
        trains: vec![],
    }
}

fn on_demand_row(hour: u32) -> ScheduleRow {
    ScheduleRow {
        hour,
        bus: Some(BusBlock::OnDemand),
        trains: vec![],
    }
}

fn train_row(hour: u32, calls: &[(u32, &'static str)]) -> ScheduleRow {
    ScheduleRow {
        hour,
        bus: None,
        trains: calls
            .iter()
            .map(|(minute, destination)| TrainCall {
                minute: *minute,
                destination,
            })
            .collect(),
    }
}

fn location(walk_mins: f64, run_mins: f64) -> Location {
    Location {
        name: "Co-op".to_string(),
        walk_mins,
        run_mins,
    }
}

fn config() -> AdvisorConfig {
    AdvisorConfig::default()
}

// --- next-bus search ---

#[test]
fn next_bus_minimum_across_unordered_rows() {
    let rows = vec![bus_row(13, &[5]), bus_row(12, &[50, 20])];
    let bus = find_next_bus(&rows, at(12, 10, 0)).unwrap();
    assert_eq!(bus.departs, at(12, 20, 0));
    assert!(!bus.on_demand);
}

#[test]
fn next_bus_skips_rows_behind_baseline() {
    let rows = vec![bus_row(11, &[55]), bus_row(13, &[5])];
    let bus = find_next_bus(&rows, at(12, 0, 0)).unwrap();
    assert_eq!(bus.departs, at(13, 5, 0));
}

#[test]
fn next_bus_none_when_day_exhausted() {
    let rows = vec![bus_row(9, &[10, 30]), bus_row(10, &[10])];
    assert!(find_next_bus(&rows, at(10, 11, 0)).is_none());
}

#[test]
fn on_demand_resolves_to_baseline_minute() {
    let rows = vec![on_demand_row(12)];
    let bus = find_next_bus(&rows, at(12, 34, 0)).unwrap();
    assert_eq!(bus.departs, at(12, 34, 0));
    assert!(bus.on_demand);
}

#[test]
fn on_demand_and_fixed_compete_by_instant() {
    // Fixed 12:50 beats on-demand 13:10; on-demand 12:10 beats fixed 12:50.
    let rows = vec![bus_row(12, &[50]), on_demand_row(13)];
    let bus = find_next_bus(&rows, at(12, 10, 0)).unwrap();
    assert_eq!(bus.departs, at(12, 50, 0));
    assert!(!bus.on_demand);

    let rows = vec![bus_row(12, &[50]), on_demand_row(12)];
    let bus = find_next_bus(&rows, at(12, 10, 0)).unwrap();
    assert_eq!(bus.departs, at(12, 10, 0));
    assert!(bus.on_demand);
}

// --- next-train search ---

#[test]
fn next_train_is_strictly_after() {
    let rows = vec![train_row(12, &[(15, "Ueno"), (16, "Omiya")])];

    // A train exactly at the transfer instant is treated as missed.
    let train = find_next_train(&rows, at(12, 15, 0)).unwrap();
    assert_eq!(train.departs, at(12, 16, 0));
    assert_eq!(train.destination, "Omiya");
    assert_eq!(train.wait_mins, 1.0);
}

#[test]
fn next_train_none_when_day_exhausted() {
    let rows = vec![train_row(12, &[(15, "Ueno")])];
    assert!(find_next_train(&rows, at(12, 15, 0)).is_none());
}

// --- urgency classification ---

#[test]
fn leeway_scenario_with_transfer() {
    // walk=2, run=1; bus at 12:07 gives slack 5.0 from the 12:02 arrival.
    // Train lookup happens at bus+10 = 12:17: the 12:17 itself is missed,
    // the 12:18 connects.
    let rows = vec![
        bus_row(12, &[7]),
        train_row(12, &[(17, "Ueno"), (18, "Omiya")]),
    ];
    let rec = recommend(&location(2.0, 1.0), at(12, 0, 0), &rows, &config());

    match rec.outcome {
        Outcome::Scheduled {
            urgency,
            bus_departs,
            bus_wait_mins,
            train,
        } => {
            assert_eq!(urgency, Urgency::Leeway);
            assert_eq!(bus_departs, at(12, 7, 0));
            assert_eq!(bus_wait_mins, 5.0);
            let train = train.unwrap();
            assert_eq!(train.departs, at(12, 18, 0));
            assert_eq!(train.destination, "Omiya");
        }
        other => panic!("expected Scheduled, got {other:?}"),
    }
}

#[test]
fn slack_exactly_three_is_leeway() {
    let rows = vec![bus_row(12, &[5])];
    let rec = recommend(&location(2.0, 1.0), at(12, 0, 0), &rows, &config());
    assert!(matches!(
        rec.outcome,
        Outcome::Scheduled {
            urgency: Urgency::Leeway,
            ..
        }
    ));
}

#[test]
fn slack_just_under_three_is_depart_soon() {
    // 60 ms shy of three minutes of slack.
    let rows = vec![bus_row(12, &[5])];
    let rec = recommend(&location(2.0, 1.0), at_milli(12, 0, 0, 60), &rows, &config());
    assert!(matches!(
        rec.outcome,
        Outcome::Scheduled {
            urgency: Urgency::DepartSoon,
            ..
        }
    ));
}

#[test]
fn slack_exactly_one_is_depart_soon() {
    let rows = vec![bus_row(12, &[5])];
    let rec = recommend(&location(4.0, 2.0), at(12, 0, 0), &rows, &config());
    assert!(matches!(
        rec.outcome,
        Outcome::Scheduled {
            urgency: Urgency::DepartSoon,
            ..
        }
    ));
}

#[test]
fn slack_just_under_one_falls_to_run_check() {
    // Walking slack 0.999; running arrives 12:02:00 for a 12:05 bus, so
    // running easily makes it.
    let rows = vec![bus_row(12, &[5])];
    let rec = recommend(&location(4.0, 2.0), at_milli(12, 0, 0, 60), &rows, &config());
    assert!(matches!(
        rec.outcome,
        Outcome::Scheduled {
            urgency: Urgency::Hurry,
            ..
        }
    ));
}

#[test]
fn run_slack_exactly_half_is_hurry() {
    // walk=3 reaches the stop exactly as the 12:03 departs (slack 0);
    // run=2.5 arrives 12:02:30, exactly 0.5 minutes before it.
    let rows = vec![bus_row(12, &[3])];
    let rec = recommend(&location(3.0, 2.5), at(12, 0, 0), &rows, &config());
    assert!(matches!(
        rec.outcome,
        Outcome::Scheduled {
            urgency: Urgency::Hurry,
            ..
        }
    ));
}

#[test]
fn run_slack_just_under_half_names_following_bus() {
    // run=2.501 leaves just under half a minute before the 12:03 bus,
    // missing the Hurry tier; the engine re-searches from 12:04 and
    // names the 12:20, measured from the 12:03 walking arrival. This
    // branch does no train lookup.
    let rows = vec![
        bus_row(12, &[3, 20]),
        train_row(12, &[(30, "Ueno")]),
    ];
    let rec = recommend(&location(3.0, 2.501), at(12, 0, 0), &rows, &config());
    match rec.outcome {
        Outcome::NextBusOnly { wait_mins } => assert_eq!(wait_mins, 17.0),
        other => panic!("expected NextBusOnly, got {other:?}"),
    }
}

#[test]
fn missed_last_bus_is_no_viable_bus() {
    // The 12:03 is out of reach even running and nothing follows it.
    let rows = vec![bus_row(12, &[3])];
    let rec = recommend(&location(3.0, 2.6), at(12, 0, 0), &rows, &config());
    assert_eq!(rec.outcome, Outcome::NoViableBus);
}

#[test]
fn no_bus_after_arrival_is_no_service() {
    let rows = vec![bus_row(9, &[10]), train_row(12, &[(30, "Ueno")])];
    let rec = recommend(&location(2.0, 1.0), at(12, 0, 0), &rows, &config());
    assert_eq!(rec.outcome, Outcome::NoServiceToday);
}

#[test]
fn empty_schedule_is_no_service() {
    let rec = recommend(&location(2.0, 1.0), at(12, 0, 0), &[], &config());
    assert_eq!(rec.outcome, Outcome::NoServiceToday);
}

// --- on-demand branch ---

#[test]
fn on_demand_transfer_is_walk_plus_thirteen() {
    // now + walk(2) + 13 = 12:15 exactly. The 12:15 train is excluded by
    // the strict search; the 12:16 connects with one minute's wait.
    let rows = vec![
        on_demand_row(12),
        train_row(12, &[(15, "Ueno"), (16, "Zushi")]),
    ];
    let rec = recommend(&location(2.0, 1.0), at(12, 0, 0), &rows, &config());

    match rec.outcome {
        Outcome::OnDemand { train, .. } => {
            let train = train.unwrap();
            assert_eq!(train.departs, at(12, 16, 0));
            assert_eq!(train.destination, "Zushi");
            assert_eq!(train.wait_mins, 1.0);
        }
        other => panic!("expected OnDemand, got {other:?}"),
    }
}

#[test]
fn on_demand_bypasses_slack_classification() {
    // Zero slack would otherwise classify as Hurry or worse.
    let rows = vec![on_demand_row(12)];
    let rec = recommend(&location(2.0, 1.0), at(12, 0, 0), &rows, &config());
    assert!(matches!(rec.outcome, Outcome::OnDemand { .. }));
}

#[test]
fn on_demand_without_train_reports_none() {
    let rows = vec![on_demand_row(12), train_row(12, &[(10, "Ueno")])];
    let rec = recommend(&location(2.0, 1.0), at(12, 0, 0), &rows, &config());
    match rec.outcome {
        Outcome::OnDemand { train, .. } => assert!(train.is_none()),
        other => panic!("expected OnDemand, got {other:?}"),
    }
}

// --- end-to-end wiring ---

#[test]
fn destination_codes_flow_through() {
    let rows = vec![bus_row(12, &[10]), train_row(12, &[(25, "Omiya")])];
    let rec = recommend(&location(2.0, 1.0), at(12, 0, 0), &rows, &config());
    match rec.outcome {
        Outcome::Scheduled { train, .. } => {
            assert_eq!(train.unwrap().destination, "Omiya");
        }
        other => panic!("expected Scheduled, got {other:?}"),
    }
}

#[test]
fn train_in_later_hour_connects() {
    // Bus 12:50, transfer 13:00; next train 13:40, wait 40.0.
    let rows = vec![
        bus_row(12, &[50]),
        train_row(12, &[(55, "Ueno")]),
        train_row(13, &[(40, "Ueno")]),
    ];
    let rec = recommend(&location(2.0, 1.0), at(12, 40, 0), &rows, &config());
    match rec.outcome {
        Outcome::Scheduled { train, .. } => {
            let train = train.unwrap();
            assert_eq!(train.departs, at(13, 40, 0));
            assert_eq!(train.wait_mins, 40.0);
        }
        other => panic!("expected Scheduled, got {other:?}"),
    }
}
