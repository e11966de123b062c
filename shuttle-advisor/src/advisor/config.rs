//! Engine configuration.

use chrono::Duration;

/// Tuning parameters for the recommendation engine.
///
/// The defaults reproduce the published widget's behaviour; the struct
/// exists so tests can pin thresholds explicitly.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Walking slack (minutes) at or above which there is leeway.
    pub leeway_mins: f64,

    /// Walking slack (minutes) at or above which leaving immediately
    /// still works.
    pub depart_soon_mins: f64,

    /// Running slack (minutes) at or above which running still works.
    pub run_mins: f64,

    /// Dwell between the chosen bus's departure and the train platform
    /// (minutes).
    pub transfer_mins: i64,

    /// Assumed wait for an on-demand bus, measured from walking arrival
    /// (minutes).
    pub on_demand_transfer_mins: i64,

    /// Bus wait (minutes) above which walking to the station is advised.
    pub walk_advisory_mins: f64,

    /// Offset past a missed bus before re-searching for the next one
    /// (minutes).
    pub next_bus_offset_mins: i64,
}

impl AdvisorConfig {
    /// Dwell between bus departure and train boarding as a Duration.
    pub fn transfer(&self) -> Duration {
        Duration::minutes(self.transfer_mins)
    }

    /// On-demand wait as a Duration.
    pub fn on_demand_transfer(&self) -> Duration {
        Duration::minutes(self.on_demand_transfer_mins)
    }

    /// Re-search offset as a Duration.
    pub fn next_bus_offset(&self) -> Duration {
        Duration::minutes(self.next_bus_offset_mins)
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            leeway_mins: 3.0,
            depart_soon_mins: 1.0,
            run_mins: 0.5,
            transfer_mins: 10,
            on_demand_transfer_mins: 13,
            walk_advisory_mins: 20.0,
            next_bus_offset_mins: 1,
        }
    }
}
