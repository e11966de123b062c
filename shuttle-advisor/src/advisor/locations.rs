//! Campus locations and their durations to the bus stop.
//!
//! Each building has a walking and a running duration to the shuttle
//! stop. The table is static configuration, fixed for the process
//! lifetime.

use std::collections::HashMap;

use chrono::Duration;

/// A building on campus with its durations to the bus stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Display name, unique within the table.
    pub name: String,

    /// Walking duration to the stop, in minutes. May be fractional.
    pub walk_mins: f64,

    /// Running duration to the stop, in minutes. At most `walk_mins`.
    pub run_mins: f64,
}

impl Location {
    /// Walking duration as a chrono Duration (millisecond precision).
    pub fn walk(&self) -> Duration {
        minutes_f64(self.walk_mins)
    }

    /// Running duration as a chrono Duration (millisecond precision).
    pub fn run(&self) -> Duration {
        minutes_f64(self.run_mins)
    }
}

/// Convert fractional minutes to a Duration.
pub(crate) fn minutes_f64(mins: f64) -> Duration {
    Duration::milliseconds((mins * 60_000.0) as i64)
}

/// The static table of campus locations, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Locations {
    by_name: HashMap<String, Location>,
    /// Insertion order, for stable all-locations output.
    order: Vec<String>,
}

impl Locations {
    /// Look up a location by name.
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.by_name.get(name)
    }

    /// Iterate locations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.order.iter().filter_map(|name| self.by_name.get(name))
    }

    /// Number of locations in the table.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Builder for the location table.
///
/// Entries with negative durations or `run > walk` are skipped; the
/// table is hand-maintained and a bad entry should not take down the
/// whole widget.
#[derive(Debug, Default)]
pub struct LocationsBuilder {
    inner: Locations,
}

impl LocationsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location.
    pub fn add(mut self, name: &str, walk_mins: f64, run_mins: f64) -> Self {
        if walk_mins >= 0.0 && (0.0..=walk_mins).contains(&run_mins) {
            if !self.inner.by_name.contains_key(name) {
                self.inner.order.push(name.to_string());
            }
            self.inner.by_name.insert(
                name.to_string(),
                Location {
                    name: name.to_string(),
                    walk_mins,
                    run_mins,
                },
            );
        }
        self
    }

    /// Build the location table.
    pub fn build(self) -> Locations {
        self.inner
    }
}

/// The default campus table: the eight buildings served by the shuttle
/// stop, with measured walk/run minutes.
pub fn campus_locations() -> Locations {
    LocationsBuilder::new()
        .add("Co-op", 2.0, 1.0)
        .add("Memorial Hall", 3.0, 2.0)
        .add("Building 2", 3.5, 2.5)
        .add("Building 3", 3.5, 2.5)
        .add("Building 4", 5.0, 3.0)
        .add("Building 5", 5.0, 3.0)
        .add("Building 6", 5.5, 3.5)
        .add("Library", 5.5, 3.5)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campus_table() {
        let locations = campus_locations();
        assert_eq!(locations.len(), 8);

        let coop = locations.get("Co-op").unwrap();
        assert_eq!(coop.walk_mins, 2.0);
        assert_eq!(coop.run_mins, 1.0);

        assert!(locations.get("Building 9").is_none());
    }

    #[test]
    fn iteration_order_is_stable() {
        let locations = campus_locations();
        let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names[0], "Co-op");
        assert_eq!(names[7], "Library");
    }

    #[test]
    fn builder_skips_invalid_entries() {
        let locations = LocationsBuilder::new()
            .add("ok", 3.0, 2.0)
            .add("run slower than walk", 2.0, 3.0)
            .add("negative", -1.0, 0.0)
            .build();
        assert_eq!(locations.len(), 1);
        assert!(locations.get("ok").is_some());
    }

    #[test]
    fn fractional_durations() {
        let loc = Location {
            name: "Building 2".into(),
            walk_mins: 3.5,
            run_mins: 2.5,
        };
        assert_eq!(loc.walk(), Duration::milliseconds(210_000));
        assert_eq!(loc.run(), Duration::milliseconds(150_000));
    }
}
