//! The fetch → parse → recommend → render cycle.
//!
//! Each tick is independent and stateless: the schedule produced by one
//! fetch is fully consumed before the next fetch begins, and a failed
//! tick is simply retried at the next interval.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tracing::warn;

use crate::advisor::{
    AdvisorConfig, FETCH_FAILED_MESSAGE, Locations, recommend, render_html, render_plain,
};
use crate::feed::{BusFeed, FeedClient, FeedError, MockFeedClient};
use crate::schedule::parse_feed;

/// Where the timetable comes from.
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// The live HTTP endpoint (possibly via a relay).
    Live(FeedClient),

    /// A local JSON file, for offline runs and tests.
    File(MockFeedClient),
}

impl FeedSource {
    async fn fetch(&self) -> Result<BusFeed, FeedError> {
        match self {
            FeedSource::Live(client) => client.fetch().await,
            FeedSource::File(client) => client.fetch().await,
        }
    }
}

/// Which locations a cycle reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every location in the table, in table order.
    All,

    /// A single location by name.
    One(String),
}

/// Output collaborator: receives finished display strings.
pub trait Render {
    /// Show the recommendation for one location, in both plain-text and
    /// HTML-snippet form.
    fn show(&mut self, location: &str, plain: &str, html: &str);

    /// The fetch or parse step failed; nothing location-specific to show.
    fn fetch_failed(&mut self, message: &str);
}

/// The advisor application: feed source, location table, and engine
/// configuration, driven by a periodic timer.
pub struct Advisor {
    source: FeedSource,
    locations: Locations,
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(source: FeedSource, locations: Locations, config: AdvisorConfig) -> Self {
        Self {
            source,
            locations,
            config,
        }
    }

    /// Run one cycle against the wall clock.
    pub async fn run_once(&self, selection: &Selection, render: &mut dyn Render) {
        self.run_once_at(Local::now().naive_local(), selection, render)
            .await;
    }

    /// Run one cycle at an explicit instant.
    ///
    /// Fetch and parse failures both surface as the single
    /// data-retrieval message; a selection naming an unknown location
    /// renders nothing.
    pub async fn run_once_at(
        &self,
        now: NaiveDateTime,
        selection: &Selection,
        render: &mut dyn Render,
    ) {
        let feed = match self.source.fetch().await {
            Ok(feed) => feed,
            Err(e) => {
                warn!(error = %e, "feed fetch failed");
                render.fetch_failed(FETCH_FAILED_MESSAGE);
                return;
            }
        };

        let rows = match parse_feed(&feed) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "feed structure unusable");
                render.fetch_failed(FETCH_FAILED_MESSAGE);
                return;
            }
        };

        match selection {
            Selection::All => {
                for location in self.locations.iter() {
                    let rec = recommend(location, now, &rows, &self.config);
                    render.show(
                        &rec.location,
                        &render_plain(&rec, &self.config),
                        &render_html(&rec, &self.config),
                    );
                }
            }
            Selection::One(name) => match self.locations.get(name) {
                Some(location) => {
                    let rec = recommend(location, now, &rows, &self.config);
                    render.show(
                        &rec.location,
                        &render_plain(&rec, &self.config),
                        &render_html(&rec, &self.config),
                    );
                }
                None => warn!(location = %name, "unknown location selected"),
            },
        }
    }

    /// Run cycles forever on a fixed period.
    ///
    /// The first cycle runs immediately; subsequent cycles follow the
    /// period. Never returns.
    pub async fn run(&self, selection: &Selection, period: Duration, render: &mut dyn Render) {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            self.run_once(selection, render).await;
        }
    }
}
