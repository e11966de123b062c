use std::time::Duration;

use shuttle_advisor::advisor::{AdvisorConfig, campus_locations};
use shuttle_advisor::app::{Advisor, FeedSource, Render, Selection};
use shuttle_advisor::feed::{FeedClient, FeedConfig, MockFeedClient};

/// How often to re-fetch the feed and refresh the display.
const DEFAULT_REFRESH: Duration = Duration::from_secs(20);

/// Render collaborator that prints plain-text lines to stdout.
struct StdoutRender;

impl Render for StdoutRender {
    fn show(&mut self, _location: &str, plain: &str, _html: &str) {
        println!("{plain}");
    }

    fn fetch_failed(&mut self, message: &str) {
        println!("{message}");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Feed source: a local file if FEED_FILE is set, otherwise the live
    // endpoint, optionally via a CORS relay.
    let source = match std::env::var("FEED_FILE") {
        Ok(path) => FeedSource::File(MockFeedClient::new(path)),
        Err(_) => {
            let mut config = FeedConfig::new();
            if let Ok(url) = std::env::var("FEED_URL") {
                config = config.with_feed_url(url);
            }
            if let Ok(url) = std::env::var("RELAY_URL") {
                config = config.with_relay(url);
            }
            FeedSource::Live(FeedClient::new(config).expect("Failed to create feed client"))
        }
    };

    let refresh = std::env::var("REFRESH_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_REFRESH);

    // First CLI argument selects a single building; absent means all.
    let selection = match std::env::args().nth(1) {
        Some(name) => Selection::One(name),
        None => Selection::All,
    };

    let locations = campus_locations();
    if let Selection::One(name) = &selection {
        if locations.get(name).is_none() {
            eprintln!("Unknown location: {name}");
            eprintln!("Known locations:");
            for location in locations.iter() {
                eprintln!("  {}", location.name);
            }
            std::process::exit(2);
        }
    }

    let advisor = Advisor::new(source, locations, AdvisorConfig::default());

    println!("Shuttle advisor refreshing every {}s", refresh.as_secs());
    advisor
        .run(&selection, refresh, &mut StdoutRender)
        .await;
}
