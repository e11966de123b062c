//! Mock feed client for offline runs and testing.
//!
//! Serves a feed JSON document from a local file as if it were the live
//! endpoint, so the advisor can run without network access.

use std::path::{Path, PathBuf};

use super::error::FeedError;
use super::types::BusFeed;

/// Feed client that reads from a local JSON file.
///
/// The file is re-read on every fetch, so editing it between refresh
/// ticks changes the next result.
#[derive(Debug, Clone)]
pub struct MockFeedClient {
    path: PathBuf,
}

impl MockFeedClient {
    /// Create a mock client serving the given file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and decode the feed file.
    ///
    /// Async for signature symmetry with `FeedClient::fetch`; the read
    /// itself is a tiny local file.
    pub async fn fetch(&self) -> Result<BusFeed, FeedError> {
        let body = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&body).map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn fetch_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "timesheet": [ {{ "list": [ {{ "time": "8" }} ] }} ] }}"#
        )
        .unwrap();

        let client = MockFeedClient::new(file.path());
        let feed = client.fetch().await.unwrap();
        assert_eq!(feed.timesheet.len(), 1);
        assert_eq!(feed.timesheet[0].list.as_ref().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let client = MockFeedClient::new("/nonexistent/bus_data.json");
        assert!(matches!(client.fetch().await, Err(FeedError::Io(_))));
    }

    #[tokio::test]
    async fn garbage_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>maintenance</html>").unwrap();

        let client = MockFeedClient::new(file.path());
        assert!(matches!(client.fetch().await, Err(FeedError::Json { .. })));
    }
}
