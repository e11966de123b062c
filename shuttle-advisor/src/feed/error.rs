//! Feed client error types.

use std::fmt;

/// Errors from the timetable feed client.
#[derive(Debug)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Endpoint returned a non-success status code
    Status(u16),

    /// Client or relay URL could not be constructed
    BadUrl(String),

    /// Feed file could not be read (mock client)
    Io(std::io::Error),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Http(e) => write!(f, "HTTP error: {e}"),
            FeedError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            FeedError::Status(status) => write!(f, "feed returned status {status}"),
            FeedError::BadUrl(url) => write!(f, "invalid feed URL: {url}"),
            FeedError::Io(e) => write!(f, "feed file error: {e}"),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Http(e) => Some(e),
            FeedError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err)
    }
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        FeedError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::Status(502);
        assert_eq!(err.to_string(), "feed returned status 502");

        let err = FeedError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("<html>"));

        let err = FeedError::BadUrl("not a url".into());
        assert_eq!(err.to_string(), "invalid feed URL: not a url");
    }
}
