//! Feed transports.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::FeedError;

/// Retrieves the raw bytes of a feed document.
///
/// The returned buffer is owned by the caller and dropped once parsed;
/// nothing is written to disk.
pub trait FeedSource {
    /// Fetch the document addressed by `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError>;
}

impl<S: FeedSource + ?Sized> FeedSource for &S {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        (**self).fetch(url)
    }
}

impl<S: FeedSource + ?Sized> FeedSource for Box<S> {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP GET transport.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: reqwest::blocking::Client,
}

impl HttpFeedSource {
    /// Create a transport. `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FeedError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Transport {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        debug!(url, "requesting feed");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FeedError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| FeedError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!(url, bytes = body.len(), "feed received");
        Ok(body.to_vec())
    }
}

/// Reads a previously saved feed document; the URL is ignored.
#[derive(Debug, Clone)]
pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    /// Serve the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file being served.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedSource for FileFeedSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        debug!(path = %self.path.display(), url, "reading feed from file");
        std::fs::read(&self.path).map_err(|source| FeedError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
