//! Story source abstraction.
//!
//! This module defines the [`StoryFetcher`] trait, the [`Story`] record and
//! the error type shared by every source. The concrete Hacker News search
//! client lives in [`algolia`].
//!
//! ## Adding a source
//!
//! 1. Create a new file in this directory.
//! 2. Implement [`StoryFetcher`] for a struct holding its configuration.
//! 3. Re-export it below and construct it in `main.rs`.
//!
//! The fetch worker, the state machine and the UI are source-agnostic.

mod algolia;
mod story;

pub use algolia::AlgoliaSource;
pub use story::Story;

#[cfg(test)]
pub(crate) use story::tests as fixtures;

use thiserror::Error;

use crate::query::QueryTarget;

/// Why a fetch failed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that can turn a [`QueryTarget`] into a list of stories.
///
/// The fetch worker calls [`fetch()`](StoryFetcher::fetch) on a background
/// thread, once per submitted query, so implementations must be
/// [`Send`] + [`Sync`]. A single attempt is made; there are no retries.
pub trait StoryFetcher: Send + Sync {
    /// Human-readable label for log lines.
    fn name(&self) -> &str;

    /// Perform the request and decode the hits.
    fn fetch(&self, target: &QueryTarget) -> Result<Vec<Story>, FetchError>;
}
