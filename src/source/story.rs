//! The story record shared by every part of the application.
//!
//! A `Story` is one search hit. Sources convert their wire format into
//! `Story` values so the state machine, the derived views and the UI never
//! need to know where a result came from.

use chrono::{DateTime, Utc};

/// A single search result.
///
/// Stories are immutable once received: the only ways one leaves the result
/// set are an explicit dismissal or the next successful fetch replacing the
/// whole list.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Story {
    /// Identifier, unique within one result set (`objectID` on the wire).
    pub object_id: String,

    /// Headline. Empty when the API returned `null`.
    pub title: String,

    /// Link to the submitted page. Ask HN posts and comments have none.
    pub url: Option<String>,

    /// Submitter's user name.
    pub author: String,

    /// Number of comments.
    pub num_comments: u64,

    /// Score.
    pub points: u64,

    /// Submission time, when the API provides one.
    pub created_at: Option<DateTime<Utc>>,
}

impl Story {
    /// Link to the story's discussion page on Hacker News.
    pub fn discussion_url(&self) -> String {
        format!("https://news.ycombinator.com/item?id={}", self.object_id)
    }

    /// The URL a reader would open: the submitted link, or the discussion.
    pub fn target_url(&self) -> String {
        self.url.clone().unwrap_or_else(|| self.discussion_url())
    }
}
