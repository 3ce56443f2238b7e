//! Hacker News search source, backed by the Algolia HN API.
//!
//! The response decoding is a pure function ([`AlgoliaSource::parse_response`])
//! so tests can exercise it without touching the network.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{FetchError, Story, StoryFetcher};
use crate::query::QueryTarget;

/// Top-level search response. Only `hits` is consumed.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

/// One hit as it appears on the wire. Most fields are nullable.
#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "objectID")]
    object_id: String,
    title: Option<String>,
    url: Option<String>,
    author: Option<String>,
    num_comments: Option<u64>,
    points: Option<u64>,
    created_at: Option<DateTime<Utc>>,
}

impl From<Hit> for Story {
    fn from(hit: Hit) -> Self {
        Story {
            object_id: hit.object_id,
            title: hit.title.unwrap_or_default(),
            url: hit.url.filter(|u| !u.is_empty()),
            author: hit.author.unwrap_or_default(),
            num_comments: hit.num_comments.unwrap_or(0),
            points: hit.points.unwrap_or(0),
            created_at: hit.created_at,
        }
    }
}

/// Searches stories over HTTP.
pub struct AlgoliaSource {
    client: Client,
    label: String,
}

impl AlgoliaSource {
    /// Create a new source with the given request timeout.
    pub fn new(label: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hn-search/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            label: label.into(),
        })
    }

    /// Decode a search response body into stories, keeping API order.
    ///
    /// A hit without `objectID` fails the whole response; other missing or
    /// `null` fields degrade to empty values.
    pub fn parse_response(body: &str) -> Result<Vec<Story>, FetchError> {
        let response: SearchResponse = serde_json::from_str(body)?;
        Ok(response.hits.into_iter().map(Story::from).collect())
    }
}

impl StoryFetcher for AlgoliaSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn fetch(&self, target: &QueryTarget) -> Result<Vec<Story>, FetchError> {
        let response = self.client.get(target.url()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text()?;
        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_response_extracts_hits() {
        let body = json!({
            "hits": [
                {
                    "objectID": "16582136",
                    "title": "Stephen Hawking has died",
                    "url": "http://www.bbc.com/news/uk-43396008",
                    "author": "Cogito",
                    "points": 6015,
                    "num_comments": 436,
                    "created_at": "2018-03-14T03:50:30.000Z"
                },
                {
                    "objectID": "3078128",
                    "title": "Steve Jobs has passed away.",
                    "url": "http://www.apple.com/stevejobs/",
                    "author": "patricktomas",
                    "points": 4338,
                    "num_comments": 376
                }
            ],
            "nbHits": 2
        })
        .to_string();

        let stories = AlgoliaSource::parse_response(&body).unwrap();

        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].object_id, "16582136");
        assert_eq!(stories[0].title, "Stephen Hawking has died");
        assert_eq!(stories[0].author, "Cogito");
        assert_eq!(stories[0].points, 6015);
        assert_eq!(stories[0].num_comments, 436);
        assert!(stories[0].created_at.is_some());

        assert_eq!(stories[1].object_id, "3078128");
        assert!(stories[1].created_at.is_none());
    }

    #[test]
    fn null_fields_degrade_to_defaults() {
        let body = json!({
            "hits": [{
                "objectID": "1",
                "title": null,
                "url": null,
                "author": "pg",
                "points": null,
                "num_comments": null
            }]
        })
        .to_string();

        let stories = AlgoliaSource::parse_response(&body).unwrap();

        assert_eq!(stories[0].title, "");
        assert!(stories[0].url.is_none());
        assert_eq!(stories[0].points, 0);
        assert_eq!(stories[0].num_comments, 0);
    }

    #[test]
    fn empty_url_is_treated_as_missing() {
        let body = json!({ "hits": [{ "objectID": "7", "url": "" }] }).to_string();
        let stories = AlgoliaSource::parse_response(&body).unwrap();
        assert!(stories[0].url.is_none());
    }

    #[test]
    fn missing_object_id_is_a_decode_error() {
        let body = json!({ "hits": [{ "title": "no id" }] }).to_string();
        let err = AlgoliaSource::parse_response(&body).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn missing_hits_is_a_decode_error() {
        let err = AlgoliaSource::parse_response("{}").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn name_returns_label() {
        let src = AlgoliaSource::new("HN", Duration::from_secs(5)).unwrap();
        assert_eq!(src.name(), "HN");
    }
}
