// SPDX-License-Identifier: MPL-2.0
//! Client for the static astronomy feed and the images it references.
//!
//! The whole feed is downloaded on every request; ordering and filtering
//! happen client-side. [`with_minimum_display`] pairs any request with a
//! timer so a loading indicator never flashes for less than the configured
//! minimum.

use crate::domain::media::MediaEntry;
use crate::error::FetchError;
use std::future::Future;
use std::time::Duration;

const USER_AGENT: &str = concat!("ApodLens/", env!("CARGO_PKG_VERSION"));

/// Cheaply clonable handle to the feed endpoint.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
}

impl FeedClient {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        // Build client with explicit redirect policy and user agent
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self {
            client,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads and parses the feed. Entries are returned in feed order.
    pub async fn fetch_entries(self) -> Result<Vec<MediaEntry>, FetchError> {
        tracing::debug!(url = %self.url, "fetching feed");
        let body = self.get_bytes(&self.url).await?;
        let entries = parse_feed(&body)?;
        tracing::info!(count = entries.len(), "feed loaded");
        Ok(entries)
    }

    /// Downloads a preview image for display.
    pub async fn fetch_image(self, url: String) -> Result<Vec<u8>, FetchError> {
        self.get_bytes(&url).await
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Parses a feed body: a JSON array of entries.
///
/// Only a body that is not a JSON array fails. Elements that do not
/// describe an entry are skipped.
pub fn parse_feed(body: &[u8]) -> Result<Vec<MediaEntry>, FetchError> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let total = items.len();

    let entries: Vec<MediaEntry> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(index, %err, "skipping unreadable feed entry");
                None
            }
        })
        .collect();

    if entries.len() < total {
        tracing::info!(kept = entries.len(), total, "feed contained unreadable entries");
    }
    Ok(entries)
}

/// Awaits `request` together with a `minimum` delay.
///
/// On success the result is returned once both have finished. On failure
/// the error surfaces only after waiting `minimum` again from the moment
/// of failure.
pub async fn with_minimum_display<T, E, F>(request: F, minimum: Duration) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let delay = async {
        tokio::time::sleep(minimum).await;
        Ok::<(), E>(())
    };

    match tokio::try_join!(request, delay) {
        Ok((value, ())) => Ok(value),
        Err(err) => {
            tokio::time::sleep(minimum).await;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    const MIN: Duration = Duration::from_millis(1200);

    #[test]
    fn parse_feed_reads_array_of_entries() {
        let body = br#"[
            {"date":"2024-01-03","title":"C","explanation":"c","media_type":"image","url":"c.jpg"},
            {"date":"2024-01-01","title":"A","explanation":"a","media_type":"video","url":"https://www.youtube.com/embed/a","thumbnail_url":"a.jpg"}
        ]"#;
        let entries = parse_feed(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "C");
        assert_eq!(entries[1].thumbnail_url.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn parse_feed_rejects_non_json() {
        let err = parse_feed(b"<!doctype html><html></html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn parse_feed_rejects_non_array() {
        assert!(parse_feed(br#"{"date":"2024-01-01"}"#).is_err());
    }

    #[test]
    fn parse_feed_keeps_entries_next_to_incomplete_ones() {
        let body = br#"[
            {"date":"2024-01-01","title":"A","explanation":"a","media_type":"image","url":"a.jpg"},
            {"date":"2024-01-02","title":"B","explanation":"b","media_type":"other"}
        ]"#;
        let entries = parse_feed(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "a.jpg");
        assert_eq!(entries[1].title, "B");
        assert_eq!(entries[1].card_image_url(), None);
    }

    #[test]
    fn parse_feed_skips_elements_that_are_not_entries() {
        let body = br#"[
            {"date":"2024-01-01","title":"A","url":"a.jpg"},
            42,
            {"date":"2024-01-03","title":null,"url":"c.jpg"},
            {"date":"2024-01-04","title":"D","url":"d.jpg"}
        ]"#;
        let titles: Vec<String> = parse_feed(body)
            .unwrap()
            .into_iter()
            .map(|entry| entry.title)
            .collect();
        assert_eq!(titles, ["A", "D"]);
    }

    #[test]
    fn parse_feed_accepts_empty_array() {
        assert!(parse_feed(b"[]").unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn fast_success_waits_for_minimum() {
        let start = Instant::now();
        let result = with_minimum_display(async { Ok::<_, FetchError>(7) }, MIN).await;
        assert_eq!(result, Ok(7));
        assert!(start.elapsed() >= MIN);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_success_is_not_delayed_further() {
        let start = Instant::now();
        let slow = async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Ok::<_, FetchError>(())
        };
        with_minimum_display(slow, MIN).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2));
        assert!(elapsed < Duration::from_secs(2) + MIN);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_surfaces_after_minimum() {
        let start = Instant::now();
        let failing = async { Err::<(), _>(FetchError::Network("offline".into())) };
        let result = with_minimum_display(failing, MIN).await;
        assert_eq!(result, Err(FetchError::Network("offline".into())));
        assert!(start.elapsed() >= MIN);
    }

    #[tokio::test(start_paused = true)]
    async fn late_failure_still_waits_minimum_after_failing() {
        let start = Instant::now();
        let failing = async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Err::<(), _>(FetchError::Status(500))
        };
        assert!(with_minimum_display(failing, MIN).await.is_err());
        assert!(start.elapsed() >= Duration::from_secs(3) + MIN);
    }

    #[test]
    fn client_keeps_configured_url() {
        let client = FeedClient::new("https://example.com/feed.json");
        assert_eq!(client.url(), "https://example.com/feed.json");
    }
}
