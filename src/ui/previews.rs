// SPDX-License-Identifier: MPL-2.0
//! Remote preview images for gallery cards and the detail modal.
//!
//! A bounded LRU cache maps an image URL to its load state. Views only read
//! the cache; the application asks it which URLs still need fetching and
//! spawns one task per URL.
//!
//! The capacity grows with the gallery so every card keeps its image, with
//! the configured size left over for modal images and older galleries.

use crate::error::FetchError;
use crate::feed::FeedClient;
use iced::widget::image;
use iced::Task;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Load state of one remote image.
#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        url: String,
        result: Result<image::Handle, FetchError>,
    },
}

#[derive(Debug)]
pub struct Cache {
    entries: LruCache<String, Preview>,
    /// Slots kept beyond the current gallery.
    spare: NonZeroUsize,
}

impl Cache {
    /// Creates a cache holding at most `capacity` images (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let spare = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(spare),
            spare,
        }
    }

    /// Resizes the cache to hold `gallery_len` card images plus the spare
    /// slots.
    pub fn fit_gallery(&mut self, gallery_len: usize) {
        let capacity = self.spare.saturating_add(gallery_len);
        if capacity != self.entries.cap() {
            tracing::debug!(capacity = capacity.get(), "resizing preview cache");
            self.entries.resize(capacity);
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Current state for `url` without touching recency.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Preview> {
        self.entries.peek(url)
    }

    /// Marks `url` as loading. Returns `true` when the caller should start a
    /// fetch, `false` when the URL is already cached or in flight.
    pub fn request(&mut self, url: &str) -> bool {
        if self.entries.get(url).is_some() {
            return false;
        }
        self.entries.put(url.to_owned(), Preview::Loading);
        true
    }

    /// Stores the outcome of a fetch.
    ///
    /// Results for URLs evicted while in flight are dropped, so a late
    /// completion never pushes out a newer entry.
    pub fn complete(&mut self, url: String, result: Result<image::Handle, FetchError>) {
        let Some(slot) = self.entries.peek_mut(&url) else {
            tracing::debug!(%url, "dropping preview for evicted request");
            return;
        };
        *slot = match result {
            Ok(handle) => Preview::Ready(handle),
            Err(err) => {
                tracing::debug!(%url, %err, "preview image failed");
                Preview::Failed
            }
        };
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Loaded { url, result } => self.complete(url, result),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Requests every URL not yet cached and returns the batched fetch tasks.
///
/// URLs already cached are marked as recently used, so later URLs in
/// `urls` evict older entries first.
pub fn load<'a>(
    cache: &mut Cache,
    client: &FeedClient,
    urls: impl IntoIterator<Item = &'a str>,
) -> Task<Message> {
    let tasks: Vec<Task<Message>> = urls
        .into_iter()
        .filter(|url| cache.request(url))
        .map(|url| fetch(client.clone(), url.to_owned()))
        .collect();
    Task::batch(tasks)
}

fn fetch(client: FeedClient, url: String) -> Task<Message> {
    Task::perform(
        {
            let url = url.clone();
            async move {
                client
                    .fetch_image(url)
                    .await
                    .map(image::Handle::from_bytes)
            }
        },
        move |result| Message::Loaded {
            url: url.clone(),
            result,
        },
    )
}
