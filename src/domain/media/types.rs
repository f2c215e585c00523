// SPDX-License-Identifier: MPL-2.0
//! Feed entry types and the rendering decisions derived from them.

use chrono::NaiveDate;
use serde::Deserialize;

/// Date format used by the feed and by the date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Substrings that mark a video URL as embeddable in an inline frame.
pub const EMBEDDABLE_HOST_MARKERS: [&str; 2] = ["youtube.com", "embed"];

/// Kind of media an entry points to.
///
/// Anything the feed labels other than `video` is displayed as an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    #[serde(other)]
    Other,
}

/// One dated astronomy picture or video from the feed.
///
/// Every field is optional in the feed; a missing `url` leaves the entry
/// without a preview.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaEntry {
    /// Publication date as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// What the gallery card shows in its media slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPreview<'a> {
    Image { src: &'a str },
    /// Thumbnail with a play overlay that links out to the video.
    VideoThumbnail { thumbnail: &'a str, link: &'a str },
    /// Plain "View Video" link.
    VideoLink { link: &'a str },
}

/// What the detail modal shows in its media slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMedia<'a> {
    EmbeddedFrame { url: &'a str },
    ExternalLink { url: &'a str },
    Image { src: &'a str },
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| has_source(s))
}

/// Returns `false` for blank URLs, which have nothing to fetch.
#[must_use]
pub fn has_source(url: &str) -> bool {
    !url.trim().is_empty()
}

impl MediaEntry {
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Returns `true` when the URL contains a known embeddable-host marker.
    #[must_use]
    pub fn is_embeddable(&self) -> bool {
        EMBEDDABLE_HOST_MARKERS
            .iter()
            .any(|marker| self.url.contains(marker))
    }

    /// Full resolution source: `hdurl` when present, else `url`.
    #[must_use]
    pub fn full_resolution_src(&self) -> &str {
        non_empty(self.hdurl.as_ref()).unwrap_or(&self.url)
    }

    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        non_empty(self.thumbnail_url.as_ref())
    }

    #[must_use]
    pub fn card_preview(&self) -> CardPreview<'_> {
        if !self.is_video() {
            return CardPreview::Image { src: &self.url };
        }
        match self.thumbnail() {
            Some(thumbnail) => CardPreview::VideoThumbnail {
                thumbnail,
                link: &self.url,
            },
            None => CardPreview::VideoLink { link: &self.url },
        }
    }

    #[must_use]
    pub fn modal_media(&self) -> ModalMedia<'_> {
        if self.is_video() {
            if self.is_embeddable() {
                ModalMedia::EmbeddedFrame { url: &self.url }
            } else {
                ModalMedia::ExternalLink { url: &self.url }
            }
        } else {
            ModalMedia::Image {
                src: self.full_resolution_src(),
            }
        }
    }

    /// Remote images this entry needs for its gallery card.
    #[must_use]
    pub fn card_image_url(&self) -> Option<&str> {
        let url = match self.card_preview() {
            CardPreview::Image { src } => src,
            CardPreview::VideoThumbnail { thumbnail, .. } => thumbnail,
            CardPreview::VideoLink { .. } => return None,
        };
        has_source(url).then_some(url)
    }

    /// Remote image the modal needs, if any.
    #[must_use]
    pub fn modal_image_url(&self) -> Option<&str> {
        match self.modal_media() {
            ModalMedia::Image { src } => has_source(src).then_some(src),
            ModalMedia::EmbeddedFrame { .. } => self.thumbnail(),
            ModalMedia::ExternalLink { .. } => None,
        }
    }
}

/// Sorts entries ascending by date.
///
/// The sort is stable; entries whose date does not parse keep their feed
/// order after all dated entries.
pub fn sort_by_date(entries: &mut [MediaEntry]) {
    entries.sort_by_cached_key(|entry| {
        let date = entry.parsed_date();
        (date.is_none(), date)
    });
}
