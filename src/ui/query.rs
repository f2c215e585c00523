// SPDX-License-Identifier: MPL-2.0
//! Date range query controller.
//!
//! Owns the two date inputs and the `Idle → Loading → {Gallery | Error}`
//! lifecycle. The controller never performs I/O itself: [`State::handle`]
//! returns an [`Effect`] and the application turns `Effect::Fetch` into an
//! async task whose completion comes back as [`Message::FeedLoaded`].
//!
//! Every trigger issues a fresh [`RequestToken`]. A completion carrying any
//! other token belongs to a superseded request and is dropped.

use crate::domain::media::{sort_by_date, DateRange, MediaEntry, RangeError};
use crate::error::FetchError;
use chrono::NaiveDate;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Identifies one fetch-and-render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Where the gallery area currently is in its lifecycle.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Gallery(Vec<MediaEntry>),
    Error(FetchError),
}

#[derive(Debug, Clone)]
pub enum Message {
    StartDateChanged(String),
    EndDateChanged(String),
    GetImages,
    FeedLoaded {
        token: RequestToken,
        result: Result<Vec<MediaEntry>, FetchError>,
    },
    SpinnerTick,
}

/// Side effects requested from the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show a blocking alert; no request was started.
    Alert(RangeError),
    /// Start fetching the feed for this token.
    Fetch(RequestToken),
    /// A new gallery replaced the previous content.
    GalleryReady,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    start_input: String,
    end_input: String,
    phase: Phase,
    in_flight: Option<RequestToken>,
    issued: u64,
    range: Option<DateRange>,
    filter_to_range: bool,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new(filter_to_range: bool) -> Self {
        Self {
            filter_to_range,
            ..Self::default()
        }
    }

    /// Handles a controller message. `today` is the current local date.
    pub fn handle(&mut self, message: Message, today: NaiveDate) -> Effect {
        match message {
            Message::StartDateChanged(value) => {
                self.start_input = value;
                Effect::None
            }
            Message::EndDateChanged(value) => {
                self.end_input = value;
                Effect::None
            }
            Message::GetImages => self.trigger(today),
            Message::FeedLoaded { token, result } => self.complete(token, result),
            Message::SpinnerTick => {
                if self.is_loading() {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                Effect::None
            }
        }
    }

    fn trigger(&mut self, today: NaiveDate) -> Effect {
        let range = match DateRange::validate(&self.start_input, &self.end_input, today) {
            Ok(range) => range,
            Err(err) => {
                tracing::info!(%err, "date range rejected");
                return Effect::Alert(err);
            }
        };

        if let Some(previous) = self.in_flight {
            tracing::debug!(?previous, "superseding in-flight request");
        }

        self.issued += 1;
        let token = RequestToken(self.issued);
        self.in_flight = Some(token);
        self.range = Some(range);
        self.phase = Phase::Loading;
        self.spinner_rotation = 0.0;
        Effect::Fetch(token)
    }

    fn complete(
        &mut self,
        token: RequestToken,
        result: Result<Vec<MediaEntry>, FetchError>,
    ) -> Effect {
        if self.in_flight != Some(token) {
            tracing::debug!(?token, "ignoring stale feed completion");
            return Effect::None;
        }
        self.in_flight = None;

        match result {
            Ok(mut entries) => {
                sort_by_date(&mut entries);
                if self.filter_to_range {
                    if let Some(range) = self.range {
                        entries = range.filter(entries);
                    }
                }
                self.phase = Phase::Gallery(entries);
                Effect::GalleryReady
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load feed");
                self.phase = Phase::Error(err);
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn start_input(&self) -> &str {
        &self.start_input
    }

    #[must_use]
    pub fn end_input(&self) -> &str {
        &self.end_input
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Entries of the current gallery, empty unless a gallery is shown.
    #[must_use]
    pub fn entries(&self) -> &[MediaEntry] {
        match &self.phase {
            Phase::Gallery(entries) => entries,
            _ => &[],
        }
    }

    #[must_use]
    pub fn filter_to_range(&self) -> bool {
        self.filter_to_range
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn entry(date: &str) -> MediaEntry {
        MediaEntry {
            date: date.into(),
            title: format!("Title {date}"),
            explanation: format!("Explanation {date}"),
            media_type: MediaType::Image,
            url: format!("https://example.com/{date}.jpg"),
            hdurl: None,
            thumbnail_url: None,
        }
    }

    fn with_inputs(start: &str, end: &str) -> State {
        let mut state = State::new(false);
        state.handle(Message::StartDateChanged(start.into()), today());
        state.handle(Message::EndDateChanged(end.into()), today());
        state
    }

    fn expect_fetch(state: &mut State) -> RequestToken {
        match state.handle(Message::GetImages, today()) {
            Effect::Fetch(token) => token,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn missing_dates_alert_without_fetch() {
        let mut state = with_inputs("2024-01-01", "");
        let effect = state.handle(Message::GetImages, today());
        assert_eq!(effect, Effect::Alert(RangeError::MissingDate));
        assert!(matches!(state.phase(), Phase::Idle));
    }

    #[test]
    fn future_dates_alert_without_fetch() {
        let mut state = with_inputs("2024-01-01", "2024-06-16");
        let effect = state.handle(Message::GetImages, today());
        assert!(matches!(effect, Effect::Alert(RangeError::FutureDate(_))));
        assert!(!state.is_loading());
    }

    #[test]
    fn rejected_trigger_keeps_previous_gallery() {
        let mut state = with_inputs("2024-01-01", "2024-01-03");
        let token = expect_fetch(&mut state);
        state.handle(
            Message::FeedLoaded {
                token,
                result: Ok(vec![entry("2024-01-01")]),
            },
            today(),
        );

        state.handle(Message::EndDateChanged(String::new()), today());
        state.handle(Message::GetImages, today());

        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn valid_range_starts_loading() {
        let mut state = with_inputs("2024-01-01", "2024-01-03");
        expect_fetch(&mut state);
        assert!(state.is_loading());
        assert!(state.entries().is_empty());
    }

    #[test]
    fn successful_load_sorts_ascending() {
        let mut state = with_inputs("2024-01-01", "2024-01-03");
        let token = expect_fetch(&mut state);

        let effect = state.handle(
            Message::FeedLoaded {
                token,
                result: Ok(vec![
                    entry("2024-01-03"),
                    entry("2024-01-01"),
                    entry("2024-01-02"),
                ]),
            },
            today(),
        );

        assert_eq!(effect, Effect::GalleryReady);
        let dates: Vec<&str> = state.entries().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn whole_feed_is_shown_without_range_filter() {
        let mut state = with_inputs("2024-01-02", "2024-01-02");
        let token = expect_fetch(&mut state);
        state.handle(
            Message::FeedLoaded {
                token,
                result: Ok(vec![entry("2023-05-01"), entry("2024-01-02")]),
            },
            today(),
        );
        assert_eq!(state.entries().len(), 2);
    }

    #[test]
    fn range_filter_applies_when_enabled() {
        let mut state = State::new(true);
        state.handle(Message::StartDateChanged("2024-01-02".into()), today());
        state.handle(Message::EndDateChanged("2024-01-02".into()), today());
        let token = expect_fetch(&mut state);
        state.handle(
            Message::FeedLoaded {
                token,
                result: Ok(vec![entry("2023-05-01"), entry("2024-01-02")]),
            },
            today(),
        );
        let dates: Vec<&str> = state.entries().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-02"]);
    }

    #[test]
    fn failed_load_shows_error_without_cards() {
        let mut state = with_inputs("2024-01-01", "2024-01-03");
        let token = expect_fetch(&mut state);
        let effect = state.handle(
            Message::FeedLoaded {
                token,
                result: Err(FetchError::Network("offline".into())),
            },
            today(),
        );
        assert_eq!(effect, Effect::None);
        assert!(matches!(state.phase(), Phase::Error(_)));
        assert!(state.entries().is_empty());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = with_inputs("2024-01-01", "2024-01-03");
        let first = expect_fetch(&mut state);
        let second = expect_fetch(&mut state);
        assert_ne!(first, second);

        let effect = state.handle(
            Message::FeedLoaded {
                token: first,
                result: Ok(vec![entry("2024-01-01")]),
            },
            today(),
        );
        assert_eq!(effect, Effect::None);
        assert!(state.is_loading());

        state.handle(
            Message::FeedLoaded {
                token: second,
                result: Ok(vec![entry("2024-01-02"), entry("2024-01-03")]),
            },
            today(),
        );
        assert_eq!(state.entries().len(), 2);
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut state = with_inputs("2024-01-01", "2024-01-03");
        let token = expect_fetch(&mut state);
        state.handle(
            Message::FeedLoaded {
                token,
                result: Ok(vec![entry("2024-01-01")]),
            },
            today(),
        );
        let effect = state.handle(
            Message::FeedLoaded {
                token,
                result: Err(FetchError::Status(500)),
            },
            today(),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn spinner_only_advances_while_loading() {
        let mut state = with_inputs("2024-01-01", "2024-01-03");
        state.handle(Message::SpinnerTick, today());
        assert_eq!(state.spinner_rotation(), 0.0);

        expect_fetch(&mut state);
        state.handle(Message::SpinnerTick, today());
        assert!(state.spinner_rotation() > 0.0);
    }
}
