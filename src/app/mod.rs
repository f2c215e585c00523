// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery components.
//!
//! The `App` struct wires together the query controller, gallery, modal,
//! preview cache and localization, and translates component effects into
//! side effects like feed fetches, native alerts or opening links.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::facts;
use crate::feed::FeedClient;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{modal, previews, query};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    feed: FeedClient,
    min_loading: Duration,
    query: query::State,
    modal: modal::State,
    previews: previews::Cache,
    /// Chosen once at startup.
    fact: &'static str,
    notifications: notifications::Manager,
    alert_pending: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("feed_url", &self.feed.url())
            .field("entries", &self.query.entries().len())
            .field("modal_open", &self.modal.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::from_config(flags, &config, facts::random_fact(&mut rand::rng()));

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Builds the initial state from flags and an already loaded config.
    pub fn from_config(flags: Flags, config: &config::Config, fact: &'static str) -> Self {
        let feed_url = flags
            .feed_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| config.feed.url().to_owned());
        tracing::info!(%feed_url, "using feed");

        Self {
            i18n: I18n::new(flags.lang, config),
            theme_mode: config.general.theme_mode,
            feed: FeedClient::new(feed_url),
            min_loading: config.feed.min_loading(),
            query: query::State::new(config.feed.filter_to_range()),
            modal: modal::State::default(),
            previews: previews::Cache::new(config.feed.preview_cache_entries()),
            fact,
            notifications: notifications::Manager::new(),
            alert_pending: false,
        }
    }

    fn title(&self) -> String {
        match self.modal.entry() {
            Some(entry) => format!("{} - {}", entry.title, self.i18n.tr("window-title")),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.query.is_loading(),
            self.notifications.has_notifications(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            feed: &self.feed,
            min_loading: self.min_loading,
            query: &mut self.query,
            modal: &mut self.modal,
            previews: &mut self.previews,
            notifications: &mut self.notifications,
            alert_pending: &mut self.alert_pending,
        };

        match message {
            Message::Query(query_message) => update::handle_query_message(&mut ctx, query_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::Preview(preview_message) => {
                self.previews.handle(preview_message);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::AlertDismissed => {
                tracing::debug!("alert dismissed");
                self.alert_pending = false;
                Task::none()
            }
            Message::Tick(_instant) => {
                let today = chrono::Local::now().date_naive();
                self.query.handle(query::Message::SpinnerTick, today);
                self.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            query: &self.query,
            modal: &self.modal,
            previews: &self.previews,
            notifications: &self.notifications,
            fact: self.fact,
        })
    }

    #[must_use]
    pub fn query(&self) -> &query::State {
        &self.query
    }

    #[must_use]
    pub fn modal(&self) -> &modal::State {
        &self.modal
    }

    #[must_use]
    pub fn fact(&self) -> &'static str {
        self.fact
    }

    #[must_use]
    pub fn feed_url(&self) -> &str {
        self.feed.url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{MediaEntry, MediaType};
    use crate::error::FetchError;
    use crate::ui::gallery;

    fn app() -> App {
        App::from_config(
            Flags {
                lang: Some("en-US".into()),
                ..Flags::default()
            },
            &config::Config::default(),
            facts::SPACE_FACTS[0],
        )
    }

    fn entry(date: &str) -> MediaEntry {
        MediaEntry {
            date: date.into(),
            title: format!("Title {date}"),
            explanation: format!("About {date}"),
            media_type: MediaType::Image,
            url: format!("https://example.com/{date}.jpg"),
            hdurl: None,
            thumbnail_url: None,
        }
    }

    fn today() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Issues a request on the app's controller and returns its token.
    fn trigger(app: &mut App) -> query::RequestToken {
        app.query
            .handle(query::Message::StartDateChanged("2024-01-01".into()), today());
        app.query
            .handle(query::Message::EndDateChanged("2024-01-03".into()), today());
        match app.query.handle(query::Message::GetImages, today()) {
            query::Effect::Fetch(token) => token,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    fn load_gallery(app: &mut App, entries: Vec<MediaEntry>) {
        let token = trigger(app);
        let _ = app.update(Message::Query(query::Message::FeedLoaded {
            token,
            result: Ok(entries),
        }));
        assert!(!app.query().is_loading());
    }

    #[test]
    fn feed_url_flag_overrides_config() {
        let app = App::from_config(
            Flags {
                feed_url: Some("https://mirror.example/feed.json".into()),
                ..Flags::default()
            },
            &config::Config::default(),
            facts::SPACE_FACTS[1],
        );
        assert_eq!(app.feed_url(), "https://mirror.example/feed.json");
    }

    #[test]
    fn blank_feed_url_flag_falls_back_to_config() {
        let app = App::from_config(
            Flags {
                feed_url: Some("   ".into()),
                ..Flags::default()
            },
            &config::Config::default(),
            facts::SPACE_FACTS[1],
        );
        assert_eq!(app.feed_url(), config::DEFAULT_FEED_URL);
    }

    #[test]
    fn fact_is_fixed_for_the_session() {
        let mut app = app();
        let fact = app.fact();
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_eq!(app.fact(), fact);
    }

    #[test]
    fn pressing_a_card_opens_its_entry() {
        let mut app = app();
        load_gallery(
            &mut app,
            vec![entry("2024-01-03"), entry("2024-01-01"), entry("2024-01-02")],
        );

        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(1)));

        let shown = app.modal().entry().unwrap();
        assert_eq!(shown.title, "Title 2024-01-02");
        assert_eq!(shown.date, "2024-01-02");
        assert_eq!(shown.explanation, "About 2024-01-02");
        assert!(app.title().starts_with("Title 2024-01-02"));
    }

    #[test]
    fn modal_close_message_hides_modal() {
        let mut app = app();
        load_gallery(&mut app, vec![entry("2024-01-01")]);
        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(0)));
        let _ = app.update(Message::Modal(modal::Message::Close));
        assert!(!app.modal().is_open());
    }

    #[test]
    fn out_of_range_card_index_is_ignored() {
        let mut app = app();
        load_gallery(&mut app, vec![entry("2024-01-01")]);
        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(5)));
        assert!(!app.modal().is_open());
    }

    #[test]
    fn missing_dates_do_not_start_loading() {
        let mut app = app();
        let _ = app.update(Message::Query(query::Message::GetImages));
        assert!(!app.query().is_loading());
    }

    #[test]
    fn trigger_is_ignored_while_alert_is_open() {
        let mut app = app();
        let _ = app.update(Message::Query(query::Message::GetImages));
        assert!(app.alert_pending);

        let _ = app.update(Message::Query(query::Message::StartDateChanged(
            "2024-01-01".into(),
        )));
        let _ = app.update(Message::Query(query::Message::EndDateChanged(
            "2024-01-02".into(),
        )));
        let _ = app.update(Message::Query(query::Message::GetImages));
        assert!(!app.query().is_loading());
        assert_eq!(app.query().start_input(), "2024-01-01");

        let _ = app.update(Message::AlertDismissed);
        let _ = app.update(Message::Query(query::Message::GetImages));
        assert!(!app.alert_pending);
        assert!(app.query().is_loading());
    }

    #[test]
    fn gallery_is_sorted_after_load() {
        let mut app = app();
        load_gallery(
            &mut app,
            vec![entry("2024-01-03"), entry("2024-01-01"), entry("2024-01-02")],
        );
        let dates: Vec<&str> = app.query().entries().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn every_card_image_is_requested_for_large_galleries() {
        let mut app = app();
        let entries: Vec<MediaEntry> = (1..=200)
            .map(|day| {
                let date = chrono::NaiveDate::from_yo_opt(2023, day).unwrap();
                entry(&date.format("%Y-%m-%d").to_string())
            })
            .collect();
        load_gallery(&mut app, entries);

        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(0)));

        let missing = app
            .query()
            .entries()
            .iter()
            .filter_map(MediaEntry::card_image_url)
            .filter(|url| app.previews.get(url).is_none())
            .count();
        assert_eq!(missing, 0);
    }

    #[test]
    fn stale_feed_error_is_ignored() {
        let mut app = app();
        let first = trigger(&mut app);
        let second = trigger(&mut app);

        let _ = app.update(Message::Query(query::Message::FeedLoaded {
            token: first,
            result: Err(FetchError::Status(500)),
        }));
        assert!(app.query().is_loading());

        let _ = app.update(Message::Query(query::Message::FeedLoaded {
            token: second,
            result: Ok(vec![entry("2024-01-01")]),
        }));
        assert_eq!(app.query().entries().len(), 1);
    }
}
