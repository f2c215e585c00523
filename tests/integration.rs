// SPDX-License-Identifier: MPL-2.0
use apod_lens::config::{self, DEFAULT_FEED_URL, DEFAULT_MIN_LOADING_MS};
use apod_lens::domain::media::{DateRange, ModalMedia, RangeError};
use apod_lens::error::FetchError;
use apod_lens::feed;
use apod_lens::i18n::fluent::I18n;
use apod_lens::ui::query::{Effect, Message, Phase, State};
use chrono::NaiveDate;
use std::time::Duration;
use tempfile::tempdir;

const FEED: &str = r#"[
  {"date":"2024-01-03","title":"Comet","explanation":"A comet.","media_type":"image",
   "url":"https://example.com/comet.jpg","hdurl":"https://example.com/comet_hd.jpg"},
  {"date":"2024-01-01","title":"Nebula Flyby","explanation":"A flight.","media_type":"video",
   "url":"https://www.youtube.com/embed/xyz","thumbnail_url":"https://example.com/thumb.jpg"},
  {"date":"2024-01-02","title":"Aurora","explanation":"Lights.","media_type":"video",
   "url":"https://vimeo.com/123"},
  {"date":"2023-12-25","title":"Moon","explanation":"Full moon.","media_type":"image",
   "url":"https://example.com/moon.jpg","copyright":"Someone"}
]"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn run_query(state: &mut State, start: &str, end: &str, body: &[u8]) -> Effect {
    state.handle(Message::StartDateChanged(start.into()), today());
    state.handle(Message::EndDateChanged(end.into()), today());
    let Effect::Fetch(token) = state.handle(Message::GetImages, today()) else {
        panic!("expected a fetch");
    };
    state.handle(
        Message::FeedLoaded {
            token,
            result: feed::parse_feed(body),
        },
        today(),
    )
}

#[test]
fn feed_scenario_renders_sorted_gallery() {
    let mut state = State::new(false);
    let effect = run_query(&mut state, "2024-01-01", "2024-01-03", FEED.as_bytes());

    assert_eq!(effect, Effect::GalleryReady);
    let dates: Vec<&str> = state.entries().iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, ["2023-12-25", "2024-01-01", "2024-01-02", "2024-01-03"]);

    let entries = state.entries();
    assert_eq!(
        entries[1].modal_media(),
        ModalMedia::EmbeddedFrame {
            url: "https://www.youtube.com/embed/xyz"
        }
    );
    assert_eq!(
        entries[2].modal_media(),
        ModalMedia::ExternalLink {
            url: "https://vimeo.com/123"
        }
    );
    assert_eq!(
        entries[3].modal_media(),
        ModalMedia::Image {
            src: "https://example.com/comet_hd.jpg"
        }
    );
}

#[test]
fn range_filter_from_config_limits_gallery() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[feed]\nfilter_to_range = true\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut state = State::new(config.feed.filter_to_range());
    run_query(&mut state, "2024-01-01", "2024-01-02", FEED.as_bytes());

    let titles: Vec<&str> = state.entries().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Nebula Flyby", "Aurora"]);
}

#[test]
fn malformed_feed_shows_error_phase() {
    let mut state = State::new(false);
    run_query(&mut state, "2024-01-01", "2024-01-03", b"<html>not json</html>");

    match state.phase() {
        Phase::Error(err) => {
            assert!(matches!(err, FetchError::Parse(_)));
            assert_eq!(err.i18n_key(), "gallery-error-loading");
        }
        other => panic!("expected error phase, got {other:?}"),
    }
    assert!(state.entries().is_empty());
}

#[test]
fn incomplete_feed_entries_still_reach_the_gallery() {
    let body = br#"[
      {"date":"2024-01-02","title":"No Media","explanation":"b","media_type":"other"},
      {"date":"2024-01-01","title":"Galaxy","explanation":"a","media_type":"image",
       "url":"https://example.com/galaxy.jpg"}
    ]"#;
    let mut state = State::new(false);
    let effect = run_query(&mut state, "2024-01-01", "2024-01-03", body);

    assert_eq!(effect, Effect::GalleryReady);
    let titles: Vec<&str> = state.entries().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Galaxy", "No Media"]);
    assert_eq!(
        apod_lens::ui::gallery::preview_urls(state.entries()).collect::<Vec<_>>(),
        ["https://example.com/galaxy.jpg"]
    );
}

#[test]
fn validation_errors_map_to_localized_alerts() {
    let i18n = I18n::new(Some("en-US".into()), &config::Config::default());

    let missing = DateRange::validate("", "2024-01-01", today()).unwrap_err();
    assert_eq!(
        i18n.tr(missing.i18n_key()),
        "Please select both start and end dates"
    );

    let future = DateRange::validate("2024-01-01", "2030-01-01", today()).unwrap_err();
    assert!(matches!(future, RangeError::FutureDate(_)));
    assert_eq!(
        i18n.tr(future.i18n_key()),
        "Cannot select future dates - No APOD data available yet!"
    );
}

#[test]
fn language_comes_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    std::fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("write en-US config");
    let english = config::load_from_path(&path).expect("load en-US config");
    assert_eq!(I18n::new(None, &english).current_locale().to_string(), "en-US");

    std::fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write fr config");
    let french = config::load_from_path(&path).expect("load fr config");
    let i18n = I18n::new(None, &french);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("fact-box-label"), "Le saviez-vous ?");
}

#[test]
fn missing_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(config.feed.url(), DEFAULT_FEED_URL);
    assert_eq!(
        config.feed.min_loading(),
        Duration::from_millis(DEFAULT_MIN_LOADING_MS)
    );
    assert!(!config.feed.filter_to_range());
}

#[test]
fn invalid_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[feed\nurl = ").expect("write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    assert_eq!(config, config::Config::default());
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_surfaces_after_minimum_delay() {
    let start = tokio::time::Instant::now();
    let minimum = Duration::from_millis(DEFAULT_MIN_LOADING_MS);

    let result = feed::with_minimum_display(
        async { Err::<Vec<()>, _>(FetchError::Network("connection refused".into())) },
        minimum,
    )
    .await;

    assert!(result.is_err());
    assert!(start.elapsed() >= minimum);
}
