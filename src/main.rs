// SPDX-License-Identifier: MPL-2.0
use apod_lens::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "apod_lens=info";

const HELP: &str = "\
APOD Lens - browse Astronomy Picture of the Day entries

USAGE:
  apod_lens [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --feed-url <url>     JSON feed to load instead of the configured one
  --config-dir <dir>   Directory containing settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  APOD_LENS_CONFIG_DIR  Config directory (overridden by --config-dir)
  RUST_LOG              Log filter (default: apod_lens=info)
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        feed_url: args.opt_value_from_str("--feed-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
