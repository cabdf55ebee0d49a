use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use kartochki::config::Config;
use kartochki::logging::init_tracing;
use kartochki::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "kartochki", version, about = "Study Russian flashcards from the terminal")]
struct Args {
    /// Use this API base URL instead of the configured endpoints.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Target the development endpoint regardless of the host name.
    #[arg(long)]
    dev: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let base_url = resolve_base_url(&args, &config);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    tracing::info!(target: "main", %base_url, "starting");

    runtime::run(base_url, tick_rate)
}

/// An explicit `--api-url` wins, then `--dev`, then the host-name rule:
/// the development endpoint on `localhost`, production anywhere else.
fn resolve_base_url(args: &Args, config: &Config) -> String {
    if let Some(url) = &args.api_url {
        return url.clone();
    }
    if args.dev {
        return config.api.development_url.clone();
    }
    let hostname = std::env::var("HOSTNAME").unwrap_or_default();
    config.api.base_url_for_host(&hostname).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(api_url: Option<&str>, dev: bool) -> Args {
        Args {
            api_url: api_url.map(str::to_string),
            dev,
            config: None,
        }
    }

    #[test]
    fn explicit_url_overrides_everything() {
        let config = Config::default();
        let resolved = resolve_base_url(&args(Some("http://127.0.0.1:9999"), true), &config);
        assert_eq!(resolved, "http://127.0.0.1:9999");
    }

    #[test]
    fn dev_flag_selects_the_development_endpoint() {
        let config = Config::default();
        let resolved = resolve_base_url(&args(None, true), &config);
        assert_eq!(resolved, config.api.development_url);
    }
}
