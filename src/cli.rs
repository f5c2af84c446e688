use std::time::Duration;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use vlr_dashboard::config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}

/// Valorant esports dashboard
///
/// Fetches live matches, upcoming matches, recent results, the stats
/// leaderboard, team rankings and ongoing events from the statistics API and
/// prints them. Endpoints that fail are reported on stderr and shown empty.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the statistics API.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Give up on a request after this many seconds.
    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECONDS,
        global = true
    )]
    pub timeout_seconds: u64,

    /// Print the dashboard snapshot as JSON instead of text.
    #[arg(long, help_heading = "Dashboard Options")]
    pub json: bool,

    /// Skip the map table of the first live match.
    #[arg(long = "no-details", help_heading = "Dashboard Options")]
    pub no_details: bool,

    /// Log every request, not just failures.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Dump the raw JSON of a few endpoints, trimmed to their first entries.
    Raw,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::new(
            self.base_url.clone(),
            Duration::from_secs(self.timeout_seconds),
        )
    }
}
