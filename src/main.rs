mod cli;
mod logging;

use clap::Parser;
use cli::{Args, Command};
use vlr_dashboard::app::{self, DashboardView};
use vlr_dashboard::raw::raw_sections;
use vlr_dashboard::{ApiClient, Dashboard, DashboardError, DashboardOptions};

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    let args = Args::parse();
    logging::setup_logging(args.verbose);

    let config = args.config();
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "starting");
    let dashboard = Dashboard::new(ApiClient::from_config(&config)?);
    let mut stdout = std::io::stdout();

    match args.command {
        None => {
            let view = DashboardView {
                json: args.json,
                match_details: !args.no_details,
            };
            app::run_dashboard(&dashboard, &DashboardOptions::default(), view, &mut stdout).await
        }
        Some(Command::Raw) => app::run_raw(&dashboard, &raw_sections(), &mut stdout).await,
    }
}
