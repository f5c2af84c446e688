//! The two console flows: the text dashboard and the raw JSON dump.

use std::io::Write;

use serde_json::Value;
use tracing::info;

use crate::dashboard::{Dashboard, DashboardOptions};
use crate::error::Result;
use crate::raw::RawSection;
use crate::render::{
    render_banner, render_dashboard, render_match_details, render_raw_section,
    truncate_envelope_data,
};

/// How the dashboard flow presents its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardView {
    /// Print the snapshot as JSON instead of text.
    pub json: bool,
    /// Follow up with the map table of the first live match.
    pub match_details: bool,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            json: false,
            match_details: true,
        }
    }
}

/// Fetch every dashboard section, then print it.
pub async fn run_dashboard<W: Write>(
    dashboard: &Dashboard,
    options: &DashboardOptions,
    view: DashboardView,
    out: &mut W,
) -> Result<()> {
    if view.json {
        let snapshot = dashboard.fetch_all(options).await;
        serde_json::to_writer_pretty(&mut *out, &snapshot).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Fetching dashboard data...\n")?;
    let snapshot = dashboard.fetch_all(options).await;
    info!(
        live = snapshot.live_matches.len(),
        upcoming = snapshot.upcoming_matches.len(),
        results = snapshot.recent_results.len(),
        players = snapshot.top_players.len(),
        teams = snapshot.team_rankings.len(),
        events = snapshot.ongoing_events.len(),
        "dashboard fetched"
    );
    writeln!(out, "{}", render_dashboard(&snapshot))?;

    if !view.match_details {
        return Ok(());
    }
    let Some(first) = snapshot.live_matches.first() else {
        return Ok(());
    };
    writeln!(out, "\n\nFetching details for live match {}...", first.id)?;
    if let Some(details) = dashboard.match_details(&first.id).await {
        let table = render_match_details(&details);
        if !table.is_empty() {
            writeln!(out, "{table}")?;
        }
    }
    Ok(())
}

/// Fetch each section as raw JSON and pretty-print it.
///
/// Sections that cannot be fetched print as `null`.
pub async fn run_raw<W: Write>(
    dashboard: &Dashboard,
    sections: &[RawSection],
    out: &mut W,
) -> Result<()> {
    for section in sections {
        writeln!(out, "\n{}", section.progress)?;
        let body = match dashboard.raw(&section.path, &section.query).await {
            Some(mut body) => {
                if let Some(limit) = section.limit {
                    truncate_envelope_data(&mut body, limit);
                }
                body
            }
            None => Value::Null,
        };
        writeln!(out, "{}", render_raw_section(section.title, &body))?;
    }
    writeln!(out, "\n{}", render_banner("EXAMPLE COMPLETE!"))?;
    Ok(())
}
