use itertools::Itertools;

use super::rule;
use crate::dashboard::DashboardSnapshot;
use crate::model::{MapResult, MatchDetails, MatchTeam, Numeric, PlayerMapStat};

const ONGOING_EVENTS_SHOWN: usize = 5;
const AGENTS_SHOWN: usize = 2;
const MAP_PLAYERS_SHOWN: usize = 5;

/// Render the structured text dashboard for a snapshot.
pub fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut lines = Vec::new();

    section(&mut lines, "LIVE MATCHES", true);
    if snapshot.live_matches.is_empty() {
        lines.push("  No live matches".to_string());
    }
    for m in &snapshot.live_matches {
        lines.push(format!(
            "  {} [{}] vs [{}] {}",
            m.team1.name,
            score(&m.team1),
            score(&m.team2),
            m.team2.name
        ));
        lines.push(format!("    Event: {}", m.event.as_deref().unwrap_or("N/A")));
    }

    section(&mut lines, "UPCOMING MATCHES", false);
    for m in &snapshot.upcoming_matches {
        lines.push(format!(
            "  {} vs {} - {}",
            m.team1.name,
            m.team2.name,
            m.start_label().unwrap_or("TBD")
        ));
    }

    section(&mut lines, "RECENT RESULTS", false);
    for m in &snapshot.recent_results {
        lines.push(format!(
            "  {} {} - {} {}",
            m.team1.name,
            score(&m.team1),
            score(&m.team2),
            m.team2.name
        ));
    }

    let query = &snapshot.stats_query;
    section(
        &mut lines,
        &format!(
            "TOP PLAYERS ({} - {})",
            query.region.to_string().to_uppercase(),
            query.timespan.label()
        ),
        false,
    );
    for (i, entry) in snapshot.top_players.iter().enumerate() {
        let agents = entry.agents.iter().take(AGENTS_SHOWN).join(", ");
        lines.push(format!(
            "  {:2}. {:<15} | Rating: {:.2} | ACS: {:.0} | Agents: {}",
            i + 1,
            entry.player.name,
            entry.stats.rating,
            entry.stats.acs,
            agents
        ));
    }

    section(
        &mut lines,
        &format!(
            "TEAM RANKINGS ({})",
            snapshot.rankings_region.to_string().to_uppercase()
        ),
        false,
    );
    for (i, team) in snapshot.team_rankings.iter().enumerate() {
        let rank = team.rank.map_or(i + 1, |r| r as usize);
        let rating = team
            .rating
            .map_or_else(|| "N/A".to_string(), |r| format!("{r:.0}"));
        let record = team
            .record
            .map_or_else(|| "-".to_string(), |r| format!("{}-{}", r.wins, r.losses));
        lines.push(format!(
            "  {rank:2}. {:<20} | Rating: {rating} | Record: {record}",
            team.name
        ));
    }

    section(&mut lines, "ONGOING EVENTS", false);
    for event in snapshot.ongoing_events.iter().take(ONGOING_EVENTS_SHOWN) {
        lines.push(format!("  {}", event.name));
        lines.push(format!(
            "    Dates: {} | Prize: {}",
            event.dates.as_deref().unwrap_or("TBD"),
            event.prize_pool.as_deref().unwrap_or("TBD")
        ));
    }

    lines.push(String::new());
    lines.push(rule());
    lines.push(format!(
        "  Last updated: {}",
        snapshot.fetched_at.format("%Y-%m-%dT%H:%M:%S%.6f")
    ));
    lines.push(rule());

    lines.join("\n")
}

/// Render the per-map stat table for a match. Empty when no maps were played yet.
pub fn render_match_details(details: &MatchDetails) -> String {
    if details.maps.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        String::new(),
        format!(
            "Match: {} vs {}",
            details.summary.team1.name, details.summary.team2.name
        ),
    ];
    for map in &details.maps {
        render_map(&mut lines, map);
    }
    lines.join("\n")
}

fn render_map(lines: &mut Vec<String>, map: &MapResult) {
    lines.push(String::new());
    lines.push(format!(
        "  Map: {} ({}-{})",
        map.map, map.team1_score, map.team2_score
    ));
    lines.push(format!(
        "  {:<15} {:<10} {:<12} {:<6} {:<6}",
        "Player", "Agent", "K/D/A", "ACS", "ADR"
    ));
    lines.push(format!("  {}", "-".repeat(50)));
    for player in map.team1_players.iter().take(MAP_PLAYERS_SHOWN) {
        lines.push(player_row(player));
    }
}

fn player_row(player: &PlayerMapStat) -> String {
    let kda = format!(
        "{}/{}/{}",
        stat(&player.kills),
        stat(&player.deaths),
        stat(&player.assists)
    );
    format!(
        "  {:<15} {:<10} {:<12} {:<6} {:<6}",
        player.player_name.as_deref().unwrap_or("N/A"),
        player.agent.as_deref().unwrap_or("N/A"),
        kda,
        stat(&player.acs),
        stat(&player.adr)
    )
}

/// Push a section header; every section but the first is preceded by a blank line.
fn section(lines: &mut Vec<String>, title: &str, first: bool) {
    if !first {
        lines.push(String::new());
    }
    lines.push(rule());
    lines.push(format!("  {title}"));
    lines.push(rule());
}

fn score(team: &MatchTeam) -> String {
    team.score
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

fn stat(value: &Option<Numeric>) -> String {
    value
        .as_ref()
        .map_or_else(|| "0".to_string(), ToString::to_string)
}
