use crate::model::{EventStatus, Region, StatsQuery};

/// One endpoint of the raw JSON dump.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    /// Progress line printed before the request goes out.
    pub progress: &'static str,
    pub title: &'static str,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    /// Entries of `data` to keep, if it is an array.
    pub limit: Option<usize>,
}

/// The endpoints the raw dump walks through, in order.
pub fn raw_sections() -> Vec<RawSection> {
    vec![
        RawSection {
            progress: "Fetching live matches...",
            title: "LIVE MATCHES",
            path: "/matches/live".to_string(),
            query: Vec::new(),
            limit: None,
        },
        RawSection {
            progress: "Fetching upcoming matches...",
            title: "UPCOMING MATCHES (first 3)",
            path: "/matches/upcoming".to_string(),
            query: Vec::new(),
            limit: Some(3),
        },
        RawSection {
            progress: "Fetching NA team rankings...",
            title: "NA TEAM RANKINGS (top 5)",
            path: format!("/teams/rankings/{}", Region::Na),
            query: Vec::new(),
            limit: Some(5),
        },
        RawSection {
            progress: "Fetching stats leaderboard (NA region, last 60 days)...",
            title: "STATS LEADERBOARD (top 3 NA players)",
            path: "/players/stats".to_string(),
            query: StatsQuery::default().to_pairs(),
            limit: Some(3),
        },
        RawSection {
            progress: "Fetching ongoing events...",
            title: "ONGOING EVENTS (first 5)",
            path: "/events".to_string(),
            query: vec![("status", EventStatus::Ongoing.to_string())],
            limit: Some(5),
        },
        RawSection {
            progress: "Fetching available regions...",
            title: "AVAILABLE REGIONS",
            path: "/teams/regions".to_string(),
            query: Vec::new(),
            limit: None,
        },
    ]
}
