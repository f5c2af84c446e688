use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The `{success, data}` wrapper every endpoint responds with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl<T> Envelope<T> {
    /// Returns the payload when the server reported success, or the
    /// server's failure message otherwise.
    pub fn into_data(self) -> std::result::Result<T, String> {
        if !self.success {
            return Err(self
                .error
                .unwrap_or_else(|| "response reported success: false".to_string()));
        }
        self.data
            .ok_or_else(|| "response carried no data".to_string())
    }
}

/// A value the API sends either as a JSON number or as a string.
///
/// Scores and per-map player stats come in both shapes depending on the
/// page they were scraped from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Integer(v) => Some(*v as f64),
            Numeric::Float(v) => Some(*v),
            Numeric::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // `pad` so column widths like `{:<6}` still apply.
        match self {
            Numeric::Integer(v) => f.pad(&v.to_string()),
            Numeric::Float(v) => f.pad(&v.to_string()),
            Numeric::Text(s) => f.pad(s),
        }
    }
}

/// A resource id; older endpoints send numbers, newer ones strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Numeric(u64),
    Text(String),
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Numeric(id) => write!(f, "{id}"),
            Identifier::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Identifier::Numeric(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Identifier::Text(id.to_string())
    }
}

/// Region codes accepted by the rankings and leaderboard endpoints.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    Na,
    Eu,
    Ap,
    La,
    LaS,
    LaN,
    Oce,
    Kr,
    Mn,
    Gc,
    Br,
    Cn,
    Jp,
}

/// Look-back window for the stats leaderboard.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Timespan {
    #[strum(serialize = "30")]
    #[serde(rename = "30")]
    Days30,
    #[default]
    #[strum(serialize = "60")]
    #[serde(rename = "60")]
    Days60,
    #[strum(serialize = "90")]
    #[serde(rename = "90")]
    Days90,
    #[strum(serialize = "all")]
    #[serde(rename = "all")]
    All,
}

impl Timespan {
    /// Human-readable label, e.g. "Last 60 Days".
    pub fn label(&self) -> String {
        match self {
            Timespan::All => "All Time".to_string(),
            days => format!("Last {days} Days"),
        }
    }
}
