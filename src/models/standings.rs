//! Raw standings payload models
//!
//! These mirror the shape of the contest site's standings JSON. Only the
//! fields the affiliation filter consumes are declared; everything else in
//! the payload is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Full standings payload for one contest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStandings {
    #[serde(rename = "StandingsData", default)]
    pub standings_data: Vec<StandingsEntry>,
}

/// One participant row in the raw leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsEntry {
    #[serde(rename = "UserName")]
    pub user_name: String,

    /// Participant-supplied organization label; absent for some accounts
    #[serde(rename = "Affiliation", default)]
    pub affiliation: String,

    #[serde(rename = "TotalResult")]
    pub total_result: TotalResult,
}

/// Aggregate result block for one participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalResult {
    /// Score in centi-points
    #[serde(rename = "Score")]
    pub score: i64,
}
