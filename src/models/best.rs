//! Best-score aggregation models

use serde::{Deserialize, Serialize};

/// Score of a single participant within one contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScore {
    pub username: String,
    pub total_score: i64,
}

/// One contest's leaderboard reduced to a single affiliation
///
/// Produced by the affiliation filter; immutable once produced. Usernames
/// are unique within one result, in leaderboard order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestResult {
    pub contest_id: String,
    pub entries: Vec<UserScore>,
}

/// A participant's best score across every aggregated contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecord {
    pub username: String,
    pub best_score: i64,
    /// Contest the best score was achieved in; ties keep the earliest-seen contest
    pub source_contest_id: String,
    /// Competition rank; tied scores share the lowest rank of the group
    pub rank: u32,
}
