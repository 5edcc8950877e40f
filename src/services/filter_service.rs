//! Affiliation filter
//!
//! Reduces a raw leaderboard to the participants of a single affiliation,
//! producing the per-contest input of the aggregator.

use std::collections::HashSet;

use crate::constants::SCORE_DENOMINATOR;
use crate::error::{AppError, AppResult};
use crate::models::{ContestResult, RawStandings, UserScore};

/// Affiliation filter service
pub struct FilterService;

impl FilterService {
    /// Reduce a raw standings payload to one affiliation.
    ///
    /// Leaderboard order is preserved. Duplicate usernames are rejected here
    /// so the aggregator can assume uniqueness within one contest.
    pub fn filter_by_affiliation(
        contest_id: &str,
        affiliation: &str,
        raw: &RawStandings,
    ) -> AppResult<ContestResult> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for row in &raw.standings_data {
            if row.affiliation != affiliation {
                continue;
            }
            if !seen.insert(row.user_name.as_str()) {
                return Err(AppError::InvalidArgument(format!(
                    "Duplicate username {} in standings for contest {}",
                    row.user_name, contest_id
                )));
            }
            entries.push(UserScore {
                username: row.user_name.clone(),
                total_score: row.total_result.score / SCORE_DENOMINATOR,
            });
        }

        tracing::debug!(
            "Matched {} of {} participants for affiliation {} in {}",
            entries.len(),
            raw.standings_data.len(),
            affiliation,
            contest_id
        );

        Ok(ContestResult {
            contest_id: contest_id.to_string(),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StandingsEntry, TotalResult};

    fn row(user: &str, affiliation: &str, centi_score: i64) -> StandingsEntry {
        StandingsEntry {
            user_name: user.to_string(),
            affiliation: affiliation.to_string(),
            total_result: TotalResult { score: centi_score },
        }
    }

    #[test]
    fn test_filters_and_scales_scores() {
        let raw = RawStandings {
            standings_data: vec![
                row("alice", "Club", 30000),
                row("mallory", "Elsewhere", 40000),
                row("bob", "Club", 20000),
            ],
        };

        let result = FilterService::filter_by_affiliation("abc300", "Club", &raw).unwrap();

        assert_eq!(result.contest_id, "abc300");
        assert_eq!(
            result.entries,
            vec![
                UserScore {
                    username: "alice".to_string(),
                    total_score: 300,
                },
                UserScore {
                    username: "bob".to_string(),
                    total_score: 200,
                },
            ]
        );
    }

    #[test]
    fn test_affiliation_match_is_exact() {
        let raw = RawStandings {
            standings_data: vec![row("alice", "Club", 30000), row("bob", "club", 20000)],
        };

        let result = FilterService::filter_by_affiliation("abc300", "Club", &raw).unwrap();
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].username, "alice");
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        let raw = RawStandings {
            standings_data: vec![row("alice", "Club", 30000)],
        };

        let result = FilterService::filter_by_affiliation("abc300", "Nobody Here", &raw).unwrap();
        assert!(result.entries.is_empty());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let raw = RawStandings {
            standings_data: vec![row("alice", "Club", 30000), row("alice", "Club", 25000)],
        };

        let err = FilterService::filter_by_affiliation("abc300", "Club", &raw).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }
}
