//! Best-score aggregation
//!
//! Merges per-contest result sets into a single best-score-per-user table
//! with competition (min) ranking. This is a pure in-memory fold; no I/O
//! happens here.

use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::models::{BestRecord, ContestResult};

/// Best-score aggregator
pub struct AggregationService;

impl AggregationService {
    /// Merge per-contest results into one best-score table.
    ///
    /// Each username keeps the maximum score observed across all inputs; on
    /// equal scores the earliest-seen contest wins. Tied scores share the
    /// lowest rank of the group and the next distinct score resumes at one
    /// plus the number of strictly better records. The output is ordered by
    /// rank, then username.
    pub fn aggregate(results: &[ContestResult]) -> AppResult<Vec<BestRecord>> {
        if results.is_empty() {
            return Err(AppError::InvalidArgument(
                "At least one contest result is required".to_string(),
            ));
        }

        let mut best: HashMap<&str, (i64, &str)> = HashMap::new();
        for result in results {
            for entry in &result.entries {
                match best.get_mut(entry.username.as_str()) {
                    // Strict comparison keeps the earliest contest on ties
                    Some(current) => {
                        if entry.total_score > current.0 {
                            *current = (entry.total_score, result.contest_id.as_str());
                        }
                    }
                    None => {
                        best.insert(
                            entry.username.as_str(),
                            (entry.total_score, result.contest_id.as_str()),
                        );
                    }
                }
            }
        }

        let mut records: Vec<BestRecord> = best
            .into_iter()
            .map(|(username, (score, contest_id))| BestRecord {
                username: username.to_string(),
                best_score: score,
                source_contest_id: contest_id.to_string(),
                rank: 0,
            })
            .collect();

        // Descending score with username tie-break; once ranks are assigned
        // below, this is exactly rank-then-username order.
        records.sort_by(|a, b| {
            b.best_score
                .cmp(&a.best_score)
                .then_with(|| a.username.cmp(&b.username))
        });

        let mut rank = 1;
        let mut previous_score = None;
        for (index, record) in records.iter_mut().enumerate() {
            if previous_score != Some(record.best_score) {
                rank = index as u32 + 1;
                previous_score = Some(record.best_score);
            }
            record.rank = rank;
        }

        Ok(records)
    }
}
