//! End-to-end standings pipeline
//!
//! Fetches, filters, and exports each contest in input order, then merges
//! the collected results. A failed fetch for one contest aborts aggregation
//! of all contests in the invocation; no partial-result recovery is
//! attempted.

use std::path::{Path, PathBuf};

use crate::client::StandingsProvider;
use crate::error::{AppError, AppResult};
use crate::models::ContestResult;
use crate::services::{AggregationService, ExportService, FilterService};

/// What a completed run produced
#[derive(Debug)]
pub struct RunSummary {
    /// Per-contest filtered files, in input order
    pub filtered_paths: Vec<PathBuf>,
    /// Merged best-score table
    pub best_path: PathBuf,
    /// Number of distinct participants in the merged table
    pub participants: usize,
}

/// Pipeline orchestration service
pub struct StandingsService;

impl StandingsService {
    /// Run the whole pipeline for a list of contests
    pub async fn run(
        provider: &dyn StandingsProvider,
        affiliation: &str,
        contest_ids: &[String],
        out_dir: &Path,
    ) -> AppResult<RunSummary> {
        if contest_ids.is_empty() {
            return Err(AppError::InvalidArgument(
                "At least one contest ID is required".to_string(),
            ));
        }

        let mut results: Vec<ContestResult> = Vec::with_capacity(contest_ids.len());
        let mut filtered_paths = Vec::with_capacity(contest_ids.len());

        for contest_id in contest_ids {
            tracing::info!("Retrieving standings for {}", contest_id);
            let raw = provider.fetch_standings(contest_id).await?;

            let result = FilterService::filter_by_affiliation(contest_id, affiliation, &raw)?;
            tracing::info!(
                "{} participants with affiliation {} in {}",
                result.entries.len(),
                affiliation,
                contest_id
            );

            filtered_paths.push(ExportService::write_filtered(out_dir, &result)?);
            results.push(result);
        }

        let best = AggregationService::aggregate(&results)?;
        let best_path = ExportService::write_best(out_dir, &best)?;

        Ok(RunSummary {
            filtered_paths,
            best_path,
            participants: best.len(),
        })
    }
}
