//! JSON export
//!
//! Writes the per-contest filtered result sets and the merged best-score
//! table. The field names match the wire's PascalCase convention so the
//! files can be diffed against the site's own payloads.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{BEST_STANDINGS_FILE, FILTERED_FILE_SUFFIX};
use crate::error::{AppError, AppResult};
use crate::models::{BestRecord, ContestResult};

/// Wrapper object shared by both output files
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfoFile<T> {
    #[serde(rename = "UserInfo")]
    pub user_info: Vec<T>,
}

/// Row of a per-contest filtered file
#[derive(Debug, Serialize, Deserialize)]
pub struct FilteredRow {
    #[serde(rename = "UserName")]
    pub username: String,

    #[serde(rename = "TotalScore")]
    pub total_score: i64,

    #[serde(rename = "ContestId")]
    pub contest_id: String,
}

/// Row of the merged best-standings file
#[derive(Debug, Serialize, Deserialize)]
pub struct BestRow {
    #[serde(rename = "UserName")]
    pub username: String,

    #[serde(rename = "TotalScore")]
    pub total_score: i64,

    #[serde(rename = "ContestId")]
    pub contest_id: String,

    #[serde(rename = "Rank")]
    pub rank: u32,
}

/// JSON export service
pub struct ExportService;

impl ExportService {
    /// Write one contest's filtered result set; returns the path written
    pub fn write_filtered(out_dir: &Path, result: &ContestResult) -> AppResult<PathBuf> {
        let rows: Vec<FilteredRow> = result
            .entries
            .iter()
            .map(|entry| FilteredRow {
                username: entry.username.clone(),
                total_score: entry.total_score,
                contest_id: result.contest_id.clone(),
            })
            .collect();

        let path = out_dir.join(format!("{}{}", result.contest_id, FILTERED_FILE_SUFFIX));
        Self::write_json(&path, &UserInfoFile { user_info: rows })?;
        Ok(path)
    }

    /// Write the merged best-score table; returns the path written
    pub fn write_best(out_dir: &Path, records: &[BestRecord]) -> AppResult<PathBuf> {
        let rows: Vec<BestRow> = records
            .iter()
            .map(|record| BestRow {
                username: record.username.clone(),
                total_score: record.best_score,
                contest_id: record.source_contest_id.clone(),
                rank: record.rank,
            })
            .collect();

        let path = out_dir.join(BEST_STANDINGS_FILE);
        Self::write_json(&path, &UserInfoFile { user_info: rows })?;
        Ok(path)
    }

    fn write_json<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::File(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let body = serde_json::to_string_pretty(value)?;
        fs::write(path, body)
            .map_err(|e| AppError::File(format!("Failed to write {}: {}", path.display(), e)))?;

        tracing::info!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserScore;

    fn sample_result() -> ContestResult {
        ContestResult {
            contest_id: "abc300".to_string(),
            entries: vec![
                UserScore {
                    username: "alice".to_string(),
                    total_score: 300,
                },
                UserScore {
                    username: "bob".to_string(),
                    total_score: 200,
                },
            ],
        }
    }

    #[test]
    fn test_write_filtered_shape() {
        let dir = tempfile::tempdir().unwrap();

        let path = ExportService::write_filtered(dir.path(), &sample_result()).unwrap();
        assert_eq!(path.file_name().unwrap(), "abc300_filtered.json");

        let body = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(value["UserInfo"][0]["UserName"], "alice");
        assert_eq!(value["UserInfo"][0]["TotalScore"], 300);
        assert_eq!(value["UserInfo"][0]["ContestId"], "abc300");
        // Per-contest files carry no rank
        assert!(value["UserInfo"][0].get("Rank").is_none());
    }

    #[test]
    fn test_write_best_shape() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![BestRecord {
            username: "carol".to_string(),
            best_score: 400,
            source_contest_id: "abc301".to_string(),
            rank: 1,
        }];

        let path = ExportService::write_best(dir.path(), &records).unwrap();
        assert_eq!(path.file_name().unwrap(), "best_standings.json");

        let body = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        // Scores and ranks serialize as numbers, not strings
        assert_eq!(value["UserInfo"][0]["TotalScore"], 400);
        assert_eq!(value["UserInfo"][0]["Rank"], 1);
        assert_eq!(value["UserInfo"][0]["ContestId"], "abc301");
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("json");

        let path = ExportService::write_filtered(&nested, &sample_result()).unwrap();
        assert!(path.exists());
    }
}
