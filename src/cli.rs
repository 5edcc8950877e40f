//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::constants::DEFAULT_OUT_DIR;
use crate::error::{AppError, AppResult};
use crate::utils::validation::{validate_affiliation, validate_contest_id};

/// Fetch contest standings, filter them by affiliation, and merge the
/// results into a single best-score table.
#[derive(Debug, Parser)]
#[command(name = "best-standings", version, about)]
pub struct Cli {
    /// Affiliation to filter participants by (exact match)
    #[arg(short, long)]
    pub affiliation: String,

    /// Contest IDs to aggregate, in order (e.g. abc300 abc301)
    #[arg(short, long = "contest-id", num_args = 1.., required = true)]
    pub contest_id: Vec<String>,

    /// Directory the JSON files are written to
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,
}

impl Cli {
    /// Validate arguments beyond what clap enforces structurally
    pub fn validate(&self) -> AppResult<()> {
        validate_affiliation(&self.affiliation)
            .map_err(|e| AppError::InvalidArgument(format!("--affiliation: {}", e)))?;
        for id in &self.contest_id {
            validate_contest_id(id)
                .map_err(|e| AppError::InvalidArgument(format!("--contest-id {}: {}", id, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_invocation() {
        let cli = Cli::parse_from([
            "best-standings",
            "-a",
            "Rustacean Institute",
            "-c",
            "abc300",
            "abc301",
        ]);

        assert_eq!(cli.affiliation, "Rustacean Institute");
        assert_eq!(cli.contest_id, vec!["abc300", "abc301"]);
        assert_eq!(cli.out_dir, PathBuf::from("./json"));
    }

    #[test]
    fn test_repeated_contest_flag() {
        let cli = Cli::parse_from([
            "best-standings",
            "-a",
            "X",
            "-c",
            "abc300",
            "-c",
            "abc301",
        ]);
        assert_eq!(cli.contest_id.len(), 2);
    }

    #[test]
    fn test_validate_rejects_malformed_contest_id() {
        let cli = Cli::parse_from(["best-standings", "-a", "X", "-c", "ABC 300"]);
        let err = cli.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }
}
