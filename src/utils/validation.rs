//! Input validation utilities

use crate::constants::MAX_CONTEST_ID_LENGTH;

/// Validate a contest ID as it appears in standings URLs
pub fn validate_contest_id(id: &str) -> Result<(), &'static str> {
    if id.is_empty() {
        return Err("Contest ID cannot be empty");
    }
    if id.len() > MAX_CONTEST_ID_LENGTH {
        return Err("Contest ID is too long");
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        return Err("Contest ID can only contain lowercase letters, digits, underscores, and hyphens");
    }
    Ok(())
}

/// Validate an affiliation filter value
pub fn validate_affiliation(affiliation: &str) -> Result<(), &'static str> {
    if affiliation.trim().is_empty() {
        return Err("Affiliation cannot be empty");
    }
    Ok(())
}
