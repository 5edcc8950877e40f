//! Application-wide constants

// =============================================================================
// CONTEST SITE
// =============================================================================

/// Default base URL of the contest site
pub const DEFAULT_BASE_URL: &str = "https://atcoder.jp";

/// Path the site redirects to when a session is missing or expired
pub const LOGIN_PATH: &str = "/login";

/// Name of the session cookie attached to standings requests
pub const SESSION_COOKIE_NAME: &str = "REVEL_SESSION";

/// Scores arrive in centi-points on the wire
pub const SCORE_DENOMINATOR: i64 = 100;

// =============================================================================
// HTTP DEFAULTS
// =============================================================================

/// Default per-request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("best-standings/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// OUTPUT DEFAULTS
// =============================================================================

/// Default directory the JSON files are written to
pub const DEFAULT_OUT_DIR: &str = "./json";

/// File name of the merged best-score table
pub const BEST_STANDINGS_FILE: &str = "best_standings.json";

/// Suffix of the per-contest filtered files
pub const FILTERED_FILE_SUFFIX: &str = "_filtered.json";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum contest ID length
pub const MAX_CONTEST_ID_LENGTH: usize = 64;
