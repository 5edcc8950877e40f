//! Standings fetcher
//!
//! Thin HTTP layer between the contest site and the filter. The provider
//! trait is the seam the pipeline is tested through; the production
//! implementation talks to the real standings endpoint with the session
//! cookie from configuration.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::Config;
use crate::constants::{LOGIN_PATH, SESSION_COOKIE_NAME, USER_AGENT};
use crate::error::{AppError, AppResult};
use crate::models::RawStandings;

/// Source of raw standings payloads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StandingsProvider: Send + Sync {
    /// Fetch the raw standings JSON for one contest
    async fn fetch_standings(&self, contest_id: &str) -> AppResult<RawStandings>;
}

/// Client for the AtCoder standings endpoint
pub struct AtCoderClient {
    http: reqwest::Client,
    base_url: String,
    session_cookie: String,
}

impl AtCoderClient {
    /// Build a client from configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session_cookie: format!("{}={}", SESSION_COOKIE_NAME, config.session),
        })
    }

    fn standings_url(&self, contest_id: &str) -> String {
        format!("{}/contests/{}/standings/json", self.base_url, contest_id)
    }
}

#[async_trait]
impl StandingsProvider for AtCoderClient {
    async fn fetch_standings(&self, contest_id: &str) -> AppResult<RawStandings> {
        let url = self.standings_url(contest_id);
        tracing::debug!("Requesting {}", url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::COOKIE, &self.session_cookie)
            .send()
            .await?;

        // A missing or expired session bounces to the login page
        if response.url().path().starts_with(LOGIN_PATH) {
            return Err(AppError::Authentication(
                "Session was rejected; log in again and update ATCODER_SESSION".to_string(),
            ));
        }

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Authentication(
                format!("Server rejected the session for contest {}", contest_id),
            )),
            status if !status.is_success() => Err(AppError::Network(format!(
                "Standings request for {} failed with status {}",
                contest_id, status
            ))),
            _ => {
                let standings = response.json::<RawStandings>().await?;
                tracing::debug!(
                    "Received {} standings rows for {}",
                    standings.standings_data.len(),
                    contest_id
                );
                Ok(standings)
            }
        }
    }
}
