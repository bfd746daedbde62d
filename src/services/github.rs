/// GitHub repository lookup for profile enrichment.
///
/// Read-only passthrough keyed by a public GitHub username. Upstream failure
/// is contained to the request; it never takes the process down.
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GithubConfig;
use crate::error::{AppError, Result};

const REPOS_PER_PAGE: u8 = 5;

#[derive(Clone)]
pub struct GithubClient {
    config: GithubConfig,
    http: Client,
}

/// Subset of the repository fields surfaced to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: i64,
    pub forks_count: i64,
    pub language: Option<String>,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch the newest public repositories for a username.
    pub async fn fetch_repos(&self, username: &str) -> Result<Vec<RepoSummary>> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=created:asc",
            self.config.api_url, username, REPOS_PER_PAGE
        );

        let mut request = self.http.get(&url).header(USER_AGENT, "devconnect-service");
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%username, error = %e, "GitHub request failed");
            AppError::Upstream(e.to_string())
        })?;

        if !response.status().is_success() {
            tracing::debug!(%username, status = %response.status(), "GitHub lookup miss");
            return Err(AppError::NotFound(
                "no GitHub profile found for that username".to_string(),
            ));
        }

        response.json::<Vec<RepoSummary>>().await.map_err(|e| {
            tracing::warn!(%username, error = %e, "GitHub response decode failed");
            AppError::Upstream(e.to_string())
        })
    }
}
