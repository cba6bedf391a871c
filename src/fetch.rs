//! HTTP fetcher for the panel's application API.
//!
//! Issues a single authenticated GET for the full server list and
//! returns the raw response body. The body is handed to the reporter
//! regardless of HTTP status: the panel answers errors with JSON
//! documents too, and a non-JSON error page surfaces downstream as a
//! parse diagnostic. A non-2xx status only produces a stderr warning.

use colored::Colorize;
use thiserror::Error;

use crate::constants::{PER_PAGE, SERVERS_PATH, USER_AGENT};

/// Errors raised while talking to the panel.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid panel URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Build the full request URL for the server list.
///
/// The oversized `per_page` asks the panel for everything in one page,
/// sidestepping pagination entirely. Trailing slashes on the base URL
/// are trimmed so the joined path stays canonical.
pub fn server_list_url(api_url: &str) -> String {
    let base = api_url.trim_end_matches('/');
    format!("{base}{SERVERS_PATH}?per_page={PER_PAGE}")
}

/// Fetch the raw server-list body from the panel.
///
/// One request, no retries. The client's default timeout behaviour
/// applies; the call blocks (awaits) until completion or failure.
pub async fn fetch_server_list(api_url: &str, api_key: &str) -> Result<Vec<u8>, FetchError> {
    let url = server_list_url(api_url);
    // Parse eagerly for a clearer message than a send-time failure.
    let parsed: reqwest::Url = url.parse().map_err(|e| FetchError::InvalidUrl {
        url: url.clone(),
        reason: format!("{e}"),
    })?;

    let client = reqwest::Client::new();
    let resp = client
        .get(parsed)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .bearer_auth(api_key)
        .send()
        .await
        .map_err(|e| FetchError::Transport {
            url: url.clone(),
            reason: format!("{e}"),
        })?;

    let status = resp.status();
    if !status.is_success() {
        eprintln!(
            "  {} panel returned HTTP {status} — parsing the body anyway",
            "Warning:".yellow(),
        );
    }

    resp.bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| FetchError::Body(format!("{e}")))
}
