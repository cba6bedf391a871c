//! JSON filter and report construction.
//!
//! Parses the panel response, selects server records by owning user,
//! and renders the result as indented JSON keyed by original array
//! index.

use std::time::Duration;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while interpreting the response body.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("malformed JSON body on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Owner id assumed for a record whose `attributes.user` is missing or
/// non-integer.
const MISSING_OWNER: i64 = 0;

/// The printed result document.
#[derive(Debug, Serialize)]
pub struct ServerReport {
    /// Matching records keyed by their original position in `data`.
    /// Filtering never renumbers: entries at positions 2 and 5 keep the
    /// keys `"2"` and `"5"`.
    pub servers: IndexMap<String, Value>,
    /// Milliseconds of wall-clock time elapsed since process start.
    pub execution_time_ms: f64,
}

impl ServerReport {
    /// Serialize with two-space indentation.
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Parse the raw body and build the result document.
pub fn build_report(
    body: &[u8],
    user_id: i64,
    elapsed: Duration,
) -> Result<ServerReport, ReportError> {
    let root: Value = serde_json::from_slice(body).map_err(|e| {
        // serde_json appends " at line L column C"; keep the message
        // itself and report the line separately.
        let full = e.to_string();
        let message = full.split(" at line ").next().unwrap_or(&full).to_string();
        ReportError::Parse {
            line: e.line(),
            message,
        }
    })?;

    Ok(ServerReport {
        servers: filter_servers(&root, user_id),
        execution_time_ms: elapsed.as_secs_f64() * 1000.0,
    })
}

/// Select entries of the top-level `data` array by owning user.
///
/// A non-positive `user_id` selects everything. An absent or non-array
/// `data` yields an empty map.
pub fn filter_servers(root: &Value, user_id: i64) -> IndexMap<String, Value> {
    let mut servers = IndexMap::new();
    let Some(data) = root.get("data").and_then(Value::as_array) else {
        return servers;
    };

    for (index, record) in data.iter().enumerate() {
        let owner = record
            .get("attributes")
            .and_then(|attrs| attrs.get("user"))
            .and_then(Value::as_i64)
            .unwrap_or(MISSING_OWNER);

        if user_id <= 0 || owner == user_id {
            servers.insert(index.to_string(), record.clone());
        }
    }

    servers
}
