//! App-wide constants.
//!
//! Centralises the tool name, API route, and request parameters so a
//! rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "ptero-servers";

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent header sent with the API request.
pub const USER_AGENT: &str = concat!("ptero-servers/", env!("CARGO_PKG_VERSION"));

/// Application API route for the server list.
pub const SERVERS_PATH: &str = "/api/application/servers";

/// Oversized `per_page` value so the panel returns every server in a
/// single page. Kept as a string: the value exceeds any integer type it
/// could be formatted from.
pub const PER_PAGE: &str = "1000000000000000000000000000000000000";

/// Usage line printed on argument-count errors.
pub const USAGE: &str = "Usage: ptero-servers [user_id] <api_url> <api_key>";
