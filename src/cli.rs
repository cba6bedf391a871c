//! Clap argument surface and invocation validation.
//!
//! The positional surface mirrors the classic usage line
//! `[user_id] <api_url> <api_key>`: the last two arguments are always
//! the panel URL and API key, and an optional leading argument selects
//! an owning user.

use clap::Parser;

use crate::constants;
use crate::error::AppError;

/// List servers registered in a Pterodactyl panel, optionally filtered
/// by owning user.
#[derive(Parser, Debug)]
#[command(
    name = constants::APP_NAME,
    version = constants::VERSION,
    about = "List Pterodactyl panel servers, optionally filtered by owner",
    override_usage = "ptero-servers [user_id] <api_url> <api_key>",
)]
pub struct Cli {
    /// Positional arguments: `[user_id] <api_url> <api_key>`.
    ///
    /// Validated by [`Invocation::from_args`] rather than clap so that a
    /// wrong argument count exits with the usage line and code 1.
    /// Hyphen values stay legal so an explicit negative user id (= no
    /// filter) is not mistaken for a flag.
    #[arg(value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Owning user to filter on; zero or negative means "no filter".
    pub user_id: i64,
    /// Panel base URL, e.g. `https://panel.example.com`.
    pub api_url: String,
    /// Application API bearer token.
    pub api_key: String,
}

impl Invocation {
    /// Interpret the positional arguments.
    ///
    /// Two arguments are the URL and key; three put a user id in front.
    /// A non-numeric user id degrades to `0`, which selects every
    /// record whose owner field is absent and, because the filter rule
    /// is `user_id <= 0`, every other record too.
    pub fn from_args(args: &[String]) -> Result<Self, AppError> {
        match args {
            [api_url, api_key] => Ok(Self {
                user_id: -1,
                api_url: api_url.clone(),
                api_key: api_key.clone(),
            }),
            [user_id, api_url, api_key] => Ok(Self {
                user_id: user_id.parse().unwrap_or(0),
                api_url: api_url.clone(),
                api_key: api_key.clone(),
            }),
            _ => Err(AppError::Usage),
        }
    }
}
