//! ptero-servers — one-shot Pterodactyl server list CLI (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod cli;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod report;
