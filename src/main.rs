//! ptero-servers — one-shot Pterodactyl server list CLI.
//!
//! Entry point and error handling boundary. Each failure kind maps to
//! its own exit code: 1 usage, 2 transport, 3 malformed response body.

use std::process;
use std::time::Instant;

use clap::Parser;

use ptero_servers::cli::{Cli, Invocation};
use ptero_servers::error::AppError;
use ptero_servers::fetch;
use ptero_servers::report;

#[tokio::main]
async fn main() {
    let started = Instant::now();
    if let Err(err) = run(started).await {
        match err {
            AppError::Usage => eprintln!("{err}"),
            _ => eprintln!("Error: {err}"),
        }
        process::exit(err.exit_code());
    }
}

async fn run(started: Instant) -> Result<(), AppError> {
    let cli = Cli::parse();
    let invocation = Invocation::from_args(&cli.args)?;

    let body = fetch::fetch_server_list(&invocation.api_url, &invocation.api_key).await?;
    let report = report::build_report(&body, invocation.user_id, started.elapsed())?;

    println!("{}", report.render());
    Ok(())
}
