use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bulls_bot::config::Config;
use bulls_bot::http::UreqTransport;
use bulls_bot::runner::{run, RunOutcome};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Bad configuration");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let http = UreqTransport::new(REQUEST_TIMEOUT);

    match run(&config, &http) {
        Ok(RunOutcome::Posted(id)) => {
            info!(tweet_id = %id, "Tweet posted");
        }
        Ok(RunOutcome::NoGame) => {
            info!("No Bulls game yesterday - nothing to post.");
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
