use std::process::ExitCode;

use station_query::overpass::{OverpassClient, OverpassConfig};
use station_query::report;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays paste-ready
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = OverpassConfig::default();
    if let Ok(url) = std::env::var("OVERPASS_URL") {
        config = config.with_base_url(url);
    }

    let client = match OverpassClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create Overpass client");
            eprintln!("Failed to create Overpass client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    match report::run(&client, &mut stdout.lock()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "station query failed");
            eprintln!("Station query failed: {e}");
            ExitCode::FAILURE
        }
    }
}
