//! fs-capability - Entry Point
//!
//! Serves file-system capability queries over stdin/stdout.

use log::{error, info};
use std::process::ExitCode;
use tokio::io::{BufReader, stdin, stdout};

use fs_capability::shell::run_session;
use fs_capability::utils::logging::setup_logging;
use fs_capability::{FileSystemProvider, ProviderConfig};

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let config = match ProviderConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let provider = match FileSystemProvider::new(&config) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to start provider: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Serving file system queries on stdin");

    match run_session(&provider, BufReader::new(stdin()), stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Session aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
