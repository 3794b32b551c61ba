//! envault - encrypted env files for process bootstrap.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envault::cli::output;
use envault::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ENVAULT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envault=debug")
        } else {
            EnvFilter::new("envault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.env_file, cli.key_path) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            envault::error::Error::NotFound(envault::error::NotFoundError::EnvFile(_)) => {
                Some("run: envault init")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
