//! Pizzeria storefront CLI
//!
//! Every invocation restores the cart from the data directory, applies one
//! operation and lets the cart persist itself.

use std::{io, process::ExitCode};

use tracing::error;

use crate::config::Config;

mod commands;
mod config;
mod logging;
mod render;

/// Pizzeria CLI entry point
pub fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            // clap renders help and version requests through this path too
            _ = error.print();

            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("Logging setup error: {error}");
        }

        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();

    match commands::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");

            #[expect(clippy::print_stderr, reason = "user-facing error message")]
            {
                eprintln!("{err}");
            }

            ExitCode::FAILURE
        }
    }
}
