// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! gitacct - switch git identities per repository.

use clap::Parser;
use gitacct::cli::{run, usage_exit_code, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments; usage errors exit with 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    };

    // Set up logging
    setup_logging(cli.debug);
    tracing::debug!("gitacct {}", gitacct::version::version_string());

    // Run the CLI
    if let Err(e) = run(cli) {
        if e.is_fatal() {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", e);
        }
        std::process::exit(e.exit_code());
    }
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("gitacct=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
