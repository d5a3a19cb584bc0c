//! Decode a JWT from standard input without verifying its signature
//!
//! ```not_rust
//! echo "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjMifQ.sig" | jwtdecode
//! ```

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries the report only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match jwtdecode::run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "aborting");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
