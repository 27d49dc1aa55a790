//! Host shim: runs the controller over stdin/stdout.
//!
//! Usage: `campusnav [config.toml]`
//!
//! 1. **Load**: Read the optional TOML config, falling back to defaults
//! 2. **Trace**: Install file-based tracing (stdout carries the protocol)
//! 3. **Open storage**: Build the durable → session → memory chain
//! 4. **Serve**: Pump newline-delimited JSON events until stdin closes
//!
//! See [`campusnav::bridge`] for the wire format.

#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::path::Path;
use std::process::ExitCode;

use campusnav::storage::FallbackStorage;
use campusnav::{bridge, initialize, observability, Config};

fn main() -> ExitCode {
    let config = match std::env::args_os().nth(1) {
        Some(path) => match Config::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("campusnav: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    observability::init_tracing(&config);
    let _span = tracing::debug_span!("host_session", role = %config.role).entered();

    let storage = FallbackStorage::from_config(&config);
    let mut nav = initialize(config, storage);

    match bridge::run(&mut nav, io::stdin().lock(), io::stdout().lock()) {
        Ok(stats) => {
            tracing::info!(events = stats.events, rejected = stats.rejected, "session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "host stream failed");
            eprintln!("campusnav: {e}");
            ExitCode::FAILURE
        }
    }
}
