// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Crate for defining tests that have tracing output.
//!
//! `#[test_with_tracing::test]` behaves like `#[test]`, but installs a
//! subscriber that writes through the test harness capture first, so events
//! only show up for failing tests (or with `--nocapture`).

#[cfg(test)]
extern crate self as test_with_tracing;

pub use test_with_tracing_macro::test;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::DEBUG;

fn targets_from_env() -> Targets {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|var| var.parse().ok())
        .unwrap_or_else(|| Targets::new().with_default(DEFAULT_LEVEL))
}

#[doc(hidden)]
/// Initializes `tracing` for tests. Safe to call from every test; only the
/// first call installs the subscriber.
pub fn init() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .compact()
            .with_ansi(false)
            .log_internal_errors(true)
            .with_test_writer()
            .with_max_level(LevelFilter::TRACE)
            .finish()
            .with(targets_from_env())
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::test;

    #[test]
    fn tracing_event() {
        tracing::info!(guid = "8c8ce578-8a3d-4f1c-9935-896185c32dd3", "resolved");
    }

    #[test]
    fn log_event() {
        log::info!("log records are forwarded too");
    }

    #[test]
    fn with_return() -> Result<(), Box<dyn std::error::Error>> {
        tracing::debug!("ok");
        Ok(())
    }

    #[test]
    fn repeated_init() {
        super::init();
        super::init();
    }
}
