//! CLI infrastructure for the noughts tool
//!
//! This module provides the command-line interface for analyzing positions,
//! watching optimal self-play, and evaluating the optimal agent.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or search
/// details when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "noughts=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
