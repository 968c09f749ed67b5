//! Logging setup and flow timing.
//!
//! Uses `tracing` spans with automatic duration tracking via `FmtSpan::CLOSE`.
//! Command entry points carry `#[instrument]`, so `--timing` reports how
//! long each flow took, dialog waits included. Records emitted through the
//! `log` facade by the library crates are bridged into the same subscriber.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Default level for the given flags.
fn default_level(verbose: bool, timing: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else if timing {
        // Span close events are logged at INFO level, so we need at least INFO
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Initialize tracing subscriber with optional timing output.
///
/// # Arguments
/// * `verbose` - If true, enables debug-level logging
/// * `timing` - If true, logs span close events with duration
///
/// `RUST_LOG` refines the default level.
pub fn init_tracing(verbose: bool, timing: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, timing).into())
        .from_env_lossy();

    let span_events = if timing {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    // The subscriber is global and can only be installed once per process,
    // so only the level selection is tested here.
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false, false), LevelFilter::WARN);
        assert_eq!(default_level(false, true), LevelFilter::INFO);
        assert_eq!(default_level(true, false), LevelFilter::DEBUG);
        assert_eq!(default_level(true, true), LevelFilter::DEBUG);
    }
}
