//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the verbosity count from the command
//! line picks the level for Doppel's own crates and everything else stays
//! at `warn`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn filter_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,doppel={level},doppel_core={level},doppel_ui={level}")
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(verbosity: u8) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(
            filter_directive(0),
            "warn,doppel=info,doppel_core=info,doppel_ui=info"
        );
        assert!(filter_directive(1).contains("doppel_core=debug"));
        assert!(filter_directive(7).contains("doppel=trace"));
    }

    #[test]
    fn test_directive_parses() {
        for verbosity in 0..3 {
            assert!(EnvFilter::try_new(filter_directive(verbosity)).is_ok());
        }
    }
}
