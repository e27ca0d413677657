//! Logging setup using the `tracing` ecosystem.
//!
//! Diagnostics go to stderr so they never interleave with report output on
//! stdout. Per-file status lines are not log records; they are printed by
//! [`crate::ui`].
//!
//! The level is chosen in this order:
//! 1. `--verbose`: DEBUG for docmatter
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. Default: WARN for docmatter

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither a flag nor `RUST_LOG` picks one
const DEFAULT_FILTER: &str = "docmatter=warn";

/// Build the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("docmatter=debug")
    } else if quiet {
        EnvFilter::new("docmatter=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(verbose: bool, quiet: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(console::colors_enabled_stderr())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_filter_enables_debug() {
        assert_eq!(build_filter(true, false).to_string(), "docmatter=debug");
    }

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(build_filter(true, true).to_string(), "docmatter=debug");
    }

    #[test]
    fn quiet_filter_is_errors_only() {
        assert_eq!(build_filter(false, true).to_string(), "docmatter=error");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(false, true);
        init_logger(true, false);
    }
}
