//! Diagnostics setup
//!
//! Logs go to stderr; stdout carries command output only, so `joe g ... > .gitignore`
//! stays clean.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pick the log filter for the given verbosity flags
pub fn filter_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing with appropriate verbosity
pub fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::new(filter_directive(verbose, quiet));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_overrides_verbose() {
        assert_eq!(filter_directive(2, true), "error");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(filter_directive(0, false), "warn");
        assert_eq!(filter_directive(1, false), "debug");
        assert_eq!(filter_directive(5, false), "trace");
    }
}
