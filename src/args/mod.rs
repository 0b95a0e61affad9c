//! Command-line argument parsing and handling.

pub mod definition;
mod handlers;

pub use definition::{Args, process_args};

/// What: Map CLI verbosity flags onto a tracing filter directive.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Filter string for `tracing_subscriber`'s env-filter.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        return "debug".to_owned();
    }
    match args.log_level.trim().to_lowercase().as_str() {
        lvl @ ("trace" | "debug" | "info" | "warn" | "error") => lvl.to_owned(),
        _ => "info".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    /// What: Verbose wins over the level flag and junk levels default to info
    ///
    /// - Input: `--verbose` with `--log-level error`; `--log-level loud`
    /// - Output: `debug` then `info`
    fn log_level_resolution() {
        let args = Args::parse_from(["dashsea", "--verbose", "--log-level", "error"]);
        assert_eq!(determine_log_level(&args), "debug");
        let args = Args::parse_from(["dashsea", "--log-level", "loud"]);
        assert_eq!(determine_log_level(&args), "info");
        let args = Args::parse_from(["dashsea", "--log-level", "WARN"]);
        assert_eq!(determine_log_level(&args), "warn");
    }
}
