//! CLI argument parsing via `clap`.
//!
//! castfix takes no options of its own; clap supplies `--help` and
//! `--version`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "castfix",
    version,
    about = "Patch SQL type-cast mismatches in controllers/historyController.js",
    long_about = "castfix — scans controllers/historyController.js for SQL fragments likely to raise\n\"operator does not exist: character varying = integer\", then rewrites the file in place.\n\nThe betting query block is first replaced with a known-good fallback query; the targeted\ncast fixes run only if that rewrite fails. No backup is made.\n\nOptional settings are read from castfix.toml|yaml in the working directory.",
    after_help = "Examples:\n  cd backend && castfix\n  RUST_LOG=debug castfix"
)]
/// Top-level CLI options.
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_accepts_no_arguments() {
        Cli::command().debug_assert();
        assert!(Cli::try_parse_from(["castfix"]).is_ok());
        assert!(Cli::try_parse_from(["castfix", "--write"]).is_err());
    }
}
