//! castfix CLI binary entry point.
//! Resolves settings, runs the patch pass, and prints results.

use castfix::config::{self, Effective};
use castfix::{cli::Cli, output, run, utils};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let _cli = Cli::parse();
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let eff = config::resolve_effective(&root);
    init_tracing(&eff);

    for note in &eff.notes {
        eprintln!("{} {}", utils::note_prefix(), note);
    }

    output::print_banner(&eff);
    match run::run(&eff) {
        Ok(report) => output::print_report(&report, &eff),
        Err(err) => output::print_not_found(&err, &eff),
    }
    // Success and failure are reported in text only; exit status stays 0.
}

/// Initialize tracing subscriber on stderr.
fn init_tracing(eff: &Effective) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&eff.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(eff.color)
        .with_writer(std::io::stderr)
        .init();
}
