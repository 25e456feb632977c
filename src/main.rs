//! Anagram Solver - CLI
//!
//! Lists every dictionary word a rack of letters can spell, highest scoring first.

use anagram_solver::{
    commands::{SolveConfig, solve_racks},
    output::{print_banner, print_solve_result},
    wordlists::{DEFAULT_DICTIONARY, load_from_file},
};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "anagram_solver",
    about = "Find every dictionary word a rack of letters can spell, ranked by tile score",
    version,
    author
)]
struct Cli {
    /// Rack letters, no spaces or blank tiles (several racks are solved in turn)
    #[arg(required = true, value_name = "RACK")]
    racks: Vec<String>,

    /// Newline-delimited dictionary file
    #[arg(short, long, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Show at most this many words per rack
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize the logging system
///
/// Logs go to stderr so they never mix with the word list on stdout.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let tree = load_from_file(&cli.dictionary).with_context(|| {
        format!(
            "Unable to load dictionary file '{}'",
            cli.dictionary.display()
        )
    })?;
    debug!(words = tree.len(), "dictionary ready");

    let configs: Vec<SolveConfig> = cli
        .racks
        .iter()
        .map(|rack| SolveConfig::new(rack).with_limit(cli.limit))
        .collect();
    let results = solve_racks(&configs, &tree);

    print_banner();
    for result in &results {
        print_solve_result(result);
    }
    Ok(())
}
