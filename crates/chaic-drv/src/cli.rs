//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::render::EmitFormat;

/// chaic - Chai source scanner
///
/// Scans one Chai source file, prints its tokens and reports lexical
/// diagnostics as `file:line: message` on standard error.
#[derive(Parser, Debug)]
#[command(name = "chaic")]
#[command(author = "Chai Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a Chai source file", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, env = "CHAIC_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CHAIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "CHAIC_NO_COLOR")]
    pub no_color: bool,

    /// Token output format (default: from config)
    #[arg(long, value_enum)]
    pub emit: Option<EmitFormat>,

    /// Maximum length of a single literal (default: from config)
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub max_literal_len: Option<usize>,

    /// Source file to scan
    pub file: PathBuf,
}
