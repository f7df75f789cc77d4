//! chaic-drv - Driver for the Chai lexer
//!
//! Ties the lexer to the outside world: parses the command line, loads
//! `chaic.toml`, installs logging, reads the source file, renders the
//! token stream to stdout and prints diagnostics to stderr.
//!
//! Lexical problems never make the driver fail. Only an unreadable source,
//! a bad command line or a broken configuration does.

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use cli::Cli;
pub use config::Config;
pub use error::{DriverError, Result};
pub use render::EmitFormat;
pub use session::Session;

/// Initialize the logging system.
///
/// Logs go to stderr so that rendered tokens on stdout stay clean.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Runs the driver for already parsed arguments.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    config.apply_overrides(cli.emit, cli.max_literal_len);
    config.validate()?;

    let session = Session::new(config);
    let tokens = session.lex_file(&cli.file)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    session.emit(&tokens, &mut out)?;
    out.flush()?;

    let stderr = std::io::stderr();
    session.write_diagnostics(&mut stderr.lock())?;

    info!(
        tokens = tokens.len(),
        errors = session.handler().error_count(),
        "done"
    );
    Ok(())
}

/// Entry point of the `chaic` binary.
pub fn main() -> anyhow::Result<()> {
    run(Cli::parse())
}
