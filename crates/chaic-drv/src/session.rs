//! A scanning session: configuration plus the diagnostic handler shared by
//! every lexer it runs.

use std::io::Write;
use std::path::Path;

use chaic_lex::{Lexer, Token};
use chaic_util::Handler;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DriverError, Result};
use crate::render::render;

/// State for one invocation of the driver.
#[derive(Debug)]
pub struct Session {
    config: Config,
    handler: Handler,
}

impl Session {
    /// Creates a session with an empty diagnostic handler.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handler: Handler::new(),
        }
    }

    /// Diagnostics collected so far.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Reads a source file.
    ///
    /// The bytes need not be valid UTF-8; invalid sequences become U+FFFD
    /// and are reported by the lexer as stray characters.
    pub fn read_source(path: &Path) -> Result<String> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "failed to read source");
                Err(DriverError::Unreadable(path.to_path_buf()))
            },
        }
    }

    /// Scans `source` to END, reporting diagnostics under `source_name`.
    pub fn lex_source(&self, source_name: &str, source: &str) -> Vec<Token> {
        info!(source = source_name, "scanning");

        let tokens = Lexer::from_chars(source.chars(), source_name, &self.handler)
            .with_config(self.config.lexer)
            .tokenize();

        debug!(
            source = source_name,
            tokens = tokens.len(),
            errors = self.handler.error_count(),
            "scan finished"
        );
        tokens
    }

    /// Reads and scans the file at `path`.
    pub fn lex_file(&self, path: &Path) -> Result<Vec<Token>> {
        let source = Self::read_source(path)?;
        let name = path.display().to_string();
        Ok(self.lex_source(&name, &source))
    }

    /// Renders tokens in the configured format.
    pub fn emit(&self, tokens: &[Token], out: &mut impl Write) -> Result<()> {
        render(tokens, self.config.output.emit, out)
    }

    /// Writes each collected diagnostic on its own line, in emission order.
    pub fn write_diagnostics(&self, out: &mut impl Write) -> Result<()> {
        for diagnostic in self.handler.diagnostics() {
            writeln!(out, "{}", diagnostic)?;
        }
        Ok(())
    }
}
