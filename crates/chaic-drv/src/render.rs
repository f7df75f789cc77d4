//! Token rendering for inspection.
//!
//! Four formats are supported:
//! - `list` - one token per line: `line<TAB>KIND[<TAB>lexeme]`
//! - `pretty` - the stream re-spelled as approximate source, with blocks
//!   shown as braces
//! - `json` - an array of token objects
//! - `none` - nothing

use std::io::Write;

use chaic_lex::{Token, TokenKind};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output format for scanned tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    /// One token per line
    #[default]
    List,
    /// Approximate source text
    Pretty,
    /// JSON array
    Json,
    /// Diagnostics only
    None,
}

/// Writes `tokens` to `out` in `format`.
pub fn render(tokens: &[Token], format: EmitFormat, out: &mut impl Write) -> Result<()> {
    match format {
        EmitFormat::List => {
            for token in tokens {
                writeln!(out, "{}", list_line(token))?;
            }
        },
        EmitFormat::Pretty => {
            for token in tokens {
                write!(out, "{}", pretty(token))?;
            }
            writeln!(out)?;
        },
        EmitFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        },
        EmitFormat::None => {},
    }
    Ok(())
}

/// Formats a token as `line<TAB>KIND[<TAB>lexeme]`.
pub fn list_line(token: &Token) -> String {
    match token.lexeme() {
        Some(lexeme) => format!("{}\t{}\t{}", token.line(), token.kind(), escape(lexeme)),
        None => format!("{}\t{}", token.line(), token.kind()),
    }
}

/// Re-spells a token as source text with readable spacing.
pub fn pretty(token: &Token) -> String {
    use TokenKind::*;

    let kind = token.kind();
    let lexeme = token.lexeme().unwrap_or_default();
    let spelling = kind.spelling().unwrap_or_default();

    match kind {
        Indent => "{\n".to_string(),
        Dedent => "\n}\n".to_string(),
        Newline => "\n".to_string(),
        End => "END".to_string(),
        IdName | TypeName | IntVal | FloatVal => lexeme.to_string(),
        StringVal => format!("\"{}\"", escape(lexeme)),
        And | Or | In => format!(" {} ", spelling),
        Break | Continue | Else | Pass => spelling.to_string(),
        Int | Float | String | Bool | Void | True | False => spelling.to_string(),
        Colon | Uscore | LBrack | LBrace => spelling.to_string(),
        Comma => ", ".to_string(),
        LParen => " (".to_string(),
        RParen | RBrack | RBrace => format!("{} ", spelling),
        k if k.is_keyword() => format!("{} ", spelling),
        _ => format!(" {} ", spelling),
    }
}

/// Escapes a lexeme so it fits on one line and can be quoted.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}
