//! chaic-lex - Lexical Analyzer for the Chai Programming Language
//!
//! This crate turns Chai source text into a linear stream of tokens for the
//! parser. Chai is indentation sensitive, so besides ordinary tokens the
//! lexer synthesizes `INDENT`, `DEDENT` and `NEWLINE` from the layout of the
//! source.
//!
//! # Example Usage
//!
//! ```
//! use chaic_lex::{Lexer, Token, TokenKind};
//! use chaic_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("let x = 0x1A\n", &handler);
//!
//! assert_eq!(lexer.next_token().kind(), TokenKind::Let);
//! assert_eq!(lexer.next_token(), Token::with_lexeme(TokenKind::IdName, "x", 1));
//! assert_eq!(lexer.next_token().kind(), TokenKind::Assign);
//! assert_eq!(lexer.next_token().lexeme(), Some("0x1A"));
//!
//! // Or iterate; the iterator stops before END
//! for token in Lexer::new("a + b", &handler) {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`keywords`] - The shared reserved word table
//! - [`cursor`] - Character cursor with one character of pushback
//! - [`lexer`] - Main lexer implementation
//! - [`config`] - Lexer tunables
//! - [`error`] - Lexical error taxonomy
//!
//! # Layout
//!
//! The width of the first indented line fixes the indentation unit. Each
//! later line must be indented by a multiple of it, at most one level deeper
//! than the line before. Blank lines and comment-only lines never change the
//! depth. A line starting in column zero closes every open block, and end of
//! input closes whatever is still open before `END`.
//!
//! # Errors
//!
//! Malformed input never stops a scan. Each problem is reported to the
//! [`chaic_util::Handler`] as `file:line: message` and scanning resumes
//! after the offending construct.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LexError, LiteralKind, Radix};
pub use keywords::KeywordTable;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use chaic_util::Handler;

    /// Helper to collect all tokens from source, END included.
    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::new(source, &handler).tokenize()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_function_definition() {
        let source = "def add(a: Int, b: Int) -> Int:\n    return a + b\n";
        let tokens = lex_all(source);

        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::Def,
                TokenKind::IdName,
                TokenKind::LParen,
                TokenKind::IdName,
                TokenKind::Colon,
                TokenKind::Int,
                TokenKind::Comma,
                TokenKind::IdName,
                TokenKind::Colon,
                TokenKind::Int,
                TokenKind::RParen,
                TokenKind::Arrow,
                TokenKind::Int,
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Return,
                TokenKind::IdName,
                TokenKind::Plus,
                TokenKind::IdName,
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::End,
            ]
        );
        assert_eq!(tokens[1].lexeme(), Some("add"));
        assert_eq!(tokens[16].line(), 2);
    }

    #[test]
    fn test_union_type_with_bar_continuation() {
        let source = "type Shape = Circle of Float |\n    Square of Float\n";
        let tokens = lex_all(source);

        assert!(!kinds(&tokens).contains(&TokenKind::Indent));
        assert!(tokens.contains(&Token::with_lexeme(TokenKind::TypeName, "Square", 2)));
        assert_eq!(
            kinds(&tokens).iter().filter(|&&k| k == TokenKind::Newline).count(),
            1
        );
    }

    #[test]
    fn test_match_with_cases() {
        let source = "match xs:\n  case x :: rest:\n    pass\n  case _:\n    pass\n";
        let tokens = lex_all(source);
        let kinds = kinds(&tokens);

        assert!(kinds.contains(&TokenKind::Match));
        assert!(kinds.contains(&TokenKind::Cons));
        assert!(kinds.contains(&TokenKind::Uscore));
        assert_eq!(
            kinds.iter().filter(|&&k| k == TokenKind::Indent).count(),
            kinds.iter().filter(|&&k| k == TokenKind::Dedent).count()
        );
    }

    #[test]
    fn test_lambda_and_lists() {
        let tokens = lex_all("let f = lambda x: [x, 2 ** x, 3.5]");
        assert!(tokens.contains(&Token::new(TokenKind::Lambda, 1)));
        assert!(tokens.contains(&Token::new(TokenKind::Power, 1)));
        assert!(tokens.contains(&Token::with_lexeme(TokenKind::FloatVal, "3.5", 1)));
    }

    #[test]
    fn test_string_payload_has_decoded_escapes() {
        let tokens = lex_all("\"a\\nb\"");
        assert_eq!(tokens[0], Token::with_lexeme(TokenKind::StringVal, "a\nb", 1));
    }

    #[test]
    fn test_scans_are_independent() {
        let handler = Handler::new();
        let mut first = Lexer::new("a:\n  b\n", &handler);
        let mut second = Lexer::new("c:\n    d\n", &handler);
        first.tokenize();
        second.tokenize();
        assert_eq!(first.indent_unit(), 2);
        assert_eq!(second.indent_unit(), 4);
    }
}
