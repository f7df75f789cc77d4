//! Comment and line continuation handling.

use super::Step;
use crate::error::LexError;
use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<'_, I> {
    /// Skips a `#` comment up to, but not including, the line feed.
    pub(crate) fn skip_comment(&mut self) -> Step {
        self.cursor.skip_until('\n');
        Step::Skip
    }

    /// Handles a `\` outside a string.
    ///
    /// `\` directly before a line feed joins the two physical lines. Anything
    /// else is an error and the rest of the line is discarded.
    pub(crate) fn lex_continuation(&mut self) -> Step {
        if self.cursor.match_char('\n') {
            self.line += 1;
            return Step::Skip;
        }
        self.cursor.skip_until('\n');
        Step::Error(LexError::BadContinuation)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;
    use chaic_util::Handler;

    fn lex(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).tokenize();
        (tokens, handler)
    }

    #[test]
    fn test_comment_produces_no_token() {
        let (tokens, handler) = lex("x # trailing words\ny");
        let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::IdName, TokenKind::Newline, TokenKind::IdName, TokenKind::End]
        );
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let (tokens, _) = lex("# only a comment");
        assert_eq!(tokens, [Token::new(TokenKind::End, 1)]);
    }

    #[test]
    fn test_comment_hides_operators_and_quotes() {
        let (tokens, handler) = lex("# \"not a string ! $\n");
        assert_eq!(tokens.len(), 2);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_continuation_joins_lines() {
        let (tokens, _) = lex("a + \\\n    b\n");
        let shape: Vec<(TokenKind, u32)> = tokens.iter().map(|t| (t.kind(), t.line())).collect();
        assert_eq!(
            shape,
            [
                (TokenKind::IdName, 1),
                (TokenKind::Plus, 1),
                (TokenKind::IdName, 2),
                (TokenKind::Newline, 2),
                (TokenKind::End, 3),
            ]
        );
    }

    #[test]
    fn test_bad_continuation_discards_rest_of_line() {
        let (tokens, handler) = lex("a \\ b c\nd");
        let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::IdName, TokenKind::Newline, TokenKind::IdName, TokenKind::End]
        );
        assert_eq!(handler.messages(), ["unexpected character after line break"]);
        assert_eq!(handler.diagnostics()[0].line, 1);
        assert_eq!(tokens[2].line(), 2);
    }
}
