//! Edge case tests for chaic-lex

#[cfg(test)]
mod tests {
    use crate::{KeywordTable, Lexer, Token, TokenKind};
    use chaic_util::Handler;

    fn lex(source: &str) -> (Vec<Token>, Vec<String>) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).tokenize();
        (tokens, handler.messages())
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).0.iter().map(Token::kind).collect()
    }

    fn count(kinds: &[TokenKind], kind: TokenKind) -> usize {
        kinds.iter().filter(|&&k| k == kind).count()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_only_line_feeds() {
        let (tokens, errors) = lex("\n\n\n");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3], Token::new(TokenKind::End, 4));
    }

    #[test]
    fn test_edge_only_spaces() {
        let (tokens, errors) = lex("      ");
        assert!(errors.is_empty());
        assert_eq!(tokens, [Token::new(TokenKind::End, 1)]);
    }

    #[test]
    fn test_edge_crlf_reports_carriage_return() {
        let (tokens, errors) = lex("a\r\nb");
        let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::IdName, TokenKind::Newline, TokenKind::IdName, TokenKind::End]
        );
        assert_eq!(errors, ["stray '\\r' in program"]);
    }

    #[test]
    fn test_edge_tab_indentation_is_not_indentation() {
        let (tokens, errors) = lex("a:\n\tb\n");
        assert!(!tokens.iter().any(|t| t.kind() == TokenKind::Indent));
        assert_eq!(errors, ["stray '\\t' in program"]);
    }

    #[test]
    fn test_edge_hex_literal_payload() {
        let (tokens, errors) = lex("0x1A");
        assert_eq!(
            tokens,
            [
                Token::with_lexeme(TokenKind::IntVal, "0x1A", 1),
                Token::new(TokenKind::End, 1)
            ]
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_float_literal_payload() {
        let (tokens, _) = lex("3.14e-2");
        assert_eq!(tokens[0], Token::with_lexeme(TokenKind::FloatVal, "3.14e-2", 1));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_edge_if_block_shape() {
        assert_eq!(
            kinds("if x:\n    y\nz\n"),
            [
                TokenKind::If,
                TokenKind::IdName,
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::IdName,
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::IdName,
                TokenKind::Newline,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_edge_four_then_six_spaces() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a\n    b\n      c\n", &handler);
        let mut indents = 0;
        loop {
            let token = lexer.next_token();
            match token.kind() {
                TokenKind::Indent => indents += 1,
                TokenKind::IdName if token.lexeme() == Some("c") => {
                    assert_eq!(lexer.indent_level(), 1);
                },
                TokenKind::End => break,
                _ => {},
            }
        }
        assert_eq!(indents, 1);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].line, 3);
    }

    #[test]
    fn test_edge_deep_nesting_without_final_newline() {
        let source = "a\n b\n  c\n   d\n    e";
        let kinds = kinds(source);
        assert_eq!(count(&kinds, TokenKind::Indent), 4);
        assert_eq!(count(&kinds, TokenKind::Dedent), 4);
        assert_eq!(kinds.last(), Some(&TokenKind::End));
    }

    #[test]
    fn test_edge_end_after_dedents_is_stable() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a:\n  b", &handler);
        let tokens = lexer.tokenize();
        assert_eq!(tokens[tokens.len() - 2].kind(), TokenKind::Dedent);
        for _ in 0..3 {
            assert_eq!(lexer.next_token().kind(), TokenKind::End);
        }
        assert_eq!(lexer.indent_level(), 0);
    }

    #[test]
    fn test_edge_column_zero_comment_closes_block() {
        assert_eq!(
            kinds("a:\n  b\n# note\n  c\n"),
            [
                TokenKind::IdName,
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::IdName,
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::IdName,
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_edge_indented_comment_keeps_block() {
        let kinds = kinds("a:\n  b\n      # deep comment\n  c\n");
        assert_eq!(count(&kinds, TokenKind::Indent), 1);
        assert_eq!(count(&kinds, TokenKind::Dedent), 1);
    }

    #[test]
    fn test_edge_continuation_skips_indentation_check() {
        let (tokens, errors) = lex("x = 1 + \\\n        2\n");
        assert!(errors.is_empty());
        assert!(!tokens.iter().any(|t| t.kind() == TokenKind::Indent));
    }

    #[test]
    fn test_edge_triple_dot() {
        let (tokens, errors) = lex("...");
        assert_eq!(tokens[0].kind(), TokenKind::Elipsis);
        assert_eq!(tokens.len(), 2);
        assert_eq!(errors, ["stray '.' in program"]);
    }

    #[test]
    fn test_edge_dot_at_end_of_input() {
        let (_, errors) = lex("x.");
        assert_eq!(errors, ["stray '.' in program"]);
    }

    #[test]
    fn test_edge_recovery_keeps_scanning() {
        let (tokens, errors) = lex("a ! b $ \"q\\z\" 0b12 1..2\n");
        assert_eq!(errors.len(), 5);
        assert_eq!(tokens.last().map(Token::kind), Some(TokenKind::End));
        assert!(tokens.contains(&Token::with_lexeme(TokenKind::StringVal, "q", 1)));
    }

    #[test]
    fn test_edge_keywords_are_not_idents() {
        for (spelling, kind) in KeywordTable::global().iter() {
            let (tokens, _) = lex(spelling);
            assert_eq!(tokens[0], Token::new(kind, 1), "{}", spelling);
        }
    }

    #[test]
    fn test_edge_display_of_stream() {
        let (tokens, _) = lex("x += \"hi\"");
        let rendered: Vec<String> = tokens.iter().map(Token::to_string).collect();
        assert_eq!(rendered, ["IDNAME(x)", "PLUSASSIGN", "STRINGVAL(hi)", "END"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_edge_token_serializes_kind_by_name() {
        let token = Token::with_lexeme(TokenKind::IdName, "x", 3);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"IDNAME","lexeme":"x","line":3}"#);

        let json = serde_json::to_string(&Token::new(TokenKind::Indent, 2)).unwrap();
        assert_eq!(json, r#"{"kind":"INDENT","line":2}"#);
    }

    // ==================== PROPERTY-BASED TESTS ====================

    #[test]
    fn test_property_balanced_indentation() {
        use proptest::prelude::*;

        proptest!(|(unit in 1usize..=8, deltas in prop::collection::vec(-3i32..=1, 1..40))| {
            let mut depth = 0i32;
            let mut source = String::new();
            for delta in &deltas {
                depth = (depth + delta).max(0);
                source.push_str(&" ".repeat(depth as usize * unit));
                source.push_str("x\n");
            }

            let handler = Handler::new();
            let mut lexer = Lexer::new(&source, &handler);
            let kinds: Vec<TokenKind> = lexer.tokenize().iter().map(Token::kind).collect();

            prop_assert!(!handler.has_errors());
            prop_assert_eq!(count(&kinds, TokenKind::Indent), count(&kinds, TokenKind::Dedent));
            prop_assert_eq!(lexer.indent_level(), 0);
            prop_assert_eq!(kinds.last(), Some(&TokenKind::End));
        });
    }

    #[test]
    fn test_property_arbitrary_identifiers() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z][a-zA-Z0-9_]{0,40}")| {
            prop_assume!(KeywordTable::global().lookup(&input).is_none());
            let (tokens, errors) = lex(&input);
            prop_assert!(errors.is_empty());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(&tokens[0], &Token::with_lexeme(TokenKind::IdName, input.as_str(), 1));
        });
    }

    #[test]
    fn test_property_arbitrary_type_names() {
        use proptest::prelude::*;

        proptest!(|(input in "[A-Z][a-zA-Z0-9_]{0,40}")| {
            prop_assume!(KeywordTable::global().lookup(&input).is_none());
            let (tokens, _) = lex(&input);
            prop_assert_eq!(tokens[0].kind(), TokenKind::TypeName);
            prop_assert_eq!(tokens[0].lexeme(), Some(input.as_str()));
        });
    }

    #[test]
    fn test_property_radix_literals_keep_spelling() {
        use proptest::prelude::*;

        proptest!(|(prefix in "0[xX]", digits in "[0-9a-fA-F]{1,16}")| {
            let input = format!("{}{}", prefix, digits);
            let (tokens, errors) = lex(&input);
            prop_assert!(errors.is_empty());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].lexeme(), Some(input.as_str()));
        });
    }

    #[test]
    fn test_property_floats_keep_spelling() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,8}\\.[0-9]{1,8}(e-?[0-9]{1,3})?")| {
            let (tokens, errors) = lex(&input);
            prop_assert!(errors.is_empty());
            prop_assert_eq!(&tokens[0], &Token::with_lexeme(TokenKind::FloatVal, input.as_str(), 1));
        });
    }

    #[test]
    fn test_property_plain_strings_round_trip() {
        use proptest::prelude::*;

        proptest!(|(input in "[^\"\\\\\\n]{0,100}")| {
            let source = format!("\"{}\"", input);
            let (tokens, errors) = lex(&source);
            prop_assert!(errors.is_empty());
            prop_assert_eq!(tokens[0].kind(), TokenKind::StringVal);
            prop_assert_eq!(tokens[0].lexeme(), Some(input.as_str()));
        });
    }
}
