//! Edge case tests for ctok-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Category, Token};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source.as_bytes()).expect("in-memory scan cannot fail")
    }

    fn lexemes(source: &str) -> Vec<String> {
        lex_all(source).into_iter().map(|t| t.lexeme).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t, vec![Token::new("x", Category::Identifier)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme, name);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("int while return");
        assert!(t.iter().all(|t| t.category == Category::Keyword));
    }

    #[test]
    fn test_edge_nul_is_whitespace() {
        assert_eq!(lexemes("a\0b"), ["a", "b"]);
    }

    #[test]
    fn test_edge_bare_carriage_return_is_a_token() {
        // \r is not in the DFA whitespace set; inside a line it becomes
        // a single-character constant token.
        let t = lex_all("a\rb");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1], Token::new("\r", Category::Constant));
    }

    #[test]
    fn test_edge_crlf_line_endings_are_clean() {
        assert_eq!(lexemes("a\r\nb\r\n"), ["a", "b"]);
    }

    #[test]
    fn test_edge_digit_prefixed_name_splits() {
        assert_eq!(lexemes("123abc"), ["123", "abc"]);
    }

    #[test]
    fn test_edge_ident_with_digits_is_constant() {
        // Segmented in the identifier state, but the classifier pattern
        // admits letters and underscores only.
        let t = lex_all("a1");
        assert_eq!(t, vec![Token::new("a1", Category::Constant)]);
    }

    #[test]
    fn test_edge_lone_dot_is_delimiter() {
        let t = lex_all(". ");
        assert_eq!(t, vec![Token::new(".", Category::Delimiter)]);
    }

    #[test]
    fn test_edge_dot_name_is_suffix() {
        let t = lex_all(".txt");
        assert_eq!(t, vec![Token::new(".txt", Category::Suffix)]);
    }

    #[test]
    fn test_edge_four_char_shift_splits() {
        // The operator can grow to three characters at most.
        assert_eq!(lexemes(">>>="), [">>>", "="]);
        assert_eq!(lexemes("<<<<"), ["<<<", "<"]);
    }

    #[test]
    fn test_edge_caret_never_doubles() {
        assert_eq!(lexemes("^^"), ["^", "^"]);
        assert_eq!(lexemes("^="), ["^="]);
    }

    #[test]
    fn test_edge_mixed_doubling_stops() {
        assert_eq!(lexemes("+-"), ["+", "-"]);
        assert_eq!(lexemes("&|"), ["&", "|"]);
    }

    #[test]
    fn test_edge_empty_string_literal() {
        let t = lex_all("\"\"");
        assert_eq!(t, vec![Token::new("\"\"", Category::Constant)]);
    }

    #[test]
    fn test_edge_string_spans_lines() {
        // No escape handling: the literal absorbs the newline and ends
        // at the next quote.
        let t = lex_all("\"ab\ncd\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme, "\"ab\ncd\"");
    }

    #[test]
    fn test_edge_backslash_does_not_escape_quote() {
        let t = lex_all(r#""a\" b"#);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].lexeme, r#""a\""#);
        assert_eq!(t[1].lexeme, "b");
    }

    #[test]
    fn test_edge_block_comment_star_before_close_returns_to_body() {
        // After the body sees `*`, anything but `/` drops back to the
        // body state, so `**/` does not close the comment.
        assert!(lex_all("/***/ x").is_empty());
    }

    #[test]
    fn test_edge_block_comment_single_star_close() {
        assert_eq!(lexemes("/* note */ x"), ["x"]);
    }

    #[test]
    fn test_edge_block_comments_do_not_nest() {
        // The first */ ends the comment; the rest is tokenized.
        let t = lexemes("/* a /* b */ c */");
        assert_eq!(t, ["c", "*", "/"]);
    }

    #[test]
    fn test_edge_line_comment_at_eof_without_newline() {
        // The synthetic newline terminates the comment pass.
        assert!(lex_all("// trailing").is_empty());
    }

    #[test]
    fn test_edge_division_vs_comment() {
        assert_eq!(lexemes("a/b"), ["a", "/", "b"]);
        assert_eq!(lexemes("a//b"), ["a"]);
        assert_eq!(lexemes("a/=b"), ["a", "/=", "b"]);
    }

    #[test]
    fn test_edge_operator_dense_line() {
        assert_eq!(
            lexemes("a=b==c!=d<=e>=f<<g>>h"),
            ["a", "=", "b", "==", "c", "!=", "d", "<=", "e", ">=", "f", "<<", "g", ">>", "h"]
        );
    }

    #[test]
    fn test_edge_unknown_characters_never_halt_scan() {
        let t = lex_all("@ $ `");
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|t| t.category == Category::Constant));
    }
}
