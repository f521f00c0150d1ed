//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, booleans, nil and identifiers
//! - Numeric literals and malformed numbers
//! - Quoted strings with escape sequences and long-bracket strings
//! - Operators and symbols
//! - Comments
//! - Error cases

use crate::errors::errors::LexErrorKind;

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.lua".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

fn error_kind(source: &str) -> LexErrorKind {
    tokenize(source, Some("test.lua".to_string()))
        .unwrap_err()
        .get_kind()
        .clone()
}

#[test]
fn test_tokenize_keywords() {
    let source =
        "local function end return if then elseif else until while for in do repeat and or not";
    let tokens = tokenize(source, Some("test.lua".to_string())).unwrap();

    assert_eq!(tokens.len(), 17);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Keyword);
    }
    assert_eq!(tokens[0].value, "local");
    assert_eq!(tokens[16].value, "not");
}

#[test]
fn test_tokenize_boolean_and_nil() {
    let tokens = tokenize("true false nil", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].value, "true");
    assert_eq!(tokens[1].kind, TokenKind::Boolean);
    assert_eq!(tokens[1].value, "false");
    assert_eq!(tokens[2].kind, TokenKind::Nil);
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase locals endless";
    let tokens = tokenize(source, Some("test.lua".to_string())).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "locals", "endless"]
    );
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
}

#[test]
fn test_tokenize_unicode_identifier() {
    let tokens = tokenize("número = 1", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "número");
    assert_eq!(tokens[1].span.start.0, 8);
}

#[test]
fn test_tokenize_numbers() {
    for source in ["42", "3.14", "0", "1e10", "1E10", "2.5e-3", "6.02E+23"] {
        let tokens = tokenize(source, None).unwrap();

        assert_eq!(tokens.len(), 1, "{}", source);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].value, source);
    }
}

#[test]
fn test_tokenize_malformed_numbers() {
    for source in ["1.", "1e", "1e+", "1ex", "1.2.3", "1e5e3", "1..2"] {
        assert!(
            matches!(error_kind(source), LexErrorKind::MalformedNumber { .. }),
            "{}",
            source
        );
    }
}

#[test]
fn test_tokenize_minus_after_number() {
    let tokens = tokenize("1-2", None).unwrap();

    assert_eq!(kinds("1-2"), vec![TokenKind::Number, TokenKind::Operator, TokenKind::Number]);
    assert_eq!(tokens[1].value, "-");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "world" "multiple words""#, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""a\nb" "tab\there" "backslash\\" "quote\"test""#, None).unwrap();

    assert_eq!(tokens[0].value, "a\nb");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "quote\"test");
}

#[test]
fn test_tokenize_single_escaped_string() {
    let tokens = tokenize("\"a\\nb\"", None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\nb");
    assert_eq!(tokens[0].span.end.0, 6);
}

#[test]
fn test_tokenize_long_string() {
    let tokens = tokenize("[[raw\ntext]]", None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "raw\ntext");

    let tokens = tokenize(r"[[no \n escapes]]", None).unwrap();
    assert_eq!(tokens[0].value, r"no \n escapes");
}

#[test]
fn test_tokenize_unknown_escape() {
    let error = tokenize(r#"x = "bad\q""#, None).unwrap_err();

    assert_eq!(error.get_kind(), &LexErrorKind::UnknownEscape { escape: 'q' });
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_tokenize_unterminated_strings() {
    assert_eq!(error_kind("\"never closed"), LexErrorKind::UnterminatedString);
    assert_eq!(error_kind("\"trailing backslash\\"), LexErrorKind::UnterminatedString);
    assert_eq!(error_kind("[[never closed"), LexErrorKind::UnterminatedString);

    let error = tokenize("x = \"open", None).unwrap_err();
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % ^ # & | ~ > < = ? ! == <= >= ~= ..";
    let tokens = tokenize(source, None).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "+", "-", "*", "/", "%", "^", "#", "&", "|", "~", ">", "<", "=", "?", "!", "==", "<=",
            ">=", "~=", ".."
        ]
    );
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Operator);
    }
}

#[test]
fn test_tokenize_two_char_operators_are_greedy() {
    let tokens = tokenize("a==b<=c", None).unwrap();

    assert_eq!(tokens[1].value, "==");
    assert_eq!(tokens[3].value, "<=");
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_tokenize_symbols() {
    let tokens = tokenize(". : { } ( ) ,", None).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec![".", ":", "{", "}", "(", ")", ","]);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Symbol);
    }
}

#[test]
fn test_tokenize_comments() {
    let source = "local x = 5 -- this is a comment\nlocal y = 10 -- trailing";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Number,
        ]
    );
}

#[test]
fn test_tokenize_block_comment() {
    let tokens = tokenize("a --[[ spans\nseveral\nlines ]] b", None).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].value, "b");
}

#[test]
fn test_tokenize_unterminated_comment() {
    let error = tokenize("x --[[ never closed", None).unwrap_err();

    assert_eq!(error.get_kind(), &LexErrorKind::UnterminatedComment);
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_tokenize_illegal_character() {
    let error = tokenize("local x = @", Some("test.lua".to_string())).unwrap_err();

    assert_eq!(error.get_kind(), &LexErrorKind::IllegalCharacter { character: '@' });
    assert_eq!(error.get_position().0, 10);
    assert_eq!(error.get_position().1.as_str(), "test.lua");
    assert_eq!(error_kind("a;"), LexErrorKind::IllegalCharacter { character: ';' });
    assert_eq!(error_kind("[x]"), LexErrorKind::IllegalCharacter { character: '[' });
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  local\t x \r\n =   42  ", None).unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].span.start.0, 2);
    assert_eq!(tokens[0].span.end.0, 7);
    assert_eq!(tokens[3].value, "42");
}

#[test]
fn test_tokenize_empty_source() {
    assert!(tokenize("", None).unwrap().is_empty());
    assert!(tokenize("   \n-- only a comment", None).unwrap().is_empty());
}

#[test]
fn test_tokenize_is_stateless() {
    let source = "x:foo(1, \"two\") --[[ c ]] return {a = 1}";

    assert_eq!(tokenize(source, None).unwrap(), tokenize(source, None).unwrap());
}
