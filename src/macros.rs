//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits the matched text as one token

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for patterns whose matched text is the token value.
///
/// The generated handler pushes a token of the given kind spanning the match
/// and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[.:{}(),]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Symbol),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {{
        fn handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), LexError> {
            let span = lexer.span_of(matched.len());
            lexer.push(MK_TOKEN!($kind, String::from(matched), span));
            lexer.advance_n(matched.len());
            Ok(())
        }
        handler
    }};
}
