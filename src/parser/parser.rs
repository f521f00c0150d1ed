//! Parser cursor and program entry point.
//!
//! The parser walks a borrowed token slice with a single forward-only index.
//! Statements are parsed by recursive descent (see `stmt.rs`), expressions by
//! precedence climbing over the static tables in `lookups.rs` (see `expr.rs`).
//! The first mismatch aborts parsing; there is no error recovery.

use std::sync::Arc;

use crate::{
    ast::statements::Stmt,
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt;

/// Tokens shown on each side of the offending token in error contexts.
const CONTEXT_RADIUS: usize = 3;

/// Deepest nesting of expressions and blocks accepted before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Forward-only cursor over a token sequence.
pub struct Parser<'a> {
    /// The tokens being parsed
    tokens: &'a [Token],
    /// Index of the current token
    pos: usize,
    /// Name of the source unit, used for end-of-input positions
    file: Arc<String>,
    /// Current nesting of expressions and blocks
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], file: Arc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            depth: 0,
        }
    }

    /// Returns the current token without advancing, or `None` at end of input.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token `offset` places ahead of the current one.
    pub fn peek(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Result<&'a Token, ParseError> {
        match self.current_token() {
            Some(token) => {
                self.pos += 1;
                Ok(token)
            }
            None => Err(self.unexpected_end("a token")),
        }
    }

    /// Consumes the current token if it is of `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&'a Token, ParseError> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => self.advance(),
            Some(_) => Err(self.expected_token(expected_kind.to_string())),
            None => Err(self.unexpected_end(&expected_kind.to_string())),
        }
    }

    /// Consumes the current token if it has both `expected_kind` and `value`.
    pub fn expect_value(
        &mut self,
        expected_kind: TokenKind,
        value: &str,
    ) -> Result<&'a Token, ParseError> {
        let expected = format!("{} '{}'", expected_kind, value);

        match self.current_token() {
            Some(token) if token.is(expected_kind, value) => self.advance(),
            Some(_) => Err(self.expected_token(expected)),
            None => Err(self.unexpected_end(&expected)),
        }
    }

    pub fn expect_keyword(&mut self, keyword: &str) -> Result<&'a Token, ParseError> {
        self.expect_value(TokenKind::Keyword, keyword)
    }

    pub fn expect_symbol(&mut self, symbol: &str) -> Result<&'a Token, ParseError> {
        self.expect_value(TokenKind::Symbol, symbol)
    }

    pub fn expect_operator(&mut self, operator: &str) -> Result<&'a Token, ParseError> {
        self.expect_value(TokenKind::Operator, operator)
    }

    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.current_token().is_some_and(|token| token.is_keyword(keyword))
    }

    pub fn check_symbol(&self, symbol: &str) -> bool {
        self.current_token().is_some_and(|token| token.is_symbol(symbol))
    }

    pub fn check_operator(&self, operator: &str) -> bool {
        self.current_token().is_some_and(|token| token.is_operator(operator))
    }

    /// Enters one level of expression or block nesting.
    pub fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ParseErrorKind::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn get_index(&self) -> usize {
        self.pos
    }

    /// Position of the current token, or the end of the last token once the
    /// sequence is exhausted.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start.clone(),
            None => match self.tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Arc::clone(&self.file)),
            },
        }
    }

    /// Renders the tokens around the current index, marking the current one with `=>`.
    pub fn context(&self) -> String {
        let start = self.pos.saturating_sub(CONTEXT_RADIUS);
        let end = (self.pos + CONTEXT_RADIUS + 1).min(self.tokens.len());

        let mut context = String::new();
        for i in start..end {
            if i == self.pos {
                context.push_str("=> ");
            }
            context.push_str(&self.tokens[i].value);
            context.push(' ');
        }
        if self.pos >= self.tokens.len() {
            context.push_str("=> <end>");
        }

        context.trim_end().to_string()
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.pos, self.get_position(), self.context())
    }

    /// The current token starts no valid production here.
    pub fn unexpected_token(&self) -> ParseError {
        match self.current_token() {
            Some(token) => self.error(ParseErrorKind::UnexpectedToken {
                token: token.to_string(),
            }),
            None => self.unexpected_end("a statement or expression"),
        }
    }

    /// A specific token was required at the current index.
    pub fn expected_token(&self, expected: String) -> ParseError {
        match self.current_token() {
            Some(token) => self.error(ParseErrorKind::ExpectedToken {
                expected,
                found: token.to_string(),
            }),
            None => self.unexpected_end(&expected),
        }
    }

    pub fn unexpected_end(&self, expected: &str) -> ParseError {
        self.error(ParseErrorKind::UnexpectedEnd {
            expected: String::from(expected),
        })
    }
}

/// Parses a complete token sequence into the program's statements.
///
/// # Arguments
///
/// * `tokens` - The full token sequence of one source unit
/// * `file` - Name of the source unit, used in error positions
///
/// # Returns
///
/// The ordered statements of the program, or the first structural error.
pub fn parse_program(tokens: &[Token], file: Arc<String>) -> Result<Vec<Stmt>, ParseError> {
    let mut parser = Parser::new(tokens, file);
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    Ok(body)
}
