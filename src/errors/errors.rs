use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Failure raised while scanning source text into tokens.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at {position}")]
pub struct LexError {
    kind: LexErrorKind,
    position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError { kind, position }
    }

    pub fn get_kind(&self) -> &LexErrorKind {
        &self.kind
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            LexErrorKind::IllegalCharacter { .. } => "IllegalCharacter",
            LexErrorKind::UnterminatedString => "UnterminatedString",
            LexErrorKind::UnterminatedComment => "UnterminatedComment",
            LexErrorKind::MalformedNumber { .. } => "MalformedNumber",
            LexErrorKind::UnknownEscape { .. } => "UnknownEscape",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.kind {
            LexErrorKind::IllegalCharacter { character } => {
                ErrorTip::Suggestion(format!("Character `{}` is not valid here", character))
            }
            LexErrorKind::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is never closed, did you miss a `\"` or `]]`?",
            )),
            LexErrorKind::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Block comment is never closed, did you miss a `]]`?",
            )),
            LexErrorKind::MalformedNumber { number } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, expected digits with an optional fraction and exponent",
                number
            )),
            LexErrorKind::UnknownEscape { escape } => ErrorTip::Suggestion(format!(
                "Unknown escape `\\{}`, supported escapes are \\n \\t \\\" \\\\",
                escape
            )),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: char },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("malformed number: {number:?}")]
    MalformedNumber { number: String },
    #[error("unknown escape sequence: \\{escape}")]
    UnknownEscape { escape: char },
}

/// Failure raised while building the AST from a token sequence.
///
/// `index` points at the offending token. When the sequence ran out it is
/// equal to the number of tokens.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at token {index} ({position}) -> {context}")]
pub struct ParseError {
    kind: ParseErrorKind,
    index: usize,
    position: Position,
    context: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, index: usize, position: Position, context: String) -> Self {
        ParseError {
            kind,
            index,
            position,
            context,
        }
    }

    pub fn get_kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_context(&self) -> &str {
        &self.context
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "UnexpectedToken",
            ParseErrorKind::ExpectedToken { .. } => "ExpectedToken",
            ParseErrorKind::UnexpectedEnd { .. } => "UnexpectedEnd",
            ParseErrorKind::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorTip::None,
            ParseErrorKind::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, found))
            }
            ParseErrorKind::UnexpectedEnd { expected } => ErrorTip::Suggestion(format!(
                "Input ended while expecting {}, is a block missing its `end`?",
                expected
            )),
            ParseErrorKind::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions and blocks may nest at most {} levels deep",
                limit
            )),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected}, found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Either stage's failure, as surfaced by [`crate::parse`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn get_position(&self) -> &Position {
        match self {
            Error::Lex(error) => error.get_position(),
            Error::Parse(error) => error.get_position(),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Lex(error) => error.get_error_name(),
            Error::Parse(error) => error.get_error_name(),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Lex(error) => error.get_tip(),
            Error::Parse(error) => error.get_tip(),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
