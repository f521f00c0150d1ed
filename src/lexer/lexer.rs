use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{LexError, LexErrorKind},
    source_name, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Handles the text matched by a pattern at the lexer's current offset.
pub type RegexHandler = fn(&mut Lexer<'_>, &str) -> Result<(), LexError>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer pattern must compile"),
            handler,
        }
    }
}

lazy_static! {
    // Order is significant: the first pattern matching at the current offset wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^--\[\[", long_comment_handler),
        RegexPattern::new(r"^--[^\n]*", skip_handler),
        RegexPattern::new(r"^[\p{L}_][\p{L}\p{Nd}_]*", symbol_handler),
        RegexPattern::new(r"^[0-9][0-9.]*(?:[eE][+-]?[0-9.eE]*)?", number_handler),
        RegexPattern::new(r#"^""#, string_handler),
        RegexPattern::new(r"^\[\[", long_string_handler),
        RegexPattern::new(r"^(?:==|<=|>=|~=|\.\.)", MK_DEFAULT_HANDLER!(TokenKind::Operator)),
        RegexPattern::new(r"^[-+*/%^#&|~<>=?!]", MK_DEFAULT_HANDLER!(TokenKind::Operator)),
        RegexPattern::new(r"^[.:{}(),]", MK_DEFAULT_HANDLER!(TokenKind::Symbol)),
    ];

    static ref NUMBER_FORMAT: Regex = Regex::new(r"^[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?$")
        .expect("number format must compile");
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    file: Arc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Arc<String>) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        self.position_at(self.pos)
    }

    fn position_at(&self, offset: usize) -> Position {
        Position(offset as u32, Arc::clone(&self.file))
    }

    /// Span from the current offset covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: self.position_at(self.pos + len),
        }
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.position())
    }

    /// Runs the pattern table over the whole source.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while !self.at_eof() {
            let remainder = self.remainder();
            let pattern = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|m| (pattern.handler, m.as_str()))
            });

            match pattern {
                Some((handler, matched)) => handler(&mut self, matched)?,
                None => {
                    let character = self.at().unwrap_or_default();
                    return Err(self.error(LexErrorKind::IllegalCharacter { character }));
                }
            }
        }

        Ok(self.tokens)
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), LexError> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn long_comment_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), LexError> {
    let body = &lexer.remainder()[matched.len()..];

    match body.find("]]") {
        Some(end) => {
            lexer.advance_n(matched.len() + end + 2);
            Ok(())
        }
        None => Err(lexer.error(LexErrorKind::UnterminatedComment)),
    }
}

fn symbol_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), LexError> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, String::from(matched), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), LexError> {
    if !NUMBER_FORMAT.is_match(matched) {
        return Err(lexer.error(LexErrorKind::MalformedNumber {
            number: String::from(matched),
        }));
    }

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, String::from(matched), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), LexError> {
    let start = lexer.pos;
    let body = &lexer.remainder()[matched.len()..];

    let mut result = String::new();
    let mut chars = body.char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => {
                let len = matched.len() + offset + 1;
                let span = lexer.span_of(len);
                lexer.push(MK_TOKEN!(TokenKind::String, result, span));
                lexer.advance_n(len);
                return Ok(());
            }
            '\\' => match chars.next() {
                Some((_, 'n')) => result.push('\n'),
                Some((_, 't')) => result.push('\t'),
                Some((_, '"')) => result.push('"'),
                Some((_, '\\')) => result.push('\\'),
                Some((_, escape)) => {
                    let position = lexer.position_at(start + matched.len() + offset);
                    return Err(LexError::new(LexErrorKind::UnknownEscape { escape }, position));
                }
                None => break,
            },
            _ => result.push(ch),
        }
    }

    Err(lexer.error(LexErrorKind::UnterminatedString))
}

fn long_string_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), LexError> {
    let body = &lexer.remainder()[matched.len()..];

    match body.find("]]") {
        Some(end) => {
            let len = matched.len() + end + 2;
            let span = lexer.span_of(len);
            lexer.push(MK_TOKEN!(TokenKind::String, String::from(&body[..end]), span));
            lexer.advance_n(len);
            Ok(())
        }
        None => Err(lexer.error(LexErrorKind::UnterminatedString)),
    }
}

/// Scans `source` into its token sequence.
///
/// `file` names the source unit in token and error positions and defaults
/// to `"shell"`.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, LexError> {
    Lexer::new(source, source_name(file)).tokenize()
}
