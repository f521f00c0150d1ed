use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("local", TokenKind::Keyword);
        map.insert("function", TokenKind::Keyword);
        map.insert("end", TokenKind::Keyword);
        map.insert("return", TokenKind::Keyword);
        map.insert("if", TokenKind::Keyword);
        map.insert("then", TokenKind::Keyword);
        map.insert("elseif", TokenKind::Keyword);
        map.insert("else", TokenKind::Keyword);
        map.insert("until", TokenKind::Keyword);
        map.insert("while", TokenKind::Keyword);
        map.insert("for", TokenKind::Keyword);
        map.insert("in", TokenKind::Keyword);
        map.insert("do", TokenKind::Keyword);
        map.insert("repeat", TokenKind::Keyword);
        map.insert("and", TokenKind::Keyword);
        map.insert("or", TokenKind::Keyword);
        map.insert("not", TokenKind::Keyword);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map.insert("nil", TokenKind::Nil);
        map
    };
}

/// Token class. Together with the token text it determines how the
/// lexeme is read downstream.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    String,
    Number,
    Boolean,
    Nil,
    Keyword,
    Operator,
    Symbol,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Nil => "NIL",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Symbol => "SYMBOL",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.value)
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.is(TokenKind::Keyword, keyword)
    }

    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.is(TokenKind::Symbol, symbol)
    }

    pub fn is_operator(&self, operator: &str) -> bool {
        self.is(TokenKind::Operator, operator)
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
