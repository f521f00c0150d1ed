use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        expressions::{BinaryOperator, UnaryOperator},
        statements::Stmt,
    },
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
};

use super::{parser::Parser, stmt::*};

/// Operator binding strength. Higher binds tighter; the discriminant is the
/// operator's precedence level.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Or = 1,
    And = 2,
    Comparison = 3,
    Concat = 4,
    Additive = 5,
    Multiplicative = 6,
    Unary = 7,
    Power = 8,
}

impl BindingPower {
    pub fn level(self) -> u8 {
        self as u8
    }
}

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Stmt, ParseError>;

lazy_static! {
    pub static ref BINARY_LOOKUP: HashMap<&'static str, (BinaryOperator, BindingPower)> = {
        let mut map = HashMap::new();
        map.insert("^", (BinaryOperator::Power, BindingPower::Power));

        map.insert("*", (BinaryOperator::Multiply, BindingPower::Multiplicative));
        map.insert("/", (BinaryOperator::Divide, BindingPower::Multiplicative));
        map.insert("%", (BinaryOperator::Modulo, BindingPower::Multiplicative));

        map.insert("+", (BinaryOperator::Add, BindingPower::Additive));
        map.insert("-", (BinaryOperator::Subtract, BindingPower::Additive));

        map.insert("..", (BinaryOperator::Concat, BindingPower::Concat));

        map.insert("<", (BinaryOperator::Less, BindingPower::Comparison));
        map.insert(">", (BinaryOperator::Greater, BindingPower::Comparison));
        map.insert("<=", (BinaryOperator::LessEquals, BindingPower::Comparison));
        map.insert(">=", (BinaryOperator::GreaterEquals, BindingPower::Comparison));
        map.insert("~=", (BinaryOperator::NotEquals, BindingPower::Comparison));
        map.insert("==", (BinaryOperator::Equals, BindingPower::Comparison));

        map.insert("and", (BinaryOperator::And, BindingPower::And));
        map.insert("or", (BinaryOperator::Or, BindingPower::Or));
        map
    };

    // Every prefix operator binds at BindingPower::Unary.
    pub static ref UNARY_LOOKUP: HashMap<&'static str, UnaryOperator> = {
        let mut map = HashMap::new();
        map.insert("-", UnaryOperator::Negate);
        map.insert("#", UnaryOperator::Length);
        map.insert("not", UnaryOperator::Not);
        map
    };

    pub static ref STMT_LOOKUP: HashMap<&'static str, StmtHandler> = {
        let mut map: HashMap<&'static str, StmtHandler> = HashMap::new();
        map.insert("function", parse_fn_decl_stmt);
        map.insert("local", parse_local_stmt);
        map.insert("return", parse_return_stmt);
        map.insert("if", parse_if_stmt);
        map.insert("for", parse_for_stmt);
        map.insert("while", parse_while_stmt);
        map.insert("repeat", parse_repeat_stmt);
        map
    };
}

/// Keywords that close a block. The block parser stops before them.
pub const BLOCK_TERMINATORS: [&str; 4] = ["end", "else", "elseif", "until"];

/// The binary operator a token stands for, if any.
pub fn binary_operator(token: &Token) -> Option<(BinaryOperator, BindingPower)> {
    match token.kind {
        TokenKind::Operator | TokenKind::Keyword => {
            BINARY_LOOKUP.get(token.value.as_str()).copied()
        }
        _ => None,
    }
}

/// The prefix operator a token stands for, if any.
pub fn unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token.kind {
        TokenKind::Operator | TokenKind::Keyword => {
            UNARY_LOOKUP.get(token.value.as_str()).copied()
        }
        _ => None,
    }
}

pub fn is_block_terminator(token: &Token) -> bool {
    token.kind == TokenKind::Keyword && BLOCK_TERMINATORS.contains(&token.value.as_str())
}
