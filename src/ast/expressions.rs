use std::{collections::BTreeMap, fmt::Display};

use super::statements::Stmt;

/// Literal values. Numbers keep their source text verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(String),
    String(String),
    Boolean(bool),
    Nil,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Concat,
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    And,
    Or,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "^",
            BinaryOperator::Concat => "..",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "~=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Not,
    Length,
}

impl UnaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Not => "not",
            UnaryOperator::Length => "#",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expression node. Every variant owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Binary {
        left: Box<Expr>,
        operator: BinaryOperator,
        right: Box<Expr>,
    },
    Unary {
        operator: UnaryOperator,
        operand: Box<Expr>,
    },
    Variable(String),
    /// `name(arguments)`
    FunctionCall {
        name: String,
        arguments: Vec<Expr>,
    },
    /// A call whose callee is not a plain name, e.g. `f()()`.
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    /// `receiver.method(...)` or `receiver:method(...)`. Colon calls carry
    /// the receiver again as their first argument.
    MethodCall {
        receiver: Box<Expr>,
        method: String,
        arguments: Vec<Expr>,
        is_colon_call: bool,
    },
    MemberAccess {
        object: Box<Expr>,
        member: String,
    },
    Table {
        array_elements: Vec<Expr>,
        named_entries: BTreeMap<String, Expr>,
    },
    FunctionDefinition {
        name: String,
        parameters: Vec<String>,
        body: Vec<Stmt>,
    },
    AnonymousFunction {
        parameters: Vec<String>,
        body: Vec<Stmt>,
    },
}

#[cfg(test)]
impl Expr {
    pub fn number(value: &str) -> Self {
        Expr::Literal(Literal::Number(String::from(value)))
    }

    pub fn string(value: &str) -> Self {
        Expr::Literal(Literal::String(String::from(value)))
    }

    pub fn variable(name: &str) -> Self {
        Expr::Variable(String::from(name))
    }
}

impl Expr {
    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: UnaryOperator, operand: Expr) -> Self {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Whether the expression is a call of any form.
    pub fn is_call(&self) -> bool {
        matches!(
            self,
            Expr::FunctionCall { .. } | Expr::Call { .. } | Expr::MethodCall { .. }
        )
    }
}
