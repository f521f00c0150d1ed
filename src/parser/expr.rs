use std::collections::BTreeMap;

use crate::{
    ast::expressions::{BinaryOperator, Expr, Literal},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_operator, unary_operator, BindingPower},
    parser::Parser,
    stmt::parse_block,
};

/// Precedence climbing: parses a prefix operand, then folds in every binary
/// operator that binds tighter than `bp`.
pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Result<Expr, ParseError> {
    parser.enter()?;
    let mut left = parse_prefix_expr(parser)?;

    while let Some((operator, operator_bp)) = parser.current_token().and_then(binary_operator) {
        if operator_bp <= bp {
            break;
        }

        left = parse_binary_expr(parser, left, operator, operator_bp)?;
    }

    parser.exit();
    Ok(left)
}

pub fn parse_binary_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    operator: BinaryOperator,
    bp: BindingPower,
) -> Result<Expr, ParseError> {
    parser.advance()?;

    // `^` is right associative: its right operand may contain another `^`.
    let right_bp = match operator {
        BinaryOperator::Power => BindingPower::Unary,
        _ => bp,
    };
    let right = parse_expr(parser, right_bp)?;

    Ok(Expr::binary(left, operator, right))
}

pub fn parse_prefix_expr(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let Some(token) = parser.current_token() else {
        return Err(parser.unexpected_end("an expression"));
    };

    if let Some(operator) = unary_operator(token) {
        parser.advance()?;
        let operand = parse_expr(parser, BindingPower::Unary)?;
        return Ok(Expr::unary(operator, operand));
    }

    match token.kind {
        TokenKind::Number | TokenKind::String | TokenKind::Boolean | TokenKind::Nil => {
            parse_primary_expr(parser)
        }
        TokenKind::Identifier => {
            let name = parser.advance()?.value.clone();
            parse_suffix_expr(parser, Expr::Variable(name))
        }
        TokenKind::Symbol if token.value == "(" => {
            let inner = parse_grouping_expr(parser)?;
            parse_suffix_expr(parser, inner)
        }
        TokenKind::Symbol if token.value == "{" => parse_table_expr(parser),
        TokenKind::Keyword if token.value == "function" => parse_anonymous_fn_expr(parser),
        _ => Err(parser.unexpected_token()),
    }
}

/// Literals and bare names, with no suffix chain.
pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let Some(token) = parser.current_token() else {
        return Err(parser.unexpected_end("an expression"));
    };

    let expr = match token.kind {
        TokenKind::Number => Expr::Literal(Literal::Number(token.value.clone())),
        TokenKind::String => Expr::Literal(Literal::String(token.value.clone())),
        TokenKind::Boolean => Expr::Literal(Literal::Boolean(token.value == "true")),
        TokenKind::Nil => Expr::Literal(Literal::Nil),
        TokenKind::Identifier => Expr::Variable(token.value.clone()),
        _ => return Err(parser.unexpected_token()),
    };

    parser.advance()?;
    Ok(expr)
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    parser.expect_symbol("(")?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_symbol(")")?;

    Ok(expr)
}

/// Resolves a chain of calls, member accesses and method calls left to right,
/// each link wrapping the expression built so far.
pub fn parse_suffix_expr(parser: &mut Parser<'_>, mut expr: Expr) -> Result<Expr, ParseError> {
    loop {
        if parser.check_symbol("(") {
            expr = parse_call_expr(parser, expr)?;
        } else if parser.check_symbol(".") {
            expr = parse_member_expr(parser, expr)?;
        } else if parser.check_symbol(":") {
            expr = parse_method_call_expr(parser, expr)?;
        } else {
            return Ok(expr);
        }
    }
}

pub fn parse_call_expr(parser: &mut Parser<'_>, callee: Expr) -> Result<Expr, ParseError> {
    let arguments = parse_arguments(parser)?;

    Ok(match callee {
        Expr::Variable(name) => Expr::FunctionCall { name, arguments },
        callee => Expr::Call {
            callee: Box::new(callee),
            arguments,
        },
    })
}

pub fn parse_member_expr(parser: &mut Parser<'_>, object: Expr) -> Result<Expr, ParseError> {
    parser.expect_symbol(".")?;
    let member = parser.expect(TokenKind::Identifier)?.value.clone();

    if parser.check_symbol("(") {
        let arguments = parse_arguments(parser)?;
        return Ok(Expr::MethodCall {
            receiver: Box::new(object),
            method: member,
            arguments,
            is_colon_call: false,
        });
    }

    Ok(Expr::MemberAccess {
        object: Box::new(object),
        member,
    })
}

pub fn parse_method_call_expr(parser: &mut Parser<'_>, receiver: Expr) -> Result<Expr, ParseError> {
    parser.expect_symbol(":")?;
    let method = parser.expect(TokenKind::Identifier)?.value.clone();

    let mut arguments = parse_arguments(parser)?;
    arguments.insert(0, receiver.clone());

    Ok(Expr::MethodCall {
        receiver: Box::new(receiver),
        method,
        arguments,
        is_colon_call: true,
    })
}

/// `( [expr {, expr}] )`
pub fn parse_arguments(parser: &mut Parser<'_>) -> Result<Vec<Expr>, ParseError> {
    parser.expect_symbol("(")?;

    let mut arguments = vec![];
    if parser.check_symbol(")") {
        parser.advance()?;
        return Ok(arguments);
    }

    loop {
        // A lone literal or name needs no operator handling.
        let is_simple = parser.current_token().is_some_and(|token| {
            token.is_one_of_many(&[TokenKind::Number, TokenKind::String, TokenKind::Identifier])
        }) && parser
            .peek(1)
            .is_some_and(|next| next.is_symbol(",") || next.is_symbol(")"));

        if is_simple {
            arguments.push(parse_primary_expr(parser)?);
        } else {
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }

        if parser.check_symbol(",") {
            parser.advance()?;
        } else {
            parser.expect_symbol(")")?;
            return Ok(arguments);
        }
    }
}

/// `{ [field {, field} [,]] }` where a field is `name = expr` or `expr`.
pub fn parse_table_expr(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    parser.expect_symbol("{")?;

    let mut array_elements = vec![];
    let mut named_entries = BTreeMap::new();

    while !parser.check_symbol("}") {
        let is_named = parser
            .current_token()
            .is_some_and(|token| token.kind == TokenKind::Identifier)
            && parser.peek(1).is_some_and(|next| next.is_operator("="));

        if is_named {
            let key = parser.advance()?.value.clone();
            parser.advance()?;
            let value = parse_expr(parser, BindingPower::Default)?;
            named_entries.insert(key, value);
        } else {
            array_elements.push(parse_expr(parser, BindingPower::Default)?);
        }

        if parser.check_symbol(",") {
            parser.advance()?;
        } else {
            break;
        }
    }

    parser.expect_symbol("}")?;

    Ok(Expr::Table {
        array_elements,
        named_entries,
    })
}

/// `( [name {, name}] )`
pub fn parse_parameters(parser: &mut Parser<'_>) -> Result<Vec<String>, ParseError> {
    parser.expect_symbol("(")?;

    let mut parameters = vec![];
    if parser.check_symbol(")") {
        parser.advance()?;
        return Ok(parameters);
    }

    loop {
        parameters.push(parser.expect(TokenKind::Identifier)?.value.clone());

        if parser.check_symbol(",") {
            parser.advance()?;
        } else {
            parser.expect_symbol(")")?;
            return Ok(parameters);
        }
    }
}

pub fn parse_anonymous_fn_expr(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    parser.expect_keyword("function")?;

    let parameters = parse_parameters(parser)?;
    let body = parse_block(parser)?;

    parser.expect_keyword("end")?;

    Ok(Expr::AnonymousFunction { parameters, body })
}
