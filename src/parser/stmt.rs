use crate::{
    ast::{
        expressions::Expr,
        statements::{ElseIfBranch, Stmt},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_parameters},
    lookups::{binary_operator, is_block_terminator, BindingPower, STMT_LOOKUP},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let Some(token) = parser.current_token() else {
        return Err(parser.unexpected_end("a statement"));
    };

    match token.kind {
        TokenKind::Keyword => match STMT_LOOKUP.get(token.value.as_str()) {
            Some(handler) => handler(parser),
            None => Err(parser.unexpected_token()),
        },
        TokenKind::Identifier => parse_identifier_stmt(parser),
        _ => Err(parser.unexpected_token()),
    }
}

/// Parses statements until end of input or a block terminator, which is left
/// for the caller to consume.
pub fn parse_block(parser: &mut Parser<'_>) -> Result<Vec<Stmt>, ParseError> {
    parser.enter()?;
    let mut statements = vec![];

    while let Some(token) = parser.current_token() {
        if is_block_terminator(token) {
            break;
        }

        statements.push(parse_stmt(parser)?);
    }

    parser.exit();
    Ok(statements)
}

/// Dispatches on the token after a leading identifier: `=` starts an
/// assignment, a call, member, method or binary operator starts an
/// expression statement.
fn parse_identifier_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let Some(next) = parser.peek(1) else {
        parser.advance()?;
        return Err(parser.unexpected_end("'=' or a call"));
    };

    if next.is_operator("=") {
        return parse_assignment_stmt(parser);
    }

    let starts_expression = next.is_symbol("(")
        || next.is_symbol(".")
        || next.is_symbol(":")
        || binary_operator(next).is_some();

    if starts_expression {
        let expression = parse_expr(parser, BindingPower::Default)?;
        return Ok(Stmt::Expression(expression));
    }

    parser.advance()?;
    Err(parser.unexpected_token())
}

pub fn parse_assignment_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    let target = parser.expect(TokenKind::Identifier)?.value.clone();
    parser.expect_operator("=")?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Assignment { target, value })
}

/// `function name(params) body end`
pub fn parse_fn_definition(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    parser.expect_keyword("function")?;

    let name = parser.expect(TokenKind::Identifier)?.value.clone();
    let parameters = parse_parameters(parser)?;
    let body = parse_block(parser)?;

    parser.expect_keyword("end")?;

    Ok(Expr::FunctionDefinition {
        name,
        parameters,
        body,
    })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    Ok(Stmt::Expression(parse_fn_definition(parser)?))
}

/// `local name [= expr]` or `local function name(params) body end`
pub fn parse_local_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    parser.expect_keyword("local")?;

    if parser.check_keyword("function") {
        let name = match parser.peek(1) {
            Some(token) if token.kind == TokenKind::Identifier => token.value.clone(),
            _ => String::new(),
        };
        let definition = parse_fn_definition(parser)?;

        return Ok(Stmt::LocalDeclaration {
            name,
            initializer: Some(definition),
        });
    }

    let name = parser.expect(TokenKind::Identifier)?.value.clone();

    let initializer = if parser.check_operator("=") {
        parser.advance()?;
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Stmt::LocalDeclaration { name, initializer })
}

/// `return [expr {, expr}]`, ending at end of input or a block terminator.
pub fn parse_return_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    parser.expect_keyword("return")?;

    let mut values = vec![];

    let has_values = parser
        .current_token()
        .is_some_and(|token| !is_block_terminator(token));

    if has_values {
        values.push(parse_expr(parser, BindingPower::Default)?);

        while parser.check_symbol(",") {
            parser.advance()?;
            values.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    Ok(Stmt::Return { values })
}

pub fn parse_if_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    parser.expect_keyword("if")?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_keyword("then")?;
    let then_body = parse_block(parser)?;

    let mut elseif_branches = vec![];
    while parser.check_keyword("elseif") {
        parser.advance()?;

        let condition = parse_expr(parser, BindingPower::Default)?;
        parser.expect_keyword("then")?;
        let body = parse_block(parser)?;

        elseif_branches.push(ElseIfBranch { condition, body });
    }

    let else_body = if parser.check_keyword("else") {
        parser.advance()?;
        parse_block(parser)?
    } else {
        vec![]
    };

    parser.expect_keyword("end")?;

    Ok(Stmt::If {
        condition,
        then_body,
        elseif_branches,
        else_body,
    })
}

pub fn parse_while_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    parser.expect_keyword("while")?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_keyword("do")?;
    let body = parse_block(parser)?;
    parser.expect_keyword("end")?;

    Ok(Stmt::While { condition, body })
}

pub fn parse_repeat_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    parser.expect_keyword("repeat")?;

    let body = parse_block(parser)?;
    parser.expect_keyword("until")?;
    let condition = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Repeat { body, condition })
}

/// Numeric `for v = start, end [, step] do ... end` or generic
/// `for k [, v] in iterator do ... end`.
pub fn parse_for_stmt(parser: &mut Parser<'_>) -> Result<Stmt, ParseError> {
    parser.expect_keyword("for")?;

    let first_variable = parser.expect(TokenKind::Identifier)?.value.clone();

    if parser.check_operator("=") {
        parser.advance()?;

        let start = parse_expr(parser, BindingPower::Default)?;
        parser.expect_symbol(",")?;
        let end = parse_expr(parser, BindingPower::Default)?;

        let step = if parser.check_symbol(",") {
            parser.advance()?;
            Some(parse_expr(parser, BindingPower::Default)?)
        } else {
            None
        };

        let body = parse_loop_body(parser)?;

        return Ok(Stmt::For {
            variable: first_variable,
            start,
            end,
            step,
            body,
        });
    }

    let value_variable = if parser.check_symbol(",") {
        parser.advance()?;
        Some(parser.expect(TokenKind::Identifier)?.value.clone())
    } else if parser.check_keyword("in") {
        None
    } else {
        return Err(parser.expected_token(String::from("'=', ',' or 'in'")));
    };

    parser.expect_keyword("in")?;
    let iterator = parse_expr(parser, BindingPower::Default)?;
    let body = parse_loop_body(parser)?;

    Ok(Stmt::ForIn {
        key_variable: first_variable,
        value_variable,
        iterator,
        body,
    })
}

/// `do block end`
fn parse_loop_body(parser: &mut Parser<'_>) -> Result<Vec<Stmt>, ParseError> {
    parser.expect_keyword("do")?;
    let body = parse_block(parser)?;
    parser.expect_keyword("end")?;

    Ok(body)
}
