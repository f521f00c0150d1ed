//! Integration tests for the source-to-AST pipeline.
//!
//! These tests drive the public entry points end to end: tokenization and
//! parsing of whole programs, and the errors each stage surfaces.

use luaparse::{
    ast::{
        expressions::{BinaryOperator, Expr},
        statements::Stmt,
    },
    errors::errors::{Error, LexErrorKind, ParseErrorKind},
    lexer::lexer::tokenize,
    parse, parse_with_name, render_error,
};

const PROGRAM: &str = r#"
-- inventory helpers
local Inventory = {}

function new_inventory(owner)
    local self = { owner = owner, items = {}, }
    return self
end

local function count(list)
    local n = 0
    for _, item in ipairs(list) do
        if item.amount > 0 then
            n = n + item.amount
        elseif item.amount == 0 then
            skipped = skipped + 1
        else
            print("negative amount for " .. item.name)
        end
    end
    return n
end

--[[ main loop
     runs until empty ]]
local bag = new_inventory([[player one]])
repeat
    bag:take(1)
until bag:empty()

while not done do
    done = count(bag.items) >= 10 or tick(function(dt) return dt * 2 end)
end
"#;

#[test]
fn test_parse_complete_program() {
    let program = parse(PROGRAM).unwrap();

    assert_eq!(program.len(), 6);
    assert!(matches!(program[0], Stmt::LocalDeclaration { .. }));
    assert!(matches!(program[2], Stmt::LocalDeclaration { .. }));
    assert!(matches!(program[4], Stmt::Repeat { .. }));
    assert!(matches!(program[5], Stmt::While { .. }));
}

#[test]
fn test_function_declaration_with_dotted_name_is_rejected() {
    // Declared function names are plain identifiers.
    let source = "function Inventory.new(owner) end";
    let error = parse(source).unwrap_err();

    let Error::Parse(error) = error else {
        panic!("expected parse error");
    };
    assert!(matches!(error.get_kind(), ParseErrorKind::ExpectedToken { .. }));
    assert_eq!(error.get_index(), 2);
}

#[test]
fn test_parse_nested_blocks() {
    let source = r#"
        local function count(list)
            local n = 0
            for _, item in ipairs(list) do
                if item.amount > 0 then
                    n = n + item.amount
                elseif item.amount == 0 then
                    skipped = skipped + 1
                else
                    print("negative amount for " .. item.name)
                end
            end
            return n
        end
    "#;
    let program = parse(source).unwrap();

    let Stmt::LocalDeclaration {
        initializer: Some(Expr::FunctionDefinition { body, .. }),
        ..
    } = &program[0]
    else {
        panic!("expected local function");
    };
    assert_eq!(body.len(), 3);

    let Stmt::ForIn { body: loop_body, .. } = &body[1] else {
        panic!("expected generic for");
    };
    let Stmt::If {
        elseif_branches,
        else_body,
        ..
    } = &loop_body[0]
    else {
        panic!("expected if statement");
    };
    assert_eq!(elseif_branches.len(), 1);
    assert_eq!(else_body.len(), 1);
}

#[test]
fn test_parse_method_calls_and_long_strings() {
    let source = "local bag = new([[player one]]) repeat bag:take(1) until bag:empty()";
    let program = parse(source).unwrap();

    let Stmt::Repeat { body, condition } = &program[1] else {
        panic!("expected repeat statement");
    };
    assert!(matches!(
        &body[0],
        Stmt::Expression(Expr::MethodCall {
            is_colon_call: true,
            ..
        })
    ));
    assert!(condition.is_call());
}

#[test]
fn test_parse_precedence_end_to_end() {
    let program = parse("done = count(items) >= 10 or tick()").unwrap();

    let Stmt::Assignment { target, value } = &program[0] else {
        panic!("expected assignment");
    };
    assert_eq!(target, "done");

    let Expr::Binary {
        left, operator, ..
    } = value
    else {
        panic!("expected binary expression");
    };
    assert_eq!(*operator, BinaryOperator::Or);
    assert!(matches!(
        left.as_ref(),
        Expr::Binary {
            operator: BinaryOperator::GreaterEquals,
            ..
        }
    ));
}

#[test]
fn test_parse_whitespace_and_comments_only() {
    assert!(parse("  -- nothing here\n--[[ or\nhere ]]\n").unwrap().is_empty());
}

#[test]
fn test_lex_error_surfaces() {
    let error = parse("local s = \"open").unwrap_err();

    let Error::Lex(error) = error else {
        panic!("expected lex error");
    };
    assert_eq!(error.get_kind(), &LexErrorKind::UnterminatedString);
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_parse_error_at_end_of_input() {
    let source = "if ready then start()";
    let tokens = tokenize(source, None).unwrap();

    let Error::Parse(error) = parse(source).unwrap_err() else {
        panic!("expected parse error");
    };
    assert!(matches!(error.get_kind(), ParseErrorKind::UnexpectedEnd { .. }));
    assert_eq!(error.get_index(), tokens.len());
}

#[test]
fn test_source_name_in_errors() {
    let error = parse_with_name("x = @", Some("game.lua".to_string())).unwrap_err();
    assert_eq!(error.get_position().1.as_str(), "game.lua");
    assert_eq!(error.get_position().0, 4);

    let error = parse("x = @").unwrap_err();
    assert_eq!(error.get_position().1.as_str(), "shell");
}

#[test]
fn test_render_error_report() {
    let source = "local a = 1\nif a then\n    print(a)\nelse\n";
    let error = parse_with_name(source, Some("main.lua".to_string())).unwrap_err();

    let rendered = render_error(&error, source);

    assert!(rendered.starts_with("Error: UnexpectedEnd ("));
    assert!(rendered.contains("-> main.lua"));
}

#[test]
fn test_parse_is_repeatable() {
    assert_eq!(parse(PROGRAM).unwrap(), parse(PROGRAM).unwrap());
}
