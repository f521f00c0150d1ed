#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::parse_program,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source unit, tagged with the unit's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Name used for source units parsed without one.
pub const DEFAULT_SOURCE_NAME: &str = "shell";

pub fn source_name(file: Option<String>) -> Arc<String> {
    Arc::new(file.unwrap_or_else(|| String::from(DEFAULT_SOURCE_NAME)))
}

/// Parses one source unit into its program AST.
pub fn parse(source: &str) -> Result<Vec<Stmt>, Error> {
    parse_with_name(source, None)
}

/// Same as [`parse`], with `file` recorded in every error position.
pub fn parse_with_name(source: &str, file: Option<String>) -> Result<Vec<Stmt>, Error> {
    let file = source_name(file);
    let tokens = Lexer::new(source, Arc::clone(&file)).tokenize()?;

    Ok(parse_program(&tokens, file)?)
}

/// Resolves a byte offset into `(line number, line text, column)`.
///
/// The end-of-input offset resolves to the end of the last line. Offsets past
/// the end of `source` return `None`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            Some((line_number - 1, line.to_string(), line.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> main.lua
           |
        20 | local a = #
           | ----------^
    */

    let position = error.get_position();
    let mut result = String::new();

    if let ErrorTip::None = error.get_tip() {
        result.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        result.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    result.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return result;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    result.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    result.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |prefix| prefix.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    result.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    result
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);

    (String::from(trimmed), string.len() - trimmed.len())
}
