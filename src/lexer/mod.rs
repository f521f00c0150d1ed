//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization driven by an ordered table of regex patterns
//! - Recognition of keywords, identifiers, literals, operators and symbols
//! - Quoted and long-bracket strings, line and block comments
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
