//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a token sequence into a
//! program: an ordered list of statements. It handles:
//!
//! - Statement parsing by recursive descent, dispatched on the leading keyword
//! - Expression parsing by precedence climbing over a static binding power table
//! - Call, member and method chains, table constructors and function literals
//! - Error reporting with the offending token index and surrounding context
//!
//! The binding power, operator and statement tables live in `lookups` and are
//! built once per process.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
