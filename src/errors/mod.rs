//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while turning source text into an
//! AST. It includes:
//!
//! - `LexError` for failures while scanning characters into tokens
//! - `ParseError` for structural mismatches in the token sequence
//! - `Error`, the facade-level union of both
//! - Error names and tips used when rendering diagnostics

pub mod errors;
