//! Lexical analysis.
//!
//! Converts `.dl` source text into a flat sequence of classified tokens in a
//! single pass over the characters. It handles:
//!
//! - Words (identifiers), digit runs (integers and floats)
//! - Double-quoted strings and single-quoted characters
//! - Symbol runs, matched against the configured symbol set
//! - Line and column tracking for every token

pub mod config;
pub mod lexer;
pub mod tokens;
