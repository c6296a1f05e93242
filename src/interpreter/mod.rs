//! Entry points over loaded source code.
//!
//! `Interpreter::parse` currently stops at the token stream; evaluation is
//! not implemented yet.

pub mod interpreter;
