//! Error types for the lexer and interpreter.
//!
//! Every failure carries the `Position` of the cursor at the point it was
//! detected, along with a name and an optional tip used when rendering
//! diagnostics.

pub mod errors;
