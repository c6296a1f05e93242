use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidLexerState { .. } => "InvalidLexerState",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedChar => "UnterminatedChar",
            ErrorImpl::InvalidCharLiteral { .. } => "InvalidCharLiteral",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
            ErrorImpl::NotImplementedError => "NotImplementedError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidLexerState { expected, found } => ErrorTip::Suggestion(format!(
                "Lexer expected {} but found `{}`, this is a bug in the lexer",
                expected,
                found.escape_debug()
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnterminatedChar => {
                ErrorTip::Suggestion(String::from("Character literal is missing its closing `'`"))
            }
            ErrorImpl::InvalidCharLiteral { literal } => ErrorTip::Suggestion(format!(
                "Character literal `'{}'` must contain exactly one character",
                literal
            )),
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number may contain at most one `.` followed by digits",
                token
            )),
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::SourceTooLarge { len } => ErrorTip::Suggestion(format!(
                "Source is {} bytes, the limit is {} bytes",
                len,
                u32::MAX - 1
            )),
            ErrorImpl::NotImplementedError => ErrorTip::Suggestion(String::from(
                "This feature is expected to be handled, but has not yet been implemented",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid lexer state: expected {expected}, found {found:?}")]
    InvalidLexerState { expected: &'static str, found: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("invalid character literal: {literal:?}")]
    InvalidCharLiteral { literal: String },
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("source too large: {len} bytes")]
    SourceTooLarge { len: usize },
    #[error("not implemented error")]
    NotImplementedError,
}
