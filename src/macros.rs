//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates an `Err` carrying an `ErrorImpl` and a position

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates an `Err(Error)` from an `ErrorImpl` variant and a `Position`.
///
/// # Example
///
/// ```ignore
/// return MK_ERROR!(ErrorImpl::UnterminatedString, lexer.position());
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($kind:expr, $position:expr) => {
        Err(Error::new($kind, $position))
    };
}
