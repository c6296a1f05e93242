use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref DEFAULT_SYMBOLS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("=");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Symbol,
    Integer,
    Float,
    String,
    Char,
}

impl TokenKind {
    /// Prefix used when printing a token, e.g. `id: foo`.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "id",
            TokenKind::Symbol => "sym",
            TokenKind::Integer => "int",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Char => "char",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.value)
    }
}

impl Token {
    /// Where scanning of this token began.
    pub fn position(&self) -> &Position {
        &self.span.start
    }

    pub fn filename(&self) -> &str {
        self.span.start.file.as_str()
    }
}
