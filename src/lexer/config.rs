use std::collections::HashSet;

use super::tokens::DEFAULT_SYMBOLS;

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_";
pub const DIGITS: &str = "0123456789";
pub const WHITESPACE: &str = " \t\u{0b}\n\r";

/// Character classes and symbol table a `Lexer` is built with.
///
/// The default is the permissive behaviour: unmatched symbol runs become
/// identifiers and numbers are not validated beyond spotting a `.`.
#[derive(Debug, Clone)]
pub struct LexerConfig {
    pub alphabet: String,
    pub digits: String,
    pub whitespace: String,
    pub symbols: HashSet<String>,
    /// Reject numbers with more than one `.` or a trailing `.`.
    pub strict_numbers: bool,
    /// Reject symbol runs that are not in `symbols`.
    pub strict_symbols: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            alphabet: String::from(ALPHABET),
            digits: String::from(DIGITS),
            whitespace: String::from(WHITESPACE),
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            strict_numbers: false,
            strict_symbols: false,
        }
    }
}

impl LexerConfig {
    pub fn strict() -> Self {
        LexerConfig {
            strict_numbers: true,
            strict_symbols: true,
            ..Default::default()
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.insert(symbol.into());
        self
    }

    pub fn is_alpha(&self, ch: char) -> bool {
        self.alphabet.contains(ch)
    }

    pub fn is_digit(&self, ch: char) -> bool {
        self.digits.contains(ch)
    }

    pub fn is_alphanumeric(&self, ch: char) -> bool {
        self.is_alpha(ch) || self.is_digit(ch)
    }

    // Space pads the buffer and newline drives line tracking, so neither can
    // be configured away.
    pub fn is_whitespace(&self, ch: char) -> bool {
        ch == ' ' || ch == '\n' || self.whitespace.contains(ch)
    }

    pub fn is_symbol(&self, text: &str) -> bool {
        self.symbols.contains(text)
    }
}
