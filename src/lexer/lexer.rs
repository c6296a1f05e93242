use std::rc::Rc;

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_ERROR, MK_TOKEN,
};

use super::{
    config::LexerConfig,
    tokens::{Token, TokenKind},
};

/// Appended to every source so the last real token's lookahead stays in bounds.
const PADDING: char = ' ';

#[derive(Clone)]
pub struct Lexer {
    config: LexerConfig,
    tokens: Vec<Token>,
    source: Vec<char>,
    pos: usize,
    offset: u32,
    line: u32,
    col: u32,
    file: Rc<String>,
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new(LexerConfig::default())
    }
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Lexer {
        Lexer {
            config,
            tokens: vec![],
            source: vec![PADDING],
            pos: 0,
            offset: 0,
            line: 0,
            col: 0,
            file: Rc::new(String::from("shell")),
        }
    }

    /// Replaces the buffer with `source` plus padding and resets the cursor,
    /// counters and output.
    pub fn load(&mut self, source: &str, file: &str) -> Result<(), Error> {
        let file = Rc::new(file.to_string());
        checked_len(source.len(), &file)?;

        self.source = source.chars().chain(std::iter::once(PADDING)).collect();
        self.file = file;
        self.pos = 0;
        self.offset = 0;
        self.line = 0;
        self.col = 0;
        self.tokens = vec![];
        Ok(())
    }

    /// Scans `source` to completion. Any error aborts the scan and the tokens
    /// produced so far are discarded.
    pub fn scan(&mut self, source: &str, file: &str) -> Result<Vec<Token>, Error> {
        self.load(source, file)?;
        debug!("Scanning {} ({} bytes)", self.file, source.len());

        if let Err(error) = self.run() {
            debug!("Scan of {} failed: {}", self.file, error);
            self.tokens.clear();
            return Err(error);
        }

        debug!("Scanned {} tokens from {}", self.tokens.len(), self.file);
        Ok(std::mem::take(&mut self.tokens))
    }

    fn run(&mut self) -> Result<(), Error> {
        while !self.at_eof() {
            let ch = self.at();

            let token = if self.config.is_alpha(ch) {
                self.scan_word()?
            } else if self.config.is_digit(ch) {
                self.scan_number()?
            } else if ch == '"' {
                self.scan_string()?
            } else if ch == '\'' {
                self.scan_char()?
            } else if ch == '\n' {
                self.newline();
                continue;
            } else if self.config.is_whitespace(ch) {
                self.advance();
                continue;
            } else {
                self.scan_symbol()?
            };

            trace!("{} at {}", token, token.position());
            self.push(token);
        }

        Ok(())
    }

    pub fn scan_word(&mut self) -> Result<Token, Error> {
        self.expect("a letter or `_`", |config, ch| config.is_alpha(ch))?;

        let start = self.position();
        let mut acc = String::new();
        while !self.at_eof() && self.config.is_alphanumeric(self.at()) {
            acc.push(self.advance());
        }

        Ok(MK_TOKEN!(TokenKind::Identifier, acc, self.span_from(start)))
    }

    pub fn scan_symbol(&mut self) -> Result<Token, Error> {
        self.expect("a symbol character", |config, ch| {
            !config.is_alphanumeric(ch) && !config.is_whitespace(ch)
        })?;

        let start = self.position();
        let mut acc = String::new();
        while !self.at_eof()
            && !self.config.is_alphanumeric(self.at())
            && !self.config.is_whitespace(self.at())
        {
            acc.push(self.advance());
        }

        if self.config.is_symbol(&acc) {
            Ok(MK_TOKEN!(TokenKind::Symbol, acc, self.span_from(start)))
        } else if self.config.strict_symbols {
            MK_ERROR!(ErrorImpl::UnrecognisedToken { token: acc }, start)
        } else {
            Ok(MK_TOKEN!(TokenKind::Identifier, acc, self.span_from(start)))
        }
    }

    pub fn scan_number(&mut self) -> Result<Token, Error> {
        self.expect("a digit", |config, ch| config.is_digit(ch))?;

        let start = self.position();
        let mut acc = String::new();
        while !self.at_eof() && (self.config.is_digit(self.at()) || self.at() == '.') {
            acc.push(self.advance());
        }

        let dots = acc.matches('.').count();
        if self.config.strict_numbers && (dots > 1 || acc.ends_with('.')) {
            return MK_ERROR!(ErrorImpl::MalformedNumber { token: acc }, start);
        }

        let kind = if dots > 0 {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };

        Ok(MK_TOKEN!(kind, acc, self.span_from(start)))
    }

    pub fn scan_string(&mut self) -> Result<Token, Error> {
        self.expect("`\"`", |_, ch| ch == '"')?;

        let start = self.position();
        let acc = self.scan_quoted('"', ErrorImpl::UnterminatedString)?;

        Ok(MK_TOKEN!(TokenKind::String, acc, self.span_from(start)))
    }

    pub fn scan_char(&mut self) -> Result<Token, Error> {
        self.expect("`'`", |_, ch| ch == '\'')?;

        let start = self.position();
        let acc = self.scan_quoted('\'', ErrorImpl::UnterminatedChar)?;

        if acc.chars().count() != 1 {
            return MK_ERROR!(ErrorImpl::InvalidCharLiteral { literal: acc }, start);
        }

        Ok(MK_TOKEN!(TokenKind::Char, acc, self.span_from(start)))
    }

    /// Consumes `quote`, everything up to the next `quote`, and the closing
    /// `quote`. Returns the inner text.
    fn scan_quoted(&mut self, quote: char, unterminated: ErrorImpl) -> Result<String, Error> {
        self.advance();

        let mut acc = String::new();
        loop {
            if self.at_padding() || self.at() == '\n' {
                return MK_ERROR!(unterminated, self.position());
            }

            let ch = self.advance();
            if ch == quote {
                return Ok(acc);
            }
            acc.push(ch);
        }
    }

    fn expect(
        &self,
        expected: &'static str,
        matches: impl Fn(&LexerConfig, char) -> bool,
    ) -> Result<(), Error> {
        if self.at_eof() || !matches(&self.config, self.at()) {
            return MK_ERROR!(
                ErrorImpl::InvalidLexerState {
                    expected,
                    found: self.at()
                },
                self.position()
            );
        }

        Ok(())
    }

    // `load` bounds the buffer, so the offset cannot overflow.
    fn advance(&mut self) -> char {
        let ch = self.at();
        self.pos += 1;
        self.offset += ch.len_utf8() as u32;
        self.col += 1;
        ch
    }

    fn newline(&mut self) {
        self.pos += 1;
        self.offset += 1;
        self.line += 1;
        self.col = 0;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source.get(self.pos).copied().unwrap_or(PADDING)
    }

    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.col, Rc::clone(&self.file))
    }

    fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.position(),
        }
    }

    /// True once the cursor has reached the padding, i.e. the real input is
    /// exhausted.
    pub fn at_padding(&self) -> bool {
        self.pos + 1 >= self.source.len()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Returns `len` as an offset, or `SourceTooLarge` when the source plus its
/// padding does not fit in a `u32` offset.
pub fn checked_len(len: usize, file: &Rc<String>) -> Result<u32, Error> {
    match u32::try_from(len) {
        Ok(offset) if offset < u32::MAX => Ok(offset),
        _ => MK_ERROR!(
            ErrorImpl::SourceTooLarge { len },
            Position::new(0, 0, 0, Rc::clone(file))
        ),
    }
}

/// Scans `source` with the default configuration. A missing file name is
/// reported as `shell`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = file.unwrap_or_else(|| String::from("shell"));
    Lexer::default().scan(&source, &file_name)
}
