use std::rc::Rc;

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        config::LexerConfig,
        lexer::{checked_len, Lexer},
        tokens::Token,
    },
    Position, MK_ERROR,
};

pub struct Interpreter {
    code: String,
    file: String,
    config: LexerConfig,
}

impl Interpreter {
    pub fn new(code: String, file: String) -> Self {
        Interpreter::with_config(code, file, LexerConfig::default())
    }

    pub fn with_config(code: String, file: String, config: LexerConfig) -> Self {
        Interpreter { code, file, config }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Lexes the loaded code with a fresh lexer.
    pub fn parse(&self) -> Result<Vec<Token>, Error> {
        Lexer::new(self.config.clone()).scan(&self.code, &self.file)
    }

    /// Runs `tokens`, as returned by `parse`.
    pub fn interpret(&self, tokens: &[Token]) -> Result<(), Error> {
        debug!("Interpreting {} tokens from {}", tokens.len(), self.file);

        let file = Rc::new(self.file.clone());
        let offset = checked_len(self.code.len(), &file)?;

        // Both counts are bounded by `offset`.
        let line = self.code.matches('\n').count() as u32;
        let col = self
            .code
            .rsplit('\n')
            .next()
            .map_or(0, |last| last.chars().count() as u32);

        MK_ERROR!(
            ErrorImpl::NotImplementedError,
            Position::new(offset, line, col, file)
        )
    }
}
