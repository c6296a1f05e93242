#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;

pub use interpreter::interpreter::Interpreter;
pub use lexer::lexer::{tokenize, Lexer};

/// A point in a source file. `offset` is a byte index, `line` and `col` are
/// zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub col: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, col: u32, file: Rc<String>) -> Self {
        Position {
            offset,
            line,
            col,
            file,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.col + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the one-based line number, the line's text and the byte offset of
/// `position` within that line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last character.
    let last = content.split_inclusive('\n').last().unwrap_or("");
    if last.ends_with('\n') || last.is_empty() {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last.to_string(), last.len()))
    }
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnterminatedString (...)
        -> main.dl
           |
        20 | a = "abc
           | --------^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", position));

    let Some((line, line_text, _)) = get_line_at_position(source, position.offset) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // `col` counts characters, the caret is placed in characters too.
    let arrows = (position.col as usize).saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
