#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod highlight;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;

/// A location in a source file.
///
/// `offset` is a byte offset; `line` and `column` are 1-based and only used
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, column: u32, file: Rc<String>) -> Self {
        Position {
            offset,
            line,
            column,
            file,
        }
    }

    pub fn null() -> Self {
        Position::new(0, 1, 1, Rc::new(String::from("<null>")))
    }
}

/// Half-open byte range `[start, end)` in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        (self.end.offset - self.start.offset) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

/// Returns `(line number, line text, byte offset within the line)` for a
/// byte position. A position at the very end of the source maps to the end
/// of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}

/// Renders an error with the offending source line underneath.
///
/// ```text
/// Error: UnexpectedToken (expected `;`, found end of file)
/// -> main.fsl:1:7
///   |
/// 1 | X :: 1
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}:{}:{}", position.file, position.line, position.column);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
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

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    const SOURCE: &str = "Hello, world!\nThis is a test file.\n\n    Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 44);
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("X :: 1", 6);
        assert_eq!(line_number, 1);
        assert_eq!(line, "X :: 1");
        assert_eq!(line_pos, 6);

        let (line_number, line, line_pos) = super::get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                found: String::from("end of file"),
                expected: String::from("`;`"),
            },
            Position::new(6, 1, 7, Rc::new(String::from("main.fsl"))),
        );

        let rendered = super::render_error(&error, "X :: 1");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (expected `;`, found end of file)");
        assert_eq!(lines[1], "-> main.fsl:1:7");
        assert_eq!(lines[3], "1 | X :: 1");
        assert_eq!(lines[4], "  | ------^");
    }
}
