#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod emitter;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Locates the line containing a byte offset in `content`.
///
/// Returns the 1-based line number, the line text, and the offset within the
/// line. Offsets at or past the end of the content resolve to the last line,
/// so end-of-input diagnostics still render.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(content.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "print 'hi'\nget x as int\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "print 'hi'\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 15);
        assert_eq!(line_number, 2);
        assert_eq!(line, "get x as int\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_at_position_past_end() {
        let content = "declare x as int";
        let (line_number, _, _) = super::get_line_at_position(content, 500);
        assert_eq!(line_number, 1);
    }
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        error: message
        -> final.scl
           |
        20 | let a = #;
           | --------^
    */

    let content = fs::read_to_string(&file).unwrap_or_default();

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(&content, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
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
