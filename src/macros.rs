//! Utility macros for the transpiler.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token spanning `value` at the lexer's position
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance at the lexer's current position.
///
/// The span covers the byte length of `value` starting at the lexer's
/// position, so handlers build the token before advancing.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(lexer, TokenKind::Comma, String::from(","));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($lexer:expr, $kind:expr, $value:expr) => {{
        let value: String = $value;
        let start = $lexer.pos;
        Token {
            kind: $kind,
            span: Span {
                start: Position(start as u32, Rc::clone(&$lexer.file)),
                end: Position((start + value.len()) as u32, Rc::clone(&$lexer.file)),
            },
            value,
        }
    }};
}

/// Creates a lexer handler for tokens whose text is fixed.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer past the token's text.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            lexer.push(MK_TOKEN!(lexer, $kind, String::from($value)));
            lexer.advance_n($value.len());
        }
    };
}
