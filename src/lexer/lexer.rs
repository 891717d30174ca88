use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{KeywordSet, NumType, Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    keywords: KeywordSet,
    pos: usize,
    file: Rc<String>,
    error: Option<Error>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>, keywords: KeywordSet) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            patterns: vec![
                // numbers before words: \w would swallow a leading digit run
                RegexPattern { regex: Regex::new("[0-9]|\\.[0-9]").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\w+").unwrap(), handler: word_handler },
                RegexPattern { regex: Regex::new("[ \\t]+").unwrap(), handler: skip_handler },
                // a comment owns its terminating newline, so a comment line
                // contributes no Newline token
                RegexPattern { regex: Regex::new("#[^\\n]*\\n?").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\\n").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Newline, "\n") },
                RegexPattern { regex: Regex::new("['\"]").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new("//").unwrap(), handler: floor_div_handler },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Exclam, "!") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
            ],
            source,
            keywords,
            file: file_name,
            error: None,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn abort(&mut self, error_impl: ErrorImpl) {
        self.error = Some(Error::new(
            error_impl,
            Position(self.pos as u32, Rc::clone(&self.file)),
        ));
    }
}

/// Scans one numeric literal, stopping at the first character that would
/// repeat or misplace a `.`, exponent marker or sign.
///
/// The rules, checked incrementally:
/// - at most one `.`; a second one ends the literal
/// - `e`/`E` only when none was seen, the previous character is a digit and
///   the next is a digit or a `-` directly followed by a digit
/// - `-` only directly after the exponent marker and before a digit
///
/// The uppercase-`E` arm of the sign rule skips the length guard that the
/// lowercase arm carries. Compatibility behavior, not an oversight.
fn number_handler(lexer: &mut Lexer, _regex: Regex) {
    let chars: Vec<char> = lexer.remainder().chars().collect();
    let ln = chars.len();

    let mut num_str = String::new();
    let mut dot_count = 0;
    let mut e_count = 0;
    let mut minus_count = 0;
    let mut i = 0;

    while i < ln {
        let c = chars[i];
        if !(c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || c == '-') {
            break;
        }

        if c == '.' {
            if dot_count == 1 {
                break;
            }
            dot_count += 1;
            num_str.push('.');
        } else if c == 'e' || c == 'E' {
            if e_count == 1 {
                break;
            }
            let prev_is_digit = i > 0 && chars[i - 1].is_ascii_digit();
            if i + 1 < ln && prev_is_digit {
                if chars[i + 1].is_ascii_digit() {
                    num_str.push('e');
                } else if chars[i + 1] == '-' {
                    if i + 2 < ln && chars[i + 2].is_ascii_digit() {
                        num_str.push('e');
                    } else {
                        break;
                    }
                } else {
                    break;
                }
            } else {
                break;
            }
            e_count += 1;
        } else if c == '-' {
            if minus_count == 1 {
                break;
            }
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            if (i + 1 < ln && prev == Some('e')) || prev == Some('E') {
                if i + 1 < ln && chars[i + 1].is_ascii_digit() {
                    num_str.push('-');
                } else {
                    break;
                }
            } else {
                break;
            }
            minus_count += 1;
        } else {
            num_str.push(c);
        }
        i += 1;
    }

    if dot_count == 0 && e_count == 0 {
        let num_type = if num_str.parse::<i32>().is_ok() {
            NumType::Int32
        } else {
            NumType::Int64
        };
        lexer.push(MK_TOKEN!(lexer, TokenKind::Number(num_type), num_str));
    } else if e_count != 0 {
        lexer.push(MK_TOKEN!(lexer, TokenKind::Number(NumType::Exp), num_str));
    } else {
        let value: f64 = num_str.parse().unwrap_or(f64::INFINITY);
        if value.is_infinite() {
            lexer.abort(ErrorImpl::ValueOverflow { literal: num_str });
        } else if value.abs() <= f32::MAX as f64 {
            lexer.push(MK_TOKEN!(lexer, TokenKind::Number(NumType::Float32), num_str));
        } else {
            lexer.push(MK_TOKEN!(lexer, TokenKind::Number(NumType::Float64), num_str));
        }
    }

    lexer.advance_n(i);
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
}

fn string_handler(lexer: &mut Lexer, _regex: Regex) {
    let (value, consumed) = {
        let remainder = lexer.remainder();
        let quote = remainder.chars().next().unwrap();
        let rest = &remainder[1..];

        match rest.find(quote) {
            Some(end) => (rest[..end].to_string(), end + 2),
            // an unterminated string runs to the end of the input
            None => (rest.to_string(), remainder.len()),
        }
    };

    lexer.push(MK_TOKEN!(lexer, TokenKind::String, value));
    lexer.advance_n(consumed);
}

fn word_handler(lexer: &mut Lexer, regex: Regex) {
    let value = regex
        .find(lexer.remainder())
        .unwrap()
        .as_str()
        .to_string();
    let len = value.len();

    let kind = match lexer.keywords.get(&value) {
        Some(keyword) => TokenKind::Keyword(keyword),
        None => TokenKind::Identifier,
    };

    lexer.push(MK_TOKEN!(lexer, kind, value));
    lexer.advance_n(len);
}

// `//` is one token but emits plain C division, so the fixed-text handler
// with its length-derived advance does not fit here
fn floor_div_handler(lexer: &mut Lexer, _regex: Regex) {
    let token = Token {
        kind: TokenKind::FloorDiv,
        value: String::from("/"),
        span: Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + 2) as u32, Rc::clone(&lexer.file)),
        },
    };
    lexer.push(token);
    lexer.advance_n(2);
}

pub fn tokenize(
    source: String,
    file: Option<String>,
    keywords: &KeywordSet,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file, keywords.clone());
    let patterns = lex.patterns.clone();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let starts_here = pattern
                .regex
                .find(lex.remainder())
                .map(|found| found.start() == 0)
                .unwrap_or(false);

            if starts_here {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                matched = true;
                break;
            }
        }

        if let Some(error) = lex.error.take() {
            return Err(error);
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: lex.at().to_string(),
                },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    lex.push(MK_TOKEN!(lex, TokenKind::EOF, String::from("EOF")));
    Ok(lex.tokens)
}
