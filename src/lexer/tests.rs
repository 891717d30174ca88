//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//!
//! - Keywords and identifiers (including the configurable keyword set)
//! - Numeric literals and their type tags
//! - String literals
//! - Operators and punctuation
//! - Comments and newlines
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{Keyword, KeywordSet, NumType, TokenKind},
};
use std::collections::HashMap;

fn tokens_of(source: &str) -> Vec<super::tokens::Token> {
    let keywords = KeywordSet::english();
    tokenize(source.to_string(), Some("test.scl".to_string()), &keywords).unwrap()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokens_of("declare as let imagine now if else then end while repeat");

    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Declare));
    assert_eq!(tokens[1].kind, TokenKind::Keyword(Keyword::As));
    assert_eq!(tokens[2].kind, TokenKind::Keyword(Keyword::Let));
    assert_eq!(tokens[3].kind, TokenKind::Keyword(Keyword::Imagine));
    assert_eq!(tokens[4].kind, TokenKind::Keyword(Keyword::Now));
    assert_eq!(tokens[5].kind, TokenKind::Keyword(Keyword::If));
    assert_eq!(tokens[6].kind, TokenKind::Keyword(Keyword::Else));
    assert_eq!(tokens[7].kind, TokenKind::Keyword(Keyword::Then));
    assert_eq!(tokens[8].kind, TokenKind::Keyword(Keyword::End));
    assert_eq!(tokens[9].kind, TokenKind::Keyword(Keyword::While));
    assert_eq!(tokens[10].kind, TokenKind::Keyword(Keyword::Repeat));
    assert_eq!(tokens[11].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_type_and_io_keywords() {
    let tokens = tokens_of("int long float double exp print get and or not separator");

    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Int));
    assert_eq!(tokens[1].kind, TokenKind::Keyword(Keyword::Long));
    assert_eq!(tokens[2].kind, TokenKind::Keyword(Keyword::Float));
    assert_eq!(tokens[3].kind, TokenKind::Keyword(Keyword::Double));
    assert_eq!(tokens[4].kind, TokenKind::Keyword(Keyword::Exp));
    assert_eq!(tokens[5].kind, TokenKind::Keyword(Keyword::Print));
    assert_eq!(tokens[6].kind, TokenKind::Keyword(Keyword::Get));
    assert_eq!(tokens[7].kind, TokenKind::Keyword(Keyword::And));
    assert_eq!(tokens[8].kind, TokenKind::Keyword(Keyword::Or));
    assert_eq!(tokens[9].kind, TokenKind::Keyword(Keyword::Not));
    assert_eq!(tokens[10].kind, TokenKind::Keyword(Keyword::Separator));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokens_of("foo bar_123 _underscore CamelCase");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar_123");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unicode_identifier() {
    let tokens = tokens_of("größe");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "größe");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_custom_keyword_set() {
    let mut table: HashMap<&'static str, Keyword> = HashMap::new();
    table.insert("zeige", Keyword::Print);
    table.insert("ende", Keyword::End);
    let keywords = KeywordSet::new(&table);

    let tokens = tokenize("zeige print".to_string(), None, &keywords).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Print));
    // english words are plain identifiers under the substituted table
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "print");
    assert_eq!(keywords.text(Keyword::End), "ende");
}

#[test]
fn test_tokenize_integer_boundaries() {
    let tokens = tokens_of("0 42 2147483647 2147483648 9223372036854775807");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[1].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[1].value, "42");
    assert_eq!(tokens[2].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[3].kind, TokenKind::Number(NumType::Int64));
    assert_eq!(tokens[4].kind, TokenKind::Number(NumType::Int64));
}

#[test]
fn test_tokenize_float_magnitudes() {
    let tokens = tokens_of("3.14 .5 0.0");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Float32));
    assert_eq!(tokens[0].value, "3.14");
    assert_eq!(tokens[1].kind, TokenKind::Number(NumType::Float32));
    assert_eq!(tokens[1].value, ".5");
    assert_eq!(tokens[2].kind, TokenKind::Number(NumType::Float32));
}

#[test]
fn test_tokenize_double_magnitude() {
    // 4e38 written out, past the f32 range but well within f64
    let source = format!("4{}.0", "0".repeat(38));
    let keywords = KeywordSet::english();
    let tokens = tokenize(source, None, &keywords).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Float64));
}

#[test]
fn test_tokenize_value_overflow() {
    // 1e309 written out does not fit a double
    let source = format!("1{}.0", "0".repeat(309));
    let keywords = KeywordSet::english();
    let result = tokenize(source, None, &keywords);

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().get_error_name(), "ValueOverflow");
}

#[test]
fn test_tokenize_exponent_literals() {
    let tokens = tokens_of("1e5 2.5e3 1e-5 9e999");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Exp));
    assert_eq!(tokens[0].value, "1e5");
    assert_eq!(tokens[1].kind, TokenKind::Number(NumType::Exp));
    assert_eq!(tokens[1].value, "2.5e3");
    assert_eq!(tokens[2].kind, TokenKind::Number(NumType::Exp));
    assert_eq!(tokens[2].value, "1e-5");
    // exp literals keep their tag regardless of magnitude
    assert_eq!(tokens[3].kind, TokenKind::Number(NumType::Exp));
}

#[test]
fn test_tokenize_uppercase_exponent_is_normalized() {
    let tokens = tokens_of("2E6");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Exp));
    assert_eq!(tokens[0].value, "2e6");
}

#[test]
fn test_second_dot_ends_the_literal() {
    let tokens = tokens_of("1.2.3");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Float32));
    assert_eq!(tokens[0].value, "1.2");
    assert_eq!(tokens[1].kind, TokenKind::Number(NumType::Float32));
    assert_eq!(tokens[1].value, ".3");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_exponent_after_dot_is_not_consumed() {
    let tokens = tokens_of("1.e3");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Float32));
    assert_eq!(tokens[0].value, "1.");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "e3");
}

#[test]
fn test_exponent_with_plus_sign_ends_the_literal() {
    let tokens = tokens_of("1e+5");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "e");
    assert_eq!(tokens[2].kind, TokenKind::Plus);
    assert_eq!(tokens[3].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[3].value, "5");
}

#[test]
fn test_second_exponent_ends_the_literal() {
    let tokens = tokens_of("1e2e3");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Exp));
    assert_eq!(tokens[0].value, "1e2");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "e3");
}

#[test]
fn test_minus_is_not_part_of_a_plain_number() {
    let tokens = tokens_of("5-3");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[2].value, "3");
}

#[test]
fn test_tokenize_strings_both_quotes() {
    let tokens = tokens_of("'hello' \"world\"");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_no_escape_processing() {
    let tokens = tokens_of(r#"'a\nb'"#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\\nb");
}

#[test]
fn test_tokenize_unterminated_string_runs_to_eof() {
    let tokens = tokens_of("'no closing quote");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "no closing quote");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokens_of("''");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokens_of("+ - * / // % = == != > >= < <=");

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::FloorDiv);
    assert_eq!(tokens[5].kind, TokenKind::Percent);
    assert_eq!(tokens[6].kind, TokenKind::Assignment);
    assert_eq!(tokens[7].kind, TokenKind::Equals);
    assert_eq!(tokens[8].kind, TokenKind::NotEquals);
    assert_eq!(tokens[9].kind, TokenKind::Greater);
    assert_eq!(tokens[10].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[11].kind, TokenKind::Less);
    assert_eq!(tokens[12].kind, TokenKind::LessEquals);
    assert_eq!(tokens[13].kind, TokenKind::EOF);
}

#[test]
fn test_floor_div_emits_plain_division() {
    let tokens = tokens_of("a//b");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::FloorDiv);
    assert_eq!(tokens[1].value, "/");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokens_of("( ) , !");

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::Comma);
    assert_eq!(tokens[3].kind, TokenKind::Exclam);
}

#[test]
fn test_tokenize_newlines_are_tokens() {
    let tokens = tokens_of("a\nb");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_comment_swallows_its_newline() {
    let tokens = tokens_of("print 1 # trailing comment\nprint 2");

    // no Newline token between the statements: the comment consumed it
    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Print));
    assert_eq!(tokens[1].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[2].kind, TokenKind::Keyword(Keyword::Print));
    assert_eq!(tokens[3].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_comment_only_line() {
    let tokens = tokens_of("#!English\nprint 1");

    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Print));
    assert_eq!(tokens[1].kind, TokenKind::Number(NumType::Int32));
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokens_of("  let   x   =   42  ");

    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Let));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_number_glued_to_identifier() {
    let tokens = tokens_of("123abc");

    assert_eq!(tokens[0].kind, TokenKind::Number(NumType::Int32));
    assert_eq!(tokens[0].value, "123");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let keywords = KeywordSet::english();
    let result = tokenize("let x = @".to_string(), None, &keywords);

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_lone_dot_is_unrecognised() {
    let keywords = KeywordSet::english();
    let result = tokenize("x = .".to_string(), None, &keywords);

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_tokenize_simple_statement() {
    let tokens = tokens_of("get x, y as int");

    assert_eq!(tokens.len(), 7); // get, x, comma, y, as, int, EOF
    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Get));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Comma);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].kind, TokenKind::Keyword(Keyword::As));
    assert_eq!(tokens[5].kind, TokenKind::Keyword(Keyword::Int));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}
