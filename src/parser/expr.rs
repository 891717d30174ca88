use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Keyword, NumType, TokenKind},
};

use super::parser::Parser;

/// Comparison level: `not <comparison>` or a comparison chain.
///
/// `and`/`or` chain comparisons left-to-right with no precedence between
/// them; the chain continues through `parse_comparison` recursion.
pub fn parse_comparison(parser: &mut Parser) {
    if parser.current_token().is_keyword(Keyword::Not) {
        parser.emitter.write_main("!");
        parser.advance();
        parse_not_expr(parser);
    } else {
        parse_comp_expr(parser);
    }
}

fn parse_comp_expr(parser: &mut Parser) {
    parse_expression(parser);

    if parser.is_comparison_operator() {
        let operator = parser.current_token().value.clone();
        parser.emitter.write_main(&format!(" {} ", operator));
        parser.advance();
        parse_expression(parser);

        if parser.is_logical_operator() {
            write_logical_operator(parser);
            parser.advance();
            parse_comparison(parser);
        }
    } else {
        let token = parser.current_token().value.clone();
        parser.abort(ErrorImpl::UnexpectedTokenDetailed {
            token,
            message: String::from("expected a comparison operator (`>`, `>=`, `<`, `<=`, `==`, `!=`)"),
        });
    }
}

/// The negated comparison following `not`, emitted as a parenthesized
/// group so the C `!` binds the whole condition.
fn parse_not_expr(parser: &mut Parser) {
    parser.emitter.write_main("(");
    parse_expression(parser);

    if parser.is_comparison_operator() {
        let operator = parser.current_token().value.clone();
        parser.emitter.write_main(&format!(" {} ", operator));
        parser.advance();
        parse_expression(parser);
    }
    parser.emitter.write_main(")");

    if parser.is_logical_operator() {
        write_logical_operator(parser);
        parser.advance();
        parse_comparison(parser);
    }
}

fn write_logical_operator(parser: &mut Parser) {
    if parser.current_token().is_keyword(Keyword::And) {
        parser.emitter.write_main(" && ");
    } else {
        parser.emitter.write_main(" || ");
    }
}

/// Additive level and the entry point for typed expressions.
///
/// Returns the expression's result type: the maximum of every literal and
/// identifier tag collected during the descent, parenthesized
/// sub-expressions included.
pub fn parse_expression(parser: &mut Parser) -> NumType {
    parse_expr_body(parser);
    parser.reduce_datastack()
}

fn parse_expr_body(parser: &mut Parser) {
    parse_term(parser);
    while matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Dash
    ) {
        let operator = parser.current_token().value.clone();
        parser.emitter.write_main(&operator);
        parser.advance();
        parse_term(parser);
    }
}

fn parse_term(parser: &mut Parser) {
    parse_unary(parser);
    while matches!(
        parser.current_token_kind(),
        TokenKind::Star | TokenKind::Slash | TokenKind::FloorDiv | TokenKind::Percent
    ) {
        let operator = parser.current_token().value.clone();
        parser.emitter.write_main(&operator);
        parser.advance();
        parse_unary(parser);
    }
}

fn parse_unary(parser: &mut Parser) {
    if matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Dash
    ) {
        let operator = parser.current_token().value.clone();
        parser.emitter.write_main(&operator);
        parser.advance();
    }
    parse_primary(parser);
}

fn parse_primary(parser: &mut Parser) {
    match parser.current_token_kind() {
        TokenKind::Number(num_type) => {
            let text = parser.current_token().value.clone();
            parser.emitter.write_main(&text);
            parser.push_operand(num_type);
            parser.advance();
        }
        TokenKind::Identifier => {
            let name = parser.current_token().value.clone();
            match parser.symbols.lookup(&name) {
                Some(num_type) => {
                    parser.emitter.write_main(&name);
                    parser.push_operand(num_type);
                    parser.advance();
                }
                None => {
                    parser.abort(ErrorImpl::VariableNotDeclared { variable: name });
                }
            }
        }
        TokenKind::OpenParen => {
            parser.emitter.write_main("(");
            parser.advance();
            // the inner leaves stay on the datastack: the enclosing
            // expression's type covers parenthesized operands too
            parse_expr_body(parser);
            if parser.current_token_kind() == TokenKind::CloseParen {
                parser.emitter.write_main(")");
                parser.advance();
            } else {
                let token = parser.current_token().value.clone();
                parser.abort(ErrorImpl::UnexpectedTokenDetailed {
                    token,
                    message: String::from("expected `)`"),
                });
            }
        }
        _ => {
            let token = parser.current_token().value.clone();
            parser.abort(ErrorImpl::UnexpectedToken { token });
        }
    }
}
