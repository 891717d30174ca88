use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Keyword, NumType, TokenKind},
    parser::expr::{parse_comparison, parse_expression},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) {
    match parser.current_token_kind() {
        TokenKind::Newline => parser.skip_newlines(),
        TokenKind::Keyword(Keyword::Declare) => parse_declare_stmt(parser),
        TokenKind::Keyword(Keyword::Let) | TokenKind::Keyword(Keyword::Imagine) => {
            parse_let_stmt(parser)
        }
        TokenKind::Keyword(Keyword::Now) => {
            parser.advance();
            parse_reassign_stmt(parser);
        }
        TokenKind::Identifier => parse_reassign_stmt(parser),
        TokenKind::Keyword(Keyword::If) => parse_if_stmt(parser),
        TokenKind::Keyword(Keyword::While) => parse_while_stmt(parser),
        TokenKind::Keyword(Keyword::Print) => parse_print_stmt(parser),
        TokenKind::Keyword(Keyword::Get) => parse_get_stmt(parser),
        _ => {
            let token = parser.current_token().value.clone();
            parser.abort(ErrorImpl::UnexpectedToken { token });
        }
    }
}

/// Runs the statements of a `then`/`repeat`/`else` block body up to its
/// `end` keyword, which the caller consumes.
fn parse_block_body(parser: &mut Parser) {
    while !parser.current_token().is_keyword(Keyword::End)
        && parser.current_token_kind() != TokenKind::EOF
        && !parser.has_error()
    {
        parse_stmt(parser);
    }

    if !parser.current_token().is_keyword(Keyword::End) {
        parser.abort_expected_keyword(Keyword::End);
    }
}

/// `declare a, b as int` — one C declaration for the whole group.
///
/// Every name must be new, including within the statement itself. `exp` is
/// not a legal declared type here; exp-tagged bindings only arise from
/// `let`/`get`.
fn parse_declare_stmt(parser: &mut Parser) {
    parser.advance();

    let mut names = vec![];
    collect_new_name(parser, &mut names);
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        collect_new_name(parser, &mut names);
    }

    parser.expect_keyword(Keyword::As);

    let num_type = match parser.current_token_kind() {
        TokenKind::Keyword(Keyword::Int) => Some(NumType::Int32),
        TokenKind::Keyword(Keyword::Long) => Some(NumType::Int64),
        TokenKind::Keyword(Keyword::Float) => Some(NumType::Float32),
        TokenKind::Keyword(Keyword::Double) => Some(NumType::Float64),
        _ => None,
    };

    match num_type {
        Some(num_type) => {
            parser.advance();
            write_declaration(parser, num_type, &names);
            for name in names {
                // duplicates were reported while collecting; the first
                // binding wins
                let position = parser.current_position();
                let _ = parser.symbols.declare(name, num_type, position);
            }
        }
        None => {
            let found = parser.current_token().value.clone();
            parser.abort(ErrorImpl::UnsupportedType { found });
        }
    }
}

fn collect_new_name(parser: &mut Parser, names: &mut Vec<String>) {
    if parser.current_token_kind() != TokenKind::Identifier {
        let token = parser.current_token().value.clone();
        parser.abort(ErrorImpl::UnexpectedTokenDetailed {
            token,
            message: String::from("expected an identifier"),
        });
    }

    let name = parser.current_token().value.clone();
    if parser.symbols.is_declared(&name) || names.contains(&name) {
        parser.abort(ErrorImpl::VariableAlreadyDeclared {
            variable: name.clone(),
        });
    }

    names.push(name);
    parser.advance();
}

fn write_declaration(parser: &mut Parser, num_type: NumType, names: &[String]) {
    parser.emitter.write_main(num_type.c_type());
    parser.emitter.write_main(" ");
    parser.emitter.write_main(&names.join(","));
    parser.emitter.write_main(";\n");
}

/// `let a = expr` / `imagine a = expr`, comma-chainable.
fn parse_let_stmt(parser: &mut Parser) {
    parser.advance();

    parse_let_binding(parser);
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        parse_let_binding(parser);
    }
}

/// One `name = expr` binding of a `let` statement.
///
/// The assignment is emitted before the right-hand side is parsed, so the
/// declared C type is planted as the `$let` marker and rewritten once the
/// expression's type is known. The name itself is only bound after the
/// expression, so it cannot appear in its own initializer.
fn parse_let_binding(parser: &mut Parser) {
    if parser.current_token_kind() != TokenKind::Identifier {
        let token = parser.current_token().value.clone();
        parser.abort(ErrorImpl::UnexpectedTokenDetailed {
            token,
            message: String::from("expected an identifier"),
        });
    }

    let name = parser.current_token().value.clone();
    if parser.symbols.is_declared(&name) {
        parser.abort(ErrorImpl::VariableAlreadyDeclared {
            variable: name.clone(),
        });
    }
    parser.advance();

    if parser.current_token_kind() != TokenKind::Assignment {
        let token = parser.current_token().value.clone();
        parser.abort(ErrorImpl::UnexpectedTokenDetailed {
            token,
            message: String::from("expected `=`"),
        });
    }
    parser.advance();

    parser.emitter.write_main(&format!("$let {} = ", name));
    let num_type = parse_expression(parser);
    parser.emitter.patch_first("$let", num_type.c_type());

    let position = parser.current_position();
    let _ = parser.symbols.declare(name, num_type, position);

    parser.emitter.write_main(";\n");
}

/// Bare `name = expr` reassignment, comma-chainable.
fn parse_reassign_stmt(parser: &mut Parser) {
    parse_reassign_binding(parser);
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        parse_reassign_binding(parser);
    }
}

fn parse_reassign_binding(parser: &mut Parser) {
    if parser.current_token_kind() != TokenKind::Identifier {
        let token = parser.current_token().value.clone();
        parser.abort(ErrorImpl::UnexpectedTokenDetailed {
            token,
            message: String::from("expected an identifier"),
        });
    }

    let name = parser.current_token().value.clone();
    if !parser.symbols.is_declared(&name) {
        parser.abort(ErrorImpl::VariableNotDeclared {
            variable: name.clone(),
        });
    }
    parser.advance();

    if parser.current_token_kind() != TokenKind::Assignment {
        let token = parser.current_token().value.clone();
        parser.abort(ErrorImpl::UnexpectedTokenDetailed {
            token,
            message: String::from("expected `=`"),
        });
    }
    parser.advance();

    parser.emitter.write_main(&format!("{} = ", name));
    let num_type = parse_expression(parser);

    // no widening or narrowing on reassignment: the inferred type must be
    // exactly the declared one
    if let Some(declared) = parser.symbols.lookup(&name) {
        if declared != num_type {
            parser.abort(ErrorImpl::TypeMatchError {
                variable: name,
                received: num_type.name().to_string(),
            });
        }
    }

    parser.emitter.write_main(";\n");
}

/// `if <comparison> then <stmt>` or the newline-introduced block form
/// closed by `end`, with `else if` chains and a final `else`.
fn parse_if_stmt(parser: &mut Parser) {
    parser.emitter.write_main("if (");
    parser.advance();
    parse_comparison(parser);

    if !parser.current_token().is_keyword(Keyword::Then) {
        parser.abort_expected_keyword(Keyword::Then);
    }
    parser.emitter.write_main(") {\n");
    parser.advance();

    if parser.current_token_kind() != TokenKind::Newline {
        parse_stmt(parser);
        parser.emitter.write_main("}\n");
        parse_else(parser);
    } else {
        parser.skip_newlines();
        parse_block_body(parser);
        parser.emitter.write_main("}\n");
        parser.advance();
        if parser.current_token_kind() == TokenKind::Newline {
            parser.skip_newlines();
        }
        parse_else(parser);
    }
}

fn parse_else(parser: &mut Parser) {
    if !parser.current_token().is_keyword(Keyword::Else) {
        return;
    }
    parser.advance();

    if parser.current_token().is_keyword(Keyword::If) {
        parser.emitter.write_main("else ");
        parse_if_stmt(parser);
    } else {
        parser.emitter.write_main("else {\n");
        if parser.current_token_kind() != TokenKind::Newline {
            parse_stmt(parser);
        } else {
            parser.skip_newlines();
            parse_block_body(parser);
            parser.advance();
        }
        parser.emitter.write_main("}\n");
    }
}

/// `while <comparison> repeat <stmt>` or the block form closed by `end`.
fn parse_while_stmt(parser: &mut Parser) {
    parser.emitter.write_main("while (");
    parser.advance();
    parse_comparison(parser);

    if !parser.current_token().is_keyword(Keyword::Repeat) {
        parser.abort_expected_keyword(Keyword::Repeat);
    }
    parser.emitter.write_main(") {\n");
    parser.advance();

    if parser.current_token_kind() != TokenKind::Newline {
        parse_stmt(parser);
    } else {
        parser.skip_newlines();
        parse_block_body(parser);
        parser.advance();
    }
    parser.emitter.write_main("}\n");
}

/// `print item[, item...]` with optional `! separator "s"` / `! end "s"`
/// modifier clauses.
///
/// Each item becomes one printf call. Every call carries a separator or
/// terminator marker — chosen by one token of lookahead — and the whole
/// group's markers are resolved together only after the modifier clauses
/// are parsed, since the modifiers are written after the items they affect.
fn parse_print_stmt(parser: &mut Parser) {
    let mut separator = String::from(" ");
    let mut end = String::from("\\n");

    parser.emitter.include("stdio");
    parser.advance();

    parse_print_item(parser);

    let mut is_comma = false;
    while parser.current_token_kind() == TokenKind::Comma {
        is_comma = true;
        parser.advance();
        parse_print_item(parser);
    }

    while parser.current_token_kind() == TokenKind::Exclam {
        parser.advance();
        if parser.current_token().is_keyword(Keyword::Separator) {
            parser.advance();
            if parser.current_token_kind() != TokenKind::String {
                let token = parser.current_token().value.clone();
                parser.abort(ErrorImpl::UnexpectedTokenDetailed {
                    token,
                    message: String::from("expected a string after `! separator`"),
                });
            } else {
                separator = parser.current_token().value.clone();
                parser.advance();
            }
        } else if parser.current_token().is_keyword(Keyword::End) {
            parser.advance();
            if parser.current_token_kind() != TokenKind::String {
                let token = parser.current_token().value.clone();
                parser.abort(ErrorImpl::UnexpectedTokenDetailed {
                    token,
                    message: String::from("expected a string after `! end`"),
                });
            } else {
                end = parser.current_token().value.clone();
                parser.advance();
            }
        }
    }

    if is_comma {
        parser.emitter.patch_all("$_SEPARATOR", &separator);
        parser.emitter.patch_all("$_END", &end);
    } else {
        parser.emitter.patch_all("$_SEPARATOR", "");
        parser.emitter.patch_all("$_END", &end);
    }
}

fn parse_print_item(parser: &mut Parser) {
    parser.emitter.write_main("printf(\"");

    if parser.current_token_kind() == TokenKind::String {
        let text = parser.current_token().value.clone();
        if next_is_comma(parser) {
            parser.emitter.write_main(&format!("{}$_SEPARATOR\"", text));
        } else {
            parser.emitter.write_main(&format!("{}$_END\"", text));
        }
        parser.advance();
    } else {
        if next_is_comma(parser) {
            parser.emitter.write_main("$_SPECIFIER$_SEPARATOR\", ");
        } else {
            parser.emitter.write_main("$_SPECIFIER$_END\", ");
        }
        let num_type = parse_expression(parser);
        parser.emitter.patch_first("$_SPECIFIER", num_type.specifier());
    }

    parser.emitter.write_main(");\n");
}

fn next_is_comma(parser: &Parser) -> bool {
    parser
        .seek(1)
        .map(|token| token.kind == TokenKind::Comma)
        .unwrap_or(false)
}

/// `get a, b as int` — reads values with one scanf call.
///
/// Names not yet declared are declared here as a side effect, at the
/// requested type; already-declared names keep the type they have.
fn parse_get_stmt(parser: &mut Parser) {
    parser.advance();

    let mut names = vec![];
    let mut undeclared = vec![];
    collect_get_name(parser, &mut names, &mut undeclared);
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        collect_get_name(parser, &mut names, &mut undeclared);
    }

    parser.expect_keyword(Keyword::As);

    let num_type = match parser.current_token_kind() {
        TokenKind::Keyword(Keyword::Int) => Some(NumType::Int32),
        TokenKind::Keyword(Keyword::Long) => Some(NumType::Int64),
        TokenKind::Keyword(Keyword::Float) => Some(NumType::Float32),
        TokenKind::Keyword(Keyword::Double) => Some(NumType::Float64),
        TokenKind::Keyword(Keyword::Exp) => Some(NumType::Exp),
        _ => None,
    };

    let num_type = match num_type {
        Some(num_type) => {
            parser.advance();
            num_type
        }
        None => {
            let found = parser.current_token().value.clone();
            parser.abort(ErrorImpl::UnsupportedType { found });
            return;
        }
    };

    parser.emitter.include("stdio");

    if !undeclared.is_empty() {
        write_declaration(parser, num_type, &undeclared);
    }

    parser.emitter.write_main("scanf(\"");
    for _ in &names {
        parser.emitter.write_main(num_type.specifier());
    }
    parser.emitter.write_main("\", ");
    for (index, name) in names.iter().enumerate() {
        if index + 1 == names.len() {
            parser.emitter.write_main(&format!("&{}", name));
        } else {
            parser.emitter.write_main(&format!("&{}, ", name));
        }
    }
    parser.emitter.write_main(");\n");

    for name in undeclared {
        let position = parser.current_position();
        let _ = parser.symbols.declare(name, num_type, position);
    }
}

fn collect_get_name(parser: &mut Parser, names: &mut Vec<String>, undeclared: &mut Vec<String>) {
    if parser.current_token_kind() != TokenKind::Identifier {
        let token = parser.current_token().value.clone();
        parser.abort(ErrorImpl::UnexpectedTokenDetailed {
            token,
            message: String::from("expected an identifier"),
        });
    }

    let name = parser.current_token().value.clone();
    if !parser.symbols.is_declared(&name) && !undeclared.contains(&name) {
        undeclared.push(name.clone());
    }
    names.push(name);
    parser.advance();
}
