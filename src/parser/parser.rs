//! Parser and code generator for the scripting language.
//!
//! This module contains the main Parser struct. Parsing is a single
//! recursive descent over the token sequence that emits C text as a side
//! effect — there is no syntax tree. The parser owns the symbol table and
//! the emitter for one compilation run, plus the datastack of operand type
//! tags that expression descent collects for type inference.
//!
//! Grammar or semantic violations are recorded as sticky errors; statement
//! routines report and return without unwinding, and the statement loops
//! stop at the first recorded error.

use std::rc::Rc;

use crate::{
    emitter::emitter::Emitter,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, KeywordSet, NumType, Token, TokenKind},
    symbols::table::SymbolTable,
    Position,
};

use super::stmt::parse_stmt;

/// The parser state for one compilation run.
///
/// Holds the token stream, the current position (one token of lookahead via
/// `seek`, arbitrary peeks by index), and the run-scoped collaborators:
/// symbol table, emitter and the pending-error list. All of it is dropped
/// with the run, so repeated invocations never share state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// The active reserved-word table, used to render keyword diagnostics
    keywords: KeywordSet,
    /// Declared variables and their inferred/declared types
    pub symbols: SymbolTable,
    /// The C output under construction
    pub emitter: Emitter,
    /// Operand type tags collected while parsing one expression
    datastack: Vec<NumType>,
    /// Errors recorded so far; parsing stops at the first one
    errors: Vec<Error>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>, keywords: KeywordSet) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            keywords,
            symbols: SymbolTable::new(),
            emitter: Emitter::new(),
            datastack: vec![],
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    ///
    /// Reads past the end of the stream are clamped to the final token, so
    /// grammar routines that over-advance after an error keep seeing EOF.
    pub fn current_token(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        self.tokens.get(self.pos.min(last)).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token.
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns the token `step` positions ahead, if any.
    pub fn seek(&self, step: usize) -> Option<&Token> {
        self.tokens.get(self.pos + step)
    }

    /// The source position of the current token.
    pub fn current_position(&self) -> Position {
        if let Some(token) = self.tokens.get(self.pos.min(self.tokens.len().saturating_sub(1))) {
            token.span.start.clone()
        } else {
            Position(0, Rc::clone(&self.file))
        }
    }

    /// Records an error at the current position and continues.
    ///
    /// Statement routines do not unwind — a malformed statement keeps
    /// parsing and may record further errors; only the first one is
    /// reported to the caller.
    pub fn abort(&mut self, error_impl: ErrorImpl) {
        let position = self.current_position();
        self.errors.push(Error::new(error_impl, position));
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&Error> {
        self.errors.first()
    }

    /// Skips the newline run separating statements.
    pub fn skip_newlines(&mut self) {
        while self.current_token_kind() == TokenKind::Newline {
            self.advance();
        }
    }

    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self.current_token_kind(),
            TokenKind::Greater
                | TokenKind::GreaterEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Equals
                | TokenKind::NotEquals
        )
    }

    pub fn is_logical_operator(&self) -> bool {
        self.current_token().is_keyword(Keyword::And)
            || self.current_token().is_keyword(Keyword::Or)
    }

    /// Records a missing-keyword error, rendering the keyword through the
    /// active keyword set so localized front ends report their own words.
    pub fn abort_expected_keyword(&mut self, keyword: Keyword) {
        let found = self.current_token().value.clone();
        let keyword = self.keywords.text(keyword).to_string();
        self.abort(ErrorImpl::ExpectedKeyword { keyword, found });
    }

    /// Checks the current token against a keyword and advances past it.
    ///
    /// A mismatch is recorded but the token is still consumed — statement
    /// routines press on after a missing keyword rather than
    /// resynchronizing.
    pub fn expect_keyword(&mut self, keyword: Keyword) {
        if !self.current_token().is_keyword(keyword) {
            self.abort_expected_keyword(keyword);
        }
        self.advance();
    }

    /// Records one operand type tag for the expression in flight.
    pub fn push_operand(&mut self, num_type: NumType) {
        self.datastack.push(num_type);
    }

    /// Reduces the collected operand tags to the expression's result type
    /// and clears the stack for the next expression.
    pub fn reduce_datastack(&mut self) -> NumType {
        let result = self
            .datastack
            .iter()
            .copied()
            .max()
            .unwrap_or(NumType::Int32);
        self.datastack.clear();
        result
    }
}

/// Parses a stream of tokens, emitting the C translation unit body.
///
/// This is the main entry point for parsing. The emitted statements are
/// wrapped in a fixed `int main()` prologue/epilogue; the finished text
/// (headers, auxiliary declarations, body) is returned on success.
///
/// On error the first recorded diagnostic is returned; any text emitted up
/// to that point is discarded with the parser.
pub fn parse(
    tokens: Vec<Token>,
    file: Rc<String>,
    keywords: KeywordSet,
) -> (Parser, Result<String, Error>) {
    let mut parser = Parser::new(tokens, Rc::clone(&file), keywords);

    if parser.tokens.is_empty() {
        return (
            parser,
            Ok(String::from("int main() {\nreturn 0;\n}")),
        );
    }

    parser.emitter.write_main("int main() {\n");
    parser.skip_newlines();

    while parser.current_token_kind() != TokenKind::EOF {
        parse_stmt(&mut parser);
        if parser.has_error() {
            let error = parser.first_error().unwrap().clone();
            return (parser, Err(error));
        }
    }

    parser.emitter.write_main("return 0;\n}");

    let output = std::mem::take(&mut parser.emitter).finish();
    (parser, Ok(output))
}
