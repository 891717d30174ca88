use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref ENGLISH_KEYWORDS: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("int", Keyword::Int);
        map.insert("long", Keyword::Long);
        map.insert("float", Keyword::Float);
        map.insert("double", Keyword::Double);
        map.insert("exp", Keyword::Exp);
        map.insert("declare", Keyword::Declare);
        map.insert("as", Keyword::As);
        map.insert("let", Keyword::Let);
        map.insert("imagine", Keyword::Imagine);
        map.insert("now", Keyword::Now);
        map.insert("if", Keyword::If);
        map.insert("else", Keyword::Else);
        map.insert("then", Keyword::Then);
        map.insert("end", Keyword::End);
        map.insert("while", Keyword::While);
        map.insert("repeat", Keyword::Repeat);
        map.insert("and", Keyword::And);
        map.insert("or", Keyword::Or);
        map.insert("not", Keyword::Not);
        map.insert("print", Keyword::Print);
        map.insert("get", Keyword::Get);
        map.insert("separator", Keyword::Separator);
        map
    };
}

/// Numeric type tag assigned by the scanner and tracked by the symbol table.
///
/// The variant order is the widening order used to reduce an expression's
/// operand tags to its result type: `Exp` is maximal and forces the whole
/// expression once present.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum NumType {
    Int32,
    Int64,
    Float32,
    Float64,
    Exp,
}

impl NumType {
    /// The C type keyword emitted for declarations of this type.
    pub fn c_type(&self) -> &'static str {
        match self {
            NumType::Int32 => "int",
            NumType::Int64 => "long long int",
            NumType::Float32 => "float",
            NumType::Float64 => "double",
            // exp values are stored as plain doubles, the tag only
            // changes the format specifier
            NumType::Exp => "double",
        }
    }

    /// The printf/scanf format specifier for this type.
    pub fn specifier(&self) -> &'static str {
        match self {
            NumType::Int32 => "%d",
            NumType::Int64 => "%lld",
            NumType::Float32 => "%f",
            NumType::Float64 => "%lf",
            NumType::Exp => "%E",
        }
    }

    /// The source-language name of this type, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NumType::Int32 => "int",
            NumType::Int64 => "long",
            NumType::Float32 => "float",
            NumType::Float64 => "double",
            NumType::Exp => "exp",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Int,
    Long,
    Float,
    Double,
    Exp,
    Declare,
    As,
    Let,
    Imagine,
    Now,
    If,
    Else,
    Then,
    End,
    While,
    Repeat,
    And,
    Or,
    Not,
    Print,
    Get,
    Separator,
}

/// The reserved-word table for one language front end.
///
/// The scanner classifies words through `get` and diagnostics render keyword
/// names through `text`, so a localized front end is a drop-in substitution
/// of this table — token kinds and grammar are untouched.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    words: HashMap<String, Keyword>,
    texts: HashMap<Keyword, String>,
}

impl KeywordSet {
    pub fn new(table: &HashMap<&'static str, Keyword>) -> Self {
        let mut words = HashMap::new();
        let mut texts = HashMap::new();

        for (word, keyword) in table {
            words.insert(word.to_string(), *keyword);
            texts.insert(*keyword, word.to_string());
        }

        KeywordSet { words, texts }
    }

    pub fn english() -> Self {
        KeywordSet::new(&ENGLISH_KEYWORDS)
    }

    pub fn get(&self, word: &str) -> Option<Keyword> {
        self.words.get(word).copied()
    }

    pub fn text(&self, keyword: Keyword) -> &str {
        self.texts
            .get(&keyword)
            .map(|text| text.as_str())
            .unwrap_or("?")
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Newline,
    Number(NumType),
    String,
    Identifier,
    Keyword(Keyword),

    OpenParen,
    CloseParen,
    Comma,
    Exclam,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Star,
    Slash,
    FloorDiv,
    Percent,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
