use std::fmt;

use logos::Logos;

use crate::{
    ast::{CompareOperator, DeclaredType},
    error::LexError,
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`. Every number is a
    /// float.
    #[regex(r"[0-9]*\.[0-9]+|[0-9]+", parse_number)]
    Number(f64),
    /// Text literal tokens, such as `"zdravo"`. Only `\"` is unescaped.
    #[regex(r#""([^"\\]|\\.)*""#, parse_text, allow_greedy = true)]
    Text(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// Type keywords: `niska`, `niz`, `broj`, `bool` and `promenljiva`.
    #[token("niska", |_| DeclaredType::Text)]
    #[token("niz", |_| DeclaredType::Text)]
    #[token("broj", |_| DeclaredType::Number)]
    #[token("bool", |_| DeclaredType::Boolean)]
    #[token("promenljiva", |_| DeclaredType::Any)]
    Type(DeclaredType),
    /// `funkcija`
    #[token("funkcija")]
    Funkcija,
    /// `vrati`
    #[token("vrati")]
    Vrati,
    /// `ako`
    #[token("ako")]
    Ako,
    /// `inace`
    #[token("inace")]
    Inace,
    /// `dok`
    #[token("dok")]
    Dok,
    /// `and`
    #[token("and")]
    And,
    /// `ili`
    #[token("ili")]
    Or,
    /// Identifier tokens, such as `x`, `$brojac` or `modul.ime`. The leading
    /// `$` is kept in the spelling; the parser turns it into a scope.
    #[regex(r"[A-Za-z_$][A-Za-z0-9_.]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Comparison operators: `==`, `!=`, `<=`, `<`, `>=`, `>`.
    #[token("==", |_| CompareOperator::Equal)]
    #[token("!=", |_| CompareOperator::NotEqual)]
    #[token("<=", |_| CompareOperator::LessEqual)]
    #[token("<", |_| CompareOperator::Less)]
    #[token(">=", |_| CompareOperator::GreaterEqual)]
    #[token(">", |_| CompareOperator::Greater)]
    Compare(CompareOperator),
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// One or more `;` or newline characters, collapsed into a single
    /// statement terminator.
    #[regex(r"[;\n]+", |lex| {
        let newlines     = lex.slice().chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        Token::Terminator
    })]
    Terminator,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a text literal, counting the newlines it spans and resolving `\"`.
///
/// A backslash followed by any other character is kept verbatim.
fn parse_text(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();

    let inner = &slice[1..slice.len() - 1];
    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => text.push('"'),
            Some(other) => {
                text.push('\\');
                text.push(other);
            },
            None => text.push('\\'),
        }
    }
    text
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// A lazy stream of `(Token, line)` pairs over a piece of source text.
///
/// Each call to `next` lexes exactly one more token. An unrecognized character
/// is reported once as a [`LexError`]; callers usually stop there.
///
/// # Example
/// ```
/// use spl::interpreter::lexer::{Token, Tokens};
///
/// let tokens = Tokens::new("broj x = 1\nx")
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// assert_eq!(tokens.last(), Some(&(Token::Identifier("x".to_string()), 2)));
/// ```
pub struct Tokens<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> Tokens<'src> {
    /// Starts lexing `source` at line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer_with_extras(source, LexerExtras::default()) }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        // Skipped input never spans a newline, so the line before lexing is the
        // line the token starts on.
        let line = self.lexer.extras.line;
        match self.lexer.next()? {
            Ok(token) => Some(Ok((token, line))),
            Err(()) => {
                let character = self.lexer.slice().chars().next().unwrap_or_default();
                Some(Err(LexError::UnrecognizedCharacter { character, line }))
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Type(ty) => write!(f, "{ty}"),
            Self::Funkcija => write!(f, "funkcija"),
            Self::Vrati => write!(f, "vrati"),
            Self::Ako => write!(f, "ako"),
            Self::Inace => write!(f, "inace"),
            Self::Dok => write!(f, "dok"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "ili"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Compare(op) => write!(f, "{op}"),
            Self::Equals => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Terminator => write!(f, "end of statement"),
            Self::Comment | Self::Ignored => Ok(()),
        }
    }
}
