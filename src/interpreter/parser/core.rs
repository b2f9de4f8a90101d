use std::iter::Peekable;

use crate::{
    ast::{Block, Expr},
    error::SyntaxError,
    interpreter::{
        evaluator::stack::ensure_sufficient_stack,
        lexer::Token,
        parser::{binary::parse_logical, block::parse_statements},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole program: statements separated by terminators until the
/// token stream is exhausted.
///
/// # Errors
/// Returns a `SyntaxError` if any statement is malformed, or if a stray `}`
/// appears at the top level.
///
/// # Example
/// ```
/// use spl::interpreter::{lexer::Tokens, parser::core::parse_program};
///
/// let tokens = Tokens::new("broj x = 2\nvrati x").collect::<Result<Vec<_>, _>>()
///                                                 .unwrap();
/// let block = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(block.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let block = parse_statements(tokens)?;

    match tokens.next() {
        None => Ok(block),
        Some((token, line)) => Err(SyntaxError::UnexpectedToken { token: token.to_string(),
                                                                  line:  *line, }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the logical connectives, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := logical`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    ensure_sufficient_stack(|| parse_logical(tokens))
}
