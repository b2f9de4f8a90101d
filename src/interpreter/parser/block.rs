use std::iter::Peekable;

use crate::{
    ast::Block,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, skip_terminators},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements separated by terminators.
/// Parsing continues until the closing `}` token, which is consumed.
/// Leading and trailing terminators inside the block are ignored.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements of the block in execution order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LBrace, "'{'")?;
    let statements = parse_statements(tokens)?;

    match tokens.next() {
        Some((Token::RBrace, _)) => Ok(statements),
        Some((token, line)) => Err(SyntaxError::Expected { expected: "'}'".to_string(),
                                                           found:    token.to_string(),
                                                           line:     *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

/// Parses statements until a `}` or the end of input, leaving the stopping
/// token in the stream.
pub(in crate::interpreter::parser) fn parse_statements<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_terminators(tokens);
        match tokens.peek() {
            None | Some((Token::RBrace, _)) => break,
            Some(_) => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(statements)
}
