use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses `item ("," item)*` up to and including `closing`.
///
/// Used for parameter lists and call arguments. `closing` right away gives an
/// empty list. After each item only a comma or `closing` may follow; anything
/// else is an `Expected` error and running out of tokens is
/// `UnexpectedEndOfInput`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(SyntaxError::Expected { expected: format!("',' or '{closing}'"),
                                                   found:    tok.to_string(),
                                                   line:     *line, });
            },
            None => return Err(SyntaxError::UnexpectedEndOfInput),
        }
    }
    Ok(items)
}

/// Consumes the next token, which must equal `expected`.
///
/// Returns the line of the consumed token. `description` names the token in
/// the error message.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(SyntaxError::Expected { expected: description.to_string(),
                                                         found:    tok.to_string(),
                                                         line:     *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

/// Consumes an identifier and returns its raw spelling, sigil included.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(SyntaxError::Expected { expected: "identifier".to_string(),
                                                         found:    tok.to_string(),
                                                         line:     *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

/// Ends a simple statement.
///
/// A terminator is consumed if present. A closing `}` or the end of input also
/// ends the statement but is left in the stream.
pub(in crate::interpreter::parser) fn expect_terminator<'a, I>(tokens: &mut Peekable<I>)
                                                               -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Terminator, _)) => {
            tokens.next();
            Ok(())
        },
        None | Some((Token::RBrace, _)) => Ok(()),
        Some((tok, line)) => Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                                line:  *line, }),
    }
}

/// Skips any run of terminator tokens.
pub(in crate::interpreter::parser) fn skip_terminators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::Terminator, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Tells whether `expected` follows once terminators are skipped, without
/// consuming anything.
pub(in crate::interpreter::parser) fn next_after_terminators_is<'a, I>(tokens: &Peekable<I>,
                                                                       expected: &Token)
                                                                       -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    skip_terminators(&mut lookahead);
    matches!(lookahead.peek(), Some((tok, _)) if tok == expected)
}
