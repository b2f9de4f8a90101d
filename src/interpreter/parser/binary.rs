use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses one left-associative precedence level.
///
/// `next_level` parses the operands and `accepts` selects which operators
/// belong to this level.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           next_level: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           accepts: fn(BinaryOperator) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = next_level(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek().copied()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            tokens.next();
            let right = next_level(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses `and` and `ili` expressions.
///
/// Both connectives share the lowest precedence level and associate to the
/// left: `a ili b and c` parses as `(a ili b) and c`.
///
/// The rule is: `logical := comparison (("and" | "ili") comparison)*`
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_comparison, |op| {
        matches!(op, BinaryOperator::And | BinaryOperator::Or)
    })
}

/// Parses the comparison level: `==`, `!=`, `<`, `<=`, `>` and `>=`.
///
/// Comparisons chain to the left, so `a < b < c` compares the boolean
/// `a < b` with `c`.
///
/// The rule is: `comparison := additive (compare additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_additive, |op| matches!(op, BinaryOperator::Compare(_)))
}

/// Parses `+` and `-`, which also covers text concatenation.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// The binary operator a token stands for, if any.
///
/// The arithmetic tokens, every comparison, `and` and `ili` map to an
/// operator; everything else gives `None`.
///
/// # Example
/// ```
/// use spl::{
///     ast::{BinaryOperator, CompareOperator},
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Or), Some(BinaryOperator::Or));
/// assert_eq!(token_to_binary_operator(&Token::Compare(CompareOperator::Less)),
///            Some(BinaryOperator::Compare(CompareOperator::Less)));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Compare(op) => Some(BinaryOperator::Compare(*op)),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
