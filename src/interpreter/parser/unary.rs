use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Scope, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        evaluator::stack::ensure_sufficient_stack,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses unary minus.
///
/// Negation binds tighter than every binary operator and associates to the
/// right, so `--x` is `-(-x)`. Long runs of minus signs grow the stack
/// instead of overflowing it.
///
/// The rule is: `unary := "-" unary | primary`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek().copied() {
        tokens.next();
        let expr = ensure_sufficient_stack(|| parse_unary(tokens))?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(expr),
                                  line: *line, });
    }

    parse_primary(tokens)
}

/// Parses a primary expression.
///
/// Primary expressions are literals, parenthesized expressions, variable
/// references and function calls. Parentheses only group; they produce no
/// node of their own.
///
/// # Errors
/// - `UnexpectedToken` if the token cannot start an expression.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(SyntaxError::UnexpectedEndOfInput);
    };
    let line = *line;

    let literal = |value: LiteralValue| -> ParseResult<Expr> { Ok(Expr::Literal { value, line }) };

    match token {
        Token::Number(n) => literal(LiteralValue::Number(*n)),
        Token::Text(s) => literal(LiteralValue::Text(s.clone())),
        Token::Bool(b) => literal(LiteralValue::Bool(*b)),
        Token::Null => literal(LiteralValue::Null),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        Token::Identifier(spelling) => {
            let (scope, name) = Scope::split(spelling);
            let name = name.to_string();

            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                return Ok(Expr::FunctionCall { name,
                                               scope,
                                               arguments,
                                               line });
            }

            Ok(Expr::Variable { name, scope, line })
        },
        other => Err(SyntaxError::UnexpectedToken { token: other.to_string(),
                                                    line }),
    }
}
