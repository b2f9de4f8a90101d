use std::{collections::HashSet, iter::Peekable, rc::Rc};

use tracing::trace;

use crate::{
    ast::{DeclaredType, Expr, FunctionDef, LiteralValue, Parameter, Scope, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{
                expect, expect_terminator, next_after_terminators_is, parse_comma_separated,
                parse_identifier, skip_terminators,
            },
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a typed declaration (`broj x = 5`).
/// - a conditional (`ako ... { } inace { }`).
/// - a loop (`dok ... { }`).
/// - a function definition (`funkcija f(broj x) { }`).
/// - a return (`vrati x`).
/// - an expression used as a statement.
///
/// The leading keyword selects the construct; anything else is parsed as an
/// expression statement. Declarations, returns and expression statements must
/// be followed by a terminator, a closing `}` or the end of input.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek().copied() else {
        return Err(SyntaxError::UnexpectedEndOfInput);
    };
    let line = *line;

    let statement = match token {
        Token::Type(ty) => {
            let ty = *ty;
            tokens.next();
            let statement = parse_declaration(tokens, ty, line)?;
            expect_terminator(tokens)?;
            statement
        },
        Token::Ako => {
            tokens.next();
            parse_if(tokens, line)?
        },
        Token::Dok => {
            tokens.next();
            parse_while(tokens, line)?
        },
        Token::Funkcija => {
            tokens.next();
            parse_function_definition(tokens, line)?
        },
        Token::Vrati => {
            tokens.next();
            let statement = parse_return(tokens, line)?;
            expect_terminator(tokens)?;
            statement
        },
        _ => {
            let expr = parse_expression(tokens)?;
            expect_terminator(tokens)?;
            Statement::Expression { expr, line }
        },
    };

    trace!(line, "parsed statement");
    Ok(statement)
}

/// Parses the rest of a typed declaration after its type keyword.
///
/// Grammar: `declaration := type identifier ("=" expression)?`
///
/// The sigil of the identifier decides which table the variable is bound in.
/// Without an initializer the declaration receives the type's zero value at
/// run time.
///
/// # Errors
/// Returns a `SyntaxError` if the identifier is missing or the initializer
/// fails to parse.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                            ty: DeclaredType,
                            line: usize)
                            -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let spelling = parse_identifier(tokens)?;
    let (scope, name) = Scope::split(&spelling);

    let value = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    Ok(Statement::Declaration { name: name.to_string(),
                                scope,
                                ty,
                                value,
                                line })
}

/// Parses an `ako` statement with an optional `inace` branch.
///
/// Syntax:
/// ```text
///     ako <condition> { ... }
///     inace ako <condition> { ... }
///     inace { ... }
/// ```
/// `inace` may sit on the line after the closing brace. An `inace ako` chain
/// becomes an else block holding the nested conditional.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `ako` keyword.
/// - `line`: Line number of the `ako` token.
///
/// # Errors
/// - `Expected` if a brace is missing.
/// - Propagates any errors from the condition or the blocks.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    let then_block = parse_block(tokens)?;

    let else_block = if next_after_terminators_is(tokens, &Token::Inace) {
        skip_terminators(tokens);
        tokens.next();

        match tokens.peek() {
            Some((Token::Ako, nested_line)) => {
                let nested_line = *nested_line;
                tokens.next();
                Some(vec![parse_if(tokens, nested_line)?])
            },
            _ => Some(parse_block(tokens)?),
        }
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_block,
                       else_block,
                       line })
}

/// Parses a `dok` loop.
///
/// Grammar: `while := "dok" expression block`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition, body, line })
}

/// Parses a function definition of the form
/// `funkcija <name>(<type> <param>, ...) { ... }`.
///
/// A `$` on the function name or on a parameter name is dropped: functions
/// are always bound globally and parameters always live in the call's local
/// table.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the name, a parameter type or a parameter name is missing,
/// - a parameter name is repeated,
/// - the parentheses or braces do not balance,
/// - the body fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    line: usize)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let spelling = parse_identifier(tokens)?;
    let (_, name) = Scope::split(&spelling);
    let name = name.to_string();

    expect(tokens, &Token::LParen, "'('")?;
    let params = parse_comma_separated(tokens, parse_parameter, &Token::RParen)?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = params.iter().find(|param| !seen.insert(param.name.as_str())) {
        return Err(SyntaxError::DuplicateParameter { name: duplicate.name.clone(),
                                                     function: name,
                                                     line });
    }

    let body = parse_block(tokens)?;

    Ok(Statement::Function(Rc::new(FunctionDef { name,
                                                 params,
                                                 body,
                                                 line })))
}

/// Parses one `<type> <name>` entry of a parameter list.
fn parse_parameter<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Parameter>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let ty = match tokens.next() {
        Some((Token::Type(ty), _)) => *ty,
        Some((tok, line)) => {
            return Err(SyntaxError::Expected { expected: "parameter type".to_string(),
                                               found:    tok.to_string(),
                                               line:     *line, });
        },
        None => return Err(SyntaxError::UnexpectedEndOfInput),
    };

    let spelling = parse_identifier(tokens)?;
    let (_, name) = Scope::split(&spelling);

    Ok(Parameter { name: name.to_string(),
                   ty })
}

/// Parses a `vrati` statement.
///
/// Without an expression the statement returns the text `"null"`, not the
/// null value.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let value = match tokens.peek() {
        None | Some((Token::Terminator | Token::RBrace, _)) => {
            Expr::Literal { value: LiteralValue::from("null"),
                            line }
        },
        Some(_) => parse_expression(tokens)?,
    };

    Ok(Statement::Return { value, line })
}
