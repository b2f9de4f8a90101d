use pretty_assertions::assert_eq;
use spl::{
    ast::{CompareOperator, DeclaredType},
    error::LexError,
    interpreter::lexer::Token,
    lex, tokenize,
};

fn tokens(src: &str) -> Vec<Token> {
    lex(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"))
            .into_iter()
            .map(|(token, _)| token)
            .collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(tokens("funkcija vrati ako inace dok and ili true false null"),
               vec![Token::Funkcija,
                    Token::Vrati,
                    Token::Ako,
                    Token::Inace,
                    Token::Dok,
                    Token::And,
                    Token::Or,
                    Token::Bool(true),
                    Token::Bool(false),
                    Token::Null]);

    assert_eq!(tokens("niska niz broj bool promenljiva"),
               vec![Token::Type(DeclaredType::Text),
                    Token::Type(DeclaredType::Text),
                    Token::Type(DeclaredType::Number),
                    Token::Type(DeclaredType::Boolean),
                    Token::Type(DeclaredType::Any)]);

    // A keyword prefix does not split a longer identifier.
    assert_eq!(tokens("dokle ako_ niz.dug brojac"),
               vec![ident("dokle"), ident("ako_"), ident("niz.dug"), ident("brojac")]);
}

#[test]
fn sigils_stay_in_the_spelling() {
    assert_eq!(tokens("$x $_tmp $f.g"), vec![ident("$x"), ident("$_tmp"), ident("$f.g")]);
}

#[test]
fn numbers_are_floats() {
    assert_eq!(tokens("0 42 2.75 .5"),
               vec![Token::Number(0.0),
                    Token::Number(42.0),
                    Token::Number(2.75),
                    Token::Number(0.5)]);
    // A minus sign is always its own token.
    assert_eq!(tokens("-1"), vec![Token::Minus, Token::Number(1.0)]);
}

#[test]
fn operators_and_punctuation() {
    assert_eq!(tokens("== != <= < >= > = + - * / ( ) { } ,"),
               vec![Token::Compare(CompareOperator::Equal),
                    Token::Compare(CompareOperator::NotEqual),
                    Token::Compare(CompareOperator::LessEqual),
                    Token::Compare(CompareOperator::Less),
                    Token::Compare(CompareOperator::GreaterEqual),
                    Token::Compare(CompareOperator::Greater),
                    Token::Equals,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::Comma]);

    assert_eq!(tokens("a<=b"),
               vec![ident("a"), Token::Compare(CompareOperator::LessEqual), ident("b")]);
}

#[test]
fn terminators_collapse_and_count_lines() {
    let lexed = lex("a;;\n\n;b\nc").unwrap();

    assert_eq!(lexed,
               vec![(ident("a"), 1),
                    (Token::Terminator, 1),
                    (ident("b"), 3),
                    (Token::Terminator, 3),
                    (ident("c"), 4)]);
}

#[test]
fn whitespace_separates_but_does_not_terminate() {
    assert_eq!(tokens("  broj\tx\r\n"),
               vec![Token::Type(DeclaredType::Number), ident("x"), Token::Terminator]);
}

#[test]
fn comments_are_skipped() {
    let lexed = lex("// prvi\nx // drugi\n// treci").unwrap();

    assert_eq!(lexed, vec![(Token::Terminator, 1), (ident("x"), 2), (Token::Terminator, 2)]);
    // A single slash is division.
    assert_eq!(tokens("a / b"), vec![ident("a"), Token::Slash, ident("b")]);
}

#[test]
fn text_literals() {
    assert_eq!(tokens(r#""zdravo" """#),
               vec![Token::Text("zdravo".to_string()), Token::Text(String::new())]);
    assert_eq!(tokens(r#""rekao je \"da\"""#),
               vec![Token::Text("rekao je \"da\"".to_string())]);
    // Only an escaped quote is resolved.
    assert_eq!(tokens(r#""a\nb""#), vec![Token::Text("a\\nb".to_string())]);
    // Keywords inside text stay text.
    assert_eq!(tokens(r#""ako // dok""#), vec![Token::Text("ako // dok".to_string())]);
}

#[test]
fn multi_line_text_advances_the_line() {
    let lexed = lex("\"prvi\ndrugi\"\nx").unwrap();

    assert_eq!(lexed,
               vec![(Token::Text("prvi\ndrugi".to_string()), 1),
                    (Token::Terminator, 2),
                    (ident("x"), 3)]);
}

#[test]
fn unrecognized_character_reports_its_line() {
    assert_eq!(lex("broj x = 1\n\nx @ 2"),
               Err(LexError::UnrecognizedCharacter { character: '@',
                                                     line:      3, }));
    assert!(lex("\"bez kraja").is_err());
    assert!(lex("a & b").is_err());
}

#[test]
fn tokenizing_is_lazy() {
    let mut stream = tokenize("x @");

    assert_eq!(stream.next(), Some(Ok((ident("x"), 1))));
    assert!(matches!(stream.next(), Some(Err(LexError::UnrecognizedCharacter { character: '@', .. }))));
}

#[test]
fn empty_input_has_no_tokens() {
    assert_eq!(tokens(""), Vec::<Token>::new());
    assert_eq!(tokens("   // samo komentar"), Vec::<Token>::new());
}
