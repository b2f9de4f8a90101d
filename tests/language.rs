use std::{cell::Cell, fs, rc::Rc};

use pretty_assertions::assert_eq;
use spl::{
    ast::Scope,
    config::Config,
    error::{Error, InterpreterError},
    interpreter::{
        evaluator::{core::Context, function::builtin::Arity},
        value::core::Value,
    },
    run_script, run_source,
};
use walkdir::WalkDir;

fn run(src: &str) -> Value {
    run_script(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_success(src: &str) {
    if let Err(e) = run_script(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_script(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn runtime_error(src: &str) -> InterpreterError {
    match run_script(src) {
        Err(Error::Interpreter(e)) => e,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

/// A context with a `provera` built-in that fails unless its argument is
/// truthy.
fn checking_context() -> Context {
    let mut context = Context::new();
    context.register_builtin_with_arity("provera", Arity::Exact(1), |args, line| {
               if args[0].is_truthy(line)? {
                   Ok(Value::Null)
               } else {
                   Err(InterpreterError::InvalidArgument { details: "check failed".to_string(),
                                                           line })
               }
           });
    context
}

#[test]
fn script_corpus_passes() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "spl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut context = checking_context();
        if let Err(e) = run_source(&mut context, &source) {
            panic!("Script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn declarations_and_arithmetic() {
    assert_eq!(run("broj x = 2\nbroj y = 3\nvrati x + y"), Value::Number(5.0));
    assert_eq!(run("niska a = \"hi\"\nniska b = \"!\"\nvrati a + b"), Value::from("hi!"));
    assert_eq!(run("vrati 10 - 4 - 3"), Value::Number(3.0));
    assert_eq!(run("vrati 7 / 2"), Value::Number(3.5));
    assert_eq!(run("vrati -2 * 3"), Value::Number(-6.0));
    assert_eq!(run("vrati --2"), Value::Number(2.0));
}

#[test]
fn operator_precedence() {
    assert_eq!(run("vrati 2 + 3 * 4"), Value::Number(14.0));
    assert_eq!(run("vrati (2 + 3) * 4"), Value::Number(20.0));
    assert_eq!(run("vrati 1 + 1 == 2"), Value::Bool(true));
    assert_eq!(run("vrati 1 < 2 and 2 < 3"), Value::Bool(true));
    // `and` and `ili` share one level and associate to the left.
    assert_eq!(run("vrati true ili false and false"), Value::Bool(false));
}

#[test]
fn program_without_return_yields_null() {
    assert_eq!(run("broj x = 1"), Value::Null);
    assert_eq!(run(""), Value::Null);
}

#[test]
fn zero_values() {
    assert_eq!(run("niska s\nvrati s"), Value::from(""));
    assert_eq!(run("niz s\nvrati s"), Value::from(""));
    assert_eq!(run("broj n\nvrati n"), Value::Number(0.0));
    assert_eq!(run("bool b\nvrati b"), Value::Bool(false));
    assert_eq!(run("promenljiva p\nvrati tip(p)"), Value::from("promenljiva"));
    assert_eq!(runtime_error("promenljiva p\nvrati p + 1"),
               InterpreterError::UninitializedValue { line: 2 });
    assert_eq!(runtime_error("promenljiva p\nako p { }"),
               InterpreterError::UninitializedValue { line: 2 });
}

#[test]
fn declaration_type_mismatch_leaves_name_unbound() {
    let mut context = Context::new();

    let err = run_source(&mut context, "broj x = \"a\"").unwrap_err();
    assert!(matches!(err,
                     Error::Interpreter(InterpreterError::TypeMismatch { ref name, line: 1, .. })
                     if name == "x"));

    assert_eq!(run_source(&mut context, "vrati x").unwrap(), Value::Null);
    assert_success("promenljiva x = \"a\"\nbroj y = 1\nbool z = 1 < 2");
    assert_failure("bool z = 1");
    assert_failure("niska s = null");
}

#[test]
fn bindings_before_an_error_remain() {
    let mut context = Context::new();

    assert!(run_source(&mut context, "broj a = 1\nbroj b = 1 / 0\nbroj c = 3").is_err());
    assert_eq!(run_source(&mut context, "vrati a").unwrap(), Value::Number(1.0));
    assert_eq!(run_source(&mut context, "vrati c").unwrap(), Value::Null);
}

#[test]
fn session_keeps_top_level_bindings() {
    let mut context = Context::new();

    run_source(&mut context, "broj g = 1\nbroj $l = 2").unwrap();
    run_source(&mut context, "funkcija f() { vrati 3 }").unwrap();

    assert_eq!(run_source(&mut context, "vrati g + $l + f()").unwrap(),
               Value::Number(6.0));
}

#[test]
fn contexts_do_not_share_globals() {
    let mut first = Context::new();
    let mut second = Context::new();

    run_source(&mut first, "broj x = 1").unwrap();
    assert_eq!(run_source(&mut second, "vrati x").unwrap(), Value::Null);
}

#[test]
fn null_comparisons() {
    assert_eq!(run("vrati null == null"), Value::Bool(true));
    assert_eq!(run("vrati null != 5"), Value::Bool(true));
    assert_eq!(run("vrati 5 != null"), Value::Bool(true));
    assert_eq!(run("vrati 5 == \"5\""), Value::Bool(false));
    assert_eq!(run("vrati nepoznato == null"), Value::Bool(true));
}

#[test]
fn ordering_requires_matching_tags() {
    assert_eq!(run("vrati \"a\" < \"b\""), Value::Bool(true));
    assert_eq!(run("vrati false < true"), Value::Bool(true));
    assert_eq!(run("vrati 2 >= 2"), Value::Bool(true));

    assert_eq!(runtime_error("vrati \"a\" < 1"),
               InterpreterError::UnsupportedOperands { op:    "<".to_string(),
                                                       left:  "text".to_string(),
                                                       right: "number".to_string(),
                                                       line:  1, });
    assert_failure("vrati null < 1");
}

#[test]
fn unsupported_operands_are_errors() {
    assert_eq!(runtime_error("vrati 1 + \"a\""),
               InterpreterError::UnsupportedOperands { op:    "+".to_string(),
                                                       left:  "number".to_string(),
                                                       right: "text".to_string(),
                                                       line:  1, });
    assert_failure("vrati \"a\" - \"b\"");
    assert_failure("vrati true * 2");
    assert_eq!(runtime_error("\n\nvrati 1 / 0"),
               InterpreterError::DivisionByZero { line: 3 });
    assert!(matches!(runtime_error("vrati -\"a\""),
                     InterpreterError::UnsupportedOperand { line: 1, .. }));
}

#[test]
fn logical_operators_short_circuit() {
    let calls = Rc::new(Cell::new(0));
    let mut context = Context::new();
    let counter = Rc::clone(&calls);
    context.register_builtin("f", move |_, _| {
               counter.set(counter.get() + 1);
               Ok(Value::Bool(true))
           });

    assert_eq!(run_source(&mut context, "vrati false and f()").unwrap(), Value::Bool(false));
    assert_eq!(run_source(&mut context, "vrati true ili f()").unwrap(), Value::Bool(true));
    assert_eq!(calls.get(), 0);

    assert_eq!(run_source(&mut context, "vrati true and f()").unwrap(), Value::Bool(true));
    assert_eq!(run_source(&mut context, "vrati false ili f()").unwrap(), Value::Bool(true));
    assert_eq!(calls.get(), 2);

    // The result is always a boolean.
    assert_eq!(run_source(&mut context, "vrati 1 and \"x\"").unwrap(), Value::Bool(true));
}

#[test]
fn functions_bind_parameters_locally() {
    assert_eq!(run("funkcija dodaj(broj x, broj y) { vrati $x + $y }\nvrati dodaj(2, 3)"),
               Value::Number(5.0));
    assert_eq!(run("funkcija f() { }\nvrati f()"), Value::Null);
    assert_eq!(run("funkcija f() { vrati }\nvrati f()"), Value::from("null"));
}

#[test]
fn extra_arguments_and_fargs() {
    assert_eq!(run("funkcija f(broj a) { vrati duzina($fargs) }\nvrati f(1, 2, 3)"),
               Value::Number(3.0));
    assert_eq!(run("funkcija f() { vrati duzina($fargs) }\nvrati f()"), Value::Number(0.0));
    assert_eq!(run("funkcija g(broj a) { vrati $arg2 }\nvrati g(1, \"x\", \"y\")"),
               Value::from("y"));
    assert_eq!(run("funkcija g(broj a) { vrati $fargs }\nvrati g(1, \"x\")"),
               Value::from(vec![Value::Number(1.0), Value::from("x")]));
    // A parameter without an argument stays unbound.
    assert_eq!(run("funkcija h(broj a, broj b) { vrati $b }\nvrati h(1)"), Value::Null);
    // Without the sigil the name is looked up in the global table.
    assert_eq!(run("funkcija k() { vrati fargs }\nvrati k(1)"), Value::Null);
}

#[test]
fn parameter_type_mismatch_fails_before_the_body() {
    let src = "funkcija dodaj(broj x, broj y) { broj pokrenuto = 1\nvrati $x + $y }";
    let mut context = Context::new();
    run_source(&mut context, src).unwrap();

    let err = run_source(&mut context, "dodaj(true, 2)").unwrap_err();
    assert!(matches!(err,
                     Error::Interpreter(InterpreterError::ArgumentTypeMismatch {
                         ref function,
                         ref parameter,
                         ref expected,
                         ref given,
                         line: 1,
                     }) if function == "dodaj"
                           && parameter == "x"
                           && expected == "broj"
                           && given == "true"));
    assert_eq!(run_source(&mut context, "vrati pokrenuto").unwrap(), Value::Null);

    assert_eq!(run("funkcija id(promenljiva v) { vrati $v }\nvrati id(null)"), Value::Null);
}

#[test]
fn return_inside_if_ends_the_call() {
    let src = "funkcija f() {
    ako true {
        vrati 1
    }
    vrati 2
}
vrati f()";
    assert_eq!(run(src), Value::Number(1.0));
}

#[test]
fn return_inside_while_only_ends_the_iteration() {
    let src = "funkcija f() {
    broj $i = 0
    dok $i < 3 {
        broj $i = $i + 1
        vrati 99
    }
    vrati $i
}
vrati f()";
    assert_eq!(run(src), Value::Number(3.0));
}

#[test]
fn return_propagates_through_nested_blocks() {
    let src = "funkcija f(broj n) {
    ako $n > 0 {
        ako $n > 5 { vrati \"veliko\" } inace { vrati \"malo\" }
    }
    vrati \"nula\"
}
vrati f(9) + f(1) + f(0)";
    assert_eq!(run(src), Value::from("velikomalonula"));
}

#[test]
fn else_if_chains() {
    let src = "funkcija znak(broj n) {
    ako $n < 0 {
        vrati \"-\"
    }
    inace ako $n == 0 {
        vrati \"0\"
    }
    inace {
        vrati \"+\"
    }
}
vrati znak(-3) + znak(0) + znak(8)";
    assert_eq!(run(src), Value::from("-0+"));
}

#[test]
fn scopes_are_separate_tables() {
    assert_eq!(run("broj x = 1\nfunkcija f() { broj $x = 2\nvrati x + $x }\nvrati f()"),
               Value::Number(3.0));
    // A callee never sees its caller's locals.
    assert_eq!(run("funkcija g() { vrati $y }
funkcija f() { broj $y = 5
vrati g() }
vrati f()"),
               Value::Null);
    // Globals declared inside a function are visible afterwards.
    assert_eq!(run("funkcija f() { broj z = 4 }\nf()\nvrati z"), Value::Number(4.0));
}

#[test]
fn local_calls_resolve_in_the_local_table() {
    let src = "funkcija h() { vrati 7 }
funkcija f() {
    promenljiva $g = h
    vrati $g()
}
vrati f()";
    assert_eq!(run(src), Value::Number(7.0));

    assert_eq!(runtime_error("funkcija h() { vrati 7 }\nfunkcija f() { vrati $h() }\nvrati f()"),
               InterpreterError::UndefinedFunction { name:  "h".to_string(),
                                                     scope: Scope::Local,
                                                     line:  2, });
}

#[test]
fn undefined_and_non_callable_names() {
    let err = runtime_error("foo()");
    assert_eq!(err,
               InterpreterError::UndefinedFunction { name:  "foo".to_string(),
                                                     scope: Scope::Global,
                                                     line:  1, });
    let message = err.to_string();
    assert!(message.contains("foo") && message.contains("global"));

    assert_eq!(runtime_error("broj x = 1\nx()"),
               InterpreterError::NotCallable { name: "x".to_string(),
                                               line: 2, });
}

#[test]
fn builtins_win_over_user_functions() {
    assert_eq!(run("funkcija tip(broj x) { vrati 0 }\nvrati tip(1)"), Value::from("broj"));
}

#[test]
fn builtins_are_reachable_from_local_calls() {
    assert_eq!(run("funkcija f() { vrati $tip(1) }\nvrati f()"), Value::from("broj"));
    assert_eq!(run("vrati $duzina(\"abc\")"), Value::Number(3.0));
    assert_success("funkcija f() { $napisi(\"x\") }\nf()");
    assert_eq!(runtime_error("$tip()"),
               InterpreterError::ArgumentCountMismatch { name:     "tip".to_string(),
                                                         expected: "1".to_string(),
                                                         found:    0,
                                                         line:     1, });
}

#[test]
fn builtin_arity_is_checked() {
    assert_eq!(runtime_error("tip()"),
               InterpreterError::ArgumentCountMismatch { name:     "tip".to_string(),
                                                         expected: "1".to_string(),
                                                         found:    0,
                                                         line:     1, });
    assert_failure("pretvori(1)");
    assert_failure("nasumican(1, 2, 3)");
}

#[test]
fn builtin_conversions() {
    assert_eq!(run("vrati tip(\"a\") + tip(1) + tip(true) + tip(null)"),
               Value::from("niskabrojboolpromenljiva"));
    assert_eq!(run("vrati pretvori(\"3\", \"broj\") + 1"), Value::Number(4.0));
    assert_eq!(run("vrati pretvori(2, \"niz\")"), Value::from("2.0"));
    assert_eq!(run("vrati pretvori(\"x\", \"broj\")"), Value::Null);
    assert_eq!(run("vrati pretvori(0, \"bool\")"), Value::Bool(false));
    assert_eq!(run("vrati pretvori(1, \"lista\")"), Value::Null);
    assert_eq!(run("vrati duzina(\"abc\")"), Value::Number(3.0));
    assert_failure("duzina(1)");
}

#[test]
fn random_numbers_stay_in_range() {
    for _ in 0..50 {
        let Value::Number(n) = run("vrati nasumican(1, 3)") else {
            panic!("nasumican must return a number");
        };
        assert!((1.0..=3.0).contains(&n));
        assert_eq!(n.fract(), 0.0);
    }
    assert_eq!(run("vrati nasumican(4, 4)"), Value::Number(4.0));
    assert_failure("nasumican(3, 1)");
    assert_failure("nasumican(1.5, 3)");
    assert_failure("nasumican(\"1\", 3)");
}

#[test]
fn exit_stops_the_program() {
    let mut context = Context::new();
    let err = run_source(&mut context, "broj a = 1\nizadji(3)\nbroj b = 2").unwrap_err();

    assert_eq!(err.exit_code(), Some(3));
    assert_eq!(run_source(&mut context, "vrati b").unwrap(), Value::Null);
    assert_eq!(run_script("izadji()").unwrap_err().exit_code(), Some(0));
    assert_eq!(run_script("1 / 0").unwrap_err().exit_code(), None);
}

#[test]
fn recursion_within_the_limit() {
    let src = "funkcija zbir(broj n) {
    ako $n == 0 { vrati 0 }
    vrati $n + zbir($n - 1)
}
vrati zbir(500)";
    assert_eq!(run(src), Value::Number(125_250.0));
}

#[test]
fn runaway_recursion_exhausts_the_stack() {
    let mut context = Context::with_config(Config { max_call_depth: 50 });
    let err = run_source(&mut context, "funkcija r(broj n) { vrati r($n + 1) }\nr(0)").unwrap_err();

    assert!(matches!(err,
                     Error::Interpreter(InterpreterError::StackExhausted { depth: 50, line: 1 })));

    // The depth counter unwinds with the error.
    assert_eq!(run_source(&mut context, "funkcija k() { vrati 1 }\nvrati k()").unwrap(),
               Value::Number(1.0));
}

#[test]
fn long_runs_of_negation() {
    // Dropping the nested tree is still recursive, so give it room.
    std::thread::Builder::new().stack_size(64 * 1024 * 1024)
                               .spawn(|| {
                                   let src = format!("vrati {}1", "-".repeat(200_000));
                                   assert_eq!(run(&src), Value::Number(1.0));
                               })
                               .unwrap()
                               .join()
                               .unwrap();

    assert_eq!(run("vrati ---2"), Value::Number(-2.0));
}

#[test]
fn syntax_and_lex_errors_surface() {
    assert!(matches!(run_script("broj x = 1 @"), Err(Error::Lex(_))));
    assert!(matches!(run_script("broj x = "), Err(Error::Syntax(_))));
    assert!(matches!(run_script("ako x { "), Err(Error::Syntax(_))));
}

#[test]
fn comments_and_terminators() {
    let src = "// prvi red
broj a = 1; broj b = 2;;

// prazan red iznad
vrati a + b // kraj";
    assert_eq!(run(src), Value::Number(3.0));
}
