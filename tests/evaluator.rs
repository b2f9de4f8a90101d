use std::rc::Rc;

use pretty_assertions::assert_eq;
use spl::{
    ast::{DeclaredType, FunctionDef, Scope, Statement},
    config::Config,
    error::InterpreterError,
    interpreter::{
        evaluator::{
            core::Context,
            environment::Locals,
            function::builtin::{Arity, BUILTIN_FUNCTIONS, BuiltinRegistry},
            utils::strict_eq,
        },
        value::{core::Value, types::type_name_of},
    },
    parse_source, run_source,
};

fn define(context: &mut Context, src: &str) -> Rc<FunctionDef> {
    let block = parse_source(src).unwrap();
    let Some(Statement::Function(def)) = block.into_iter().next() else {
        panic!("expected a function definition");
    };
    context.environment.set(def.name.as_str(), Value::Function(Rc::clone(&def)));
    def
}

#[test]
fn value_display() {
    assert_eq!(Value::Number(5.0).to_string(), "5.0");
    assert_eq!(Value::Number(0.5).to_string(), "0.5");
    assert_eq!(Value::Number(-3.0).to_string(), "-3.0");
    assert_eq!(Value::from("zdravo").to_string(), "zdravo");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Uninitialized.to_string(), "<uninitialized>");
    assert_eq!(Value::from(vec![Value::from(1.0), Value::from("a"), Value::Null]).to_string(),
               "[1.0, \"a\", null]");
}

#[test]
fn function_values_display_their_name() {
    let mut context = Context::new();
    let def = define(&mut context, "funkcija kvadrat(broj n) { vrati $n * $n }");

    assert_eq!(Value::Function(def).to_string(), "<function 'kvadrat'>");
}

#[test]
fn truthiness() {
    assert!(Value::from("a").is_truthy(1).unwrap());
    assert!(!Value::from("").is_truthy(1).unwrap());
    assert!(!Value::from(0.0).is_truthy(1).unwrap());
    assert!(Value::from(-1.0).is_truthy(1).unwrap());
    assert!(!Value::Bool(false).is_truthy(1).unwrap());
    assert!(Value::Null.is_truthy(1).unwrap());
    assert!(!Value::from(Vec::new()).is_truthy(1).unwrap());
    assert_eq!(Value::Uninitialized.is_truthy(4),
               Err(InterpreterError::UninitializedValue { line: 4 }));
}

#[test]
fn type_names_follow_the_declared_order() {
    assert_eq!(type_name_of(&Value::from("x")), "niska");
    assert_eq!(type_name_of(&Value::from(1.0)), "broj");
    assert_eq!(type_name_of(&Value::Bool(false)), "bool");
    assert_eq!(type_name_of(&Value::Null), "promenljiva");
    assert_eq!(type_name_of(&Value::Uninitialized), "promenljiva");
    assert_eq!(type_name_of(&Value::from(Vec::new())), "promenljiva");
}

#[test]
fn declared_types() {
    assert!(DeclaredType::Text.admits(&Value::from("")));
    assert!(!DeclaredType::Text.admits(&Value::Null));
    assert!(!DeclaredType::Number.admits(&Value::from("1")));
    assert!(DeclaredType::Any.admits(&Value::Uninitialized));
    assert_eq!(DeclaredType::from_name("bool"), Some(DeclaredType::Boolean));
    assert_eq!(DeclaredType::Text.to_string(), "niska");
}

#[test]
fn equality_is_strict() {
    assert!(strict_eq(&Value::from(1.0), &Value::from(1.0), 1).unwrap());
    assert!(!strict_eq(&Value::from(0.0), &Value::Bool(false), 1).unwrap());
    assert!(!strict_eq(&Value::from(""), &Value::Null, 1).unwrap());
    assert!(strict_eq(&Value::from(vec![Value::from(1.0)]), &Value::from(vec![Value::from(1.0)]), 1).unwrap());
    assert!(!strict_eq(&Value::from(f64::NAN), &Value::from(f64::NAN), 1).unwrap());
    assert!(strict_eq(&Value::Uninitialized, &Value::Null, 1).is_err());
}

#[test]
fn functions_equal_only_themselves() {
    let mut context = Context::new();
    let first = define(&mut context, "funkcija f() { }");
    let second = define(&mut context, "funkcija f() { }");

    let a = Value::Function(Rc::clone(&first));
    assert!(strict_eq(&a, &Value::Function(first), 1).unwrap());
    assert!(!strict_eq(&a, &Value::Function(second), 1).unwrap());
}

#[test]
fn call_function_directly() {
    let mut context = Context::new();
    let def = define(&mut context, "funkcija dodaj(broj a, broj b) { vrati $a + $b }");

    let result = context.call_function(&def, vec![Value::from(2.0), Value::from(3.0)], 1);
    assert_eq!(result, Ok(Value::Number(5.0)));

    let err = context.call_function(&def, vec![Value::from("2"), Value::from(3.0)], 7);
    assert_eq!(err,
               Err(InterpreterError::ArgumentTypeMismatch { function:  "dodaj".to_string(),
                                                            parameter: "a".to_string(),
                                                            expected:  "broj".to_string(),
                                                            given:     "2".to_string(),
                                                            line:      7, }));
}

#[test]
fn call_frame_contents() {
    let mut context = Context::new();
    context.register_builtin("okvir", |args, _| Ok(Value::from(args.to_vec())));
    let def = define(&mut context,
                     "funkcija f(promenljiva a) { vrati okvir($a, $arg1, $arg2, duzina($fargs)) }");

    let result = context.call_function(&def, vec![Value::from(1.0), Value::from("b"), Value::Null], 1)
                        .unwrap();

    assert_eq!(result,
               Value::from(vec![Value::from(1.0), Value::from("b"), Value::Null, Value::from(3.0)]));
}

#[test]
fn depth_limit_is_configurable() {
    let src = "funkcija dubina(broj n) {
    ako $n == 0 { vrati 0 }
    vrati 1 + dubina($n - 1)
}";

    let mut shallow = Context::with_config(Config { max_call_depth: 5 });
    run_source(&mut shallow, src).unwrap();
    assert_eq!(run_source(&mut shallow, "vrati dubina(4)").unwrap(), Value::Number(4.0));
    assert!(run_source(&mut shallow, "vrati dubina(5)").is_err());

    let mut deep = Context::new();
    run_source(&mut deep, src).unwrap();
    assert_eq!(run_source(&mut deep, "vrati dubina(900)").unwrap(), Value::Number(900.0));
}

#[test]
fn arity_rules() {
    assert!(Arity::Exact(2).accepts(2));
    assert!(!Arity::Exact(2).accepts(1));
    assert!(Arity::Range(0, 1).accepts(0));
    assert!(!Arity::Range(0, 1).accepts(2));
    assert!(Arity::Variadic.accepts(100));

    assert_eq!(Arity::Exact(2).check("pretvori", 1, 3),
               Err(InterpreterError::ArgumentCountMismatch { name:     "pretvori".to_string(),
                                                             expected: "2".to_string(),
                                                             found:    1,
                                                             line:     3, }));
}

#[test]
fn default_registry_holds_every_builtin() {
    let registry = BuiltinRegistry::default();

    for name in BUILTIN_FUNCTIONS {
        assert!(registry.contains(name), "missing built-in {name}");
    }
    assert!(!registry.contains("dodaj"));
}

#[test]
fn registered_builtin_replaces_a_default() {
    let mut context = Context::new();
    context.register_builtin_with_arity("tip", Arity::Exact(1), |_, _| Ok(Value::from("svejedno")));

    assert_eq!(run_source(&mut context, "vrati tip(1)").unwrap(), Value::from("svejedno"));
}

#[test]
fn builtin_errors_carry_the_call_line() {
    let mut context = Context::new();

    let err = run_source(&mut context, "\n\nnasumican(5, 1)").unwrap_err();
    assert!(err.to_string().starts_with("Error on line 3"));

    assert!(run_source(&mut context, "izadji(1.5)").unwrap_err().exit_code().is_none());
}

#[test]
fn run_in_uses_the_given_table() {
    let mut context = Context::new();
    let mut locals = Locals::new();
    let block = parse_source("broj $a = 1\nbroj b = 2").unwrap();

    context.run_in(&block, &mut locals).unwrap();

    assert_eq!(locals.get("a"), Some(&Value::Number(1.0)));
    assert!(!locals.contains_key("b"));
    assert!(context.environment.contains("b"));
    assert_eq!(context.read_variable("a", Scope::Local, &locals), Value::Number(1.0));
}

#[test]
fn zero_values_per_type() {
    assert_eq!(DeclaredType::Text.zero_value(), Value::from(""));
    assert_eq!(DeclaredType::Number.zero_value(), Value::Number(0.0));
    assert_eq!(DeclaredType::Boolean.zero_value(), Value::Bool(false));
    assert_eq!(DeclaredType::Any.zero_value(), Value::Uninitialized);
}
