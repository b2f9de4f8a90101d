use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    error::InterpreterError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{convert, exit, io, print, random},
        },
        value::core::Value,
    },
};

/// A host callable installed as a built-in.
///
/// A builtin receives a slice of evaluated argument values and the line number
/// of the call. It returns the call's value; built-ins with nothing to return
/// produce `null`.
pub type BuiltinFn = Rc<dyn Fn(&[Value], usize) -> EvalResult<Value>>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any count from the first bound to the second, inclusive.
    Range(usize, usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub const fn accepts(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Range(min, max) => min <= n && n <= max,
            Self::Variadic => true,
        }
    }

    /// Fails with `ArgumentCountMismatch` unless `found` arguments satisfy this
    /// arity.
    ///
    /// # Example
    /// ```
    /// use spl::interpreter::evaluator::function::builtin::Arity;
    ///
    /// assert!(Arity::Range(0, 1).check("unos", 1, 1).is_ok());
    /// assert!(Arity::Exact(2).check("pretvori", 1, 1).is_err());
    /// ```
    pub fn check(self, name: &str, found: usize, line: usize) -> EvalResult<()> {
        if self.accepts(found) {
            return Ok(());
        }
        Err(InterpreterError::ArgumentCountMismatch { name: name.to_string(),
                                                      expected: self.to_string(),
                                                      found,
                                                      line })
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range(min, max) => write!(f, "{min} to {max}"),
            Self::Variadic => write!(f, "any number of"),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table the registry is seeded from),
/// - `BUILTIN_FUNCTIONS` (public list of default builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  fn(&[Value], usize) -> EvalResult<Value>,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "napisi"    => { arity: Arity::Variadic,    func: print::napisi },
    "unos"      => { arity: Arity::Range(0, 1), func: io::unos },
    "tip"       => { arity: Arity::Exact(1),    func: convert::tip },
    "izadji"    => { arity: Arity::Range(0, 1), func: exit::izadji },
    "pretvori"  => { arity: Arity::Exact(2),    func: convert::pretvori },
    "nasumican" => { arity: Arity::Exact(2),    func: random::nasumican },
    "duzina"    => { arity: Arity::Exact(1),    func: convert::duzina },
}

/// A registered built-in: its accepted arity and the callable itself.
#[derive(Clone)]
pub struct Builtin {
    /// Argument counts the call site must satisfy.
    pub arity: Arity,
    /// Receives the evaluated arguments and the call's line.
    pub func:  BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("arity", &self.arity).finish_non_exhaustive()
    }
}

/// The name to callable table consulted before user bindings.
///
/// Lookup is by exact name. The default registry holds the entries of
/// [`BUILTIN_FUNCTIONS`].
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    table: HashMap<String, Builtin>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        let table = BUILTIN_TABLE.iter()
                                 .map(|def| {
                                     let func: BuiltinFn = Rc::new(def.func);
                                     (def.name.to_string(),
                                      Builtin { arity: def.arity,
                                                func })
                                 })
                                 .collect();
        Self { table }
    }
}

impl BuiltinRegistry {
    /// Looks a built-in up by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.table.get(name)
    }

    /// Installs `func` under `name`, replacing any built-in with that name.
    pub fn register(&mut self, name: impl Into<String>, arity: Arity, func: BuiltinFn) {
        self.table.insert(name.into(), Builtin { arity, func });
    }

    /// Tells whether a built-in named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }
}

impl Context {
    /// Installs a host callable as a built-in accepting any number of
    /// arguments.
    ///
    /// The evaluator is not touched: the next call with this name dispatches
    /// to `func`. A built-in shadows any user function with the same name.
    ///
    /// # Example
    /// ```
    /// use spl::{interpreter::{evaluator::core::Context, value::core::Value}, parse_source};
    ///
    /// let mut ctx = Context::new();
    /// ctx.register_builtin("dvaput", |args, _line| {
    ///        Ok(Value::Number(args.len() as f64 * 2.0))
    ///    });
    ///
    /// let block = parse_source("vrati dvaput(1, 2, 3)").unwrap();
    /// assert_eq!(ctx.run(&block).unwrap(), Value::Number(6.0));
    /// ```
    pub fn register_builtin(&mut self,
                            name: impl Into<String>,
                            func: impl Fn(&[Value], usize) -> EvalResult<Value> + 'static) {
        self.register_builtin_with_arity(name, Arity::Variadic, func);
    }

    /// Installs a host callable as a built-in with a checked arity.
    pub fn register_builtin_with_arity(&mut self,
                                       name: impl Into<String>,
                                       arity: Arity,
                                       func: impl Fn(&[Value], usize) -> EvalResult<Value>
                                           + 'static) {
        self.builtins.register(name, arity, Rc::new(func));
    }
}
