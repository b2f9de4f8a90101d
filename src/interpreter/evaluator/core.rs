use std::{mem, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::{Block, Expr, Scope, Statement},
    config::Config,
    error::InterpreterError,
    interpreter::{
        evaluator::{
            environment::{Environment, Locals},
            function::builtin::BuiltinRegistry,
            stack::ensure_sufficient_stack,
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `InterpreterError` describing the failure.
pub type EvalResult<T> = Result<T, InterpreterError>;

/// How a block finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Every statement ran.
    Completed,
    /// A `vrati` ended the block with this value.
    Returned(Value),
}

impl Flow {
    /// The value a call or a program produces: the returned value, or `null`
    /// on fall-through.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Completed => Value::Null,
            Self::Returned(value) => value,
        }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global table, the local table
/// of the top level, the built-in registry and the configured limits.
///
/// ## Usage
///
/// `Context` is created once per program or interactive session and reused
/// for every submission, so top-level declarations stay visible to later
/// submissions. Independent contexts never share a global table.
pub struct Context {
    /// The global table shared by every call.
    pub environment:     Environment,
    /// Local table of the top level, kept between runs.
    top_level:           Locals,
    /// Built-ins consulted before user functions.
    pub(crate) builtins: BuiltinRegistry,
    pub(crate) config:   Config,
    /// Number of user-defined calls currently executing.
    pub(crate) depth:    usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context with empty tables, the default
    /// built-ins and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new evaluation context with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { environment: Environment::new(),
               top_level: Locals::new(),
               builtins: BuiltinRegistry::default(),
               config,
               depth: 0 }
    }

    /// Runs a parsed program against the global table and the top-level local
    /// table.
    ///
    /// # Returns
    /// The value of a top-level `vrati`, or `null` if the program ran to its
    /// end.
    ///
    /// # Errors
    /// Returns the first `InterpreterError` raised. Bindings made before the
    /// failure remain.
    ///
    /// # Example
    /// ```
    /// use spl::{interpreter::{evaluator::core::Context, value::core::Value}, parse_source};
    ///
    /// let mut context = Context::new();
    /// let block = parse_source("broj x = 2\nbroj y = 3\nvrati x + y").unwrap();
    ///
    /// assert_eq!(context.run(&block).unwrap(), Value::Number(5.0));
    /// ```
    pub fn run(&mut self, block: &Block) -> EvalResult<Value> {
        let mut locals = mem::take(&mut self.top_level);
        let result = self.run_in(block, &mut locals);
        self.top_level = locals;
        result
    }

    /// Runs a parsed program against the given local table.
    ///
    /// # Errors
    /// Returns the first `InterpreterError` raised.
    pub fn run_in(&mut self, block: &Block, locals: &mut Locals) -> EvalResult<Value> {
        debug!(statements = block.len(), "running block");
        Ok(self.run_block(block, locals)?.into_value())
    }

    /// Executes the statements of `block` in order until one returns.
    pub(crate) fn run_block(&mut self, block: &[Statement], locals: &mut Locals) -> EvalResult<Flow> {
        for statement in block {
            if let Flow::Returned(value) = self.exec_statement(statement, locals)? {
                return Ok(Flow::Returned(value));
            }
        }
        Ok(Flow::Completed)
    }

    /// Executes a single statement.
    ///
    /// Declarations and function definitions bind names, conditionals and
    /// loops run their blocks against the same local table, and `vrati` ends
    /// the enclosing block with its value.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `locals`: The local table of the running call or of the top level.
    ///
    /// # Returns
    /// `Flow::Returned` when the statement (or a branch it ran) returned.
    pub fn exec_statement(&mut self, statement: &Statement, locals: &mut Locals) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.eval(expr, locals)?;
                Ok(Flow::Completed)
            },
            Statement::Declaration { name,
                                     scope,
                                     ty,
                                     value,
                                     line, } => {
                let value = match value {
                    Some(expr) => self.eval(expr, locals)?,
                    None => ty.zero_value(),
                };

                if !ty.admits(&value) {
                    return Err(InterpreterError::TypeMismatch { name:     name.clone(),
                                                                expected: ty.name().to_string(),
                                                                found:    value.kind().to_string(),
                                                                line:     *line, });
                }

                trace!(name = name.as_str(), %scope, "declared");
                match scope {
                    Scope::Global => self.environment.set(name.as_str(), value),
                    Scope::Local => {
                        locals.insert(name.clone(), value);
                    },
                }
                Ok(Flow::Completed)
            },
            Statement::If { condition,
                            then_block,
                            else_block,
                            line, } => {
                if self.eval(condition, locals)?.is_truthy(*line)? {
                    self.run_block(then_block, locals)
                } else if let Some(else_block) = else_block {
                    self.run_block(else_block, locals)
                } else {
                    Ok(Flow::Completed)
                }
            },
            Statement::While { condition, body, line } => {
                while self.eval(condition, locals)?.is_truthy(*line)? {
                    match self.run_block(body, locals)? {
                        Flow::Completed => {},
                        // A return only ends the current pass through the body.
                        Flow::Returned(value) => trace!(%value, line, "loop body returned"),
                    }
                }
                Ok(Flow::Completed)
            },
            Statement::Function(def) => {
                debug!(name = def.name.as_str(), params = def.params.len(), "defined function");
                self.environment.set(def.name.as_str(), Value::Function(Rc::clone(def)));
                Ok(Flow::Completed)
            },
            Statement::Return { value, .. } => Ok(Flow::Returned(self.eval(value, locals)?)),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, unary and binary operations and function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `locals`: The local table `$` names resolve against.
    pub fn eval(&mut self, expr: &Expr, locals: &Locals) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_inner(expr, locals))
    }

    fn eval_inner(&mut self, expr: &Expr, locals: &Locals) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, scope, .. } => Ok(self.read_variable(name, *scope, locals)),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line, locals),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line, locals),
            Expr::FunctionCall { name,
                                 scope,
                                 arguments,
                                 line, } => {
                self.eval_function_call(name, *scope, arguments, *line, locals)
            },
        }
    }
}
