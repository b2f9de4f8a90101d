use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{Expr, FunctionDef, Scope},
    error::InterpreterError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::{FARGS, Locals},
            stack::ensure_sufficient_stack,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a function call.
    ///
    /// The built-in registry is checked first, whatever the call's scope. If
    /// the name matches a builtin, the arguments are evaluated, the arity is
    /// verified and the builtin is executed. Otherwise the name is resolved in
    /// the table selected by `scope`, the arguments are evaluated left to
    /// right and the user-defined function is invoked.
    ///
    /// # Errors
    /// - `UndefinedFunction` if the name is bound nowhere it may be looked up.
    /// - `NotCallable` if the name is bound to something other than a
    ///   function.
    /// - Any error raised by the arguments or the callee.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     scope: Scope,
                                     arguments: &[Expr],
                                     line: usize,
                                     locals: &Locals)
                                     -> EvalResult<Value> {
        if let Some(builtin) = self.builtins.get(name).cloned() {
            let args = self.eval_arguments(arguments, locals)?;
            builtin.arity.check(name, args.len(), line)?;
            trace!(name, %scope, args = args.len(), "calling builtin");
            return (builtin.func)(&args, line);
        }

        let callee = match scope {
            Scope::Global => self.environment.get(name),
            Scope::Local => locals.get(name),
        };

        let def = match callee {
            Some(Value::Function(def)) => Rc::clone(def),
            Some(_) => {
                return Err(InterpreterError::NotCallable { name: name.to_string(),
                                                           line });
            },
            None => {
                return Err(InterpreterError::UndefinedFunction { name: name.to_string(),
                                                                 scope,
                                                                 line });
            },
        };

        let args = self.eval_arguments(arguments, locals)?;
        self.call_function(&def, args, line)
    }

    fn eval_arguments(&mut self, arguments: &[Expr], locals: &Locals) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|arg| self.eval(arg, locals)).collect()
    }

    /// Executes a user-defined function with already evaluated arguments.
    ///
    /// The callee gets a fresh local table holding:
    /// - `fargs`, the full argument list,
    /// - each declared parameter bound to its positional argument,
    /// - `arg{i}` for every argument beyond the declared parameters, where `i`
    ///   is the argument's absolute position.
    ///
    /// Parameters without a matching argument stay unbound. Every argument is
    /// checked against its parameter's declared type before the body runs.
    ///
    /// # Errors
    /// - `StackExhausted` if the call would exceed the configured depth.
    /// - `ArgumentTypeMismatch` if an argument fails its parameter's type.
    /// - Any error raised by the body.
    ///
    /// # Returns
    /// The value of the body's `vrati`, or `null` if the body ran to its end.
    pub fn call_function(&mut self,
                         def: &FunctionDef,
                         args: Vec<Value>,
                         line: usize)
                         -> EvalResult<Value> {
        if self.depth >= self.config.max_call_depth {
            return Err(InterpreterError::StackExhausted { depth: self.depth,
                                                          line });
        }

        let mut frame = Locals::new();
        frame.insert(FARGS.to_string(), Value::from(args.clone()));

        for (index, arg) in args.into_iter().enumerate() {
            let Some(param) = def.params.get(index) else {
                frame.insert(format!("arg{index}"), arg);
                continue;
            };

            if !param.ty.admits(&arg) {
                return Err(InterpreterError::ArgumentTypeMismatch { function:  def.name.clone(),
                                                                    parameter: param.name.clone(),
                                                                    expected:  param.ty.name().to_string(),
                                                                    given:     arg.to_string(),
                                                                    line });
            }
            frame.insert(param.name.clone(), arg);
        }

        debug!(name = def.name.as_str(), depth = self.depth + 1, "calling function");
        self.depth += 1;
        let flow = ensure_sufficient_stack(|| self.run_block(&def.body, &mut frame));
        self.depth -= 1;

        Ok(flow?.into_value())
    }
}
