use std::{fmt, rc::Rc};

/// Sigil that marks an identifier as referring to the local table.
pub const LOCAL_SIGIL: char = '$';

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: numbers, text, booleans and `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal. Every number is a 64-bit float.
    Number(f64),
    /// A text literal with its escaped quotes already resolved.
    Text(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `null` literal.
    Null,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Which table an identifier resolves against.
///
/// The scope is fixed at parse time by the presence of the `$` sigil and is
/// never resolved dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The program-wide table shared by every call.
    Global,
    /// The table of the currently executing call.
    Local,
}

impl Scope {
    /// Splits a raw identifier spelling into its scope and bare name.
    ///
    /// # Example
    /// ```
    /// use spl::ast::Scope;
    ///
    /// assert_eq!(Scope::split("$x"), (Scope::Local, "x"));
    /// assert_eq!(Scope::split("x"), (Scope::Global, "x"));
    /// ```
    #[must_use]
    pub fn split(spelling: &str) -> (Self, &str) {
        spelling.strip_prefix(LOCAL_SIGIL)
                .map_or((Self::Global, spelling), |name| (Self::Local, name))
    }

    /// The sigil written in front of a name with this scope.
    #[must_use]
    pub const fn sigil(self) -> &'static str {
        match self {
            Self::Global => "",
            Self::Local => "$",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// The type named in a declaration or a parameter list.
///
/// `niska` and `niz` are two spellings of [`DeclaredType::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// `niska` / `niz`
    Text,
    /// `broj`
    Number,
    /// `bool`
    Boolean,
    /// `promenljiva`, accepts any value without checking.
    Any,
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, text, boolean or null).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable without its sigil.
        name:  String,
        /// Table the name is looked up in.
        scope: Scope,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation: arithmetic, comparison or logical.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `napisi(x)` or `$f(1)`).
    FunctionCall {
        /// Name of the function being called, without its sigil.
        name:      String,
        /// Table the callee is resolved in.
        scope:     Scope,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use spl::ast::{Expr, Scope};
    ///
    /// let expr = Expr::Variable { name:  "x".to_string(),
    ///                             scope: Scope::Global,
    ///                             line:  5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// A single declared parameter of a user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Name the argument is bound to in the callee's local table.
    pub name: String,
    /// Type the argument is checked against.
    pub ty:   DeclaredType,
}

/// Represents a user-defined function definition.
///
/// Definitions are immutable once parsed and are shared by reference between
/// the AST and the global table.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameters in positional order.
    pub params: Vec<Parameter>,
    /// The statements executed when the function is called.
    pub body:   Block,
    /// Line number in the source code.
    pub line:   usize,
}

/// An ordered sequence of statements. Order is execution order.
pub type Block = Vec<Statement>;

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its effect.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A typed declaration such as `broj x = 5` or `niska $ime`.
    Declaration {
        /// The name of the variable without its sigil.
        name:  String,
        /// Table the variable is bound in.
        scope: Scope,
        /// The declared type the value is checked against.
        ty:    DeclaredType,
        /// The initializer; `None` means the type's zero value.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `ako <cond> { ... } inace { ... }`
    If {
        /// The condition expression.
        condition:  Expr,
        /// Statements run when the condition is truthy.
        then_block: Block,
        /// Statements run otherwise, if present.
        else_block: Option<Block>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `dok <cond> { ... }`
    While {
        /// The loop condition, evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// A user-defined function declaration.
    Function(Rc<FunctionDef>),
    /// `vrati <expr>`
    Return {
        /// The returned expression. A bare `vrati` carries the text `"null"`.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Declaration { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Return { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and the two logical
/// connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or text concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Any comparison (`==`, `!=`, `<`, `<=`, `>`, `>=`)
    Compare(CompareOperator),
    /// Logical and (`and`)
    And,
    /// Logical or (`ili`)
    Or,
}

/// The six comparison operators, lexed as one token class.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompareOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Compare(op) => write!(f, "{op}"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "ili"),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, scope, .. } => write!(f, "{}{name}", scope.sigil()),
            Self::UnaryOp { op, expr, .. } => write!(f, "{op}{expr}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name,
                                 scope,
                                 arguments,
                                 .. } => {
                write!(f, "{}{name}(", scope.sigil())?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Writes `block` one statement per line, each prefixed by `depth` levels of
/// indentation.
fn write_block(f: &mut fmt::Formatter<'_>, block: &[Statement], depth: usize) -> fmt::Result {
    for statement in block {
        write_statement(f, statement, depth)?;
    }
    Ok(())
}

fn write_braced(f: &mut fmt::Formatter<'_>, block: &[Statement], depth: usize) -> fmt::Result {
    writeln!(f, "{{")?;
    write_block(f, block, depth + 1)?;
    write!(f, "{}}}", "    ".repeat(depth))
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    write!(f, "{}", "    ".repeat(depth))?;
    match statement {
        Statement::Expression { expr, .. } => write!(f, "{expr}")?,
        Statement::Declaration { name,
                                 scope,
                                 ty,
                                 value,
                                 .. } => {
            write!(f, "{ty} {}{name}", scope.sigil())?;
            if let Some(value) = value {
                write!(f, " = {value}")?;
            }
        },
        Statement::If { condition,
                        then_block,
                        else_block,
                        .. } => {
            write!(f, "ako {condition} ")?;
            write_braced(f, then_block, depth)?;
            if let Some(else_block) = else_block {
                write!(f, " inace ")?;
                write_braced(f, else_block, depth)?;
            }
        },
        Statement::While { condition, body, .. } => {
            write!(f, "dok {condition} ")?;
            write_braced(f, body, depth)?;
        },
        Statement::Function(def) => {
            write!(f, "funkcija {}(", def.name)?;
            for (index, param) in def.params.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} {}", param.ty, param.name)?;
            }
            write!(f, ") ")?;
            write_braced(f, &def.body, depth)?;
        },
        Statement::Return { value, .. } => write!(f, "vrati {value}")?,
    }
    writeln!(f)
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

/// Borrowed view of a whole block that prints as re-parseable source.
///
/// # Example
/// ```
/// use spl::{ast::Program, parse_source};
///
/// let block = parse_source("broj x = 1 + 2 * 3").unwrap();
/// assert_eq!(Program(&block).to_string(), "broj x = (1 + (2 * 3))\n");
/// ```
pub struct Program<'a>(pub &'a [Statement]);

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, self.0, 0)
    }
}
