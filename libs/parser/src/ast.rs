//! # Expression Tree
//!
//! The parsed form of an expression. A tree is built once per expression
//! string and is immutable afterwards; it can be evaluated any number of
//! times with different variable bindings and shared read-only across
//! threads.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_parser::{parse, Expr, BinaryOp};
//!
//! let expr = parse("2 * t").unwrap();
//! assert_eq!(
//!     expr,
//!     Expr::binary(BinaryOp::Mul, Expr::Number(2.0), Expr::variable("t")),
//! );
//! ```

use crate::functions::Function;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// OPERATORS
// =============================================================================

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x`, a no-op kept so the tree mirrors the text.
    Plus,
}

impl UnaryOp {
    /// Operator symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Plus => "+",
        }
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `^`, right-associative.
    Pow,
}

impl BinaryOp {
    /// Operator symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Binding strength used when printing; higher binds tighter.
    const fn strength(self) -> u8 {
        match self {
            Self::Add | Self::Sub => TERM,
            Self::Mul | Self::Div => FACTOR,
            Self::Pow => POWER,
        }
    }
}

// Printing strengths, lowest to highest.
const TERM: u8 = 1;
const FACTOR: u8 = 2;
const UNARY: u8 = 3;
const POWER: u8 = 4;
const ATOM: u8 = 5;

// =============================================================================
// EXPRESSION
// =============================================================================

/// An expression node. Each node owns its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Variable or constant reference, lowercase.
    Variable(String),
    /// Prefix operation.
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Infix operation.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Built-in function call; `args.len()` equals the function's arity.
    Call {
        function: Function,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Variable reference; the name is lowercased.
    pub fn variable(name: &str) -> Self {
        Self::Variable(name.to_ascii_lowercase())
    }

    /// Prefix operation node.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Infix operation node.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Function call node. Arity is not checked here; the parser checks it.
    pub fn call(function: Function, args: Vec<Expr>) -> Self {
        Self::Call { function, args }
    }

    /// Names referenced as variables, including constants, sorted and
    /// without duplicates.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use paramexpr_parser::parse;
    ///
    /// let expr = parse("sin(u) * v + u").unwrap();
    /// let names: Vec<&str> = expr.variables().into_iter().collect();
    /// assert_eq!(names, ["u", "v"]);
    /// ```
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Self::Number(_) => {}
            Self::Variable(name) => {
                names.insert(name.as_str());
            }
            Self::Unary { operand, .. } => operand.collect_variables(names),
            Self::Binary { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
            Self::Call { args, .. } => {
                for arg in args {
                    arg.collect_variables(names);
                }
            }
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number(_) | Self::Variable(_) => 1,
            Self::Unary { operand, .. } => 1 + operand.node_count(),
            Self::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Self::Call { args, .. } => 1 + args.iter().map(Expr::node_count).sum::<usize>(),
        }
    }

    fn strength(&self) -> u8 {
        match self {
            Self::Number(n) if n.is_sign_negative() => UNARY,
            Self::Number(_) | Self::Variable(_) | Self::Call { .. } => ATOM,
            Self::Unary { .. } => UNARY,
            Self::Binary { op, .. } => op.strength(),
        }
    }
}

// =============================================================================
// PRINTING
// =============================================================================

/// Prints the expression with only the parentheses the grammar needs, so
/// the output parses back to an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Variable(name) => f.write_str(name),
            Self::Unary { op, operand } => {
                f.write_str(op.symbol())?;
                write_operand(f, operand, operand.strength() < UNARY)
            }
            Self::Binary { op, left, right } => {
                let (left_parens, right_parens) = match op {
                    // base is a primary, exponent is a unary expression
                    BinaryOp::Pow => (left.strength() < ATOM, right.strength() < UNARY),
                    _ => (
                        left.strength() < op.strength(),
                        right.strength() <= op.strength(),
                    ),
                };
                write_operand(f, left, left_parens)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, right, right_parens)
            }
            Self::Call { function, args } => {
                write!(f, "{}(", function)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

// =============================================================================
// TESTS
// =============================================================================
