//! # Built-in Registry
//!
//! The closed set of functions and constants an expression may use.
//! Names are matched case-insensitively; arity is fixed per function and
//! checked by the parser, so `sin(1, 2)` never reaches evaluation.
//!
//! | Arity | Functions |
//! |-------|-----------|
//! | 1 | sin cos tan asin acos atan sqrt abs exp ln floor ceil frac |
//! | 2 | pow log min max mod |
//!
//! Constants: `pi`, `e`, `tau`.

use serde::{Deserialize, Serialize};
use std::f64::consts;
use std::fmt;

// =============================================================================
// FUNCTIONS
// =============================================================================

/// A built-in function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Abs,
    Exp,
    /// Natural logarithm.
    Ln,
    Floor,
    Ceil,
    /// Fractional part, `a - floor(a)`.
    Frac,
    Pow,
    /// Logarithm of the first argument in the base of the second.
    Log,
    Min,
    Max,
    /// Floor-mod; the result takes the sign of the divisor.
    Mod,
}

/// Name table, in registry order.
pub const FUNCTIONS: &[(&str, Function)] = &[
    ("sin", Function::Sin),
    ("cos", Function::Cos),
    ("tan", Function::Tan),
    ("asin", Function::Asin),
    ("acos", Function::Acos),
    ("atan", Function::Atan),
    ("sqrt", Function::Sqrt),
    ("abs", Function::Abs),
    ("exp", Function::Exp),
    ("ln", Function::Ln),
    ("floor", Function::Floor),
    ("ceil", Function::Ceil),
    ("frac", Function::Frac),
    ("pow", Function::Pow),
    ("log", Function::Log),
    ("min", Function::Min),
    ("max", Function::Max),
    ("mod", Function::Mod),
];

impl Function {
    /// Look up a function by name, ignoring case.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use paramexpr_parser::Function;
    ///
    /// assert_eq!(Function::from_name("COS"), Some(Function::Cos));
    /// assert_eq!(Function::from_name("foo"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, f)| *f)
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Frac => "frac",
            Self::Pow => "pow",
            Self::Log => "log",
            Self::Min => "min",
            Self::Max => "max",
            Self::Mod => "mod",
        }
    }

    /// Number of arguments the function takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Pow | Self::Log | Self::Min | Self::Max | Self::Mod => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// CONSTANTS
// =============================================================================

/// A named constant, always available regardless of variable bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
    Tau,
}

/// Constant table.
pub const CONSTANTS: &[(&str, Constant)] = &[
    ("pi", Constant::Pi),
    ("e", Constant::E),
    ("tau", Constant::Tau),
];

impl Constant {
    /// Look up a constant by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        CONSTANTS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// Numeric value.
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => consts::PI,
            Self::E => consts::E,
            Self::Tau => consts::TAU,
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
            Self::Tau => "tau",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
