//! # Variable Bindings
//!
//! Name → value map supplied to each evaluation. Samplers bind one or two
//! parameters (`t`, `s`, or `u` and `v`), so the map is a short vector
//! scanned linearly and updated in place between samples.
//!
//! Names are case-insensitive, matching how the parser normalizes
//! identifiers.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_eval::Bindings;
//!
//! let mut bindings = Bindings::new().with("u", 0.5).with("v", 1.0);
//! bindings.set("u", 0.75);
//! assert_eq!(bindings.get("U"), Some(0.75));
//! assert_eq!(bindings.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// LOOKUP
// =============================================================================

/// Source of variable values for the evaluator.
///
/// Implemented for [`Bindings`], a single `(name, value)` pair and a
/// `HashMap<String, f64>`. Every implementation matches names ignoring
/// ASCII case.
pub trait Lookup {
    /// Value bound to `name`.
    fn lookup(&self, name: &str) -> Option<f64>;
}

impl Lookup for (&str, f64) {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.0.eq_ignore_ascii_case(name).then_some(self.1)
    }
}

impl Lookup for HashMap<String, f64> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied().or_else(|| {
            self.iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| *value)
        })
    }
}

// =============================================================================
// BINDINGS
// =============================================================================

/// Small ordered set of variable bindings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bindings {
    /// `(lowercase name, value)` pairs, in insertion order.
    entries: Vec<(String, f64)>,
}

impl Bindings {
    /// Create empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings with a single variable.
    pub fn single(name: &str, value: f64) -> Self {
        Self::new().with(name, value)
    }

    /// Builder form of [`Bindings::set`].
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Bind `name` to `value`, replacing an existing binding in place.
    pub fn set(&mut self, name: &str, value: f64) {
        match self
            .entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_ascii_lowercase(), value)),
        }
    }

    /// Value bound to `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }

    /// Check if `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a binding, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        let index = self
            .entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(self.entries.remove(index).1)
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

impl Lookup for Bindings {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name)
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (name, value) in iter {
            bindings.set(name, value);
        }
        bindings
    }
}

// =============================================================================
// TESTS
// =============================================================================
