use std::fmt;

use crate::expression::CanonicalKey;
use crate::solver::constants::EPSILON;
use crate::solver::shapes::{Candidate, Shape};

/// An accepted formula and the value it evaluates to
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    formula: String,
    value: f64,
    shape: Shape,
    key: CanonicalKey,
}

impl Solution {
    /// Render and fingerprint a candidate, consuming its tree.
    pub fn from_candidate(candidate: Candidate) -> Self {
        let Candidate { shape, expression } = candidate;
        Self {
            formula: expression.to_string(),
            value: expression.value(),
            shape,
            key: expression.canonical_key(),
        }
    }

    /// The formula in the operand order and grouping that produced it.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.formula, display_value(self.value))
    }
}

/// Values within epsilon of a whole number print as that number.
pub fn display_value(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() < EPSILON {
        rounded
    } else {
        value
    }
}
