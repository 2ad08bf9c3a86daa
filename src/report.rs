//! Human-readable rendering of a search result

use std::fmt;

use crate::solver::Solution;

pub const SEPARATOR: &str = "===============================";

/// The operands searched and the solutions found, numbered from 1.
pub struct Report<'a> {
    operands: [f64; 4],
    solutions: &'a [Solution],
}

impl<'a> Report<'a> {
    pub fn new(operands: [f64; 4], solutions: &'a [Solution]) -> Self {
        Self {
            operands,
            solutions,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.operands;
        writeln!(f, "Searching for solutions with: {}, {}, {}, {}", a, b, c, d)?;
        writeln!(f, "{}", SEPARATOR)?;

        if self.solutions.is_empty() {
            return writeln!(f, "No solutions found for these numbers.");
        }

        writeln!(f, "Found {} unique solution(s):", self.solutions.len())?;
        writeln!(f)?;
        for (i, solution) in self.solutions.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, solution)?;
        }
        Ok(())
    }
}
