use log::{debug, trace};

use crate::solver::registry::DeduplicationRegistry;
use crate::solver::solution::Solution;

/// Accumulates solutions in discovery order, one per canonical key.
#[derive(Debug, Default)]
pub struct SolutionCollector {
    registry: DeduplicationRegistry,
    solutions: Vec<Solution>,
}

impl SolutionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `solution` unless an equivalent one was already accepted.
    /// Returns whether it was appended.
    pub fn offer(&mut self, solution: Solution) -> bool {
        if self.registry.test_and_set(solution.key()) {
            trace!(
                "Suppressed duplicate {} (key {})",
                solution.formula(),
                solution.key()
            );
            return false;
        }

        debug!(
            "Accepted #{}: {} via shape {}",
            self.solutions.len() + 1,
            solution.formula(),
            solution.shape().index()
        );
        self.solutions.push(solution);
        true
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}
