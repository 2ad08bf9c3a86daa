use log::info;
use rayon::prelude::*;

use crate::expression::Operator;
use crate::solver::collector::SolutionCollector;
use crate::solver::constants::TARGET;
use crate::solver::shapes::find_candidates;
use crate::solver::solution::Solution;
use crate::utils::{generate_operator_combinations, generate_permutations};

/// Configuration for a search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub target: f64,
    /// Shard orderings across the rayon pool. Result order is unaffected.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: TARGET,
            parallel: true,
        }
    }
}

/// Finds every distinct formula over four operands that hits the target
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search every ordering, operator triple and shape, keeping the first
    /// formula found for each canonical key.
    ///
    /// Operands are expected to be whole numbers from 1 to 9; they are not
    /// checked here (see [`crate::solve`] for the validating entry point).
    /// Results are ordered by ordering, then operator triple, then shape,
    /// whether or not the search runs in parallel. An empty list means the
    /// target cannot be reached.
    pub fn solve(&self, operands: [f64; 4]) -> Vec<Solution> {
        info!(
            "Searching for {} using {:?} ({})",
            self.config.target,
            operands,
            if self.config.parallel { "parallel" } else { "sequential" }
        );

        let orderings = generate_permutations(operands);
        let combinations = generate_operator_combinations();

        let batches: Vec<Vec<Solution>> = if self.config.parallel {
            orderings
                .par_iter()
                .map(|&ordering| self.solutions_for_ordering(ordering, &combinations))
                .collect()
        } else {
            orderings
                .iter()
                .map(|&ordering| self.solutions_for_ordering(ordering, &combinations))
                .collect()
        };

        let mut collector = SolutionCollector::new();
        for solution in batches.into_iter().flatten() {
            collector.offer(solution);
        }

        info!("Found {} unique solution(s)", collector.len());
        collector.into_solutions()
    }

    /// Candidates for one ordering, rendered and keyed, duplicates included.
    fn solutions_for_ordering(
        &self,
        ordering: [f64; 4],
        combinations: &[[Operator; 3]],
    ) -> Vec<Solution> {
        combinations
            .iter()
            .flat_map(|&ops| find_candidates(ordering, ops, self.config.target))
            .map(Solution::from_candidate)
            .collect()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
