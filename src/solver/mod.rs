mod collector;
pub mod constants;
mod engine;
mod errors;
mod registry;
mod shapes;
mod solution;

pub use collector::SolutionCollector;
pub use engine::{Solver, SolverConfig};
pub use errors::SolverError;
pub use registry::DeduplicationRegistry;
pub use shapes::{Candidate, Shape, find_candidates, is_on_target};
pub use solution::Solution;
