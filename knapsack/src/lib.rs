pub mod error;
pub mod problem;
pub mod solution;
pub mod exhaustive;
pub mod greedy;
pub mod generator;
pub mod benchmark;
pub mod report;
pub mod config;

pub use error::{ InvalidItemError, ProblemError, SolutionError, ConfigError };
pub use problem::{ Item, Problem, ProblemSolver };
pub use solution::Solution;
pub use exhaustive::ExhaustiveSolver;
pub use greedy::GreedySolver;

#[cfg(test)]
mod tests;
