use std::cmp::Ordering;

use itertools::Itertools;
use tracing::debug;

use crate::error::InvalidItemError;
use crate::problem::{ Item, Problem, ProblemSolver };
use crate::solution::Solution;

/// Density heuristic: take items by descending value/weight while they fit.
///
/// Accepted and rejected items are never reconsidered, so the result can be
/// worse than the optimum. Items of equal density keep their catalog order.
pub struct GreedySolver;

impl GreedySolver {
    pub fn new() -> Self {
        GreedySolver {}
    }

    /// Catalog copy ordered by descending density; the sort is stable.
    pub fn order(items: &[Item]) -> Vec<Item> {
        items.iter()
            .cloned()
            .sorted_by(|a, b| b.density().partial_cmp(&a.density()).unwrap_or(Ordering::Equal))
            .collect()
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        GreedySolver::new()
    }
}

impl ProblemSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, problem: &Problem) -> Result<Solution, InvalidItemError> {
        problem.validate()?;
        debug!(items = problem.len(), capacity = problem.capacity, "greedy fill started");

        let mut backpack = Vec::new();
        // Admitted positions kept sorted, so the weight check sums the same
        // way the exhaustive search does.
        let mut admitted: Vec<usize> = Vec::new();

        for item in GreedySolver::order(problem.items()) {
            let slot = admitted.binary_search(&item.id()).unwrap_or_else(|x| x);
            admitted.insert(slot, item.id());

            if problem.fits(&admitted) {
                backpack.push(item);
            } else {
                admitted.remove(slot);
            }
        }

        let solution = Solution::from_items(backpack);
        debug!(
            admitted = solution.len(),
            value = solution.total_value(),
            weight = solution.total_weight(),
            "greedy fill finished"
        );

        Ok(solution)
    }
}
