use subsets::Subsets;
use tracing::{ debug, trace, warn };

use crate::error::InvalidItemError;
use crate::problem::{ Problem, ProblemSolver };
use crate::solution::Solution;

/// Above this many items a full enumeration takes minutes rather than seconds.
pub const PRACTICAL_ITEM_LIMIT: usize = 24;

/// Brute force: looks at every subset of the catalog and keeps the most
/// valuable one that fits.
///
/// # Cost
///
/// `2^n` subsets, each summed in `O(n)`. Twenty items is about a million
/// subsets; every extra item doubles the run time. Nothing here prunes or
/// stops early, bounding the catalog size is up to the caller.
///
/// Subsets are visited by size and then by catalog order, starting with the
/// empty one. A later subset only replaces the incumbent when its value is
/// strictly greater, so among equally valuable subsets the first one visited
/// is returned.
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    pub fn new() -> Self {
        ExhaustiveSolver {}
    }
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        ExhaustiveSolver::new()
    }
}

impl ProblemSolver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve(&self, problem: &Problem) -> Result<Solution, InvalidItemError> {
        problem.validate()?;

        let items = problem.items();
        if items.len() > PRACTICAL_ITEM_LIMIT {
            warn!(
                items = items.len(),
                subsets = ?Subsets::count_for(items.len()),
                "exhaustive search over a large catalog, expect a long run"
            );
        }
        debug!(items = items.len(), capacity = problem.capacity, "exhaustive search started");

        // The empty subset is feasible for any capacity and is the first one visited.
        let mut best: Vec<usize> = Vec::new();
        let mut best_value = 0.0;
        let mut feasible = 0u64;

        for subset in Subsets::new(items.len()) {
            if !problem.fits(&subset) {
                continue;
            }
            feasible += 1;

            let value = problem.value_of(&subset);
            if value > best_value {
                trace!(value, subset = ?subset, "new incumbent");
                best_value = value;
                best = subset;
            }
        }

        let solution = Solution::from_items(best.into_iter().map(|i| items[i]).collect());
        debug!(
            feasible,
            value = solution.total_value(),
            weight = solution.total_weight(),
            "exhaustive search finished"
        );

        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_keep_first_visited() {
        // {2} (value 7) is visited before {0, 1} (also value 7)
        let problem = Problem::new(5.0, vec!((2.0, 3.0), (3.0, 4.0), (5.0, 7.0)));
        let solution = ExhaustiveSolver::new().solve(&problem).unwrap();

        assert_eq!(vec!(2), solution.ids());
        assert_eq!(7.0, solution.total_value());
    }

    #[test]
    fn zero_value_catalog_gives_empty_solution() {
        let problem = Problem::new(10.0, vec!((1.0, 0.0), (2.0, 0.0)));
        let solution = ExhaustiveSolver::new().solve(&problem).unwrap();

        assert!(solution.is_empty());
    }

    #[test]
    fn everything_fits() {
        let problem = Problem::new(100.0, vec!((1.0, 1.0), (2.0, 2.0), (3.0, 3.0)));
        let solution = ExhaustiveSolver::new().solve(&problem).unwrap();

        assert_eq!(vec!(0, 1, 2), solution.ids());
        assert_eq!(6.0, solution.total_weight());
    }
}
