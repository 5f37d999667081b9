use std::time::{ Duration, Instant };

use serde_derive::Serialize;
use tracing::info;

use crate::error::InvalidItemError;
use crate::exhaustive::ExhaustiveSolver;
use crate::greedy::GreedySolver;
use crate::problem::{ Problem, ProblemSolver };
use crate::solution::Solution;

/// One timed solver invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Run {
    pub solver: &'static str,
    pub solution: Solution,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub item_count: usize,
    pub capacity: f64,
    pub exhaustive: Run,
    pub greedy: Run,
}

impl Comparison {
    /// How much value the heuristic leaves on the table.
    pub fn value_gap(&self) -> f64 {
        self.exhaustive.solution.total_value() - self.greedy.solution.total_value()
    }

    /// Greedy value as a fraction of the optimum, 1.0 when the optimum is zero.
    pub fn greedy_ratio(&self) -> f64 {
        let optimal = self.exhaustive.solution.total_value();
        if optimal > 0.0 {
            self.greedy.solution.total_value() / optimal
        } else {
            1.0
        }
    }
}

pub fn timed<S: ProblemSolver>(solver: &S, problem: &Problem) -> Result<Run, InvalidItemError> {
    let start = Instant::now();
    let solution = solver.solve(problem)?;
    let elapsed = start.elapsed();

    info!(
        solver = solver.name(),
        value = solution.total_value(),
        weight = solution.total_weight(),
        elapsed = ?elapsed,
        "solver finished"
    );

    Ok(Run { solver: solver.name(), solution, elapsed })
}

/// Runs the exhaustive search and then the greedy heuristic on the same problem.
pub fn compare(problem: &Problem) -> Result<Comparison, InvalidItemError> {
    let exhaustive = timed(&ExhaustiveSolver::new(), problem)?;
    let greedy = timed(&GreedySolver::new(), problem)?;

    Ok(Comparison {
        item_count: problem.len(),
        capacity: problem.capacity,
        exhaustive,
        greedy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_runs_both_solvers() {
        let problem = Problem::new(4.0, vec!((1.0, 2.0), (4.0, 7.0), (2.0, 3.0)));
        let comparison = compare(&problem).unwrap();

        assert_eq!(3, comparison.item_count);
        assert_eq!("exhaustive", comparison.exhaustive.solver);
        assert_eq!("greedy", comparison.greedy.solver);
        assert_eq!(7.0, comparison.exhaustive.solution.total_value());
        assert_eq!(5.0, comparison.greedy.solution.total_value());
        assert_eq!(2.0, comparison.value_gap());
        assert!((comparison.greedy_ratio() - 5.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn ratio_of_empty_problem() {
        let comparison = compare(&Problem::new(10.0, Vec::<(f64, f64)>::new())).unwrap();
        assert_eq!(0.0, comparison.value_gap());
        assert_eq!(1.0, comparison.greedy_ratio());
    }

    #[test]
    fn invalid_problem_is_reported() {
        let problem = Problem::new(-1.0, vec!((1.0, 1.0)));
        assert_eq!(Err(InvalidItemError::Capacity(-1.0)), compare(&problem).map(|_| ()));
    }

    #[test]
    fn serializes_to_json() {
        let problem = Problem::new(5.0, vec!((2.0, 3.0), (3.0, 4.0)));
        let json = serde_json::to_value(compare(&problem).unwrap()).unwrap();

        assert_eq!(2, json["item_count"]);
        assert_eq!(7.0, json["exhaustive"]["solution"]["total_value"]);
        assert_eq!("greedy", json["greedy"]["solver"]);
    }

    #[test]
    fn json_items_carry_no_density() {
        // A zero-weight item has infinite density, which JSON cannot hold
        let problem = Problem::new(5.0, vec!((0.0, 3.0), (2.0, 4.0)));
        let json = serde_json::to_value(compare(&problem).unwrap()).unwrap();

        let items = json["greedy"]["solution"]["items"].as_array().unwrap();
        assert_eq!(2, items.len());
        assert_eq!(0.0, items[0]["weight"]);
        assert_eq!(3.0, items[0]["value"]);
        assert!(items.iter().all(|x| x.get("density").is_none()));
    }
}
