use hashbrown::HashSet;
use serde_derive::Serialize;

use crate::error::SolutionError;
use crate::problem::{ Item, Problem };

/// Selected items with their totals. Built once, never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    items: Vec<Item>,
    total_weight: f64,
    total_value: f64,
}

impl Solution {
    pub fn empty() -> Self {
        Solution {
            items: Vec::new(),
            total_weight: 0.0,
            total_value: 0.0,
        }
    }

    /// Items keep the given order; totals are summed by ascending id, the
    /// same way [`Problem::weight_of`] sums them.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut by_id = items.iter().collect::<Vec<_>>();
        by_id.sort_by_key(|x| x.id());

        let total_weight = by_id.iter().map(|x| x.weight()).sum();
        let total_value = by_id.iter().map(|x| x.value()).sum();

        Solution { items, total_weight, total_value }
    }

    pub fn items(&self) -> &[Item] { &self.items }
    pub fn total_weight(&self) -> f64 { self.total_weight }
    pub fn total_value(&self) -> f64 { self.total_value }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<usize> {
        self.items.iter().map(|x| x.id()).collect()
    }

    /// Checks that the selection is a feasible subset of `problem`'s catalog:
    /// every item exists there unchanged, none is picked twice, the weight fits
    /// and the stored totals add up.
    pub fn verify(&self, problem: &Problem) -> Result<(), SolutionError> {
        let mut seen: HashSet<usize> = HashSet::with_capacity(self.items.len());

        for item in &self.items {
            match problem.items().get(item.id()) {
                Some(original) if original == item => {},
                _ => return Err(SolutionError::UnknownItem(item.id())),
            }
            if !seen.insert(item.id()) {
                return Err(SolutionError::DuplicateItem(item.id()));
            }
        }

        if self.total_weight > problem.capacity {
            return Err(SolutionError::Overweight {
                weight: self.total_weight,
                capacity: problem.capacity,
            });
        }

        let recomputed = Solution::from_items(self.items.clone());
        if recomputed.total_weight != self.total_weight || recomputed.total_value != self.total_value {
            return Err(SolutionError::TotalsMismatch);
        }

        Ok(())
    }
}

impl Default for Solution {
    fn default() -> Self {
        Solution::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> Problem {
        Problem::new(5.0, vec!((2.0, 3.0), (3.0, 4.0), (4.0, 5.0)))
    }

    #[test]
    fn totals_follow_items() {
        let problem = problem();
        let solution = Solution::from_items(vec!(problem.items()[0], problem.items()[1]));

        assert_eq!(5.0, solution.total_weight());
        assert_eq!(7.0, solution.total_value());
        assert_eq!(vec!(0, 1), solution.ids());
        assert!(solution.verify(&problem).is_ok());
    }

    #[test]
    fn empty_is_feasible() {
        let solution = Solution::empty();
        assert!(solution.is_empty());
        assert_eq!(0.0, solution.total_weight());
        assert_eq!(0.0, solution.total_value());
        assert!(solution.verify(&problem()).is_ok());
    }

    #[test]
    fn verify_rejects_duplicates() {
        let problem = problem();
        let solution = Solution::from_items(vec!(problem.items()[0], problem.items()[0]));
        assert_eq!(Err(SolutionError::DuplicateItem(0)), solution.verify(&problem));
    }

    #[test]
    fn verify_rejects_fabricated_items() {
        let problem = problem();
        let forged = Item::new(1, 0.5, 100.0);
        let solution = Solution::from_items(vec!(forged));
        assert_eq!(Err(SolutionError::UnknownItem(1)), solution.verify(&problem));

        let unknown = Item::new(7, 1.0, 1.0);
        let solution = Solution::from_items(vec!(unknown));
        assert_eq!(Err(SolutionError::UnknownItem(7)), solution.verify(&problem));
    }

    #[test]
    fn totals_do_not_depend_on_item_order() {
        let problem = Problem::new(0.6, vec!((0.1, 0.8), (0.2, 1.8), (0.3, 3.0)));
        let items = problem.items();
        let forward = Solution::from_items(vec!(items[0], items[1], items[2]));
        let backward = Solution::from_items(vec!(items[2], items[1], items[0]));

        assert_eq!(forward.total_weight(), backward.total_weight());
        assert_eq!(problem.weight_of(&[2, 1, 0]), backward.total_weight());
        assert_eq!(vec!(2, 1, 0), backward.ids());
    }

    #[test]
    fn verify_rejects_overweight() {
        let problem = problem();
        let solution = Solution::from_items(vec!(problem.items()[1], problem.items()[2]));
        assert_eq!(
            Err(SolutionError::Overweight { weight: 7.0, capacity: 5.0 }),
            solution.verify(&problem)
        );
    }
}
