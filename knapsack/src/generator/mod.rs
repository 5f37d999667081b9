use rand::rngs::StdRng;
use rand::{ Rng, SeedableRng };

use crate::problem::Problem;

/// Random catalogs with integral weights and values in `1..=max`.
/// The capacity is half of the catalog's total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    pub item_count: usize,
    pub max_weight: u32,
    pub max_value: u32,
}

impl Default for Generator {
    fn default() -> Self {
        Generator {
            item_count: 20,
            max_weight: 29,
            max_value: 29,
        }
    }
}

impl Generator {
    pub fn new(item_count: usize) -> Self {
        Generator { item_count, ..Default::default() }
    }

    /// Same seed, same catalog.
    pub fn generate(&self, seed: u64) -> Problem {
        let mut rng = StdRng::seed_from_u64(seed);

        let weights = (0..self.item_count)
            .map(|_| rng.gen_range(1, u64::from(self.max_weight.max(1)) + 1))
            .collect::<Vec<u64>>();
        let values = (0..self.item_count)
            .map(|_| rng.gen_range(1, u64::from(self.max_value.max(1)) + 1))
            .collect::<Vec<u64>>();

        let pairs = weights.into_iter().zip(values)
            .map(|(w, v)| (w as f64, v as f64))
            .collect::<Vec<_>>();

        let total: f64 = pairs.iter().map(|x| x.0).sum();
        Problem::new(total / 2.0, pairs)
    }

    /// A seed drawn from the thread-local generator, for runs without an explicit one.
    pub fn random_seed() -> u64 {
        rand::thread_rng().gen()
    }
}
