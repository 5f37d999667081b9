//! Enumeration of every subset of `0..n`.
//!
//! Subsets are produced by size, smallest first, and lexicographically by
//! index within a size:
//!
//! ```text
//! n = 3: {} {0} {1} {2} {0,1} {0,2} {1,2} {0,1,2}
//! ```
//!
//! There are `2^n` of them, so anything beyond a couple dozen elements is
//! out of reach.

/// Iterator over all subsets of `0..n`, yielded as sorted index vectors.
pub struct Subsets {
    n: usize,
    // Current combination; its length is the size being enumerated.
    indices: Vec<usize>,
    state: State,
}

enum State { Fresh, Running, Done }

impl Subsets {
    pub fn new(n: usize) -> Self {
        Subsets {
            n,
            indices: Vec::with_capacity(n),
            state: State::Fresh,
        }
    }

    /// Number of subsets the iterator yields in total, `None` if it does not fit a `u64`.
    pub fn count_for(n: usize) -> Option<u64> {
        if n >= 64 {
            None
        } else {
            Some(1u64 << n)
        }
    }

    // Move to the next combination of the same size, returns false when exhausted.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        let n = self.n;

        // Rightmost index that can still be incremented
        let pivot = (0..k).rev().find(|&i| self.indices[i] < n - k + i);

        match pivot {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                true
            },
            None => false
        }
    }

    // Start enumerating the next size up, returns false when past `n`.
    fn grow(&mut self) -> bool {
        let k = self.indices.len() + 1;
        if k > self.n {
            return false;
        }
        self.indices.clear();
        self.indices.extend(0..k);
        true
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Fresh => {
                // The empty subset always comes first
                self.state = State::Running;
                Some(Vec::new())
            },
            State::Running => {
                if self.advance() || self.grow() {
                    Some(self.indices.clone())
                } else {
                    self.state = State::Done;
                    None
                }
            },
            State::Done => None
        }
    }
}

/// All subsets of `0..n`, see [`Subsets`].
pub fn subsets(n: usize) -> Subsets {
    Subsets::new(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn empty_set_has_one_subset() {
        let all = subsets(0).collect::<Vec<_>>();
        assert_eq!(vec!(Vec::<usize>::new()), all);
    }

    #[test]
    fn order_by_size_then_lexicographic() {
        let all = subsets(3).collect::<Vec<_>>();
        let expected: Vec<Vec<usize>> = vec!(
            vec!(),
            vec!(0), vec!(1), vec!(2),
            vec!(0, 1), vec!(0, 2), vec!(1, 2),
            vec!(0, 1, 2),
        );
        assert_eq!(expected, all);
    }

    #[test]
    fn yields_two_to_the_n() {
        for n in 0..12 {
            assert_eq!(Subsets::count_for(n).unwrap(), subsets(n).count() as u64);
        }
        assert_eq!(None, Subsets::count_for(64));
    }

    #[test]
    fn matches_combinations_per_size() {
        let n = 7;
        let expected = std::iter::once(vec!())
            .chain((1..=n).flat_map(|k| (0..n).combinations(k)))
            .collect::<Vec<_>>();

        assert_eq!(expected, subsets(n).collect::<Vec<_>>());
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut it = subsets(1);
        assert_eq!(Some(vec!()), it.next());
        assert_eq!(Some(vec!(0)), it.next());
        assert_eq!(None, it.next());
        assert_eq!(None, it.next());
    }
}
