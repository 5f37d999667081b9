use std::borrow::Cow;
use std::io::{ BufRead, BufReader, Read };
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use serde_derive::Serialize;

use crate::error::{ InvalidItemError, ProblemError };
use crate::solution::Solution;

pub trait ProblemSolver {
    fn name(&self) -> &'static str;
    fn solve(&self, problem: &Problem) -> Result<Solution, InvalidItemError>;
}

/// A candidate item. The density is computed once on construction.
///
/// A zero-weight item with a positive value has density `+inf`; tables print
/// it as `inf`. JSON output leaves density out since it cannot carry `inf`,
/// readers recompute it from weight and value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Item {
    id: usize,
    weight: f64,
    value: f64,
    #[serde(skip_serializing)]
    density: f64,
}

impl Item {
    pub fn new(id: usize, weight: f64, value: f64) -> Self {
        // Zero weight would give inf or NaN, keep it orderable.
        let density = if weight > 0.0 {
            value / weight
        } else if value > 0.0 {
            std::f64::INFINITY
        } else {
            0.0
        };

        Item { id, weight, value, density }
    }

    pub fn id(&self) -> usize { self.id }
    pub fn weight(&self) -> f64 { self.weight }
    pub fn value(&self) -> f64 { self.value }
    pub fn density(&self) -> f64 { self.density }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    pub capacity: f64,
    // Private so an item's id always equals its position.
    items: Vec<Item>,
}

// File layout:
//   <item count>
//   <capacity>
//   <weight> <value>   (item count times)
// Blank lines and lines starting with '#' are ignored.
impl Problem {
    /// Builds a catalog from `(weight, value)` pairs, ids follow the iteration order.
    pub fn new<I: IntoIterator<Item = (f64, f64)>>(capacity: f64, items: I) -> Self {
        let items = items.into_iter()
            .enumerate()
            .map(|(id, (weight, value))| Item::new(id, weight, value))
            .collect();

        Problem { capacity, items }
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ProblemError> {
        let file = File::open(path)?;
        Problem::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ProblemError> {
        let mut lines = Vec::new();
        for (number, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            lines.push((number + 1, trimmed.to_owned()));
        }

        let mut lines = lines.into_iter();

        let (line, count) = lines.next()
            .ok_or_else(|| ProblemError::Parse { line: 1, message: "missing item count".to_owned() })?;
        let count: usize = parse_field(line, &count, "item count")?;

        let (line, capacity) = lines.next()
            .ok_or_else(|| ProblemError::Parse { line: line + 1, message: "missing capacity".to_owned() })?;
        let capacity: f64 = parse_field(line, &capacity, "capacity")?;

        let pairs = lines
            .map(|(line, text)| {
                let mut fields = text.split_whitespace();
                let weight = fields.next().unwrap_or("");
                let value = fields.next()
                    .ok_or_else(|| ProblemError::Parse { line, message: "expected `<weight> <value>`".to_owned() })?;

                if fields.next().is_some() {
                    return Err(ProblemError::Parse { line, message: "trailing fields after value".to_owned() });
                }

                Ok((parse_field(line, weight, "weight")?, parse_field(line, value, "value")?))
            })
            .collect::<Result<Vec<(f64, f64)>, ProblemError>>()?;

        if pairs.len() != count {
            return Err(ProblemError::ItemCount { expected: count, found: pairs.len() });
        }

        let problem = Problem::new(capacity, pairs);
        problem.validate()?;
        Ok(problem)
    }

    /// Checks the solver preconditions: finite non-negative weights and values,
    /// and a non-negative capacity. NaN counts as invalid everywhere.
    pub fn validate(&self) -> Result<(), InvalidItemError> {
        if !(self.capacity >= 0.0) {
            return Err(InvalidItemError::Capacity(self.capacity));
        }

        for (index, item) in self.items.iter().enumerate() {
            if !(item.weight >= 0.0 && item.weight.is_finite()) {
                return Err(InvalidItemError::Weight { index, weight: item.weight });
            }
            if !(item.value >= 0.0 && item.value.is_finite()) {
                return Err(InvalidItemError::Value { index, value: item.value });
            }
        }

        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Weight of a set of catalog positions, summed in ascending position
    /// order whatever order `ids` come in. Every feasibility decision goes
    /// through here so floating point rounding is the same for both solvers.
    pub fn weight_of(&self, ids: &[usize]) -> f64 {
        ascending(ids).iter().map(|&i| self.items[i].weight).sum()
    }

    /// Value of a set of catalog positions, summed like [`Problem::weight_of`].
    pub fn value_of(&self, ids: &[usize]) -> f64 {
        ascending(ids).iter().map(|&i| self.items[i].value).sum()
    }

    pub fn fits(&self, ids: &[usize]) -> bool {
        self.weight_of(ids) <= self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|x| x.weight).sum()
    }

    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|x| x.value).sum()
    }
}

fn ascending(ids: &[usize]) -> Cow<'_, [usize]> {
    if ids.windows(2).all(|w| w[0] <= w[1]) {
        return Cow::Borrowed(ids);
    }
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    Cow::Owned(sorted)
}

fn parse_field<T: FromStr>(line: usize, text: &str, what: &str) -> Result<T, ProblemError> {
    text.parse::<T>().map_err(|_| ProblemError::Parse {
        line,
        message: format!("{} `{}` is not a number", what, text),
    })
}
