use thiserror::Error;

/// Malformed solver input. Both solvers check for this before doing any work.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidItemError {
    #[error("item {index} has invalid weight {weight}")]
    Weight { index: usize, weight: f64 },

    #[error("item {index} has invalid value {value}")]
    Value { index: usize, value: f64 },

    #[error("capacity {0} is invalid")]
    Capacity(f64),
}

/// Failure to read a catalog file.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("could not read problem: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("expected {expected} items, found {found}")]
    ItemCount { expected: usize, found: usize },

    #[error(transparent)]
    Invalid(#[from] InvalidItemError),
}

/// A solution that does not belong to the problem it is checked against.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolutionError {
    #[error("item {0} is not part of the catalog")]
    UnknownItem(usize),

    #[error("item {0} is selected more than once")]
    DuplicateItem(usize),

    #[error("total weight {weight} exceeds capacity {capacity}")]
    Overweight { weight: f64, capacity: f64 },

    #[error("stored totals do not match the selected items")]
    TotalsMismatch,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Clap(#[from] clap::Error),

    #[error("invalid value for --{option}: {value}")]
    Invalid { option: &'static str, value: String },
}
