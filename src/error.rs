use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("{0}")]
    Overflow(#[from] Overflow),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("size {0} is negative")]
    Negative(i64),

    #[error("size '{0}' is not an integer")]
    NotAnInteger(String),

    #[error("size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },
}

/// Raised when a counter can no longer be incremented without wrapping.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("count of permutations with {descents} descents overflows")]
pub struct Overflow {
    pub descents: usize,
}
