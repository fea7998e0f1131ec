use thiserror::Error;

/// Reasons a raw control value is not accepted into the query state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Search text too long ({len} characters, max {max})")]
    TooLong { len: usize, max: usize },
    #[error("Maximum search length must be greater than zero")]
    InvalidLimit,
}
