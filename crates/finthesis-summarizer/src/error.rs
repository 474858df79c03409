use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("overlap threshold must be within [0, 1], got {0}")]
    InvalidOverlapThreshold(f64),
}
