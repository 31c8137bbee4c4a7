use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum KnnIndexError {
    #[error("General error: {0}")]
    General(String),

    #[error("Invalid header: {field} must be positive, got {value}")]
    InvalidHeader { field: &'static str, value: i32 },

    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("Expected a point of dimension {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Coordinate {axis} of point {point} is NaN")]
    NanCoordinate { point: usize, axis: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KnnIndexError>;
