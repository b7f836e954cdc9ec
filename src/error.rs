//! Error types for quake_clusters

use thiserror::Error;

/// Errors raised while loading points or validating clustering input
#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("invalid coordinate {value:?} at line {line}, column {column}")]
    InvalidCoordinate {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("eps must be a finite, non-negative distance (got {0})")]
    InvalidEpsilon(f64),

    #[error("minPoints must be at least 1")]
    InvalidMinPoints,

    #[error("label map has {found} labels, dataset has {expected} points")]
    LabelCountMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, ClusterError>;
