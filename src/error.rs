//! Error types for loading and validating game tuning

use thiserror::Error;

use crate::sim::ItemKind;

/// Errors from [`Tuning`](crate::Tuning) loading or validation
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("item catalog is empty")]
    EmptyCatalog,

    #[error("item kind {0:?} appears more than once in the catalog")]
    DuplicateKind(ItemKind),

    #[error("item kind {kind:?} has invalid spawn weight {weight}")]
    InvalidWeight { kind: ItemKind, weight: f64 },

    #[error("spawn weights sum to {0}, expected 1.0")]
    WeightSum(f64),

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),
}
