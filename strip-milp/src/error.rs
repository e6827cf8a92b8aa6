use std::time::Duration;

use thiserror::Error;

use crate::model::ConstraintTag;
use crate::validate::ValidationReport;

/// Malformed input, detected before any model is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("the instance contains no rectangles")]
    EmptyInstance,
    #[error("rectangle {id} has non-positive dimensions (length: {length}, height: {height})")]
    NonPositiveDimension { id: u64, length: f64, height: f64 },
    #[error("rectangle {id} has non-finite dimensions (length: {length}, height: {height})")]
    NonFiniteDimension { id: u64, length: f64, height: f64 },
    #[error("rectangle id {id} is used more than once")]
    DuplicateId { id: u64 },
}

/// Axis along which a Big-M constant relaxes its disjuncts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `M1` and `M3`, relaxing the up and down disjuncts
    Vertical,
    /// `M2` and `M4`, relaxing the right and left disjuncts
    Horizontal,
}

/// An internal invariant was violated while assembling the model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelConstructionError {
    #[error("the pairwise model needs at least 2 rectangles, got {n}")]
    TooFewRectangles { n: usize },
    #[error("{axis:?} Big-M of {value} is smaller than the gap {required} it must dominate")]
    UndersizedBigM { axis: Axis, value: f64, required: f64 },
    #[error("bounds were computed for {expected} rectangles, but the instance has {found}")]
    BoundsMismatch { expected: usize, found: usize },
    #[error("constraint {tag} references unknown variable #{var}")]
    UnknownVariable { tag: ConstraintTag, var: usize },
}

/// Every way a packing attempt can fail.
#[derive(Debug, Clone, Error)]
pub enum PackError {
    #[error("invalid instance: {0}")]
    Validation(#[from] ValidationError),
    #[error("model construction failed: {0}")]
    ModelConstruction(#[from] ModelConstructionError),
    #[error("the solver reported the model as infeasible")]
    Infeasible,
    #[error("the solver reported the model as unbounded")]
    Unbounded,
    #[error("the solver did not finish within {limit:?}")]
    Timeout { limit: Duration },
    #[error("solver failure: {0}")]
    Solver(String),
    #[error("the solver reported success, but the layout is invalid: {0}")]
    ValidationMismatch(ValidationReport),
}
