use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::model::{MilpModel, VarId};

mod microlp;
mod time_limit;

#[doc(inline)]
pub use microlp::MicroLpSolver;

#[doc(inline)]
pub use time_limit::solve_with_time_limit;

/// Termination status reported by a [`MilpSolver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverStatus {
    /// A proven optimal assignment was found
    Optimal,
    /// A feasible assignment was found, optimality is not proven
    Feasible,
    Infeasible,
    Unbounded,
    /// The time budget expired before the solver finished
    Timeout,
    /// Any other failure, with a solver specific description
    Error(String),
}

impl SolverStatus {
    /// Whether the status comes with a usable assignment
    pub fn is_success(&self) -> bool {
        matches!(self, SolverStatus::Optimal | SolverStatus::Feasible)
    }
}

impl Display for SolverStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverStatus::Optimal => write!(f, "optimal"),
            SolverStatus::Feasible => write!(f, "feasible"),
            SolverStatus::Infeasible => write!(f, "infeasible"),
            SolverStatus::Unbounded => write!(f, "unbounded"),
            SolverStatus::Timeout => write!(f, "timeout"),
            SolverStatus::Error(msg) => write!(f, "error ({msg})"),
        }
    }
}

/// Values of all variables of a [`MilpModel`], indexed by [`VarId`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Assignment(Vec<f64>);

impl Assignment {
    pub fn new(values: Vec<f64>) -> Self {
        Assignment(values)
    }

    pub fn value(&self, var: VarId) -> Option<f64> {
        self.0.get(var.0).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

/// What a solver hands back after a single invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverOutput {
    pub status: SolverStatus,
    /// Only present for successful statuses
    pub assignment: Option<Assignment>,
    /// Wall-clock time spent solving
    pub elapsed: Duration,
}

impl SolverOutput {
    pub fn success(status: SolverStatus, assignment: Assignment, elapsed: Duration) -> Self {
        debug_assert!(status.is_success());
        Self {
            status,
            assignment: Some(assignment),
            elapsed,
        }
    }

    pub fn failure(status: SolverStatus, elapsed: Duration) -> Self {
        debug_assert!(!status.is_success());
        Self {
            status,
            assignment: None,
            elapsed,
        }
    }
}

/// A generic MILP solver, treated as an oracle by the packer.
///
/// Implementations must not retry internally and must not make assumptions about how the
/// packer interprets their tolerances: the assignment is handed back as-is.
pub trait MilpSolver {
    fn name(&self) -> &str;

    /// Solves `model` to completion (or failure). Blocks the calling thread.
    fn solve(&self, model: &MilpModel) -> SolverOutput;
}
