use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entities::{Placement, SPInstance};
use crate::geometry::Relation;

/// Resolved non-overlap relation of a pair of rectangles: `j` lies in direction `relation` of `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRelation {
    pub i: u64,
    pub j: u64,
    pub relation: Relation,
}

/// How much the solver guarantees about the returned strip length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveQuality {
    /// Proven optimal
    Optimal,
    /// Feasible, optimality not proven
    Feasible,
    /// Placed without a solver (single rectangle)
    Trivial,
}

/// A validated layout of all rectangles of an [`SPInstance`].
#[derive(Debug, Clone)]
pub struct SPSolution {
    /// Width of the strip (`W`)
    pub strip_width: f64,
    /// Minimized length of the strip (`lt`)
    pub strip_length: f64,
    /// One placement per rectangle, in instance order
    pub placements: Vec<Placement>,
    /// One relation per pair `i < j`, in the order of [`SPInstance::pairs`]
    pub relations: Vec<PairRelation>,
    pub quality: SolveQuality,
    /// Wall-clock time spent in the solver
    pub solve_time: Duration,
}

impl SPSolution {
    /// Fraction of the used strip area covered by rectangles.
    pub fn density(&self, instance: &SPInstance) -> f64 {
        let strip_area = self.strip_width * self.strip_length;
        if strip_area > 0.0 {
            instance.total_area() / strip_area
        } else {
            0.0
        }
    }
}
