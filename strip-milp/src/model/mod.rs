use std::fmt::{Display, Formatter};

use crate::geometry::Relation;

mod builder;
mod milp;

#[doc(inline)]
pub use builder::{PairVars, StripModel};

#[doc(inline)]
pub use milp::{
    Cmp, Constraint, Domain, LinExpr, MilpBuilder, MilpModel, Objective, Sense, VarId, Variable,
};

/// Identifies which part of the formulation a constraint belongs to.
/// Indices refer to positions of rectangles in the instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintTag {
    /// `lt >= x_i + L_i`
    Global { i: usize },
    /// Big-M relaxed non-overlap condition of the pair in direction `relation`
    Disjunct { relation: Relation, i: usize, j: usize },
    /// Exactly one relation per pair
    Logic { i: usize, j: usize },
    /// Not a constraint, the objective function
    Objective,
}

impl Display for ConstraintTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintTag::Global { i } => write!(f, "global[{i}]"),
            ConstraintTag::Disjunct { relation, i, j } => write!(f, "disjunct_{relation}[{i},{j}]"),
            ConstraintTag::Logic { i, j } => write!(f, "logic[{i},{j}]"),
            ConstraintTag::Objective => write!(f, "objective"),
        }
    }
}
