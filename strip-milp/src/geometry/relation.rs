use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::util::Tolerance;

/// Direction in which rectangle `j` lies with respect to rectangle `i` (for a pair `i < j`).
///
/// Post-solve, every pair resolves to exactly one of these.
/// The model itself carries one binary indicator per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// `j` is placed above `i`
    Up,
    /// `j` is placed to the right of `i`
    Right,
    /// `j` is placed below `i`
    Down,
    /// `j` is placed to the left of `i`
    Left,
}

impl Relation {
    pub const ALL: [Relation; 4] = [Relation::Up, Relation::Right, Relation::Down, Relation::Left];

    /// Position of the relation in [`Relation::ALL`]
    pub fn index(self) -> usize {
        match self {
            Relation::Up => 0,
            Relation::Right => 1,
            Relation::Down => 2,
            Relation::Left => 3,
        }
    }

    /// Whether `j` lies entirely in this direction of `i`, up to `tol`.
    pub fn holds(self, i: &Rect, j: &Rect, tol: Tolerance) -> bool {
        match self {
            Relation::Up => tol.approx_ge(j.y_min, i.y_max),
            Relation::Right => tol.approx_ge(j.x_min, i.x_max),
            Relation::Down => tol.approx_ge(i.y_min, j.y_max),
            Relation::Left => tol.approx_ge(i.x_min, j.x_max),
        }
    }

    /// Short name, also used in variable names (`w_up[0,1]`)
    pub fn name(self) -> &'static str {
        match self {
            Relation::Up => "up",
            Relation::Right => "right",
            Relation::Down => "down",
            Relation::Left => "left",
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
