use serde::{Deserialize, Serialize};

use crate::entities::SolveQuality;
use crate::geometry::Relation;

/// External representation of a [`Rectangle`](crate::entities::Rectangle).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRectangle {
    /// Unique identifier of the rectangle
    pub id: u64,
    /// Horizontal extent, along the strip
    pub length: f64,
    /// Vertical extent, across the strip
    pub height: f64,
}

/// External representation of an [`SPInstance`](crate::entities::SPInstance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Rectangles to be packed, their order is preserved
    pub rectangles: Vec<ExtRectangle>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
/// `(x, y)` is the upper-left corner of the rectangle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

/// External representation of a [`PairRelation`](crate::entities::PairRelation):
/// rectangle `j` lies in direction `relation` of rectangle `i`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRelation {
    pub i: u64,
    pub j: u64,
    pub relation: Relation,
}

/// External representation of an [`SPSolution`](crate::entities::SPSolution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// Fixed width of the strip
    pub strip_width: f64,
    /// Minimized length of the strip
    pub strip_length: f64,
    /// Sum of the area of the rectangles divided by the area of the used strip
    pub density: f64,
    pub quality: SolveQuality,
    /// Time spent in the solver, in milliseconds
    pub solve_time_ms: u64,
    pub placements: Vec<ExtPlacement>,
    pub relations: Vec<ExtRelation>,
}
