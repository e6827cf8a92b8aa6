use serde::{Deserialize, Serialize};

use crate::entities::Placement;
use crate::geometry::Rect;

/// Axis-aligned rectangle to be packed into the strip. Cannot be rotated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: u64,
    /// Extent along the strip (`L`)
    pub length: f64,
    /// Extent across the strip (`H`)
    pub height: f64,
}

impl Rectangle {
    pub fn new(id: u64, length: f64, height: f64) -> Self {
        Self { id, length, height }
    }

    pub fn area(&self) -> f64 {
        self.length * self.height
    }

    /// The region covered by `self` when its upper-left corner is at `placement`.
    pub fn placed_at(&self, placement: &Placement) -> Rect {
        Rect::from_upper_left(placement.x, placement.y, self.length, self.height)
    }
}
