use serde::{Deserialize, Serialize};

/// Position of a rectangle in the strip, expressed by its upper-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The id of the placed rectangle
    pub rect_id: u64,
    pub x: f64,
    pub y: f64,
}

impl Placement {
    pub fn new(rect_id: u64, x: f64, y: f64) -> Self {
        Self { rect_id, x, y }
    }
}
