use std::collections::HashSet;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::Rectangle;
use crate::error::ValidationError;

/// Instance of the rectangular Strip Packing Problem: a set of rectangles to be packed into a single strip.
/// The width of the strip is fixed to the tallest rectangle, its length is to be minimized.
#[derive(Debug, Clone)]
pub struct SPInstance {
    /// The rectangles to be packed, in their canonical order
    rectangles: Vec<Rectangle>,
}

impl SPInstance {
    /// Validates the rectangles and creates the instance.
    /// Their order is preserved and defines the pairs `i < j` of the model.
    pub fn new(rectangles: Vec<Rectangle>) -> Result<Self, ValidationError> {
        if rectangles.is_empty() {
            return Err(ValidationError::EmptyInstance);
        }

        let mut seen_ids = HashSet::with_capacity(rectangles.len());
        for r in &rectangles {
            if !r.length.is_finite() || !r.height.is_finite() {
                return Err(ValidationError::NonFiniteDimension {
                    id: r.id,
                    length: r.length,
                    height: r.height,
                });
            }
            if r.length <= 0.0 || r.height <= 0.0 {
                return Err(ValidationError::NonPositiveDimension {
                    id: r.id,
                    length: r.length,
                    height: r.height,
                });
            }
            if !seen_ids.insert(r.id) {
                return Err(ValidationError::DuplicateId { id: r.id });
            }
        }

        Ok(Self { rectangles })
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn rectangle(&self, idx: usize) -> &Rectangle {
        &self.rectangles[idx]
    }

    pub fn n_rectangles(&self) -> usize {
        self.rectangles.len()
    }

    /// Width of the strip (`W`): the height of the tallest rectangle.
    pub fn strip_width(&self) -> f64 {
        self.rectangles
            .iter()
            .map(|r| OrderedFloat(r.height))
            .max()
            .map_or(0.0, |h| h.0)
    }

    /// Strip length when all rectangles are placed side by side (`L_up`).
    pub fn total_length(&self) -> f64 {
        self.rectangles.iter().map(|r| r.length).sum()
    }

    pub fn total_area(&self) -> f64 {
        self.rectangles.iter().map(|r| r.area()).sum()
    }

    /// All index pairs `(i, j)` with `i < j`, each unordered pair exactly once.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        (0..self.rectangles.len()).tuple_combinations()
    }

    pub fn n_pairs(&self) -> usize {
        let n = self.rectangles.len();
        n * n.saturating_sub(1) / 2
    }
}
