use log::debug;

use crate::entities::SPInstance;
use crate::error::{Axis, ModelConstructionError};
use crate::util::BigMConfig;

/// Domain of the upper-left corner of a single rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Big-M constants relaxing the four disjuncts of a pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BigM {
    /// `M1`
    pub up: f64,
    /// `M2`
    pub right: f64,
    /// `M3`
    pub down: f64,
    /// `M4`
    pub left: f64,
}

impl BigM {
    /// Derives the tightest sound constants: the strip width vertically, the strip length upper bound horizontally.
    /// Overrides are accepted only when they are at least as large.
    pub fn derive(
        strip_width: f64,
        length_upper_bound: f64,
        config: &BigMConfig,
    ) -> Result<Self, ModelConstructionError> {
        let vertical = config.vertical.unwrap_or(strip_width);
        let horizontal = config.horizontal.unwrap_or(length_upper_bound);
        let big_m = BigM {
            up: vertical,
            right: horizontal,
            down: vertical,
            left: horizontal,
        };
        big_m.check(strip_width, length_upper_bound)?;
        Ok(big_m)
    }

    /// Verifies that every constant dominates the largest gap its disjunct can be asked to relax.
    ///
    /// An inactive up/down disjunct requires at most `W`, an inactive right/left one at most `L_up`.
    /// Smaller constants silently forbid feasible layouts instead of failing.
    pub fn check(
        &self,
        strip_width: f64,
        length_upper_bound: f64,
    ) -> Result<(), ModelConstructionError> {
        let checks = [
            (Axis::Vertical, self.up, strip_width),
            (Axis::Horizontal, self.right, length_upper_bound),
            (Axis::Vertical, self.down, strip_width),
            (Axis::Horizontal, self.left, length_upper_bound),
        ];
        for (axis, value, required) in checks {
            if !value.is_finite() || value < required {
                return Err(ModelConstructionError::UndersizedBigM {
                    axis,
                    value,
                    required,
                });
            }
        }
        Ok(())
    }
}

/// Everything derived from the raw rectangle dimensions before the model is built.
#[derive(Clone, Debug, PartialEq)]
pub struct StripBounds {
    /// `W`: the height of the tallest rectangle
    pub strip_width: f64,
    /// `L_up`: the strip length when all rectangles are placed in a single row
    pub length_upper_bound: f64,
    /// Coordinate domains, one per rectangle in instance order
    pub coords: Vec<CoordBounds>,
    pub big_m: BigM,
}

impl StripBounds {
    pub fn compute(
        instance: &SPInstance,
        big_m_config: &BigMConfig,
    ) -> Result<Self, ModelConstructionError> {
        let strip_width = instance.strip_width();
        let length_upper_bound = instance.total_length();

        let coords = instance
            .rectangles()
            .iter()
            .map(|r| CoordBounds {
                x_min: 0.0,
                x_max: length_upper_bound - r.length,
                y_min: r.height,
                y_max: strip_width,
            })
            .collect();

        let big_m = BigM::derive(strip_width, length_upper_bound, big_m_config)?;

        debug!(
            "[BOUNDS] W: {strip_width}, L_up: {length_upper_bound}, big-M: {:?}",
            big_m
        );

        Ok(Self {
            strip_width,
            length_upper_bound,
            coords,
            big_m,
        })
    }
}
