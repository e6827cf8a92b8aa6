use crate::geometry::Relation;
use crate::geometry::geo_traits::AlmostCollidesWith;
use crate::util::Tolerance;

///Axis-aligned rectangle, y-axis pointing up (across the strip)
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Rectangle of size `length` x `height` with its upper-left corner at (`x`, `y`).
    pub fn from_upper_left(x: f64, y: f64, length: f64, height: f64) -> Self {
        Rect {
            x_min: x,
            y_min: y - height,
            x_max: x + length,
            y_max: y,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x_min, b.x_min);
        let y_min = f64::max(a.y_min, b.y_min);
        let x_max = f64::min(a.x_max, b.x_max);
        let y_max = f64::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    /// Area shared by `a` and `b`, zero if their interiors are disjoint.
    pub fn overlap_area(a: Rect, b: Rect) -> f64 {
        Rect::intersection(a, b).map_or(0.0, |r| r.area())
    }

    /// Separating-axis test: returns a [`Relation`] in which `other` lies entirely with respect to `self`,
    /// or `None` if no axis separates them (their interiors overlap by more than `tol`).
    pub fn separation(&self, other: &Rect, tol: Tolerance) -> Option<Relation> {
        Relation::ALL
            .into_iter()
            .find(|rel| rel.holds(self, other, tol))
    }
}

impl AlmostCollidesWith<Rect> for Rect {
    #[inline(always)]
    fn almost_collides_with(&self, other: &Rect, tol: Tolerance) -> bool {
        self.separation(other, tol).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn upper_left_convention() {
        let r = Rect::from_upper_left(1.0, 5.0, 4.0, 2.0);
        assert_eq!(
            r,
            Rect {
                x_min: 1.0,
                y_min: 3.0,
                x_max: 5.0,
                y_max: 5.0
            }
        );
        assert_eq!(r.area(), 8.0);
    }

    #[test_case(Rect::from_upper_left(4.0, 2.0, 4.0, 2.0), Some(Relation::Right); "right neighbour")]
    #[test_case(Rect::from_upper_left(-3.0, 2.0, 3.0, 2.0), Some(Relation::Left); "left neighbour")]
    #[test_case(Rect::from_upper_left(0.0, 4.0, 4.0, 2.0), Some(Relation::Up); "stacked on top")]
    #[test_case(Rect::from_upper_left(1.0, 0.0, 1.0, 1.0), Some(Relation::Down); "below")]
    #[test_case(Rect::from_upper_left(3.0, 2.0, 4.0, 2.0), None; "overlapping")]
    fn separating_axis(other: Rect, expected: Option<Relation>) {
        let base = Rect::from_upper_left(0.0, 2.0, 4.0, 2.0);
        let tol = Tolerance::default();
        assert_eq!(base.separation(&other, tol), expected);
        assert_eq!(base.almost_collides_with(&other, tol), expected.is_none());
    }

    #[test]
    fn tiny_penetrations_are_tolerated() {
        let a = Rect::from_upper_left(0.0, 2.0, 4.0, 2.0);
        let b = Rect::from_upper_left(4.0 - 1e-9, 2.0, 4.0, 2.0);
        assert!(Rect::overlap_area(a, b) > 0.0);
        assert!(!a.almost_collides_with(&b, Tolerance(1e-6)));
        assert_eq!(a.separation(&b, Tolerance(1e-6)), Some(Relation::Right));
    }

    #[test]
    fn overlap_area_of_partial_overlap() {
        let a = Rect::from_upper_left(0.0, 2.0, 4.0, 2.0);
        let b = Rect::from_upper_left(3.0, 3.0, 4.0, 2.0);
        assert_eq!(Rect::overlap_area(a, b), 1.0);
        let c = Rect::from_upper_left(4.0, 2.0, 1.0, 1.0);
        assert_eq!(Rect::overlap_area(a, c), 0.0);
    }
}
