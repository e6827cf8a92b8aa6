use serde::{Deserialize, Serialize};

///Absolute tolerance for comparing floats, backed by the [`float_cmp::approx_eq!()`] macro.
///Used wherever values coming out of the solver are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance(pub f64);

impl Tolerance {
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        float_cmp::approx_eq!(f64, a, b, epsilon = self.0)
    }

    /// `a <= b`, or equal within the tolerance
    pub fn approx_le(self, a: f64, b: f64) -> bool {
        a <= b || self.approx_eq(a, b)
    }

    /// `a >= b`, or equal within the tolerance
    pub fn approx_ge(self, a: f64, b: f64) -> bool {
        a >= b || self.approx_eq(a, b)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance(1e-6)
    }
}
