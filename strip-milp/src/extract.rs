use crate::entities::{Placement, SPInstance};
use crate::error::PackError;
use crate::model::{StripModel, VarId};
use crate::solver::Assignment;

/// Raw values of the relation indicators of a pair `i < j`, indexed by [`Relation::index`](crate::geometry::Relation::index).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairIndicators {
    pub i: usize,
    pub j: usize,
    pub values: [f64; 4],
}

/// Solver values mapped back onto the instance, before any interpretation or validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    pub strip_length: f64,
    /// One placement per rectangle, in instance order
    pub placements: Vec<Placement>,
    /// One entry per pair, in the order of [`SPInstance::pairs`]
    pub indicators: Vec<PairIndicators>,
}

/// Reads the values of all model variables out of `assignment`.
/// A missing value means the solver broke its contract and is reported as [`PackError::Solver`].
pub fn extract(
    model: &StripModel,
    instance: &SPInstance,
    assignment: &Assignment,
) -> Result<Extraction, PackError> {
    let value = |var: VarId| {
        assignment.value(var).ok_or_else(|| {
            PackError::Solver(format!(
                "assignment lacks a value for {}",
                model.milp().variable(var).name
            ))
        })
    };

    let strip_length = value(model.lt)?;

    let placements = instance
        .rectangles()
        .iter()
        .enumerate()
        .map(|(k, r)| Ok(Placement::new(r.id, value(model.x[k])?, value(model.y[k])?)))
        .collect::<Result<Vec<_>, PackError>>()?;

    let indicators = model
        .pairs
        .iter()
        .map(|pv| {
            let [w0, w1, w2, w3] = pv.w;
            Ok(PairIndicators {
                i: pv.i,
                j: pv.j,
                values: [value(w0)?, value(w1)?, value(w2)?, value(w3)?],
            })
        })
        .collect::<Result<Vec<_>, PackError>>()?;

    Ok(Extraction {
        strip_length,
        placements,
        indicators,
    })
}
