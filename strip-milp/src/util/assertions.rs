use itertools::Itertools;
use log::error;

use crate::entities::{SPInstance, SPSolution};
use crate::model::{ConstraintTag, StripModel};
use crate::util::Tolerance;
use crate::validate::validate_layout;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Checks that the model holds exactly the variables and constraints the formulation prescribes for `instance`.
pub fn model_matches_instance(model: &StripModel, instance: &SPInstance) -> bool {
    let n = instance.n_rectangles();
    let n_pairs = instance.n_pairs();
    let milp = model.milp();

    let expected_pairs = instance.pairs().collect_vec();
    let actual_pairs = model.pairs.iter().map(|pv| (pv.i, pv.j)).collect_vec();
    if expected_pairs != actual_pairs {
        error!("pair order of the model does not match the instance");
        return false;
    }

    let n_global = milp
        .constraints()
        .iter()
        .filter(|c| matches!(c.tag, ConstraintTag::Global { .. }))
        .count();
    let n_disjuncts = milp
        .constraints()
        .iter()
        .filter(|c| matches!(c.tag, ConstraintTag::Disjunct { .. }))
        .count();
    let n_logic = milp
        .constraints()
        .iter()
        .filter(|c| matches!(c.tag, ConstraintTag::Logic { .. }))
        .count();

    model.x.len() == n
        && model.y.len() == n
        && milp.variables().len() == 1 + 2 * n + 4 * n_pairs
        && milp.n_binaries() == 4 * n_pairs
        && n_global == n
        && n_disjuncts == 4 * n_pairs
        && n_logic == n_pairs
}

/// Checks that a solution handed out by the packer is complete and passes validation.
pub fn solution_is_valid(instance: &SPInstance, solution: &SPSolution, tol: Tolerance) -> bool {
    let ids_in_order = instance
        .rectangles()
        .iter()
        .zip(solution.placements.iter())
        .all(|(r, p)| r.id == p.rect_id);

    let report = validate_layout(
        instance,
        solution.strip_width,
        solution.strip_length,
        &solution.placements,
        tol,
    );
    if !report.is_valid() {
        error!("invalid solution: {report}");
    }

    ids_in_order
        && solution.placements.len() == instance.n_rectangles()
        && solution.relations.len() == instance.n_pairs()
        && report.is_valid()
}
