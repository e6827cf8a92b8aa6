use itertools::Itertools;
use log::{debug, info};

use crate::bounds::StripBounds;
use crate::entities::SPInstance;
use crate::error::ModelConstructionError;
use crate::geometry::Relation;
use crate::model::{Cmp, ConstraintTag, LinExpr, MilpBuilder, MilpModel, Objective, Sense, VarId};
use crate::util::assertions;

/// Binary indicators of a pair `i < j`, indexed by [`Relation::index`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairVars {
    pub i: usize,
    pub j: usize,
    pub w: [VarId; 4],
}

impl PairVars {
    pub fn indicator(&self, relation: Relation) -> VarId {
        self.w[relation.index()]
    }
}

/// Big-M reformulation of the disjunctive strip packing model (Sawaya & Grossmann),
/// together with the handles needed to read a solution back.
#[derive(Clone, Debug)]
pub struct StripModel {
    milp: MilpModel,
    /// Length of the strip
    pub lt: VarId,
    /// x-coordinate of the upper-left corner, per rectangle
    pub x: Vec<VarId>,
    /// y-coordinate of the upper-left corner, per rectangle
    pub y: Vec<VarId>,
    /// Relation indicators, in the order of [`SPInstance::pairs`]
    pub pairs: Vec<PairVars>,
}

impl StripModel {
    /// Builds the complete model for `instance`.
    ///
    /// Needs at least two rectangles: a single rectangle has no pairs to separate and is placed directly by the packer.
    pub fn build(
        instance: &SPInstance,
        bounds: &StripBounds,
    ) -> Result<Self, ModelConstructionError> {
        let n = instance.n_rectangles();
        if n < 2 {
            return Err(ModelConstructionError::TooFewRectangles { n });
        }
        if bounds.coords.len() != n {
            return Err(ModelConstructionError::BoundsMismatch {
                expected: bounds.coords.len(),
                found: n,
            });
        }
        //reject unsound Big-M constants, even if they did not come from StripBounds::compute
        bounds
            .big_m
            .check(bounds.strip_width, bounds.length_upper_bound)?;

        let rects = instance.rectangles();
        let mut builder = MilpBuilder::new();

        let lt = builder.continuous("lt".to_string(), 0.0, None);
        let (x, y): (Vec<VarId>, Vec<VarId>) = rects
            .iter()
            .zip(bounds.coords.iter())
            .map(|(r, cb)| {
                let x = builder.continuous(format!("x[{}]", r.id), cb.x_min, Some(cb.x_max));
                let y = builder.continuous(format!("y[{}]", r.id), cb.y_min, Some(cb.y_max));
                (x, y)
            })
            .unzip();

        //lt >= x_i + L_i
        for (i, r) in rects.iter().enumerate() {
            builder.constrain(
                ConstraintTag::Global { i },
                LinExpr::new().term(lt, 1.0).term(x[i], -1.0),
                Cmp::Ge,
                r.length,
            );
        }

        let m = bounds.big_m;
        let pairs = instance
            .pairs()
            .map(|(i, j)| {
                let (ri, rj) = (&rects[i], &rects[j]);
                let w = Relation::ALL.map(|rel| {
                    builder.binary(format!("w_{}[{},{}]", rel.name(), ri.id, rj.id))
                });
                let pv = PairVars { i, j, w };
                let tag = |relation| ConstraintTag::Disjunct { relation, i, j };

                //up: y_j - H_j >= y_i - M1 * (1 - w_up)
                builder.constrain(
                    tag(Relation::Up),
                    LinExpr::new()
                        .term(y[j], 1.0)
                        .term(y[i], -1.0)
                        .term(pv.indicator(Relation::Up), -m.up),
                    Cmp::Ge,
                    rj.height - m.up,
                );
                //right: x_i + L_i <= x_j + M2 * (1 - w_right)
                builder.constrain(
                    tag(Relation::Right),
                    LinExpr::new()
                        .term(x[i], 1.0)
                        .term(x[j], -1.0)
                        .term(pv.indicator(Relation::Right), m.right),
                    Cmp::Le,
                    m.right - ri.length,
                );
                //down: y_i - H_i >= y_j - M3 * (1 - w_down)
                builder.constrain(
                    tag(Relation::Down),
                    LinExpr::new()
                        .term(y[i], 1.0)
                        .term(y[j], -1.0)
                        .term(pv.indicator(Relation::Down), -m.down),
                    Cmp::Ge,
                    ri.height - m.down,
                );
                //left: x_j + L_j <= x_i + M4 * (1 - w_left)
                builder.constrain(
                    tag(Relation::Left),
                    LinExpr::new()
                        .term(x[j], 1.0)
                        .term(x[i], -1.0)
                        .term(pv.indicator(Relation::Left), m.left),
                    Cmp::Le,
                    m.left - rj.length,
                );
                //exactly one relation holds
                builder.constrain(
                    ConstraintTag::Logic { i, j },
                    w.iter().fold(LinExpr::new(), |expr, &w| expr.term(w, 1.0)),
                    Cmp::Eq,
                    1.0,
                );

                debug!("[MILP] added disjunction for pair ({}, {})", ri.id, rj.id);
                pv
            })
            .collect_vec();

        let objective = Objective {
            expr: LinExpr::new().term(lt, 1.0),
            sense: Sense::Minimize,
        };
        let milp = builder.build(objective)?;

        let model = StripModel {
            milp,
            lt,
            x,
            y,
            pairs,
        };
        debug_assert!(assertions::model_matches_instance(&model, instance));

        info!(
            "[MILP] built model for {} rectangles: {}",
            n,
            model.milp
        );

        Ok(model)
    }

    pub fn milp(&self) -> &MilpModel {
        &self.milp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Rectangle;
    use crate::util::{BigMConfig, Tolerance};
    use test_case::test_case;

    fn instance() -> SPInstance {
        SPInstance::new(vec![
            Rectangle::new(10, 4.0, 2.0),
            Rectangle::new(20, 3.0, 1.0),
            Rectangle::new(30, 2.0, 1.0),
        ])
        .unwrap()
    }

    fn build(instance: &SPInstance) -> StripModel {
        let bounds = StripBounds::compute(instance, &BigMConfig::default()).unwrap();
        StripModel::build(instance, &bounds).unwrap()
    }

    /// Variable values for a layout and a relation choice per pair.
    fn values(
        model: &StripModel,
        lt: f64,
        corners: &[(f64, f64)],
        relations: &[Relation],
    ) -> Vec<f64> {
        let mut values = vec![0.0; model.milp().variables().len()];
        values[model.lt.0] = lt;
        for (k, (x, y)) in corners.iter().enumerate() {
            values[model.x[k].0] = *x;
            values[model.y[k].0] = *y;
        }
        for (pv, rel) in model.pairs.iter().zip(relations) {
            values[pv.indicator(*rel).0] = 1.0;
        }
        values
    }

    #[test]
    fn model_dimensions() {
        let model = build(&instance());
        let milp = model.milp();
        assert_eq!(milp.variables().len(), 1 + 2 * 3 + 4 * 3);
        assert_eq!(milp.n_binaries(), 12);
        assert_eq!(milp.constraints().len(), 3 + 5 * 3);
        assert_eq!(milp.objective().sense, Sense::Minimize);
        assert_eq!(milp.variable(model.x[1]).name, "x[20]");
        assert_eq!(milp.variable(model.pairs[2].w[3]).name, "w_left[20,30]");
        assert_eq!(milp.variable(model.y[0]).lower, 2.0);
        assert_eq!(milp.variable(model.x[0]).upper, Some(5.0));
    }

    #[test]
    fn single_rectangle_has_no_pairwise_model() {
        let instance = SPInstance::new(vec![Rectangle::new(0, 5.0, 3.0)]).unwrap();
        let bounds = StripBounds::compute(&instance, &BigMConfig::default()).unwrap();
        assert_eq!(
            StripModel::build(&instance, &bounds).unwrap_err(),
            ModelConstructionError::TooFewRectangles { n: 1 }
        );
    }

    #[test]
    fn feasible_layout_satisfies_all_constraints() {
        let model = build(&instance());
        // rect 10 on the left, 20 and 30 stacked to its right
        let corners = [(0.0, 2.0), (4.0, 2.0), (4.0, 1.0)];
        let relations = [Relation::Right, Relation::Right, Relation::Down];
        let values = values(&model, 7.0, &corners, &relations);
        let violated = model
            .milp()
            .violated_constraints(&values, Tolerance::default());
        assert!(violated.is_empty(), "violated: {violated:?}");
    }

    #[test]
    fn strip_length_must_cover_every_rectangle() {
        let model = build(&instance());
        let corners = [(0.0, 2.0), (4.0, 2.0), (4.0, 1.0)];
        let relations = [Relation::Right, Relation::Right, Relation::Down];
        let values = values(&model, 5.5, &corners, &relations);
        let violated = model
            .milp()
            .violated_constraints(&values, Tolerance::default());
        assert_eq!(
            violated.iter().map(|c| c.tag).collect_vec(),
            vec![
                ConstraintTag::Global { i: 1 },
                ConstraintTag::Global { i: 2 }
            ]
        );
    }

    #[test_case(Relation::Up)]
    #[test_case(Relation::Right)]
    #[test_case(Relation::Down)]
    #[test_case(Relation::Left)]
    fn overlapping_layout_violates_any_relation_choice(rel: Relation) {
        let model = build(&instance());
        // 10 and 20 overlap, the other pairs are separated
        let corners = [(0.0, 2.0), (1.0, 2.0), (5.0, 2.0)];
        let relations = [rel, Relation::Right, Relation::Right];
        let values = values(&model, 7.0, &corners, &relations);
        let violated = model
            .milp()
            .violated_constraints(&values, Tolerance::default());
        assert_eq!(
            violated.iter().map(|c| c.tag).collect_vec(),
            vec![ConstraintTag::Disjunct {
                relation: rel,
                i: 0,
                j: 1
            }]
        );
    }

    #[test]
    fn inactive_disjuncts_are_vacuous_at_the_extremes() {
        // i pushed to its maximal x, j at the origin: the widest gap the right disjunct must relax
        let instance = instance();
        let model = build(&instance);
        let bounds = StripBounds::compute(&instance, &BigMConfig::default()).unwrap();
        let corners = [(bounds.coords[0].x_max, 2.0), (0.0, 1.0), (3.0, 2.0)];
        let relations = [Relation::Left, Relation::Left, Relation::Right];
        let values = values(&model, 9.0, &corners, &relations);
        let violated = model
            .milp()
            .violated_constraints(&values, Tolerance::default());
        assert!(violated.is_empty(), "violated: {violated:?}");
    }

    #[test]
    fn logic_constraint_requires_exactly_one_relation() {
        let model = build(&instance());
        let corners = [(0.0, 2.0), (4.0, 2.0), (4.0, 1.0)];
        let relations = [Relation::Right, Relation::Right, Relation::Down];
        let mut values = values(&model, 7.0, &corners, &relations);
        // also claim that 20 lies above 10, which is false and doubly chosen
        values[model.pairs[0].indicator(Relation::Up).0] = 1.0;
        let violated = model
            .milp()
            .violated_constraints(&values, Tolerance::default());
        assert!(violated
            .iter()
            .any(|c| c.tag == ConstraintTag::Logic { i: 0, j: 1 }));
    }

    #[test]
    fn undersized_big_m_is_rejected() {
        let instance = instance();
        let mut bounds = StripBounds::compute(&instance, &BigMConfig::default()).unwrap();
        bounds.big_m.right = bounds.length_upper_bound - 1.0;
        assert!(matches!(
            StripModel::build(&instance, &bounds),
            Err(ModelConstructionError::UndersizedBigM { .. })
        ));
    }

    #[test]
    fn mismatching_bounds_are_rejected() {
        let instance = instance();
        let mut bounds = StripBounds::compute(&instance, &BigMConfig::default()).unwrap();
        bounds.coords.pop();
        assert_eq!(
            StripModel::build(&instance, &bounds).unwrap_err(),
            ModelConstructionError::BoundsMismatch {
                expected: 2,
                found: 3
            }
        );
    }
}
