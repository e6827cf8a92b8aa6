use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::warn;

use crate::entities::{PairRelation, Placement, SPInstance};
use crate::extract::Extraction;
use crate::geometry::geo_traits::AlmostCollidesWith;
use crate::geometry::{Rect, Relation};
use crate::util::Tolerance;

/// A single reason why a layout is not a valid strip packing.
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    /// No placement (or one for a different rectangle) at the position of rectangle `id`
    MissingPlacement { id: u64 },
    /// Rectangle leaves the strip or its declared coordinate domain
    OutOfStrip { id: u64, x: f64, y: f64 },
    /// Strip length exceeds `L_up`, the length of all rectangles in a single row
    StripTooLong { length: f64, upper_bound: f64 },
    /// Interiors of `a` and `b` overlap
    Overlap { a: u64, b: u64, area: f64 },
    /// A relation indicator is not within tolerance of 0 or 1
    FractionalIndicator {
        a: u64,
        b: u64,
        relation: Relation,
        value: f64,
    },
    /// The number of relation indicators set for the pair differs from one
    RelationCount { a: u64, b: u64, count: usize },
    /// The chosen relation is not reflected by the positions
    RelationNotHonoured { a: u64, b: u64, relation: Relation },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingPlacement { id } => write!(f, "no placement for rectangle {id}"),
            Violation::OutOfStrip { id, x, y } => {
                write!(f, "rectangle {id} at ({x}, {y}) is outside the strip")
            }
            Violation::StripTooLong {
                length,
                upper_bound,
            } => write!(
                f,
                "strip length {length} exceeds its upper bound {upper_bound}"
            ),
            Violation::Overlap { a, b, area } => {
                write!(f, "rectangles {a} and {b} overlap (area: {area})")
            }
            Violation::FractionalIndicator { a, b, relation, value } => write!(
                f,
                "indicator {relation} of pair ({a}, {b}) is fractional: {value}"
            ),
            Violation::RelationCount { a, b, count } => {
                write!(f, "pair ({a}, {b}) has {count} relations set instead of 1")
            }
            Violation::RelationNotHonoured { a, b, relation } => write!(
                f,
                "pair ({a}, {b}) claims relation {relation}, but the positions disagree"
            ),
        }
    }
}

/// Outcome of validating a layout independently of the solver.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.violations.len() {
            0 => write!(f, "valid"),
            n => write!(
                f,
                "{n} violation(s): {}",
                self.violations.iter().map(|v| v.to_string()).join("; ")
            ),
        }
    }
}

/// Checks a layout against the geometric invariants of the problem:
/// the strip no longer than `L_up`, every rectangle inside the strip and its coordinate domain
/// (`0 <= x <= L_up - L`, `x + L <= lt`, `H <= y <= W`) and no two rectangles overlapping.
pub fn validate_layout(
    instance: &SPInstance,
    strip_width: f64,
    strip_length: f64,
    placements: &[Placement],
    tol: Tolerance,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    let length_upper_bound = instance.total_length();

    if !tol.approx_le(strip_length, length_upper_bound) {
        report.violations.push(Violation::StripTooLong {
            length: strip_length,
            upper_bound: length_upper_bound,
        });
    }

    let placed: Vec<Option<Rect>> = instance
        .rectangles()
        .iter()
        .enumerate()
        .map(|(k, r)| match placements.get(k) {
            Some(p) if p.rect_id == r.id => Some(r.placed_at(p)),
            _ => {
                report
                    .violations
                    .push(Violation::MissingPlacement { id: r.id });
                None
            }
        })
        .collect();

    for (r, rect) in instance.rectangles().iter().zip(placed.iter()) {
        let Some(rect) = rect else { continue };
        let inside = tol.approx_ge(rect.x_min, 0.0)
            && tol.approx_le(rect.x_max, strip_length)
            && tol.approx_le(rect.x_max, length_upper_bound)
            && tol.approx_ge(rect.y_min, 0.0)
            && tol.approx_le(rect.y_max, strip_width);
        if !inside {
            report.violations.push(Violation::OutOfStrip {
                id: r.id,
                x: rect.x_min,
                y: rect.y_max,
            });
        }
    }

    for (i, j) in instance.pairs() {
        if let (Some(ri), Some(rj)) = (placed[i], placed[j]) {
            if ri.almost_collides_with(&rj, tol) {
                report.violations.push(Violation::Overlap {
                    a: instance.rectangle(i).id,
                    b: instance.rectangle(j).id,
                    area: Rect::overlap_area(ri, rj),
                });
            }
        }
    }

    report
}

/// Interprets the relation indicators of `extraction` and validates the whole solution.
///
/// Indicators are rounded to {0, 1} within `binary_tol`. Each pair must resolve to exactly one relation,
/// and that relation must hold for the extracted positions within `geometric_tol`.
/// Returns the resolved relations (of the pairs that could be resolved) together with all violations found.
pub fn validate_extraction(
    instance: &SPInstance,
    strip_width: f64,
    extraction: &Extraction,
    binary_tol: Tolerance,
    geometric_tol: Tolerance,
) -> (Vec<PairRelation>, ValidationReport) {
    let mut report = validate_layout(
        instance,
        strip_width,
        extraction.strip_length,
        &extraction.placements,
        geometric_tol,
    );

    let mut relations = Vec::with_capacity(extraction.indicators.len());
    for pi in &extraction.indicators {
        let (ri, rj) = (instance.rectangle(pi.i), instance.rectangle(pi.j));
        let (a, b) = (ri.id, rj.id);

        let mut chosen = vec![];
        for rel in Relation::ALL {
            let value = pi.values[rel.index()];
            if binary_tol.approx_eq(value, 1.0) {
                chosen.push(rel);
            } else if !binary_tol.approx_eq(value, 0.0) {
                report.violations.push(Violation::FractionalIndicator {
                    a,
                    b,
                    relation: rel,
                    value,
                });
            }
        }

        match chosen.as_slice() {
            [relation] => {
                let honoured = match (
                    extraction.placements.get(pi.i),
                    extraction.placements.get(pi.j),
                ) {
                    (Some(pl_i), Some(pl_j)) => {
                        relation.holds(&ri.placed_at(pl_i), &rj.placed_at(pl_j), geometric_tol)
                    }
                    _ => false,
                };
                if !honoured {
                    report.violations.push(Violation::RelationNotHonoured {
                        a,
                        b,
                        relation: *relation,
                    });
                }
                relations.push(PairRelation {
                    i: a,
                    j: b,
                    relation: *relation,
                });
            }
            other => report.violations.push(Violation::RelationCount {
                a,
                b,
                count: other.len(),
            }),
        }
    }

    if !report.is_valid() {
        warn!("[VAL] solution failed validation: {report}");
    }

    (relations, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Rectangle;
    use crate::extract::PairIndicators;

    fn instance() -> SPInstance {
        SPInstance::new(vec![
            Rectangle::new(1, 4.0, 2.0),
            Rectangle::new(2, 4.0, 2.0),
            Rectangle::new(3, 2.0, 1.0),
        ])
        .unwrap()
    }

    fn extraction(placements: Vec<Placement>, indicators: [[f64; 4]; 3]) -> Extraction {
        let pairs = [(0, 1), (0, 2), (1, 2)];
        Extraction {
            strip_length: 10.0,
            placements,
            indicators: pairs
                .iter()
                .zip(indicators)
                .map(|(&(i, j), values)| PairIndicators { i, j, values })
                .collect(),
        }
    }

    fn valid_placements() -> Vec<Placement> {
        vec![
            Placement::new(1, 0.0, 2.0),
            Placement::new(2, 4.0, 2.0),
            Placement::new(3, 8.0, 1.0),
        ]
    }

    const RIGHT: [f64; 4] = [0.0, 1.0, 0.0, 0.0];

    #[test]
    fn valid_layout() {
        let report = validate_layout(&instance(), 2.0, 10.0, &valid_placements(), Tolerance::default());
        assert!(report.is_valid(), "{report}");
    }

    #[test]
    fn overlap_is_detected() {
        let mut placements = valid_placements();
        placements[1].x = 3.0;
        let report = validate_layout(&instance(), 2.0, 10.0, &placements, Tolerance::default());
        assert_eq!(
            report.violations,
            vec![Violation::Overlap {
                a: 1,
                b: 2,
                area: 2.0
            }]
        );
    }

    #[test]
    fn rectangles_must_stay_inside_the_strip() {
        let mut placements = valid_placements();
        placements[2].x = 8.5;
        placements[0].y = 2.5;
        let report = validate_layout(&instance(), 2.0, 10.0, &placements, Tolerance::default());
        assert_eq!(
            report.violations,
            vec![
                Violation::OutOfStrip {
                    id: 1,
                    x: 0.0,
                    y: 2.5
                },
                Violation::OutOfStrip {
                    id: 3,
                    x: 8.5,
                    y: 1.0
                },
            ]
        );
    }

    #[test]
    fn strip_and_positions_stay_within_the_row_length() {
        //all three in a single row need a length of 10
        let mut placements = valid_placements();
        placements[2].x = 9.0;
        let report = validate_layout(&instance(), 2.0, 12.0, &placements, Tolerance::default());
        assert_eq!(
            report.violations,
            vec![
                Violation::StripTooLong {
                    length: 12.0,
                    upper_bound: 10.0
                },
                Violation::OutOfStrip {
                    id: 3,
                    x: 9.0,
                    y: 1.0
                },
            ]
        );
    }

    #[test]
    fn missing_placements_are_reported() {
        let mut placements = valid_placements();
        placements.pop();
        let report = validate_layout(&instance(), 2.0, 10.0, &placements, Tolerance::default());
        assert_eq!(report.violations, vec![Violation::MissingPlacement { id: 3 }]);
    }

    #[test]
    fn relations_are_resolved() {
        let extraction = extraction(
            valid_placements(),
            [RIGHT, [0.0, 1.0 - 1e-9, 0.0, 1e-9], RIGHT],
        );
        let tol = Tolerance::default();
        let (relations, report) = validate_extraction(&instance(), 2.0, &extraction, tol, tol);
        assert!(report.is_valid(), "{report}");
        assert_eq!(
            relations.iter().map(|pr| (pr.i, pr.j, pr.relation)).collect_vec(),
            vec![
                (1, 2, Relation::Right),
                (1, 3, Relation::Right),
                (2, 3, Relation::Right)
            ]
        );
    }

    #[test]
    fn fractional_indicators_are_reported() {
        let extraction = extraction(valid_placements(), [RIGHT, [0.0, 0.5, 0.0, 0.5], RIGHT]);
        let tol = Tolerance::default();
        let (relations, report) = validate_extraction(&instance(), 2.0, &extraction, tol, tol);
        assert_eq!(relations.len(), 2);
        assert_eq!(
            report.violations,
            vec![
                Violation::FractionalIndicator {
                    a: 1,
                    b: 3,
                    relation: Relation::Right,
                    value: 0.5
                },
                Violation::FractionalIndicator {
                    a: 1,
                    b: 3,
                    relation: Relation::Left,
                    value: 0.5
                },
                Violation::RelationCount {
                    a: 1,
                    b: 3,
                    count: 0
                },
            ]
        );
    }

    #[test]
    fn exactly_one_relation_per_pair() {
        let extraction = extraction(valid_placements(), [RIGHT, [1.0, 1.0, 0.0, 0.0], RIGHT]);
        let tol = Tolerance::default();
        let (_, report) = validate_extraction(&instance(), 2.0, &extraction, tol, tol);
        assert_eq!(
            report.violations,
            vec![Violation::RelationCount {
                a: 1,
                b: 3,
                count: 2
            }]
        );
    }

    #[test]
    fn chosen_relation_must_match_positions() {
        // 3 is right of 1, but the indicators claim it is to the left
        let extraction = extraction(valid_placements(), [RIGHT, [0.0, 0.0, 0.0, 1.0], RIGHT]);
        let tol = Tolerance::default();
        let (_, report) = validate_extraction(&instance(), 2.0, &extraction, tol, tol);
        assert_eq!(
            report.violations,
            vec![Violation::RelationNotHonoured {
                a: 1,
                b: 3,
                relation: Relation::Left
            }]
        );
        assert!(report.to_string().starts_with("1 violation(s)"));
    }
}
