use log::{debug, info};

use crate::bounds::StripBounds;
use crate::entities::{Placement, SPInstance, SPSolution, SolveQuality};
use crate::error::PackError;
use crate::extract::extract;
use crate::model::StripModel;
use crate::solver::{MicroLpSolver, MilpSolver, SolverStatus, solve_with_time_limit};
use crate::util::PackerConfig;
use crate::util::assertions::solution_is_valid;
use crate::validate::validate_extraction;

/// Solves strip packing instances to optimality through the disjunctive Big-M formulation.
///
/// The pipeline is: bounds, model construction, solve, extraction and finally an independent validation of the layout.
/// A layout is only ever handed out after it passed validation.
#[derive(Clone, Debug)]
pub struct StripPacker<S = MicroLpSolver> {
    pub config: PackerConfig,
    solver: S,
}

impl StripPacker<MicroLpSolver> {
    pub fn new(config: PackerConfig) -> Self {
        Self::with_solver(config, MicroLpSolver)
    }
}

impl<S> StripPacker<S>
where
    S: MilpSolver + Clone + Send + 'static,
{
    pub fn with_solver(config: PackerConfig, solver: S) -> Self {
        Self { config, solver }
    }

    pub fn solve(&self, instance: &SPInstance) -> Result<SPSolution, PackError> {
        let bounds = StripBounds::compute(instance, &self.config.big_m)?;
        let solution = match instance.n_rectangles() {
            1 => self.place_single(instance, &bounds),
            _ => self.solve_milp(instance, &bounds)?,
        };

        debug_assert!(solution_is_valid(
            instance,
            &solution,
            self.config.geometric_tolerance
        ));

        info!(
            "[PACK] packed {} rectangles in a strip of length {:.3} ({:?}, density: {:.3}%)",
            instance.n_rectangles(),
            solution.strip_length,
            solution.quality,
            solution.density(instance) * 100.0
        );

        Ok(solution)
    }

    /// A single rectangle needs no model: it sits in the upper-left corner of the strip.
    fn place_single(&self, instance: &SPInstance, bounds: &StripBounds) -> SPSolution {
        let rect = instance.rectangle(0);
        debug!("[PACK] single rectangle {}, placing it without a solver", rect.id);
        SPSolution {
            strip_width: bounds.strip_width,
            strip_length: bounds.length_upper_bound,
            placements: vec![Placement::new(rect.id, 0.0, rect.height)],
            relations: vec![],
            quality: SolveQuality::Trivial,
            solve_time: Default::default(),
        }
    }

    fn solve_milp(
        &self,
        instance: &SPInstance,
        bounds: &StripBounds,
    ) -> Result<SPSolution, PackError> {
        let model = StripModel::build(instance, bounds)?;

        info!(
            "[PACK] solving with {} (time limit: {:?})",
            self.solver.name(),
            self.config.time_limit()
        );
        let output = solve_with_time_limit(&self.solver, model.milp(), self.config.time_limit());

        let quality = match output.status {
            SolverStatus::Optimal => SolveQuality::Optimal,
            SolverStatus::Feasible => SolveQuality::Feasible,
            SolverStatus::Infeasible => return Err(PackError::Infeasible),
            SolverStatus::Unbounded => return Err(PackError::Unbounded),
            SolverStatus::Timeout => {
                return Err(PackError::Timeout {
                    limit: self.config.time_limit().unwrap_or(output.elapsed),
                });
            }
            SolverStatus::Error(msg) => return Err(PackError::Solver(msg)),
        };

        let assignment = output.assignment.ok_or_else(|| {
            PackError::Solver(format!(
                "{} reported {:?} without an assignment",
                self.solver.name(),
                quality
            ))
        })?;

        let extraction = extract(&model, instance, &assignment)?;
        let (relations, report) = validate_extraction(
            instance,
            bounds.strip_width,
            &extraction,
            self.config.binary_tolerance,
            self.config.geometric_tolerance,
        );
        if !report.is_valid() {
            return Err(PackError::ValidationMismatch(report));
        }

        Ok(SPSolution {
            strip_width: bounds.strip_width,
            strip_length: extraction.strip_length,
            placements: extraction.placements,
            relations,
            quality,
            solve_time: output.elapsed,
        })
    }
}
