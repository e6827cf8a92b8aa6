use std::time::Instant;

use good_lp::solvers::microlp::microlp;
use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable, constraint,
    variable,
};
use itertools::Itertools;
use log::{debug, info};

use crate::model::{Cmp, Domain, LinExpr, MilpModel, Sense};
use crate::solver::{Assignment, MilpSolver, SolverOutput, SolverStatus};

/// [`MilpSolver`] backed by [`good_lp`] with the pure-Rust `microlp` branch-and-bound solver.
///
/// `microlp` only reports success once it has proven optimality, so every successful solve is [`SolverStatus::Optimal`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MicroLpSolver;

impl MilpSolver for MicroLpSolver {
    fn name(&self) -> &str {
        "microlp"
    }

    fn solve(&self, model: &MilpModel) -> SolverOutput {
        let start = Instant::now();

        let mut problem_vars = ProblemVariables::new();
        let vars = model
            .variables()
            .iter()
            .map(|v| {
                let definition = match v.domain {
                    Domain::Binary => variable().binary(),
                    Domain::Continuous => match v.upper {
                        Some(upper) => variable().min(v.lower).max(upper),
                        None => variable().min(v.lower),
                    },
                };
                problem_vars.add(definition.name(v.name.clone()))
            })
            .collect_vec();

        let objective = to_expression(&model.objective().expr, &vars);
        let unsolved = match model.objective().sense {
            Sense::Minimize => problem_vars.minimise(objective),
            Sense::Maximize => problem_vars.maximise(objective),
        };

        let problem = model
            .constraints()
            .iter()
            .fold(unsolved.using(microlp), |problem, c| {
                let lhs = to_expression(&c.lhs, &vars);
                let rhs = c.rhs;
                match c.cmp {
                    Cmp::Le => problem.with(constraint!(lhs <= rhs)),
                    Cmp::Ge => problem.with(constraint!(lhs >= rhs)),
                    Cmp::Eq => problem.with(constraint!(lhs == rhs)),
                }
            });

        debug!("[SOLVER] handing model to microlp: {model}");
        let result = problem.solve();
        let elapsed = start.elapsed();

        match result {
            Ok(solution) => {
                let values = vars.iter().map(|v| solution.value(*v)).collect_vec();
                info!(
                    "[SOLVER] microlp finished in {:.3}ms, objective: {:.6}",
                    elapsed.as_secs_f64() * 1000.0,
                    model.objective().expr.eval(&values)
                );
                SolverOutput::success(SolverStatus::Optimal, Assignment::new(values), elapsed)
            }
            Err(ResolutionError::Infeasible) => {
                SolverOutput::failure(SolverStatus::Infeasible, elapsed)
            }
            Err(ResolutionError::Unbounded) => {
                SolverOutput::failure(SolverStatus::Unbounded, elapsed)
            }
            Err(e) => SolverOutput::failure(SolverStatus::Error(e.to_string()), elapsed),
        }
    }
}

fn to_expression(expr: &LinExpr, vars: &[Variable]) -> Expression {
    expr.terms
        .iter()
        .fold(Expression::from(expr.constant), |acc, (var, coef)| {
            acc + *coef * vars[var.0]
        })
}
