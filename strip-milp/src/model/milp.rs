use std::fmt::{Display, Formatter};

use crate::error::ModelConstructionError;
use crate::model::ConstraintTag;
use crate::util::Tolerance;

/// Index of a variable within a [`MilpModel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    Continuous,
    /// Integer in {0, 1}
    Binary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: String,
    pub domain: Domain,
    pub lower: f64,
    /// `None` means unbounded from above
    pub upper: Option<f64>,
}

/// Affine expression `Σ coef·var + constant`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LinExpr {
    pub terms: Vec<(VarId, f64)>,
    pub constant: f64,
}

impl LinExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, var: VarId, coef: f64) -> Self {
        self.terms.push((var, coef));
        self
    }

    pub fn constant(mut self, constant: f64) -> Self {
        self.constant += constant;
        self
    }

    /// Value of the expression for the given variable values (indexed by [`VarId`]).
    pub fn eval(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|(var, coef)| coef * values[var.0])
            .sum::<f64>()
            + self.constant
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cmp {
    Le,
    Ge,
    Eq,
}

/// Linear constraint `lhs (<=|>=|==) rhs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub tag: ConstraintTag,
    pub lhs: LinExpr,
    pub cmp: Cmp,
    pub rhs: f64,
}

impl Constraint {
    pub fn is_satisfied(&self, values: &[f64], tol: Tolerance) -> bool {
        let lhs = self.lhs.eval(values);
        match self.cmp {
            Cmp::Le => tol.approx_le(lhs, self.rhs),
            Cmp::Ge => tol.approx_ge(lhs, self.rhs),
            Cmp::Eq => tol.approx_eq(lhs, self.rhs),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Objective {
    pub expr: LinExpr,
    pub sense: Sense,
}

/// Solver-agnostic mixed-integer linear program.
/// Immutable once built, create one through [`MilpBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct MilpModel {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    objective: Objective,
}

impl MilpModel {
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.0]
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn n_binaries(&self) -> usize {
        self.variables
            .iter()
            .filter(|v| v.domain == Domain::Binary)
            .count()
    }

    /// All constraints violated by `values` (indexed by [`VarId`]).
    pub fn violated_constraints(&self, values: &[f64], tol: Tolerance) -> Vec<&Constraint> {
        self.constraints
            .iter()
            .filter(|c| !c.is_satisfied(values, tol))
            .collect()
    }
}

impl Display for MilpModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} variables ({} binary), {} constraints",
            self.variables.len(),
            self.n_binaries(),
            self.constraints.len()
        )
    }
}

/// Accumulates variables and constraints, then freezes them into a [`MilpModel`].
#[derive(Debug, Default)]
pub struct MilpBuilder {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
}

impl MilpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn continuous(&mut self, name: String, lower: f64, upper: Option<f64>) -> VarId {
        self.add_variable(Variable {
            name,
            domain: Domain::Continuous,
            lower,
            upper,
        })
    }

    pub fn binary(&mut self, name: String) -> VarId {
        self.add_variable(Variable {
            name,
            domain: Domain::Binary,
            lower: 0.0,
            upper: Some(1.0),
        })
    }

    fn add_variable(&mut self, variable: Variable) -> VarId {
        self.variables.push(variable);
        VarId(self.variables.len() - 1)
    }

    pub fn constrain(&mut self, tag: ConstraintTag, lhs: LinExpr, cmp: Cmp, rhs: f64) {
        self.constraints.push(Constraint {
            tag,
            lhs,
            cmp,
            rhs,
        });
    }

    /// Freezes the model. Fails if a constraint or the objective refers to a variable that was never added.
    pub fn build(self, objective: Objective) -> Result<MilpModel, ModelConstructionError> {
        let n_vars = self.variables.len();
        let unknown = self
            .constraints
            .iter()
            .flat_map(|c| c.lhs.terms.iter().map(move |(v, _)| (c.tag, *v)))
            .chain(
                objective
                    .expr
                    .terms
                    .iter()
                    .map(|(v, _)| (ConstraintTag::Objective, *v)),
            )
            .find(|(_, v)| v.0 >= n_vars);

        if let Some((tag, var)) = unknown {
            return Err(ModelConstructionError::UnknownVariable { tag, var: var.0 });
        }

        Ok(MilpModel {
            variables: self.variables,
            constraints: self.constraints,
            objective,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_evaluation() {
        let expr = LinExpr::new()
            .term(VarId(0), 2.0)
            .term(VarId(2), -1.0)
            .constant(3.0);
        assert_eq!(expr.eval(&[1.0, 100.0, 4.0]), 1.0);
    }

    #[test]
    fn constraint_satisfaction() {
        let c = Constraint {
            tag: ConstraintTag::Global { i: 0 },
            lhs: LinExpr::new().term(VarId(0), 1.0),
            cmp: Cmp::Le,
            rhs: 2.0,
        };
        let tol = Tolerance(1e-6);
        assert!(c.is_satisfied(&[2.0], tol));
        assert!(c.is_satisfied(&[2.0 + 1e-9], tol));
        assert!(!c.is_satisfied(&[2.1], tol));
    }

    #[test]
    fn unknown_variables_are_rejected() {
        let mut builder = MilpBuilder::new();
        let x = builder.continuous("x".to_string(), 0.0, None);
        builder.constrain(
            ConstraintTag::Logic { i: 0, j: 1 },
            LinExpr::new().term(x, 1.0).term(VarId(5), 1.0),
            Cmp::Eq,
            1.0,
        );
        let objective = Objective {
            expr: LinExpr::new().term(x, 1.0),
            sense: Sense::Minimize,
        };
        assert_eq!(
            builder.build(objective).unwrap_err(),
            ModelConstructionError::UnknownVariable {
                tag: ConstraintTag::Logic { i: 0, j: 1 },
                var: 5
            }
        );
    }
}
