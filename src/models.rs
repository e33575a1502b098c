use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One cost per lot.
pub type CostVector = Vec<f64>;

/// Row `i`, column `j`: contribution of one unit of lot `j` toward requirement `i`.
pub type ConstraintMatrix = Vec<Vec<f64>>;

/// Minimum total contribution needed per requirement.
pub type RequirementVector = Vec<f64>;

/// The three inputs shared by the primal and the dual.
///
/// Built once per run and injected into the formulators. Sweeps derive a
/// fresh copy with [`ProblemDefinition::with_cost`] instead of mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDefinition {
    pub costs: CostVector,
    pub constraints: ConstraintMatrix,
    pub requirements: RequirementVector,
}

impl ProblemDefinition {
    pub fn new(
        costs: CostVector,
        constraints: ConstraintMatrix,
        requirements: RequirementVector,
    ) -> Self {
        Self {
            costs,
            constraints,
            requirements,
        }
    }

    /// Number of lots (N)
    pub fn lot_count(&self) -> usize {
        self.costs.len()
    }

    /// Number of requirements (M)
    pub fn requirement_count(&self) -> usize {
        self.requirements.len()
    }

    /// Copy of this problem with `costs[index]` replaced by `value`.
    pub fn with_cost(&self, index: usize, value: f64) -> Result<Self> {
        if index >= self.costs.len() {
            return Err(Error::shape("cost index", self.costs.len(), index));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidValue {
                what: "costs".to_string(),
                index,
                value,
            });
        }
        let mut costs = self.costs.clone();
        costs[index] = value;
        Ok(Self {
            costs,
            constraints: self.constraints.clone(),
            requirements: self.requirements.clone(),
        })
    }
}

/// Solver-ready arrays: minimize `objective · x` subject to
/// `matrix · x <= bounds` and `x >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct InequalityProgram {
    pub objective: Vec<f64>,
    pub matrix: Vec<Vec<f64>>,
    pub bounds: Vec<f64>,
}

impl InequalityProgram {
    pub fn variable_count(&self) -> usize {
        self.objective.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.bounds.len()
    }
}

/// Outcome tag of a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
    /// The backend could not tell infeasible from unbounded
    NoOptimalSolution,
}

/// A solved program: the optimal point with its objective, or a failure tag
/// carrying nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Solution {
    Optimal { values: Vec<f64>, objective: f64 },
    Infeasible,
    Unbounded,
    NoOptimalSolution,
}

impl Solution {
    pub fn status(&self) -> Status {
        match self {
            Solution::Optimal { .. } => Status::Optimal,
            Solution::Infeasible => Status::Infeasible,
            Solution::Unbounded => Status::Unbounded,
            Solution::NoOptimalSolution => Status::NoOptimalSolution,
        }
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, Solution::Optimal { .. })
    }

    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Solution::Optimal { values, .. } => Some(values),
            _ => None,
        }
    }

    pub fn objective(&self) -> Option<f64> {
        match self {
            Solution::Optimal { objective, .. } => Some(*objective),
            _ => None,
        }
    }

    /// Applies `f` to the objective of an optimal solution.
    pub(crate) fn map_objective(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Solution::Optimal { values, objective } => Solution::Optimal {
                values,
                objective: f(objective),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_cost_replaces_single_component() {
        let problem = ProblemDefinition::new(vec![1.0, 2.0], vec![vec![1.0, 1.0]], vec![3.0]);
        let varied = problem.with_cost(1, 7.5).unwrap();
        assert_eq!(varied.costs, vec![1.0, 7.5]);
        assert_eq!(problem.costs, vec![1.0, 2.0]);
        assert_eq!(varied.constraints, problem.constraints);
    }

    #[test]
    fn test_with_cost_given_out_of_range_index_should_return_error() {
        let problem = ProblemDefinition::new(vec![1.0], vec![vec![1.0]], vec![1.0]);
        assert!(matches!(
            problem.with_cost(1, 2.0),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(matches!(
            problem.with_cost(0, -2.0),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_solution_serializes_with_status_tag() {
        let json = serde_json::to_value(Solution::Infeasible).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "infeasible" }));

        let json = serde_json::to_value(Solution::Optimal {
            values: vec![1.0],
            objective: 2.0,
        })
        .unwrap();
        assert_eq!(json["status"], "optimal");
        assert_eq!(json["objective"], 2.0);
    }
}
