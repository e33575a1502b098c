use log::{debug, info, warn};

use crate::convert::{negate, transpose};
use crate::domain::solver::LpSolver;
use crate::domain::validate::{check_non_negative, check_objective, validate_problem};
use crate::error::Result;
use crate::models::{InequalityProgram, ProblemDefinition, Solution};

/// The seller's problem: maximize `requirements · y` subject to
/// `constraintsᵀ · y <= costs` and `y >= 0`.
///
/// Expressed for a minimizing solver as `min (-requirements) · y`; the
/// reported profit is the solver objective negated back.
pub struct DualFormulator<'a> {
    solver: &'a dyn LpSolver,
}

impl<'a> DualFormulator<'a> {
    pub fn new(solver: &'a dyn LpSolver) -> Self {
        Self { solver }
    }

    /// Validates the problem and builds the solver-ready arrays. The matrix
    /// has one row per lot and one column per requirement.
    pub fn formulate(problem: &ProblemDefinition) -> Result<InequalityProgram> {
        validate_problem(problem)?;
        Ok(InequalityProgram {
            objective: negate(&problem.requirements),
            matrix: transpose(&problem.constraints, problem.lot_count()),
            bounds: problem.costs.clone(),
        })
    }

    /// Solve for unit prices (shadow prices). The objective of an optimal
    /// solution is the maximal profit.
    pub fn solve(&self, problem: &ProblemDefinition) -> Result<Solution> {
        let program = Self::formulate(problem)?;
        debug!(
            "dual: {} prices x {} lot rows, solver {}",
            program.variable_count(),
            program.constraint_count(),
            self.solver.name()
        );

        let solution = self.solver.solve(&program)?.map_objective(|v| -v);
        match &solution {
            Solution::Optimal { values, objective } => {
                check_non_negative("dual unit price", values);
                check_objective("dual", &problem.requirements, values, *objective);
                info!("dual optimum: total profit {}", objective);
            }
            other => warn!("dual has no optimal solution: {:?}", other.status()),
        }
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formulate_transposes_and_swaps_roles() {
        let problem = ProblemDefinition::new(
            vec![10.0, 12.0, 15.0],
            vec![vec![500.0, 300.0, 800.0], vec![1000.0, 2000.0, 1500.0]],
            vec![100000.0, 200000.0],
        );
        let program = DualFormulator::formulate(&problem).unwrap();
        assert_eq!(program.objective, vec![-100000.0, -200000.0]);
        assert_eq!(
            program.matrix,
            vec![
                vec![500.0, 1000.0],
                vec![300.0, 2000.0],
                vec![800.0, 1500.0],
            ]
        );
        assert_eq!(program.bounds, vec![10.0, 12.0, 15.0]);
    }
}
