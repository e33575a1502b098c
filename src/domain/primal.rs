use log::{debug, info, warn};

use crate::convert::{negate, negate_rows};
use crate::domain::solver::LpSolver;
use crate::domain::validate::{check_non_negative, check_objective, validate_problem};
use crate::error::Result;
use crate::models::{InequalityProgram, ProblemDefinition, Solution};

/// The buyer's problem: minimize `costs · x` subject to
/// `constraints · x >= requirements` and `x >= 0`.
///
/// The solver only accepts `<=` rows, so every constraint row and every
/// requirement is negated. Costs go through unchanged.
pub struct PrimalFormulator<'a> {
    solver: &'a dyn LpSolver,
}

impl<'a> PrimalFormulator<'a> {
    pub fn new(solver: &'a dyn LpSolver) -> Self {
        Self { solver }
    }

    /// Validates the problem and builds the solver-ready arrays.
    pub fn formulate(problem: &ProblemDefinition) -> Result<InequalityProgram> {
        validate_problem(problem)?;
        Ok(InequalityProgram {
            objective: problem.costs.clone(),
            matrix: negate_rows(&problem.constraints),
            bounds: negate(&problem.requirements),
        })
    }

    /// Solve for lot quantities. The objective of an optimal solution is the
    /// minimal total cost.
    pub fn solve(&self, problem: &ProblemDefinition) -> Result<Solution> {
        let program = Self::formulate(problem)?;
        debug!(
            "primal: {} lots x {} requirements, solver {}",
            program.variable_count(),
            program.constraint_count(),
            self.solver.name()
        );

        let solution = self.solver.solve(&program)?;
        match &solution {
            Solution::Optimal { values, objective } => {
                check_non_negative("primal lot quantity", values);
                check_objective("primal", &problem.costs, values, *objective);
                info!("primal optimum: total cost {}", objective);
            }
            other => warn!("primal has no optimal solution: {:?}", other.status()),
        }
        Ok(solution)
    }
}
