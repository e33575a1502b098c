use log::debug;

use crate::domain::solver::LpSolver;
use crate::domain::validate::{validate_program, NON_NEGATIVITY_TOLERANCE};
use crate::error::{Error, Result};
use crate::models::{InequalityProgram, Solution};

use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};

/// Pure-Rust simplex backend, always available.
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        MicrolpSolver
    }
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LpSolver for MicrolpSolver {
    fn solve(&self, program: &InequalityProgram) -> Result<Solution> {
        validate_program(program)?;

        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<Variable> = program
            .objective
            .iter()
            .map(|&cost| problem.add_var(cost, (0.0, f64::INFINITY)))
            .collect();

        for (coefficients, &bound) in program.matrix.iter().zip(&program.bounds) {
            let terms: Vec<(Variable, f64)> = vars
                .iter()
                .copied()
                .zip(coefficients.iter().copied())
                .filter(|(_, coeff)| *coeff != 0.0)
                .collect();

            // An all-zero row reads `0 <= bound`; decide it here instead of
            // handing microlp an empty expression.
            if terms.is_empty() {
                if bound < -NON_NEGATIVITY_TOLERANCE {
                    debug!("empty row with bound {} makes the program infeasible", bound);
                    return Ok(Solution::Infeasible);
                }
                continue;
            }

            problem.add_constraint(&terms, ComparisonOp::Le, bound);
        }

        match problem.solve() {
            Ok(solution) => {
                let values: Vec<f64> = vars.iter().map(|&var| solution[var]).collect();
                Ok(Solution::Optimal {
                    values,
                    objective: solution.objective(),
                })
            }
            Err(microlp::Error::Infeasible) => Ok(Solution::Infeasible),
            Err(microlp::Error::Unbounded) => Ok(Solution::Unbounded),
            #[allow(unreachable_patterns)]
            Err(other) => Err(Error::Solver {
                solver: self.name().to_string(),
                details: other.to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}
