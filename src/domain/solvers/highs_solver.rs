use log::debug;

use crate::convert::dot;
use crate::domain::solver::LpSolver;
use crate::domain::validate::validate_program;
use crate::error::{Error, Result};
use crate::models::{InequalityProgram, Solution};

use ::highs::{ColProblem, HighsModelStatus, Row, Sense};

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }

    /// Convert HiGHS status to a solution tag, or `None` when HiGHS stopped
    /// for any other reason.
    fn convert_status(model_status: HighsModelStatus) -> Option<Solution> {
        match model_status {
            HighsModelStatus::Infeasible => Some(Solution::Infeasible),
            HighsModelStatus::Unbounded => Some(Solution::Unbounded),
            HighsModelStatus::UnboundedOrInfeasible => Some(Solution::NoOptimalSolution),
            _ => None,
        }
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LpSolver for HighsSolver {
    fn solve(&self, program: &InequalityProgram) -> Result<Solution> {
        validate_program(program)?;

        let mut problem = ColProblem::new();

        // First, add all constraint rows
        let rows: Vec<Row> = program
            .bounds
            .iter()
            .map(|&bound| problem.add_row(..=bound))
            .collect();

        // Then one column per variable with its non-zero row entries
        for (col_idx, &cost) in program.objective.iter().enumerate() {
            let row_factors: Vec<(Row, f64)> = program
                .matrix
                .iter()
                .zip(&rows)
                .filter(|(coefficients, _)| coefficients[col_idx] != 0.0)
                .map(|(coefficients, &row)| (row, coefficients[col_idx]))
                .collect();

            problem.add_column(cost, 0.0.., &row_factors);
        }

        let mut model = problem.optimise(Sense::Minimise);
        model.set_option("output_flag", false);
        let solved = model.solve();

        let model_status = solved.status();
        debug!("HiGHS finished with status {:?}", model_status);

        if !matches!(model_status, HighsModelStatus::Optimal) {
            return Self::convert_status(model_status).ok_or_else(|| Error::Solver {
                solver: self.name().to_string(),
                details: format!("unexpected model status {:?}", model_status),
            });
        }

        let values: Vec<f64> = solved.get_solution().columns().to_vec();
        let objective = dot(&program.objective, &values);

        Ok(Solution::Optimal { values, objective })
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
