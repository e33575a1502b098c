use log::{info, warn};
use serde::Serialize;

use crate::domain::dual::DualFormulator;
use crate::domain::primal::PrimalFormulator;
use crate::domain::solver::LpSolver;
use crate::domain::validate::{validate_problem, within_tolerance};
use crate::error::Result;
use crate::models::{ProblemDefinition, Solution};

/// Primal and dual solved on the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualityReport {
    pub primal: Solution,
    pub dual: Solution,
    /// `primal cost - dual profit`, when both are optimal
    pub gap: Option<f64>,
    /// False when both are optimal but the gap exceeds the tolerance
    pub consistent: bool,
}

/// Solves both problems and checks strong duality.
///
/// A gap beyond `tolerance` (relative to the objective once it exceeds one)
/// points at a formulation bug; it is logged as a warning and flagged in the
/// report rather than turned into an error.
pub fn solve_pair(
    problem: &ProblemDefinition,
    solver: &dyn LpSolver,
    tolerance: f64,
) -> Result<DualityReport> {
    validate_problem(problem)?;

    let primal = PrimalFormulator::new(solver).solve(problem)?;
    let dual = DualFormulator::new(solver).solve(problem)?;

    let (gap, consistent) = match (primal.objective(), dual.objective()) {
        (Some(cost), Some(profit)) => {
            let consistent = within_tolerance(cost, profit, tolerance);
            if consistent {
                info!("strong duality holds: cost {} = profit {}", cost, profit);
            } else {
                warn!(
                    "duality gap {} exceeds tolerance {}: cost {}, profit {}",
                    cost - profit,
                    tolerance,
                    cost,
                    profit
                );
            }
            (Some(cost - profit), consistent)
        }
        _ => (None, true),
    };

    Ok(DualityReport {
        primal,
        dual,
        gap,
        consistent,
    })
}
