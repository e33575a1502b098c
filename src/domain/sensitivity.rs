use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::domain::dual::DualFormulator;
use crate::domain::primal::PrimalFormulator;
use crate::domain::solver::LpSolver;
use crate::domain::validate::validate_problem;
use crate::error::{Error, Result};
use crate::models::{ProblemDefinition, Solution};

/// Result of one sweep value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    pub value: f64,
    pub primal: Solution,
    pub dual: Solution,
}

/// Candidate values `from, from + step, ...` up to and including `to`.
pub fn value_range(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    for (key, bound) in [("sweep from", from), ("sweep to", to)] {
        if !bound.is_finite() {
            return Err(Error::Config {
                key: key.to_string(),
                details: format!("must be a finite number, got {}", bound),
            });
        }
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(Error::Config {
            key: "sweep step".to_string(),
            details: format!("must be a positive number, got {}", step),
        });
    }
    let mut values = Vec::new();
    let mut i = 0usize;
    loop {
        let value = from + step * i as f64;
        // Slack so that `to` survives rounding in `step * i`.
        if value > to + step * 1e-9 {
            break;
        }
        values.push(value);
        i += 1;
    }
    Ok(values)
}

/// Re-solves primal and dual once per candidate value of `costs[index]`.
///
/// Results come back in the order of `values`. Infeasible or unbounded points
/// are kept as tagged solutions and do not stop the sweep; shape errors are
/// reported before any solve.
pub fn sweep_cost(
    problem: &ProblemDefinition,
    index: usize,
    values: &[f64],
    solver: &dyn LpSolver,
    parallel: bool,
) -> Result<Vec<SweepPoint>> {
    validate_problem(problem)?;
    if index >= problem.lot_count() {
        return Err(Error::shape("cost index", problem.lot_count(), index));
    }
    let variants = values
        .iter()
        .map(|&value| problem.with_cost(index, value))
        .collect::<Result<Vec<_>>>()?;

    info!(
        "sweeping cost {} over {} values with {}",
        index,
        values.len(),
        solver.name()
    );

    let solved = if parallel && variants.len() > 1 {
        solve_parallel(&variants, solver)?
    } else {
        variants
            .iter()
            .map(|variant| solve_point(variant, solver))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(values
        .iter()
        .zip(solved)
        .map(|(&value, (primal, dual))| SweepPoint {
            value,
            primal,
            dual,
        })
        .collect())
}

fn solve_point(problem: &ProblemDefinition, solver: &dyn LpSolver) -> Result<(Solution, Solution)> {
    let primal = PrimalFormulator::new(solver).solve(problem)?;
    let dual = DualFormulator::new(solver).solve(problem)?;
    Ok((primal, dual))
}

/// Solves every variant on the rayon pool; `collect` keeps input order.
fn solve_parallel(
    variants: &[ProblemDefinition],
    solver: &dyn LpSolver,
) -> Result<Vec<(Solution, Solution)>> {
    debug!(
        "parallel sweep of {} variants on {} threads",
        variants.len(),
        rayon::current_num_threads()
    );
    variants
        .par_iter()
        .map(|variant| solve_point(variant, solver))
        .collect::<Result<Vec<_>>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_includes_both_ends() {
        assert_eq!(value_range(1.0, 3.0, 1.0).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(value_range(1.0, 29.0, 1.0).unwrap().len(), 29);
        assert_eq!(value_range(0.0, 0.3, 0.1).unwrap().len(), 4);
    }

    #[test]
    fn test_value_range_given_empty_interval_should_return_nothing() {
        assert!(value_range(5.0, 1.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_value_range_given_zero_step_should_return_error() {
        assert!(matches!(
            value_range(1.0, 3.0, 0.0),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_value_range_given_non_finite_bound_should_return_error() {
        assert!(matches!(
            value_range(1.0, f64::INFINITY, 1.0),
            Err(Error::Config { key, .. }) if key == "sweep to"
        ));
        assert!(matches!(
            value_range(f64::NAN, 3.0, 1.0),
            Err(Error::Config { key, .. }) if key == "sweep from"
        ));
        assert!(matches!(
            value_range(f64::NEG_INFINITY, 3.0, 1.0),
            Err(Error::Config { .. })
        ));
    }
}
