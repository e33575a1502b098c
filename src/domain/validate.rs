use log::warn;

use crate::convert::dot;
use crate::error::{Error, Result};
use crate::models::{InequalityProgram, ProblemDefinition};

/// Lower bound a returned decision component may reach before it counts as negative.
pub const NON_NEGATIVITY_TOLERANCE: f64 = 1e-7;

/// Default relative tolerance for objective and duality checks.
pub const OBJECTIVE_TOLERANCE: f64 = 1e-6;

/// Checks that costs, constraints and requirements agree on N and M and that
/// every entry is finite and non-negative.
pub fn validate_problem(problem: &ProblemDefinition) -> Result<()> {
    let lots = problem.lot_count();
    let requirements = problem.requirement_count();

    if lots == 0 {
        return Err(Error::Empty("costs".to_string()));
    }
    if requirements == 0 {
        return Err(Error::Empty("requirements".to_string()));
    }
    if problem.constraints.len() != requirements {
        return Err(Error::shape(
            "constraint rows",
            requirements,
            problem.constraints.len(),
        ));
    }
    for (i, row) in problem.constraints.iter().enumerate() {
        if row.len() != lots {
            return Err(Error::shape(format!("constraint row {}", i), lots, row.len()));
        }
    }

    validate_entries("costs", &problem.costs)?;
    validate_entries("requirements", &problem.requirements)?;
    for (i, row) in problem.constraints.iter().enumerate() {
        validate_entries(&format!("constraint row {}", i), row)?;
    }

    Ok(())
}

fn validate_entries(what: &str, values: &[f64]) -> Result<()> {
    match values
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        Some((index, &value)) => Err(Error::InvalidValue {
            what: what.to_string(),
            index,
            value,
        }),
        None => Ok(()),
    }
}

/// Checks that a solver-ready program is rectangular and consistent.
pub fn validate_program(program: &InequalityProgram) -> Result<()> {
    let n = program.variable_count();
    if program.matrix.len() != program.constraint_count() {
        return Err(Error::shape(
            "inequality rows",
            program.constraint_count(),
            program.matrix.len(),
        ));
    }
    for (i, row) in program.matrix.iter().enumerate() {
        if row.len() != n {
            return Err(Error::shape(format!("inequality row {}", i), n, row.len()));
        }
    }
    Ok(())
}

/// Returns false and warns when any component is below `-NON_NEGATIVITY_TOLERANCE`.
pub fn check_non_negative(what: &str, values: &[f64]) -> bool {
    let mut ok = true;
    for (i, &v) in values.iter().enumerate() {
        if v < -NON_NEGATIVITY_TOLERANCE {
            warn!("{} component {} is negative: {}", what, i, v);
            ok = false;
        }
    }
    ok
}

/// True when `a` and `b` agree within `tolerance`, relative to their magnitude
/// once that exceeds one.
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

/// Returns false and warns when `objective` differs from `coefficients · values`.
pub fn check_objective(what: &str, coefficients: &[f64], values: &[f64], objective: f64) -> bool {
    let expected = dot(coefficients, values);
    if within_tolerance(expected, objective, OBJECTIVE_TOLERANCE) {
        true
    } else {
        warn!(
            "{} objective {} does not match coefficients . values = {}",
            what, objective, expected
        );
        false
    }
}
