use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::solver_factory::SolverType;
use crate::domain::validate::OBJECTIVE_TOLERANCE;
use crate::error::{Error, Result};

/// Run settings read from the environment (and `.env`, when loaded by the caller).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub problem_file: PathBuf,
    pub solver: SolverType,
    pub sweep_index: usize,
    pub sweep_from: f64,
    pub sweep_to: f64,
    pub sweep_step: f64,
    pub sweep_parallel: bool,
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            problem_file: PathBuf::from("data/problem.json"),
            solver: SolverType::default(),
            sweep_index: 0,
            sweep_from: 1.0,
            sweep_to: 29.0,
            sweep_step: 1.0,
            sweep_parallel: false,
            tolerance: OBJECTIVE_TOLERANCE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let solver = match lookup("LP_SOLVER") {
            Some(name) => SolverType::parse(&name)?,
            None => defaults.solver,
        };

        Ok(Self {
            problem_file: lookup("LP_PROBLEM_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.problem_file),
            solver,
            sweep_index: parse_or(&lookup, "LP_SWEEP_INDEX", defaults.sweep_index)?,
            sweep_from: parse_or(&lookup, "LP_SWEEP_FROM", defaults.sweep_from)?,
            sweep_to: parse_or(&lookup, "LP_SWEEP_TO", defaults.sweep_to)?,
            sweep_step: parse_or(&lookup, "LP_SWEEP_STEP", defaults.sweep_step)?,
            sweep_parallel: parse_or(&lookup, "LP_SWEEP_PARALLEL", defaults.sweep_parallel)?,
            tolerance: parse_or(&lookup, "LP_TOLERANCE", defaults.tolerance)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| Error::Config {
            key: key.to_string(),
            details: format!("{:?}: {}", raw, e),
        }),
        None => Ok(default),
    }
}
