use crate::domain::solver::LpSolver;
use crate::domain::solvers::MicrolpSolver;
use crate::error::{Error, Result};

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    Microlp,
    #[cfg(feature = "highs-solver")]
    Highs,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "microlp" => Some(SolverType::Microlp),
            #[cfg(feature = "highs-solver")]
            "highs" => Some(SolverType::Highs),
            _ => None,
        }
    }

    /// Like [`SolverType::from_str`] but reports unknown names as an error.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| Error::UnknownSolver(s.to_string()))
    }

    /// Every backend compiled into this build
    pub fn available() -> Vec<SolverType> {
        vec![
            SolverType::Microlp,
            #[cfg(feature = "highs-solver")]
            SolverType::Highs,
        ]
    }
}

impl Default for SolverType {
    /// HiGHS when compiled in, microlp otherwise
    fn default() -> Self {
        #[cfg(feature = "highs-solver")]
        return SolverType::Highs;

        #[cfg(not(feature = "highs-solver"))]
        return SolverType::Microlp;
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Box<dyn LpSolver> {
    match solver_type {
        SolverType::Microlp => Box::new(MicrolpSolver::new()),
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Box::new(HighsSolver::new()),
    }
}
