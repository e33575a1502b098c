use crate::error::Result;
use crate::models::{InequalityProgram, Solution};

/// Common interface for LP backends
pub trait LpSolver: Send + Sync {
    /// Minimize `objective · x` subject to `matrix · x <= bounds` and `x >= 0`.
    ///
    /// Infeasible and unbounded programs are reported as tagged [`Solution`]
    /// variants. `Err` is reserved for the backend itself failing.
    fn solve(&self, program: &InequalityProgram) -> Result<Solution>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
