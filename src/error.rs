use thiserror::Error;

/// Result type for formulation, loading and solve operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before or around a solve.
///
/// Infeasible and unbounded programs are not errors; they come back as
/// tagged [`Solution`](crate::models::Solution) variants.
#[derive(Error, Debug)]
pub enum Error {
    /// Input dimensions disagree
    #[error("shape mismatch in {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    /// No lots or no requirements
    #[error("{0} must not be empty")]
    Empty(String),

    /// Negative or non-finite coefficient
    #[error("invalid value in {what} at {index}: {value}")]
    InvalidValue {
        what: String,
        index: usize,
        value: f64,
    },

    /// Item labels do not line up with the requirements
    #[error("invalid item catalog: {0}")]
    Catalog(String),

    /// The backend failed for a reason other than infeasibility or unboundedness
    #[error("solver {solver} failed: {details}")]
    Solver { solver: String, details: String },

    /// No backend with this name is compiled in
    #[error("unknown solver: {0}")]
    UnknownSolver(String),

    /// Invalid configuration value
    #[error("invalid configuration for {key}: {details}")]
    Config { key: String, details: String },

    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse problem file: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn shape(what: impl Into<String>, expected: usize, found: usize) -> Self {
        Error::ShapeMismatch {
            what: what.into(),
            expected,
            found,
        }
    }
}
