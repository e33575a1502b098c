//! # lp-duality
//!
//! Primal/dual formulation of a buy-lots-to-meet-demand linear program.
//!
//! The primal minimizes the buyer's cost `costs · x` subject to
//! `constraints · x >= requirements`; the dual maximizes the seller's profit
//! `requirements · y` subject to `constraintsᵀ · y <= costs`. Both are handed
//! to an external LP backend through the [`LpSolver`] trait.
//!
//! ## Example
//!
//! ```no_run
//! use lp_duality::{create_solver, solve_pair, ProblemDefinition, SolverType};
//!
//! let problem = ProblemDefinition::new(
//!     vec![10.0, 12.0, 15.0],
//!     vec![vec![500.0, 300.0, 800.0], vec![1000.0, 2000.0, 1500.0]],
//!     vec![100000.0, 200000.0],
//! );
//! let solver = create_solver(SolverType::default());
//! let report = solve_pair(&problem, solver.as_ref(), 1e-6)?;
//! println!("cost {:?}, profit {:?}", report.primal.objective(), report.dual.objective());
//! # Ok::<(), lp_duality::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod models;
pub mod problem;
pub mod report;

pub use catalog::{ItemBenefit, ItemCatalog};
pub use config::Config;
pub use domain::dual::DualFormulator;
pub use domain::duality::{solve_pair, DualityReport};
pub use domain::primal::PrimalFormulator;
pub use domain::sensitivity::{sweep_cost, value_range, SweepPoint};
pub use domain::solver::LpSolver;
pub use domain::solver_factory::{create_solver, SolverType};
pub use error::{Error, Result};
pub use models::{
    ConstraintMatrix, CostVector, InequalityProgram, ProblemDefinition, RequirementVector,
    Solution, Status,
};
pub use problem::{LoadedProblem, ProblemBuilder};
pub use report::Report;
