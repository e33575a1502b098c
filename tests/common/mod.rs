#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use lp_duality::{
    create_solver, Error, InequalityProgram, LpSolver, ProblemDefinition, Result, Solution,
    SolverType,
};

/// Every backend compiled into this build, boxed.
pub fn solvers() -> Vec<Box<dyn LpSolver>> {
    SolverType::available().into_iter().map(create_solver).collect()
}

pub fn scenario() -> ProblemDefinition {
    ProblemDefinition::new(
        vec![10.0, 12.0, 15.0],
        vec![
            vec![500.0, 300.0, 800.0],
            vec![1000.0, 2000.0, 1500.0],
            vec![10.0, 20.0, 15.0],
            vec![100.0, 80.0, 15.0],
            vec![80.0, 120.0, 200.0],
        ],
        vec![100000.0, 200000.0, 100.0, 400.0, 400.0],
    )
}

/// Minimal cost of [`scenario`]: 200/23 of lot 2 and 2800/23 of lot 3.
pub const SCENARIO_COST: f64 = 44400.0 / 23.0;

/// Requirement 3 cannot be met: no lot contributes to it.
pub fn unreachable_requirement() -> ProblemDefinition {
    ProblemDefinition::new(
        vec![2.0, 3.0],
        vec![vec![1.0, 1.0], vec![0.0, 0.0]],
        vec![4.0, 1.0],
    )
}

/// Counts calls and delegates to the wrapped backend.
pub struct CountingSolver {
    inner: Box<dyn LpSolver>,
    pub calls: AtomicUsize,
}

impl CountingSolver {
    pub fn new(inner: Box<dyn LpSolver>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LpSolver for CountingSolver {
    fn solve(&self, program: &InequalityProgram) -> Result<Solution> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.solve(program)
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Backend that always fails.
pub struct FailingSolver;

impl LpSolver for FailingSolver {
    fn solve(&self, _program: &InequalityProgram) -> Result<Solution> {
        Err(Error::Solver {
            solver: self.name().to_string(),
            details: "out of licences".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Delegates to the wrapped backend and shifts every optimal objective by `offset`.
pub struct SkewedSolver {
    inner: Box<dyn LpSolver>,
    offset: f64,
}

impl SkewedSolver {
    pub fn new(inner: Box<dyn LpSolver>, offset: f64) -> Self {
        Self { inner, offset }
    }
}

impl LpSolver for SkewedSolver {
    fn solve(&self, program: &InequalityProgram) -> Result<Solution> {
        Ok(match self.inner.solve(program)? {
            Solution::Optimal { values, objective } => Solution::Optimal {
                values,
                objective: objective + self.offset,
            },
            other => other,
        })
    }

    fn name(&self) -> &str {
        "skewed"
    }
}
