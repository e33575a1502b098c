pub mod dual;
pub mod duality;
pub mod primal;
pub mod sensitivity;
pub mod solver;
pub mod solver_factory;
pub mod solvers;
pub mod validate;
