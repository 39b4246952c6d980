//! Advent day-puzzle solver framework
//!
//! A small, type-safe framework for the event's day puzzles. Each puzzle is
//! implemented as a solver with its own input parsing and one or more parts.
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`], [`Solver`])
//! - Line-oriented input loading with a typed empty-input failure ([`input`])
//! - Timed, type-erased solver instances ([`SolverInstance`], [`DynSolver`])
//! - A day-indexed registry with plugin collection ([`RegistryBuilder`],
//!   [`SolverPlugin`])
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{
//!     AocParser, ParseError, RegisterableSolver, RegistryBuilder, SolveError, Solver,
//! };
//!
//! struct Sum;
//!
//! impl AocParser for Sum {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
//!         advent_solver::input::lines(input)?
//!             .into_iter()
//!             .map(|l| l.parse::<i64>().map_err(ParseError::invalid_line))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Sum {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i64>().to_string()),
//!             other => Err(SolveError::PartNotImplemented(other)),
//!         }
//!     }
//! }
//!
//! let registry = Sum.register_with(RegistryBuilder::new(), 1).unwrap().build();
//! let mut solver = registry.create_solver(1, "1\n2\n3\n").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! Day solvers normally register themselves by submitting a [`SolverPlugin`]
//! through `inventory`, and the binary collects them with
//! [`RegistryBuilder::register_all_plugins`].

mod error;
pub mod input;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{EmptyInputError, ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    EVENT_DAYS, FIRST_DAY, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory,
    SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, Solver, SolverExt};

// Re-export inventory so solution crates can submit plugins without naming
// the crate themselves
pub use inventory;
