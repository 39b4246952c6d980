//! Error types for the CLI

use advent_solver::{RegistrationError, SolverError};
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Plugin registration failed
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// One or more solver parts failed; details were already reported
    #[error("{0} solver part(s) failed")]
    SolverFailures(usize),
}

/// Input-store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// No input file on disk for the requested day
    #[error("no input file at {}", .0.display())]
    Missing(PathBuf),

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors from running a single work item
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input load failed
    #[error("Input load failed for day {day}: {source}")]
    InputLoad {
        day: u8,
        #[source]
        source: StoreError,
    },

    /// Solver failed to parse or solve
    ///
    /// Transparent so the puzzle's own message reaches the user verbatim.
    #[error(transparent)]
    Solver(#[from] SolverError),
}
