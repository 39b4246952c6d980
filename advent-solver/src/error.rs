//! Error types for the solver library

use thiserror::Error;

/// The input resource yielded no usable lines after trimming the trailing
/// terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("puzzle input is empty")]
pub struct EmptyInputError;

/// Error type for parsing puzzle input
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input had no lines
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
    /// A line did not match the puzzle grammar
    ///
    /// Transparent so the solver's own message reaches the user verbatim.
    #[error(transparent)]
    InvalidLine(Box<dyn std::error::Error + Send + Sync>),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// Wrap a puzzle-specific line error without losing its message.
    pub fn invalid_line<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidLine(Box::new(err))
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error(transparent)]
    SolveFailed(Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap a puzzle-specific failure without losing its message.
    pub fn failed<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SolveFailed(Box::new(err))
    }
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given day
    #[error("No solver registered for day {0}")]
    NotFound(u8),
    /// Day is outside the event calendar
    #[error("Day {0} is outside the event calendar")]
    InvalidDay(u8),
    /// Error occurred during parsing
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a second solver for the same day
    #[error("Duplicate solver registration for day {0}")]
    DuplicateSolver(u8),
    /// Day is outside the event calendar
    #[error("Day {0} is outside the event calendar")]
    InvalidDay(u8),
}
