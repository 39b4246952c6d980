//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing raw puzzle input into shared data.
///
/// This trait defines the shared data type and parsing logic for a solver,
/// providing clean separation between parsing and solving concerns.
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ParseError};
///
/// struct Day0;
///
/// impl AocParser for Day0 {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::Other("expected integer".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate
    /// results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data
    /// - `Vec<&'a str>` or `&'a str` for zero-copy borrowed data when no
    ///   transformation is needed up front
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Core trait that all day solvers implement.
///
/// Extends [`AocParser`] to inherit the `SharedData` type and `parse()`.
/// Each solver handles one calendar day and defines how to solve each of its
/// parts using mutable access to the shared data.
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Day0;
///
/// impl AocParser for Day0 {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::Other("expected integer".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day0 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             other => Err(SolveError::PartNotImplemented(other)),
///         }
///     }
/// }
///
/// let mut shared = Day0::parse("1\n2\n3").unwrap();
/// assert_eq!(Day0::solve_part(&mut shared, 1).unwrap(), "6");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and
    ///   intermediate results)
    /// * `part` - The part number (1, 2, ...)
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving, blanket-implemented for every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects part numbers outside
    /// `1..=PARTS` with [`SolveError::PartOutOfRange`] before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
