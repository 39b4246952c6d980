//! Advent day-puzzle solutions
//!
//! One module per day. Each solution submits a
//! [`SolverPlugin`](advent_solver::SolverPlugin) so binaries can collect it
//! through the registry builder without naming days individually.

pub mod days;
