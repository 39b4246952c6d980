//! Demonstrates plugin-based solver registration.
//!
//! Run with: `cargo run -p advent-solver --example plugin_system`

use advent_solver::{
    AocParser, ParseError, RegistryBuilder, SolveError, Solver, SolverPlugin, input,
};

struct LongestLine;

impl AocParser for LongestLine {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(raw: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input::lines(raw)?)
    }
}

impl Solver for LongestLine {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.iter().map(|l| l.len()).max().unwrap_or(0).to_string()),
            other => Err(SolveError::PartNotImplemented(other)),
        }
    }
}

advent_solver::inventory::submit! {
    SolverPlugin { day: 2, solver: &LongestLine, tags: &["demo"] }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();

    let mut solver = registry.create_solver(2, "ab\nabcd\nabc\n")?;
    let result = solver.solve(1)?;
    println!("Longest line: {}", result.answer);

    Ok(())
}
