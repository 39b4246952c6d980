//! Day 1: a 100-position dial lock.
//!
//! Each input line rotates the dial left or right by some distance; the
//! password is how many times the dial lands exactly on position 0.

use std::fmt;
use std::str::FromStr;

use advent_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin, input};
use thiserror::Error;

/// Positions on the dial.
const DIAL_POSITIONS: i64 = 100;
/// The dial starts halfway around.
const START_POSITION: i64 = 50;

pub struct Day1;

advent_solver::inventory::submit! {
    SolverPlugin { day: 1, solver: &Day1, tags: &["dial", "fold"] }
}

/// Rotation direction of a dial step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign applied to the distance when the step is folded into the dial.
    fn coefficient(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Left => "L",
            Direction::Right => "R",
        })
    }
}

/// A line that does not match the `L<number>`/`R<number>` grammar.
///
/// Carries the offending line verbatim so the message can quote it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid dial step provided: {0}. Expected L<number> or R<number>, examples: L60, R48.")]
pub struct InvalidStepError(String);

/// One validated rotation instruction: a direction plus a strictly positive
/// distance. Either both fields validate or the line is rejected whole; no
/// partial steps exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialStep {
    direction: Direction,
    distance: u32,
}

impl DialStep {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }
}

impl FromStr for DialStep {
    type Err = InvalidStepError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidStepError(line.to_string());
        let (direction, distance) = line.split_at_checked(1).ok_or_else(invalid)?;
        let direction = match direction {
            "L" => Direction::Left,
            "R" => Direction::Right,
            _ => return Err(invalid()),
        };
        // u32 rejects fractions, signs and junk; zero is rejected separately
        // because the grammar wants a strictly positive distance.
        let distance: u32 = distance.parse().map_err(|_| invalid())?;
        if distance == 0 {
            return Err(invalid());
        }
        Ok(DialStep {
            direction,
            distance,
        })
    }
}

impl fmt::Display for DialStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.distance)
    }
}

/// Fold state for the dial loop.
///
/// Applying a step produces a fresh state value; `dial` stays in `[0, 100)`
/// and `password` never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopState {
    dial: i64,
    password: u64,
}

impl LoopState {
    /// State at the start of a run: dial at 50, password count at zero.
    pub fn start() -> Self {
        LoopState {
            dial: START_POSITION,
            password: 0,
        }
    }

    /// Fold one step into the state, producing the next state.
    ///
    /// The truncating remainder may be negative after a left rotation and is
    /// shifted back into range. Landing exactly on zero bumps the password.
    pub fn step(self, step: DialStep) -> LoopState {
        let raw = (self.dial + step.direction.coefficient() * i64::from(step.distance))
            % DIAL_POSITIONS;
        LoopState {
            dial: if raw < 0 { raw + DIAL_POSITIONS } else { raw },
            password: if raw == 0 { self.password + 1 } else { self.password },
        }
    }

    /// Current dial position, in `[0, 100)`.
    pub fn dial(&self) -> i64 {
        self.dial
    }

    /// Times the dial has landed on zero so far.
    pub fn password(&self) -> u64 {
        self.password
    }
}

impl AocParser for Day1 {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(raw: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input::lines(raw)?)
    }
}

impl Solver for Day1 {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                // Decode-and-fold in one pass; the first bad line aborts the
                // whole fold and no partial count survives.
                let end = shared
                    .iter()
                    .try_fold(LoopState::start(), |state, line| {
                        line.parse::<DialStep>().map(|step| state.step(step))
                    })
                    .map_err(SolveError::failed)?;
                Ok(end.password().to_string())
            }
            other => Err(SolveError::PartNotImplemented(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(raw: &str) -> Result<String, SolveError> {
        let mut shared = Day1::parse(raw).expect("parse");
        Day1::solve_part(&mut shared, 1)
    }

    #[test]
    fn nominal_run_yields_password_3() {
        let raw = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";
        assert_eq!(solve(raw).unwrap(), "3");
    }

    #[test]
    fn empty_input_fails_at_parse() {
        assert!(matches!(
            Day1::parse(""),
            Err(ParseError::EmptyInput(_))
        ));
    }

    #[test]
    fn bad_direction_message_is_exact() {
        let err = "S48".parse::<DialStep>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid dial step provided: S48. Expected L<number> or R<number>, examples: L60, R48."
        );
    }

    #[test]
    fn bad_distance_message_is_exact() {
        let err = "L5.12".parse::<DialStep>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid dial step provided: L5.12. Expected L<number> or R<number>, examples: L60, R48."
        );
    }

    #[test]
    fn rejected_steps() {
        for line in ["", "L", "R", "L0", "R-5", "L 5", "48", "LR4"] {
            assert!(line.parse::<DialStep>().is_err(), "accepted {:?}", line);
        }
    }

    #[test]
    fn leading_zeros_are_accepted() {
        let step = "L007".parse::<DialStep>().unwrap();
        assert_eq!(step.direction(), Direction::Left);
        assert_eq!(step.distance(), 7);
    }

    #[test]
    fn first_bad_line_aborts_the_fold() {
        let err = solve("L68\nL30\nS48\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid dial step provided: S48. Expected L<number> or R<number>, examples: L60, R48."
        );
    }

    #[test]
    fn interior_blank_line_is_a_bad_step() {
        let err = solve("L44\n\nR35\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid dial step provided: . Expected L<number> or R<number>, examples: L60, R48."
        );
    }

    #[test]
    fn landing_on_zero_bumps_password() {
        let state = LoopState::start().step("R50".parse().unwrap());
        assert_eq!(state.dial(), 0);
        assert_eq!(state.password(), 1);
    }

    #[test]
    fn left_rotation_wraps_below_zero() {
        let state = LoopState::start().step("L51".parse().unwrap());
        assert_eq!(state.dial(), 99);
        assert_eq!(state.password(), 0);
    }

    #[test]
    fn full_turn_lands_back_on_start() {
        let state = LoopState::start().step("R100".parse().unwrap());
        assert_eq!(state.dial(), 50);
        assert_eq!(state.password(), 0);
    }

    #[test]
    fn part_2_is_not_implemented() {
        let mut shared = Day1::parse("L1\n").unwrap();
        assert!(matches!(
            Day1::solve_part(&mut shared, 2),
            Err(SolveError::PartNotImplemented(2))
        ));
    }
}
