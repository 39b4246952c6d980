//! Property-based tests for the day 1 dial fold

use advent_solutions::days::day_1::{Day1, DialStep, LoopState};
use advent_solver::{RegistryBuilder, Solver};
use proptest::prelude::*;

fn step_line() -> impl Strategy<Value = String> {
    (any::<bool>(), 1u32..=10_000)
        .prop_map(|(left, distance)| format!("{}{}", if left { "L" } else { "R" }, distance))
}

proptest! {
    /// Any canonical `L<n>`/`R<n>` line decodes and re-encodes to itself.
    #[test]
    fn prop_round_trip(left in any::<bool>(), distance in 1u32..=1_000_000) {
        let line = format!("{}{}", if left { "L" } else { "R" }, distance);
        let step: DialStep = line.parse().unwrap();
        prop_assert_eq!(step.to_string(), line);
    }

    /// The dial stays in `[0, 100)` after every fold step.
    #[test]
    fn prop_dial_stays_in_range(lines in prop::collection::vec(step_line(), 0..64)) {
        let mut state = LoopState::start();
        for line in &lines {
            state = state.step(line.parse().unwrap());
            prop_assert!((0..100).contains(&state.dial()));
        }
    }

    /// The password never decreases across a fold.
    #[test]
    fn prop_password_is_monotonic(lines in prop::collection::vec(step_line(), 0..64)) {
        let mut state = LoopState::start();
        for line in &lines {
            let next = state.step(line.parse().unwrap());
            prop_assert!(next.password() >= state.password());
            state = next;
        }
    }
}

#[test]
fn tag_filter_can_exclude_day_1() {
    let registry = RegistryBuilder::new()
        .register_plugins_where(|p| p.tags.contains(&"nonexistent"))
        .unwrap()
        .build();
    assert!(registry.is_empty());
}

#[test]
fn plugin_registers_day_1() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    assert!(registry.contains(1));
    assert_eq!(registry.get_info(1).unwrap().parts, Day1::PARTS);

    let mut solver = registry
        .create_solver(1, "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n")
        .unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
}
