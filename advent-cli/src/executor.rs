//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::store::InputStore;
use advent_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from executing a single solver part
pub struct SolverOutcome {
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ExecutorError>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: Option<TimeDelta>,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Sequential executor for running solvers
///
/// Runs every work item in day order. A failed load, parse or solve becomes
/// that part's error outcome and the run continues with the next item.
pub struct Executor {
    registry: SolverRegistry,
    store: InputStore,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            store: InputStore::new(config.input_dir.clone()),
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items in order and collect one outcome per part
    pub fn execute(&self) -> Vec<SolverOutcome> {
        let mut outcomes = Vec::new();
        for work in self.collect_work_items() {
            for part in work.parts.clone() {
                outcomes.push(self.run_part(work.day, part));
            }
        }
        outcomes
    }

    fn run_part(&self, day: u8, part: u8) -> SolverOutcome {
        let input = match self.store.load(day, part) {
            Ok(input) => input,
            Err(source) => {
                return SolverOutcome {
                    day,
                    part,
                    answer: Err(ExecutorError::InputLoad { day, source }),
                    parse_duration: None,
                    solve_duration: None,
                };
            }
        };

        let mut solver = match self.registry.create_solver(day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                return SolverOutcome {
                    day,
                    part,
                    answer: Err(e.into()),
                    parse_duration: None,
                    solve_duration: None,
                };
            }
        };

        let parse_duration = Some(solver.parse_duration());
        match solver.solve(part) {
            Ok(result) => {
                let solve_duration = Some(result.duration());
                SolverOutcome {
                    day,
                    part,
                    answer: Ok(result.answer),
                    parse_duration,
                    solve_duration,
                }
            }
            Err(e) => SolverOutcome {
                day,
                part,
                answer: Err(ExecutorError::Solver(SolverError::Solve(e))),
                parse_duration,
                solve_duration: None,
            },
        }
    }
}
