//! Output formatting for solver results

use crate::executor::SolverOutcome;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single outcome
    pub fn print_result(&self, outcome: &SolverOutcome) {
        if self.quiet {
            self.print_quiet(outcome);
        } else {
            self.print_full(outcome);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, outcome: &SolverOutcome) {
        match &outcome.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing info
    fn print_full(&self, outcome: &SolverOutcome) {
        let prefix = format!("day {:02} part {}", outcome.day, outcome.part);

        match &outcome.answer {
            Ok(answer) => {
                let parse_timing = outcome
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                let solve_timing = outcome
                    .solve_duration
                    .map(format_duration)
                    .unwrap_or_else(|| "N/A".to_string());

                println!("{}: {} ({}solve: {})", prefix, answer, parse_timing, solve_timing);
            }
            Err(e) => {
                eprintln!("{}: Error - {}", prefix, e);
            }
        }
    }

    /// Print a summary after all outcomes
    ///
    /// Shows total parse/solve time (sum of durations) alongside the actual
    /// elapsed wall-clock time.
    pub fn print_summary(&self, outcomes: &[SolverOutcome]) {
        if self.quiet {
            return;
        }

        let total = outcomes.len();
        let successes = outcomes.iter().filter(|o| o.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = outcomes.iter().filter_map(|o| o.parse_duration).sum();
        let total_solve_time: TimeDelta = outcomes.iter().filter_map(|o| o.solve_duration).sum();
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
