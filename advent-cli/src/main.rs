//! advent - command-line runner for the day-puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod output;
mod store;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let formatter = OutputFormatter::new(config.quiet);
    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let outcomes = executor.execute();
    for outcome in &outcomes {
        formatter.print_result(outcome);
    }
    formatter.print_summary(&outcomes);

    let failures = outcomes.iter().filter(|o| o.answer.is_err()).count();
    if failures > 0 {
        return Err(CliError::SolverFailures(failures));
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
