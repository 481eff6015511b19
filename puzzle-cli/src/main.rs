//! Puzzle CLI - command-line interface for running daily puzzle solvers

mod cli;
mod config;
mod error;
mod input;
mod output;
mod runner;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use output::OutputFormatter;
use puzzle_solver::{RegistryBuilder, SolverRegistry};
use runner::Runner;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    setup_tracing()?;

    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    let runner = Runner::new(registry, &config);

    if runner.collect_work_items().is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    runner.run(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    let failed = results.iter().filter(|r| r.answer.is_err()).count();
    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
fn setup_tracing() -> Result<(), CliError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
