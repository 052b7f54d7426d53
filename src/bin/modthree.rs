//! modthree - N mod 3 for binary strings, computed by a finite automaton
//!
//! With no argument, runs two demonstration cases. With one argument,
//! evaluates it. Calculation errors are reported on stdout and do not change
//! the exit code.

use anyhow::Context;
use clap::{ArgAction, Parser};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

use modfsm::core::{AutomatonDefinition, State};
use modfsm::modthree::{mod_three_definition, ModThreeCalculator, ModuloCalculator};
use modfsm::Automaton;

#[derive(Parser)]
#[command(name = "modthree")]
#[command(about = "Compute N mod 3 for a binary number with a finite automaton")]
#[command(version)]
struct Cli {
    /// Binary string to evaluate (runs the demonstration cases when omitted)
    input: Option<String>,

    /// Print the path of states the input drives the automaton through
    #[arg(short, long)]
    trace: bool,

    /// Run the input through an automaton definition loaded from a JSON file
    #[arg(short, long, value_name = "FILE")]
    definition: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.definition {
        Some(path) => run_definition(path, cli.input.as_deref().unwrap_or(""), cli.trace),
        None => run_calculator(cli.input.as_deref(), cli.trace),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_calculator(input: Option<&str>, trace: bool) -> anyhow::Result<()> {
    let calculator = ModThreeCalculator::new(mod_three_definition())
        .context("failed to initialize modulo-three calculator")?;

    match input {
        Some(input) => report(&calculator, input, trace),
        None => {
            println!("--- Test Case 1: Valid Input ---");
            report(&calculator, "1101", trace);

            println!("\n--- Test Case 2: Invalid Input (Error Path) ---");
            report(&calculator, "1A01", trace);
        }
    }

    Ok(())
}

fn report(calculator: &ModThreeCalculator, input: &str, trace: bool) {
    println!("Input: {input:?}");

    match calculator.calculate_with_sentinel(input) {
        (remainder, None) => {
            println!("  Result: success");
            println!("  Remainder: {remainder}");
        }
        (remainder, Some(err)) => {
            println!("  Result: error");
            println!("  Remainder: {remainder}");
            println!("  Reason: {err}");
        }
    }

    if trace {
        // Blank input is the number zero; trace it as the empty string.
        let traced = if input.trim().is_empty() { "" } else { input };
        match calculator.automaton().run_traced(traced) {
            Ok(run) => println!("  Path: {}", format_path(run.path())),
            Err(err) => println!("  Path: unavailable ({err})"),
        }
    }
}

fn run_definition(path: &Path, input: &str, trace: bool) -> anyhow::Result<()> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read definition {}", path.display()))?;
    let definition = AutomatonDefinition::<String>::from_json(&json)
        .with_context(|| format!("failed to parse definition {}", path.display()))?;

    if let Validation::Failure(errors) = definition.audit() {
        println!(
            "Definition {} has {} defect(s):",
            path.display(),
            errors.len()
        );
        for err in errors.iter() {
            println!("  - {err}");
        }
        return Ok(());
    }

    let automaton = definition.build()?;
    println!("Input: {input:?}");

    match automaton.run_traced(input) {
        Ok(run) => {
            let terminal = run.final_state();
            println!("  Result: success");
            println!("  Final state: {}", terminal.name());
            println!("  Accepting: {}", automaton.is_accepting(terminal));
            if trace {
                println!("  Path: {}", format_path(run.path()));
            }
        }
        Err(err) => {
            println!("  Result: error");
            println!("  Reason: {err}");
        }
    }

    Ok(())
}

fn format_path<S: State>(path: Vec<&S>) -> String {
    path.iter()
        .map(|state| state.name())
        .collect::<Vec<_>>()
        .join(" -> ")
}
