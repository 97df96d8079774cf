//! Calculator CLI.
//!
//! With no arguments, runs the demo scenario and prints one
//! `<a> <symbol> <b> = <result>` line per step.
//!
//! Configuration is loaded from:
//! 1. built-in defaults
//! 2. --config YAML file
//! 3. `CALCULATOR__*` environment variables
//! 4. -v verbosity flags

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use calculator::{Calculator, CalculatorConfig, Step, logging, run_steps};
use calculator_sdk::Operation;

/// Strategy calculator
#[derive(Parser)]
#[command(name = "calculator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the configured scenario (default)
    Demo,
    /// Select one operation and compute on two operands
    Compute(ComputeArgs),
    /// List available operations
    Operations,
}

#[derive(Args)]
struct ComputeArgs {
    /// Operation name or symbol (add, subtract, multiply, divide, +, -, x, /)
    operation: Operation,
    /// Left operand
    #[arg(allow_negative_numbers = true)]
    a: f64,
    /// Right operand
    #[arg(allow_negative_numbers = true)]
    b: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CalculatorConfig::load(cli.config.as_deref())?;
    config.apply_verbosity(cli.verbose);
    logging::init_logging(&config.logging)?;

    tracing::debug!(config = ?cli.config, "configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            run_steps(&mut Calculator::new(), &config.scenario, &mut out)?;
        }
        Commands::Compute(args) => {
            let step = Step::new(args.operation, args.a, args.b);
            run_steps(&mut Calculator::new(), &[step], &mut out)?;
        }
        Commands::Operations => {
            for op in Operation::ALL {
                writeln!(out, "{op} {}", op.symbol()).context("failed to write output")?;
            }
        }
    }

    out.flush().context("failed to flush stdout")
}
