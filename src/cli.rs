use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::time::Instant;

use treesearch::solver::select_solution;
use treesearch::utils::{parse_number, parse_numbers, parse_operators};
use treesearch::{
    ExpressionSolver, Operator, ShortCircuit, SolverConfig, TreeEnumerator, shape::node_count,
};

const DEFAULT_TARGET: i64 = 24;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Shape pruning rule, as named on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShortCircuitArg {
    Associative,
    Uniform,
    Disabled,
}

impl From<ShortCircuitArg> for ShortCircuit {
    fn from(arg: ShortCircuitArg) -> Self {
        match arg {
            ShortCircuitArg::Associative => ShortCircuit::AssociativeOperators,
            ShortCircuitArg::Uniform => ShortCircuit::UniformOperator,
            ShortCircuitArg::Disabled => ShortCircuit::Disabled,
        }
    }
}

/// Treesearch - reach target values with arithmetic over a set of numbers
#[derive(Parser, Debug)]
#[command(name = "treesearch")]
#[command(about = "Enumerate full binary trees and search them for expressions that hit a target")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for expressions over NUMBERS for each target
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Numbers to combine, integers or fractions like 3/4
        #[arg(required = true)]
        numbers: Vec<String>,

        /// Operator symbols to draw from
        #[arg(short, long, default_value = "+-*/")]
        operators: String,

        /// Target value, may be repeated (default: 24 when no range is given)
        #[arg(short, long)]
        target: Vec<String>,

        /// Also try every integer target from LO to HI inclusive
        #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
        range: Option<Vec<i64>>,

        /// Stop at the first solution for each target
        #[arg(long)]
        first: bool,

        /// When a single shape is enough for an operator tuple
        #[arg(long, value_enum, default_value = "associative")]
        short_circuit: ShortCircuitArg,

        /// Do not spread the search over threads
        #[arg(long)]
        sequential: bool,
    },
    /// Count the shapes for every node count up to MAX_N, with timings
    #[command(allow_negative_numbers = true)]
    Shapes { max_n: i64 },
}

/// Search settings after validation
pub struct SolveConfig {
    pub numbers: Vec<BigRational>,
    pub operators: Vec<Operator>,
    pub targets: Vec<BigRational>,
    pub stop_at_first: bool,
    pub solver: SolverConfig,
}

pub enum Task {
    Solve(SolveConfig),
    Shapes { max_n: usize },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub task: Task,
    pub log_level: LogLevel,
}

/// Explicit targets first, then the inclusive range
fn collect_targets(explicit: &[String], range: Option<&[i64]>) -> Result<Vec<BigRational>> {
    let mut targets = parse_numbers(explicit).context("Invalid target")?;

    if let Some(bounds) = range {
        let (Some(&lo), Some(&hi)) = (bounds.first(), bounds.get(1)) else {
            bail!("--range needs two bounds");
        };
        if lo > hi {
            bail!("Empty target range {}..={}", lo, hi);
        }
        targets.extend((lo..=hi).map(|t| BigRational::from_integer(BigInt::from(t))));
    }

    if targets.is_empty() {
        targets.push(BigRational::from_integer(BigInt::from(DEFAULT_TARGET)));
    }
    Ok(targets)
}

/// Validate parsed arguments into a configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    let task = match args.command {
        Command::Solve {
            numbers,
            operators,
            target,
            range,
            first,
            short_circuit,
            sequential,
        } => Task::Solve(SolveConfig {
            numbers: parse_numbers(&numbers).context("Invalid number")?,
            operators: parse_operators(&operators).context("Invalid operator set")?,
            targets: collect_targets(&target, range.as_deref())?,
            stop_at_first: first,
            solver: SolverConfig {
                short_circuit: short_circuit.into(),
                parallel: !sequential,
            },
        }),
        Command::Shapes { max_n } => Task::Shapes {
            max_n: node_count(max_n).context("Invalid node count")?,
        },
    };

    Ok(CliConfig {
        task,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

fn run_solve(config: &SolveConfig) -> Result<()> {
    let solver = ExpressionSolver::new(config.solver.clone());

    for target in &config.targets {
        info!("Searching for expressions equal to {}", target);
        let results = solver
            .search(&config.numbers, &config.operators, target, config.stop_at_first)
            .with_context(|| format!("Search for target {} failed", target))?;

        match select_solution(&results) {
            Some((index, result)) => {
                let expression = result.expression()?;
                println!(
                    "{}: {} [solution {} of {}]",
                    target,
                    expression,
                    index + 1,
                    results.len()
                );
            }
            None => {
                warn!("No matching expression found for {}", target);
                println!("{}: no solution", target);
            }
        }
    }
    Ok(())
}

fn run_shapes(max_n: usize) {
    for n in 0..=max_n {
        let start = Instant::now();
        let count = TreeEnumerator::new().enumerate(n).len();
        println!("{} : {} - {:.6}s", n, count, start.elapsed().as_secs_f64());
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    match &config.task {
        Task::Solve(solve) => run_solve(solve),
        Task::Shapes { max_n } => {
            run_shapes(*max_n);
            Ok(())
        }
    }
}
