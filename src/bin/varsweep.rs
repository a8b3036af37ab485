//! CLI for running the divisor sweep.
//!
//! ```bash
//! # Reference experiment (S=10000, n=5, V=10, B=200, seed=42)
//! cargo run --bin varsweep
//!
//! # Custom configuration with LaTeX and chart output
//! cargo run --bin varsweep -- \
//!   --simulations 20000 --observations 7 --seed 7 --latex --chart
//! ```

use clap::Parser;

use varsweep::output;
use varsweep::DivisorSweep;

/// Monte Carlo sweep of divisor-parameterized variance estimators.
#[derive(Debug, Parser)]
#[command(name = "varsweep")]
#[command(author, version, about)]
struct Cli {
    /// Number of simulated samples in the pool.
    #[clap(long, value_name = "INT", default_value = "10000")]
    simulations: usize,

    /// Observations per sample (at least 2).
    #[clap(long, value_name = "INT", default_value = "5")]
    observations: usize,

    /// True variance of the Normal(0, V) population.
    #[clap(long, value_name = "FLOAT", default_value = "10.0")]
    true_variance: f64,

    /// First divisor in the grid.
    #[clap(long, value_name = "FLOAT", default_value = "3.5")]
    grid_start: f64,

    /// Exclusive upper bound of the divisor grid.
    #[clap(long, value_name = "FLOAT", default_value = "9.0")]
    grid_stop: f64,

    /// Step between consecutive divisors.
    #[clap(long, value_name = "FLOAT", default_value = "0.5")]
    grid_step: f64,

    /// Bootstrap resamples per divisor (at least 2).
    #[clap(long, value_name = "INT", default_value = "200")]
    bootstrap: usize,

    /// Seed for the run's generator.
    #[clap(long, value_name = "INT", default_value = "42")]
    seed: u64,

    /// Confidence level for the bootstrap intervals.
    #[clap(long, value_name = "FLOAT", default_value = "0.95")]
    confidence: f64,

    /// Also emit the LaTeX report table.
    #[clap(long)]
    latex: bool,

    /// Also emit the pgfplots chart.
    #[clap(long)]
    chart: bool,

    /// Also emit the result as pretty-printed JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();

    let sweep = DivisorSweep::new()
        .simulations(args.simulations)
        .observations(args.observations)
        .true_variance(args.true_variance)
        .divisor_grid(args.grid_start, args.grid_stop, args.grid_step)
        .bootstrap_iterations(args.bootstrap)
        .seed(args.seed)
        .confidence(args.confidence)
        .run()?;

    println!("{}", output::format_table(&sweep));

    if args.latex {
        println!("{}", output::to_latex_table(&sweep));
    }
    if args.chart {
        println!("{}", output::to_pgfplots(&sweep));
    }
    if args.json {
        println!("{}", output::to_json_pretty(&sweep)?);
    }

    Ok(())
}
