use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use paging_rs::{run_trial, Policy};
use paging_simulator::models::{Axis, ExperimentConfig, Regime};
use paging_simulator::runner::SweepRunner;
use paging_simulator::stats;

/// Paging policy experiment driver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Output format for sweep results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
}

/// Branch the combined policy follows before its first switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StartPolicy {
    Lru,
    Blind,
}

impl From<StartPolicy> for Policy {
    fn from(start: StartPolicy) -> Self {
        match start {
            StartPolicy::Lru => Policy::Recency,
            StartPolicy::Blind => Policy::Predictive,
        }
    }
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sweep one parameter and report average fault counts per value
    Sweep {
        /// Base parameter set
        #[arg(short, long, value_enum, default_value = "1")]
        regime: Regime,

        /// Parameter to sweep
        #[arg(short, long, value_enum, default_value = "k")]
        axis: Axis,

        /// Values of the swept parameter. Defaults depend on the axis
        #[arg(long, value_name = "VALUES", num_args = 1.., value_delimiter = ',')]
        values: Option<Vec<f64>>,

        /// Independent trials per value
        #[arg(long, default_value = "10")]
        trials: usize,

        /// Worker threads
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        threads: u32,

        /// Base seed for every trial's RNG
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Initial branch of the combined policy
        #[arg(long, value_enum, default_value = "lru")]
        start: StartPolicy,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Run a single trial of a regime and print its fault counts
    Trial {
        /// Parameter set
        #[arg(short, long, value_enum, default_value = "1")]
        regime: Regime,

        /// Seed for the trial's RNG
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Initial branch of the combined policy
        #[arg(long, value_enum, default_value = "lru")]
        start: StartPolicy,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Sweep {
            regime,
            axis,
            values,
            trials,
            threads,
            seed,
            start,
            format,
        } => {
            let config = ExperimentConfig {
                regime,
                axis,
                values: values.unwrap_or_else(|| axis.default_values()),
                trials,
                threads: threads as usize,
                seed,
                initial_policy: start.into(),
            };
            run_sweep(config, format)
        }

        Commands::Trial {
            regime,
            seed,
            start,
        } => {
            let config = regime.base().trial_config(start.into());
            let outcome = run_trial(&config, &mut StdRng::seed_from_u64(seed))?;
            println!("Paging Trial ({regime}, seed {seed})");
            println!("====================");
            println!("OPT:         {}", outcome.optimal);
            println!("BlindOracle: {}", outcome.predictive);
            println!("LRU:         {}", outcome.recency);
            println!("Combined:    {}", outcome.adaptive);
            Ok(())
        }
    }
}

/// Run the sweep and print it in the requested format
fn run_sweep(config: ExperimentConfig, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let regime = config.regime;
    let runner = SweepRunner::new(config);
    let points = runner.run()?;

    let stdout = std::io::stdout();
    match format {
        Format::Table => stats::print_summary(&mut stdout.lock(), regime, &points)?,
        Format::Csv => stats::export_csv(stdout.lock(), regime, &points)?,
    }
    Ok(())
}
