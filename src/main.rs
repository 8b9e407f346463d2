use clap::{Parser, ValueEnum};
use std::time::Instant;

use monopoly_odds::game::ReleasePolicy;
use monopoly_odds::{driver, Plan};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Which jail strategies to simulate.
enum Strategy {
    /// Always pay to leave jail straight away.
    A,
    /// Try to roll doubles for three turns before paying.
    B,
    /// Simulate strategy a, then strategy b.
    Both,
}

impl Strategy {
    fn policies(self) -> Vec<ReleasePolicy> {
        match self {
            Strategy::A => vec![ReleasePolicy::ImmediatePay],
            Strategy::B => vec![ReleasePolicy::WaitForDoubles],
            Strategy::Both => vec![ReleasePolicy::ImmediatePay, ReleasePolicy::WaitForDoubles],
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimate how often each Monopoly tile is landed on",
    long_about = None
)]
struct Args {
    /// The jail strategy to simulate.
    #[arg(value_enum, default_value = "both")]
    strategy: Strategy,

    /// The number of times to simulate each strategy.
    #[arg(default_value_t = 2)]
    runs: usize,

    /// Turn counts to print the results at.
    #[arg(long, value_delimiter = ',', default_values_t = driver::DEFAULT_CHECKPOINTS)]
    checkpoints: Vec<u64>,

    /// Seed for reproducible results.
    #[arg(long)]
    seed: Option<u64>,

    /// Log deck reshuffles and jail releases.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    monopoly_odds::log(if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    let plan = Plan {
        policies: args.strategy.policies(),
        runs: args.runs,
        checkpoints: args.checkpoints,
        seed: args.seed,
    };

    let start = Instant::now();
    let reports = plan.execute()?;
    let duration = start.elapsed();

    for report in &reports {
        println!("{}", report);
    }

    log::info!("{:<32}{:?}", "time elapsed", duration);

    Ok(())
}
