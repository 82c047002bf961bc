use bigbench::{
    EngineKind, HarnessError, LehmerEngine, NumEngine, OperationKind, Sweep, SweepConfig,
    SweepSummary, TrialPolicy
};
use clap::Parser;
use std::{io, process};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Time arbitrary-precision integer arithmetic over a sweep of operand widths.
///
/// Without arguments this runs gcd, invert, mul, div and mod on operands
/// of 2^6 to 2^23 bits and prints one `<bits> <mean>ms <checksum>` row per
/// operation and width.
#[derive(Parser, Debug)]
#[command(name = "bigbench", version)]
struct Args {
    /// Only run this operation (gcd, invert, mul, div or mod); can be repeated
    #[arg(long = "op", value_name = "NAME")]
    operations: Vec<OperationKind>,

    /// Smallest operand width, as a power of two
    #[arg(long, default_value_t = 6)]
    min_exponent: u32,

    /// Largest operand width, as a power of two
    #[arg(long, default_value_t = 23)]
    max_exponent: u32,

    /// Run exactly this many trials per bucket instead of scaling with width
    #[arg(long)]
    trials: Option<u64>,

    /// Seed the operand generator for reproducible checksums
    #[arg(long)]
    seed: Option<u64>,

    /// Arithmetic engine: num, or lehmer for Lehmer's gcd
    #[arg(long, default_value = "num")]
    engine: EngineKind
}
impl Args {
    fn config(&self) -> SweepConfig {
        let mut config = SweepConfig::default().with_exponents(self.min_exponent, self.max_exponent);
        if !self.operations.is_empty() {
            config = config.with_operations(self.operations.iter().copied());
        }
        if let Some(trials) = self.trials {
            config = config.with_policy(TrialPolicy::Fixed(trials));
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn run(args: &Args) -> Result<SweepSummary, HarnessError> {
    let config = args.config();
    let stdout = io::stdout();
    let out = stdout.lock();
    match args.engine {
        EngineKind::Num => Sweep::new(NumEngine, config)?.run(out),
        EngineKind::Lehmer => Sweep::new(LehmerEngine, config)?.run(out)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => info!(rows = summary.rows, timed_ms = summary.timed_ms, "sweep finished"),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
