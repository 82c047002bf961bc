use crate::{Bucket, Engine, Result, SweepConfig};

use rand::{rngs::StdRng, SeedableRng};
use std::io::Write;
use tracing::info;

/// What a finished sweep did
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SweepSummary {
    /// Number of result rows written
    pub rows: usize,
    /// Time spent inside timed trial loops, in milliseconds
    pub timed_ms: f64
}

/// Runs every bucket of a `SweepConfig` against one engine.
pub struct Sweep<E> {
    engine: E,
    config: SweepConfig,
    rng: StdRng
}
impl<E: Engine> Sweep<E> {
    /// Validate `config` and seed the operand generator
    pub fn new(engine: E, config: SweepConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        };
        Ok(Self { engine, config, rng })
    }
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }
    /// Return every bucket in evaluation order: operation by operation, and
    /// by ascending width within each operation
    pub fn buckets(&self) -> Vec<Bucket> {
        let config = &self.config;
        config.operations.iter()
            .flat_map(|&kind| config.exponents().map(move |exponent| Bucket {
                kind,
                exponent,
                trials: config.policy.trial_count(kind, exponent)
            }))
            .collect()
    }
    /// Run every bucket and write its row to `out` as soon as it's done.
    pub fn run<W: Write>(&mut self, mut out: W) -> Result<SweepSummary> {
        info!(
            engine = self.engine.name(),
            operations = self.config.operations.len(),
            min_exponent = self.config.min_exponent,
            max_exponent = self.config.max_exponent,
            "starting sweep"
        );

        let mut summary = SweepSummary::default();
        let mut current = None;
        for bucket in self.buckets() {
            if current != Some(bucket.kind) {
                info!(operation = %bucket.kind, "sweeping operation");
                current = Some(bucket.kind);
            }

            let row = bucket.run(&self.engine, &mut self.rng);
            writeln!(out, "{}", row)?;
            out.flush()?;

            summary.rows += 1;
            summary.timed_ms += row.mean_ms * bucket.trials as f64;
        }
        Ok(summary)
    }
}
