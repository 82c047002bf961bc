use crate::{Engine, OperationKind, Operands};

use rand::Rng;
use std::{fmt, time::Instant};
use tracing::debug;

/// The outcome of one bucket.
///
/// Displays as a single line of `<bits> <mean>ms <checksum>`:
/// ```rust
/// use bigbench::ResultRow;
/// let row = ResultRow { bits: 64, mean_ms: 0.03125, checksum: 1234 };
/// assert_eq!(row.to_string(), "64 0.03125ms 1234");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultRow {
    /// Nominal operand width in bits
    pub bits: u64,
    /// Mean wall-clock time of one trial, in milliseconds
    pub mean_ms: f64,
    /// Sum of the lowest 16 bits of every trial result
    pub checksum: u64
}
impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:.5}ms {}", self.bits, self.mean_ms, self.checksum)
    }
}

/// One operation at one operand width, along with how many trials to run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub kind: OperationKind,
    pub exponent: u32,
    pub trials: u64
}
impl Bucket {
    /// The nominal operand width, `2^exponent` bits
    pub fn size(&self) -> u64 {
        1 << self.exponent
    }
    /// Generate operands, then time every trial on them.
    pub fn run<E, R>(&self, engine: &E, rng: &mut R) -> ResultRow
        where E: Engine,
              R: Rng + ?Sized
    {
        let generated = Instant::now();
        let operands = Operands::generate(engine, rng, self.kind, self.size(), self.trials);
        debug!(
            kind = %self.kind,
            bits = self.size(),
            trials = self.trials,
            generation = ?generated.elapsed(),
            "running bucket"
        );
        self.time(engine, &operands)
    }
    /// Time every trial on already generated operands. Only the trial loop
    /// itself is inside the measured window.
    pub fn time<E: Engine>(&self, engine: &E, operands: &Operands<E::Int>) -> ResultRow {
        let kind = self.kind;
        let mut checksum = 0u64;

        let start = Instant::now();
        for (a, b) in operands.pairs() {
            let g = engine.apply(kind, a, b);
            checksum += u64::from(engine.low16(&g));
        }
        let elapsed = start.elapsed();

        let trials = operands.len().max(1) as f64;
        ResultRow {
            bits: self.size(),
            mean_ms: elapsed.as_secs_f64() * 1000.0 / trials,
            checksum
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LehmerEngine, NumEngine};
    use num_bigint::BigUint;
    use num_traits::ToPrimitive;
    use rand::{rngs::StdRng, SeedableRng};

    fn euclid(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    #[test]
    fn gcd_checksum_matches_euclid() {
        let bucket = Bucket { kind: OperationKind::Gcd, exponent: 6, trials: 256 };

        let operands = Operands::generate(&NumEngine, &mut StdRng::seed_from_u64(11), bucket.kind, 64, bucket.trials);
        let expected: u64 = operands.pairs()
            .map(|(a, b)| euclid(a.to_u64().unwrap(), b.to_u64().unwrap()) & 0xFFFF)
            .sum();

        let row = bucket.run(&NumEngine, &mut StdRng::seed_from_u64(11));
        assert_eq!(row.bits, 64);
        assert_eq!(row.checksum, expected);

        let row = bucket.run(&LehmerEngine, &mut StdRng::seed_from_u64(11));
        assert_eq!(row.checksum, expected);
    }
    #[test]
    fn non_invertible_contributes_zero() {
        let bucket = Bucket { kind: OperationKind::ModularInverse, exponent: 6, trials: 2 };
        let operands = Operands {
            a: vec![BigUint::from(4u8), BigUint::from(3u8)],
            b: vec![BigUint::from(6u8), BigUint::from(11u8)]
        };
        // Only the second pair has an inverse, 4
        assert_eq!(bucket.time(&NumEngine, &operands).checksum, 4);

        let bucket = Bucket { trials: 1, ..bucket };
        let operands = Operands {
            a: vec![BigUint::from(4u8)],
            b: vec![BigUint::from(6u8)]
        };
        assert_eq!(bucket.time(&NumEngine, &operands).checksum, 0);
    }
    #[test]
    fn floor_div_and_modulo_round_trip() {
        let mut rng = StdRng::seed_from_u64(17);
        for exponent in 6..=10 {
            let operands = Operands::generate(&NumEngine, &mut rng, OperationKind::FloorDivide, 1 << exponent, 64);
            for (a, b) in operands.pairs() {
                let q = NumEngine.floor_div(a, b);
                let r = NumEngine.modulo(a, b);
                assert!(r < *b);
                assert_eq!(b * q + r, *a);
            }
        }
    }
    #[test]
    fn same_seed_same_checksum() {
        for &kind in OperationKind::ALL.iter() {
            let bucket = Bucket { kind, exponent: 8, trials: 32 };
            let first = bucket.run(&NumEngine, &mut StdRng::seed_from_u64(99));
            let second = bucket.run(&NumEngine, &mut StdRng::seed_from_u64(99));
            assert_eq!(first.checksum, second.checksum, "{}", kind);
            assert_eq!(first.bits, 256);
        }
    }
    #[test]
    fn mean_is_finite() {
        let bucket = Bucket { kind: OperationKind::Multiply, exponent: 10, trials: 8 };
        let row = bucket.run(&NumEngine, &mut StdRng::seed_from_u64(1));
        assert!(row.mean_ms.is_finite());
        assert!(row.mean_ms >= 0.0);
    }
    #[test]
    fn format() {
        let row = ResultRow { bits: 8388608, mean_ms: 1234.5, checksum: 0 };
        assert_eq!(row.to_string(), "8388608 1234.50000ms 0");
    }
}
