mod lehmer;
mod num;

pub use self::lehmer::*;
pub use self::num::*;

use crate::{HarnessError, OperationKind};

use num_traits::Zero;
use rand::Rng;
use std::{fmt, str::FromStr};

/// Returned by `Engine::mod_inverse` when `a` has no inverse modulo `b`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoInverse;

impl fmt::Display for NoInverse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no modular inverse exists")
    }
}

/// The arbitrary-precision arithmetic that a sweep times.
///
/// Implementations are treated as opaque: the harness only generates
/// operands through `random`, calls `apply` inside the timed loop and folds
/// the result into the checksum with `low16`.
pub trait Engine {
    type Int: Zero + Clone + fmt::Debug;

    fn name(&self) -> &'static str;

    /// Return a uniformly distributed integer in `0..2^bits`
    fn random<R: Rng + ?Sized>(&self, rng: &mut R, bits: u64) -> Self::Int;

    fn gcd(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;
    /// Return `x` such that `a * x = 1 (mod b)`. Fails if `b <= 1` or if
    /// `a` and `b` are not coprime.
    fn mod_inverse(&self, a: &Self::Int, b: &Self::Int) -> Result<Self::Int, NoInverse>;
    fn mul(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;
    /// Division rounding towards negative infinity. `b` must not be zero.
    fn floor_div(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;
    /// Remainder following the sign convention of `floor_div`. `b` must not be zero.
    fn modulo(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;

    /// Return the lowest 16 bits of `n`
    fn low16(&self, n: &Self::Int) -> u16;

    /// Run a single trial of `kind`. A missing inverse counts as zero.
    fn apply(&self, kind: OperationKind, a: &Self::Int, b: &Self::Int) -> Self::Int {
        match kind {
            OperationKind::Gcd => self.gcd(a, b),
            OperationKind::ModularInverse => match self.mod_inverse(a, b) {
                Ok(inverse) => inverse,
                Err(NoInverse) => <Self::Int as Zero>::zero()
            },
            OperationKind::Multiply => self.mul(a, b),
            OperationKind::FloorDivide => self.floor_div(a, b),
            OperationKind::Modulo => self.modulo(a, b)
        }
    }
}

/// Selects an engine at runtime, e.g. from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineKind {
    Num,
    Lehmer
}
impl Default for EngineKind {
    fn default() -> Self {
        EngineKind::Num
    }
}
impl FromStr for EngineKind {
    type Err = HarnessError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "num" => Ok(EngineKind::Num),
            "lehmer" => Ok(EngineKind::Lehmer),
            other => Err(HarnessError::UnknownEngine(other.to_string()))
        }
    }
}
