use crate::{Engine, OperationKind};

use num_traits::Zero;
use rand::Rng;
use std::{iter, slice, time::Instant};
use tracing::trace;

/// The operands of every trial in one bucket, `a[i]` paired with `b[i]`
#[derive(Clone, Debug)]
pub struct Operands<T> {
    pub a: Vec<T>,
    pub b: Vec<T>
}
impl<T> Operands<T> {
    pub fn len(&self) -> usize {
        self.a.len()
    }
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
    /// Iterate over all `(a, b)` pairs in trial order
    pub fn pairs(&self) -> iter::Zip<slice::Iter<'_, T>, slice::Iter<'_, T>> {
        self.a.iter().zip(self.b.iter())
    }
}
impl<T: Zero> Operands<T> {
    /// Draw `count` fresh operand pairs for `kind` at a nominal width of
    /// `size` bits.
    ///
    /// Operands used as divisors are redrawn until they are nonzero, which
    /// keeps them uniform over the nonzero values of their width.
    pub fn generate<E, R>(engine: &E, rng: &mut R, kind: OperationKind, size: u64, count: u64) -> Self
        where E: Engine<Int = T>,
              R: Rng + ?Sized
    {
        let (a_bits, b_bits) = kind.shape().widths(size);
        let nonzero = kind.needs_nonzero_divisor();
        debug_assert!(!nonzero || b_bits > 0, "divisor width must be positive");

        let start = Instant::now();
        let mut a = Vec::with_capacity(count as usize);
        let mut b = Vec::with_capacity(count as usize);
        let mut rejected = 0u64;

        for _ in 0..count {
            a.push(engine.random(rng, a_bits));

            let mut divisor = engine.random(rng, b_bits);
            while nonzero && divisor.is_zero() {
                rejected += 1;
                divisor = engine.random(rng, b_bits);
            }
            b.push(divisor);
        }

        trace!(%kind, size, count, rejected, elapsed = ?start.elapsed(), "generated operands");
        Self { a, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NumEngine;
    use num_bigint::BigUint;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn widths() {
        let mut rng = StdRng::seed_from_u64(5);
        let ops = Operands::generate(&NumEngine, &mut rng, OperationKind::Modulo, 64, 64);
        assert_eq!(ops.len(), 64);
        assert_eq!(ops.b.len(), 64);
        assert!(ops.a.iter().all(|a| a.bits() <= 128));
        assert!(ops.b.iter().all(|b| b.bits() <= 62));
        // 64 uniformly random 128-bit numbers that all fit in 64 bits is
        // not going to happen
        assert!(ops.a.iter().any(|a| a.bits() > 64));

        let ops = Operands::generate(&NumEngine, &mut rng, OperationKind::Gcd, 64, 16);
        assert!(ops.pairs().all(|(a, b)| a.bits() <= 64 && b.bits() <= 64));
    }
    #[test]
    fn divisor_never_zero() {
        let mut rng = StdRng::seed_from_u64(9);
        // At size 4 the divisor is only 2 bits wide, so zero is drawn a
        // quarter of the time
        for &kind in &[OperationKind::FloorDivide, OperationKind::Modulo] {
            let ops = Operands::generate(&NumEngine, &mut rng, kind, 4, 1000);
            assert!(ops.b.iter().all(|b| !b.is_zero()));
            assert!(ops.b.iter().all(|b| *b < BigUint::from(4u8)));
        }
    }
    #[test]
    fn deterministic() {
        let first = Operands::generate(&NumEngine, &mut StdRng::seed_from_u64(3), OperationKind::Multiply, 256, 8);
        let second = Operands::generate(&NumEngine, &mut StdRng::seed_from_u64(3), OperationKind::Multiply, 256, 8);
        assert_eq!(first.a, second.a);
        assert_eq!(first.b, second.b);
    }
}
