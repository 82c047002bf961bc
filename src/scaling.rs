use crate::OperationKind;

use std::cmp;

/// The trial exponent budget of the reference sweep: 2^23-bit operands get
/// 2^1 trials, and every halving of the width doubles that
pub const DEFAULT_BUDGET: u32 = 23;
/// Extra trial exponent given to heavy operations
pub const DEFAULT_HEAVY_BONUS: u32 = 2;

/// Decides how many trials a bucket runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrialPolicy {
    /// Halve the trial count every time the operand width doubles, so that
    /// every bucket takes roughly the same time
    Scaled {
        budget: u32,
        heavy_bonus: u32
    },
    /// Always run the same number of trials
    Fixed(u64)
}
impl Default for TrialPolicy {
    fn default() -> Self {
        TrialPolicy::Scaled {
            budget: DEFAULT_BUDGET,
            heavy_bonus: DEFAULT_HEAVY_BONUS
        }
    }
}
impl TrialPolicy {
    /// Return the number of trials for `kind` at a nominal width of
    /// `2^exponent` bits.
    ///
    /// ```rust
    /// use bigbench::{OperationKind, TrialPolicy};
    /// let policy = TrialPolicy::default();
    /// assert_eq!(policy.trial_count(OperationKind::Gcd, 6), 1 << 18);
    /// assert_eq!(policy.trial_count(OperationKind::Modulo, 23), 1 << 3);
    /// ```
    pub fn trial_count(&self, kind: OperationKind, exponent: u32) -> u64 {
        match *self {
            TrialPolicy::Fixed(count) => cmp::max(count, 1),
            TrialPolicy::Scaled { budget, heavy_bonus } => {
                let size = 1u64 << cmp::min(exponent, 63);
                let log2 = 63 - size.leading_zeros() as i64;

                let mut e = budget as i64 - log2 + 1;
                if kind.is_heavy() {
                    e += heavy_bonus as i64;
                }
                1 << cmp::min(cmp::max(e, 0), 63)
            }
        }
    }
}
