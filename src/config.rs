use crate::{HarnessError, OperationKind, Result, TrialPolicy};

use smallvec::SmallVec;

/// Smallest supported exponent. Below it the divisor of a wide operand pair
/// would have no bits left.
pub const MIN_EXPONENT: u32 = 2;
/// Largest supported exponent
pub const MAX_EXPONENT: u32 = 32;
/// Largest trial budget a scaled policy may use
pub const MAX_BUDGET: u32 = 40;

/// Everything a sweep needs to know. The default is the reference sweep:
/// every operation, 2^6 to 2^23 bits, scaled trial counts and a random seed.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    pub operations: SmallVec<[OperationKind; 8]>,
    pub min_exponent: u32,
    pub max_exponent: u32,
    pub policy: TrialPolicy,
    /// Seed for the operand generator, or `None` to seed from the OS
    pub seed: Option<u64>
}
impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            operations: OperationKind::ALL.iter().copied().collect(),
            min_exponent: 6,
            max_exponent: 23,
            policy: TrialPolicy::default(),
            seed: None
        }
    }
}
impl SweepConfig {
    pub fn with_operations<I: IntoIterator<Item = OperationKind>>(mut self, operations: I) -> Self {
        self.operations = operations.into_iter().collect();
        self
    }
    pub fn with_exponents(mut self, min: u32, max: u32) -> Self {
        self.min_exponent = min;
        self.max_exponent = max;
        self
    }
    pub fn with_policy(mut self, policy: TrialPolicy) -> Self {
        self.policy = policy;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    /// Iterate over the exponents of the sweep in ascending order
    pub fn exponents(&self) -> std::ops::RangeInclusive<u32> {
        self.min_exponent..=self.max_exponent
    }
    /// Check that every bucket of this sweep can actually run
    pub fn validate(&self) -> Result<()> {
        if self.operations.is_empty() {
            return Err(HarnessError::EmptyOperationSet);
        }
        if self.min_exponent > self.max_exponent {
            return Err(HarnessError::InvalidExponentRange {
                min: self.min_exponent,
                max: self.max_exponent
            });
        }
        for &exponent in &[self.min_exponent, self.max_exponent] {
            if exponent < MIN_EXPONENT || exponent > MAX_EXPONENT {
                return Err(HarnessError::ExponentOutOfRange {
                    exponent,
                    min: MIN_EXPONENT,
                    max: MAX_EXPONENT
                });
            }
        }
        match self.policy {
            TrialPolicy::Fixed(0) => Err(HarnessError::ZeroTrials),
            TrialPolicy::Scaled { budget, .. } if budget > MAX_BUDGET => Err(HarnessError::BudgetTooLarge(budget)),
            _ => Ok(())
        }
    }
}
