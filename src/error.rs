use thiserror::Error;

/// Everything that can stop a sweep before or while it runs.
///
/// Arithmetic failures are not in here: the only recoverable one (a missing
/// modular inverse) is handled per trial, and zero divisors are never
/// generated.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no operations selected")]
    EmptyOperationSet,

    #[error("invalid exponent range: {min}..={max}")]
    InvalidExponentRange { min: u32, max: u32 },

    #[error("exponent {exponent} is outside the supported range {min}..={max}")]
    ExponentOutOfRange { exponent: u32, min: u32, max: u32 },

    #[error("trial count must be at least 1")]
    ZeroTrials,

    #[error("trial budget {0} is too large")]
    BudgetTooLarge(u32),

    #[error("unknown operation '{0}', expected one of gcd, invert, mul, div, mod")]
    UnknownOperation(String),

    #[error("unknown engine '{0}', expected num or lehmer")]
    UnknownEngine(String),

    #[error("failed to write result row: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
