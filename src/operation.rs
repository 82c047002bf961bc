use crate::HarnessError;

use std::{fmt, str::FromStr};

/// How the two operands of a trial are sized relative to the nominal width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandShape {
    /// Both operands are `size` bits wide
    Equal,
    /// A dividend of `2 * size` bits over a divisor of `size - 2` bits
    Wide
}
impl OperandShape {
    /// Return the bit widths of `(a, b)` for a nominal width of `size` bits
    pub fn widths(self, size: u64) -> (u64, u64) {
        match self {
            OperandShape::Equal => (size, size),
            OperandShape::Wide => (size * 2, size.saturating_sub(2))
        }
    }
}

/// The arithmetic operation timed by a bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    Gcd,
    ModularInverse,
    Multiply,
    FloorDivide,
    Modulo
}
impl OperationKind {
    /// Every operation, in the order a default sweep evaluates them
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Gcd,
        OperationKind::ModularInverse,
        OperationKind::Multiply,
        OperationKind::FloorDivide,
        OperationKind::Modulo
    ];

    /// The short name used on the command line and in logs
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Gcd => "gcd",
            OperationKind::ModularInverse => "invert",
            OperationKind::Multiply => "mul",
            OperationKind::FloorDivide => "div",
            OperationKind::Modulo => "mod"
        }
    }
    pub fn shape(self) -> OperandShape {
        match self {
            OperationKind::FloorDivide | OperationKind::Modulo => OperandShape::Wide,
            _ => OperandShape::Equal
        }
    }
    /// Heavy operations get a bonus to their trial exponent, see
    /// `TrialPolicy::trial_count`
    pub fn is_heavy(self) -> bool {
        match self {
            OperationKind::Multiply | OperationKind::FloorDivide | OperationKind::Modulo => true,
            OperationKind::Gcd | OperationKind::ModularInverse => false
        }
    }
    /// Whether `b` is used as a divisor and must therefore never be zero
    pub fn needs_nonzero_divisor(self) -> bool {
        self.shape() == OperandShape::Wide
    }
}
impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl FromStr for OperationKind {
    type Err = HarnessError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_ascii_lowercase();
        OperationKind::ALL.iter()
            .copied()
            .find(|kind| kind.name() == input)
            .ok_or(HarnessError::UnknownOperation(input))
    }
}
