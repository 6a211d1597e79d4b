use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The decoded options value: one variant per subcommand.
///
/// Addition works on unsigned operands and subtraction on signed ones, so
/// `sub` can produce (and accept) negative numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add { num1: u16, num2: u16 },
    Sub { num1: i16, num2: i16 },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Add { .. } => OperationKind::Add,
            Operation::Sub { .. } => OperationKind::Sub,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Sub,
}

impl OperationKind {
    pub fn symbol(&self) -> char {
        match self {
            OperationKind::Add => '+',
            OperationKind::Sub => '-',
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Add => write!(f, "add"),
            OperationKind::Sub => write!(f, "sub"),
        }
    }
}

/// What a handler does when the exact result does not fit the operand type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with an error
    #[default]
    Checked,
    /// Wrap around at the type bounds
    Wrapping,
    /// Clamp to the type bounds
    Saturating,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `a + b = c` line per calculation
    #[default]
    Text,
    /// One JSON object per calculation
    Json,
}

/// Result of running one handler.
///
/// Operands and result are widened to `i64` so both `u16` and `i16`
/// calculations share one representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub operation: OperationKind,
    pub num1: i64,
    pub num2: i64,
    pub result: i64,
    /// True when the overflow policy changed the exact result
    pub adjusted: bool,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.num1,
            self.operation.symbol(),
            self.num2,
            self.result
        )
    }
}
