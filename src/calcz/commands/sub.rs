use crate::commands::helpers::{adjusted_warning, resolve_overflow};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Calculation, OperationKind, OverflowPolicy};
use tracing::{debug, warn};

const OPERAND_TYPE: &str = "i16";

pub fn run(num1: i16, num2: i16, policy: OverflowPolicy) -> Result<CmdResult> {
    let (difference, adjusted) = resolve_overflow(
        num1.checked_sub(num2),
        num1.wrapping_sub(num2),
        num1.saturating_sub(num2),
        policy,
        || format!("{} - {}", num1, num2),
        OPERAND_TYPE,
    )?;

    let calc = Calculation {
        operation: OperationKind::Sub,
        num1: num1.into(),
        num2: num2.into(),
        result: difference.into(),
        adjusted,
    };
    debug!(num1, num2, difference, adjusted, "sub");

    let mut result = CmdResult::default();
    if adjusted {
        warn!(?policy, "sub result adjusted by overflow policy");
        result.add_message(adjusted_warning(&calc, policy, OPERAND_TYPE));
    }
    Ok(result.with_calculation(calc))
}
