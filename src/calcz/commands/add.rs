use crate::commands::helpers::{adjusted_warning, resolve_overflow};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Calculation, OperationKind, OverflowPolicy};
use tracing::{debug, warn};

const OPERAND_TYPE: &str = "u16";

pub fn run(num1: u16, num2: u16, policy: OverflowPolicy) -> Result<CmdResult> {
    let (sum, adjusted) = resolve_overflow(
        num1.checked_add(num2),
        num1.wrapping_add(num2),
        num1.saturating_add(num2),
        policy,
        || format!("{} + {}", num1, num2),
        OPERAND_TYPE,
    )?;

    let calc = Calculation {
        operation: OperationKind::Add,
        num1: num1.into(),
        num2: num2.into(),
        result: sum.into(),
        adjusted,
    };
    debug!(num1, num2, sum, adjusted, "add");

    let mut result = CmdResult::default();
    if adjusted {
        warn!(?policy, "add result adjusted by overflow policy");
        result.add_message(adjusted_warning(&calc, policy, OPERAND_TYPE));
    }
    Ok(result.with_calculation(calc))
}
