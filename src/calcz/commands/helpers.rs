use crate::commands::CmdMessage;
use crate::error::{CalczError, Result};
use crate::model::{Calculation, OverflowPolicy};

/// Picks the handler result according to the overflow policy.
///
/// `checked` is the exact result (`None` on overflow); `wrapped` and
/// `saturated` are the fallbacks for the lenient policies. Returns the value
/// and whether the policy had to adjust it.
pub fn resolve_overflow<T>(
    checked: Option<T>,
    wrapped: T,
    saturated: T,
    policy: OverflowPolicy,
    expression: impl FnOnce() -> String,
    ty: &'static str,
) -> Result<(T, bool)> {
    match (checked, policy) {
        (Some(value), _) => Ok((value, false)),
        (None, OverflowPolicy::Checked) => Err(CalczError::Overflow {
            expression: expression(),
            ty,
        }),
        (None, OverflowPolicy::Wrapping) => Ok((wrapped, true)),
        (None, OverflowPolicy::Saturating) => Ok((saturated, true)),
    }
}

/// Warning attached to results the overflow policy changed.
pub fn adjusted_warning(calc: &Calculation, policy: OverflowPolicy, ty: &str) -> CmdMessage {
    let verb = match policy {
        OverflowPolicy::Wrapping => "wrapped",
        OverflowPolicy::Saturating => "clamped",
        OverflowPolicy::Checked => {
            unreachable!("checked overflow is an error, never an adjusted result")
        }
    };
    CmdMessage::warning(format!("Result {} at {} bounds: {}", verb, ty, calc))
}
