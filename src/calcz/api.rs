//! # API Facade
//!
//! The API layer is the command router: it takes a decoded [`Operation`] and
//! hands it to exactly one handler in `commands/`.
//!
//! The match in [`CalczApi::execute`] has no wildcard arm, so adding a
//! variant to `Operation` without a handler fails to compile.
//!
//! Like the commands it dispatches to, the API never prints and never exits;
//! it returns `Result<CmdResult>` and leaves presentation to the caller.

use crate::commands;
use crate::config::CalczConfig;
use crate::error::Result;
use crate::model::Operation;
use tracing::debug;

/// The entry point for all calcz operations.
pub struct CalczApi {
    config: CalczConfig,
}

impl CalczApi {
    pub fn new(config: CalczConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, op: Operation) -> Result<commands::CmdResult> {
        debug!(operation = %op.kind(), policy = ?self.config.overflow, "dispatching");
        match op {
            Operation::Add { num1, num2 } => self.add(num1, num2),
            Operation::Sub { num1, num2 } => self.sub(num1, num2),
        }
    }

    pub fn add(&self, num1: u16, num2: u16) -> Result<commands::CmdResult> {
        commands::add::run(num1, num2, self.config.overflow)
    }

    pub fn sub(&self, num1: i16, num2: i16) -> Result<commands::CmdResult> {
        commands::sub::run(num1, num2, self.config.overflow)
    }

    pub fn config(&self) -> &CalczConfig {
        &self.config
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OperationKind, OverflowPolicy};

    fn api_with(overflow: OverflowPolicy) -> CalczApi {
        CalczApi::new(CalczConfig {
            overflow,
            ..CalczConfig::default()
        })
    }

    #[test]
    fn add_routes_to_add_handler() {
        let result = api_with(OverflowPolicy::Checked)
            .execute(Operation::Add { num1: 1, num2: 2 })
            .unwrap();
        assert_eq!(result.calculations[0].operation, OperationKind::Add);
        assert_eq!(result.calculations[0].result, 3);
    }

    #[test]
    fn sub_routes_to_sub_handler() {
        let result = api_with(OverflowPolicy::Checked)
            .execute(Operation::Sub { num1: 1, num2: 2 })
            .unwrap();
        assert_eq!(result.calculations[0].operation, OperationKind::Sub);
        assert_eq!(result.calculations[0].result, -1);
    }

    #[test]
    fn configured_policy_reaches_handlers() {
        let api = api_with(OverflowPolicy::Saturating);
        let result = api.execute(Operation::Add { num1: u16::MAX, num2: 5 }).unwrap();
        assert_eq!(result.calculations[0].result, u16::MAX as i64);
        assert_eq!(api.config().overflow, OverflowPolicy::Saturating);

        assert!(api_with(OverflowPolicy::Checked)
            .execute(Operation::Add { num1: u16::MAX, num2: 5 })
            .is_err());
    }
}
