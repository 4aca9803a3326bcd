// Call plan - the unsigned command list handed to the wallet for signing

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::call::{CallArg, Command, MoveTarget};
use crate::core::CodecError;

/// Most commands a single programmable transaction may carry
pub const MAX_COMMANDS: usize = 1024;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("command {at} references result ({command}, {index}) which is not produced earlier")]
    DanglingResult { at: usize, command: u16, index: u16 },

    #[error("split of the gas coin needs at least one amount")]
    EmptySplit,

    #[error("call plan exceeds {} commands", MAX_COMMANDS)]
    TooManyCommands,

    #[error("argument encoding failed: {0}")]
    Codec(#[from] CodecError),

    #[error("invalid call plan JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered commands for one transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallPlan {
    commands: Vec<Command>,
}

impl CallPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Split coins off the gas coin; returns one handle per amount
    pub fn split_gas(&mut self, amounts: Vec<u64>) -> Result<Vec<CallArg>, PlanError> {
        if amounts.is_empty() {
            return Err(PlanError::EmptySplit);
        }
        let command = self.next_index()?;

        let handles = (0..amounts.len())
            .map(|i| CallArg::NestedResult(command, i as u16))
            .collect();

        self.commands.push(Command::SplitCoins { amounts });
        Ok(handles)
    }

    /// Append a Move call; result references must point at earlier commands
    pub fn move_call(&mut self, target: MoveTarget, arguments: Vec<CallArg>) -> Result<(), PlanError> {
        let at = self.next_index()? as usize;
        self.check_arguments(at, &arguments)?;

        log::debug!("Adding move call {} with {} arguments", target, arguments.len());
        self.commands.push(Command::MoveCall { target, arguments });
        Ok(())
    }

    /// Check every result reference in the plan
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.commands.len() > MAX_COMMANDS {
            return Err(PlanError::TooManyCommands);
        }
        for (at, command) in self.commands.iter().enumerate() {
            if let Command::SplitCoins { amounts } = command {
                if amounts.is_empty() {
                    return Err(PlanError::EmptySplit);
                }
            }
            self.check_arguments(at, command.arguments())?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a plan
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let plan: CallPlan = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    fn next_index(&self) -> Result<u16, PlanError> {
        if self.commands.len() >= MAX_COMMANDS {
            return Err(PlanError::TooManyCommands);
        }
        Ok(self.commands.len() as u16)
    }

    fn check_arguments(&self, at: usize, arguments: &[CallArg]) -> Result<(), PlanError> {
        for arg in arguments {
            if let CallArg::NestedResult(command, index) = *arg {
                let produced = match self.commands.get(command as usize) {
                    Some(earlier) if (command as usize) < at => earlier.result_count(),
                    _ => return Err(PlanError::DanglingResult { at, command, index }),
                };
                if let Some(count) = produced {
                    if index as usize >= count {
                        return Err(PlanError::DanglingResult { at, command, index });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ObjectId;

    fn target(function: &str) -> MoveTarget {
        MoveTarget::new(ObjectId::from_hex("0x42").unwrap(), "defi", function)
    }

    #[test]
    fn test_split_then_call() {
        let pool = ObjectId::from_hex("0x99").unwrap();
        let mut plan = CallPlan::new();

        let coins = plan.split_gas(vec![1_000]).unwrap();
        assert_eq!(coins, vec![CallArg::NestedResult(0, 0)]);

        plan.move_call(target("deposit"), vec![CallArg::object(pool), coins[0].clone()])
            .unwrap();

        assert_eq!(plan.commands().len(), 2);
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_dangling_result() {
        let mut plan = CallPlan::new();
        let result = plan.move_call(target("deposit"), vec![CallArg::NestedResult(0, 0)]);
        assert!(matches!(result, Err(PlanError::DanglingResult { at: 0, command: 0, index: 0 })));
        assert!(plan.is_empty());

        plan.split_gas(vec![5]).unwrap();
        let result = plan.move_call(target("deposit"), vec![CallArg::NestedResult(0, 1)]);
        assert!(matches!(result, Err(PlanError::DanglingResult { index: 1, .. })));
    }

    #[test]
    fn test_empty_split() {
        let mut plan = CallPlan::new();
        assert!(matches!(plan.split_gas(vec![]), Err(PlanError::EmptySplit)));
    }

    #[test]
    fn test_command_limit() {
        let mut plan = CallPlan::new();
        for _ in 0..MAX_COMMANDS {
            plan.move_call(target("borrow"), vec![]).unwrap();
        }
        assert!(matches!(
            plan.move_call(target("borrow"), vec![]),
            Err(PlanError::TooManyCommands)
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let mut plan = CallPlan::new();
        let coins = plan.split_gas(vec![2_500_000_000]).unwrap();
        plan.move_call(target("repay"), vec![CallArg::object(ObjectId::from_hex("0x7").unwrap()), coins[0].clone()])
            .unwrap();

        let json = plan.to_json().unwrap();
        assert_eq!(CallPlan::from_json(&json).unwrap(), plan);
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"{
            "commands": [
                {
                    "command": "move_call",
                    "target": "0x42::defi::repay",
                    "arguments": [{ "kind": "nested_result", "value": [3, 0] }]
                }
            ]
        }"#;
        assert!(matches!(CallPlan::from_json(json), Err(PlanError::DanglingResult { .. })));
        assert!(matches!(CallPlan::from_json("{"), Err(PlanError::Json(_))));
    }
}
