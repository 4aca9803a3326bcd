// Lending pool: deposit, borrow and repay SUI

use super::ContractError;
use crate::core::ObjectId;
use crate::tx::{CallArg, CallPlan, MoveTarget};

pub const MODULE: &str = "defi";

/// Lending pool module bound to a deployed package and pool object
pub struct LendingPool {
    package: ObjectId,
    pool: ObjectId,
}

impl LendingPool {
    pub fn new(package: ObjectId, pool: ObjectId) -> Self {
        Self { package, pool }
    }

    pub fn pool(&self) -> ObjectId {
        self.pool
    }

    /// Deposit `amount` MIST taken from the gas coin
    pub fn deposit(&self, amount: u64) -> Result<CallPlan, ContractError> {
        self.with_coin("deposit", amount)
    }

    /// Borrow `amount` MIST from the pool
    pub fn borrow(&self, amount: u64) -> Result<CallPlan, ContractError> {
        check_amount(amount)?;

        let mut plan = CallPlan::new();
        plan.move_call(
            self.target("borrow"),
            vec![CallArg::object(self.pool), CallArg::pure_u64(amount)],
        )?;
        Ok(plan)
    }

    /// Repay `amount` MIST taken from the gas coin
    pub fn repay(&self, amount: u64) -> Result<CallPlan, ContractError> {
        self.with_coin("repay", amount)
    }

    fn with_coin(&self, function: &str, amount: u64) -> Result<CallPlan, ContractError> {
        check_amount(amount)?;

        let mut plan = CallPlan::new();
        let coins = plan.split_gas(vec![amount])?;
        let coin = coins
            .into_iter()
            .next()
            .ok_or(ContractError::InvalidAmount)?;

        plan.move_call(self.target(function), vec![CallArg::object(self.pool), coin])?;
        Ok(plan)
    }

    fn target(&self, function: &str) -> MoveTarget {
        MoveTarget::new(self.package, MODULE, function)
    }
}

fn check_amount(amount: u64) -> Result<(), ContractError> {
    if amount == 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}
