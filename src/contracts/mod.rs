// Call builders for the deployed Move modules

mod defi;
mod greeting;
mod nft;

pub use defi::LendingPool;
pub use greeting::Greeting;
pub use nft::NftCollection;

use thiserror::Error;

use crate::core::CodecError;
use crate::tx::PlanError;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Form fields are rejected when blank after trimming
fn require_text(field: &'static str, value: &str) -> Result<(), ContractError> {
    if value.trim().is_empty() {
        return Err(ContractError::EmptyField(field));
    }
    Ok(())
}
