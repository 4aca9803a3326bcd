// Move call argument toolkit
// Encodes pure arguments (BCS) and builds call plans for the greeting,
// NFT and lending pool modules.

pub mod core;
pub mod tx;
pub mod contracts;
pub mod network;
pub mod cli;

// Re-exports for convenience
pub use self::core::{encode_string, decode_string, CodecError, ObjectId, TransactionDigest};
pub use tx::{CallArg, CallPlan, Command, MoveTarget, PlanError};
pub use contracts::{ContractError, Greeting, LendingPool, NftCollection};
pub use network::{Config, Network};
pub use cli::{Cli, CliHandler};
