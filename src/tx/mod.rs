// Transaction call construction

mod call;
mod plan;

pub use call::{CallArg, Command, MoveTarget};
pub use plan::{CallPlan, PlanError, MAX_COMMANDS};
