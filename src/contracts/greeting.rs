// Greeting contract: shared object holding a text field

use super::{require_text, ContractError};
use crate::core::ObjectId;
use crate::tx::{CallArg, CallPlan, MoveTarget};

pub const MODULE: &str = "greeting";

/// Greeting module bound to a deployed package and greeting object
pub struct Greeting {
    package: ObjectId,
    object: ObjectId,
}

impl Greeting {
    pub fn new(package: ObjectId, object: ObjectId) -> Self {
        Self { package, object }
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    /// Create a new shared greeting ("Hello world!")
    pub fn new_greeting(&self) -> Result<CallPlan, ContractError> {
        let mut plan = CallPlan::new();
        plan.move_call(MoveTarget::new(self.package, MODULE, "new"), vec![])?;
        Ok(plan)
    }

    /// Replace the greeting text.
    /// Blank input is refused; otherwise the text is sent exactly as given.
    pub fn update_text(&self, text: &str) -> Result<CallPlan, ContractError> {
        require_text("greeting text", text)?;

        let text_arg = CallArg::pure_string(text)?;
        log::debug!("Updating greeting {} with {:?}", self.object, text);

        let mut plan = CallPlan::new();
        plan.move_call(
            MoveTarget::new(self.package, MODULE, "update_text"),
            vec![CallArg::object(self.object), text_arg],
        )?;
        Ok(plan)
    }
}
