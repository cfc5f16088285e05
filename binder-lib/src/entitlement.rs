use binder_catalog::Plan;

use crate::error::BinderError;

/// Features unlocked by a user's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Entitlements {
    plan: Plan,
}

impl Entitlements {
    pub fn from_plan(plan: Plan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> Plan {
        self.plan
    }

    /// Only pro users may add or remove cards.
    pub fn can_edit_collection(&self) -> bool {
        self.plan == Plan::Pro
    }

    pub fn require_edit(&self) -> Result<(), BinderError> {
        if self.can_edit_collection() {
            Ok(())
        } else {
            Err(BinderError::FeatureLocked { plan: self.plan })
        }
    }
}
