multiversx_sc::imports!();

use crate::errors::{ERR_NOT_ADMINISTRATOR, ERR_WRONG_PHASE};
use crate::types::WorkflowStatus;

/// Authorization and phase guards shared by every mutating endpoint.
/// Each endpoint runs the caller check first, then the phase check,
/// before touching any other storage.
#[multiversx_sc::module]
pub trait GuardsModule {
    fn require_administrator(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == self.administrator().get(), ERR_NOT_ADMINISTRATOR);
        caller
    }

    fn require_status(&self, expected: WorkflowStatus) {
        require!(self.workflow_status().get() == expected, ERR_WRONG_PHASE);
    }

    /// Passes for `latest` and every status before it.
    fn require_status_at_most(&self, latest: WorkflowStatus) {
        require!(self.workflow_status().get() <= latest, ERR_WRONG_PHASE);
    }

    fn is_administrator(&self, address: &ManagedAddress) -> bool {
        *address == self.administrator().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("workflowStatus")]
    fn workflow_status(&self) -> SingleValueMapper<WorkflowStatus>;
}
