multiversx_sc::imports!();

use crate::types::WorkflowStatus;

/// Change notifications. Emitted only as the last step of a successful
/// call, so every entry corresponds to committed state.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("voterRegistered")]
    fn voter_registered_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("workflowStatusChanged")]
    fn workflow_status_changed_event(
        &self,
        #[indexed] previous_status: WorkflowStatus,
        #[indexed] new_status: WorkflowStatus,
    );

    #[event("proposalRegistered")]
    fn proposal_registered_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
    );

    #[event("voted")]
    fn voted_event(&self, #[indexed] voter: &ManagedAddress, #[indexed] proposal_id: u64);

    #[event("deadlineSet")]
    fn deadline_set_event(&self, #[indexed] timestamp: u64);

    #[event("deadlineRemoved")]
    fn deadline_removed_event(&self);
}
