multiversx_sc::imports!();

use crate::errors::{ERR_EMPTY_PROPOSAL_SET, ERR_WRONG_PHASE};
use crate::types::WorkflowStatus;

#[multiversx_sc::module]
pub trait WorkflowModule:
    crate::guards::GuardsModule
    + crate::events::EventsModule
    + crate::identity::IdentityModule
    + crate::proposals::ProposalsModule
{
    // ========================================================
    // ENDPOINTS: phase transitions
    // Administrator only, each valid from its predecessor only.
    // The tally transition lives with the ballot box.
    // ========================================================

    #[endpoint(startProposalsRegistration)]
    fn start_proposals_registration(&self) -> WorkflowStatus {
        let new_status = self.require_transition_from(WorkflowStatus::Registration);
        self.commit_transition(WorkflowStatus::Registration, new_status);
        new_status
    }

    #[endpoint(endProposalsRegistration)]
    fn end_proposals_registration(&self) -> WorkflowStatus {
        let new_status = self.require_transition_from(WorkflowStatus::ProposalsOpen);
        self.commit_transition(WorkflowStatus::ProposalsOpen, new_status);
        new_status
    }

    #[endpoint(startVotingSession)]
    fn start_voting_session(&self) -> WorkflowStatus {
        let new_status = self.require_transition_from(WorkflowStatus::ProposalsClosed);
        require!(!self.proposals().is_empty(), ERR_EMPTY_PROPOSAL_SET);
        self.commit_transition(WorkflowStatus::ProposalsClosed, new_status);
        new_status
    }

    #[endpoint(endVotingSession)]
    fn end_voting_session(&self) -> WorkflowStatus {
        let new_status = self.require_transition_from(WorkflowStatus::VotingOpen);
        self.commit_transition(WorkflowStatus::VotingOpen, new_status);
        new_status
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Runs the role and phase guards of a transition out of `from`
    /// and returns the status it leads to. Writes nothing.
    fn require_transition_from(&self, from: WorkflowStatus) -> WorkflowStatus {
        self.require_administrator();
        self.require_status(from);
        match from.next() {
            Some(next) => next,
            None => sc_panic!(ERR_WRONG_PHASE),
        }
    }

    fn commit_transition(&self, previous: WorkflowStatus, new_status: WorkflowStatus) {
        self.workflow_status().set(new_status);
        self.workflow_status_changed_event(previous, new_status);
    }

    #[view(getWorkflowStatus)]
    fn get_workflow_status(&self) -> WorkflowStatus {
        self.workflow_status().get()
    }
}
