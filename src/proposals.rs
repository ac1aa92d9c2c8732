multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_PROPOSAL_ID, ERR_NOT_REGISTERED_VOTER};
use crate::types::{Proposal, ProposalPolicy, WorkflowStatus};

#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::guards::GuardsModule + crate::events::EventsModule + crate::identity::IdentityModule
{
    // ========================================================
    // ENDPOINT: registerProposal
    // Who may submit is fixed at deploy time by the proposal policy.
    // Ids are dense and start at 0.
    // ========================================================

    #[endpoint(registerProposal)]
    fn register_proposal(&self, description: ManagedBuffer) -> u64 {
        let caller = match self.proposal_policy().get() {
            ProposalPolicy::AdministratorOnly => self.require_administrator(),
            ProposalPolicy::RegisteredVoters => {
                let caller = self.blockchain().get_caller();
                require!(self.is_registered_voter(&caller), ERR_NOT_REGISTERED_VOTER);
                caller
            },
        };
        self.require_status(WorkflowStatus::ProposalsOpen);

        let proposal_id = self.proposals().len() as u64;
        let proposal = Proposal {
            id: proposal_id,
            description,
            vote_count: 0u64,
        };
        self.proposals().push(&proposal);

        self.proposal_registered_event(proposal_id, &caller);

        proposal_id
    }

    fn require_valid_proposal_id(&self, proposal_id: u64) {
        require!(
            proposal_id < self.proposals().len() as u64,
            ERR_INVALID_PROPOSAL_ID
        );
    }

    /// Caller must have checked the id first.
    fn load_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.proposals().get(proposal_id as usize + 1)
    }

    fn store_proposal(&self, proposal: &Proposal<Self::Api>) {
        self.proposals().set(proposal.id as usize + 1, proposal);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposals().len() as u64
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_valid_proposal_id(proposal_id);
        self.load_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposals().len() as u64;
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for proposal_id in from..end {
            result.push(self.load_proposal(proposal_id));
        }
        result
    }

    #[view(getProposalPolicy)]
    fn get_proposal_policy(&self) -> ProposalPolicy {
        self.proposal_policy().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalPolicy")]
    fn proposal_policy(&self) -> SingleValueMapper<ProposalPolicy>;

    /// VecMapper indexes from 1: proposal `id` sits at index `id + 1`.
    #[storage_mapper("proposals")]
    fn proposals(&self) -> VecMapper<Proposal<Self::Api>>;
}
