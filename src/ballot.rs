multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_VOTED, ERR_NOT_REGISTERED_VOTER, ERR_VOTING_CLOSED_BY_DEADLINE};
use crate::types::{Proposal, WorkflowStatus};

#[multiversx_sc::module]
pub trait BallotModule:
    crate::guards::GuardsModule
    + crate::events::EventsModule
    + crate::identity::IdentityModule
    + crate::proposals::ProposalsModule
    + crate::deadline::DeadlineModule
    + crate::workflow::WorkflowModule
{
    // ========================================================
    // ENDPOINT: vote
    // One vote per registered voter, enforced by the has_voted flag.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let voter_mapper = self.voters(&caller);
        require!(!voter_mapper.is_empty(), ERR_NOT_REGISTERED_VOTER);
        self.require_status(WorkflowStatus::VotingOpen);

        let mut voter = voter_mapper.get();
        require!(!voter.has_voted, ERR_ALREADY_VOTED);

        // The workflow may still say VotingOpen after the deadline elapsed
        require!(!self.is_deadline_elapsed(), ERR_VOTING_CLOSED_BY_DEADLINE);
        self.require_valid_proposal_id(proposal_id);

        let mut proposal = self.load_proposal(proposal_id);
        proposal.vote_count += 1;
        self.store_proposal(&proposal);
        self.total_votes().update(|total| *total += 1);

        voter.has_voted = true;
        voter.voted_proposal_id = Some(proposal_id);
        voter_mapper.set(&voter);

        self.voted_event(&caller, proposal_id);
    }

    // ========================================================
    // ENDPOINT: tallyVotes
    // VotingClosed → Tallied. The winner is fixed here, once.
    // ========================================================

    #[endpoint(tallyVotes)]
    fn tally_votes(&self) -> WorkflowStatus {
        let new_status = self.require_transition_from(WorkflowStatus::VotingClosed);

        let winning_id = self.compute_winning_proposal_id();
        self.winning_proposal_id().set(winning_id);

        self.commit_transition(WorkflowStatus::VotingClosed, new_status);
        new_status
    }

    /// Highest vote count wins; among equal counts the lowest id keeps
    /// its place, since only a strictly greater count replaces it.
    fn compute_winning_proposal_id(&self) -> u64 {
        let mut winning_id = 0u64;
        let mut winning_count = 0u64;
        for proposal in self.proposals().iter() {
            if proposal.vote_count > winning_count {
                winning_id = proposal.id;
                winning_count = proposal.vote_count;
            }
        }
        winning_id
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getWinningProposalId)]
    fn get_winning_proposal_id(&self) -> u64 {
        self.require_status(WorkflowStatus::Tallied);
        self.winning_proposal_id().get()
    }

    #[view(getWinningProposal)]
    fn get_winning_proposal(&self) -> Proposal<Self::Api> {
        self.require_status(WorkflowStatus::Tallied);
        self.load_proposal(self.winning_proposal_id().get())
    }

    /// Accepted votes so far; always equals the sum of all proposal counts.
    #[view(getTotalVotes)]
    fn get_total_votes(&self) -> u64 {
        self.total_votes().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("winningProposalId")]
    fn winning_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("totalVotes")]
    fn total_votes(&self) -> SingleValueMapper<u64>;
}
