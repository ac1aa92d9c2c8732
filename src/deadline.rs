multiversx_sc::imports!();

use crate::errors::ERR_DEADLINE_IN_PAST;
use crate::types::{DeadlineInfo, WorkflowStatus};

/// Optional absolute end of the voting window.
///
/// The deadline is passive data: nothing fires when it elapses. `vote`
/// checks it on every call, while moving the workflow to `VotingClosed`
/// still takes an explicit `endVotingSession` from the administrator
/// (or from a keeper acting with the administrator address).
#[multiversx_sc::module]
pub trait DeadlineModule: crate::guards::GuardsModule + crate::events::EventsModule {
    #[endpoint(setDeadline)]
    fn set_deadline(&self, timestamp: u64) {
        self.require_administrator();
        self.require_status_at_most(WorkflowStatus::ProposalsClosed);
        let now = self.blockchain().get_block_timestamp();
        require!(timestamp > now, ERR_DEADLINE_IN_PAST);

        self.voting_deadline().set(timestamp);

        self.deadline_set_event(timestamp);
    }

    /// No-op when no deadline is set.
    #[endpoint(removeDeadline)]
    fn remove_deadline(&self) {
        self.require_administrator();
        self.require_status_at_most(WorkflowStatus::ProposalsClosed);
        if self.voting_deadline().is_empty() {
            return;
        }

        self.voting_deadline().clear();

        self.deadline_removed_event();
    }

    fn is_deadline_elapsed(&self) -> bool {
        if self.voting_deadline().is_empty() {
            return false;
        }
        self.blockchain().get_block_timestamp() >= self.voting_deadline().get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDeadlineInfo)]
    fn get_deadline_info(&self) -> DeadlineInfo {
        let deadline_mapper = self.voting_deadline();
        if deadline_mapper.is_empty() {
            return DeadlineInfo {
                has_deadline: false,
                timestamp: 0,
            };
        }
        DeadlineInfo {
            has_deadline: true,
            timestamp: deadline_mapper.get(),
        }
    }

    /// Seconds left before the deadline; 0 when none is set or it has passed.
    #[view(getRemainingVotingTime)]
    fn get_remaining_voting_time(&self) -> u64 {
        if self.voting_deadline().is_empty() {
            return 0;
        }
        let now = self.blockchain().get_block_timestamp();
        self.voting_deadline().get().saturating_sub(now)
    }

    #[view(isVotingOpen)]
    fn is_voting_open(&self) -> bool {
        self.workflow_status().get() == WorkflowStatus::VotingOpen && !self.is_deadline_elapsed()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("votingDeadline")]
    fn voting_deadline(&self) -> SingleValueMapper<u64>;
}
