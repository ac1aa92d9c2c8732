#![no_std]

multiversx_sc::imports!();

pub mod ballot;
pub mod deadline;
pub mod errors;
pub mod events;
pub mod guards;
pub mod identity;
pub mod proposals;
pub mod types;
pub mod voting_proxy;
pub mod workflow;

use types::{ProposalPolicy, WorkflowStatus};

// ============================================================
// Contract
// ============================================================

/// Single-authority election. The deployer is the administrator and
/// drives the workflow; registered voters cast one vote each.
#[multiversx_sc::contract]
pub trait Voting:
    guards::GuardsModule
    + events::EventsModule
    + identity::IdentityModule
    + proposals::ProposalsModule
    + deadline::DeadlineModule
    + workflow::WorkflowModule
    + ballot::BallotModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, proposal_policy: ProposalPolicy) {
        let administrator = self.blockchain().get_caller();
        self.administrator().set(&administrator);
        self.proposal_policy().set(proposal_policy);
        self.workflow_status().set(WorkflowStatus::Registration);
        self.total_votes().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
