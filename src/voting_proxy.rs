#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use crate::types::{DeadlineInfo, Proposal, ProposalPolicy, Voter, VoterStatus, WorkflowStatus};

pub struct VotingProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for VotingProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = VotingProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        VotingProxyMethods { wrapped_tx: tx }
    }
}

pub struct VotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> VotingProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ProposalPolicy>,
    >(
        self,
        proposal_policy: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&proposal_policy)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> VotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> VotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn register_voter<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        voter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerVoter")
            .argument(&voter)
            .original_result()
    }

    pub fn get_administrator(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdministrator")
            .original_result()
    }

    pub fn get_voter_status<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, VoterStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoterStatus")
            .argument(&address)
            .original_result()
    }

    pub fn get_voter<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<Voter>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoter")
            .argument(&address)
            .original_result()
    }

    pub fn get_voter_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoterCount")
            .original_result()
    }

    pub fn get_voters<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoters")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn register_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        description: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerProposal")
            .argument(&description)
            .original_result()
    }

    pub fn get_proposal_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCount")
            .original_result()
    }

    pub fn get_proposal<
        Arg0: ProxyArg<u64>,
    >(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposals<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_proposal_policy(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalPolicy> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalPolicy")
            .original_result()
    }

    pub fn set_deadline<
        Arg0: ProxyArg<u64>,
    >(
        self,
        timestamp: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDeadline")
            .argument(&timestamp)
            .original_result()
    }

    pub fn remove_deadline(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeDeadline")
            .original_result()
    }

    pub fn get_deadline_info(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, DeadlineInfo> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDeadlineInfo")
            .original_result()
    }

    pub fn get_remaining_voting_time(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRemainingVotingTime")
            .original_result()
    }

    pub fn is_voting_open(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isVotingOpen")
            .original_result()
    }

    pub fn start_proposals_registration(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, WorkflowStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("startProposalsRegistration")
            .original_result()
    }

    pub fn end_proposals_registration(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, WorkflowStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("endProposalsRegistration")
            .original_result()
    }

    pub fn start_voting_session(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, WorkflowStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("startVotingSession")
            .original_result()
    }

    pub fn end_voting_session(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, WorkflowStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("endVotingSession")
            .original_result()
    }

    pub fn get_workflow_status(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, WorkflowStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWorkflowStatus")
            .original_result()
    }

    pub fn vote<
        Arg0: ProxyArg<u64>,
    >(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn tally_votes(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, WorkflowStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("tallyVotes")
            .original_result()
    }

    pub fn get_winning_proposal_id(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWinningProposalId")
            .original_result()
    }

    pub fn get_winning_proposal(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWinningProposal")
            .original_result()
    }

    pub fn get_total_votes(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalVotes")
            .original_result()
    }
}
