#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;

use voting::types::{DeadlineInfo, ProposalPolicy, VoterStatus, WorkflowStatus};
use voting::voting_proxy::VotingProxy;

pub const CODE_PATH: MxscPath = MxscPath::new("output/voting.mxsc.json");
pub const VOTING_ADDRESS: TestSCAddress = TestSCAddress::new("voting");

pub const ADMIN: TestAddress = TestAddress::new("admin");
pub const VOTER_A: TestAddress = TestAddress::new("voter-a");
pub const VOTER_B: TestAddress = TestAddress::new("voter-b");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");

pub const BALLOT_VOTERS: [TestAddress; 14] = [
    TestAddress::new("ballot-voter-01"),
    TestAddress::new("ballot-voter-02"),
    TestAddress::new("ballot-voter-03"),
    TestAddress::new("ballot-voter-04"),
    TestAddress::new("ballot-voter-05"),
    TestAddress::new("ballot-voter-06"),
    TestAddress::new("ballot-voter-07"),
    TestAddress::new("ballot-voter-08"),
    TestAddress::new("ballot-voter-09"),
    TestAddress::new("ballot-voter-10"),
    TestAddress::new("ballot-voter-11"),
    TestAddress::new("ballot-voter-12"),
    TestAddress::new("ballot-voter-13"),
    TestAddress::new("ballot-voter-14"),
];

pub fn managed_address(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from_address(&address.to_address())
}

pub fn managed_buffer(text: &str) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::from(text)
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, voting::ContractBuilder);
    blockchain
}

pub struct VotingTestState {
    pub world: ScenarioWorld,
}

impl VotingTestState {
    pub fn new(proposal_policy: ProposalPolicy) -> Self {
        let mut world = world();

        world.account(ADMIN).nonce(1);
        world.account(VOTER_A).nonce(1);
        world.account(VOTER_B).nonce(1);
        world.account(OUTSIDER).nonce(1);
        for voter in BALLOT_VOTERS {
            world.account(voter).nonce(1);
        }

        world
            .tx()
            .from(ADMIN)
            .typed(VotingProxy)
            .init(proposal_policy)
            .code(CODE_PATH)
            .new_address(VOTING_ADDRESS)
            .run();

        Self { world }
    }

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // ── Identity ──

    pub fn register_voter(&mut self, voter: TestAddress) {
        self.world
            .tx()
            .from(ADMIN)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .register_voter(managed_address(voter))
            .run();
    }

    pub fn register_voter_expect_err(&mut self, caller: TestAddress, voter: TestAddress, err: &str) {
        self.world
            .tx()
            .from(caller)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .register_voter(managed_address(voter))
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn voter_status(&mut self, address: TestAddress) -> VoterStatus {
        self.world
            .query()
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .get_voter_status(managed_address(address))
            .returns(ReturnsResult)
            .run()
    }

    pub fn voter_count(&mut self) -> u64 {
        self.world
            .query()
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .get_voter_count()
            .returns(ReturnsResult)
            .run()
    }

    // ── Workflow ──

    pub fn start_proposals_registration(&mut self) -> WorkflowStatus {
        self.world
            .tx()
            .from(ADMIN)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .start_proposals_registration()
            .returns(ReturnsResult)
            .run()
    }

    pub fn end_proposals_registration(&mut self) -> WorkflowStatus {
        self.world
            .tx()
            .from(ADMIN)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .end_proposals_registration()
            .returns(ReturnsResult)
            .run()
    }

    pub fn start_voting_session(&mut self) -> WorkflowStatus {
        self.world
            .tx()
            .from(ADMIN)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .start_voting_session()
            .returns(ReturnsResult)
            .run()
    }

    pub fn end_voting_session(&mut self) -> WorkflowStatus {
        self.world
            .tx()
            .from(ADMIN)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .end_voting_session()
            .returns(ReturnsResult)
            .run()
    }

    pub fn tally_votes(&mut self) -> WorkflowStatus {
        self.world
            .tx()
            .from(ADMIN)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .tally_votes()
            .returns(ReturnsResult)
            .run()
    }

    pub fn workflow_status(&mut self) -> WorkflowStatus {
        self.world
            .query()
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .get_workflow_status()
            .returns(ReturnsResult)
            .run()
    }

    // ── Proposals ──

    pub fn register_proposal(&mut self, caller: TestAddress, description: &str) -> u64 {
        self.world
            .tx()
            .from(caller)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .register_proposal(managed_buffer(description))
            .returns(ReturnsResult)
            .run()
    }

    pub fn register_proposal_expect_err(&mut self, caller: TestAddress, description: &str, err: &str) {
        self.world
            .tx()
            .from(caller)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .register_proposal(managed_buffer(description))
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn proposal_count(&mut self) -> u64 {
        self.world
            .query()
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .get_proposal_count()
            .returns(ReturnsResult)
            .run()
    }

    /// (description, vote count) of one proposal.
    pub fn proposal(&mut self, proposal_id: u64) -> (String, u64) {
        let proposal = self
            .world
            .query()
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .get_proposal(proposal_id)
            .returns(ReturnsResult)
            .run();
        assert_eq!(proposal.id, proposal_id);
        (
            String::from_utf8(proposal.description.to_vec()).unwrap(),
            proposal.vote_count,
        )
    }

    pub fn vote_counts(&mut self) -> Vec<u64> {
        let count = self.proposal_count();
        (0..count).map(|id| self.proposal(id).1).collect()
    }

    // ── Ballot ──

    pub fn vote(&mut self, voter: TestAddress, proposal_id: u64) {
        self.world
            .tx()
            .from(voter)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .vote(proposal_id)
            .run();
    }

    pub fn vote_expect_err(&mut self, voter: TestAddress, proposal_id: u64, err: &str) {
        self.world
            .tx()
            .from(voter)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .vote(proposal_id)
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn total_votes(&mut self) -> u64 {
        self.world
            .query()
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .get_total_votes()
            .returns(ReturnsResult)
            .run()
    }

    /// (id, description, vote count) of the winner.
    pub fn winning_proposal(&mut self) -> (u64, String, u64) {
        let winner = self
            .world
            .query()
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .get_winning_proposal()
            .returns(ReturnsResult)
            .run();
        (
            winner.id,
            String::from_utf8(winner.description.to_vec()).unwrap(),
            winner.vote_count,
        )
    }

    // ── Deadline ──

    pub fn set_deadline(&mut self, timestamp: u64) {
        self.world
            .tx()
            .from(ADMIN)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .set_deadline(timestamp)
            .run();
    }

    pub fn set_deadline_expect_err(&mut self, caller: TestAddress, timestamp: u64, err: &str) {
        self.world
            .tx()
            .from(caller)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .set_deadline(timestamp)
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn remove_deadline(&mut self) {
        self.world
            .tx()
            .from(ADMIN)
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .remove_deadline()
            .run();
    }

    pub fn deadline_info(&mut self) -> DeadlineInfo {
        self.world
            .query()
            .to(VOTING_ADDRESS)
            .typed(VotingProxy)
            .get_deadline_info()
            .returns(ReturnsResult)
            .run()
    }

    // ── Composite steps ──

    /// Registers `voters`, lets the first of them submit `descriptions`
    /// and opens voting. Falls back to the admin as proposer when
    /// `voters` is empty.
    pub fn open_voting(&mut self, voters: &[TestAddress], descriptions: &[&str]) {
        for voter in voters {
            self.register_voter(*voter);
        }
        self.start_proposals_registration();
        let proposer = voters.first().copied().unwrap_or(ADMIN);
        for description in descriptions {
            self.register_proposal(proposer, description);
        }
        self.end_proposals_registration();
        self.start_voting_session();
    }
}
