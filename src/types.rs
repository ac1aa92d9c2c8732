multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Workflow Status — election lifecycle, strictly sequential
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
pub enum WorkflowStatus {
    /// Administrator enrolls voters.
    Registration,
    /// Proposals can be submitted.
    ProposalsOpen,
    ProposalsClosed,
    /// Registered voters cast their single vote.
    VotingOpen,
    VotingClosed,
    /// Winner computed. Terminal state.
    Tallied,
}

impl WorkflowStatus {
    /// The only status reachable from `self`, or `None` once tallied.
    pub fn next(self) -> Option<Self> {
        match self {
            WorkflowStatus::Registration => Some(WorkflowStatus::ProposalsOpen),
            WorkflowStatus::ProposalsOpen => Some(WorkflowStatus::ProposalsClosed),
            WorkflowStatus::ProposalsClosed => Some(WorkflowStatus::VotingOpen),
            WorkflowStatus::VotingOpen => Some(WorkflowStatus::VotingClosed),
            WorkflowStatus::VotingClosed => Some(WorkflowStatus::Tallied),
            WorkflowStatus::Tallied => None,
        }
    }
}

// ============================================================
// Proposal Policy — who may submit proposals
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalPolicy {
    RegisteredVoters,
    AdministratorOnly,
}

// ============================================================
// Voter — exists only once registered
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct Voter {
    pub is_registered: bool,
    /// Monotonic: never reset once true.
    pub has_voted: bool,
    pub voted_proposal_id: Option<u64>,
}

impl Voter {
    pub fn registered() -> Self {
        Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: None,
        }
    }
}

/// Role classification of an arbitrary address.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct VoterStatus {
    pub is_administrator: bool,
    pub is_registered: bool,
    pub has_voted: bool,
}

// ============================================================
// Proposal — also the shape of the winning proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub description: ManagedBuffer<M>,
    pub vote_count: u64,
}

// ============================================================
// Deadline
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct DeadlineInfo {
    pub has_deadline: bool,
    /// Block timestamp in seconds, 0 when no deadline is set.
    pub timestamp: u64,
}
