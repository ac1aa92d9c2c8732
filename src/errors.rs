// Failure messages, one per error kind. Every failed call reverts with
// exactly one of these and leaves no state or event behind.

// ── Unauthorized ──
pub const ERR_NOT_ADMINISTRATOR: &str = "Caller is not the administrator";
pub const ERR_NOT_REGISTERED_VOTER: &str = "Caller is not a registered voter";

pub const ERR_WRONG_PHASE: &str = "Operation not allowed in the current workflow status";
pub const ERR_ALREADY_REGISTERED: &str = "Voter already registered";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_INVALID_PROPOSAL_ID: &str = "Proposal does not exist";
pub const ERR_EMPTY_PROPOSAL_SET: &str = "Cannot start voting without proposals";
pub const ERR_DEADLINE_IN_PAST: &str = "Deadline must be in the future";
pub const ERR_VOTING_CLOSED_BY_DEADLINE: &str = "Voting deadline has passed";
