// User-facing failure messages, one per distinct condition.

// ── Eligibility ──
pub const ERR_NOT_MEMBER: &str = "Caller is not a member";
pub const ERR_MEMBER_UNKNOWN: &str = "Address is not a member";
pub const ERR_ALREADY_VOTED: &str = "Already voted on this proposal";
pub const ERR_ALREADY_SPONSORED: &str = "Already sponsored this proposal";
pub const ERR_SPONSOR_MAY_NOT_VOTE: &str = "Sponsors may not vote on this proposal";
pub const ERR_COUNCIL_REQUIRES_MEMBER: &str = "Council members must be members";
pub const ERR_COMMITMENT_EXISTS: &str = "Commitment already recorded";

// ── Authorization ──
pub const ERR_NOT_PROPOSER: &str = "Only proposer can cancel";
pub const ERR_NOT_SELF_OR_ADMIN: &str = "Only the member or an administrator can read this commitment";

// ── Proposal state ──
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_NOT_SPONSORING: &str = "Proposal is not in sponsoring";
pub const ERR_NOT_VOTING: &str = "Proposal is not open for voting";
pub const ERR_SPONSORSHIP_COLLECTED: &str = "Sponsorship already collected";
pub const ERR_ALREADY_TERMINAL: &str = "Proposal is already closed";
pub const ERR_TIME_LIMIT_NOT_REACHED: &str = "Time limit has not elapsed";
pub const ERR_INVALID_TRANSITION: &str = "Invalid proposal state transition";

// ── Value ──
pub const ERR_ZERO_VALUE: &str = "Payment must be greater than zero";

// ── Configuration ──
pub const ERR_ORACLE_NOT_CONTRACT: &str = "Membership oracle must be a smart contract";
pub const ERR_ZERO_TIME_LIMIT: &str = "Time limit must be positive";
pub const ERR_ZERO_THRESHOLD: &str = "Thresholds must be positive";
