multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal State — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// Collecting pooled funding until the sponsor threshold is met.
    Sponsoring,
    /// Sponsored. Members commit value for or against.
    Voting,
    /// Withdrawn by the proposer, or past its time limit. Terminal state.
    Cancelled,
    /// Support reached the vote threshold first. Terminal state.
    Approved,
    /// Opposition reached the vote threshold, or a tie. Terminal state.
    Rejected,
}

impl ProposalState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProposalState::Cancelled | ProposalState::Approved | ProposalState::Rejected
        )
    }

    /// Whether the lifecycle permits moving from `self` to `next`.
    pub fn can_transition_to(&self, next: ProposalState) -> bool {
        matches!(
            (self, next),
            (ProposalState::Sponsoring, ProposalState::Voting)
                | (ProposalState::Sponsoring, ProposalState::Cancelled)
                | (ProposalState::Voting, ProposalState::Approved)
                | (ProposalState::Voting, ProposalState::Rejected)
                | (ProposalState::Voting, ProposalState::Cancelled)
        )
    }
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    /// Opaque content the proposal acts on once approved
    pub payload: ManagedBuffer<M>,
    pub created_at: u64,
    pub state: ProposalState,
    pub sponsor_total: BigUint<M>,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    /// True once `now` is strictly past `created_at + time_limit`.
    pub fn is_past_time_limit(&self, now: u64, time_limit: u64) -> bool {
        now > self.created_at.saturating_add(time_limit)
    }

    /// Outcome of the voting phase once either side holds `threshold`.
    /// Ties resolve to rejection.
    pub fn tally(&self, threshold: &BigUint<M>) -> Option<ProposalState> {
        if &self.votes_for < threshold && &self.votes_against < threshold {
            return None;
        }
        if self.votes_for > self.votes_against {
            Some(ProposalState::Approved)
        } else {
            Some(ProposalState::Rejected)
        }
    }
}

// ============================================================
// Vote Commitment — one per (member, proposal), write-once
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteCommitment<M: ManagedTypeApi> {
    pub supports: bool,
    pub amount: BigUint<M>,
}

// ============================================================
// Funding Outcome — result of a sponsor / vote call that was
// allowed to run. Time-limit expiry must persist the forced
// cancellation, so it cannot be reported by reverting.
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FundingOutcome {
    /// Contribution was added to the proposal totals.
    Accepted,
    /// Proposal was past its time limit. It is now Cancelled and the
    /// attached value went back to the caller.
    TimeLimitExceeded,
}
