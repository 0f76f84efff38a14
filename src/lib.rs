#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod membership;
pub mod membership_oracle_proxy;
pub mod types;

use errors::*;
use types::{FundingOutcome, Proposal, ProposalState, VoteCommitment};

// ============================================================
// Contract
// Proposal ledger: members propose, the collective funds a
// sponsoring phase, then funds a for/against vote.
// ============================================================

#[multiversx_sc::contract]
pub trait CollectiveGovernance: membership::MembershipModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `time_limit` is in seconds and covers both phases, measured from
    /// proposal creation.
    #[init]
    fn init(
        &self,
        time_limit: u64,
        sponsor_threshold: BigUint,
        vote_threshold: BigUint,
        initial_members: MultiValueEncoded<ManagedAddress>,
    ) {
        require!(time_limit > 0, ERR_ZERO_TIME_LIMIT);
        require!(
            sponsor_threshold > 0u64 && vote_threshold > 0u64,
            ERR_ZERO_THRESHOLD
        );

        self.time_limit().set(time_limit);
        self.sponsor_threshold().set(&sponsor_threshold);
        self.vote_threshold().set(&vote_threshold);
        self.sponsors_may_vote().set(true);
        self.proposal_count().set(0u64);

        for member in initial_members {
            self.members().insert(member);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, description: ManagedBuffer, payload: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let proposal_id = self.proposal_count().get() + 1u64;
        let timestamp = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            payload,
            created_at: timestamp,
            state: ProposalState::Sponsoring,
            sponsor_total: BigUint::zero(),
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);
        self.proposal_ids().push(&proposal_id);

        self.proposal_created_event(proposal_id, &caller, timestamp);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: cancelProposal
    // Proposer can withdraw an unfunded proposal.
    // ========================================================

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);

        require!(proposal.proposer == caller, ERR_NOT_PROPOSER);
        require!(
            proposal.state == ProposalState::Sponsoring,
            ERR_NOT_SPONSORING
        );
        require!(proposal.sponsor_total == 0u64, ERR_SPONSORSHIP_COLLECTED);

        self.transition(&mut proposal, ProposalState::Cancelled);
        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // ENDPOINT: sponsor
    // Pooled funding. Crossing the sponsor threshold opens voting.
    // ========================================================

    #[endpoint(sponsor)]
    #[payable("EGLD")]
    fn sponsor(&self, proposal_id: u64) -> FundingOutcome {
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, ERR_ZERO_VALUE);

        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);
        require!(
            proposal.state == ProposalState::Sponsoring,
            ERR_NOT_SPONSORING
        );
        self.require_votable(proposal_id, &caller);
        require!(
            self.sponsorships(proposal_id, &caller).is_empty(),
            ERR_ALREADY_SPONSORED
        );

        let now = self.blockchain().get_block_timestamp();
        if proposal.is_past_time_limit(now, self.time_limit().get()) {
            return self.cancel_expired_and_refund(&mut proposal, &caller, &payment);
        }

        proposal.sponsor_total += &payment;
        self.sponsorships(proposal_id, &caller).set(&payment);
        self.sponsored_event(proposal_id, &caller, &payment);

        if proposal.sponsor_total >= self.sponsor_threshold().get() {
            self.transition(&mut proposal, ProposalState::Voting);
        }
        self.proposals(proposal_id).set(&proposal);

        FundingOutcome::Accepted
    }

    // ========================================================
    // ENDPOINT: vote
    // Value-weighted for/against. The first side to reach the
    // vote threshold settles the proposal.
    // ========================================================

    #[endpoint(vote)]
    #[payable("EGLD")]
    fn vote(&self, proposal_id: u64, supports: bool) -> FundingOutcome {
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, ERR_ZERO_VALUE);

        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);
        self.require_votable(proposal_id, &caller);
        if !self.sponsors_may_vote().get() {
            require!(
                self.sponsorships(proposal_id, &caller).is_empty(),
                ERR_SPONSOR_MAY_NOT_VOTE
            );
        }
        require!(proposal.state == ProposalState::Voting, ERR_NOT_VOTING);

        let now = self.blockchain().get_block_timestamp();
        if proposal.is_past_time_limit(now, self.time_limit().get()) {
            return self.cancel_expired_and_refund(&mut proposal, &caller, &payment);
        }

        if supports {
            proposal.votes_for += &payment;
        } else {
            proposal.votes_against += &payment;
        }

        let commitment = VoteCommitment {
            supports,
            amount: payment.clone(),
        };
        self.record_commitment(proposal_id, &caller, &commitment);
        self.voted_event(proposal_id, &caller, supports, &payment);

        if let Some(outcome) = proposal.tally(&self.vote_threshold().get()) {
            self.transition(&mut proposal, outcome);
        }
        self.proposals(proposal_id).set(&proposal);

        FundingOutcome::Accepted
    }

    // ========================================================
    // ENDPOINT: expireProposal
    // Scheduler hook. Anyone can close an open proposal that is
    // past its time limit.
    // ========================================================

    #[endpoint(expireProposal)]
    fn expire_proposal(&self, proposal_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.state.is_terminal(), ERR_ALREADY_TERMINAL);

        let now = self.blockchain().get_block_timestamp();
        require!(
            proposal.is_past_time_limit(now, self.time_limit().get()),
            ERR_TIME_LIMIT_NOT_REACHED
        );

        self.transition(&mut proposal, ProposalState::Cancelled);
        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // ENDPOINT: setSponsorsMayVote
    // Whether a member who sponsored a proposal may also vote on it.
    // ========================================================

    #[only_owner]
    #[endpoint(setSponsorsMayVote)]
    fn set_sponsors_may_vote(&self, allowed: bool) {
        self.sponsors_may_vote().set(allowed);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    fn require_votable(&self, proposal_id: u64, caller: &ManagedAddress) {
        self.require_member(caller);
        require!(
            self.vote_commitments(proposal_id, caller).is_empty(),
            ERR_ALREADY_VOTED
        );
    }

    /// Moves `proposal` along the lifecycle and announces it. Does not persist.
    fn transition(&self, proposal: &mut Proposal<Self::Api>, next: ProposalState) {
        let previous = proposal.state;
        require!(previous.can_transition_to(next), ERR_INVALID_TRANSITION);

        proposal.state = next;
        self.proposal_state_changed_event(
            proposal.id,
            previous,
            next,
            self.blockchain().get_block_timestamp(),
        );
    }

    /// Time-limit path of `sponsor` / `vote`: the cancellation is kept and
    /// the attached value goes straight back to the caller.
    fn cancel_expired_and_refund(
        &self,
        proposal: &mut Proposal<Self::Api>,
        caller: &ManagedAddress,
        payment: &BigUint,
    ) -> FundingOutcome {
        self.transition(proposal, ProposalState::Cancelled);
        self.proposals(proposal.id).set(&*proposal);

        self.send().direct_egld(caller, payment);
        self.contribution_refunded_event(proposal.id, caller, payment);

        FundingOutcome::TimeLimitExceeded
    }

    fn record_commitment(
        &self,
        proposal_id: u64,
        member: &ManagedAddress,
        commitment: &VoteCommitment<Self::Api>,
    ) {
        let mapper = self.vote_commitments(proposal_id, member);
        require!(mapper.is_empty(), ERR_COMMITMENT_EXISTS);
        mapper.set(commitment);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        self.require_proposal(proposal_id).state
    }

    #[view(getProposalIds)]
    fn get_proposal_ids(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.proposal_ids().iter() {
            result.push(proposal_id);
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    /// `from` is a 1-based position in the creation-ordered id index.
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let ids = self.proposal_ids();
        let total = ids.len();
        let start = core::cmp::max(from as usize, 1);
        if count == 0 || start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count as usize - 1), total);

        for index in start..=end {
            result.push(self.proposals(ids.get(index)).get());
        }
        result
    }

    /// Proposals still in Sponsoring or Voting and within their time limit.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let now = self.blockchain().get_block_timestamp();
        let time_limit = self.time_limit().get();

        for i in 1..=total {
            if self.proposals(i).is_empty() {
                continue;
            }
            let proposal = self.proposals(i).get();
            if !proposal.state.is_terminal() && !proposal.is_past_time_limit(now, time_limit) {
                result.push(proposal);
            }
        }
        result
    }

    /// True when the proposal is open but a write would now cancel it.
    #[view(isExpired)]
    fn is_expired(&self, proposal_id: u64) -> bool {
        let proposal = self.require_proposal(proposal_id);
        let now = self.blockchain().get_block_timestamp();
        !proposal.state.is_terminal() && proposal.is_past_time_limit(now, self.time_limit().get())
    }

    #[view(votable)]
    fn votable(&self, proposal_id: u64, member: ManagedAddress) -> bool {
        self.is_member(&member) && self.vote_commitments(proposal_id, &member).is_empty()
    }

    /// Only the member itself or an administrator may read a commitment.
    #[view(getMemberCommitment)]
    fn get_member_commitment(
        &self,
        member: ManagedAddress,
        proposal_id: u64,
    ) -> Option<VoteCommitment<Self::Api>> {
        let caller = self.blockchain().get_caller();
        require!(
            caller == member || self.is_admin(&caller),
            ERR_NOT_SELF_OR_ADMIN
        );
        require!(self.is_member(&member), ERR_MEMBER_UNKNOWN);

        let mapper = self.vote_commitments(proposal_id, &member);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[view(getSponsorship)]
    fn get_sponsorship(&self, proposal_id: u64, member: ManagedAddress) -> BigUint {
        self.require_proposal(proposal_id);
        self.sponsorships(proposal_id, &member).get()
    }

    #[view(getTimeLimit)]
    fn get_time_limit(&self) -> u64 {
        self.time_limit().get()
    }

    #[view(getSponsorThreshold)]
    fn get_sponsor_threshold(&self) -> BigUint {
        self.sponsor_threshold().get()
    }

    #[view(getVoteThreshold)]
    fn get_vote_threshold(&self) -> BigUint {
        self.vote_threshold().get()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue4<u64, BigUint, BigUint, bool> {
        (
            self.time_limit().get(),
            self.sponsor_threshold().get(),
            self.vote_threshold().get(),
            self.sponsors_may_vote().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        timestamp: u64,
    );

    #[event("proposalStateChanged")]
    fn proposal_state_changed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] previous_state: ProposalState,
        #[indexed] new_state: ProposalState,
        timestamp: u64,
    );

    #[event("sponsored")]
    fn sponsored_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] sponsor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] supports: bool,
        amount: &BigUint,
    );

    #[event("contributionRefunded")]
    fn contribution_refunded_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] caller: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("timeLimit")]
    fn time_limit(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("sponsorThreshold")]
    fn sponsor_threshold(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("voteThreshold")]
    fn vote_threshold(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("sponsorsMayVote")]
    fn sponsors_may_vote(&self) -> SingleValueMapper<bool>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalIds")]
    fn proposal_ids(&self) -> VecMapper<u64>;

    // ── Per-member commitments ──

    #[storage_mapper("voteCommitments")]
    fn vote_commitments(
        &self,
        proposal_id: u64,
        member: &ManagedAddress,
    ) -> SingleValueMapper<VoteCommitment<Self::Api>>;

    #[storage_mapper("sponsorships")]
    fn sponsorships(&self, proposal_id: u64, member: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
