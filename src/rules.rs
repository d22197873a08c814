multiversx_sc::imports!();

use crate::types::{Proposal, ProposalStatus};

/// Quorum is expressed in whole percent of total shares.
pub const PERCENT_DENOMINATOR: u64 = 100;

/// A single proposal may request at most 1/2 of available funds.
pub const SPENDING_CAP_DIVISOR: u64 = 2;

pub const MAX_QUORUM_PERCENT: u64 = PERCENT_DENOMINATOR;

pub fn contribution_window_open(now: u64, contribution_end: u64) -> bool {
    now < contribution_end
}

pub fn voting_open(now: u64, deadline: u64) -> bool {
    now < deadline
}

pub fn deadline_after(now: u64, duration: u64) -> u64 {
    now.saturating_add(duration)
}

pub fn spending_cap<M: ManagedTypeApi>(available_funds: &BigUint<M>) -> BigUint<M> {
    available_funds.clone() / SPENDING_CAP_DIVISOR
}

/// `votes * 100 >= quorum_percent * total_shares`, kept in integers.
pub fn quorum_reached<M: ManagedTypeApi>(
    votes: &BigUint<M>,
    total_shares: &BigUint<M>,
    quorum_percent: u64,
) -> bool {
    votes * PERCENT_DENOMINATOR >= total_shares * quorum_percent
}

/// Status as it would be judged by `executeProposal` at `now`.
pub fn proposal_status<M: ManagedTypeApi>(
    proposal: &Proposal<M>,
    now: u64,
    total_shares: &BigUint<M>,
    quorum_percent: u64,
) -> ProposalStatus {
    if proposal.executed {
        ProposalStatus::Executed
    } else if voting_open(now, proposal.deadline) {
        ProposalStatus::Voting
    } else if quorum_reached(&proposal.votes, total_shares, quorum_percent) {
        ProposalStatus::Passed
    } else {
        ProposalStatus::Rejected
    }
}
