multiversx_sc::imports!();

use crate::errors::VoteError;
use crate::rules;

// ============================================================
// Voting engine: one share-weighted vote per investor per proposal
// ============================================================

#[multiversx_sc::module]
pub trait VotingModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::proposal::ProposalModule
{
    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        if let Err(err) = self.cast_vote(&caller, proposal_id, now) {
            sc_panic!(err.message());
        }
    }

    /// Weight is the caller's shares at the time of the vote. Later
    /// contributions do not change a vote already cast.
    fn cast_vote(
        &self,
        caller: &ManagedAddress,
        proposal_id: u64,
        now: u64,
    ) -> Result<(), VoteError> {
        if !self.proposal_exists(proposal_id) {
            return Err(VoteError::NotFound);
        }

        let weight = self.shares(caller).get();
        if weight == 0u64 {
            return Err(VoteError::NotInvestor);
        }
        if self.voters(proposal_id).contains(caller) {
            return Err(VoteError::AlreadyVoted);
        }

        let mut proposal = self.proposals(proposal_id).get();
        if !rules::voting_open(now, proposal.deadline) {
            return Err(VoteError::VotingClosed);
        }

        proposal.votes += &weight;
        self.proposals(proposal_id).set(&proposal);
        self.voters(proposal_id).insert(caller.clone());

        self.vote_event(proposal_id, caller, &weight);
        Ok(())
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, principal: &ManagedAddress) -> bool {
        self.voters(proposal_id).contains(principal)
    }
}
