multiversx_sc::imports!();

use crate::errors::ERR_PROPOSAL_NOT_FOUND;
use crate::rules;
use crate::types::{ProposalSnapshot, ProposalStatus};

// ============================================================
// VIEWS — read-only queries
// ============================================================

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::proposal::ProposalModule
{
    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> ProposalSnapshot<Self::Api> {
        require!(self.proposal_exists(proposal_id), ERR_PROPOSAL_NOT_FOUND);
        let now = self.blockchain().get_block_timestamp();
        self.proposal_snapshot(proposal_id, now)
    }

    #[view(getProposals)]
    fn get_proposals(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<ProposalSnapshot<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let end = core::cmp::min(from.saturating_add(count), self.next_proposal_id().get());
        let now = self.blockchain().get_block_timestamp();

        for id in from..end {
            result.push(self.proposal_snapshot(id, now));
        }
        result
    }

    #[view(getProposalsByCreator)]
    fn get_proposals_by_creator(
        &self,
        creator: ManagedAddress,
    ) -> MultiValueEncoded<ProposalSnapshot<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();

        for id in 0..self.next_proposal_id().get() {
            if self.proposals(id).get().creator == creator {
                result.push(self.proposal_snapshot(id, now));
            }
        }
        result
    }

    /// Proposals whose voting window is still open.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<ProposalSnapshot<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();

        for id in 0..self.next_proposal_id().get() {
            let snapshot = self.proposal_snapshot(id, now);
            if snapshot.status == ProposalStatus::Voting {
                result.push(snapshot);
            }
        }
        result
    }

    #[view(getInvestors)]
    fn get_investors(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for investor in self.investors().iter().skip(from as usize).take(count as usize) {
            result.push(investor);
        }
        result
    }

    #[view(getTreasuryConfig)]
    fn get_treasury_config(&self) -> MultiValue4<ManagedAddress, u64, u64, u64> {
        (
            self.admin().get(),
            self.contribution_end().get(),
            self.vote_duration().get(),
            self.quorum_percent().get(),
        )
            .into()
    }

    /// (total shares, available funds, total released, investors, proposals)
    #[view(getTreasuryStats)]
    fn get_treasury_stats(&self) -> MultiValue5<BigUint, BigUint, BigUint, u64, u64> {
        (
            self.total_shares().get(),
            self.available_funds().get(),
            self.total_released().get(),
            self.investors().len() as u64,
            self.next_proposal_id().get(),
        )
            .into()
    }

    fn proposal_snapshot(&self, proposal_id: u64, now: u64) -> ProposalSnapshot<Self::Api> {
        let proposal = self.proposals(proposal_id).get();
        let status = rules::proposal_status(
            &proposal,
            now,
            &self.total_shares().get(),
            self.quorum_percent().get(),
        );

        ProposalSnapshot {
            id: proposal.id,
            creator: proposal.creator,
            name: proposal.name,
            amount: proposal.amount,
            recipient: proposal.recipient,
            votes: proposal.votes,
            voter_count: self.voters(proposal_id).len() as u64,
            deadline: proposal.deadline,
            executed: proposal.executed,
            status,
        }
    }
}
