multiversx_sc::imports!();

use crate::types::Proposal;

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration (fixed at deploy) ──

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getContributionEnd)]
    #[storage_mapper("contributionEnd")]
    fn contribution_end(&self) -> SingleValueMapper<u64>;

    #[view(getVoteDuration)]
    #[storage_mapper("voteDuration")]
    fn vote_duration(&self) -> SingleValueMapper<u64>;

    #[view(getQuorumPercent)]
    #[storage_mapper("quorumPercent")]
    fn quorum_percent(&self) -> SingleValueMapper<u64>;

    // ── Treasury ledger ──

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getAvailableFunds)]
    #[storage_mapper("availableFunds")]
    fn available_funds(&self) -> SingleValueMapper<BigUint>;

    /// Cumulative value released by execution and admin withdrawal
    #[view(getTotalReleased)]
    #[storage_mapper("totalReleased")]
    fn total_released(&self) -> SingleValueMapper<BigUint>;

    // ── Investors ──

    #[view(getShares)]
    #[storage_mapper("shares")]
    fn shares(&self, investor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("investors")]
    fn investors(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals ──

    #[view(getNextProposalId)]
    #[storage_mapper("nextProposalId")]
    fn next_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
