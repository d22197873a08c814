#![no_std]

multiversx_sc::imports!();

pub mod contribution;
pub mod errors;
pub mod events;
pub mod investor_dao_proxy;
pub mod proposal;
pub mod rules;
pub mod storage;
pub mod treasury;
pub mod types;
pub mod views;
pub mod voting;

use errors::DeployError;

// ============================================================
// Contract
// ============================================================

/// Pooled-treasury DAO. Investors contribute EGLD during a fixed window and
/// receive one share per unit contributed. Afterwards funds leave the
/// treasury only through quorum-approved proposals or the admin
/// `withdrawEther` path.
#[multiversx_sc::contract]
pub trait InvestorDao:
    storage::StorageModule
    + events::EventsModule
    + contribution::ContributionModule
    + proposal::ProposalModule
    + voting::VotingModule
    + treasury::TreasuryModule
    + views::ViewsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the admin. Durations are in seconds.
    #[init]
    fn init(&self, contribution_duration: u64, vote_duration: u64, quorum_percent: u64) {
        let admin = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        if let Err(err) =
            self.configure_treasury(&admin, contribution_duration, vote_duration, quorum_percent, now)
        {
            sc_panic!(err.message());
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    fn configure_treasury(
        &self,
        admin: &ManagedAddress,
        contribution_duration: u64,
        vote_duration: u64,
        quorum_percent: u64,
        now: u64,
    ) -> Result<(), DeployError> {
        if quorum_percent > rules::MAX_QUORUM_PERCENT {
            return Err(DeployError::InvalidQuorum);
        }

        self.admin().set(admin);
        self.contribution_end()
            .set(rules::deadline_after(now, contribution_duration));
        self.vote_duration().set(vote_duration);
        self.quorum_percent().set(quorum_percent);
        self.total_shares().set(BigUint::zero());
        self.available_funds().set(BigUint::zero());
        self.total_released().set(BigUint::zero());
        self.next_proposal_id().set(0u64);
        Ok(())
    }
}
