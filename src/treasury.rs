multiversx_sc::imports!();

use crate::errors::{ExecutionError, WithdrawalError};
use crate::rules;

// ============================================================
// Treasury guard: every outbound transfer goes through here.
// State is committed before funds leave the contract.
// ============================================================

#[multiversx_sc::module]
pub trait TreasuryModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::proposal::ProposalModule
{
    // ========================================================
    // ENDPOINT: executeProposal
    // Only after the voting deadline, win or lose. Quorum is
    // measured against total shares at execution time.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let now = self.blockchain().get_block_timestamp();

        if let Err(err) = self.release_proposal_funds(proposal_id, now) {
            sc_panic!(err.message());
        }
    }

    fn release_proposal_funds(&self, proposal_id: u64, now: u64) -> Result<(), ExecutionError> {
        if !self.proposal_exists(proposal_id) {
            return Err(ExecutionError::NotFound);
        }

        let mut proposal = self.proposals(proposal_id).get();
        if proposal.executed {
            return Err(ExecutionError::AlreadyExecuted);
        }
        if rules::voting_open(now, proposal.deadline) {
            return Err(ExecutionError::VotingStillOpen);
        }
        if !rules::quorum_reached(
            &proposal.votes,
            &self.total_shares().get(),
            self.quorum_percent().get(),
        ) {
            return Err(ExecutionError::QuorumNotMet);
        }
        // Earlier releases may have drained funds since the proposal was capped.
        if proposal.amount > self.available_funds().get() {
            return Err(ExecutionError::InsufficientFunds);
        }

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);
        self.debit_available_funds(&proposal.amount);

        self.proposal_executed_event(proposal_id, &proposal.recipient, &proposal.amount);
        self.send()
            .direct_non_zero_egld(&proposal.recipient, &proposal.amount);
        Ok(())
    }

    // ========================================================
    // ENDPOINT: withdrawEther
    // Admin release path, independent of any proposal.
    // ========================================================

    #[endpoint(withdrawEther)]
    fn withdraw_ether(&self, amount: BigUint, recipient: ManagedAddress) {
        let caller = self.blockchain().get_caller();

        if let Err(err) = self.release_admin_funds(&caller, &amount, &recipient) {
            sc_panic!(err.message());
        }
    }

    fn release_admin_funds(
        &self,
        caller: &ManagedAddress,
        amount: &BigUint,
        recipient: &ManagedAddress,
    ) -> Result<(), WithdrawalError> {
        if *caller != self.admin().get() {
            return Err(WithdrawalError::NotAdmin);
        }
        if *amount > self.available_funds().get() {
            return Err(WithdrawalError::InsufficientFunds);
        }

        self.debit_available_funds(amount);

        self.ether_withdrawn_event(caller, recipient, amount);
        self.send().direct_non_zero_egld(recipient, amount);
        Ok(())
    }

    /// Callers must have checked `amount <= availableFunds`.
    fn debit_available_funds(&self, amount: &BigUint) {
        self.available_funds().update(|funds| *funds -= amount);
        self.total_released().update(|released| *released += amount);
    }
}
