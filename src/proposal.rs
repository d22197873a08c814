multiversx_sc::imports!();

use crate::errors::ProposalError;
use crate::rules;
use crate::types::Proposal;

// ============================================================
// Proposal registry: append-only, ids start at 0
// ============================================================

#[multiversx_sc::module]
pub trait ProposalModule:
    crate::storage::StorageModule + crate::events::EventsModule
{
    /// Any investor can propose, before or after the contribution window closes.
    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        name: ManagedBuffer,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        match self.register_proposal(&caller, name, amount, recipient, now) {
            Ok(proposal_id) => proposal_id,
            Err(err) => sc_panic!(err.message()),
        }
    }

    fn register_proposal(
        &self,
        caller: &ManagedAddress,
        name: ManagedBuffer,
        amount: BigUint,
        recipient: ManagedAddress,
        now: u64,
    ) -> Result<u64, ProposalError> {
        if !self.investors().contains(caller) {
            return Err(ProposalError::NotInvestor);
        }

        // ── Guardrail: per-proposal cap at half of available funds ──
        let cap = rules::spending_cap(&self.available_funds().get());
        if amount > cap {
            return Err(ProposalError::AmountTooLarge);
        }

        let proposal_id = self.next_proposal_id().get();
        let deadline = rules::deadline_after(now, self.vote_duration().get());

        self.proposal_created_event(proposal_id, caller, &recipient, deadline, &amount);

        let proposal = Proposal {
            id: proposal_id,
            creator: caller.clone(),
            name,
            amount,
            recipient,
            votes: BigUint::zero(),
            deadline,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.next_proposal_id().set(proposal_id + 1);

        Ok(proposal_id)
    }

    fn proposal_exists(&self, proposal_id: u64) -> bool {
        proposal_id < self.next_proposal_id().get()
    }
}
