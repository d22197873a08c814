multiversx_sc::imports!();

use crate::errors::ContributionError;
use crate::rules;

// ============================================================
// Contribution ledger: EGLD in, shares minted 1:1
// ============================================================

#[multiversx_sc::module]
pub trait ContributionModule:
    crate::storage::StorageModule + crate::events::EventsModule
{
    #[payable("EGLD")]
    #[endpoint(contribute)]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        let now = self.blockchain().get_block_timestamp();

        if let Err(err) = self.record_contribution(&caller, &amount, now) {
            sc_panic!(err.message());
        }
    }

    fn record_contribution(
        &self,
        caller: &ManagedAddress,
        amount: &BigUint,
        now: u64,
    ) -> Result<(), ContributionError> {
        if !rules::contribution_window_open(now, self.contribution_end().get()) {
            return Err(ContributionError::WindowClosed);
        }
        if *amount == 0u64 {
            return Err(ContributionError::InvalidAmount);
        }

        self.shares(caller).update(|s| *s += amount);
        self.investors().insert(caller.clone());
        self.total_shares().update(|ts| *ts += amount);
        self.available_funds().update(|funds| *funds += amount);

        self.contribution_event(caller, amount, &self.shares(caller).get());
        Ok(())
    }

    #[view(isInvestor)]
    fn is_investor(&self, principal: &ManagedAddress) -> bool {
        self.investors().contains(principal)
    }
}
