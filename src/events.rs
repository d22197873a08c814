multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] investor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_investor_shares: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] deadline: u64,
        amount: &BigUint,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("etherWithdrawn")]
    fn ether_withdrawn_event(
        &self,
        #[indexed] admin: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );
}
