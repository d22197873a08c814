multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — derived lifecycle, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Deadline not reached. Investors can vote.
    Voting,
    /// Deadline reached and quorum currently met. Anyone can execute.
    Passed,
    /// Deadline reached without quorum. Can never be executed.
    Rejected,
    /// Funds sent. Terminal state.
    Executed,
}

// ============================================================
// Proposal — the stored spending request
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub creator: ManagedAddress<M>,
    pub name: ManagedBuffer<M>,
    pub amount: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    /// Sum of the shares each distinct voter held when voting
    pub votes: BigUint<M>,
    /// Block timestamp at which voting closes and execution opens
    pub deadline: u64,
    pub executed: bool,
}

// ============================================================
// Proposal Snapshot — read model returned by views
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalSnapshot<M: ManagedTypeApi> {
    pub id: u64,
    pub creator: ManagedAddress<M>,
    pub name: ManagedBuffer<M>,
    pub amount: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    pub votes: BigUint<M>,
    pub voter_count: u64,
    pub deadline: u64,
    pub executed: bool,
    pub status: ProposalStatus,
}
