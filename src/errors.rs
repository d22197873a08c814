// ============================================================
// Error messages, surfaced to callers as user errors
// ============================================================

pub const ERR_INVALID_QUORUM: &str = "quorum must be between 0 and 100";

pub const ERR_WINDOW_CLOSED: &str = "contribution time has ended";
pub const ERR_INVALID_AMOUNT: &str = "contribution must be greater than zero";

pub const ERR_NOT_INVESTOR: &str = "only investors";
pub const ERR_AMOUNT_TOO_LARGE: &str = "the amount is too big";

pub const ERR_PROPOSAL_NOT_FOUND: &str = "proposal does not exist";
pub const ERR_ALREADY_VOTED: &str = "you can vote only once";
pub const ERR_VOTING_CLOSED: &str = "the proposal time has ended";

pub const ERR_ALREADY_EXECUTED: &str = "cannot execute the proposal that already executed";
pub const ERR_VOTING_STILL_OPEN: &str = "cannot execute the proposal before the end date";
pub const ERR_QUORUM_NOT_MET: &str = "votes are not enough to execute";

pub const ERR_NOT_ADMIN: &str = "only admin";
pub const ERR_INSUFFICIENT_FUNDS: &str = "not enough available funds";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeployError {
    InvalidQuorum,
}

impl DeployError {
    pub fn message(self) -> &'static str {
        match self {
            DeployError::InvalidQuorum => ERR_INVALID_QUORUM,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContributionError {
    WindowClosed,
    InvalidAmount,
}

impl ContributionError {
    pub fn message(self) -> &'static str {
        match self {
            ContributionError::WindowClosed => ERR_WINDOW_CLOSED,
            ContributionError::InvalidAmount => ERR_INVALID_AMOUNT,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalError {
    NotInvestor,
    /// Requested more than half of the currently available funds.
    AmountTooLarge,
}

impl ProposalError {
    pub fn message(self) -> &'static str {
        match self {
            ProposalError::NotInvestor => ERR_NOT_INVESTOR,
            ProposalError::AmountTooLarge => ERR_AMOUNT_TOO_LARGE,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteError {
    NotFound,
    NotInvestor,
    AlreadyVoted,
    VotingClosed,
}

impl VoteError {
    pub fn message(self) -> &'static str {
        match self {
            VoteError::NotFound => ERR_PROPOSAL_NOT_FOUND,
            VoteError::NotInvestor => ERR_NOT_INVESTOR,
            VoteError::AlreadyVoted => ERR_ALREADY_VOTED,
            VoteError::VotingClosed => ERR_VOTING_CLOSED,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExecutionError {
    NotFound,
    AlreadyExecuted,
    VotingStillOpen,
    QuorumNotMet,
    InsufficientFunds,
}

impl ExecutionError {
    pub fn message(self) -> &'static str {
        match self {
            ExecutionError::NotFound => ERR_PROPOSAL_NOT_FOUND,
            ExecutionError::AlreadyExecuted => ERR_ALREADY_EXECUTED,
            ExecutionError::VotingStillOpen => ERR_VOTING_STILL_OPEN,
            ExecutionError::QuorumNotMet => ERR_QUORUM_NOT_MET,
            ExecutionError::InsufficientFunds => ERR_INSUFFICIENT_FUNDS,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WithdrawalError {
    NotAdmin,
    InsufficientFunds,
}

impl WithdrawalError {
    pub fn message(self) -> &'static str {
        match self {
            WithdrawalError::NotAdmin => ERR_NOT_ADMIN,
            WithdrawalError::InsufficientFunds => ERR_INSUFFICIENT_FUNDS,
        }
    }
}
