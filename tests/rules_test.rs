use investor_dao::rules::*;
use investor_dao::types::{Proposal, ProposalStatus};
use multiversx_sc_scenario::imports::*;

fn amount(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

fn proposal(votes: u64, deadline: u64, executed: bool) -> Proposal<StaticApi> {
    Proposal {
        id: 0,
        creator: ManagedAddress::zero(),
        name: ManagedBuffer::from("Proposal1"),
        amount: amount(100),
        recipient: ManagedAddress::zero(),
        votes: amount(votes),
        deadline,
        executed,
    }
}

#[test]
fn contribution_window_closes_at_its_end() {
    assert!(contribution_window_open(2_999, 3_000));
    assert!(!contribution_window_open(3_000, 3_000));
    assert!(!contribution_window_open(5_000, 3_000));
}

#[test]
fn voting_closes_at_deadline() {
    assert!(voting_open(0, 1));
    assert!(!voting_open(1, 1));
}

#[test]
fn deadline_saturates_instead_of_wrapping() {
    assert_eq!(deadline_after(1_000, 2_000), 3_000);
    assert_eq!(deadline_after(u64::MAX - 1, 10), u64::MAX);
}

#[test]
fn spending_cap_is_half_rounded_down() {
    assert_eq!(spending_cap(&amount(6_000)), amount(3_000));
    assert_eq!(spending_cap(&amount(5_999)), amount(2_999));
    assert_eq!(spending_cap(&amount(1)), amount(0));
}

#[test]
fn quorum_compares_without_division() {
    let total = amount(6_000);

    assert!(quorum_reached(&amount(6_000), &total, 50));
    assert!(quorum_reached(&amount(3_000), &total, 50));
    assert!(!quorum_reached(&amount(2_999), &total, 50));
    assert!(!quorum_reached(&amount(1_000), &total, 50));

    assert!(quorum_reached(&amount(0), &total, 0));
    assert!(!quorum_reached(&amount(5_999), &total, 100));
    assert!(quorum_reached(&amount(6_000), &total, 100));
}

#[test]
fn status_follows_deadline_quorum_and_execution() {
    let total = amount(6_000);

    assert_eq!(
        proposal_status(&proposal(6_000, 100, false), 99, &total, 50),
        ProposalStatus::Voting
    );
    assert_eq!(
        proposal_status(&proposal(6_000, 100, false), 100, &total, 50),
        ProposalStatus::Passed
    );
    assert_eq!(
        proposal_status(&proposal(1_000, 100, false), 100, &total, 50),
        ProposalStatus::Rejected
    );
    assert_eq!(
        proposal_status(&proposal(6_000, 100, true), 500, &total, 50),
        ProposalStatus::Executed
    );
}
