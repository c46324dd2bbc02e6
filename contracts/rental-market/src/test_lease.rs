//! Lease / return lifecycle and escrow settlement through the contract client.

#![cfg(test)]

use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{symbol_short, vec, Address, IntoVal, Symbol, TryFromVal, Val, Vec};

use rental_lib::{LeaseState, MarketError};

use crate::test::{Setup, DEPOSIT, RENT, STARTING_BALANCE};

const DEPOSIT_AMOUNT: i128 = DEPOSIT as i128;
const RENT_AMOUNT: i128 = RENT as i128;

/// Events published by the market contract itself, oldest first.
fn market_events(s: &Setup) -> std::vec::Vec<(Vec<Val>, Val)> {
    s.env
        .events()
        .all()
        .iter()
        .filter(|(contract, _, _)| *contract == s.contract_id)
        .map(|(_, topics, data)| (topics, data))
        .collect()
}

fn payouts(s: &Setup) -> std::vec::Vec<(Vec<Val>, i128)> {
    market_events(s)
        .into_iter()
        .filter(|(topics, _)| {
            topics
                .get(0)
                .and_then(|topic| Symbol::try_from_val(&s.env, &topic).ok())
                == Some(symbol_short!("transfer"))
        })
        .map(|(topics, data)| (topics, i128::try_from_val(&s.env, &data).unwrap()))
        .collect()
}

#[test]
fn test_lease_item_locks_deposit() {
    let s = Setup::new();
    let id = s.list();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);

    let item = s.client.get_item(&id);
    assert!(!item.is_available);
    assert_eq!(item.current_leaser, Some(s.leaser.clone()));
    assert_eq!(item.start_date, 5);
    assert_eq!(s.client.lease_state(&id), LeaseState::Leased);

    assert_eq!(s.balance(&s.leaser), STARTING_BALANCE - DEPOSIT_AMOUNT);
    assert_eq!(s.balance(&s.contract_id), DEPOSIT_AMOUNT);
    assert_eq!(s.balance(&s.owner), 0);
}

#[test]
fn test_lease_with_wrong_deposit_changes_nothing() {
    let s = Setup::new();
    let id = s.list();
    let before = s.client.get_item(&id);

    assert_eq!(
        s.client.try_lease_item(&id, &s.leaser, &(DEPOSIT - 1), &5),
        Err(Ok(MarketError::DepositMismatch))
    );
    assert_eq!(
        s.client.try_lease_item(&id, &s.leaser, &(DEPOSIT + 1), &5),
        Err(Ok(MarketError::DepositMismatch))
    );

    assert_eq!(s.client.get_item(&id), before);
    assert_eq!(s.balance(&s.leaser), STARTING_BALANCE);
    assert_eq!(s.balance(&s.contract_id), 0);
}

#[test]
fn test_lease_leased_item_fails() {
    let s = Setup::new();
    let id = s.list();
    let second = s.funded_user();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);
    let before = s.client.get_item(&id);

    assert_eq!(
        s.client.try_lease_item(&id, &second, &DEPOSIT, &6),
        Err(Ok(MarketError::AlreadyLeased))
    );
    assert_eq!(s.client.get_item(&id), before);
    assert_eq!(s.balance(&second), STARTING_BALANCE);
}

#[test]
fn test_lease_unknown_item() {
    let s = Setup::new();
    assert_eq!(
        s.client.try_lease_item(&7, &s.leaser, &DEPOSIT, &5),
        Err(Ok(MarketError::NotFound))
    );
}

#[test]
fn test_lease_requires_payment_token() {
    let s = Setup::uninitialized();
    let id = s.list();

    assert_eq!(
        s.client.try_lease_item(&id, &s.leaser, &DEPOSIT, &5),
        Err(Ok(MarketError::NotInitialized))
    );
    assert!(s.client.get_item(&id).is_available);
}

#[test]
fn test_return_item_settles_rent_and_deposit() {
    let s = Setup::new();
    let id = s.list();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);
    s.client.return_item(&id, &s.leaser, &RENT, &9);

    let item = s.client.get_item(&id);
    assert!(item.is_available);
    assert_eq!(item.current_leaser, None);
    assert_eq!(item.start_date, 0);
    assert_eq!(item.past_leasers, vec![&s.env, s.leaser.clone()]);

    assert_eq!(s.balance(&s.owner), RENT_AMOUNT);
    assert_eq!(s.balance(&s.leaser), STARTING_BALANCE - RENT_AMOUNT);
    assert_eq!(s.balance(&s.contract_id), 0);
}

#[test]
fn test_lease_item_emits_leased_event() {
    let s = Setup::new();
    let id = s.list();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);

    let (topics, data) = market_events(&s).pop().unwrap();
    assert_eq!(topics, (symbol_short!("leased"), id).into_val(&s.env));
    let (leaser, start_date) = <(Address, u64)>::try_from_val(&s.env, &data).unwrap();
    assert_eq!(leaser, s.leaser);
    assert_eq!(start_date, 5);
    // holding the deposit is not a payout
    assert!(payouts(&s).is_empty());
}

#[test]
fn test_return_item_emits_payouts_then_returned() {
    let s = Setup::new();
    let id = s.list();
    let other = s.funded_user();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);
    s.client.return_item(&id, &other, &RENT, &9);

    let events = market_events(&s);
    let tail = &events[events.len() - 3..];

    assert_eq!(
        tail[0].0,
        (symbol_short!("transfer"), s.owner.clone()).into_val(&s.env)
    );
    assert_eq!(i128::try_from_val(&s.env, &tail[0].1).unwrap(), RENT_AMOUNT);
    assert_eq!(
        tail[1].0,
        (symbol_short!("transfer"), other.clone()).into_val(&s.env)
    );
    assert_eq!(i128::try_from_val(&s.env, &tail[1].1).unwrap(), DEPOSIT_AMOUNT);

    assert_eq!(tail[2].0, (symbol_short!("returned"), id).into_val(&s.env));
    let (leaser, returner, end_date) =
        <(Address, Address, u64)>::try_from_val(&s.env, &tail[2].1).unwrap();
    assert_eq!(leaser, s.leaser);
    assert_eq!(returner, other);
    assert_eq!(end_date, 9);
    // end_date lives only in the event
    assert_eq!(s.client.get_item(&id).start_date, 0);
}

#[test]
fn test_zero_rent_return_pays_only_the_deposit() {
    let s = Setup::new();
    let id = s.list();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);
    s.client.return_item(&id, &s.leaser, &0, &9);

    let payouts = payouts(&s);
    assert_eq!(payouts.len(), 1);
    assert_eq!(
        payouts[0].0,
        (symbol_short!("transfer"), s.leaser.clone()).into_val(&s.env)
    );
    assert_eq!(payouts[0].1, DEPOSIT_AMOUNT);
    assert_eq!(s.balance(&s.owner), 0);
    assert_eq!(s.balance(&s.leaser), STARTING_BALANCE);
}

#[test]
fn test_return_available_item_fails() {
    let s = Setup::new();
    let id = s.list();
    let before = s.client.get_item(&id);

    assert_eq!(
        s.client.try_return_item(&id, &s.leaser, &RENT, &9),
        Err(Ok(MarketError::NotLeased))
    );
    assert_eq!(s.client.get_item(&id), before);
    assert_eq!(s.balance(&s.leaser), STARTING_BALANCE);
}

#[test]
fn test_return_forwards_attached_rent_unchecked() {
    let s = Setup::new();
    let id = s.list();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);
    s.client.return_item(&id, &s.leaser, &3, &9);

    assert_eq!(s.balance(&s.owner), 3);
    assert_eq!(s.balance(&s.leaser), STARTING_BALANCE - 3);
}

#[test]
fn test_return_by_another_caller_refunds_that_caller() {
    let s = Setup::new();
    let id = s.list();
    let other = s.funded_user();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);
    s.client.return_item(&id, &other, &RENT, &9);

    let item = s.client.get_item(&id);
    assert!(item.is_available);
    // the record names the leaser, the refund goes to the caller
    assert_eq!(item.past_leasers, vec![&s.env, s.leaser.clone()]);
    assert_eq!(s.balance(&other), STARTING_BALANCE - RENT_AMOUNT + DEPOSIT_AMOUNT);
    assert_eq!(s.balance(&s.leaser), STARTING_BALANCE - DEPOSIT_AMOUNT);
    assert_eq!(s.balance(&s.owner), RENT_AMOUNT);
}

#[test]
fn test_past_leasers_grow_once_per_cycle() {
    let s = Setup::new();
    let id = s.list();
    let second = s.funded_user();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &1);
    s.client.return_item(&id, &s.leaser, &RENT, &2);
    s.client.lease_item(&id, &second, &DEPOSIT, &3);

    // an active lease is not yet a past one
    assert_eq!(s.client.get_item(&id).past_leasers.len(), 1);

    s.client.return_item(&id, &second, &RENT, &4);
    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);
    s.client.return_item(&id, &s.leaser, &RENT, &6);

    assert_eq!(
        s.client.get_item(&id).past_leasers,
        vec![&s.env, s.leaser.clone(), second.clone(), s.leaser.clone()]
    );
    assert_eq!(s.balance(&s.owner), 3 * RENT_AMOUNT);
    assert_eq!(s.balance(&s.contract_id), 0);
}

#[test]
fn test_items_lease_independently() {
    let s = Setup::new();
    let first = s.list();
    let second = s.list();

    s.client.lease_item(&first, &s.leaser, &DEPOSIT, &5);

    assert_eq!(s.client.lease_state(&first), LeaseState::Leased);
    assert_eq!(s.client.lease_state(&second), LeaseState::Available);
    assert_eq!(
        s.client.try_return_item(&second, &s.leaser, &RENT, &9),
        Err(Ok(MarketError::NotLeased))
    );
}

#[test]
fn test_delete_leased_item_is_allowed() {
    let s = Setup::new();
    let id = s.list();

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);
    s.client.delete_item(&id);

    assert_eq!(s.client.try_get_item(&id), Err(Ok(MarketError::NotFound)));
    assert_eq!(
        s.client.try_return_item(&id, &s.leaser, &RENT, &9),
        Err(Ok(MarketError::NotFound))
    );
    // nothing releases the deposit once the record is gone
    assert_eq!(s.balance(&s.contract_id), DEPOSIT_AMOUNT);
}

#[test]
fn test_full_rental_scenario() {
    let s = Setup::new();
    let id = s.list();
    let stranger = Address::generate(&s.env);

    s.client.lease_item(&id, &s.leaser, &DEPOSIT, &5);
    assert!(!s.client.get_item(&id).is_available);

    assert_eq!(
        s.client.try_lease_item(&id, &s.leaser, &DEPOSIT, &6),
        Err(Ok(MarketError::AlreadyLeased))
    );
    assert_eq!(
        s.client.try_rate_item(&id, &stranger, &4),
        Err(Ok(MarketError::Unauthorized))
    );

    s.client.return_item(&id, &s.leaser, &RENT, &9);
    let item = s.client.get_item(&id);
    assert!(item.is_available);
    assert_eq!(item.past_leasers, vec![&s.env, s.leaser.clone()]);

    // current_leaser was cleared on return
    assert_eq!(
        s.client.try_rate_item(&id, &s.leaser, &4),
        Err(Ok(MarketError::Unauthorized))
    );
}
