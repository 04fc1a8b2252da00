use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::{ Address as _, Ledger }, Address, String };
use sparrow::constants::ASSET_DECIMALS;

use super::setup::{ units, PoolTest, UNLOCK_PERIOD };

#[test]
fn share_metadata() {
    let test = PoolTest::new();

    assert_eq!(test.pool.decimals(), ASSET_DECIMALS);
    assert_eq!(test.pool.name(), String::from_str(&test.env, "Sparrow Staked XLM"));
    assert_eq!(test.pool.symbol(), String::from_str(&test.env, "spXLM"));
}

#[test]
fn transferred_shares_can_be_unlocked_by_receiver() {
    let test = PoolTest::new();
    let user = test.staker(units(10));
    let receiver = Address::generate(&test.env);

    test.pool.transfer(&user, &receiver, &units(4));
    assert_eq!(test.pool.balance(&user), units(6));
    assert_eq!(test.pool.balance(&receiver), units(4));

    let request_id = test.pool.request_unlock(&receiver, &units(4), &0);
    test.jump(UNLOCK_PERIOD);
    assert_eq!(test.pool.claim_unlock(&receiver, &request_id), units(4));
    assert_eq!(test.asset.balance(&receiver), units(4));
}

#[test]
fn transfer_from_spends_allowance() {
    let test = PoolTest::new();
    let user = test.staker(units(10));
    let spender = Address::generate(&test.env);
    let receiver = Address::generate(&test.env);
    let expiration = test.env.ledger().sequence() + 100;

    test.pool.approve(&user, &spender, &units(3), &expiration);
    assert_eq!(test.pool.allowance(&user, &spender), units(3));

    test.pool.transfer_from(&spender, &user, &receiver, &units(2));

    assert_eq!(test.pool.allowance(&user, &spender), units(1));
    assert_eq!(test.pool.balance(&receiver), units(2));
    assert_eq!(test.pool.balance(&user), units(8));
}

#[test]
fn expired_allowance_reads_zero() {
    let test = PoolTest::new();
    let user = test.staker(units(10));
    let spender = Address::generate(&test.env);
    let expiration = test.env.ledger().sequence() + 10;

    test.pool.approve(&user, &spender, &units(3), &expiration);
    test.env.ledger().with_mut(|li| {
        li.sequence_number = expiration + 1;
    });

    assert_eq!(test.pool.allowance(&user, &spender), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #206)")]
fn transfer_from_above_allowance_fails() {
    let test = PoolTest::new();
    let user = test.staker(units(10));
    let spender = Address::generate(&test.env);
    let expiration = test.env.ledger().sequence() + 100;

    test.pool.approve(&user, &spender, &units(1), &expiration);
    test.pool.transfer_from(&spender, &user, &spender, &units(2));
}

#[test]
#[should_panic(expected = "Error(Contract, #205)")]
fn transfer_above_balance_fails() {
    let test = PoolTest::new();
    let user = test.staker(units(10));
    let receiver = Address::generate(&test.env);

    test.pool.transfer(&user, &receiver, &(units(10) + 1));
}

#[test]
#[should_panic(expected = "Error(Contract, #103)")]
fn transfer_into_escrow_fails() {
    let test = PoolTest::new();
    let user = test.staker(units(10));

    test.pool.transfer(&user, &test.pool.address, &units(1));
}

#[test]
#[should_panic(expected = "Error(Contract, #109)")]
fn burn_is_not_supported() {
    let test = PoolTest::new();
    let user = test.staker(units(10));

    test.pool.burn(&user, &units(1));
}

#[test]
#[should_panic(expected = "Error(Contract, #109)")]
fn burn_from_is_not_supported() {
    let test = PoolTest::new();
    let user = test.staker(units(10));
    let spender = Address::generate(&test.env);

    test.pool.burn_from(&spender, &user, &units(1));
}
