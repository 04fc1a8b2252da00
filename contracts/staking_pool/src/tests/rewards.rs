extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address };
use sparrow::{ constants::EXCHANGE_RATE_PRECISION, error::ErrorCode };

use super::setup::{ units, PoolTest };

#[test]
fn rewards_skim_fees_and_raise_rate() {
    let test = PoolTest::new();
    let user = test.staker(units(100));
    assert_eq!(test.pool.balance(&user), units(100));
    assert_eq!(test.pool.query_exchange_rate(), EXCHANGE_RATE_PRECISION);

    let source = test.user(units(10));
    let user_portion = test.pool.add_rewards(&source, &units(10));

    let state = test.pool.query_state();
    assert_eq!(user_portion, 92_000_000);
    assert_eq!(state.accumulated_dao_fee, 5_000_000);
    assert_eq!(state.accumulated_dev_fee, 3_000_000);
    assert_eq!(state.total_pooled, 1_092_000_000);
    assert_eq!(state.total_shares, units(100));
    assert_eq!(test.pool.query_exchange_rate(), 1_092_000_000_000_000_000);
    assert_eq!(test.pool_balance(), units(110));
    assert_eq!(test.asset.balance(&source), 0);
    test.assert_solvent();
}

#[test]
fn zero_reward_fails() {
    let test = PoolTest::new();
    test.staker(units(100));
    let source = test.user(units(1));

    assert_eq!(test.pool.try_add_rewards(&source, &0), Err(Ok(ErrorCode::ZeroReward)));
    assert_eq!(test.pool.try_add_rewards(&source, &-5), Err(Ok(ErrorCode::NegativeAmount)));
}

#[test]
fn rewards_without_shares_fail() {
    let test = PoolTest::new();
    let source = test.user(units(1));

    assert_eq!(test.pool.try_add_rewards(&source, &units(1)), Err(Ok(ErrorCode::ZeroShares)));
    assert_eq!(test.asset.balance(&source), units(1));
}

#[test]
fn rate_never_decreases_across_rewards() {
    let test = PoolTest::new();
    test.staker(units(100));

    let mut last_rate = test.pool.query_exchange_rate();
    for amount in [1, 19, 333, units(1), units(7) + 3, units(250)] {
        test.reward(amount);
        let rate = test.pool.query_exchange_rate();
        assert!(rate >= last_rate, "rate dropped from {} to {}", last_rate, rate);
        last_rate = rate;
    }
}

#[test]
fn fee_truncation_goes_to_holders() {
    let test = PoolTest::new();
    test.staker(units(100));

    test.reward(19);

    let state = test.pool.query_state();
    assert_eq!(state.accumulated_dao_fee, 0);
    assert_eq!(state.accumulated_dev_fee, 0);
    assert_eq!(state.total_pooled, units(100) + 19);
}

#[test]
fn fee_change_applies_to_later_rewards_only() {
    let test = PoolTest::new();
    test.staker(units(100));
    test.reward(units(10));

    test.pool.set_fee_structure(&test.governance, &1_000, &0);
    test.reward(units(10));

    let state = test.pool.query_state();
    assert_eq!(state.accumulated_dao_fee, 5_000_000 + 10_000_000);
    assert_eq!(state.accumulated_dev_fee, 3_000_000);
    assert_eq!(state.total_pooled, 1_092_000_000 + 90_000_000);
}

#[test]
fn collect_dao_fees() {
    let test = PoolTest::new();
    test.staker(units(100));
    test.reward(units(10));
    let treasury = Address::generate(&test.env);

    let collected = test.pool.collect_dao_fees(&test.governance, &treasury);

    assert_eq!(collected, 5_000_000);
    assert_eq!(test.asset.balance(&treasury), 5_000_000);
    let state = test.pool.query_state();
    assert_eq!(state.accumulated_dao_fee, 0);
    assert_eq!(state.accumulated_dev_fee, 3_000_000);
    test.assert_solvent();

    assert_eq!(
        test.pool.try_collect_dao_fees(&test.governance, &treasury),
        Err(Ok(ErrorCode::NothingToCollect))
    );
}

#[test]
fn collect_dev_fees() {
    let test = PoolTest::new();
    test.staker(units(100));
    test.reward(units(10));
    let developer = Address::generate(&test.env);

    assert_eq!(test.pool.collect_dev_fees(&test.governance, &developer), 3_000_000);
    assert_eq!(test.asset.balance(&developer), 3_000_000);
    assert_eq!(test.pool.query_state().accumulated_dao_fee, 5_000_000);
}

#[test]
fn collect_all_fees() {
    let test = PoolTest::new();
    test.staker(units(100));
    test.reward(units(10));
    let treasury = Address::generate(&test.env);

    assert_eq!(test.pool.collect_all_fees(&test.governance, &treasury), 8_000_000);

    let state = test.pool.query_state();
    assert_eq!(state.accumulated_dao_fee, 0);
    assert_eq!(state.accumulated_dev_fee, 0);
    // collecting fees leaves the share price alone
    assert_eq!(test.pool.query_exchange_rate(), 1_092_000_000_000_000_000);
    assert_eq!(
        test.pool.try_collect_all_fees(&test.governance, &treasury),
        Err(Ok(ErrorCode::NothingToCollect))
    );
}

#[test]
fn collect_fees_requires_governance() {
    let test = PoolTest::new();
    test.staker(units(100));
    test.reward(units(10));
    let stranger = Address::generate(&test.env);

    assert_eq!(
        test.pool.try_collect_all_fees(&stranger, &stranger),
        Err(Ok(ErrorCode::NotGovernance))
    );
}
