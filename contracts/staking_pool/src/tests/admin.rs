extern crate std;

use soroban_sdk::{ testutils::Address as _, Address, BytesN };
use sparrow::{ constants::SCHEMA_VERSION, error::ErrorCode };
use test_case::test_case;

use super::setup::{ units, PoolTest };
use crate::storage::utils;

#[test_case(500, 300 => Ok(()); "defaults")]
#[test_case(1_000, 0 => Ok(()); "total at cap")]
#[test_case(0, 0 => Ok(()); "no fees")]
#[test_case(600, 401 => Err(Ok(ErrorCode::FeeTooHigh)); "total above cap")]
#[test_case(11_000, 0 => Err(Ok(ErrorCode::FeeTooHigh)); "dao component above cap")]
#[test_case(0, 10_001 => Err(Ok(ErrorCode::FeeTooHigh)); "dev component above cap")]
fn set_fee_structure(
    dao_fee_bps: u32,
    dev_fee_bps: u32
) -> Result<(), Result<ErrorCode, soroban_sdk::InvokeError>> {
    let test = PoolTest::new();

    let result = test.pool
        .try_set_fee_structure(&test.governance, &dao_fee_bps, &dev_fee_bps)
        .map(|inner| inner.unwrap());
    if result.is_ok() {
        let config = test.pool.query_config();
        assert_eq!((config.dao_fee_bps, config.dev_fee_bps), (dao_fee_bps, dev_fee_bps));
    }
    result
}

#[test]
fn setters_require_governance() {
    let test = PoolTest::new();
    let stranger = Address::generate(&test.env);
    let not_governance = Err(Ok(ErrorCode::NotGovernance));

    assert_eq!(test.pool.try_set_fee_structure(&stranger, &0, &0), not_governance);
    assert_eq!(test.pool.try_set_min_stake_amount(&stranger, &1), not_governance);
    assert_eq!(test.pool.try_set_unlock_period(&stranger, &1), not_governance);
    assert_eq!(test.pool.try_set_claim_window(&stranger, &1), not_governance);
    assert_eq!(test.pool.try_pause(&stranger), not_governance);
    assert_eq!(test.pool.try_unpause(&stranger), not_governance);
    assert_eq!(test.pool.try_withdraw(&stranger, &stranger, &1), not_governance);
    assert_eq!(test.pool.try_deposit(&stranger, &1), not_governance);
    assert_eq!(test.pool.try_migrate(&stranger), not_governance);
    assert_eq!(
        test.pool.try_upgrade(&stranger, &BytesN::from_array(&test.env, &[0u8; 32])),
        not_governance
    );
}

#[test]
fn update_parameters() {
    let test = PoolTest::new();

    test.pool.set_min_stake_amount(&test.governance, &units(5));
    test.pool.set_unlock_period(&test.governance, &3_600);
    test.pool.set_claim_window(&test.governance, &0);

    let config = test.pool.query_config();
    assert_eq!(config.min_stake_amount, units(5));
    assert_eq!(config.unlock_period, 3_600);
    assert_eq!(config.claim_window, 0);

    assert_eq!(
        test.pool.try_set_min_stake_amount(&test.governance, &-1),
        Err(Ok(ErrorCode::NegativeAmount))
    );
}

#[test]
fn pause_only_gates_stake() {
    let test = PoolTest::new();
    let user = test.staker(units(10));
    test.pool.pause(&test.governance);
    assert!(test.pool.query_config().paused);

    test.reward(units(1));
    let request_id = test.pool.request_unlock(&user, &units(5), &0);
    test.pool.cancel_unlock(&user, &request_id);
}

#[test]
fn withdraw_respects_commitments() {
    let test = PoolTest::new();
    let user = test.staker(units(100));
    test.reward(units(10));
    test.pool.request_unlock(&user, &units(10), &0);
    let treasury = Address::generate(&test.env);

    // 110 held, 10.92 locked, 0.8 in fees
    let surplus = units(110) - 109_200_000 - 8_000_000;
    assert_eq!(test.pool.query_liquid_balance(), surplus);
    assert_eq!(
        test.pool.try_withdraw(&test.governance, &treasury, &(surplus + 1)),
        Err(Ok(ErrorCode::InsufficientLiquidityAfterCommitments))
    );

    test.pool.withdraw(&test.governance, &treasury, &surplus);
    assert_eq!(test.asset.balance(&treasury), surplus);
    test.assert_solvent();

    assert_eq!(
        test.pool.try_withdraw(&test.governance, &treasury, &1),
        Err(Ok(ErrorCode::InsufficientLiquidityAfterCommitments))
    );

    // delegated funds keep backing the shares
    let state = test.pool.query_state();
    assert_eq!(state.total_pooled, 1_092_000_000);
    assert_eq!(test.pool.query_exchange_rate(), 1_092_000_000_000_000_000);
}

#[test]
fn deposit_tops_up_without_minting() {
    let test = PoolTest::new();
    test.staker(units(100));
    test.asset_admin.mint(&test.governance, &units(50));

    test.pool.deposit(&test.governance, &units(50));

    assert_eq!(test.pool_balance(), units(150));
    assert_eq!(test.pool.balance(&test.governance), 0);
    let state = test.pool.query_state();
    assert_eq!(state.total_shares, units(100));
    assert_eq!(state.total_pooled, units(100));
    assert_eq!(test.pool.query_liquid_balance(), units(150));

    assert_eq!(test.pool.try_deposit(&test.governance, &0), Err(Ok(ErrorCode::ZeroAmount)));
}

#[test]
fn withdraw_after_deposit_restores_liquidity() {
    let test = PoolTest::new();
    let user = test.staker(units(10));
    let treasury = Address::generate(&test.env);
    test.pool.withdraw(&test.governance, &treasury, &units(10));

    let request_id = test.pool.request_unlock(&user, &units(10), &0);
    test.jump(super::setup::UNLOCK_PERIOD);
    assert_eq!(
        test.pool.try_claim_unlock(&user, &request_id),
        Err(Ok(ErrorCode::InsufficientLiquidity))
    );

    test.asset_admin.mint(&test.governance, &units(10));
    test.pool.deposit(&test.governance, &units(10));
    assert_eq!(test.pool.claim_unlock(&user, &request_id), units(10));
}

#[test]
fn stats_report_pool() {
    let test = PoolTest::new();
    let user = test.staker(units(100));
    test.reward(units(10));
    test.pool.request_unlock(&user, &units(10), &0);

    let stats = test.pool.query_stats();
    assert_eq!(stats.total_pooled, 1_092_000_000);
    assert_eq!(stats.total_shares, units(100));
    assert_eq!(stats.exchange_rate, 1_092_000_000_000_000_000);
    assert_eq!(stats.liquid_balance, units(110) - 109_200_000 - 8_000_000);
    assert_eq!(stats.total_locked_in_unlocks, 109_200_000);
    assert_eq!(stats.accumulated_dao_fee, 5_000_000);
    assert_eq!(stats.accumulated_dev_fee, 3_000_000);
    assert_eq!(stats.unlock_period, super::setup::UNLOCK_PERIOD);
    assert_eq!(stats.claim_window, super::setup::CLAIM_WINDOW);
    assert_eq!(test.pool.query_total_supply(), units(100));
}

#[test]
fn migrate_advances_older_schema_once() {
    let test = PoolTest::new();
    assert_eq!(test.pool.try_migrate(&test.governance), Err(Ok(ErrorCode::SchemaUpToDate)));

    test.env.as_contract(&test.pool.address, || {
        utils::save_schema_version(&test.env, SCHEMA_VERSION - 1);
    });
    test.pool.migrate(&test.governance);
    assert_eq!(test.pool.query_schema_version(), SCHEMA_VERSION);
    assert_eq!(test.pool.try_migrate(&test.governance), Err(Ok(ErrorCode::SchemaUpToDate)));
}

#[test]
fn migrate_rejects_newer_schema() {
    let test = PoolTest::new();
    test.env.as_contract(&test.pool.address, || {
        utils::save_schema_version(&test.env, SCHEMA_VERSION + 1);
    });

    assert_eq!(test.pool.try_migrate(&test.governance), Err(Ok(ErrorCode::UnknownSchemaVersion)));
}
