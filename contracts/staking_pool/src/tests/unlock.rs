extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address };
use sparrow::{ constants::MAX_PENDING_UNLOCKS, error::ErrorCode };

use super::setup::{ units, PoolTest, CLAIM_WINDOW, START_TIME, UNLOCK_PERIOD };
use crate::storage::UnlockRequest;

/// Scenario with 100 units staked and 10 units of rewards added.
fn rewarded_pool<'a>() -> (PoolTest<'a>, Address) {
    let test = PoolTest::new();
    let user = test.staker(units(100));
    test.reward(units(10));
    (test, user)
}

#[test]
fn request_unlock_locks_price() {
    let (test, user) = rewarded_pool();

    let preview = test.pool.preview_unlock(&units(10));
    let request_id = test.pool.request_unlock(&user, &units(10), &0);

    assert_eq!(preview, 109_200_000);
    assert_eq!(request_id, 0);
    assert_eq!(test.pool.query_unlock_request(&user, &request_id), UnlockRequest {
        id: 0,
        owner: user.clone(),
        share_amount: units(10),
        asset_amount_locked: 109_200_000,
        requested_at: START_TIME,
        unlock_at: START_TIME + UNLOCK_PERIOD,
        expires_at: Some(START_TIME + UNLOCK_PERIOD + CLAIM_WINDOW),
    });

    // shares leave circulation into the pool's escrow, supply is unchanged
    assert_eq!(test.pool.balance(&user), units(90));
    assert_eq!(test.pool.balance(&test.pool.address), units(10));
    let state = test.pool.query_state();
    assert_eq!(state.total_locked_in_unlocks, 109_200_000);
    assert_eq!(state.total_shares, units(100));
    assert_eq!(state.total_pooled, 1_092_000_000);

    // later rewards leave the locked amount alone
    test.reward(units(10));
    assert_eq!(test.pool.query_state().total_locked_in_unlocks, 109_200_000);
    assert_eq!(test.pool.query_unlock_request(&user, &request_id).asset_amount_locked, 109_200_000);
    test.assert_solvent();
}

#[test]
fn claim_before_unlock_fails() {
    let (test, user) = rewarded_pool();
    let request_id = test.pool.request_unlock(&user, &units(10), &0);

    test.jump(UNLOCK_PERIOD - 1);
    assert_eq!(test.pool.try_claim_unlock(&user, &request_id), Err(Ok(ErrorCode::TooEarly)));
}

#[test]
fn claim_pays_locked_amount() {
    let (test, user) = rewarded_pool();
    let request_id = test.pool.request_unlock(&user, &units(10), &0);
    test.reward(units(10));

    test.jump(UNLOCK_PERIOD);
    let rate_before = test.pool.query_exchange_rate();
    let paid = test.pool.claim_unlock(&user, &request_id);

    assert_eq!(paid, 109_200_000);
    assert_eq!(test.asset.balance(&user), 109_200_000);
    assert_eq!(test.pool.balance(&test.pool.address), 0);
    assert_eq!(test.pool.query_unlock_request_count(&user), 0);

    let state = test.pool.query_state();
    assert_eq!(state.total_locked_in_unlocks, 0);
    assert_eq!(state.total_shares, units(90));
    // holders keep the accrual forfeited by the claimed shares
    assert!(test.pool.query_exchange_rate() >= rate_before);
    test.assert_solvent();

    assert_eq!(
        test.pool.try_claim_unlock(&user, &request_id),
        Err(Ok(ErrorCode::RequestNotFound))
    );
}

#[test]
fn claim_after_window_fails_but_expired_claim_restores_shares() {
    let (test, user) = rewarded_pool();
    let request_id = test.pool.request_unlock(&user, &units(10), &0);

    test.jump(UNLOCK_PERIOD + CLAIM_WINDOW);
    assert_eq!(test.pool.try_claim_expired(&user, &request_id), Err(Ok(ErrorCode::NotExpiredYet)));

    test.jump(1);
    assert_eq!(
        test.pool.try_claim_unlock(&user, &request_id),
        Err(Ok(ErrorCode::ClaimWindowExpired))
    );
    assert_eq!(test.pool.try_cancel_unlock(&user, &request_id), Err(Ok(ErrorCode::RequestExpired)));

    test.pool.claim_expired(&user, &request_id);

    assert_eq!(test.pool.balance(&user), units(100));
    assert_eq!(test.asset.balance(&user), 0);
    let state = test.pool.query_state();
    assert_eq!(state.total_locked_in_unlocks, 0);
    assert_eq!(state.total_shares, units(100));
    assert_eq!(test.pool.query_unlock_request_count(&user), 0);
}

#[test]
fn cancel_restores_exact_shares() {
    let (test, user) = rewarded_pool();
    let request_id = test.pool.request_unlock(&user, &units(10), &0);

    test.pool.cancel_unlock(&user, &request_id);

    assert_eq!(test.pool.balance(&user), units(100));
    assert_eq!(test.pool.balance(&test.pool.address), 0);
    assert_eq!(test.pool.query_state().total_locked_in_unlocks, 0);
    assert_eq!(test.pool.query_unlock_request_count(&user), 0);
}

#[test]
fn cancel_after_unlock_within_window() {
    let (test, user) = rewarded_pool();
    let request_id = test.pool.request_unlock(&user, &units(10), &0);

    test.jump(UNLOCK_PERIOD + 1);
    test.pool.cancel_unlock(&user, &request_id);

    assert_eq!(test.pool.balance(&user), units(100));
}

#[test]
fn requests_keep_stable_ids() {
    let (test, user) = rewarded_pool();
    let first = test.pool.request_unlock(&user, &units(1), &0);
    let second = test.pool.request_unlock(&user, &units(2), &0);
    let third = test.pool.request_unlock(&user, &units(3), &0);

    test.pool.cancel_unlock(&user, &first);

    let requests = test.pool.query_unlock_requests(&user);
    assert_eq!(requests.len(), 2);
    assert_eq!(requests.get(0).unwrap().id, second);
    assert_eq!(requests.get(1).unwrap().id, third);
    assert_eq!(test.pool.query_unlock_request(&user, &third).share_amount, units(3));
    assert_eq!(
        test.pool.try_cancel_unlock(&user, &first),
        Err(Ok(ErrorCode::RequestNotFound))
    );
}

#[test]
fn requests_are_owner_scoped() {
    let (test, user) = rewarded_pool();
    let request_id = test.pool.request_unlock(&user, &units(10), &0);
    let other = test.staker(units(10));

    test.jump(UNLOCK_PERIOD);
    assert_eq!(
        test.pool.try_claim_unlock(&other, &request_id),
        Err(Ok(ErrorCode::RequestNotFound))
    );
}

#[test]
fn request_unlock_validation() {
    let (test, user) = rewarded_pool();

    assert_eq!(
        test.pool.try_request_unlock(&user, &(units(100) + 1), &0),
        Err(Ok(ErrorCode::InsufficientBalance))
    );
    assert_eq!(test.pool.try_request_unlock(&user, &0, &0), Err(Ok(ErrorCode::ZeroAmount)));
    assert_eq!(
        test.pool.try_request_unlock(&user, &units(10), &109_200_001),
        Err(Ok(ErrorCode::SlippageExceeded))
    );
    assert_eq!(test.pool.request_unlock(&user, &units(10), &109_200_000), 0);
}

#[test]
fn escrowed_shares_cannot_be_requested_twice() {
    let (test, user) = rewarded_pool();
    test.pool.request_unlock(&user, &units(60), &0);

    assert_eq!(
        test.pool.try_request_unlock(&user, &units(60), &0),
        Err(Ok(ErrorCode::InsufficientBalance))
    );
}

#[test]
fn pending_requests_are_capped() {
    let test = PoolTest::new();
    let user = test.staker(units(100));

    for expected_id in 0..MAX_PENDING_UNLOCKS as u64 {
        assert_eq!(test.pool.request_unlock(&user, &1, &0), expected_id);
    }

    assert_eq!(
        test.pool.try_request_unlock(&user, &1, &0),
        Err(Ok(ErrorCode::TooManyPendingRequests))
    );

    // resolving one frees a slot
    test.pool.cancel_unlock(&user, &0);
    assert_eq!(test.pool.request_unlock(&user, &1, &0), MAX_PENDING_UNLOCKS as u64);
}

#[test]
fn no_expiry_without_claim_window() {
    let test = PoolTest::with_claim_window(0);
    let user = test.staker(units(10));
    let request_id = test.pool.request_unlock(&user, &units(10), &0);

    assert_eq!(test.pool.query_unlock_request(&user, &request_id).expires_at, None);

    test.jump(365 * 86400);
    assert_eq!(test.pool.try_claim_expired(&user, &request_id), Err(Ok(ErrorCode::NotExpiredYet)));
    assert_eq!(test.pool.claim_unlock(&user, &request_id), units(10));
}

#[test]
fn claim_window_change_is_not_retroactive() {
    let (test, user) = rewarded_pool();
    let request_id = test.pool.request_unlock(&user, &units(10), &0);

    test.pool.set_claim_window(&test.governance, &0);
    test.pool.set_unlock_period(&test.governance, &(10 * UNLOCK_PERIOD));

    let request = test.pool.query_unlock_request(&user, &request_id);
    assert_eq!(request.unlock_at, START_TIME + UNLOCK_PERIOD);
    assert_eq!(request.expires_at, Some(START_TIME + UNLOCK_PERIOD + CLAIM_WINDOW));
}

#[test]
fn claim_fails_when_liquidity_was_delegated_away() {
    let (test, user) = rewarded_pool();
    let request_id = test.pool.request_unlock(&user, &units(10), &0);

    // simulate custody shrinking below commitments from outside the pool
    let drain = Address::generate(&test.env);
    let balance = test.pool_balance();
    test.asset.transfer(&test.pool.address, &drain, &(balance - units(1)));

    test.jump(UNLOCK_PERIOD);
    assert_eq!(
        test.pool.try_claim_unlock(&user, &request_id),
        Err(Ok(ErrorCode::InsufficientLiquidity))
    );
    assert_eq!(test.pool.query_unlock_request_count(&user), 1);
}

#[test]
fn full_exit_resets_pool() {
    let test = PoolTest::new();
    let user = test.staker(units(3));
    test.reward(7);

    let request_id = test.pool.request_unlock(&user, &units(3), &0);
    test.jump(UNLOCK_PERIOD);
    test.pool.claim_unlock(&user, &request_id);

    let state = test.pool.query_state();
    assert_eq!(state.total_shares, 0);
    assert_eq!(state.total_pooled, 0);
    assert_eq!(state.total_locked_in_unlocks, 0);
    test.assert_solvent();
}
