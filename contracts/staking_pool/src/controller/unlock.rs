use sparrow::{
    constants::MAX_PENDING_UNLOCKS,
    error::{ ErrorCode, SparrowResult },
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ log, Address, Env, Vec };
use soroban_token_sdk::TokenUtils;

use crate::{
    balance::{ escrow_shares, read_balance, release_shares, spend_balance },
    events::PoolEvents,
    math::shares::shares_to_asset,
    storage::{
        get_config,
        get_state,
        get_unlock_requests,
        save_state,
        save_unlock_requests,
        utils,
        UnlockRequest,
    },
};

pub fn find_request(
    env: &Env,
    requests: &Vec<UnlockRequest>,
    request_id: u64
) -> SparrowResult<(u32, UnlockRequest)> {
    for (index, request) in requests.iter().enumerate() {
        if request.id == request_id {
            return Ok((index as u32, request));
        }
    }

    log!(env, "Staking Pool: unlock request {} not found", request_id);
    Err(ErrorCode::RequestNotFound)
}

/// Escrows `share_amount` of the owner's shares and locks their asset value
/// at the current exchange rate. Returns the new request id.
pub fn request_unlock(
    env: &Env,
    owner: &Address,
    share_amount: i128,
    min_asset_out: i128
) -> SparrowResult<u64> {
    let config = get_config(env)?;
    let mut state = get_state(env)?;
    let mut requests = get_unlock_requests(env, owner);

    utils::check_nonnegative_amount(env, share_amount)?;
    validate!(env, share_amount > 0, ErrorCode::ZeroAmount, "Staking Pool: unlock of zero shares")?;

    let balance = read_balance(env, owner.clone());
    validate!(
        env,
        balance >= share_amount,
        ErrorCode::InsufficientBalance,
        "Staking Pool: share balance {} below {}",
        balance,
        share_amount
    )?;

    let asset_amount_locked = shares_to_asset(
        env,
        share_amount,
        state.total_shares,
        state.total_pooled
    )?;
    validate!(
        env,
        asset_amount_locked > 0,
        ErrorCode::ZeroAmount,
        "Staking Pool: {} shares are worth nothing",
        share_amount
    )?;
    validate!(
        env,
        asset_amount_locked >= min_asset_out,
        ErrorCode::SlippageExceeded,
        "Staking Pool: {} asset below minimum out {}",
        asset_amount_locked,
        min_asset_out
    )?;
    validate!(
        env,
        requests.len() < MAX_PENDING_UNLOCKS,
        ErrorCode::TooManyPendingRequests,
        "Staking Pool: {} pending unlock requests",
        requests.len()
    )?;

    let now = env.ledger().timestamp();
    let unlock_at = now.safe_add(config.unlock_period, env)?;
    let expires_at = if config.claim_window > 0 {
        Some(unlock_at.safe_add(config.claim_window, env)?)
    } else {
        None
    };

    let request_id = state.next_request_id;
    state.next_request_id = state.next_request_id.safe_add(1, env)?;
    state.total_locked_in_unlocks = state.total_locked_in_unlocks.safe_add(asset_amount_locked, env)?;

    escrow_shares(env, owner, share_amount)?;
    requests.push_back(UnlockRequest {
        id: request_id,
        owner: owner.clone(),
        share_amount,
        asset_amount_locked,
        requested_at: now,
        unlock_at,
        expires_at,
    });
    save_unlock_requests(env, owner, &requests);
    save_state(env, &state);

    TokenUtils::new(env).events().transfer(owner.clone(), env.current_contract_address(), share_amount);
    PoolEvents::unlock_requested(
        env,
        owner.clone(),
        request_id,
        share_amount,
        asset_amount_locked,
        unlock_at
    );

    Ok(request_id)
}

/// Returns the escrowed shares of a pending request to its owner.
pub fn cancel_unlock(env: &Env, owner: &Address, request_id: u64) -> SparrowResult {
    let mut state = get_state(env)?;
    let mut requests = get_unlock_requests(env, owner);
    let (index, request) = find_request(env, &requests, request_id)?;

    let now = env.ledger().timestamp();
    validate!(
        env,
        !request.is_expired(now),
        ErrorCode::RequestExpired,
        "Staking Pool: request {} expired, use claim_expired",
        request_id
    )?;

    state.total_locked_in_unlocks = state.total_locked_in_unlocks.safe_sub(
        request.asset_amount_locked,
        env
    )?;
    release_shares(env, owner, request.share_amount)?;
    requests.remove(index);
    save_unlock_requests(env, owner, &requests);
    save_state(env, &state);

    TokenUtils::new(env).events().transfer(env.current_contract_address(), owner.clone(), request.share_amount);
    PoolEvents::unlock_cancelled(env, owner.clone(), request_id, request.share_amount);

    Ok(())
}

/// Burns the escrowed shares of an unlocked request and pays out the asset
/// amount locked at request time. Returns the amount paid.
pub fn claim_unlock(env: &Env, owner: &Address, request_id: u64) -> SparrowResult<i128> {
    let config = get_config(env)?;
    let mut state = get_state(env)?;
    let mut requests = get_unlock_requests(env, owner);
    let (index, request) = find_request(env, &requests, request_id)?;

    let now = env.ledger().timestamp();
    validate!(
        env,
        request.is_unlocked(now),
        ErrorCode::TooEarly,
        "Staking Pool: request {} unlocks at {}, now {}",
        request_id,
        request.unlock_at,
        now
    )?;
    validate!(
        env,
        !request.is_expired(now),
        ErrorCode::ClaimWindowExpired,
        "Staking Pool: claim window of request {} has passed",
        request_id
    )?;

    // every outstanding commitment, this request included, must be covered
    let balance = utils::custody_balance(env, &config);
    let commitments = state.commitments(env)?;
    validate!(
        env,
        balance >= commitments && balance >= request.asset_amount_locked,
        ErrorCode::InsufficientLiquidity,
        "Staking Pool: balance {} cannot cover commitments {}",
        balance,
        commitments
    )?;

    state.total_locked_in_unlocks = state.total_locked_in_unlocks.safe_sub(
        request.asset_amount_locked,
        env
    )?;
    state.total_shares = state.total_shares.safe_sub(request.share_amount, env)?;
    state.total_pooled = state.total_pooled.safe_sub(request.asset_amount_locked, env)?;
    if state.total_shares == 0 {
        // rounding residue with no holder left stays in the liquid reserve
        state.total_pooled = 0;
    }

    spend_balance(env, env.current_contract_address(), request.share_amount)?;
    requests.remove(index);
    save_unlock_requests(env, owner, &requests);
    save_state(env, &state);

    utils::transfer_asset(
        env,
        &config,
        &env.current_contract_address(),
        owner,
        request.asset_amount_locked
    );

    TokenUtils::new(env).events().burn(env.current_contract_address(), request.share_amount);
    PoolEvents::unlock_claimed(
        env,
        owner.clone(),
        request_id,
        request.share_amount,
        request.asset_amount_locked
    );

    Ok(request.asset_amount_locked)
}

/// Resolves a request whose claim window has passed by handing the escrowed
/// shares back to the owner instead of the asset.
pub fn claim_expired(env: &Env, owner: &Address, request_id: u64) -> SparrowResult {
    let mut state = get_state(env)?;
    let mut requests = get_unlock_requests(env, owner);
    let (index, request) = find_request(env, &requests, request_id)?;

    let now = env.ledger().timestamp();
    validate!(
        env,
        request.is_expired(now),
        ErrorCode::NotExpiredYet,
        "Staking Pool: request {} has not expired",
        request_id
    )?;

    state.total_locked_in_unlocks = state.total_locked_in_unlocks.safe_sub(
        request.asset_amount_locked,
        env
    )?;
    release_shares(env, owner, request.share_amount)?;
    requests.remove(index);
    save_unlock_requests(env, owner, &requests);
    save_state(env, &state);

    TokenUtils::new(env).events().transfer(env.current_contract_address(), owner.clone(), request.share_amount);
    PoolEvents::expired_claimed(env, owner.clone(), request_id, request.share_amount);

    Ok(())
}
