use sparrow::{ error::{ ErrorCode, SparrowResult }, math::safe_math::SafeMath, validate };
use soroban_sdk::{ Address, Env };
use soroban_token_sdk::TokenUtils;

use crate::{
    balance::receive_balance,
    events::PoolEvents,
    math::shares::{ asset_to_shares, split_rewards },
    storage::{ get_config, get_state, save_state, utils },
};

/// Mints shares for `amount` of asset at the current rate and pulls the
/// asset from `user`. Returns the minted shares.
pub fn stake(env: &Env, user: &Address, amount: i128, min_shares_out: i128) -> SparrowResult<i128> {
    let config = get_config(env)?;
    let mut state = get_state(env)?;

    utils::check_nonnegative_amount(env, amount)?;
    validate!(
        env,
        amount >= config.min_stake_amount,
        ErrorCode::BelowMinimum,
        "Staking Pool: stake {} below minimum {}",
        amount,
        config.min_stake_amount
    )?;
    validate!(env, !config.paused, ErrorCode::Paused, "Staking Pool: staking is paused")?;

    let shares = asset_to_shares(env, amount, state.total_shares, state.total_pooled)?;
    validate!(env, shares > 0, ErrorCode::ZeroShares, "Staking Pool: stake of {} mints no shares", amount)?;
    validate!(
        env,
        shares >= min_shares_out,
        ErrorCode::SlippageExceeded,
        "Staking Pool: {} shares below minimum out {}",
        shares,
        min_shares_out
    )?;

    state.total_shares = state.total_shares.safe_add(shares, env)?;
    state.total_pooled = state.total_pooled.safe_add(amount, env)?;
    receive_balance(env, user.clone(), shares)?;
    save_state(env, &state);

    utils::transfer_asset(env, &config, user, &env.current_contract_address(), amount);

    TokenUtils::new(env).events().mint(env.current_contract_address(), user.clone(), shares);
    PoolEvents::staked(env, user.clone(), amount, shares);

    Ok(shares)
}

/// Pulls a reward from `sender`, skims the DAO and dev fees into their
/// accumulators and credits the remainder to share holders.
pub fn add_rewards(env: &Env, sender: &Address, amount: i128) -> SparrowResult<i128> {
    let config = get_config(env)?;
    let mut state = get_state(env)?;

    utils::check_nonnegative_amount(env, amount)?;
    validate!(env, amount != 0, ErrorCode::ZeroReward, "Staking Pool: reward amount is zero")?;
    validate!(
        env,
        state.total_shares > 0,
        ErrorCode::ZeroShares,
        "Staking Pool: no shares outstanding to receive rewards"
    )?;

    let split = split_rewards(env, amount, config.dao_fee_bps, config.dev_fee_bps)?;

    state.accumulated_dao_fee = state.accumulated_dao_fee.safe_add(split.dao_fee, env)?;
    state.accumulated_dev_fee = state.accumulated_dev_fee.safe_add(split.dev_fee, env)?;
    state.total_pooled = state.total_pooled.safe_add(split.user_portion, env)?;
    save_state(env, &state);

    utils::transfer_asset(env, &config, sender, &env.current_contract_address(), amount);

    PoolEvents::rewards_added(
        env,
        sender.clone(),
        amount,
        split.user_portion,
        split.dao_fee,
        split.dev_fee
    );

    Ok(split.user_portion)
}
