use sparrow::{
    constants::{ BPS_DENOMINATOR, EXCHANGE_RATE_PRECISION },
    error::{ ErrorCode, SparrowResult },
    math::{ helpers::{ bps_of, mul_div_floor }, safe_math::SafeMath },
    validate,
};
use soroban_sdk::Env;

/// Shares minted for `amount` of asset, rounded down in the pool's favour.
pub fn asset_to_shares(
    env: &Env,
    amount: i128,
    total_shares: i128,
    total_pooled: i128
) -> SparrowResult<i128> {
    if total_shares == 0 {
        return Ok(amount);
    }

    // shares outstanding with nothing pooled would mint at an undefined price
    validate!(
        env,
        total_pooled > 0,
        ErrorCode::MathError,
        "total_shares {} backed by no pooled asset",
        total_shares
    )?;

    mul_div_floor(env, amount, total_shares, total_pooled)
}

/// Pooled asset per share, scaled by `EXCHANGE_RATE_PRECISION`.
pub fn exchange_rate(env: &Env, total_pooled: i128, total_shares: i128) -> SparrowResult<i128> {
    if total_shares == 0 {
        return Ok(EXCHANGE_RATE_PRECISION);
    }

    mul_div_floor(env, total_pooled, EXCHANGE_RATE_PRECISION, total_shares)
}

/// Asset owed for `n_shares` at the current exchange rate.
pub fn shares_to_asset(
    env: &Env,
    n_shares: i128,
    total_shares: i128,
    total_pooled: i128
) -> SparrowResult<i128> {
    validate!(
        env,
        n_shares <= total_shares,
        ErrorCode::InsufficientBalance,
        "n_shares({}) > total_shares({})",
        n_shares,
        total_shares
    )?;

    let rate = exchange_rate(env, total_pooled, total_shares)?;
    mul_div_floor(env, n_shares, rate, EXCHANGE_RATE_PRECISION)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSplit {
    pub dao_fee: i128,
    pub dev_fee: i128,
    pub user_portion: i128,
}

/// Splits a reward into floor-rounded fee cuts and the remainder credited
/// to share holders.
pub fn split_rewards(
    env: &Env,
    amount: i128,
    dao_fee_bps: u32,
    dev_fee_bps: u32
) -> SparrowResult<RewardSplit> {
    validate!(
        env,
        (dao_fee_bps as i128) + (dev_fee_bps as i128) <= BPS_DENOMINATOR,
        ErrorCode::FeeTooHigh
    )?;

    let dao_fee = bps_of(env, amount, dao_fee_bps)?;
    let dev_fee = bps_of(env, amount, dev_fee_bps)?;
    let user_portion = amount.safe_sub(dao_fee, env)?.safe_sub(dev_fee, env)?;

    Ok(RewardSplit {
        dao_fee,
        dev_fee,
        user_portion,
    })
}
