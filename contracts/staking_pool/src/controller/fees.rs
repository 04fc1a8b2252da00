use sparrow::{ error::{ ErrorCode, SparrowResult }, math::safe_math::SafeMath, validate };
use soroban_sdk::{ Address, Env };

use crate::{ events::PoolEvents, storage::{ get_config, get_state, save_state, utils } };

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeTarget {
    Dao,
    Dev,
    All,
}

/// Zeroes the selected fee accumulators and pays their sum to `to`.
/// Returns the amount transferred.
pub fn collect_fees(env: &Env, to: &Address, target: FeeTarget) -> SparrowResult<i128> {
    let config = get_config(env)?;
    let mut state = get_state(env)?;

    let dao_fee = match target {
        FeeTarget::Dao | FeeTarget::All => state.accumulated_dao_fee,
        FeeTarget::Dev => 0,
    };
    let dev_fee = match target {
        FeeTarget::Dev | FeeTarget::All => state.accumulated_dev_fee,
        FeeTarget::Dao => 0,
    };
    let amount = dao_fee.safe_add(dev_fee, env)?;
    validate!(env, amount > 0, ErrorCode::NothingToCollect, "Staking Pool: no fees to collect")?;

    state.accumulated_dao_fee = state.accumulated_dao_fee.safe_sub(dao_fee, env)?;
    state.accumulated_dev_fee = state.accumulated_dev_fee.safe_sub(dev_fee, env)?;
    utils::ensure_uncommitted(env, &config, &state, amount)?;
    save_state(env, &state);

    utils::transfer_asset(env, &config, &env.current_contract_address(), to, amount);

    PoolEvents::fees_collected(env, to.clone(), dao_fee, dev_fee);

    Ok(amount)
}
