use sparrow::{ error::{ ErrorCode, SparrowResult }, validate };
use soroban_sdk::{ log, Address, Env };

use crate::{ events::PoolEvents, storage::{ get_config, get_state, utils } };

/// Moves uncommitted liquidity out of custody. Pooled and share totals are
/// untouched: the asset keeps backing shares wherever it is deployed.
pub fn withdraw(env: &Env, to: &Address, amount: i128) -> SparrowResult {
    let config = get_config(env)?;
    let state = get_state(env)?;

    utils::check_nonnegative_amount(env, amount)?;
    validate!(env, amount > 0, ErrorCode::ZeroAmount)?;
    utils::ensure_uncommitted(env, &config, &state, amount)?;

    utils::transfer_asset(env, &config, &env.current_contract_address(), to, amount);

    PoolEvents::withdraw(env, to.clone(), amount);

    Ok(())
}

/// Tops up custody without minting shares.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> SparrowResult {
    let config = get_config(env)?;

    utils::check_nonnegative_amount(env, amount)?;
    validate!(env, amount > 0, ErrorCode::ZeroAmount)?;

    utils::transfer_asset(env, &config, from, &env.current_contract_address(), amount);

    PoolEvents::deposit(env, from.clone(), amount);

    Ok(())
}

/// Sends uncommitted liquidity to the delegation coordinator so the
/// operator can delegate it from the coordinator's balance.
pub fn fund_coordinator(env: &Env, amount: i128) -> SparrowResult {
    let config = get_config(env)?;
    let state = get_state(env)?;

    let coordinator = match config.coordinator.clone() {
        Some(coordinator) => coordinator,
        None => {
            log!(env, "Staking Pool: coordinator is not set");
            return Err(ErrorCode::CoordinatorNotSet);
        }
    };

    utils::check_nonnegative_amount(env, amount)?;
    validate!(env, amount > 0, ErrorCode::ZeroAmount)?;
    utils::ensure_uncommitted(env, &config, &state, amount)?;

    utils::transfer_asset(env, &config, &env.current_contract_address(), &coordinator, amount);

    PoolEvents::coordinator_funded(env, coordinator, amount);

    Ok(())
}
