use sparrow::{
    constants::{ BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD },
    error::{ ErrorCode, SparrowResult },
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::storage::DataKey;

pub fn read_balance(env: &Env, addr: Address) -> i128 {
    let key = DataKey::Balance(addr);
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: Address, amount: i128) {
    let key = DataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: Address, amount: i128) -> SparrowResult {
    let balance = read_balance(env, addr.clone());
    let updated = balance.checked_add(amount).ok_or(ErrorCode::MathError)?;
    write_balance(env, addr, updated);
    Ok(())
}

pub fn spend_balance(env: &Env, addr: Address, amount: i128) -> SparrowResult {
    let balance = read_balance(env, addr.clone());
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientBalance,
        "Share balance {} below {}",
        balance,
        amount
    )?;
    write_balance(env, addr, balance - amount);
    Ok(())
}

/// Moves shares into the pool's own balance, where they stay escrowed
/// while an unlock request is pending.
pub fn escrow_shares(env: &Env, owner: &Address, amount: i128) -> SparrowResult {
    spend_balance(env, owner.clone(), amount)?;
    receive_balance(env, env.current_contract_address(), amount)
}

pub fn release_shares(env: &Env, owner: &Address, amount: i128) -> SparrowResult {
    spend_balance(env, env.current_contract_address(), amount)?;
    receive_balance(env, owner.clone(), amount)
}
