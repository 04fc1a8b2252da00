use sparrow::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, SparrowResult },
    math::safe_math::SafeMath,
};
use soroban_sdk::{ contracttype, Address, Env, Vec };

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Initialized,
    SchemaVersion,
    Config,
    State,
    AutoStake,
    Balance(Address),
    Allowance(AllowanceDataKey),
    UnlockRequests(Address),
}

pub fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub governance: Address,
    pub pending_governance: Option<Address>,
    /// Token contract of the staked asset (the native asset's SAC)
    pub asset: Address,
    /// Validator delegation coordinator fed by the auto-stake policy
    pub coordinator: Option<Address>,
    pub dao_fee_bps: u32,
    pub dev_fee_bps: u32,
    pub min_stake_amount: i128,
    /// Seconds between an unlock request and its earliest claim
    pub unlock_period: u64,
    /// Seconds an unlocked request stays claimable, 0 disables expiry
    pub claim_window: u64,
    pub paused: bool,
}

impl PoolConfig {
    pub fn protocol_fee_bps(&self) -> u32 {
        self.dao_fee_bps + self.dev_fee_bps
    }
}

pub fn save_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> SparrowResult<PoolConfig> {
    env.storage().instance().get(&DataKey::Config).ok_or(ErrorCode::NotInitialized)
}

// ################################################################
//                             State
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Asset backing outstanding shares, fees excluded
    pub total_pooled: i128,
    /// Share supply, including shares escrowed by pending unlock requests
    pub total_shares: i128,
    pub accumulated_dao_fee: i128,
    pub accumulated_dev_fee: i128,
    /// Asset reserved at locked prices for pending unlock requests
    pub total_locked_in_unlocks: i128,
    pub next_request_id: u64,
}

impl PoolState {
    pub fn new() -> Self {
        PoolState {
            total_pooled: 0,
            total_shares: 0,
            accumulated_dao_fee: 0,
            accumulated_dev_fee: 0,
            total_locked_in_unlocks: 0,
            next_request_id: 0,
        }
    }

    pub fn total_fees(&self, env: &Env) -> SparrowResult<i128> {
        self.accumulated_dao_fee.safe_add(self.accumulated_dev_fee, env)
    }

    /// Funds the pool custody must always hold: pending unlocks plus fees.
    pub fn commitments(&self, env: &Env) -> SparrowResult<i128> {
        self.total_locked_in_unlocks.safe_add(self.total_fees(env)?, env)
    }
}

pub fn save_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_state(env: &Env) -> SparrowResult<PoolState> {
    env.storage().instance().get(&DataKey::State).ok_or(ErrorCode::NotInitialized)
}

// ################################################################
//                           Auto Stake
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AutoStakeConfig {
    /// Liquid reserve kept in the pool, relative to the pooled total
    pub reserve_ratio_bps: u32,
    /// Minimum surplus above the reserve worth delegating
    pub auto_stake_threshold: i128,
    pub enabled: bool,
    /// Registry id of the validator receiving surplus
    pub current_validator: Option<u32>,
    /// Router used to convert non-native reward tokens
    pub swap_router: Option<Address>,
}

impl AutoStakeConfig {
    pub fn new() -> Self {
        AutoStakeConfig {
            reserve_ratio_bps: 0,
            auto_stake_threshold: 0,
            enabled: false,
            current_validator: None,
            swap_router: None,
        }
    }
}

pub fn save_auto_stake_config(env: &Env, config: &AutoStakeConfig) {
    env.storage().instance().set(&DataKey::AutoStake, config);
}

pub fn get_auto_stake_config(env: &Env) -> SparrowResult<AutoStakeConfig> {
    env.storage().instance().get(&DataKey::AutoStake).ok_or(ErrorCode::NotInitialized)
}

// ################################################################
//                         Unlock Requests
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnlockRequest {
    /// Pool-wide monotonic identifier, stable across list mutations
    pub id: u64,
    pub owner: Address,
    /// Shares escrowed by the pool until the request resolves
    pub share_amount: i128,
    /// Payout frozen at the exchange rate of the request time
    pub asset_amount_locked: i128,
    pub requested_at: u64,
    pub unlock_at: u64,
    /// None when no claim window was configured at request time
    pub expires_at: Option<u64>,
}

impl UnlockRequest {
    pub fn is_unlocked(&self, now: u64) -> bool {
        now >= self.unlock_at
    }

    pub fn is_expired(&self, now: u64) -> bool {
        match self.expires_at {
            Some(expires_at) => now > expires_at,
            None => false,
        }
    }
}

pub fn get_unlock_requests(env: &Env, owner: &Address) -> Vec<UnlockRequest> {
    let key = DataKey::UnlockRequests(owner.clone());
    match env.storage().persistent().get::<_, Vec<UnlockRequest>>(&key) {
        Some(requests) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            requests
        }
        None => Vec::new(env),
    }
}

pub fn save_unlock_requests(env: &Env, owner: &Address, requests: &Vec<UnlockRequest>) {
    let key = DataKey::UnlockRequests(owner.clone());
    if requests.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, requests);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                         Share Allowances
// ################################################################

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// ################################################################
//                             Queries
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolStats {
    pub total_pooled: i128,
    pub total_shares: i128,
    pub exchange_rate: i128,
    /// Custody balance not committed to unlocks or fees
    pub liquid_balance: i128,
    pub total_locked_in_unlocks: i128,
    pub accumulated_dao_fee: i128,
    pub accumulated_dev_fee: i128,
    pub unlock_period: u64,
    pub claim_window: u64,
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use soroban_sdk::token;
    use sparrow::validate;

    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        bump_instance(env);
    }

    pub fn get_schema_version(env: &Env) -> u32 {
        env.storage().instance().get(&DataKey::SchemaVersion).unwrap_or(0)
    }

    pub fn save_schema_version(env: &Env, version: u32) {
        env.storage().instance().set(&DataKey::SchemaVersion, &version);
    }

    pub fn is_governance(env: &Env, config: &PoolConfig, sender: &Address) -> SparrowResult {
        validate!(
            env,
            *sender == config.governance,
            ErrorCode::NotGovernance,
            "Staking Pool: You are not authorized!"
        )
    }

    pub fn check_nonnegative_amount(env: &Env, amount: i128) -> SparrowResult {
        validate!(env, amount >= 0, ErrorCode::NegativeAmount, "negative amount is not allowed: {}", amount)
    }

    pub fn custody_balance(env: &Env, config: &PoolConfig) -> i128 {
        token::Client::new(env, &config.asset).balance(&env.current_contract_address())
    }

    pub fn transfer_asset(env: &Env, config: &PoolConfig, from: &Address, to: &Address, amount: i128) {
        token::Client::new(env, &config.asset).transfer(from, to, &amount);
    }

    /// Rejects any outflow of `amount` that would leave the custody balance
    /// below pending unlocks plus accumulated fees.
    pub fn ensure_uncommitted(
        env: &Env,
        config: &PoolConfig,
        state: &PoolState,
        amount: i128
    ) -> SparrowResult {
        let balance = custody_balance(env, config);
        let commitments = state.commitments(env)?;

        validate!(
            env,
            balance >= amount && balance - amount >= commitments,
            ErrorCode::InsufficientLiquidityAfterCommitments,
            "Staking Pool: balance {} minus {} would drop below commitments {}",
            balance,
            amount,
            commitments
        )
    }

    pub fn liquid_balance(env: &Env, config: &PoolConfig, state: &PoolState) -> SparrowResult<i128> {
        let balance = custody_balance(env, config);
        let commitments = state.commitments(env)?;
        Ok(balance.saturating_sub(commitments).max(0))
    }
}
