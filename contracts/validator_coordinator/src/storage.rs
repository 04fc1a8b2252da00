use sparrow::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, SparrowResult },
};
use soroban_sdk::{ contracttype, log, Address, BytesN, Env, String };

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Initialized,
    SchemaVersion,
    Config,
    ValidatorCount,
    Validator(u32),
    ValidatorIndex(BytesN<32>),
}

pub fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoordinatorConfig {
    pub admin: Address,
    pub pending_admin: Option<Address>,
    /// Token contract of the delegated asset
    pub asset: Address,
    /// External two-phase registration service
    pub validator_manager: Address,
    /// Staking pool allowed to initiate delegations with its own funds
    pub pool: Address,
}

pub fn save_config(env: &Env, config: &CoordinatorConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> SparrowResult<CoordinatorConfig> {
    env.storage().instance().get(&DataKey::Config).ok_or(ErrorCode::NotInitialized)
}

// ################################################################
//                            Validators
// ################################################################

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DelegationStatus {
    Idle,
    /// Registration begun with the manager, awaiting external confirmation
    Pending,
    Completed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Validator {
    pub validation_id: BytesN<32>,
    pub name: String,
    pub active: bool,
    pub delegated_amount: i128,
    /// Amount handed to the manager by the pending registration
    pub pending_amount: i128,
    /// Pending amounts given up by the operator, never confirmed externally
    pub stranded_amount: i128,
    pub weight: i128,
    /// Externally assigned once the registration completes, 0 until then
    pub delegation_id: u64,
    pub weight_to_value_factor: i128,
    pub status: DelegationStatus,
}

pub fn get_validator_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::ValidatorCount).unwrap_or(0)
}

fn save_validator_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ValidatorCount, &count);
}

pub fn get_validator(env: &Env, validator_id: u32) -> SparrowResult<Validator> {
    let key = DataKey::Validator(validator_id);
    match env.storage().persistent().get::<_, Validator>(&key) {
        Some(validator) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            Ok(validator)
        }
        None => {
            log!(env, "Validator Coordinator: validator {} not found", validator_id);
            Err(ErrorCode::ValidatorNotFound)
        }
    }
}

pub fn save_validator(env: &Env, validator_id: u32, validator: &Validator) {
    let key = DataKey::Validator(validator_id);
    env.storage().persistent().set(&key, validator);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_registered(env: &Env, validation_id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&DataKey::ValidatorIndex(validation_id.clone()))
}

/// Appends a validator to the registry and returns its id.
pub fn push_validator(env: &Env, validator: &Validator) -> u32 {
    let validator_id = get_validator_count(env);
    save_validator(env, validator_id, validator);

    let index_key = DataKey::ValidatorIndex(validator.validation_id.clone());
    env.storage().persistent().set(&index_key, &validator_id);
    env.storage()
        .persistent()
        .extend_ttl(&index_key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    save_validator_count(env, validator_id + 1);
    validator_id
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

    pub fn is_admin(env: &Env, config: &CoordinatorConfig, sender: &Address) -> SparrowResult {
        validate!(
            env,
            *sender == config.admin,
            ErrorCode::NotAuthorized,
            "Validator Coordinator: You are not authorized!"
        )
    }

    pub fn token_balance(env: &Env, config: &CoordinatorConfig, id: &Address) -> i128 {
        token::Client::new(env, &config.asset).balance(id)
    }

    pub fn transfer_asset(
        env: &Env,
        config: &CoordinatorConfig,
        from: &Address,
        to: &Address,
        amount: i128
    ) {
        token::Client::new(env, &config.asset).transfer(from, to, &amount);
    }
}
