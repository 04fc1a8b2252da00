use soroban_sdk::{ Address, BytesN, Env, String, Vec };
use sparrow::error::ErrorCode;

use crate::storage::{ CoordinatorConfig, Validator };

pub trait ValidatorCoordinatorTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        asset: Address,
        validator_manager: Address,
        pool: Address
    ) -> Result<(), ErrorCode>;

    fn migrate(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn upgrade(env: Env, sender: Address, new_wasm_hash: BytesN<32>) -> Result<(), ErrorCode>;

    fn set_pool(env: Env, sender: Address, pool: Address) -> Result<(), ErrorCode>;

    fn set_validator_manager(env: Env, sender: Address, validator_manager: Address) -> Result<(), ErrorCode>;

    fn transfer_admin(env: Env, sender: Address, candidate: Address) -> Result<(), ErrorCode>;

    fn accept_admin(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn withdraw(env: Env, sender: Address, to: Address, amount: i128) -> Result<(), ErrorCode>;

    // ################################################################
    //                            REGISTRY
    // ################################################################

    fn add_validator(
        env: Env,
        sender: Address,
        validation_id: BytesN<32>,
        name: String,
        weight_to_value_factor: i128
    ) -> Result<u32, ErrorCode>;

    fn activate_validator(env: Env, sender: Address, validator_id: u32) -> Result<(), ErrorCode>;

    // ################################################################
    //                           DELEGATION
    // ################################################################

    fn delegate_from_balance(
        env: Env,
        sender: Address,
        validator_id: u32,
        amount: i128
    ) -> Result<(), ErrorCode>;

    fn complete_delegation(
        env: Env,
        sender: Address,
        validator_id: u32,
        delegation_id: u64
    ) -> Result<(), ErrorCode>;

    fn abandon_pending_delegation(env: Env, sender: Address, validator_id: u32) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Result<CoordinatorConfig, ErrorCode>;

    fn query_validator(env: Env, validator_id: u32) -> Result<Validator, ErrorCode>;

    fn query_validators(env: Env) -> Result<Vec<Validator>, ErrorCode>;

    fn query_validator_count(env: Env) -> u32;

    fn query_total_delegated(env: Env) -> Result<i128, ErrorCode>;

    fn query_total_pending(env: Env) -> Result<i128, ErrorCode>;

    fn query_schema_version(env: Env) -> u32;
}
