use soroban_sdk::{ contract, contractimpl, contractmeta, log, Address, BytesN, Env, String, Vec };
use sparrow::{
    constants::SCHEMA_VERSION,
    error::{ ErrorCode, SparrowResult },
    interfaces::DelegationCoordinatorInterface,
    validate,
};

use crate::{
    controller::{ delegation, registry },
    events::CoordinatorEvents,
    storage::{ bump_instance, get_config, get_validator, get_validator_count, save_config, utils, CoordinatorConfig, Validator },
    validator_coordinator::ValidatorCoordinatorTrait,
};

contractmeta!(
    key = "Description",
    val = "Registry of validators and two-phase delegation of staking pool funds"
);

fn require_admin(env: &Env, sender: &Address) -> SparrowResult<CoordinatorConfig> {
    sender.require_auth();
    bump_instance(env);

    let config = get_config(env)?;
    utils::is_admin(env, &config, sender)?;

    Ok(config)
}

#[contract]
pub struct ValidatorCoordinator;

#[contractimpl]
impl ValidatorCoordinatorTrait for ValidatorCoordinator {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        asset: Address,
        validator_manager: Address,
        pool: Address
    ) -> Result<(), ErrorCode> {
        if utils::is_initialized(&env) {
            log!(&env, "Validator Coordinator: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }
        utils::set_initialized(&env);
        utils::save_schema_version(&env, SCHEMA_VERSION);

        save_config(
            &env,
            &(CoordinatorConfig {
                admin: admin.clone(),
                pending_admin: None,
                asset,
                validator_manager: validator_manager.clone(),
                pool: pool.clone(),
            })
        );

        CoordinatorEvents::initialize(&env, admin, validator_manager, pool);

        Ok(())
    }

    fn migrate(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;

        let stored = utils::get_schema_version(&env);
        validate!(&env, stored != SCHEMA_VERSION, ErrorCode::SchemaUpToDate)?;
        validate!(&env, stored < SCHEMA_VERSION, ErrorCode::UnknownSchemaVersion)?;

        utils::save_schema_version(&env, SCHEMA_VERSION);

        Ok(())
    }

    fn upgrade(env: Env, sender: Address, new_wasm_hash: BytesN<32>) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;

        env.deployer().update_current_contract_wasm(new_wasm_hash.clone());

        CoordinatorEvents::upgraded(&env, new_wasm_hash);

        Ok(())
    }

    fn set_pool(env: Env, sender: Address, pool: Address) -> Result<(), ErrorCode> {
        let mut config = require_admin(&env, &sender)?;

        config.pool = pool;
        save_config(&env, &config);

        Ok(())
    }

    fn set_validator_manager(env: Env, sender: Address, validator_manager: Address) -> Result<(), ErrorCode> {
        let mut config = require_admin(&env, &sender)?;

        config.validator_manager = validator_manager;
        save_config(&env, &config);

        Ok(())
    }

    fn transfer_admin(env: Env, sender: Address, candidate: Address) -> Result<(), ErrorCode> {
        let mut config = require_admin(&env, &sender)?;

        validate!(
            &env,
            candidate != env.current_contract_address() && candidate != config.admin,
            ErrorCode::InvalidAddress,
            "Validator Coordinator: invalid admin candidate"
        )?;

        config.pending_admin = Some(candidate.clone());
        save_config(&env, &config);

        CoordinatorEvents::admin_proposed(&env, sender, candidate);

        Ok(())
    }

    fn accept_admin(env: Env, sender: Address) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        validate!(
            &env,
            config.pending_admin == Some(sender.clone()),
            ErrorCode::NotPendingGovernance,
            "Validator Coordinator: sender is not the pending admin"
        )?;

        config.admin = sender.clone();
        config.pending_admin = None;
        save_config(&env, &config);

        CoordinatorEvents::admin_accepted(&env, sender);

        Ok(())
    }

    fn withdraw(env: Env, sender: Address, to: Address, amount: i128) -> Result<(), ErrorCode> {
        let config = require_admin(&env, &sender)?;

        validate!(&env, amount > 0, ErrorCode::ZeroAmount)?;
        let coordinator = env.current_contract_address();
        let available = utils::token_balance(&env, &config, &coordinator);
        validate!(
            &env,
            available >= amount,
            ErrorCode::InsufficientFunds,
            "Validator Coordinator: {} available, {} requested",
            available,
            amount
        )?;

        utils::transfer_asset(&env, &config, &coordinator, &to, amount);

        CoordinatorEvents::withdraw(&env, to, amount);

        Ok(())
    }

    // ################################################################
    //                            REGISTRY
    // ################################################################

    fn add_validator(
        env: Env,
        sender: Address,
        validation_id: BytesN<32>,
        name: String,
        weight_to_value_factor: i128
    ) -> Result<u32, ErrorCode> {
        require_admin(&env, &sender)?;

        registry::add_validator(&env, validation_id, name, weight_to_value_factor)
    }

    fn activate_validator(env: Env, sender: Address, validator_id: u32) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;

        registry::activate_validator(&env, validator_id)
    }

    // ################################################################
    //                           DELEGATION
    // ################################################################

    fn delegate_from_balance(
        env: Env,
        sender: Address,
        validator_id: u32,
        amount: i128
    ) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;

        delegation::begin_delegation(&env, &env.current_contract_address(), validator_id, amount)
    }

    fn complete_delegation(
        env: Env,
        sender: Address,
        validator_id: u32,
        delegation_id: u64
    ) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;

        delegation::complete_delegation(&env, validator_id, delegation_id)
    }

    fn abandon_pending_delegation(env: Env, sender: Address, validator_id: u32) -> Result<i128, ErrorCode> {
        require_admin(&env, &sender)?;

        delegation::abandon_pending_delegation(&env, validator_id)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Result<CoordinatorConfig, ErrorCode> {
        get_config(&env)
    }

    fn query_validator(env: Env, validator_id: u32) -> Result<Validator, ErrorCode> {
        get_validator(&env, validator_id)
    }

    fn query_validators(env: Env) -> Result<Vec<Validator>, ErrorCode> {
        registry::validators(&env)
    }

    fn query_validator_count(env: Env) -> u32 {
        get_validator_count(&env)
    }

    fn query_total_delegated(env: Env) -> Result<i128, ErrorCode> {
        registry::total_delegated(&env)
    }

    fn query_total_pending(env: Env) -> Result<i128, ErrorCode> {
        registry::total_pending(&env)
    }

    fn query_schema_version(env: Env) -> u32 {
        utils::get_schema_version(&env)
    }
}

#[contractimpl]
impl DelegationCoordinatorInterface for ValidatorCoordinator {
    /// Callable by the admin with their own funds or by the staking pool
    /// forwarding its surplus.
    fn initiate_delegation(
        env: Env,
        sender: Address,
        validator_id: u32,
        amount: i128
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;
        validate!(
            &env,
            sender == config.admin || sender == config.pool,
            ErrorCode::NotAuthorized,
            "Validator Coordinator: only the admin or the pool can delegate"
        )?;

        delegation::begin_delegation(&env, &sender, validator_id, amount)
    }
}
