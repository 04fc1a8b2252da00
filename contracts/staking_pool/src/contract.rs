use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    token::{ self, Interface as _ },
    Address,
    BytesN,
    Env,
    String,
    Vec,
};
use soroban_token_sdk::{ metadata::TokenMetadata, TokenUtils };
use sparrow::{
    constants::{
        ASSET_DECIMALS,
        DEFAULT_DAO_FEE_BPS,
        DEFAULT_DEV_FEE_BPS,
        DEFAULT_MIN_STAKE_AMOUNT,
        MAX_DAO_FEE_BPS,
        MAX_DEV_FEE_BPS,
        MAX_RESERVE_RATIO_BPS,
        MAX_TOTAL_FEE_BPS,
        SCHEMA_VERSION,
    },
    error::{ ErrorCode, SparrowResult },
    validate,
};

use crate::{
    allowance::{ read_allowance, spend_allowance, write_allowance },
    balance::{ read_balance, receive_balance, spend_balance },
    controller::{ self, fees::FeeTarget },
    events::PoolEvents,
    math::shares::{ asset_to_shares, exchange_rate, shares_to_asset },
    staking_pool::StakingPoolTrait,
    storage::{
        bump_instance,
        get_auto_stake_config,
        get_config,
        get_state,
        get_unlock_requests,
        save_auto_stake_config,
        save_config,
        save_state,
        utils,
        AutoStakeConfig,
        PoolConfig,
        PoolState,
        PoolStats,
        UnlockRequest,
    },
};

contractmeta!(key = "Description", val = "Liquid staking pool issuing yield-bearing shares");

fn require_governance(env: &Env, sender: &Address) -> SparrowResult<PoolConfig> {
    sender.require_auth();
    bump_instance(env);

    let config = get_config(env)?;
    utils::is_governance(env, &config, sender)?;

    Ok(config)
}

fn validate_fee_structure(env: &Env, dao_fee_bps: u32, dev_fee_bps: u32) -> SparrowResult {
    validate!(
        env,
        dao_fee_bps <= MAX_DAO_FEE_BPS,
        ErrorCode::FeeTooHigh,
        "Staking Pool: DAO fee too high: {}",
        dao_fee_bps
    )?;
    validate!(
        env,
        dev_fee_bps <= MAX_DEV_FEE_BPS,
        ErrorCode::FeeTooHigh,
        "Staking Pool: dev fee too high: {}",
        dev_fee_bps
    )?;
    validate!(
        env,
        dao_fee_bps + dev_fee_bps <= MAX_TOTAL_FEE_BPS,
        ErrorCode::FeeTooHigh,
        "Staking Pool: total fees too high: {}",
        dao_fee_bps + dev_fee_bps
    )
}

fn or_panic<T>(env: &Env, result: SparrowResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic_with_error!(env, error),
    }
}

#[contract]
pub struct StakingPool;

#[contractimpl]
/// Implementation of the Staking Pool trait: share ledger, fee accrual,
/// unlock queue and the reserve driven auto-stake policy.
impl StakingPoolTrait for StakingPool {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        governance: Address,
        asset: Address,
        unlock_period: u64,
        claim_window: u64,
        share_name: String,
        share_symbol: String
    ) -> Result<(), ErrorCode> {
        if utils::is_initialized(&env) {
            log!(&env, "Staking Pool: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }
        utils::set_initialized(&env);
        utils::save_schema_version(&env, SCHEMA_VERSION);

        save_config(
            &env,
            &(PoolConfig {
                governance: governance.clone(),
                pending_governance: None,
                asset: asset.clone(),
                coordinator: None,
                dao_fee_bps: DEFAULT_DAO_FEE_BPS,
                dev_fee_bps: DEFAULT_DEV_FEE_BPS,
                min_stake_amount: DEFAULT_MIN_STAKE_AMOUNT,
                unlock_period,
                claim_window,
                paused: false,
            })
        );
        save_state(&env, &PoolState::new());
        save_auto_stake_config(&env, &AutoStakeConfig::new());

        TokenUtils::new(&env)
            .metadata()
            .set_metadata(
                &(TokenMetadata {
                    decimal: ASSET_DECIMALS,
                    name: share_name,
                    symbol: share_symbol,
                })
            );

        PoolEvents::initialize(&env, governance, asset);

        Ok(())
    }

    fn migrate(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_governance(&env, &sender)?;

        let stored = utils::get_schema_version(&env);
        validate!(
            &env,
            stored != SCHEMA_VERSION,
            ErrorCode::SchemaUpToDate,
            "Staking Pool: schema already at version {}",
            stored
        )?;
        validate!(
            &env,
            stored < SCHEMA_VERSION,
            ErrorCode::UnknownSchemaVersion,
            "Staking Pool: stored schema {} is newer than {}",
            stored,
            SCHEMA_VERSION
        )?;

        utils::save_schema_version(&env, SCHEMA_VERSION);

        PoolEvents::migrated(&env, stored, SCHEMA_VERSION);

        Ok(())
    }

    fn upgrade(env: Env, sender: Address, new_wasm_hash: BytesN<32>) -> Result<(), ErrorCode> {
        require_governance(&env, &sender)?;

        env.deployer().update_current_contract_wasm(new_wasm_hash.clone());

        PoolEvents::upgraded(&env, new_wasm_hash);

        Ok(())
    }

    fn set_fee_structure(
        env: Env,
        sender: Address,
        dao_fee_bps: u32,
        dev_fee_bps: u32
    ) -> Result<(), ErrorCode> {
        let mut config = require_governance(&env, &sender)?;
        validate_fee_structure(&env, dao_fee_bps, dev_fee_bps)?;

        config.dao_fee_bps = dao_fee_bps;
        config.dev_fee_bps = dev_fee_bps;
        save_config(&env, &config);

        PoolEvents::fee_structure(&env, dao_fee_bps, dev_fee_bps);

        Ok(())
    }

    fn set_min_stake_amount(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        let mut config = require_governance(&env, &sender)?;
        utils::check_nonnegative_amount(&env, amount)?;

        config.min_stake_amount = amount;
        save_config(&env, &config);

        Ok(())
    }

    fn set_unlock_period(env: Env, sender: Address, unlock_period: u64) -> Result<(), ErrorCode> {
        let mut config = require_governance(&env, &sender)?;

        config.unlock_period = unlock_period;
        save_config(&env, &config);

        Ok(())
    }

    fn set_claim_window(env: Env, sender: Address, claim_window: u64) -> Result<(), ErrorCode> {
        let mut config = require_governance(&env, &sender)?;

        config.claim_window = claim_window;
        save_config(&env, &config);

        Ok(())
    }

    fn pause(env: Env, sender: Address) -> Result<(), ErrorCode> {
        let mut config = require_governance(&env, &sender)?;

        config.paused = true;
        save_config(&env, &config);

        PoolEvents::paused(&env, true);

        Ok(())
    }

    fn unpause(env: Env, sender: Address) -> Result<(), ErrorCode> {
        let mut config = require_governance(&env, &sender)?;

        config.paused = false;
        save_config(&env, &config);

        PoolEvents::paused(&env, false);

        Ok(())
    }

    fn transfer_governance(env: Env, sender: Address, candidate: Address) -> Result<(), ErrorCode> {
        let mut config = require_governance(&env, &sender)?;

        validate!(
            &env,
            candidate != env.current_contract_address() && candidate != config.governance,
            ErrorCode::InvalidAddress,
            "Staking Pool: invalid governance candidate"
        )?;

        config.pending_governance = Some(candidate.clone());
        save_config(&env, &config);

        PoolEvents::governance_proposed(&env, sender, candidate);

        Ok(())
    }

    fn accept_governance(env: Env, sender: Address) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let mut config = get_config(&env)?;
        validate!(
            &env,
            config.pending_governance == Some(sender.clone()),
            ErrorCode::NotPendingGovernance,
            "Staking Pool: sender is not the pending governance"
        )?;

        config.governance = sender.clone();
        config.pending_governance = None;
        save_config(&env, &config);

        PoolEvents::governance_accepted(&env, sender);

        Ok(())
    }

    fn withdraw(env: Env, sender: Address, to: Address, amount: i128) -> Result<(), ErrorCode> {
        require_governance(&env, &sender)?;

        controller::treasury::withdraw(&env, &to, amount)
    }

    fn deposit(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        require_governance(&env, &sender)?;

        controller::treasury::deposit(&env, &sender, amount)
    }

    fn collect_dao_fees(env: Env, sender: Address, to: Address) -> Result<i128, ErrorCode> {
        require_governance(&env, &sender)?;

        controller::fees::collect_fees(&env, &to, FeeTarget::Dao)
    }

    fn collect_dev_fees(env: Env, sender: Address, to: Address) -> Result<i128, ErrorCode> {
        require_governance(&env, &sender)?;

        controller::fees::collect_fees(&env, &to, FeeTarget::Dev)
    }

    fn collect_all_fees(env: Env, sender: Address, to: Address) -> Result<i128, ErrorCode> {
        require_governance(&env, &sender)?;

        controller::fees::collect_fees(&env, &to, FeeTarget::All)
    }

    // ################################################################
    //                           AUTO STAKE
    // ################################################################

    fn set_coordinator(env: Env, sender: Address, coordinator: Address) -> Result<(), ErrorCode> {
        let mut config = require_governance(&env, &sender)?;

        validate!(
            &env,
            coordinator != env.current_contract_address(),
            ErrorCode::InvalidAddress,
            "Staking Pool: the pool cannot be its own coordinator"
        )?;

        config.coordinator = Some(coordinator);
        save_config(&env, &config);

        Ok(())
    }

    fn fund_coordinator(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        require_governance(&env, &sender)?;

        controller::treasury::fund_coordinator(&env, amount)
    }

    fn set_reserve_ratio(env: Env, sender: Address, reserve_ratio_bps: u32) -> Result<(), ErrorCode> {
        require_governance(&env, &sender)?;
        validate!(
            &env,
            reserve_ratio_bps <= MAX_RESERVE_RATIO_BPS,
            ErrorCode::InvalidReserveRatio,
            "Staking Pool: reserve ratio {} above {}",
            reserve_ratio_bps,
            MAX_RESERVE_RATIO_BPS
        )?;

        let mut auto_stake = get_auto_stake_config(&env)?;
        auto_stake.reserve_ratio_bps = reserve_ratio_bps;
        save_auto_stake_config(&env, &auto_stake);

        Ok(())
    }

    fn set_auto_stake_threshold(env: Env, sender: Address, threshold: i128) -> Result<(), ErrorCode> {
        require_governance(&env, &sender)?;
        utils::check_nonnegative_amount(&env, threshold)?;

        let mut auto_stake = get_auto_stake_config(&env)?;
        auto_stake.auto_stake_threshold = threshold;
        save_auto_stake_config(&env, &auto_stake);

        Ok(())
    }

    fn toggle_auto_staking(env: Env, sender: Address) -> Result<bool, ErrorCode> {
        require_governance(&env, &sender)?;

        let mut auto_stake = get_auto_stake_config(&env)?;
        auto_stake.enabled = !auto_stake.enabled;
        save_auto_stake_config(&env, &auto_stake);

        Ok(auto_stake.enabled)
    }

    fn set_current_validator(env: Env, sender: Address, validator_id: u32) -> Result<(), ErrorCode> {
        require_governance(&env, &sender)?;

        let mut auto_stake = get_auto_stake_config(&env)?;
        auto_stake.current_validator = Some(validator_id);
        save_auto_stake_config(&env, &auto_stake);

        Ok(())
    }

    fn set_swap_router(env: Env, sender: Address, swap_router: Address) -> Result<(), ErrorCode> {
        require_governance(&env, &sender)?;

        let mut auto_stake = get_auto_stake_config(&env)?;
        auto_stake.swap_router = Some(swap_router);
        save_auto_stake_config(&env, &auto_stake);

        Ok(())
    }

    fn check_and_auto_stake(env: Env) -> Result<i128, ErrorCode> {
        bump_instance(&env);

        controller::rebalance::check_and_auto_stake(&env)
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn stake(env: Env, sender: Address, amount: i128, min_shares_out: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::ledger::stake(&env, &sender, amount, min_shares_out)
    }

    fn add_rewards(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::ledger::add_rewards(&env, &sender, amount)
    }

    fn request_unlock(
        env: Env,
        sender: Address,
        share_amount: i128,
        min_asset_out: i128
    ) -> Result<u64, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::unlock::request_unlock(&env, &sender, share_amount, min_asset_out)
    }

    fn cancel_unlock(env: Env, sender: Address, request_id: u64) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::unlock::cancel_unlock(&env, &sender, request_id)
    }

    fn claim_unlock(env: Env, sender: Address, request_id: u64) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::unlock::claim_unlock(&env, &sender, request_id)
    }

    fn claim_expired(env: Env, sender: Address, request_id: u64) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::unlock::claim_expired(&env, &sender, request_id)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn preview_stake(env: Env, amount: i128) -> Result<i128, ErrorCode> {
        utils::check_nonnegative_amount(&env, amount)?;
        let state = get_state(&env)?;

        asset_to_shares(&env, amount, state.total_shares, state.total_pooled)
    }

    fn preview_unlock(env: Env, share_amount: i128) -> Result<i128, ErrorCode> {
        utils::check_nonnegative_amount(&env, share_amount)?;
        let state = get_state(&env)?;

        shares_to_asset(&env, share_amount, state.total_shares, state.total_pooled)
    }

    fn query_config(env: Env) -> Result<PoolConfig, ErrorCode> {
        get_config(&env)
    }

    fn query_state(env: Env) -> Result<PoolState, ErrorCode> {
        get_state(&env)
    }

    fn query_auto_stake_config(env: Env) -> Result<AutoStakeConfig, ErrorCode> {
        get_auto_stake_config(&env)
    }

    fn query_exchange_rate(env: Env) -> Result<i128, ErrorCode> {
        let state = get_state(&env)?;

        exchange_rate(&env, state.total_pooled, state.total_shares)
    }

    fn query_stats(env: Env) -> Result<PoolStats, ErrorCode> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;

        Ok(PoolStats {
            total_pooled: state.total_pooled,
            total_shares: state.total_shares,
            exchange_rate: exchange_rate(&env, state.total_pooled, state.total_shares)?,
            liquid_balance: utils::liquid_balance(&env, &config, &state)?,
            total_locked_in_unlocks: state.total_locked_in_unlocks,
            accumulated_dao_fee: state.accumulated_dao_fee,
            accumulated_dev_fee: state.accumulated_dev_fee,
            unlock_period: config.unlock_period,
            claim_window: config.claim_window,
        })
    }

    fn query_liquid_balance(env: Env) -> Result<i128, ErrorCode> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;

        utils::liquid_balance(&env, &config, &state)
    }

    fn query_total_supply(env: Env) -> Result<i128, ErrorCode> {
        Ok(get_state(&env)?.total_shares)
    }

    fn query_unlock_request_count(env: Env, owner: Address) -> u32 {
        get_unlock_requests(&env, &owner).len()
    }

    fn query_unlock_request(env: Env, owner: Address, request_id: u64) -> Result<UnlockRequest, ErrorCode> {
        let requests = get_unlock_requests(&env, &owner);
        let (_, request) = controller::unlock::find_request(&env, &requests, request_id)?;

        Ok(request)
    }

    fn query_unlock_requests(env: Env, owner: Address) -> Vec<UnlockRequest> {
        get_unlock_requests(&env, &owner)
    }

    fn query_governance(env: Env) -> Result<Address, ErrorCode> {
        Ok(get_config(&env)?.governance)
    }

    fn query_pending_governance(env: Env) -> Result<Option<Address>, ErrorCode> {
        Ok(get_config(&env)?.pending_governance)
    }

    fn query_schema_version(env: Env) -> u32 {
        utils::get_schema_version(&env)
    }
}

#[contractimpl]
impl token::Interface for StakingPool {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&env);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        or_panic(&env, utils::check_nonnegative_amount(&env, amount));

        bump_instance(&env);

        or_panic(&env, write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger));
        TokenUtils::new(&env).events().approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        or_panic(&env, utils::check_nonnegative_amount(&env, amount));
        // the pool's own balance only ever holds escrowed unlock shares
        or_panic(
            &env,
            validate!(&env, to != env.current_contract_address(), ErrorCode::InvalidAddress)
        );

        bump_instance(&env);

        or_panic(&env, spend_balance(&env, from.clone(), amount));
        or_panic(&env, receive_balance(&env, to.clone(), amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        or_panic(&env, utils::check_nonnegative_amount(&env, amount));
        or_panic(
            &env,
            validate!(&env, to != env.current_contract_address(), ErrorCode::InvalidAddress)
        );

        bump_instance(&env);

        or_panic(&env, spend_allowance(&env, from.clone(), spender, amount));
        or_panic(&env, spend_balance(&env, from.clone(), amount));
        or_panic(&env, receive_balance(&env, to.clone(), amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, _amount: i128) {
        from.require_auth();
        log!(&env, "Staking Pool: shares are only burned by claiming an unlock");
        panic_with_error!(&env, ErrorCode::BurnNotSupported);
    }

    fn burn_from(env: Env, spender: Address, _from: Address, _amount: i128) {
        spender.require_auth();
        log!(&env, "Staking Pool: shares are only burned by claiming an unlock");
        panic_with_error!(&env, ErrorCode::BurnNotSupported);
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}
