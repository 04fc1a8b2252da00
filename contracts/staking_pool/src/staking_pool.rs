use soroban_sdk::{ Address, BytesN, Env, String, Vec };
use sparrow::error::ErrorCode;

use crate::storage::{ AutoStakeConfig, PoolConfig, PoolState, PoolStats, UnlockRequest };

pub trait StakingPoolTrait {
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
    ) -> Result<(), ErrorCode>;

    fn migrate(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn upgrade(env: Env, sender: Address, new_wasm_hash: BytesN<32>) -> Result<(), ErrorCode>;

    fn set_fee_structure(env: Env, sender: Address, dao_fee_bps: u32, dev_fee_bps: u32) -> Result<(), ErrorCode>;

    fn set_min_stake_amount(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    fn set_unlock_period(env: Env, sender: Address, unlock_period: u64) -> Result<(), ErrorCode>;

    fn set_claim_window(env: Env, sender: Address, claim_window: u64) -> Result<(), ErrorCode>;

    fn pause(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn unpause(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn transfer_governance(env: Env, sender: Address, candidate: Address) -> Result<(), ErrorCode>;

    fn accept_governance(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn withdraw(env: Env, sender: Address, to: Address, amount: i128) -> Result<(), ErrorCode>;

    fn deposit(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    fn collect_dao_fees(env: Env, sender: Address, to: Address) -> Result<i128, ErrorCode>;

    fn collect_dev_fees(env: Env, sender: Address, to: Address) -> Result<i128, ErrorCode>;

    fn collect_all_fees(env: Env, sender: Address, to: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                           AUTO STAKE
    // ################################################################

    fn set_coordinator(env: Env, sender: Address, coordinator: Address) -> Result<(), ErrorCode>;

    fn fund_coordinator(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    fn set_reserve_ratio(env: Env, sender: Address, reserve_ratio_bps: u32) -> Result<(), ErrorCode>;

    fn set_auto_stake_threshold(env: Env, sender: Address, threshold: i128) -> Result<(), ErrorCode>;

    fn toggle_auto_staking(env: Env, sender: Address) -> Result<bool, ErrorCode>;

    fn set_current_validator(env: Env, sender: Address, validator_id: u32) -> Result<(), ErrorCode>;

    fn set_swap_router(env: Env, sender: Address, swap_router: Address) -> Result<(), ErrorCode>;

    fn check_and_auto_stake(env: Env) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    fn stake(env: Env, sender: Address, amount: i128, min_shares_out: i128) -> Result<i128, ErrorCode>;

    fn add_rewards(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode>;

    fn request_unlock(
        env: Env,
        sender: Address,
        share_amount: i128,
        min_asset_out: i128
    ) -> Result<u64, ErrorCode>;

    fn cancel_unlock(env: Env, sender: Address, request_id: u64) -> Result<(), ErrorCode>;

    fn claim_unlock(env: Env, sender: Address, request_id: u64) -> Result<i128, ErrorCode>;

    fn claim_expired(env: Env, sender: Address, request_id: u64) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn preview_stake(env: Env, amount: i128) -> Result<i128, ErrorCode>;

    fn preview_unlock(env: Env, share_amount: i128) -> Result<i128, ErrorCode>;

    fn query_config(env: Env) -> Result<PoolConfig, ErrorCode>;

    fn query_state(env: Env) -> Result<PoolState, ErrorCode>;

    fn query_auto_stake_config(env: Env) -> Result<AutoStakeConfig, ErrorCode>;

    fn query_exchange_rate(env: Env) -> Result<i128, ErrorCode>;

    fn query_stats(env: Env) -> Result<PoolStats, ErrorCode>;

    fn query_liquid_balance(env: Env) -> Result<i128, ErrorCode>;

    fn query_total_supply(env: Env) -> Result<i128, ErrorCode>;

    fn query_unlock_request_count(env: Env, owner: Address) -> u32;

    fn query_unlock_request(env: Env, owner: Address, request_id: u64) -> Result<UnlockRequest, ErrorCode>;

    fn query_unlock_requests(env: Env, owner: Address) -> Vec<UnlockRequest>;

    fn query_governance(env: Env) -> Result<Address, ErrorCode>;

    fn query_pending_governance(env: Env) -> Result<Option<Address>, ErrorCode>;

    fn query_schema_version(env: Env) -> u32;
}
