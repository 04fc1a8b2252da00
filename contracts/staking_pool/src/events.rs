use soroban_sdk::{ Address, BytesN, Env, Symbol };

pub struct PoolEvents {}

impl PoolEvents {
    /// Emitted when the pool is initialized
    ///
    /// - topics - `["initialize", governance: Address]`
    /// - data - `[asset: Address]`
    pub fn initialize(env: &Env, governance: Address, asset: Address) {
        let topics = (Symbol::new(env, "initialize"), governance);
        env.events().publish(topics, asset);
    }

    /// Emitted when a user stakes the asset
    ///
    /// - topics - `["staked", user: Address]`
    /// - data - `[amount: i128, shares: i128]`
    pub fn staked(env: &Env, user: Address, amount: i128, shares: i128) {
        let topics = (Symbol::new(env, "staked"), user);
        env.events().publish(topics, (amount, shares));
    }

    /// Emitted when rewards are added to the pool
    ///
    /// - topics - `["rewards_added", sender: Address]`
    /// - data - `[amount: i128, user_portion: i128, dao_fee: i128, dev_fee: i128]`
    pub fn rewards_added(
        env: &Env,
        sender: Address,
        amount: i128,
        user_portion: i128,
        dao_fee: i128,
        dev_fee: i128
    ) {
        let topics = (Symbol::new(env, "rewards_added"), sender);
        env.events().publish(topics, (amount, user_portion, dao_fee, dev_fee));
    }

    /// Emitted when a user requests an unlock
    ///
    /// - topics - `["unlock_requested", user: Address, request_id: u64]`
    /// - data - `[share_amount: i128, asset_amount_locked: i128, unlock_at: u64]`
    pub fn unlock_requested(
        env: &Env,
        user: Address,
        request_id: u64,
        share_amount: i128,
        asset_amount_locked: i128,
        unlock_at: u64
    ) {
        let topics = (Symbol::new(env, "unlock_requested"), user, request_id);
        env.events().publish(topics, (share_amount, asset_amount_locked, unlock_at));
    }

    /// Emitted when a user cancels an unlock request
    ///
    /// - topics - `["unlock_cancelled", user: Address, request_id: u64]`
    /// - data - `[share_amount: i128]`
    pub fn unlock_cancelled(env: &Env, user: Address, request_id: u64, share_amount: i128) {
        let topics = (Symbol::new(env, "unlock_cancelled"), user, request_id);
        env.events().publish(topics, share_amount);
    }

    /// Emitted when a user claims an unlocked request
    ///
    /// - topics - `["unlock_claimed", user: Address, request_id: u64]`
    /// - data - `[share_amount: i128, asset_amount: i128]`
    pub fn unlock_claimed(
        env: &Env,
        user: Address,
        request_id: u64,
        share_amount: i128,
        asset_amount: i128
    ) {
        let topics = (Symbol::new(env, "unlock_claimed"), user, request_id);
        env.events().publish(topics, (share_amount, asset_amount));
    }

    /// Emitted when an expired request returns its shares to the owner
    ///
    /// - topics - `["expired_claimed", user: Address, request_id: u64]`
    /// - data - `[share_amount: i128]`
    pub fn expired_claimed(env: &Env, user: Address, request_id: u64, share_amount: i128) {
        let topics = (Symbol::new(env, "expired_claimed"), user, request_id);
        env.events().publish(topics, share_amount);
    }

    /// Emitted when accumulated fees are collected
    ///
    /// - topics - `["fees_collected", to: Address]`
    /// - data - `[dao_fee: i128, dev_fee: i128]`
    pub fn fees_collected(env: &Env, to: Address, dao_fee: i128, dev_fee: i128) {
        let topics = (Symbol::new(env, "fees_collected"), to);
        env.events().publish(topics, (dao_fee, dev_fee));
    }

    /// Emitted when governance withdraws liquidity
    ///
    /// - topics - `["withdraw", to: Address]`
    /// - data - `[amount: i128]`
    pub fn withdraw(env: &Env, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "withdraw"), to);
        env.events().publish(topics, amount);
    }

    /// Emitted when governance tops up the pool without minting shares
    ///
    /// - topics - `["deposit", from: Address]`
    /// - data - `[amount: i128]`
    pub fn deposit(env: &Env, from: Address, amount: i128) {
        let topics = (Symbol::new(env, "deposit"), from);
        env.events().publish(topics, amount);
    }

    /// Emitted when the fee structure changes
    ///
    /// - topics - `["fee_structure"]`
    /// - data - `[dao_fee_bps: u32, dev_fee_bps: u32]`
    pub fn fee_structure(env: &Env, dao_fee_bps: u32, dev_fee_bps: u32) {
        let topics = (Symbol::new(env, "fee_structure"),);
        env.events().publish(topics, (dao_fee_bps, dev_fee_bps));
    }

    /// Emitted when the pool is paused or unpaused
    ///
    /// - topics - `["paused"]`
    /// - data - `[paused: bool]`
    pub fn paused(env: &Env, paused: bool) {
        let topics = (Symbol::new(env, "paused"),);
        env.events().publish(topics, paused);
    }

    /// Emitted when a governance transfer is proposed
    ///
    /// - topics - `["governance_proposed", current: Address]`
    /// - data - `[candidate: Address]`
    pub fn governance_proposed(env: &Env, current: Address, candidate: Address) {
        let topics = (Symbol::new(env, "governance_proposed"), current);
        env.events().publish(topics, candidate);
    }

    /// Emitted when a governance transfer is accepted
    ///
    /// - topics - `["governance_accepted", governance: Address]`
    /// - data - ()
    pub fn governance_accepted(env: &Env, governance: Address) {
        let topics = (Symbol::new(env, "governance_accepted"), governance);
        env.events().publish(topics, ());
    }

    /// Emitted when surplus liquidity is forwarded to the coordinator
    ///
    /// - topics - `["auto_staked", coordinator: Address, validator_id: u32]`
    /// - data - `[amount: i128]`
    pub fn auto_staked(env: &Env, coordinator: Address, validator_id: u32, amount: i128) {
        let topics = (Symbol::new(env, "auto_staked"), coordinator, validator_id);
        env.events().publish(topics, amount);
    }

    /// Emitted when governance funds the coordinator directly
    ///
    /// - topics - `["coordinator_funded", coordinator: Address]`
    /// - data - `[amount: i128]`
    pub fn coordinator_funded(env: &Env, coordinator: Address, amount: i128) {
        let topics = (Symbol::new(env, "coordinator_funded"), coordinator);
        env.events().publish(topics, amount);
    }

    /// Emitted when the stored schema is migrated
    ///
    /// - topics - `["migrated"]`
    /// - data - `[from: u32, to: u32]`
    pub fn migrated(env: &Env, from: u32, to: u32) {
        let topics = (Symbol::new(env, "migrated"),);
        env.events().publish(topics, (from, to));
    }

    /// Emitted when the contract wasm is upgraded
    ///
    /// - topics - `["upgraded"]`
    /// - data - `[wasm_hash: BytesN<32>]`
    pub fn upgraded(env: &Env, wasm_hash: BytesN<32>) {
        let topics = (Symbol::new(env, "upgraded"),);
        env.events().publish(topics, wasm_hash);
    }
}
