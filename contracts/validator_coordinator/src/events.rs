use soroban_sdk::{ Address, BytesN, Env, Symbol };

pub struct CoordinatorEvents {}

impl CoordinatorEvents {
    /// Emitted when the coordinator is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[validator_manager: Address, pool: Address]`
    pub fn initialize(env: &Env, admin: Address, validator_manager: Address, pool: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (validator_manager, pool));
    }

    /// Emitted when a validator is registered
    ///
    /// - topics - `["validator_added", validator_id: u32]`
    /// - data - `[validation_id: BytesN<32>, weight_to_value_factor: i128]`
    pub fn validator_added(
        env: &Env,
        validator_id: u32,
        validation_id: BytesN<32>,
        weight_to_value_factor: i128
    ) {
        let topics = (Symbol::new(env, "validator_added"), validator_id);
        env.events().publish(topics, (validation_id, weight_to_value_factor));
    }

    /// Emitted when a validator is activated
    ///
    /// - topics - `["validator_activated", validator_id: u32]`
    /// - data - ()
    pub fn validator_activated(env: &Env, validator_id: u32) {
        let topics = (Symbol::new(env, "validator_activated"), validator_id);
        env.events().publish(topics, ());
    }

    /// Emitted when a delegator registration is begun with the manager
    ///
    /// - topics - `["delegation_initiated", validator_id: u32, funder: Address]`
    /// - data - `[amount: i128]`
    pub fn delegation_initiated(env: &Env, validator_id: u32, funder: Address, amount: i128) {
        let topics = (Symbol::new(env, "delegation_initiated"), validator_id, funder);
        env.events().publish(topics, amount);
    }

    /// Emitted when a pending registration is confirmed
    ///
    /// - topics - `["delegation_completed", validator_id: u32]`
    /// - data - `[delegation_id: u64, delegated_amount: i128, weight: i128]`
    pub fn delegation_completed(
        env: &Env,
        validator_id: u32,
        delegation_id: u64,
        delegated_amount: i128,
        weight: i128
    ) {
        let topics = (Symbol::new(env, "delegation_completed"), validator_id);
        env.events().publish(topics, (delegation_id, delegated_amount, weight));
    }

    /// Emitted when the operator gives up on a pending registration
    ///
    /// - topics - `["delegation_abandoned", validator_id: u32]`
    /// - data - `[stranded_amount: i128]`
    pub fn delegation_abandoned(env: &Env, validator_id: u32, stranded_amount: i128) {
        let topics = (Symbol::new(env, "delegation_abandoned"), validator_id);
        env.events().publish(topics, stranded_amount);
    }

    /// Emitted when idle coordinator funds are withdrawn
    ///
    /// - topics - `["withdraw", to: Address]`
    /// - data - `[amount: i128]`
    pub fn withdraw(env: &Env, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "withdraw"), to);
        env.events().publish(topics, amount);
    }

    /// Emitted when an admin transfer is proposed
    ///
    /// - topics - `["admin_proposed", current: Address]`
    /// - data - `[candidate: Address]`
    pub fn admin_proposed(env: &Env, current: Address, candidate: Address) {
        let topics = (Symbol::new(env, "admin_proposed"), current);
        env.events().publish(topics, candidate);
    }

    /// Emitted when an admin transfer is accepted
    ///
    /// - topics - `["admin_accepted", admin: Address]`
    /// - data - ()
    pub fn admin_accepted(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "admin_accepted"), admin);
        env.events().publish(topics, ());
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
