use soroban_sdk::{contractclient, Address, BytesN, Env};

use crate::error::ErrorCode;

/// Entry point the staking pool uses to push surplus liquidity into a
/// validator delegation.
#[contractclient(name = "DelegationCoordinatorClient")]
pub trait DelegationCoordinatorInterface {
    /// Starts a delegation of `amount` to the registered validator
    /// `validator_id`, funded by `sender` within the same call.
    fn initiate_delegation(
        env: Env,
        sender: Address,
        validator_id: u32,
        amount: i128,
    ) -> Result<(), ErrorCode>;
}

/// External two-phase validator registration service.
///
/// `begin_delegator_registration` expects `amount` of the staking asset to
/// have been transferred to the manager within the same transaction. It only
/// opens a pending registration; the external validator set confirms it out
/// of band, after which `complete_delegator_registration` finalizes it under
/// the externally assigned delegation id.
#[contractclient(name = "ValidatorManagerClient")]
pub trait ValidatorManagerInterface {
    fn begin_delegator_registration(
        env: Env,
        delegator: Address,
        validation_id: BytesN<32>,
        amount: i128,
    );

    fn complete_delegator_registration(
        env: Env,
        delegator: Address,
        validation_id: BytesN<32>,
        delegation_id: u64,
    );
}
