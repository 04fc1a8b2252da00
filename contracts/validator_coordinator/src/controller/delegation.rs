use sparrow::{
    error::{ ErrorCode, SparrowResult },
    interfaces::ValidatorManagerClient,
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ log, Address, Env };

use crate::{
    events::CoordinatorEvents,
    storage::{ get_config, get_validator, save_validator, utils, DelegationStatus },
};

/// Opens a delegator registration for `amount` with the validator manager.
///
/// When `funder` is an outside account the amount is pulled from it first,
/// otherwise it comes out of the coordinator's own balance. The registration
/// stays pending until `complete_delegation` reports the external id.
pub fn begin_delegation(env: &Env, funder: &Address, validator_id: u32, amount: i128) -> SparrowResult {
    let config = get_config(env)?;
    let mut validator = get_validator(env, validator_id)?;
    let coordinator = env.current_contract_address();

    validate!(env, amount > 0, ErrorCode::ZeroAmount, "Validator Coordinator: zero delegation")?;
    validate!(
        env,
        validator.active,
        ErrorCode::ValidatorNotActive,
        "Validator Coordinator: validator {} is not active",
        validator_id
    )?;
    validate!(
        env,
        validator.delegation_id == 0,
        ErrorCode::AlreadyCompleted,
        "Validator Coordinator: validator {} already holds delegation {}",
        validator_id,
        validator.delegation_id
    )?;
    validate!(
        env,
        validator.status != DelegationStatus::Pending,
        ErrorCode::DelegationAlreadyPending,
        "Validator Coordinator: validator {} has a pending delegation",
        validator_id
    )?;

    let available = utils::token_balance(env, &config, funder);
    validate!(
        env,
        available >= amount,
        ErrorCode::InsufficientFunds,
        "Validator Coordinator: {} available, {} requested",
        available,
        amount
    )?;

    validator.pending_amount = amount;
    validator.status = DelegationStatus::Pending;
    save_validator(env, validator_id, &validator);

    if *funder != coordinator {
        utils::transfer_asset(env, &config, funder, &coordinator, amount);
    }
    utils::transfer_asset(env, &config, &coordinator, &config.validator_manager, amount);

    let manager = ValidatorManagerClient::new(env, &config.validator_manager);
    match manager.try_begin_delegator_registration(&coordinator, &validator.validation_id, &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "Validator Coordinator: manager rejected registration for {}", validator_id);
            return Err(ErrorCode::RegistrationRejected);
        }
    }

    CoordinatorEvents::delegation_initiated(env, validator_id, funder.clone(), amount);

    Ok(())
}

/// Finalizes a pending registration under the externally assigned id.
pub fn complete_delegation(env: &Env, validator_id: u32, delegation_id: u64) -> SparrowResult {
    let config = get_config(env)?;
    let mut validator = get_validator(env, validator_id)?;

    validate!(
        env,
        validator.delegation_id == 0,
        ErrorCode::AlreadyCompleted,
        "Validator Coordinator: validator {} already completed",
        validator_id
    )?;
    validate!(
        env,
        validator.status == DelegationStatus::Pending,
        ErrorCode::NoPendingDelegation,
        "Validator Coordinator: validator {} has no pending delegation",
        validator_id
    )?;
    validate!(
        env,
        delegation_id != 0,
        ErrorCode::InvalidDelegationId,
        "Validator Coordinator: delegation id 0 is reserved"
    )?;

    let manager = ValidatorManagerClient::new(env, &config.validator_manager);
    match
        manager.try_complete_delegator_registration(
            &env.current_contract_address(),
            &validator.validation_id,
            &delegation_id
        )
    {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "Validator Coordinator: manager rejected completion for {}", validator_id);
            return Err(ErrorCode::RegistrationRejected);
        }
    }

    validator.delegated_amount = validator.delegated_amount.safe_add(validator.pending_amount, env)?;
    validator.pending_amount = 0;
    validator.delegation_id = delegation_id;
    validator.weight = validator.delegated_amount.safe_div(validator.weight_to_value_factor, env)?;
    validator.status = DelegationStatus::Completed;
    save_validator(env, validator_id, &validator);

    CoordinatorEvents::delegation_completed(
        env,
        validator_id,
        delegation_id,
        validator.delegated_amount,
        validator.weight
    );

    Ok(())
}

/// Operator escape hatch for a registration the validator set never
/// confirms: the validator goes back to idle and the amount handed to the
/// manager is recorded as stranded.
pub fn abandon_pending_delegation(env: &Env, validator_id: u32) -> SparrowResult<i128> {
    let mut validator = get_validator(env, validator_id)?;

    validate!(
        env,
        validator.status == DelegationStatus::Pending,
        ErrorCode::NoPendingDelegation,
        "Validator Coordinator: validator {} has no pending delegation",
        validator_id
    )?;

    let stranded = validator.pending_amount;
    validator.stranded_amount = validator.stranded_amount.safe_add(stranded, env)?;
    validator.pending_amount = 0;
    validator.status = DelegationStatus::Idle;
    save_validator(env, validator_id, &validator);

    CoordinatorEvents::delegation_abandoned(env, validator_id, stranded);

    Ok(stranded)
}
