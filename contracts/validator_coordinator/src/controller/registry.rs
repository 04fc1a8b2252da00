use sparrow::{ error::{ ErrorCode, SparrowResult }, math::safe_math::SafeMath, validate };
use soroban_sdk::{ BytesN, Env, String, Vec };

use crate::{
    events::CoordinatorEvents,
    storage::{
        get_validator,
        get_validator_count,
        is_registered,
        push_validator,
        save_validator,
        DelegationStatus,
        Validator,
    },
};

pub fn add_validator(
    env: &Env,
    validation_id: BytesN<32>,
    name: String,
    weight_to_value_factor: i128
) -> SparrowResult<u32> {
    validate!(
        env,
        !is_registered(env, &validation_id),
        ErrorCode::ValidatorAlreadyRegistered,
        "Validator Coordinator: validation id already registered"
    )?;
    validate!(
        env,
        weight_to_value_factor > 0,
        ErrorCode::InvalidWeightFactor,
        "Validator Coordinator: weight to value factor must be positive: {}",
        weight_to_value_factor
    )?;

    let validator_id = push_validator(
        env,
        &(Validator {
            validation_id: validation_id.clone(),
            name,
            active: false,
            delegated_amount: 0,
            pending_amount: 0,
            stranded_amount: 0,
            weight: 0,
            delegation_id: 0,
            weight_to_value_factor,
            status: DelegationStatus::Idle,
        })
    );

    CoordinatorEvents::validator_added(env, validator_id, validation_id, weight_to_value_factor);

    Ok(validator_id)
}

pub fn activate_validator(env: &Env, validator_id: u32) -> SparrowResult {
    let mut validator = get_validator(env, validator_id)?;
    validate!(
        env,
        !validator.active,
        ErrorCode::AlreadyActive,
        "Validator Coordinator: validator {} is already active",
        validator_id
    )?;

    validator.active = true;
    save_validator(env, validator_id, &validator);

    CoordinatorEvents::validator_activated(env, validator_id);

    Ok(())
}

pub fn validators(env: &Env) -> SparrowResult<Vec<Validator>> {
    let mut validators = Vec::new(env);
    for validator_id in 0..get_validator_count(env) {
        validators.push_back(get_validator(env, validator_id)?);
    }
    Ok(validators)
}

pub fn total_delegated(env: &Env) -> SparrowResult<i128> {
    let mut total: i128 = 0;
    for validator in validators(env)?.iter() {
        total = total.safe_add(validator.delegated_amount, env)?;
    }
    Ok(total)
}

pub fn total_pending(env: &Env) -> SparrowResult<i128> {
    let mut total: i128 = 0;
    for validator in validators(env)?.iter() {
        total = total.safe_add(validator.pending_amount, env)?;
    }
    Ok(total)
}
