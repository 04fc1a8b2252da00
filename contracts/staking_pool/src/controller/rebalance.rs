use sparrow::{
    error::{ ErrorCode, SparrowResult },
    interfaces::DelegationCoordinatorClient,
    math::{ helpers::bps_of, safe_math::SafeMath },
};
use soroban_sdk::{
    auth::{ ContractContext, InvokerContractAuthEntry, SubContractInvocation },
    log,
    vec,
    Env,
    IntoVal,
    Symbol,
};

use crate::{ events::PoolEvents, storage::{ get_auto_stake_config, get_config, get_state, utils } };

/// Liquidity above the configured reserve that is worth delegating, or 0.
pub fn auto_stake_surplus(env: &Env) -> SparrowResult<i128> {
    let config = get_config(env)?;
    let state = get_state(env)?;
    let auto_stake = get_auto_stake_config(env)?;

    if !auto_stake.enabled {
        return Ok(0);
    }

    let liquid = utils::liquid_balance(env, &config, &state)?;
    let reserve = bps_of(env, state.total_pooled, auto_stake.reserve_ratio_bps)?;
    if liquid <= reserve {
        return Ok(0);
    }

    let surplus = liquid.safe_sub(reserve, env)?;
    if surplus <= auto_stake.auto_stake_threshold {
        return Ok(0);
    }

    Ok(surplus)
}

/// Forwards the surplus above the reserve to the coordinator for delegation
/// to the current validator. Returns the amount delegated.
pub fn check_and_auto_stake(env: &Env) -> SparrowResult<i128> {
    let surplus = auto_stake_surplus(env)?;
    if surplus == 0 {
        return Ok(0);
    }

    let config = get_config(env)?;
    let auto_stake = get_auto_stake_config(env)?;

    let coordinator = match config.coordinator {
        Some(coordinator) => coordinator,
        None => {
            log!(env, "Staking Pool: coordinator is not set");
            return Err(ErrorCode::CoordinatorNotSet);
        }
    };
    let validator_id = match auto_stake.current_validator {
        Some(validator_id) => validator_id,
        None => {
            log!(env, "Staking Pool: no validator selected for auto staking");
            return Err(ErrorCode::NoValidatorSelected);
        }
    };

    let pool = env.current_contract_address();

    // the coordinator pulls the surplus from the pool inside its own call
    env.authorize_as_current_contract(
        vec![
            env,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: config.asset.clone(),
                    fn_name: Symbol::new(env, "transfer"),
                    args: (pool.clone(), coordinator.clone(), surplus).into_val(env),
                },
                sub_invocations: vec![env],
            })
        ]
    );

    DelegationCoordinatorClient::new(env, &coordinator).initiate_delegation(
        &pool,
        &validator_id,
        &surplus
    );

    PoolEvents::auto_staked(env, coordinator, validator_id, surplus);

    Ok(surplus)
}
