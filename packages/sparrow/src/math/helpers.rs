use soroban_sdk::{log, Env};

use crate::{
    constants::BPS_DENOMINATOR,
    error::{ErrorCode, SparrowResult},
    validate,
};

use super::{bn::U256, safe_math::SafeMath};

/// `value * numerator / denominator`, rounded down.
///
/// Operands are non-negative asset or share amounts. Products that overflow
/// i128 are carried out in 256 bits and only the quotient has to fit back.
pub fn mul_div_floor(
    env: &Env,
    value: i128,
    numerator: i128,
    denominator: i128,
) -> SparrowResult<i128> {
    validate!(
        env,
        value >= 0 && numerator >= 0 && denominator > 0,
        ErrorCode::MathError,
        "mul_div_floor operands out of range"
    )?;

    if numerator == denominator {
        return Ok(value);
    }

    match value.checked_mul(numerator) {
        Some(product) => product.safe_div(denominator, env),
        None => {
            let quotient = U256::from(value as u128)
                .safe_mul(U256::from(numerator as u128), env)?
                .safe_div(U256::from(denominator as u128), env)?;

            let quotient = quotient.to_u128().ok_or_else(|| {
                log!(env, "Casting error: quotient does not fit in u128");
                ErrorCode::CastingFailure
            })?;

            i128::try_from(quotient).map_err(|_| {
                log!(env, "Casting error: quotient does not fit in i128");
                ErrorCode::CastingFailure
            })
        }
    }
}

/// Portion of `amount` corresponding to `bps` basis points, rounded down.
pub fn bps_of(env: &Env, amount: i128, bps: u32) -> SparrowResult<i128> {
    mul_div_floor(env, amount, bps as i128, BPS_DENOMINATOR)
}
