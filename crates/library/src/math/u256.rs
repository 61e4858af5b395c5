//! Wide intermediates for fixed-point products.
//!
//! Amounts are stored as `u128`. Products of several WAD/RAY scaled values
//! overflow that width, so multiplications run in [`U256`] and comparisons of
//! four-factor products in [`U512`] before narrowing back.

use anchor_lang::prelude::*;
use primitive_types::{U256, U512};
use std::cmp::Ordering;
use std::panic::Location;

use crate::errors::{ErrorCodes, LibraryResult};
use crate::math::safe_math::SafeMath;

/// Checked product of `factors` in 256 bits.
pub fn checked_product(factors: &[u128]) -> LibraryResult<U256> {
    factors
        .iter()
        .try_fold(U256::one(), |acc, factor| acc.safe_mul(U256::from(*factor)))
}

/// Narrows a 256-bit value back into an amount.
#[track_caller]
pub fn downcast_u128(value: U256) -> LibraryResult<u128> {
    if value > U256::from(u128::MAX) {
        let caller = Location::caller();
        msg!("U256 down cast error thrown at {}:{}", caller.file(), caller.line());
        return Err(ErrorCodes::LibraryU256NumberDownCastError);
    }
    Ok(value.as_u128())
}

/// `a * b / denominator`, rounded down.
pub fn safe_multiply_divide(a: u128, b: u128, denominator: u128) -> LibraryResult<u128> {
    if denominator == 0 {
        return Err(ErrorCodes::LibraryDivisionByZero);
    }
    let product = U256::from(a).safe_mul(U256::from(b))?;
    downcast_u128(product.safe_div(U256::from(denominator))?)
}

/// `a * b / denominator`, rounded up.
pub fn safe_multiply_divide_ceil(a: u128, b: u128, denominator: u128) -> LibraryResult<u128> {
    if denominator == 0 {
        return Err(ErrorCodes::LibraryDivisionByZero);
    }
    let product = U256::from(a).safe_mul(U256::from(b))?;
    downcast_u128(product.safe_div_ceil(U256::from(denominator))?)
}

/// `prod(numerator) / prod(denominator)` rounded up, narrowed to `u128`.
pub fn product_ratio_ceil(numerator: &[u128], denominator: &[u128]) -> LibraryResult<u128> {
    let denominator = checked_product(denominator)?;
    if denominator.is_zero() {
        return Err(ErrorCodes::LibraryDivisionByZero);
    }
    downcast_u128(checked_product(numerator)?.safe_div_ceil(denominator)?)
}

fn wide_product(factors: &[u128]) -> Option<U512> {
    factors.iter().try_fold(U512::one(), |acc, factor| {
        acc.checked_mul(U512::from(*factor))
    })
}

/// Orders `prod(lhs)` against `prod(rhs)` exactly.
///
/// Up to four `u128` factors per side never overflow 512 bits.
pub fn compare_products(lhs: &[u128], rhs: &[u128]) -> LibraryResult<Ordering> {
    match (wide_product(lhs), wide_product(rhs)) {
        (Some(lhs), Some(rhs)) => Ok(lhs.cmp(&rhs)),
        _ => Err(ErrorCodes::LibraryMathError),
    }
}

/// `prod(numerator) / prod(denominator)` rounded down, computed in 512 bits.
pub fn wide_ratio_floor(numerator: &[u128], denominator: &[u128]) -> LibraryResult<u128> {
    let (Some(numerator), Some(denominator)) = (wide_product(numerator), wide_product(denominator))
    else {
        return Err(ErrorCodes::LibraryMathError);
    };
    if denominator.is_zero() {
        return Err(ErrorCodes::LibraryDivisionByZero);
    }

    let quotient = numerator / denominator;
    if quotient > U512::from(u128::MAX) {
        return Err(ErrorCodes::LibraryU256NumberDownCastError);
    }
    Ok(quotient.low_u128())
}
