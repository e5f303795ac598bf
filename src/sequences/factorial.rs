//! Trailing zeros of n!

use crate::constants::factorial::MAX_INPUT;
use crate::error::ChalkboardError;

/// Count the trailing zeros of `n!` for `0 <= n <= 500`
///
/// Each trailing zero comes from a factor of 10, and factors of 5 are
/// rarer than factors of 2, so the count is `n/5 + n/25 + n/125 + ...`.
/// Values outside the supported domain are a defined failure.
pub fn trailing_zeros(n: u64) -> Result<u64, ChalkboardError> {
    if n > MAX_INPUT {
        return Err(ChalkboardError::DomainError {
            value: n,
            max: MAX_INPUT,
        });
    }

    let mut count = 0;
    let mut remaining = n;
    while remaining > 0 {
        remaining /= 5;
        count += remaining;
    }

    Ok(count)
}

/// The successive `n / 5^k` terms that make up the count
///
/// Used by the human report to show how the total is assembled; the sum of
/// the returned terms equals `trailing_zeros(n)`.
pub fn reduction_terms(n: u64) -> Vec<u64> {
    let mut terms = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        remaining /= 5;
        if remaining > 0 {
            terms.push(remaining);
        }
    }
    terms
}
