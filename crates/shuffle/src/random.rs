use tracing::{trace, warn};

use crate::entropy::{EntropySource, OsEntropy};
use crate::{RandomError, TUNED_PARAMS};

/// Uniform integer in `[min, max)`; `max <= min` yields `min`.
pub fn random_in_range(min: i64, max: i64) -> Result<i64, RandomError> {
    random_in_range_with(&mut OsEntropy, min, max)
}

pub fn random_in_range_with<E>(source: &mut E, min: i64, max: i64) -> Result<i64, RandomError>
where
    E: EntropySource + ?Sized,
{
    random_in_range_bounded(source, min, max, TUNED_PARAMS.max_rejection_attempts)
}

pub fn random_in_range_bounded<E>(
    source: &mut E,
    min: i64,
    max: i64,
    max_attempts: u32,
) -> Result<i64, RandomError>
where
    E: EntropySource + ?Sized,
{
    if max <= min {
        return Ok(min);
    }
    let offset = sample_below(source, max.abs_diff(min), max_attempts)?;
    Ok(min.wrapping_add_unsigned(offset))
}

// Draws floor(bits / 8) + 1 bytes, masks to `bits`, rejects `>= range`.
pub(crate) fn sample_below<E>(source: &mut E, range: u64, max_attempts: u32) -> Result<u64, RandomError>
where
    E: EntropySource + ?Sized,
{
    debug_assert!(range > 0);
    let bits = u64::BITS - range.leading_zeros();
    let bytes = (bits / 8 + 1) as usize;
    let mask = (1u128 << bits) - 1;

    let mut buf = [0u8; 9];
    for attempt in 1..=max_attempts {
        source.fill_bytes(&mut buf[..bytes])?;
        let value = buf[..bytes]
            .iter()
            .rev()
            .fold(0u128, |acc, &b| (acc << 8) | u128::from(b))
            & mask;
        if value < u128::from(range) {
            return Ok(value as u64);
        }
        trace!(attempt, range, "rejected out-of-range draw");
    }

    warn!(range, max_attempts, "rejection sampling exhausted its retry budget");
    Err(RandomError::EntropyExhausted {
        attempts: max_attempts,
    })
}
