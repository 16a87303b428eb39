use crate::entropy::{EntropySource, OsEntropy};
use crate::random::sample_below;
use crate::{RandomError, TUNED_PARAMS};

/// Uniform in-place permutation from OS entropy. On error `data` is unchanged.
pub fn shuffle<T>(data: &mut [T]) -> Result<(), RandomError> {
    shuffle_with(data, &mut OsEntropy)
}

pub fn shuffle_with<T, E>(data: &mut [T], source: &mut E) -> Result<(), RandomError>
where
    E: EntropySource + ?Sized,
{
    permute(data, source, 0)
}

/// Uniformly random cyclic permutation, using OS entropy.
pub fn cyclic_shuffle<T>(data: &mut [T]) -> Result<(), RandomError> {
    cyclic_shuffle_with(data, &mut OsEntropy)
}

// Sattolo: position `i` draws from `[i + 1, len)`.
pub fn cyclic_shuffle_with<T, E>(data: &mut [T], source: &mut E) -> Result<(), RandomError>
where
    E: EntropySource + ?Sized,
{
    permute(data, source, 1)
}

fn permute<T, E>(data: &mut [T], source: &mut E, skip: usize) -> Result<(), RandomError>
where
    E: EntropySource + ?Sized,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    // Every target is drawn before the first swap.
    let targets = (0..len - 1)
        .map(|i| {
            let lo = i + skip;
            sample_below(&mut *source, (len - lo) as u64, TUNED_PARAMS.max_rejection_attempts)
                .map(|offset| lo + offset as usize)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (i, target) in targets.into_iter().enumerate() {
        sort::swap(data, i, target);
    }
    Ok(())
}
