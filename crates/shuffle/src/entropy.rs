use rand::RngCore;

use crate::RandomError;

/// Provider of uniformly distributed random bytes.
pub trait EntropySource {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    #[inline]
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        (**self).fill_bytes(buf)
    }
}

/// Operating system CSPRNG via `getrandom`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        getrandom::getrandom(buf)
            .map_err(|err| RandomError::EntropySourceUnavailable(err.to_string()))
    }
}

/// Adapts any `rand` generator, e.g. a seeded `StdRng` for reproducible runs.
#[derive(Clone, Debug)]
pub struct RngEntropy<R>(pub R);

impl<R: RngCore> EntropySource for RngEntropy<R> {
    #[inline]
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        self.0.fill_bytes(buf);
        Ok(())
    }
}
