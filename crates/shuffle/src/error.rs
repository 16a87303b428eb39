use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    #[error("entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    #[error("rejection sampling gave up after {attempts} draws")]
    EntropyExhausted { attempts: u32 },
}
