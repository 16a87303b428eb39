mod entropy;
mod error;
mod fisher_yates;
mod random;

pub use entropy::{EntropySource, OsEntropy, RngEntropy};
pub use error::RandomError;
pub use fisher_yates::{cyclic_shuffle, cyclic_shuffle_with, shuffle, shuffle_with};
pub use random::{random_in_range, random_in_range_bounded, random_in_range_with};

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub max_rejection_attempts: u32,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    max_rejection_attempts: 1000,
};
