//! Generation errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Every character class is disabled, so there is nothing to sample from.
    #[error("no character classes enabled: the character pool is empty")]
    EmptyPool,

    /// The opt-in attempt cap ran out before a candidate met every requirement.
    #[error("no candidate met the requirements within {attempts} attempt(s)")]
    AttemptsExhausted { attempts: usize },
}
