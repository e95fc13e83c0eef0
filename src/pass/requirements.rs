//! Candidate validation against the enabled character classes.

use super::{CharClass, Config};

/// True when `candidate` holds at least one character of every enabled class.
/// Disabled classes always pass.
pub fn satisfies(config: &Config, candidate: &[u8]) -> bool {
    config.classes().all(|class| has_class(candidate, class))
}

/// Enabled classes that `candidate` is missing.
pub fn missing(config: &Config, candidate: &[u8]) -> Vec<CharClass> {
    config
        .classes()
        .filter(|&class| !has_class(candidate, class))
        .collect()
}

#[inline]
fn has_class(candidate: &[u8], class: CharClass) -> bool {
    candidate.iter().any(|&byte| class.contains(byte))
}
