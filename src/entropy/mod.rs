//! Random source selection.

use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntropySource {
    /// Thread-local generator reseeded from the OS.
    #[default]
    Thread,
    /// Every value read straight from the operating system.
    Os,
}

impl EntropySource {
    pub fn name(self) -> &'static str {
        match self {
            EntropySource::Thread => "thread rng",
            EntropySource::Os => "os rng",
        }
    }

    /// Run `f` against this source.
    pub fn with_rng<T>(self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            EntropySource::Thread => f(&mut rand::thread_rng()),
            EntropySource::Os => f(&mut OsRng),
        }
    }
}
