//! Password generation with guaranteed character-class coverage.
//!
//! ```
//! use simplepw::{Config, PasswordGenerator};
//!
//! let generator = PasswordGenerator::new(Config {
//!     length: 16,
//!     special_chars: true,
//!     ..Default::default()
//! });
//! let password = generator.generate().unwrap();
//! assert_eq!(password.len(), 16);
//! ```

pub mod entropy;
pub mod pass;
pub mod settings;

pub use entropy::EntropySource;
pub use pass::{CharClass, Config, GenerateError, PasswordGenerator};
pub use settings::{Settings, SettingsError};
