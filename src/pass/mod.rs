//! Password generation and output.

pub mod charset;
mod config;
mod error;
mod generate;
pub mod output;
pub mod requirements;

pub use charset::CharClass;
pub use config::{Config, MIN_LENGTH};
pub use error::GenerateError;
pub use generate::PasswordGenerator;
