use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Default)]
#[command(
    name = "simplepw",
    version,
    about = "Generate passwords containing every selected character class"
)]
pub struct CliFlags {
    /// Password length (raised to 4 if shorter)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Include punctuation characters
    #[arg(long, overrides_with = "no_special")]
    pub special: bool,
    /// Exclude punctuation characters
    #[arg(long)]
    pub no_special: bool,

    /// Include digits
    #[arg(long, overrides_with = "no_digits")]
    pub digits: bool,
    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Include uppercase letters
    #[arg(long, overrides_with = "no_uppercase")]
    pub uppercase: bool,
    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Include lowercase letters
    #[arg(long, overrides_with = "no_lowercase")]
    pub lowercase: bool,
    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Give up after this many rejected candidates
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<usize>,

    /// Number of passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Append passwords to a file instead of printing them
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Copy passwords to the clipboard
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Read randomness directly from the operating system
    #[arg(short, long)]
    pub urandom: bool,

    /// Suppress warnings and notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Store the resolved options as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Ignore the settings file for this run
    #[arg(short, long)]
    pub default: bool,
}

impl CliFlags {
    pub fn special_chars(&self) -> Option<bool> {
        toggle(self.special, self.no_special)
    }

    pub fn digits(&self) -> Option<bool> {
        toggle(self.digits, self.no_digits)
    }

    pub fn uppercase(&self) -> Option<bool> {
        toggle(self.uppercase, self.no_uppercase)
    }

    pub fn lowercase(&self) -> Option<bool> {
        toggle(self.lowercase, self.no_lowercase)
    }
}

/// `Some` only when one side of an on/off pair was given.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, false) => Some(true),
        (false, true) => Some(false),
        _ => None,
    }
}
