//! Generator configuration.

use serde::{Deserialize, Serialize};

use super::charset::CharClass;

/// Shortest password ever produced: one slot per possible class.
pub const MIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub length: usize,
    pub special_chars: bool,
    pub digits: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    /// Upper bound on rejected candidates. `None` keeps sampling until one fits.
    pub max_attempts: Option<usize>,
}

impl Config {
    /// Requested length, raised to [`MIN_LENGTH`] when shorter.
    pub fn effective_length(&self) -> usize {
        self.length.max(MIN_LENGTH)
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Special => self.special_chars,
            CharClass::Digit => self.digits,
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
        }
    }

    /// Enabled classes, in pool order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |&class| self.is_enabled(class))
    }

    pub fn has_any_class(&self) -> bool {
        self.classes().next().is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 10,
            special_chars: false,
            digits: true,
            uppercase: true,
            lowercase: true,
            max_attempts: None,
        }
    }
}
