//! Character set building for password generation.

use log::debug;

use super::{Config, GenerateError};

const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const DIGITS: &[u8] = b"0123456789";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Special,
    Digit,
    Uppercase,
    Lowercase,
}

impl CharClass {
    /// Every class, in the order the pool is assembled.
    pub const ALL: [CharClass; 4] = [
        CharClass::Special,
        CharClass::Digit,
        CharClass::Uppercase,
        CharClass::Lowercase,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Special => SPECIAL,
            CharClass::Digit => DIGITS,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
        }
    }

    #[inline]
    pub fn contains(self, byte: u8) -> bool {
        match self {
            CharClass::Special => byte.is_ascii_punctuation(),
            CharClass::Digit => byte.is_ascii_digit(),
            CharClass::Uppercase => byte.is_ascii_uppercase(),
            CharClass::Lowercase => byte.is_ascii_lowercase(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Special => "special",
            CharClass::Digit => "digit",
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
        }
    }
}

/// Build the character pool for `config`.
///
/// The enabled classes are concatenated in [`CharClass::ALL`] order, then the
/// whole pool is doubled until it holds at least `config.effective_length()`
/// bytes so a sample without replacement of that size can always be drawn.
pub fn build(config: &Config) -> Result<Vec<u8>, GenerateError> {
    let mut chars: Vec<u8> = Vec::with_capacity(size(config));

    for class in config.classes() {
        chars.extend_from_slice(class.chars());
    }

    if chars.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    let length = config.effective_length();
    while chars.len() < length {
        chars.extend_from_within(..);
    }

    debug!(
        "pool built: {} distinct chars, {} total for length {}",
        size(config),
        chars.len(),
        length
    );

    Ok(chars)
}

/// Number of distinct characters the enabled classes contribute.
pub fn size(config: &Config) -> usize {
    config.classes().map(|class| class.chars().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharClass, length: usize) -> Config {
        Config {
            length,
            special_chars: class == CharClass::Special,
            digits: class == CharClass::Digit,
            uppercase: class == CharClass::Uppercase,
            lowercase: class == CharClass::Lowercase,
            max_attempts: None,
        }
    }

    #[test]
    fn class_sets_are_disjoint_and_self_consistent() {
        for class in CharClass::ALL {
            for &byte in class.chars() {
                for other in CharClass::ALL {
                    assert_eq!(other.contains(byte), other == class, "{}", byte as char);
                }
            }
        }
        assert_eq!(SPECIAL.len(), 32);
    }

    #[test]
    fn pool_is_built_in_class_order() {
        let config = Config {
            length: 4,
            special_chars: true,
            ..Default::default()
        };
        let pool = build(&config).unwrap();
        let expected: Vec<u8> = [SPECIAL, DIGITS, UPPERCASE, LOWERCASE].concat();
        assert_eq!(pool, expected);
    }

    #[test]
    fn default_pool_has_no_punctuation() {
        let pool = build(&Config::default()).unwrap();
        assert_eq!(pool.len(), 62);
        assert!(!pool.iter().any(|b| b.is_ascii_punctuation()));
    }

    #[test]
    fn short_pool_is_doubled_until_long_enough() {
        let pool = build(&only(CharClass::Digit, 20)).unwrap();
        assert_eq!(pool.len(), 20);
        assert_eq!(&pool[..10], DIGITS);
        assert_eq!(&pool[10..], DIGITS);

        let pool = build(&only(CharClass::Digit, 21)).unwrap();
        assert_eq!(pool.len(), 40);
    }

    #[test]
    fn pool_covers_clamped_length_for_every_combination() {
        for mask in 1u8..16 {
            for length in [0, 1, 4, 9, 10, 33, 100, 257] {
                let config = Config {
                    length,
                    special_chars: mask & 1 != 0,
                    digits: mask & 2 != 0,
                    uppercase: mask & 4 != 0,
                    lowercase: mask & 8 != 0,
                    max_attempts: None,
                };
                let pool = build(&config).unwrap();
                assert!(pool.len() >= config.effective_length());
                assert_eq!(pool.len() % size(&config), 0);
            }
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let config = Config {
            special_chars: false,
            digits: false,
            uppercase: false,
            lowercase: false,
            ..Default::default()
        };
        assert_eq!(build(&config), Err(GenerateError::EmptyPool));
        assert_eq!(size(&config), 0);
    }
}
