//! Password generation.

use log::{Level, debug, log_enabled, trace};
use rand::Rng;
use rand::seq::index;
use zeroize::Zeroize;

use super::{Config, GenerateError, charset, requirements};

/// Generates passwords for one fixed [`Config`].
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    config: Config,
}

impl PasswordGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Characters eligible for sampling, repeated to cover the password length.
    pub fn build_char_pool(&self) -> Result<Vec<u8>, GenerateError> {
        charset::build(&self.config)
    }

    pub fn satisfies_requirements(&self, candidate: &str) -> bool {
        requirements::satisfies(&self.config, candidate.as_bytes())
    }

    /// Generate one password from the thread-local RNG.
    pub fn generate(&self) -> Result<String, GenerateError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate one password from `rng`.
    ///
    /// Candidates are drawn without replacement from the pool and rejected
    /// until one holds every enabled class. Without `max_attempts` this loops
    /// until it succeeds.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenerateError> {
        let mut pool = self.build_char_pool()?;
        let result = self.generate_from_pool(&pool, rng);
        pool.zeroize();
        result
    }

    /// Generate `count` passwords, building the pool once.
    pub fn generate_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<String>, GenerateError> {
        let mut pool = self.build_char_pool()?;
        let mut passwords = Vec::with_capacity(count);

        for _ in 0..count {
            match self.generate_from_pool(&pool, rng) {
                Ok(pass) => passwords.push(pass),
                Err(e) => {
                    pool.zeroize();
                    passwords.zeroize();
                    return Err(e);
                }
            }
        }

        pool.zeroize();
        Ok(passwords)
    }

    fn generate_from_pool<R: Rng + ?Sized>(
        &self,
        pool: &[u8],
        rng: &mut R,
    ) -> Result<String, GenerateError> {
        let length = self.config.effective_length();
        let mut candidate = Vec::with_capacity(length);
        let mut attempts = 0usize;

        loop {
            if let Some(max) = self.config.max_attempts
                && attempts >= max
            {
                return Err(GenerateError::AttemptsExhausted { attempts: max });
            }
            attempts += 1;

            draw(pool, length, rng, &mut candidate);

            if requirements::satisfies(&self.config, &candidate) {
                debug!("candidate accepted after {} attempt(s)", attempts);
                // Safety: pool holds only ASCII bytes
                return Ok(unsafe { String::from_utf8_unchecked(candidate) });
            }

            if log_enabled!(Level::Trace) {
                let missing: Vec<&str> = requirements::missing(&self.config, &candidate)
                    .into_iter()
                    .map(|class| class.name())
                    .collect();
                trace!("candidate {} rejected, missing {:?}", attempts, missing);
            }

            candidate.zeroize();
        }
    }
}

/// Fill `buf` with `length` bytes sampled from `pool` without replacement.
#[inline]
fn draw<R: Rng + ?Sized>(pool: &[u8], length: usize, rng: &mut R, buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend(
        index::sample(rng, pool.len(), length)
            .into_iter()
            .map(|i| pool[i]),
    );
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::CharClass;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn draw_never_repeats_a_pool_position() {
        let pool: Vec<u8> = (0u8..64).collect();
        let mut rng = seeded();
        let mut buf = Vec::new();
        for _ in 0..100 {
            draw(&pool, 64, &mut rng, &mut buf);
            let mut sorted = buf.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, pool);
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let generator = PasswordGenerator::new(Config {
            length: 16,
            special_chars: true,
            ..Default::default()
        });
        let a = generator.generate_with(&mut seeded()).unwrap();
        let b = generator.generate_with(&mut seeded()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn length_larger_than_distinct_chars() {
        let generator = PasswordGenerator::new(Config {
            length: 25,
            special_chars: false,
            digits: true,
            uppercase: false,
            lowercase: false,
            max_attempts: None,
        });
        let mut rng = seeded();
        for _ in 0..50 {
            let pass = generator.generate_with(&mut rng).unwrap();
            assert_eq!(pass.len(), 25);
            assert!(pass.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn zero_attempts_allowed_fails_fast() {
        let generator = PasswordGenerator::new(Config {
            max_attempts: Some(0),
            ..Default::default()
        });
        assert_eq!(
            generator.generate(),
            Err(GenerateError::AttemptsExhausted { attempts: 0 })
        );
    }

    #[test]
    fn empty_pool_checked_before_attempt_cap() {
        let generator = PasswordGenerator::new(Config {
            special_chars: false,
            digits: false,
            uppercase: false,
            lowercase: false,
            max_attempts: Some(0),
            ..Default::default()
        });
        assert_eq!(generator.generate(), Err(GenerateError::EmptyPool));
    }

    #[test]
    fn generous_cap_still_succeeds() {
        let generator = PasswordGenerator::new(Config {
            length: 4,
            special_chars: true,
            max_attempts: Some(10_000),
            ..Default::default()
        });
        let mut rng = seeded();
        for _ in 0..100 {
            let pass = generator.generate_with(&mut rng).unwrap();
            for class in CharClass::ALL {
                assert!(pass.bytes().any(|b| class.contains(b)), "{pass}");
            }
        }
    }

    #[test]
    fn batch_produces_count_valid_passwords() {
        let generator = PasswordGenerator::default();
        let passwords = generator.generate_batch(&mut seeded(), 25).unwrap();
        assert_eq!(passwords.len(), 25);
        for pass in &passwords {
            assert_eq!(pass.len(), 10);
            assert!(generator.satisfies_requirements(pass));
        }
        assert!(generator.generate_batch(&mut seeded(), 0).unwrap().is_empty());
    }
}
