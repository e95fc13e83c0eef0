//! CLI context - bundles settings and flags, runs generation and output.

use std::fs::{self, OpenOptions};
use std::io;

use anyhow::{Context as _, Result};
use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info};
use simplepw::pass::output::{join_lines, write_batch};
use simplepw::{EntropySource, PasswordGenerator, Settings, settings};
use zeroize::Zeroize;

use super::{CliFlags, prompts};

/// Where a batch of passwords ends up.
enum Target {
    Clipboard(ClipboardContext),
    Terminal,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load().unwrap_or_else(|e| {
                prompts::settings_load_failed(&e.to_string());
                Settings::default()
            })
        };

        Self { settings, flags }
    }

    pub fn run(&mut self) -> Result<()> {
        self.apply_flags();
        if self.flags.save {
            self.save_settings()?;
        }
        self.generate_output()
    }

    /// Apply CLI flags on top of the loaded settings.
    fn apply_flags(&mut self) {
        let config = &mut self.settings.generator;

        if let Some(length) = self.flags.length {
            config.length = length;
        }
        if let Some(on) = self.flags.special_chars() {
            config.special_chars = on;
        }
        if let Some(on) = self.flags.digits() {
            config.digits = on;
        }
        if let Some(on) = self.flags.uppercase() {
            config.uppercase = on;
        }
        if let Some(on) = self.flags.lowercase() {
            config.lowercase = on;
        }
        if let Some(max) = self.flags.max_attempts {
            config.max_attempts = Some(max);
        }

        if let Some(count) = self.flags.number {
            self.settings.count = count;
        }
        if self.flags.urandom {
            self.settings.entropy = EntropySource::Os;
        }
        if let Some(ref path) = self.flags.output {
            self.settings.output = Some(path.clone());
        }

        debug!("resolved settings: {:?}", self.settings);
    }

    fn save_settings(&self) -> Result<()> {
        let path = settings::default_path();
        self.settings
            .save_to(&path)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
        prompts::settings_saved(&path);
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&self) -> Result<()> {
        let config = self.settings.generator;
        if config.length < config.effective_length() {
            prompts::length_clamped(config.length, config.effective_length());
        }

        let count = self.settings.count.max(1);
        let source = self.settings.entropy;
        info!(
            "generating {} password(s) of length {} from {}",
            count,
            config.effective_length(),
            source.name()
        );

        let target = self.target();
        let generator = PasswordGenerator::new(config);
        let mut passwords = source.with_rng(|rng| generator.generate_batch(rng, count))?;

        let result = match target {
            Some(target) => self.emit(target, &passwords),
            None => Ok(()),
        };
        passwords.zeroize();
        result
    }

    /// Resolve the output target. `None` means the user aborted.
    fn target(&self) -> Option<Target> {
        if !self.flags.clipboard {
            return Some(Target::Terminal);
        }
        match ClipboardContext::new() {
            Ok(ctx) => Some(Target::Clipboard(ctx)),
            Err(e) => {
                debug!("clipboard unavailable: {}", e);
                prompts::clipboard_fallback_prompt().then_some(Target::Terminal)
            }
        }
    }

    fn emit(&self, target: Target, passwords: &[String]) -> Result<()> {
        match target {
            Target::Clipboard(mut ctx) => {
                let mut joined = join_lines(passwords);
                match ctx.set_contents(joined.clone()) {
                    Ok(()) => {
                        if let Ok(mut retrieved) = ctx.get_contents() {
                            retrieved.zeroize();
                        }
                        prompts::clipboard_copied();
                    }
                    Err(e) => prompts::clipboard_error(&e.to_string()),
                }
                joined.zeroize();
                Ok(())
            }
            Target::Terminal => match self.settings.output {
                Some(ref path) => {
                    if let Some(parent) = path.parent()
                        && !parent.as_os_str().is_empty()
                    {
                        fs::create_dir_all(parent).with_context(|| {
                            format!("failed to create {}", parent.display())
                        })?;
                    }
                    let file = OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    write_batch(file, passwords)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    let full_path = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
                    prompts::passwords_written(passwords.len(), &full_path);
                    Ok(())
                }
                None => {
                    write_batch(io::stdout().lock(), passwords).context("failed to write stdout")
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn context(args: &[&str]) -> Context {
        let flags =
            CliFlags::try_parse_from(std::iter::once("simplepw").chain(args.iter().copied()))
                .unwrap();
        Context {
            settings: Settings::default(),
            flags,
        }
    }

    #[test]
    fn flags_override_settings() {
        let mut ctx = context(&[
            "-l",
            "20",
            "--special",
            "--no-lowercase",
            "-n",
            "4",
            "-u",
            "--max-attempts",
            "99",
        ]);
        ctx.apply_flags();

        let config = ctx.settings.generator;
        assert_eq!(config.length, 20);
        assert!(config.special_chars);
        assert!(config.digits);
        assert!(config.uppercase);
        assert!(!config.lowercase);
        assert_eq!(config.max_attempts, Some(99));
        assert_eq!(ctx.settings.count, 4);
        assert_eq!(ctx.settings.entropy, EntropySource::Os);
    }

    #[test]
    fn untouched_flags_keep_saved_values() {
        let mut ctx = context(&[]);
        ctx.settings.generator.special_chars = true;
        ctx.settings.generator.digits = false;
        ctx.settings.count = 7;
        ctx.apply_flags();

        assert!(ctx.settings.generator.special_chars);
        assert!(!ctx.settings.generator.digits);
        assert_eq!(ctx.settings.count, 7);
        assert_eq!(ctx.settings.entropy, EntropySource::Thread);
    }

    #[test]
    fn file_output_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("passwords.txt");
        let path_arg = path.to_string_lossy().into_owned();

        for _ in 0..2 {
            let mut ctx = context(&["-q", "-n", "3", "-o", path_arg.as_str()]);
            ctx.apply_flags();
            ctx.generate_output().unwrap();
        }

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|line| line.len() == 10));
    }

    #[test]
    fn empty_pool_surfaces_as_error() {
        let mut ctx = context(&[
            "-q",
            "--no-digits",
            "--no-uppercase",
            "--no-lowercase",
        ]);
        ctx.apply_flags();
        let err = ctx.generate_output().unwrap_err();
        assert_eq!(
            err.downcast_ref::<simplepw::GenerateError>(),
            Some(&simplepw::GenerateError::EmptyPool)
        );
    }
}
