//! Centralized warning and prompt messages for CLI output.

use std::io::{self, Write};
use std::path::Path;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use super::quiet;

fn colored_stderr() -> bool {
    io::stderr().is_tty()
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if quiet::enabled() {
        return;
    }
    if colored_stderr() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

/// Print an error message to stderr (red) - errors are always shown
pub fn error(msg: &str) {
    if colored_stderr() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

pub fn length_clamped(requested: usize, effective: usize) {
    warn(&format!(
        "Warning: length {requested} is below the minimum, using {effective}"
    ));
}

pub fn settings_load_failed(err: &str) {
    warn(&format!("Failed to load settings: {err}"));
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {}", path.display());
    }
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to the terminal.
/// In quiet/non-interactive mode, silently falls back.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = io::stderr().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print password output summary - suppressed in quiet mode
pub fn passwords_written(count: usize, path: &Path) {
    if !quiet::enabled() {
        eprintln!("{count} password(s) \u{2192} {}", path.display());
    }
}
