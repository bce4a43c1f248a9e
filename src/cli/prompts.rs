//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::pass::StrengthScore;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - never suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn urandom_selected() {
    warn("Using operating system entropy source");
}

pub fn seeded_output(seed: u64) {
    warn(&format!(
        "Warning: seeded generator ({seed}) - output is reproducible, do not use for real passwords"
    ));
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to the terminal.
/// In quiet/non-interactive mode, silently falls back.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print password output summary - suppressed in quiet mode
pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}

/// Print a strength report for `--score`.
pub fn strength_report(strength: &StrengthScore) {
    println!("{}/7 {}", strength.score, strength);
}

pub fn saved_command(command: &str) {
    if command.is_empty() {
        println!("(no saved command)");
    } else {
        println!("{command}");
    }
}
