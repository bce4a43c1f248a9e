//! Terminal output utilities.
//!
//! Box drawing, strength colouring, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::pass::Strength;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const CYAN: &str = "\x1b[38;5;14m";
pub const GREY: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Colour used for a strength label.
pub fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::Weak => RED,
        Strength::Fair => YELLOW,
        Strength::Good => GREEN,
        Strength::Excellent => CYAN,
    }
}

/// Four-cell meter, one filled cell per label step: `■■□□`.
pub fn strength_meter(strength: Strength) -> String {
    let filled = strength as usize + 1;
    format!(
        "{}{}{}{}",
        strength_color(strength),
        "■".repeat(filled),
        "□".repeat(4 - filled),
        RESET
    )
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH.saturating_sub(2 + title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    println!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// Print a horizontal rule inside a box.
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    println!(
        "│ {}{}{} │",
        flag_padded,
        first,
        " ".repeat(desc_col.saturating_sub(first.len()))
    );

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}red{RESET}")), 3);
        assert_eq!(console_width("■■□□"), 4);
    }

    #[test]
    fn meter_fills_by_label() {
        assert_eq!(console_width(&strength_meter(Strength::Weak)), 4);
        assert!(strength_meter(Strength::Fair).contains("■■□□"));
        assert!(strength_meter(Strength::Excellent).contains("■■■■"));
    }
}
