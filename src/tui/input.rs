use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Outcome of a single key press on a line editor.
enum Edit {
    Submit,
    Cancel,
    Changed,
    Ignored,
}

/// Line buffer with a cursor, shared by the text and numeric prompts.
struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn handle(&mut self, key: KeyEvent, accept: impl Fn(char) -> bool) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors, so restore the terminal first
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => Edit::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
                Edit::Changed
            }
            KeyCode::Esc => Edit::Cancel,
            KeyCode::Enter => Edit::Submit,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
                Edit::Changed
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
                Edit::Changed
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                Edit::Changed
            }
            KeyCode::Right if self.cursor < self.chars.len() => {
                self.cursor += 1;
                Edit::Changed
            }
            KeyCode::Home => {
                self.cursor = 0;
                Edit::Changed
            }
            KeyCode::End => {
                self.cursor = self.chars.len();
                Edit::Changed
            }
            KeyCode::Char(c) if !ctrl && accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
                Edit::Changed
            }
            _ => Edit::Ignored,
        }
    }
}

/// Read a line in raw mode. `None` when the user cancels with Esc or Ctrl+Q.
fn read_line(prompt: &str, initial: &str, accept: impl Fn(char) -> bool) -> Option<String> {
    let mut editor = LineEditor::new(initial);

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(editor.text()),
    };

    print!("{}: {}", prompt, editor.text());
    flush();
    let mut drawn = editor.chars.len();

    let cancelled = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => break false,
        };

        match editor.handle(key, &accept) {
            Edit::Submit => break false,
            Edit::Cancel => break true,
            Edit::Ignored => continue,
            Edit::Changed => {}
        }

        print!("\r{}: {}", prompt, " ".repeat(drawn + 1));
        print!("\r{}: {}", prompt, editor.text());
        print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor);
        flush();
        drawn = editor.chars.len();
    };

    guard.release();
    println!();
    if cancelled { None } else { Some(editor.text()) }
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    read_line(prompt, initial_value, |_| true)
}

/// Digits only. Empty input keeps `initial_value`.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let input = read_line(prompt, &initial_value.to_string(), |c| c.is_ascii_digit())?;
    if input.is_empty() {
        Some(initial_value)
    } else {
        input.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn editing_moves_cursor() {
        let mut editor = LineEditor::new("ac");
        editor.handle(key(KeyCode::Left), |_| true);
        editor.handle(key(KeyCode::Char('b')), |_| true);
        assert_eq!(editor.text(), "abc");

        editor.handle(key(KeyCode::Home), |_| true);
        editor.handle(key(KeyCode::Delete), |_| true);
        assert_eq!(editor.text(), "bc");

        editor.handle(key(KeyCode::End), |_| true);
        editor.handle(key(KeyCode::Backspace), |_| true);
        assert_eq!(editor.text(), "b");
    }

    #[test]
    fn filter_rejects_chars() {
        let mut editor = LineEditor::new("");
        let digits = |c: char| c.is_ascii_digit();
        assert!(matches!(editor.handle(key(KeyCode::Char('x')), digits), Edit::Ignored));
        assert!(matches!(editor.handle(key(KeyCode::Char('4')), digits), Edit::Changed));
        assert_eq!(editor.text(), "4");
    }

    #[test]
    fn submit_and_cancel() {
        let mut editor = LineEditor::new("x");
        assert!(matches!(editor.handle(key(KeyCode::Enter), |_| true), Edit::Submit));
        assert!(matches!(editor.handle(key(KeyCode::Esc), |_| true), Edit::Cancel));
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        editor.handle(ctrl_u, |_| true);
        assert_eq!(editor.text(), "");
    }
}
