//! Password generation settings.

mod file;

use crate::history::DEFAULT_CAPACITY;
use crate::pass::{CharClass, GenerationRequest};

pub use file::get_path;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
    pub history_capacity: usize,
    pub show_strength: bool,
    pub output_file_path: String,
    pub cli_command: String,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, &get_path())?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self, &get_path())
    }

    pub fn has_saved_command() -> bool {
        Self::load_from_file()
            .map(|s| !s.cli_command.is_empty())
            .unwrap_or(false)
    }

    /// The generation request these settings describe.
    pub fn request(&self) -> GenerationRequest {
        let enabled = [self.uppercase, self.lowercase, self.digits, self.symbols];
        let classes = CharClass::ALL
            .into_iter()
            .zip(enabled)
            .filter_map(|(class, on)| on.then_some(class));
        GenerationRequest::new(self.pass_length, classes).exclude_similar(self.exclude_similar)
    }

    pub fn class_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digit => self.digits,
            CharClass::Symbol => self.symbols,
        }
    }

    pub fn toggle_class(&mut self, class: CharClass) {
        let flag = match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Digit => &mut self.digits,
            CharClass::Symbol => &mut self.symbols,
        };
        *flag = !*flag;
    }

    pub fn length_in_range(length: usize) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&length)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
            history_capacity: DEFAULT_CAPACITY,
            show_strength: true,
            output_file_path: String::new(),
            cli_command: String::new(),
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_has_all_classes() {
        let request = Settings::default().request();
        assert_eq!(request.length, 16);
        assert_eq!(request.classes.len(), 4);
        assert!(!request.exclude_similar);
    }

    #[test]
    fn disabled_classes_dropped() {
        let mut settings = Settings::default();
        settings.toggle_class(CharClass::Symbol);
        settings.toggle_class(CharClass::Uppercase);
        settings.exclude_similar = true;

        let request = settings.request();
        assert!(!request.classes.contains(&CharClass::Symbol));
        assert!(!request.classes.contains(&CharClass::Uppercase));
        assert!(request.exclude_similar);
        assert!(!settings.class_enabled(CharClass::Symbol));
    }

    #[test]
    fn length_bounds() {
        assert!(!Settings::length_in_range(3));
        assert!(Settings::length_in_range(4));
        assert!(Settings::length_in_range(128));
        assert!(!Settings::length_in_range(129));
    }
}
