use log::{debug, warn};

use crate::entropy::Source;
use crate::history::History;
use crate::pass::{
    self, CharClass, ClipboardSink, GeneratedPassword, InvalidRequest, StrengthScore,
    score_strength, synthesize,
};
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{clear, print_error, reset_terminal};

use super::{
    Status, enter_prompt, get_editable_input, get_numeric_input, print_generated, print_help,
    print_history, print_main_menu, print_settings_menu,
};

/// State of one interactive run: settings, the in-memory history and the RNG.
pub struct Session {
    pub settings: Settings,
    pub history: History,
    rng: Source,
    clipboard: Option<ClipboardSink>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self::with_source(settings, Source::default())
    }

    pub fn with_source(settings: Settings, rng: Source) -> Self {
        let history = History::new(settings.history_capacity);
        Self {
            settings,
            history,
            rng,
            clipboard: None,
        }
    }

    /// Generate with the current settings and record the result in history.
    pub fn generate(&mut self) -> Result<(GeneratedPassword, StrengthScore), InvalidRequest> {
        let password = synthesize(&self.settings.request(), &mut self.rng)?;
        let strength = score_strength(password.value());
        self.history.append(password.clone(), strength);
        Ok((password, strength))
    }

    /// Copy a history entry (0-based, newest first) to the clipboard.
    pub fn copy_entry(&mut self, index: usize) -> crate::Result<bool> {
        let Some(entry) = self.history.nth(index) else {
            return Ok(false);
        };
        let password = entry.password.clone();

        if self.clipboard.is_none() {
            self.clipboard = Some(ClipboardSink::new()?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.copy(password.value())?;
        }
        Ok(true)
    }

    /// Remove a history entry by display position.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        match self.history.nth(index).map(|e| e.id) {
            Some(id) => self.history.remove(id),
            None => false,
        }
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.history.set_capacity(settings.history_capacity);
        self.settings = settings;
    }
}

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

#[derive(Debug, PartialEq, Eq)]
enum HistoryCommand {
    Copy(usize),
    Remove(usize),
    Clear,
    Back,
}

/// `c N` / `r N` take a 1-based position; `x` clears; empty goes back.
fn parse_history_command(input: &str) -> Option<HistoryCommand> {
    let input = input.trim();
    if input.is_empty() {
        return Some(HistoryCommand::Back);
    }
    if input == "x" {
        return Some(HistoryCommand::Clear);
    }

    let cmd = input.chars().next()?;
    let position: usize = input[cmd.len_utf8()..].trim().parse().ok()?;
    let index = position.checked_sub(1)?;
    match cmd {
        'c' => Some(HistoryCommand::Copy(index)),
        'r' => Some(HistoryCommand::Remove(index)),
        _ => None,
    }
}

fn generate_and_show(session: &mut Session) {
    match session.generate() {
        Ok((password, strength)) => {
            let pool = pass::charset::size(password.request());
            let entropy = pass::entropy_bits(password.len(), pool);
            let strength = session.settings.show_strength.then_some(&strength);
            print_generated(&password, strength, entropy);
        }
        Err(e) => {
            print_error(&format!("Cannot generate: {e}"));
            println!();
        }
    }
}

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("falling back to default settings: {e}");
        println!("Error loading settings: {}", e);
        Settings::default()
    });

    let mut session = Session::new(settings);
    generate_and_show(&mut session);

    let mut print_invalid = false;
    loop {
        print_main_menu(&mut print_invalid);

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => {
                clear();
                generate_and_show(&mut session);
            }
            "1" => {
                clear();
                update_settings(&mut session);
            }
            "2" => {
                clear();
                history_menu(&mut session);
            }
            "3" => {
                clear();
                print_help();
            }
            "4" => {
                clear();
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }

    session.history.clear();
}

pub fn update_settings(session: &mut Session) {
    let mut status = Status::None;

    loop {
        print_settings_menu(&session.settings, &status);
        status = Status::None;

        let choice = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                break;
            }
        };
        let choice = choice.trim();

        if choice.is_empty() {
            clear();
            generate_and_show(session);
            break;
        }

        let action = match choice.parse::<u32>() {
            Ok(num) => menu_options(num, &mut status, session),
            Err(_) => command_options(choice, &mut status, session),
        };
        clear();
        if let Break = action {
            break;
        }
    }
}

fn menu_options(choice: u32, status: &mut Status, session: &mut Session) -> LoopAction {
    let settings = &mut session.settings;
    match choice {
        1 => {
            if let Some(len) = get_numeric_input("Enter new password length", settings.pass_length)
            {
                if Settings::length_in_range(len) {
                    settings.pass_length = len;
                } else {
                    *status = Status::error(format!(
                        "Length must be between {MIN_LENGTH} and {MAX_LENGTH}"
                    ));
                }
            }
        }
        2 => settings.toggle_class(CharClass::Uppercase),
        3 => settings.toggle_class(CharClass::Lowercase),
        4 => settings.toggle_class(CharClass::Digit),
        5 => settings.toggle_class(CharClass::Symbol),
        6 => settings.exclude_similar = !settings.exclude_similar,
        7 => {
            if let Some(size) = get_numeric_input("Enter history size", settings.history_capacity)
            {
                if size == 0 {
                    *status = Status::error("History size must be at least 1");
                } else {
                    settings.history_capacity = size;
                    session.history.set_capacity(size);
                }
            }
        }
        8 => settings.show_strength = !settings.show_strength,
        9 => {
            if let Some(command) = get_editable_input("Enter flags and values", &settings.cli_command)
            {
                settings.cli_command = command.trim().to_string();
            }
        }
        _ => *status = Status::error("Invalid option"),
    }

    if (2..=5).contains(&choice) && session.settings.request().validate().is_err() {
        *status = Status::error("Enable at least one character class before generating");
    }
    Continue
}

fn command_options(choice: &str, status: &mut Status, session: &mut Session) -> LoopAction {
    if choice == "help" {
        clear();
        print_help();
        return Break;
    }

    match choice {
        "s" => match session.settings.save_to_file() {
            Ok(()) => *status = Status::info("Settings saved"),
            Err(e) => *status = Status::error(format!("Error saving settings: {}", e)),
        },
        "f" => match Settings::load_from_file() {
            Ok(settings) => {
                session.apply_settings(settings);
                *status = Status::info("Settings loaded");
            }
            Err(e) => *status = Status::error(format!("Error loading settings: {}", e)),
        },
        "r" => {
            session.apply_settings(Settings::default());
            *status = Status::info("Defaults restored");
        }
        _ => *status = Status::error("Invalid selection"),
    }
    Continue
}

pub fn history_menu(session: &mut Session) {
    let mut status = Status::None;

    loop {
        print_history(&session.history, session.settings.show_strength, &status);

        let Some(input) = get_editable_input("Enter command", "") else {
            clear();
            break;
        };

        match parse_history_command(&input) {
            Some(HistoryCommand::Back) => {
                clear();
                break;
            }
            Some(HistoryCommand::Copy(i)) => match session.copy_entry(i) {
                Ok(true) => status = Status::info(format!("Copied entry {}", i + 1)),
                Ok(false) => status = Status::error(format!("No entry {}", i + 1)),
                Err(e) => status = Status::error(e.to_string()),
            },
            Some(HistoryCommand::Remove(i)) => {
                if session.remove_entry(i) {
                    status = Status::info(format!("Removed entry {}", i + 1));
                } else {
                    status = Status::error(format!("No entry {}", i + 1));
                }
            }
            Some(HistoryCommand::Clear) => {
                session.history.clear();
                debug!("history cleared");
                status = Status::info("History cleared");
            }
            None => status = Status::error("Invalid command"),
        }
        clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::with_source(Settings::default(), Source::seeded(99))
    }

    #[test]
    fn history_commands() {
        assert_eq!(parse_history_command(""), Some(HistoryCommand::Back));
        assert_eq!(parse_history_command(" x "), Some(HistoryCommand::Clear));
        assert_eq!(parse_history_command("c 2"), Some(HistoryCommand::Copy(1)));
        assert_eq!(parse_history_command("r1"), Some(HistoryCommand::Remove(0)));
        assert_eq!(parse_history_command("r 0"), None);
        assert_eq!(parse_history_command("q 1"), None);
        assert_eq!(parse_history_command("c"), None);
    }

    #[test]
    fn generate_records_history() {
        let mut session = session();
        let (password, strength) = session.generate().unwrap();

        assert_eq!(password.len(), 16);
        assert_eq!(session.history.len(), 1);
        let entry = session.history.nth(0).unwrap();
        assert_eq!(entry.password.value(), password.value());
        assert_eq!(entry.strength, strength);
    }

    #[test]
    fn generate_without_classes_fails() {
        let mut settings = Settings::default();
        for class in CharClass::ALL {
            settings.toggle_class(class);
        }
        let mut session = Session::with_source(settings, Source::seeded(1));

        assert_eq!(session.generate().unwrap_err(), InvalidRequest::NoClasses);
        assert!(session.history.is_empty());
    }

    #[test]
    fn remove_by_position() {
        let mut session = session();
        session.generate().unwrap();
        session.generate().unwrap();

        assert!(session.remove_entry(1));
        assert!(!session.remove_entry(1));
        assert_eq!(session.history.len(), 1);
    }

    #[test]
    fn copy_missing_entry_is_not_an_error() {
        let mut session = session();
        assert!(!session.copy_entry(0).unwrap());
    }

    #[test]
    fn applying_settings_resizes_history() {
        let mut session = session();
        for _ in 0..5 {
            session.generate().unwrap();
        }
        session.apply_settings(Settings {
            history_capacity: 2,
            ..Settings::default()
        });
        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history.capacity(), 2);
    }
}
