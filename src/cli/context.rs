//! CLI context - bundles settings, flags and the random source.

use std::path::PathBuf;

use log::{debug, info};

use super::{CliFlags, CommandMode, ParseError, prompts, quiet};
use crate::entropy::Source;
use crate::pass::{self, ClipboardSink, PasswordSink, WriterSink, score_strength};
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::tui::print_help;
use crate::Error;

const DEFAULT_OUTPUT_FILE: &str = "passforge.txt";

/// Why the CLI stopped before (or instead of) generating.
#[derive(Debug)]
pub enum Exit {
    /// Early exit - not an error, just done.
    Done,
    Failed(Error),
}

impl From<Error> for Exit {
    fn from(err: Error) -> Self {
        Exit::Failed(err)
    }
}

impl From<ParseError> for Exit {
    fn from(err: ParseError) -> Self {
        Exit::Failed(err.into())
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub flags: CliFlags,
    rng: Source,
    args: Vec<String>,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: Vec<String>) -> Result<Self, Error> {
        let flags = super::parse(&args)?;

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });
        Ok(Self::with_saved(args, flags, saved_settings))
    }

    /// `-s` starts from the saved settings; otherwise only the saved command carries over.
    fn with_saved(args: Vec<String>, flags: CliFlags, saved_settings: Settings) -> Self {
        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings {
                cli_command: saved_settings.cli_command.clone(),
                show_strength: false,
                ..Default::default()
            }
        };

        Self {
            settings,
            saved_settings,
            flags,
            rng: Source::default(),
            args,
        }
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Exit> {
        quiet::set(self.flags.quiet);
        self.handle_info_flags()?;
        self.handle_score()?;
        self.handle_command_mode()?;
        self.apply_flags()?;
        self.select_source();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn handle_score(&self) -> Result<(), Exit> {
        if let Some(ref password) = self.flags.score {
            prompts::strength_report(&score_strength(password));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn handle_command_mode(&mut self) -> Result<(), Exit> {
        match self.flags.command {
            CommandMode::Get => {
                prompts::saved_command(&self.settings.cli_command);
                Err(Exit::Done)
            }
            CommandMode::Unset => {
                self.saved_settings.cli_command.clear();
                if let Err(e) = self.saved_settings.save_to_file() {
                    prompts::warn(&format!("Failed to clear command: {}", e));
                }
                Err(Exit::Done)
            }
            CommandMode::Set | CommandMode::None => Ok(()),
        }
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Exit> {
        if self.flags.command == CommandMode::Set {
            let command = self.args[1..]
                .iter()
                .filter(|a| *a != "-c" && *a != "--command" && *a != "set")
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            self.saved_settings.cli_command = command.clone();
            if let Err(e) = self.saved_settings.save_to_file() {
                prompts::warn(&format!("Failed to save command: {}", e));
            }
            info!("saved default command: {command}");
            self.settings.cli_command = command;
        }

        // Replay the saved command when nothing else was asked for
        if !self.settings.cli_command.is_empty()
            && self.flags.command == CommandMode::None
            && !self.flags.has_explicit_args()
        {
            let mut combined_args = vec![self.args[0].clone()];
            combined_args.extend(
                self.settings
                    .cli_command
                    .split_whitespace()
                    .map(String::from),
            );
            match super::parse(&combined_args) {
                Ok(mut saved_flags) => {
                    saved_flags.keep_session_flags(&self.flags);
                    self.flags = saved_flags;
                    quiet::set(self.flags.quiet);
                }
                Err(e) => prompts::warn(&format!("Ignoring saved command: {}", e)),
            }
        }

        if let Some(len) = self.flags.length {
            if !Settings::length_in_range(len) {
                return Err(ParseError::LengthOutOfRange {
                    got: len,
                    min: MIN_LENGTH,
                    max: MAX_LENGTH,
                }
                .into());
            }
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        if self.flags.no_upper {
            self.settings.uppercase = false;
        }
        if self.flags.no_lower {
            self.settings.lowercase = false;
        }
        if self.flags.no_digits {
            self.settings.digits = false;
        }
        if self.flags.no_symbols {
            self.settings.symbols = false;
        }
        if self.flags.exclude_similar {
            self.settings.exclude_similar = true;
        }
        if self.flags.strength {
            self.settings.show_strength = true;
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = output_path(path);
        }

        self.settings.to_clipboard = self.flags.clipboard;
        Ok(())
    }

    fn select_source(&mut self) {
        if let Some(seed) = self.flags.seed {
            prompts::seeded_output(seed);
            self.rng = Source::seeded(seed);
        } else if self.flags.urandom {
            prompts::urandom_selected();
            self.rng = Source::os();
        }
        debug!("random source: {}", self.rng.name());
    }

    /// Generate passwords and hand them to the selected sink.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let count = self.settings.number_of_passwords.max(1);
        let request = self.settings.request();

        if self.settings.to_clipboard {
            match ClipboardSink::new() {
                Ok(mut sink) => {
                    self.generate_into(&request, count, &mut sink)?;
                    prompts::clipboard_copied();
                    return Ok(());
                }
                Err(e) => {
                    debug!("{e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Exit::Done);
                    }
                }
            }
        }

        if !self.settings.output_file_path.is_empty() {
            let path = PathBuf::from(&self.settings.output_file_path);
            let mut sink = WriterSink::append_to(&path, self.settings.show_strength)?;
            self.generate_into(&request, count, &mut sink)?;
            let full_path = std::fs::canonicalize(&path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            prompts::passwords_written(count, &full_path);
        } else {
            let mut sink = WriterSink::stdout(self.settings.show_strength);
            self.generate_into(&request, count, &mut sink)?;
        }
        Ok(())
    }

    fn generate_into(
        &mut self,
        request: &pass::GenerationRequest,
        count: usize,
        sink: &mut dyn PasswordSink,
    ) -> Result<usize, Error> {
        pass::generate_batch(request, count, &mut self.rng, sink)
    }
}

/// Resolve `-o` arguments: directories get a default file name, bare names get `.txt`.
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT_FILE.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_OUTPUT_FILE)
    } else if !path.ends_with(".txt") {
        format!("{}.txt", path)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths() {
        assert_eq!(output_path("."), "passforge.txt");
        assert_eq!(output_path("out/"), "out/passforge.txt");
        assert_eq!(output_path("keys"), "keys.txt");
        assert_eq!(output_path("keys.txt"), "keys.txt");
    }

    fn context(line: &str, saved: Settings) -> Context {
        let args: Vec<String> = std::iter::once("passforge")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect();
        let flags = super::super::parse(&args).unwrap();
        Context::with_saved(args, flags, saved)
    }

    #[test]
    fn replayed_command_keeps_session_flags() {
        let saved = Settings {
            cli_command: "-l 30".into(),
            ..Default::default()
        };
        let mut ctx = context("-b -u -q", saved);
        ctx.apply_flags().unwrap();
        ctx.select_source();
        assert_eq!(ctx.settings.pass_length, 30);
        assert!(ctx.settings.to_clipboard);
        assert!(ctx.flags.quiet);
        assert_eq!(ctx.rng.name(), Source::os().name());
    }

    #[test]
    fn saved_show_strength_applies_with_saved_flag() {
        let saved = Settings {
            show_strength: true,
            pass_length: 24,
            ..Default::default()
        };
        let mut ctx = context("-s", saved);
        ctx.apply_flags().unwrap();
        assert!(ctx.settings.show_strength);
        assert_eq!(ctx.settings.pass_length, 24);

        let mut plain = context("-l 12", Settings::default());
        plain.apply_flags().unwrap();
        assert!(!plain.settings.show_strength);

        let mut forced = context("-l 12 --strength", Settings::default());
        forced.apply_flags().unwrap();
        assert!(forced.settings.show_strength);
    }

    #[test]
    fn writes_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let line = format!("-q -n 3 -l 10 -o {}", path.display());
        let mut ctx = context(&line, Settings::default());
        ctx.run().unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 10));
    }

    #[test]
    fn exit_wraps_errors() {
        let exit: Exit = ParseError::UnknownArg("-z".into()).into();
        assert!(matches!(exit, Exit::Failed(Error::Parse(_))));
    }
}
