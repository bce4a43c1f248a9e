use crate::history::History;
use crate::pass::{CharClass, GeneratedPassword, StrengthScore};
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{
    BOLD, GREEN, GREY, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt,
    box_rule, box_top, print_error, strength_color, strength_meter,
};

/// One-line message shown under a menu after the last action.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Status {
    #[default]
    None,
    Info(String),
    Error(String),
}

impl Status {
    pub fn error(msg: impl Into<String>) -> Self {
        Status::Error(msg.into())
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Status::Info(msg.into())
    }
}

fn print_status(status: &Status) {
    match status {
        Status::None => println!(),
        Status::Info(msg) => println!("{GREEN}{msg}{RESET}"),
        Status::Error(msg) => print_error(msg),
    }
}

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Password generator with guaranteed character classes");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Generate, review the");
    box_line("     session history and change settings from a menu.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5).");
    box_line("  3) Command: `-c set <flags>` saves flags as the default for");
    box_line("     future runs. `-c get` shows it, `-c unset` clears it.");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password ({MIN_LENGTH}-{MAX_LENGTH}, default: 16)"),
    );
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("      --no-upper", "Leave out uppercase letters");
    box_opt("      --no-lower", "Leave out lowercase letters");
    box_opt("      --no-digits", "Leave out digits");
    box_opt("      --no-symbols", "Leave out symbols");
    box_opt("  -x, --exclude-similar", "Drop look-alike characters (O, l, 0, 1)");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -o, --output [PATH]", "Append to a .txt file (default: ./passforge.txt)");
    box_opt("      --strength", "Print the strength label next to each password");
    box_opt("      --score <PASSWORD>", "Score an existing password and exit");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_opt("      --verbose", "Debug logging to stderr (RUST_LOG also works)");
    box_line(" Randomness:");
    box_opt("  -u, --urandom", "Use the operating system entropy source");
    box_opt("      --seed <N>", "Reproducible output from a seeded generator (testing only)");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from the saved settings file");
    box_opt("  -c, --command <MODE>", "set | get | unset the saved default command");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_bottom();
}

pub fn print_main_menu(print_invalid: &mut bool) {
    box_top("Passforge");
    box_line("  1) Settings");
    box_line("  2) History");
    box_line("  3) Help");
    box_line("  4) Exit");
    box_bottom();
    if *print_invalid {
        print_error("Invalid option");
        *print_invalid = false;
    } else {
        println!();
    }
}

pub fn print_generated(
    password: &GeneratedPassword,
    strength: Option<&StrengthScore>,
    entropy: f64,
) {
    box_top("Password");
    box_line_center(&format!("{BOLD}{}{RESET}", password.value()));
    box_rule();
    if let Some(strength) = strength {
        box_line(&format!(
            "Strength: {} {}{}{RESET} ({}/7) - {}",
            strength_meter(strength.label),
            strength_color(strength.label),
            strength.label,
            strength.score,
            strength.label.feedback()
        ));
    }
    box_line(&format!("Entropy:  {:.1} bits", entropy));
    box_bottom();
    println!();
}

pub fn print_settings_menu(settings: &Settings, status: &Status) {
    let class = |c: CharClass| on_off(settings.class_enabled(c));

    box_top("Settings");
    box_line(&format!("  1) Password length: {}", settings.pass_length));
    box_line(&format!("  2) Uppercase (A-Z): {}", class(CharClass::Uppercase)));
    box_line(&format!("  3) Lowercase (a-z): {}", class(CharClass::Lowercase)));
    box_line(&format!("  4) Digits (0-9): {}", class(CharClass::Digit)));
    box_line(&format!("  5) Symbols: {}", class(CharClass::Symbol)));
    box_line(&format!(
        "  6) Exclude similar (O l 0 1): {}",
        on_off(settings.exclude_similar)
    ));
    box_line(&format!("  7) History size: {}", settings.history_capacity));
    box_line(&format!("  8) Show strength: {}", on_off(settings.show_strength)));
    box_line(&format!(
        "  9) Saved CLI command: {}",
        if settings.cli_command.is_empty() {
            "(none)"
        } else {
            settings.cli_command.as_str()
        }
    ));
    box_rule();
    box_line(&format!(
        "  {UNDERLINE}s{RESET}ave  load {UNDERLINE}f{RESET}ile  {UNDERLINE}r{RESET}eset defaults  [Esc] back"
    ));
    box_bottom();
    print_status(status);
}

pub fn print_history(history: &History, show_strength: bool, status: &Status) {
    box_top(&format!("History ({}/{})", history.len(), history.capacity()));
    if history.is_empty() {
        box_line_center("No passwords generated yet.");
    }
    for (i, entry) in history.iter().enumerate() {
        let label = if show_strength {
            format!(
                " {}{}{RESET}",
                strength_color(entry.strength.label),
                entry.strength.label
            )
        } else {
            String::new()
        };
        box_line(&format!("{:>2}) {}{}", i + 1, entry.password.value(), label));
        box_line(&format!(
            "    {GREY}{}{RESET}",
            entry.created.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    box_rule();
    box_line(&format!(
        "  {UNDERLINE}c{RESET} N copy  {UNDERLINE}r{RESET} N remove  {UNDERLINE}x{RESET} clear all  [Esc] back"
    ));
    box_bottom();
    print_status(status);
}
