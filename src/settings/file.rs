//! Settings file persistence.
//!
//! One line of comma-separated fields; `|` escapes a literal `,` or `|`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;

const FIELD_COUNT: usize = 11;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.uppercase,
        settings.lowercase,
        settings.digits,
        settings.symbols,
        settings.exclude_similar,
        settings.history_capacity,
        settings.show_strength,
        escape(&settings.output_file_path),
        escape(&settings.cli_command),
    );

    file.write_all(data.as_bytes())?;
    debug!("saved settings to {}", path.display());
    Ok(())
}

/// Read settings from `path`, writing defaults first if the file is new or malformed.
pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return save(settings, path);
    }

    let parts = split_escaped(line.trim_end_matches(['\r', '\n']), ',');
    if parts.len() != FIELD_COUNT {
        warn!(
            "settings file {} has {} fields, expected {}; rewriting defaults",
            path.display(),
            parts.len(),
            FIELD_COUNT
        );
        return save(settings, path);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.uppercase = parts[2].parse().unwrap_or(settings.uppercase);
    settings.lowercase = parts[3].parse().unwrap_or(settings.lowercase);
    settings.digits = parts[4].parse().unwrap_or(settings.digits);
    settings.symbols = parts[5].parse().unwrap_or(settings.symbols);
    settings.exclude_similar = parts[6].parse().unwrap_or(settings.exclude_similar);
    settings.history_capacity = parts[7].parse().unwrap_or(settings.history_capacity);
    settings.show_strength = parts[8].parse().unwrap_or(settings.show_strength);
    settings.output_file_path = parts[9].clone();
    settings.cli_command = parts[10].clone();

    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passforge/settings")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_escapes_and_empty_fields() {
        assert_eq!(split_escaped("a,b", ','), vec!["a", "b"]);
        assert_eq!(split_escaped("a,,", ','), vec!["a", "", ""]);
        assert_eq!(split_escaped("x|,y,z||", ','), vec!["x,y", "z|"]);
    }

    #[test]
    fn escape_round_trips_through_split() {
        let raw = "dir,with|pipes";
        let parts = split_escaped(&format!("{},tail", escape(raw)), ',');
        assert_eq!(parts, vec![raw, "tail"]);
    }

    #[test]
    fn new_file_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join("settings");

        let mut settings = Settings::default();
        load(&mut settings, &path).unwrap();

        assert_eq!(settings, Settings::default());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("16,1,true,true,true,true,false,10,true,"));
    }

    #[test]
    fn saved_values_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        let saved = Settings {
            pass_length: 24,
            number_of_passwords: 3,
            symbols: false,
            exclude_similar: true,
            history_capacity: 5,
            output_file_path: "out,put.txt".into(),
            cli_command: "-l 24 -x".into(),
            ..Settings::default()
        };
        save(&saved, &path).unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn malformed_file_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "garbage\n").unwrap();

        let mut settings = Settings::default();
        load(&mut settings, &path).unwrap();

        assert_eq!(settings, Settings::default());
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(split_escaped(written.trim_end(), ',').len(), FIELD_COUNT);
    }
}
