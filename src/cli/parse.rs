use thiserror::Error;

use super::{CliFlags, CommandMode};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Password length must be between {min} and {max}, got {got}")]
    LengthOutOfRange { got: usize, min: usize, max: usize },
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            // Read before parsing by logging::init
            "--verbose" => {}
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-x" | "--exclude-similar" => flags.exclude_similar = true,
            "--strength" => flags.strength = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-c" | "--command" => {
                let mode = match args.get(i + 1).map(String::as_str) {
                    Some("get") => Some(CommandMode::Get),
                    Some("unset") => Some(CommandMode::Unset),
                    Some("set") => Some(CommandMode::Set),
                    _ => None,
                };
                if mode.is_some() {
                    i += 1;
                }
                flags.command = mode.unwrap_or(CommandMode::Set);
            }
            "-l" | "--length" => flags.length = Some(number(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(number(args, &mut i)?),
            "--seed" => flags.seed = Some(number(args, &mut i)?),
            "--score" => flags.score = Some(value(args, &mut i)?.to_string()),
            "-o" | "--output" => {
                // Path is optional; without one, write to the current dir
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let raw = value(args, i)?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}
