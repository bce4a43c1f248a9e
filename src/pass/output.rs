//! Destinations for generated passwords.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info};
use zeroize::{Zeroize, Zeroizing};

use super::generate::GeneratedPassword;
use super::strength::StrengthScore;
use crate::{Error, Result};

/// Receives each generated password together with its strength.
pub trait PasswordSink {
    fn accept(&mut self, password: &GeneratedPassword, strength: &StrengthScore) -> Result<()>;

    /// Called once after the last password of a batch.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Line-oriented output to stdout or a file.
pub struct WriterSink<W: Write> {
    out: BufWriter<W>,
    show_strength: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W, show_strength: bool) -> Self {
        Self {
            out: BufWriter::new(out),
            show_strength,
        }
    }

    pub fn into_inner(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout(show_strength: bool) -> Self {
        Self::new(io::stdout(), show_strength)
    }
}

impl WriterSink<File> {
    /// Append to `path`, creating it and its parent directories if needed.
    pub fn append_to(path: &Path, show_strength: bool) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        info!("writing passwords to {}", path.display());
        Ok(Self::new(file, show_strength))
    }
}

impl<W: Write> PasswordSink for WriterSink<W> {
    fn accept(&mut self, password: &GeneratedPassword, strength: &StrengthScore) -> Result<()> {
        let mut line = Zeroizing::new(String::with_capacity(password.value().len() + 32));
        line.push_str(password.value());
        if self.show_strength {
            line.push('\t');
            line.push_str(strength.label.as_str());
        }
        line.push('\n');
        self.out.write_all(line.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Collects a batch and places it on the system clipboard verbatim,
/// one password per line.
pub struct ClipboardSink {
    ctx: ClipboardContext,
    buffer: Zeroizing<String>,
}

impl ClipboardSink {
    pub fn new() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self {
            ctx,
            buffer: Zeroizing::new(String::new()),
        })
    }

    /// Copy a single value, e.g. from the history list.
    pub fn copy(&mut self, value: &str) -> Result<()> {
        self.ctx
            .set_contents(value.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Wipe the round-trip copy some providers hand back.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!("copied {} chars to clipboard", value.chars().count());
        Ok(())
    }
}

impl PasswordSink for ClipboardSink {
    fn accept(&mut self, password: &GeneratedPassword, _strength: &StrengthScore) -> Result<()> {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(password.value());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let contents = std::mem::take(&mut *self.buffer);
        let contents = Zeroizing::new(contents);
        self.copy(&contents)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::pass::{GenerationRequest, generate_batch};

    #[test]
    fn writer_emits_one_line_per_password() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut sink = WriterSink::new(Vec::new(), false);
        generate_batch(&GenerationRequest::all(10), 3, &mut rng, &mut sink).unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 10));
    }

    #[test]
    fn writer_appends_strength_label() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut sink = WriterSink::new(Vec::new(), true);
        generate_batch(&GenerationRequest::all(16), 1, &mut rng, &mut sink).unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert!(out.trim_end().ends_with("\tExcellent"));
    }

    #[test]
    fn file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("passwords.txt");
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..2 {
            let mut sink = WriterSink::append_to(&path, false).unwrap();
            generate_batch(&GenerationRequest::all(8), 2, &mut rng, &mut sink).unwrap();
        }

        let out = std::fs::read_to_string(&path).unwrap();
        assert_eq!(out.lines().count(), 4);
    }
}
