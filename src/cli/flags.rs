/// What `-c/--command` should do with the saved default command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommandMode {
    #[default]
    None,
    Set,
    Get,
    Unset,
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub strength: bool,
    pub exclude_similar: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub command: CommandMode,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    pub score: Option<String>,
    pub output: Option<String>,
}

impl CliFlags {
    /// Carry flags that only affect this run (output, randomness, noise)
    /// over onto flags replayed from the saved command.
    pub fn keep_session_flags(&mut self, current: &CliFlags) {
        self.quiet |= current.quiet;
        self.urandom |= current.urandom;
        self.clipboard |= current.clipboard;
        if current.seed.is_some() {
            self.seed = current.seed;
        }
    }

    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.saved
            || self.exclude_similar
            || self.no_upper
            || self.no_lower
            || self.no_digits
            || self.no_symbols
            || self.strength
            || self.seed.is_some()
            || self.output.is_some()
    }
}
