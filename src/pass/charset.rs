//! Character classes and pool building for password generation.

use std::fmt;

use rand::Rng;

use super::request::{GenerationRequest, InvalidRequest};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A named alphabet a password may draw from.
///
/// Variant order is the enablement order used when building the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn members(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Visually ambiguous members dropped by the exclude-similar filter.
    /// Only applies within the class; `O` and `0` are never cross-excluded.
    pub fn similar(self) -> &'static str {
        match self {
            CharClass::Uppercase => "O",
            CharClass::Lowercase => "l",
            CharClass::Digit => "01",
            CharClass::Symbol => "",
        }
    }

    /// Members of the class, with the similar ones removed when asked.
    pub fn alphabet(self, exclude_similar: bool) -> Vec<char> {
        let similar = self.similar();
        self.members()
            .chars()
            .filter(|c| !(exclude_similar && similar.contains(*c)))
            .collect()
    }

    pub fn contains(self, c: char) -> bool {
        self.members().contains(c)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Union of the enabled alphabets plus one pre-drawn member per class.
#[derive(Debug, Default, Clone)]
pub struct CharacterPool {
    pub pool: Vec<char>,
    pub guaranteed: Vec<char>,
}

impl CharacterPool {
    /// Append a class alphabet and draw its guaranteed representative.
    pub fn push_class<R: Rng + ?Sized>(
        &mut self,
        class: CharClass,
        alphabet: &[char],
        rng: &mut R,
    ) -> Result<(), InvalidRequest> {
        if alphabet.is_empty() {
            return Err(InvalidRequest::EmptyClass(class));
        }
        self.pool.extend_from_slice(alphabet);
        self.guaranteed.push(alphabet[rng.gen_range(0..alphabet.len())]);
        Ok(())
    }
}

/// Build the character pool and guaranteed sequence for a request.
pub fn build<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<CharacterPool, InvalidRequest> {
    request.validate()?;

    let mut chars = CharacterPool::default();
    for &class in &request.classes {
        let alphabet = class.alphabet(request.exclude_similar);
        chars.push_class(class, &alphabet, rng)?;
    }
    Ok(chars)
}

/// Size of the pool a request draws from (for entropy calculation).
pub fn size(request: &GenerationRequest) -> usize {
    request
        .classes
        .iter()
        .map(|class| class.alphabet(request.exclude_similar).len())
        .sum()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn similar_filter_is_per_class() {
        assert!(!CharClass::Uppercase.alphabet(true).contains(&'O'));
        assert!(CharClass::Uppercase.alphabet(true).contains(&'I'));
        assert!(!CharClass::Lowercase.alphabet(true).contains(&'l'));
        assert_eq!(CharClass::Digit.alphabet(true).len(), 8);
        assert_eq!(CharClass::Symbol.alphabet(true).len(), SYMBOLS.len());
        assert_eq!(CharClass::Uppercase.alphabet(false).len(), 26);
    }

    #[test]
    fn pool_follows_enablement_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let request = GenerationRequest::new(12, [CharClass::Digit, CharClass::Uppercase]);
        let chars = build(&request, &mut rng).unwrap();

        assert_eq!(chars.pool.len(), 36);
        assert_eq!(chars.pool[0], 'A');
        assert_eq!(chars.pool[26], '0');
        assert_eq!(chars.guaranteed.len(), 2);
        assert!(CharClass::Uppercase.contains(chars.guaranteed[0]));
        assert!(CharClass::Digit.contains(chars.guaranteed[1]));
    }

    #[test]
    fn guaranteed_picks_respect_similar_filter() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let request = GenerationRequest::new(4, [CharClass::Digit]).exclude_similar(true);
        for _ in 0..200 {
            let chars = build(&request, &mut rng).unwrap();
            assert!(!chars.guaranteed.contains(&'0'));
            assert!(!chars.guaranteed.contains(&'1'));
            assert!(!chars.pool.contains(&'0'));
        }
    }

    #[test]
    fn no_classes_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let request = GenerationRequest::new(10, []);
        assert_eq!(
            build(&request, &mut rng).unwrap_err(),
            InvalidRequest::NoClasses
        );
    }

    #[test]
    fn empty_alphabet_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut chars = CharacterPool::default();
        assert_eq!(
            chars.push_class(CharClass::Symbol, &[], &mut rng),
            Err(InvalidRequest::EmptyClass(CharClass::Symbol))
        );
        assert!(chars.pool.is_empty());
        assert!(chars.guaranteed.is_empty());
    }

    #[test]
    fn size_matches_pool() {
        let request = GenerationRequest::all(16).exclude_similar(true);
        assert_eq!(size(&request), 25 + 25 + 8 + 26);
    }
}
