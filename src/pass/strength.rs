//! Password strength heuristics.

use std::fmt;

/// Ordered strength labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Excellent,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Fair,
            5..=6 => Strength::Good,
            _ => Strength::Excellent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Excellent => "Excellent",
        }
    }

    pub fn feedback(self) -> &'static str {
        match self {
            Strength::Weak => "Consider making it longer and more complex",
            Strength::Fair => "Good but could be stronger",
            Strength::Good => "Strong password",
            Strength::Excellent => "Very strong password",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic score (0-7) and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthScore {
    pub score: u8,
    pub label: Strength,
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label, self.label.feedback())
    }
}

/// Score a password by length tiers and character-class coverage.
///
/// One point each for reaching 8, 12 and 16 characters, and one point each
/// for containing a lowercase letter, an uppercase letter, a digit, and
/// anything outside `[A-Za-z0-9]`.
pub fn score_strength(password: &str) -> StrengthScore {
    let length = password.chars().count();
    let mut score = [8, 12, 16].iter().filter(|&&tier| length >= tier).count() as u8;

    let checks: [fn(char) -> bool; 4] = [
        |c| c.is_ascii_lowercase(),
        |c| c.is_ascii_uppercase(),
        |c| c.is_ascii_digit(),
        |c| !c.is_ascii_alphanumeric(),
    ];
    for check in checks {
        if password.chars().any(check) {
            score += 1;
        }
    }

    StrengthScore {
        score,
        label: Strength::from_score(score),
    }
}

/// Calculate password entropy in bits.
pub fn entropy_bits(password_length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    password_length as f64 * (pool_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lowercase_is_weak() {
        let s = score_strength("abc");
        assert_eq!(s.score, 1);
        assert_eq!(s.label, Strength::Weak);
    }

    #[test]
    fn nine_chars_three_classes_is_fair() {
        let s = score_strength("Abcdefgh1");
        assert_eq!(s.score, 4);
        assert_eq!(s.label, Strength::Fair);
    }

    #[test]
    fn twelve_chars_all_classes_is_good() {
        let s = score_strength("Abcdefghijkl1!");
        assert_eq!(s.score, 6);
        assert_eq!(s.label, Strength::Good);
    }

    #[test]
    fn sixteen_chars_all_classes_is_excellent() {
        let s = score_strength("Abcdefghijklmnop1!");
        assert_eq!(s.score, 7);
        assert_eq!(s.label, Strength::Excellent);
    }

    #[test]
    fn empty_scores_floor() {
        let s = score_strength("");
        assert_eq!(s.score, 0);
        assert_eq!(s.label, Strength::Weak);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(score_strength("é").score, 1);
        assert_eq!(score_strength(" ").score, 1);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 8 two-byte chars: one length tier plus the symbol point
        assert_eq!(score_strength("éééééééé").score, 2);
    }

    #[test]
    fn deterministic() {
        for pw in ["abc", "Abcdefgh1", "P@ssw0rd-with-length"] {
            assert_eq!(score_strength(pw), score_strength(pw));
        }
    }

    #[test]
    fn label_thresholds() {
        let labels: Vec<_> = (0..=7).map(Strength::from_score).collect();
        assert_eq!(
            labels,
            vec![
                Strength::Weak,
                Strength::Weak,
                Strength::Weak,
                Strength::Fair,
                Strength::Fair,
                Strength::Good,
                Strength::Good,
                Strength::Excellent,
            ]
        );
        assert!(Strength::Weak < Strength::Excellent);
    }

    #[test]
    fn entropy() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert!((entropy_bits(8, 16) - 32.0).abs() < 1e-9);
    }
}
