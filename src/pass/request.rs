//! Generation requests.

use std::collections::BTreeSet;

use thiserror::Error;

use super::charset::CharClass;

/// Reasons a [`GenerationRequest`] cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("at least one character class must be enabled")]
    NoClasses,
    #[error("no usable characters left in the {0} class")]
    EmptyClass(CharClass),
}

/// What to generate: a length, the enabled classes and the similar-character filter.
///
/// Classes are held in a `BTreeSet`, so iteration always follows
/// [`CharClass::ALL`] order no matter how the request was assembled. That order
/// decides which guaranteed characters survive when `length` is shorter than
/// the number of enabled classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: BTreeSet<CharClass>,
    pub exclude_similar: bool,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: impl IntoIterator<Item = CharClass>) -> Self {
        Self {
            length,
            classes: classes.into_iter().collect(),
            exclude_similar: false,
        }
    }

    /// Every class enabled.
    pub fn all(length: usize) -> Self {
        Self::new(length, CharClass::ALL)
    }

    pub fn exclude_similar(mut self, exclude: bool) -> Self {
        self.exclude_similar = exclude;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.classes.is_empty() {
            return Err(InvalidRequest::NoClasses);
        }
        Ok(())
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::all(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_iterate_in_enumeration_order() {
        let request = GenerationRequest::new(
            8,
            [CharClass::Symbol, CharClass::Digit, CharClass::Uppercase],
        );
        let order: Vec<_> = request.classes.iter().copied().collect();
        assert_eq!(
            order,
            vec![CharClass::Uppercase, CharClass::Digit, CharClass::Symbol]
        );
    }

    #[test]
    fn duplicate_classes_collapse() {
        let request = GenerationRequest::new(8, [CharClass::Digit, CharClass::Digit]);
        assert_eq!(request.classes.len(), 1);
    }

    #[test]
    fn empty_request_is_invalid() {
        let request = GenerationRequest::new(10, []);
        assert_eq!(request.validate(), Err(InvalidRequest::NoClasses));
        assert!(GenerationRequest::default().validate().is_ok());
    }
}
