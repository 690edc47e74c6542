//! Word validation for human input
//!
//! The reducer trusts what it is given, so the front end checks words here
//! before dispatching:
//! - Secret words: 4-12 letters and present in the dictionary
//! - Guesses: letters only and the same length as the target word

use super::dictionary::Dictionary;
use super::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// Result of word validation with specific error messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Word is valid
    Valid,
    /// Word is shorter than 4 letters
    TooShort { length: usize },
    /// Word is longer than 12 letters
    TooLong { length: usize },
    /// Word contains something other than A-Z
    InvalidCharacters,
    /// Word not found in dictionary
    NotInDictionary,
    /// Guess does not match the target word's length
    WrongLength { expected: usize, actual: usize },
}

impl ValidationResult {
    /// Returns true if the word is valid
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns a user-friendly error message
    pub fn message(&self) -> String {
        match self {
            ValidationResult::Valid => "Valid word!".to_string(),
            ValidationResult::TooShort { length } => {
                format!("Too short ({} letters, need {}+)", length, MIN_WORD_LENGTH)
            }
            ValidationResult::TooLong { length } => {
                format!("Too long ({} letters, max {})", length, MAX_WORD_LENGTH)
            }
            ValidationResult::InvalidCharacters => "Letters A-Z only".to_string(),
            ValidationResult::NotInDictionary => "Not in dictionary".to_string(),
            ValidationResult::WrongLength { expected, actual } => {
                format!("Need {} letters, got {}", expected, actual)
            }
        }
    }
}

fn check_characters(word: &str) -> Option<ValidationResult> {
    (!word.chars().all(|c| c.is_ascii_alphabetic())).then_some(ValidationResult::InvalidCharacters)
}

/// Validate a secret word for the word selection screen
///
/// Checks in order:
/// 1. Letters only
/// 2. Length 4-12
/// 3. Word exists in dictionary
pub fn validate_secret_word(word: &str, dictionary: &Dictionary) -> ValidationResult {
    let word_upper = word.trim().to_uppercase();

    if let Some(invalid) = check_characters(&word_upper) {
        return invalid;
    }

    let length = word_upper.len();
    if length < MIN_WORD_LENGTH {
        return ValidationResult::TooShort { length };
    }
    if length > MAX_WORD_LENGTH {
        return ValidationResult::TooLong { length };
    }

    if !dictionary.is_valid_word(&word_upper) {
        return ValidationResult::NotInDictionary;
    }

    ValidationResult::Valid
}

/// Validate a full-word guess against a target of `target_length` letters.
/// Guesses need not be dictionary words.
pub fn validate_guess(word: &str, target_length: usize) -> ValidationResult {
    let word_upper = word.trim().to_uppercase();

    if let Some(invalid) = check_characters(&word_upper) {
        return invalid;
    }
    if word_upper.len() < MIN_WORD_LENGTH {
        return ValidationResult::TooShort {
            length: word_upper.len(),
        };
    }
    if word_upper.len() != target_length {
        return ValidationResult::WrongLength {
            expected: target_length,
            actual: word_upper.len(),
        };
    }

    ValidationResult::Valid
}
