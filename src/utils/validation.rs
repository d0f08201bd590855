//! Validation of user-supplied configuration.

use crate::core::alphabet::AlphabetSet;

/// Alphabet validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty alphabet provided")]
    EmptyAlphabet,
    #[error("Invalid alphabet symbol '{0}': only ASCII letters are allowed")]
    InvalidSymbol(char),
    #[error("Duplicate alphabet symbol '{0}' (symbols are case-insensitive)")]
    DuplicateSymbol(char),
}

/// Parse an alphabet given as a string of letters, e.g. `ACGT`.
///
/// # Examples
///
/// ```
/// use read_mapper::utils::validation::parse_alphabet;
///
/// assert_eq!(parse_alphabet("acgt").unwrap().to_string(), "ACGT");
/// assert!(parse_alphabet("AC-T").is_err());
/// assert!(parse_alphabet("ACGa").is_err()); // 'a' duplicates 'A'
/// ```
///
/// # Errors
///
/// Returns `ValidationError::EmptyAlphabet` for blank input,
/// `ValidationError::InvalidSymbol` for anything that is not an ASCII
/// letter, or `ValidationError::DuplicateSymbol` if a letter appears twice
/// ignoring case.
pub fn parse_alphabet(s: &str) -> Result<AlphabetSet, ValidationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ValidationError::EmptyAlphabet);
    }

    let mut symbols: Vec<char> = Vec::new();
    for c in s.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(ValidationError::InvalidSymbol(c));
        }
        let upper = c.to_ascii_uppercase();
        if symbols.contains(&upper) {
            return Err(ValidationError::DuplicateSymbol(upper));
        }
        symbols.push(upper);
    }

    Ok(AlphabetSet::new(symbols))
}
