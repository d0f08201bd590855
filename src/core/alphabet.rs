use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::record::Record;

/// The canonical nucleotide symbols, in reporting order
pub const DNA_SYMBOLS: [char; 4] = ['A', 'C', 'G', 'T'];

/// An ordered set of accepted residue symbols.
///
/// Symbols are stored uppercase and compared case-insensitively. The order
/// of the symbols is the order used for composition reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetSet {
    symbols: Vec<char>,
}

impl AlphabetSet {
    /// The four-letter DNA alphabet `A, C, G, T`
    #[must_use]
    pub fn dna() -> Self {
        Self {
            symbols: DNA_SYMBOLS.to_vec(),
        }
    }

    /// Build an alphabet from arbitrary symbols.
    ///
    /// Symbols are uppercased and duplicates after the first occurrence are
    /// ignored. Use [`crate::utils::validation::parse_alphabet`] to reject
    /// bad user input instead of silently normalizing it.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut unique: Vec<char> = Vec::new();
        for symbol in symbols.into_iter().flat_map(char::to_uppercase) {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        Self { symbols: unique }
    }

    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of a symbol in the alphabet, ignoring case
    #[must_use]
    pub fn position(&self, c: char) -> Option<usize> {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => self.symbols.iter().position(|&s| s == u),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.position(c).is_some()
    }

    /// A residue string is pure when every character belongs to the alphabet.
    /// The empty string is pure.
    #[must_use]
    pub fn is_pure(&self, residues: &str) -> bool {
        residues.chars().all(|c| self.contains(c))
    }

    /// Keep only the pure residue strings, in their original order
    pub fn filter_pure_residues<S: AsRef<str>>(&self, residues: &[S]) -> Vec<String> {
        let mut pure = Vec::new();
        for residue in residues {
            let residue: &str = residue.as_ref();
            if self.is_pure(residue) {
                pure.push(residue.to_string());
            }
        }
        pure
    }

    /// Keep only the records whose residues are pure, headers travelling with
    /// their sequences
    #[must_use]
    pub fn filter_pure(&self, records: Vec<Record>) -> Vec<Record> {
        let total = records.len();
        let pure: Vec<Record> = records
            .into_iter()
            .filter(|r| self.is_pure(&r.residues))
            .collect();

        debug!(
            kept = pure.len(),
            discarded = total - pure.len(),
            alphabet = %self,
            "Filtered ambiguous sequences"
        );

        pure
    }
}

impl Default for AlphabetSet {
    fn default() -> Self {
        Self::dna()
    }
}

impl fmt::Display for AlphabetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
