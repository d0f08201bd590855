use std::fmt;

use serde::{Serialize, Serializer};

use crate::core::alphabet::AlphabetSet;

/// Convert a symbol tally to f64 for fraction calculations
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Round to one decimal place, halves away from zero
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Fraction of one symbol among all counted symbols.
///
/// When nothing was counted there is no meaningful fraction and the value is
/// reported as a bare integer `0`, distinct from a computed `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymbolFraction {
    NoSymbols,
    Rounded(f64),
}

impl SymbolFraction {
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::NoSymbols => 0.0,
            Self::Rounded(v) => *v,
        }
    }
}

impl fmt::Display for SymbolFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSymbols => write!(f, "0"),
            Self::Rounded(v) => write!(f, "{v:.1}"),
        }
    }
}

impl Serialize for SymbolFraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NoSymbols => serializer.serialize_u8(0),
            Self::Rounded(v) => serializer.serialize_f64(*v),
        }
    }
}

/// Tally and fraction of a single alphabet symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolComposition {
    pub symbol: char,
    pub count: u64,
    pub fraction: SymbolFraction,
}

/// Symbol composition of a collection of residue strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    /// One entry per alphabet symbol, in alphabet order
    pub symbols: Vec<SymbolComposition>,

    /// Sum of all symbol tallies; characters outside the alphabet are not counted
    pub total: u64,
}

impl Composition {
    /// Count alphabet symbols (ignoring case) across all residue strings.
    ///
    /// Characters outside the alphabet are excluded from both the tallies and
    /// the denominator.
    pub fn count<I, S>(residues: I, alphabet: &AlphabetSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = vec![0u64; alphabet.len()];

        for seq in residues {
            for c in seq.as_ref().chars() {
                if let Some(idx) = alphabet.position(c) {
                    counts[idx] += 1;
                }
            }
        }

        let total: u64 = counts.iter().sum();

        let symbols = alphabet
            .symbols()
            .iter()
            .zip(counts)
            .map(|(&symbol, count)| {
                let fraction = if total == 0 {
                    SymbolFraction::NoSymbols
                } else {
                    SymbolFraction::Rounded(round_to_tenth(
                        count_to_f64(count) / count_to_f64(total),
                    ))
                };
                SymbolComposition {
                    symbol,
                    count,
                    fraction,
                }
            })
            .collect();

        Self { symbols, total }
    }

    /// Fraction reported for a symbol, ignoring case
    #[must_use]
    pub fn fraction(&self, symbol: char) -> Option<SymbolFraction> {
        let upper = symbol.to_ascii_uppercase();
        self.symbols
            .iter()
            .find(|s| s.symbol == upper)
            .map(|s| s.fraction)
    }
}

impl fmt::Display for Composition {
    /// One `"<symbol>: <fraction>"` line per symbol
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.symbols {
            writeln!(f, "{}: {}", entry.symbol, entry.fraction)?;
        }
        Ok(())
    }
}
