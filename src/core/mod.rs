//! Core data types for sequence mapping.
//!
//! - [`Record`]: A header and its residue string, as parsed from FASTA
//! - [`AlphabetSet`]: The accepted residue symbols, used for filtering and composition
//!
//! ## Pure and ambiguous sequences
//!
//! A residue string is *pure* when every character, ignoring case, belongs to
//! the alphabet. Anything else (IUPAC ambiguity codes, gaps, digits, stray
//! whitespace) makes the sequence *ambiguous*. The empty string is pure.

pub mod alphabet;
pub mod record;
