//! # read-mapper
//!
//! A library for locating every exact occurrence of query sequences inside
//! reference sequences.
//!
//! Given a FASTA file of queries and a FASTA file of references, `read-mapper`
//! discards queries that contain anything other than `A`, `C`, `G` or `T`,
//! reports the nucleotide composition of both sets, and builds a table of the
//! 1-based start positions of every query in every reference.
//!
//! ## Features
//!
//! - **Multi-line FASTA**: Sequence lines are trimmed and joined; `.gz` inputs are decompressed
//! - **Alphabet filter**: Ambiguous queries are dropped, headers stay attached to their sequences
//! - **Composition**: Per-symbol fractions rounded to one decimal place
//! - **Overlapping hits**: `AA` in `AAAA` is found at 1, 2 and 3
//! - **SAM conversion**: Turn alignment lines into FASTA records
//!
//! ## Example
//!
//! ```rust
//! use read_mapper::parsing::fasta::parse_fasta_text;
//! use read_mapper::MappingEngine;
//!
//! let queries = parse_fasta_text(">seq1\nAAAAA\n>seq2\nCCCCC\n").into_records().unwrap();
//! let references = parse_fasta_text(">ref1\nAAAAA\n>ref2\nTTTTT\n").into_records().unwrap();
//!
//! let outcome = MappingEngine::new().map_records(queries, &references);
//!
//! assert_eq!(outcome.matches.offsets("seq1", "ref1"), Some(&[1][..]));
//! assert_eq!(outcome.matches.offsets("seq2", "ref1"), Some(&[][..]));
//! assert_eq!(outcome.query_composition.to_string(), "A: 0.5\nC: 0.5\nG: 0.0\nT: 0.0\n");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence records and alphabets
//! - [`matching`]: Composition, match index and mapping engine
//! - [`parsing`]: FASTA and SAM readers, FASTA writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::alphabet::AlphabetSet;
pub use crate::core::record::Record;
pub use crate::matching::composition::{Composition, SymbolFraction};
pub use crate::matching::engine::{MappingConfig, MappingEngine, MappingOutcome};
pub use crate::matching::index::{MatchIndex, MatchTable};
pub use crate::parsing::sam::ParseError;
