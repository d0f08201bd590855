//! Sequence mapping: composition statistics and exhaustive exact search.
//!
//! This module provides the core mapping functionality:
//!
//! - [`MappingEngine`](engine::MappingEngine): Main entry point, wires filtering, composition and search
//! - [`Composition`](composition::Composition): Per-symbol tallies and rounded fractions
//! - [`MatchIndex`](index::MatchIndex): Every-occurrence search of queries in references
//! - [`MatchTable`](index::MatchTable): Query -> reference -> offsets result
//!
//! ## Mapping Algorithm
//!
//! 1. **Alphabet filter**: Queries with symbols outside the alphabet are dropped
//! 2. **Composition**: Symbol fractions over the kept queries and over all references
//! 3. **Search**: Each kept query is uppercased and searched in each uppercased
//!    reference; the scan restarts one character after every hit, so overlapping
//!    occurrences are all reported
//!
//! Offsets are 1-based. A query with no hit in a reference still gets an entry
//! for that reference, with an empty offset list.
//!
//! ## Example
//!
//! ```rust
//! use read_mapper::{MappingEngine, Record};
//!
//! let queries = vec![Record::new("seq1", "AA"), Record::new("seq2", "AG")];
//! let references = vec![Record::new("ref1", "AAAAA"), Record::new("ref2", "TTTTT")];
//!
//! let outcome = MappingEngine::new().map_records(queries, &references);
//! assert_eq!(outcome.matches.offsets("seq1", "ref1"), Some(&[1, 2, 3, 4][..]));
//! assert_eq!(outcome.matches.offsets("seq2", "ref2"), Some(&[][..]));
//! ```

pub mod composition;
pub mod engine;
pub mod index;
