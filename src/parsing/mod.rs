//! Parsers and writers for sequence record formats.
//!
//! This module provides:
//!
//! - **FASTA**: Read headers and multi-line sequences, write records back out
//! - **SAM**: Convert alignment lines into FASTA records
//!
//! ## Example
//!
//! ```rust
//! use read_mapper::parsing::fasta::parse_fasta_text;
//!
//! let parsed = parse_fasta_text(">seq1\nACGT\nAC\n>seq2\nGGGG\n");
//! assert_eq!(parsed.headers, vec!["seq1", "seq2"]);
//! assert_eq!(parsed.residues, vec!["ACGTAC", "GGGG"]);
//! ```
//!
//! ## SAM columns used
//!
//! | Columns | Use |
//! |---------|-----|
//! | 1-9 (QNAME..TLEN) | Joined with tabs into the FASTA header |
//! | 10 (SEQ) | Sequence |
//! | 11+ | Ignored |

pub mod fasta;
pub mod sam;
