//! Command-line interface for read-mapper.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **map**: Map query sequences onto reference sequences
//! - **convert**: Convert a SAM file into a FASTA file
//! - **composition**: Report the symbol composition of a FASTA file
//!
//! ## Usage
//!
//! ```text
//! # Map queries against references
//! read-mapper map queries.fa references.fa
//!
//! # JSON output for scripting
//! read-mapper map queries.fa references.fa --format json
//!
//! # Turn alignments into FASTA records first
//! read-mapper convert reads.sam reads.fa
//!
//! # Composition of the pure sequences in a file
//! read-mapper composition reads.fa --pure-only
//! ```

use clap::{Parser, Subcommand};

pub mod composition;
pub mod convert;
pub mod map;

#[derive(Parser)]
#[command(name = "read-mapper")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Map FASTA query sequences onto reference sequences")]
#[command(
    long_about = "read-mapper finds every occurrence of each query sequence in each reference sequence.\n\nQueries containing symbols outside the alphabet (ACGT by default) are discarded. For the remaining queries it reports:\n- Nucleotide fractions of the queries and of the references\n- For every query and every reference, the 1-based start offsets of all exact, case-insensitive matches, overlapping matches included"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map query sequences onto reference sequences
    Map(map::MapArgs),

    /// Convert a SAM file into a FASTA file
    Convert(convert::ConvertArgs),

    /// Report the symbol composition of a FASTA file
    Composition(composition::CompositionArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
