use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::core::alphabet::AlphabetSet;
use crate::core::record::{residues_of, Record};
use crate::matching::composition::Composition;
use crate::matching::index::{MatchIndex, MatchTable};
use crate::parsing::fasta::read_records;
use crate::parsing::sam::ParseError;

/// Configuration for the mapping engine
#[derive(Debug, Clone, Default)]
pub struct MappingConfig {
    /// Symbols a query must consist of to be mapped, also used for composition
    pub alphabet: AlphabetSet,
}

/// Everything produced by one mapping run
#[derive(Debug, Clone, Serialize)]
pub struct MappingOutcome {
    /// Composition of the queries that passed the alphabet filter
    pub query_composition: Composition,

    /// Composition of all references
    pub reference_composition: Composition,

    /// Query id -> reference id -> 1-based offsets
    pub matches: MatchTable,

    /// Number of queries dropped for containing symbols outside the alphabet
    pub discarded_queries: usize,

    /// Number of reference records searched
    pub reference_count: usize,
}

impl MappingOutcome {
    /// Write the query and reference composition blocks
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn write_composition_report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Nucleotide fractions queries:")?;
        write!(out, "{}", self.query_composition)?;
        writeln!(out, "Nucleotide fractions references:")?;
        write!(out, "{}", self.reference_composition)?;
        Ok(())
    }
}

/// Maps query sequences onto reference sequences
pub struct MappingEngine {
    config: MappingConfig,
}

impl MappingEngine {
    /// Create a new mapping engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: MappingConfig::default(),
        }
    }

    /// Create a new mapping engine with custom configuration
    #[must_use]
    pub fn with_config(config: MappingConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Filter queries, compute compositions and search every pure query
    /// against every reference
    #[must_use]
    pub fn map_records(&self, queries: Vec<Record>, references: &[Record]) -> MappingOutcome {
        let total_queries = queries.len();
        let queries = self.config.alphabet.filter_pure(queries);
        let discarded_queries = total_queries - queries.len();

        if discarded_queries > 0 {
            warn!(
                discarded = discarded_queries,
                alphabet = %self.config.alphabet,
                "Discarded queries containing symbols outside the alphabet"
            );
        }

        let query_composition = Composition::count(residues_of(&queries), &self.config.alphabet);
        let reference_composition =
            Composition::count(residues_of(references), &self.config.alphabet);

        let matches = MatchIndex::new(references).map_queries(&queries);

        info!(
            queries = queries.len(),
            references = references.len(),
            "Mapped queries to references"
        );

        MappingOutcome {
            query_composition,
            reference_composition,
            matches,
            discarded_queries,
            reference_count: references.len(),
        }
    }

    /// Read both FASTA files and map the queries onto the references
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if either file cannot be read, or
    /// `ParseError::UnpairedHeaders` if either file has a header without a
    /// sequence.
    pub fn map_files(
        &self,
        query_path: &Path,
        reference_path: &Path,
    ) -> Result<MappingOutcome, ParseError> {
        let queries = read_records(query_path)?;
        let references = read_records(reference_path)?;
        Ok(self.map_records(queries, &references))
    }
}

impl Default for MappingEngine {
    fn default() -> Self {
        Self::new()
    }
}
