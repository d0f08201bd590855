use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::record::Record;
use crate::parsing::fasta::write_fasta;

/// Number of leading SAM columns joined into the FASTA header
/// (QNAME through TLEN)
pub const HEADER_FIELD_COUNT: usize = 9;

/// Zero-based column holding the read sequence (SEQ)
pub const SEQUENCE_FIELD: usize = 9;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Invalid SAM format: line {line} has {fields} tab-separated fields, expected at least {min}",
        min = SEQUENCE_FIELD + 1
    )]
    MalformedRow { line: usize, fields: usize },

    #[error(
        "Unpaired FASTA records: {headers} headers but {sequences} sequences (a header has no sequence lines)"
    )]
    UnpairedHeaders { headers: usize, sequences: usize },
}

/// Convert the alignment lines of SAM text into FASTA records.
///
/// Lines starting with `@` are header lines and are skipped, as are empty
/// lines. Each remaining line yields one record whose header is the first
/// nine columns joined by tabs and whose residues are the tenth column.
///
/// # Errors
///
/// Returns `ParseError::MalformedRow` for the first line that has no
/// sequence column. No records are returned in that case.
pub fn parse_sam_text(text: &str) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('@') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= SEQUENCE_FIELD {
            return Err(ParseError::MalformedRow {
                line: i + 1,
                fields: fields.len(),
            });
        }

        let header = fields[..HEADER_FIELD_COUNT].join("\t");
        records.push(Record::new(header, fields[SEQUENCE_FIELD]));
    }

    debug!(records = records.len(), "Parsed SAM alignment lines");
    Ok(records)
}

/// Read a SAM file into FASTA records
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::MalformedRow` if a line lacks the sequence column.
pub fn parse_sam_file(path: &Path) -> Result<Vec<Record>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_sam_text(&content)
}

/// Convert a SAM file into a FASTA file.
///
/// The whole input is parsed before anything is written, and the output is
/// staged in a temporary file next to `fasta_path` that only replaces the
/// destination once fully written. A malformed input therefore leaves no
/// output file behind.
///
/// # Errors
///
/// Returns `ParseError::Io` if either file cannot be accessed, or
/// `ParseError::MalformedRow` if the SAM input is malformed.
pub fn convert_sam_to_fasta(sam_path: &Path, fasta_path: &Path) -> Result<usize, ParseError> {
    let records = parse_sam_file(sam_path)?;

    let dir = match fasta_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    write_fasta(&mut staged, &records)?;
    staged.flush()?;
    staged
        .persist(fasta_path)
        .map_err(|e| ParseError::Io(e.error))?;

    info!(
        records = records.len(),
        output = %fasta_path.display(),
        "Converted SAM to FASTA"
    );

    Ok(records.len())
}
