//! FASTA reading and writing.
//!
//! Parsing is line based and never fails on content: a line starting with
//! `>` opens a record, every other line is a sequence line. Sequence lines
//! are trimmed at both edges and concatenated. Text before the first header
//! is ignored.
//!
//! Supported inputs:
//! - `.fa`, `.fasta`, `.fna` and any other uncompressed text
//! - `.gz`, `.bgz` (gzip/bgzip compressed)

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::core::record::Record;
use crate::parsing::sam::ParseError;

/// Marker character that starts a FASTA header line
pub const HEADER_MARKER: char = '>';

/// Headers and sequences of a FASTA input as two parallel lists.
///
/// A header whose body is empty still appears in `headers`, but contributes
/// nothing to `residues`, so the lists only line up when every header has at
/// least one non-blank sequence line. Use [`ParsedRecords::into_records`] to
/// pair them safely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords {
    pub headers: Vec<String>,
    pub residues: Vec<String>,
}

impl ParsedRecords {
    /// True when every header has a sequence
    #[must_use]
    pub fn is_paired(&self) -> bool {
        self.headers.len() == self.residues.len()
    }

    /// Pair headers with sequences.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnpairedHeaders` if some header had no sequence
    /// lines, since the positional pairing would be wrong from that point on.
    pub fn into_records(self) -> Result<Vec<Record>, ParseError> {
        if !self.is_paired() {
            return Err(ParseError::UnpairedHeaders {
                headers: self.headers.len(),
                sequences: self.residues.len(),
            });
        }

        Ok(self
            .headers
            .into_iter()
            .zip(self.residues)
            .map(|(header, residues)| Record { header, residues })
            .collect())
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse FASTA lines into parallel header and sequence lists
pub fn parse_fasta_lines<I, S>(lines: I) -> ParsedRecords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedRecords::default();
    let mut current = String::new();
    let mut in_record = false;
    let mut skipped = 0usize;

    for line in lines {
        let line = line.as_ref();

        if let Some(rest) = line.strip_prefix(HEADER_MARKER) {
            parsed.headers.push(rest.trim().to_string());
            if !current.is_empty() {
                parsed.residues.push(std::mem::take(&mut current));
            }
            in_record = true;
        } else if in_record {
            current.push_str(line.trim());
        } else {
            skipped += 1;
        }
    }

    if !current.is_empty() {
        parsed.residues.push(current);
    }

    if skipped > 0 {
        debug!(lines = skipped, "Ignored lines before the first FASTA header");
    }

    parsed
}

/// Parse FASTA text held in memory
#[must_use]
pub fn parse_fasta_text(text: &str) -> ParsedRecords {
    parse_fasta_lines(text.lines())
}

/// Parse FASTA from any buffered reader
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails or the input is not valid UTF-8.
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<ParsedRecords, ParseError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(parse_fasta_lines(lines))
}

/// Parse a FASTA file, decompressing `.gz`/`.bgz` inputs
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read.
pub fn parse_fasta_file(path: &Path) -> Result<ParsedRecords, ParseError> {
    let file = std::fs::File::open(path)?;

    let parsed = if is_gzipped(path) {
        parse_fasta_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        parse_fasta_reader(BufReader::new(file))?
    };

    debug!(
        path = %path.display(),
        headers = parsed.headers.len(),
        sequences = parsed.residues.len(),
        "Parsed FASTA file"
    );

    Ok(parsed)
}

/// Parse a FASTA file and pair headers with sequences
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::UnpairedHeaders` if a header has no sequence.
pub fn read_records(path: &Path) -> Result<Vec<Record>, ParseError> {
    parse_fasta_file(path)?.into_records()
}

/// Write records as FASTA, one unwrapped sequence line per record
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_fasta<W: Write>(writer: &mut W, records: &[Record]) -> std::io::Result<()> {
    for record in records {
        writeln!(writer, "{HEADER_MARKER}{}", record.header)?;
        writeln!(writer, "{}", record.residues)?;
    }
    Ok(())
}
