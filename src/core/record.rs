use serde::{Deserialize, Serialize};

/// A single sequence record: the header text and its residue string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Header text after the `>` marker, trimmed
    pub header: String,

    /// Concatenated sequence lines, each trimmed of edge whitespace
    pub residues: String,
}

impl Record {
    pub fn new(header: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            residues: residues.into(),
        }
    }

    /// Number of residue characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// Collect the residue strings of a record slice, in order
#[must_use]
pub fn residues_of(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.residues.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_len_counts_characters() {
        let record = Record::new("seq1", "ACGT");
        assert_eq!(record.len(), 4);
        assert!(!record.is_empty());
        assert!(Record::new("empty", "").is_empty());
    }

    #[test]
    fn test_residues_of_preserves_order() {
        let records = vec![Record::new("a", "AC"), Record::new("b", "GT")];
        assert_eq!(residues_of(&records), vec!["AC", "GT"]);
    }
}
