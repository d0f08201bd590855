//! Library-level tests of the full mapping pipeline and the SAM round trip

use std::path::PathBuf;

use read_mapper::parsing::fasta::{parse_fasta_file, parse_fasta_text, read_records};
use read_mapper::parsing::sam::{convert_sam_to_fasta, parse_sam_text};
use read_mapper::{AlphabetSet, MappingEngine, Record, SymbolFraction};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test input");
    path
}

#[test]
fn test_headers_and_sequences_align_for_well_formed_input() {
    let text = ">a desc\nAC\nGT\n\n>b\n  TT  \n>c\nN\n";
    let parsed = parse_fasta_text(text);
    assert_eq!(parsed.headers.len(), parsed.residues.len());
    assert_eq!(parsed.headers, vec!["a desc", "b", "c"]);
    assert_eq!(parsed.residues, vec!["ACGT", "TT", "N"]);
}

#[test]
fn test_end_to_end_mapping() {
    let dir = TempDir::new().unwrap();
    let query = write(&dir, "query.fa", ">seq1\nAAAAA\n>seq2\nCCCCC");
    let reference = write(&dir, "reference.fa", ">ref1\nAAAAA\n>ref2\nTTTTT");

    let outcome = MappingEngine::new().map_files(&query, &reference).unwrap();
    let json = serde_json::to_value(&outcome.matches).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "seq1": {"ref1": [1], "ref2": []},
            "seq2": {"ref1": [], "ref2": []},
        })
    );
}

#[test]
fn test_multiline_and_mixed_case_mapping() {
    let queries = parse_fasta_text(">q1\nac\nGT\n>q2\nNNN\n>q3\ncg\n")
        .into_records()
        .unwrap();
    let references = parse_fasta_text(">r1\nACGTAC\ngtac\n>r2\nxxACGTxx\n")
        .into_records()
        .unwrap();

    let outcome = MappingEngine::new().map_records(queries, &references);
    let table = &outcome.matches;

    assert_eq!(table.len(), 2);
    assert_eq!(table.offsets("q1", "r1"), Some(&[1, 5][..]));
    assert_eq!(table.offsets("q1", "r2"), Some(&[3][..]));
    assert_eq!(table.offsets("q3", "r1"), Some(&[2, 6][..]));
    assert!(table.get("q2").is_none());

    // References are not filtered: the x characters simply do not count
    assert_eq!(outcome.reference_composition.total, 14);
    assert_eq!(
        outcome.reference_composition.fraction('A'),
        Some(SymbolFraction::Rounded(0.3))
    );
}

#[test]
fn test_empty_queries_report_integer_zero() {
    let references = vec![Record::new("ref1", "ACGT")];
    let outcome = MappingEngine::new().map_records(Vec::new(), &references);

    assert!(outcome.matches.is_empty());
    assert_eq!(
        outcome.query_composition.to_string(),
        "A: 0\nC: 0\nG: 0\nT: 0\n"
    );
    assert_eq!(
        outcome.reference_composition.to_string(),
        "A: 0.3\nC: 0.3\nG: 0.3\nT: 0.3\n"
    );
}

#[test]
fn test_sam_fasta_round_trip() {
    let sam_text = "@HD\tVN:1.6\tSO:unsorted\n\
read1\t0\tchr1\t100\t60\t8M\t*\t0\t0\tACGTACGT\tIIIIIIII\n\
read2\t4\t*\t0\t0\t*\t*\t0\t0\tggccNNtt\t########\tRG:Z:x\n";

    let dir = TempDir::new().unwrap();
    let sam = write(&dir, "reads.sam", sam_text);
    let fasta = dir.path().join("reads.fa");

    let expected = parse_sam_text(sam_text).unwrap();
    assert_eq!(convert_sam_to_fasta(&sam, &fasta).unwrap(), 2);

    let records = read_records(&fasta).unwrap();
    assert_eq!(records, expected);
    assert_eq!(records[1].header, "read2\t4\t*\t0\t0\t*\t*\t0\t0");
    assert_eq!(records[1].residues, "ggccNNtt");
}

#[test]
fn test_converted_reads_map_onto_reference() {
    let dir = TempDir::new().unwrap();
    let sam = write(
        &dir,
        "reads.sam",
        "r1\t0\tchr1\t1\t60\t3M\t*\t0\t0\tGAT\tIII\n\
r2\t0\tchr1\t1\t60\t3M\t*\t0\t0\tNAT\tIII\n",
    );
    let reads = dir.path().join("reads.fa");
    convert_sam_to_fasta(&sam, &reads).unwrap();
    let reference = write(&dir, "ref.fa", ">chr1\nGATTACAGATTACA\n");

    let outcome = MappingEngine::new().map_files(&reads, &reference).unwrap();
    assert_eq!(outcome.discarded_queries, 1);
    assert_eq!(
        outcome
            .matches
            .offsets("r1\t0\tchr1\t1\t60\t3M\t*\t0\t0", "chr1"),
        Some(&[1, 8][..])
    );
}

#[test]
fn test_filter_idempotent_over_parsed_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "mixed.fa", ">a\nACGT\n>b\nACGR\n>c\nacgt\n");

    let residues = parse_fasta_file(&input).unwrap().residues;
    let dna = AlphabetSet::dna();
    let once = dna.filter_pure_residues(&residues);
    assert_eq!(once, vec!["ACGT", "acgt"]);
    assert_eq!(dna.filter_pure_residues(&once), once);
}
