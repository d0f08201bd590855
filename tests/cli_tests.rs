//! End-to-end tests of the read-mapper binary
//!
//! Each test writes its inputs into a fresh temporary directory and runs one
//! subcommand, checking stdout, stderr and any files produced.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test input");
    path
}

fn read_mapper() -> Command {
    Command::cargo_bin("read-mapper").expect("Binary should be built")
}

fn mapping_inputs(dir: &TempDir) -> (PathBuf, PathBuf) {
    let query = write(dir, "query.fa", ">seq1\nAAAAA\n>seq2\nCCCCC");
    let reference = write(dir, "reference.fa", ">ref1\nAAAAA\n>ref2\nTTTTT");
    (query, reference)
}

#[test]
fn test_map_text_output() {
    let dir = TempDir::new().unwrap();
    let (query, reference) = mapping_inputs(&dir);

    let expected = "Nucleotide fractions queries:\n\
A: 0.5\nC: 0.5\nG: 0.0\nT: 0.0\n\
Nucleotide fractions references:\n\
A: 0.5\nC: 0.0\nG: 0.0\nT: 0.5\n\
\n\
Match Results\n\
============================================================\n\
seq1\n  ref1: 1\n  ref2: -\n\
seq2\n  ref1: -\n  ref2: -\n";

    read_mapper()
        .arg("map")
        .arg(&query)
        .arg(&reference)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_map_json_output() {
    let dir = TempDir::new().unwrap();
    let query = write(&dir, "query.fa", ">seq1\nAA\n>seq2\nAG\n>bad\nANA\n");
    let reference = write(&dir, "reference.fa", ">ref1\nAAAAA\n>ref2\nTTTTT");

    let output = read_mapper()
        .args(["--format", "json", "map"])
        .arg(&query)
        .arg(&reference)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["matches"],
        serde_json::json!({
            "seq1": {"ref1": [1, 2, 3, 4], "ref2": []},
            "seq2": {"ref1": [], "ref2": []},
        })
    );
    assert_eq!(json["discarded_queries"], 1);
    assert_eq!(json["reference_count"], 2);
    assert_eq!(json["query_composition"]["total"], 4);
}

#[test]
fn test_map_tsv_output() {
    let dir = TempDir::new().unwrap();
    let query = write(&dir, "query.fa", ">q\nAA\n");
    let reference = write(&dir, "reference.fa", ">r1\naaaa\n>r2\nCC\n");

    read_mapper()
        .args(["map", "--format", "tsv"])
        .arg(&query)
        .arg(&reference)
        .assert()
        .success()
        .stdout("query\treference\tcount\toffsets\nq\tr1\t3\t1,2,3\nq\tr2\t0\t\n");
}

#[test]
fn test_map_missing_input() {
    let dir = TempDir::new().unwrap();
    let reference = write(&dir, "reference.fa", ">ref1\nAAAAA\n");

    read_mapper()
        .arg("map")
        .arg(dir.path().join("missing.fa"))
        .arg(&reference)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to map"));
}

#[test]
fn test_map_rejects_invalid_alphabet() {
    let dir = TempDir::new().unwrap();
    let (query, reference) = mapping_inputs(&dir);

    read_mapper()
        .args(["map", "--alphabet", "AC-T"])
        .arg(&query)
        .arg(&reference)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid alphabet symbol"));
}

#[test]
fn test_convert_valid_sam() {
    let dir = TempDir::new().unwrap();
    let sam = write(
        &dir,
        "test_valid.sam",
        "@HD\tVN:1.6\n\
r1\t0\tchr1\t1\t60\t4M\t*\t0\t0\tACGT\tIIII\n\
r2\t16\tchr1\t5\t60\t4M\t*\t0\t0\tGGCC\tIIII\tNM:i:0\n",
    );
    let fasta = dir.path().join("test_valid.fa");

    read_mapper()
        .arg("convert")
        .arg(&sam)
        .arg(&fasta)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("SUCCESS: FASTA file"))
        .stdout(predicate::str::ends_with("created!\n"));

    let content = std::fs::read_to_string(&fasta).unwrap();
    assert_eq!(
        content,
        ">r1\t0\tchr1\t1\t60\t4M\t*\t0\t0\nACGT\n>r2\t16\tchr1\t5\t60\t4M\t*\t0\t0\nGGCC\n"
    );
}

#[test]
fn test_convert_invalid_sam_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let sam = write(&dir, "test_invalid.sam", "SOME CONTENT");
    let fasta = dir.path().join("test_invalid.fa");

    read_mapper()
        .arg("convert")
        .arg(&sam)
        .arg(&fasta)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid SAM format"));

    assert!(!fasta.exists());
}

#[test]
fn test_composition_no_symbols() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "numbers.fa", ">n\nnumber 42!\n");

    read_mapper()
        .arg("composition")
        .arg(&input)
        .assert()
        .success()
        .stdout("A: 0\nC: 0\nG: 0\nT: 0\n");
}

#[test]
fn test_composition_pure_only() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "mixed.fa", ">a\nAAAAACCCGGT\n>b\nNNNNTTTTTTTTTT\n");

    read_mapper()
        .args(["composition", "--pure-only"])
        .arg(&input)
        .assert()
        .success()
        .stdout("A: 0.5\nC: 0.3\nG: 0.2\nT: 0.1\n");
}
