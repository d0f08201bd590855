use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::alphabet::AlphabetSet;
use crate::matching::engine::{MappingConfig, MappingEngine, MappingOutcome};
use crate::matching::index::MatchTable;
use crate::utils::validation::parse_alphabet;

#[derive(Args)]
pub struct MapArgs {
    /// FASTA file with query sequences (may be gzip compressed)
    #[arg(required = true)]
    pub query: PathBuf,

    /// FASTA file with reference sequences (may be gzip compressed)
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Symbols a query may contain (case-insensitive)
    #[arg(long, default_value = "ACGT", value_parser = parse_alphabet)]
    pub alphabet: AlphabetSet,
}

/// Execute map subcommand
///
/// # Errors
///
/// Returns an error if either input cannot be read or paired into records.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MapArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let engine = MappingEngine::with_config(MappingConfig {
        alphabet: args.alphabet.clone(),
    });

    let outcome = engine
        .map_files(&args.query, &args.reference)
        .with_context(|| {
            format!(
                "Failed to map {} against {}",
                args.query.display(),
                args.reference.display()
            )
        })?;

    if verbose {
        eprintln!(
            "Mapped {} queries ({} discarded as ambiguous) against {} references",
            outcome.matches.len(),
            outcome.discarded_queries,
            outcome.reference_count,
        );
    }

    match format {
        OutputFormat::Text => print_text(&outcome)?,
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Tsv => print_tsv(&outcome.matches),
    }

    Ok(())
}

fn format_offsets(offsets: &[usize], separator: &str) -> String {
    offsets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn print_text(outcome: &MappingOutcome) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    outcome.write_composition_report(&mut stdout)?;
    drop(stdout);

    println!("\nMatch Results");
    println!("{}", "=".repeat(60));

    if outcome.matches.is_empty() {
        println!("No queries to map.");
        return Ok(());
    }

    for hits in outcome.matches.iter() {
        println!("{}", hits.query);
        for reference in &hits.references {
            let offsets = if reference.offsets.is_empty() {
                "-".to_string()
            } else {
                format_offsets(&reference.offsets, ", ")
            };
            println!("  {}: {offsets}", reference.reference);
        }
    }

    Ok(())
}

fn print_json(outcome: &MappingOutcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

fn print_tsv(table: &MatchTable) {
    println!("query\treference\tcount\toffsets");
    for hits in table.iter() {
        for reference in &hits.references {
            println!(
                "{}\t{}\t{}\t{}",
                hits.query,
                reference.reference,
                reference.offsets.len(),
                format_offsets(&reference.offsets, ","),
            );
        }
    }
}
