use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::alphabet::AlphabetSet;
use crate::matching::composition::Composition;
use crate::parsing::fasta::parse_fasta_file;
use crate::utils::validation::parse_alphabet;

#[derive(Args)]
pub struct CompositionArgs {
    /// FASTA file (may be gzip compressed)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Only count sequences made up entirely of alphabet symbols
    #[arg(long)]
    pub pure_only: bool,

    /// Symbols to count (case-insensitive)
    #[arg(long, default_value = "ACGT", value_parser = parse_alphabet)]
    pub alphabet: AlphabetSet,
}

/// Execute composition subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompositionArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let parsed = parse_fasta_file(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let residues = if args.pure_only {
        args.alphabet.filter_pure_residues(&parsed.residues)
    } else {
        parsed.residues
    };

    if verbose {
        eprintln!("Counting symbols over {} sequences", residues.len());
    }

    let composition = Composition::count(&residues, &args.alphabet);

    match format {
        OutputFormat::Text => print!("{composition}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&composition)?),
        OutputFormat::Tsv => {
            println!("symbol\tcount\tfraction");
            for entry in &composition.symbols {
                println!("{}\t{}\t{}", entry.symbol, entry.count, entry.fraction);
            }
        }
    }

    Ok(())
}
