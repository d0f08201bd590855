use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::sam::convert_sam_to_fasta;

#[derive(Args)]
pub struct ConvertArgs {
    /// Existing SAM file to read alignments from
    #[arg(required = true)]
    pub sam: PathBuf,

    /// FASTA file to create (replaced if it exists)
    #[arg(required = true)]
    pub fasta: PathBuf,
}

/// Execute convert subcommand
///
/// # Errors
///
/// Returns an error if the SAM file cannot be read or is malformed, or if the
/// FASTA file cannot be written. No FASTA file is created on error.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ConvertArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = convert_sam_to_fasta(&args.sam, &args.fasta)
        .with_context(|| format!("Failed to convert {}", args.sam.display()))?;

    if verbose {
        eprintln!("Wrote {records} records");
    }

    match format {
        OutputFormat::Text => {
            println!("SUCCESS: FASTA file {} created!", args.fasta.display());
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.sam.display().to_string(),
                "output": args.fasta.display().to_string(),
                "records": records,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("input\toutput\trecords");
            println!(
                "{}\t{}\t{records}",
                args.sam.display(),
                args.fasta.display()
            );
        }
    }

    Ok(())
}
