use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::boundary::ComposedBoundary;
use crate::matching::compose;
use crate::parsing::gff::extract_features_from_file;
use crate::parsing::statements::write_statements;
use crate::utils::paths::statements_path;

#[derive(Args)]
pub struct ComposeArgs {
    /// Annotation file for a single contig (GFF3, optionally gzipped)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Directory for the boundary-statement file (created if missing)
    #[arg(required = true)]
    pub output_dir: PathBuf,
}

/// Execute compose subcommand
///
/// # Errors
///
/// Returns an error if the annotation cannot be read or parsed, or the output
/// cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ComposeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let features = extract_features_from_file(&args.input)
        .with_context(|| format!("Failed to read annotation {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Found {} anchor genes, {} integrases, {} endolysins",
            features.anchor_count(),
            features.integrases.len(),
            features.endolysins.len()
        );
    }

    let boundaries = compose(&features);
    let output = statements_path(&args.input, &args.output_dir);
    write_statements_file(&output, &boundaries)?;

    match format {
        OutputFormat::Text => println!("Output written to {}", output.display()),
        OutputFormat::Json => print_json(&output, &boundaries)?,
        OutputFormat::Tsv => print_tsv(&boundaries),
    }

    Ok(())
}

/// Write the boundary-statement artifact, creating its directory if needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub fn write_statements_file(path: &Path, boundaries: &[ComposedBoundary]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_statements(&mut out, boundaries)?;
    out.flush()?;

    info!(
        "Wrote {} boundary statements to {}",
        boundaries.len(),
        path.display()
    );
    Ok(())
}

fn print_json(output: &Path, boundaries: &[ComposedBoundary]) -> anyhow::Result<()> {
    let report = serde_json::json!({
        "output": output.display().to_string(),
        "boundaries": boundaries,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_tsv(boundaries: &[ComposedBoundary]) {
    println!("anchor\tcontig\tanchor_id\tstart\tend");
    for b in boundaries {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            b.candidate.identifier,
            b.anchor.contig_id,
            b.anchor.display_id(),
            b.candidate.start,
            b.candidate.end
        );
    }
}
