use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::gff::{partition_by_contig, read_annotation_text, ContigChunk};
use crate::utils::paths::split_path;

#[derive(Args)]
pub struct SplitArgs {
    /// Multi-contig annotation file (GFF3, optionally gzipped)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Directory for the per-contig files (created if missing)
    #[arg(required = true)]
    pub output_dir: PathBuf,
}

/// Execute split subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or an output file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SplitArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_annotation_text(&args.input)
        .with_context(|| format!("Failed to read annotation {}", args.input.display()))?;
    let chunks = partition_by_contig(&text);

    if verbose {
        eprintln!("Found {} contig runs", chunks.len());
    }

    let written = write_chunks(&chunks, &args.output_dir)?;

    match format {
        OutputFormat::Text => {
            for path in &written {
                println!("Written {}", path.display());
            }
        }
        OutputFormat::Json => {
            let files: Vec<_> = chunks
                .iter()
                .zip(&written)
                .map(|(chunk, path)| {
                    serde_json::json!({
                        "contig_id": chunk.contig_id,
                        "records": chunk.lines.len(),
                        "path": path.display().to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&files)?);
        }
        OutputFormat::Tsv => {
            println!("contig_id\trecords\tpath");
            for (chunk, path) in chunks.iter().zip(&written) {
                println!(
                    "{}\t{}\t{}",
                    chunk.contig_id,
                    chunk.lines.len(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}

/// Write each chunk to `pharokka_<n>.gff`, numbering from 1
///
/// # Errors
///
/// Returns an error if the directory or a file cannot be written.
pub fn write_chunks(chunks: &[ContigChunk], output_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory {}", output_dir.display()))?;

    let mut written = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let path = split_path(output_dir, i + 1);
        std::fs::write(&path, chunk.to_text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
