use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::compose::write_statements_file;
use crate::cli::select::write_selection_file;
use crate::cli::OutputFormat;
use crate::core::boundary::Selection;
use crate::matching::{compose, BoundarySelector, SelectionConfig, DEFAULT_MAX_SPAN};
use crate::parsing::gff::{extract_features, partition_by_contig, read_annotation_text};
use crate::parsing::statements::render_statements;
use crate::utils::paths::{boundaries_path, statements_path, split_path};

#[derive(Args)]
pub struct RunArgs {
    /// Multi-contig annotation file (GFF3, optionally gzipped)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Directory for statement and boundary files (created if missing)
    #[arg(required = true)]
    pub output_dir: PathBuf,

    /// Longest span (bp) that may be selected
    #[arg(long, default_value_t = DEFAULT_MAX_SPAN)]
    pub max_span: u64,
}

/// Outcome for one contig run
#[derive(Debug, Serialize)]
pub struct ContigReport {
    pub contig_id: String,
    pub anchors: usize,
    pub statements: PathBuf,
    pub boundaries: PathBuf,
    pub selection: Selection,
}

/// Execute run subcommand
///
/// Each contig run is processed exactly as `compose` followed by `select`
/// would process `pharokka_<n>.gff`, and writes the same two files.
///
/// # Errors
///
/// Returns an error if the input is unreadable or malformed, or an output
/// cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RunArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_annotation_text(&args.input)
        .with_context(|| format!("Failed to read annotation {}", args.input.display()))?;
    let chunks = partition_by_contig(&text);

    if verbose {
        eprintln!("Processing {} contig runs", chunks.len());
    }

    let selector = BoundarySelector::new(SelectionConfig {
        max_span: args.max_span,
    });

    let mut reports = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let split_name = split_path(&args.output_dir, i + 1);
        debug!("Contig {} -> {}", chunk.contig_id, split_name.display());

        let features = extract_features(&chunk.to_text())
            .with_context(|| format!("Failed to parse records for contig {}", chunk.contig_id))?;
        let boundaries = compose(&features);

        let statements = statements_path(&split_name, &args.output_dir);
        write_statements_file(&statements, &boundaries)?;

        // Select from the rendered artifact so the answer matches a staged run
        let artifact = render_statements(&boundaries);
        let selection = selector.select_text(&artifact)?;
        let output = boundaries_path(&statements);
        write_selection_file(&output, &selection)?;

        info!("{}: {}", chunk.contig_id, selection);
        reports.push(ContigReport {
            contig_id: chunk.contig_id.clone(),
            anchors: boundaries.len(),
            statements,
            boundaries: output,
            selection,
        });
    }

    match format {
        OutputFormat::Text => {
            for report in &reports {
                println!("Output written to {}", report.boundaries.display());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Tsv => {
            for report in &reports {
                println!("{}\t{}", report.contig_id, report.selection);
            }
        }
    }

    Ok(())
}
