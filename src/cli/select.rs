use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::boundary::Selection;
use crate::matching::{BoundarySelector, SelectionConfig, DEFAULT_MAX_SPAN};
use crate::utils::paths::boundaries_path;

#[derive(Args)]
pub struct SelectArgs {
    /// Boundary-statement file written by `compose`
    #[arg(required = true)]
    pub artifact: PathBuf,

    /// Longest span (bp) that may be selected
    #[arg(long, default_value_t = DEFAULT_MAX_SPAN)]
    pub max_span: u64,
}

/// Execute select subcommand
///
/// Finding no valid boundary is not an error; the sentinel line is written instead.
///
/// # Errors
///
/// Returns an error if the artifact cannot be read or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SelectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let selector = BoundarySelector::new(SelectionConfig {
        max_span: args.max_span,
    });

    if verbose {
        eprintln!("Input filename: {}", args.artifact.display());
    }

    let (output, selection) = select_file(&args.artifact, &selector)?;

    match format {
        OutputFormat::Text => println!("Output written to {}", output.display()),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "input": args.artifact.display().to_string(),
                "output": output.display().to_string(),
                "max_span": selector.config().max_span,
                "selection": selection,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Tsv => print!("{}", selection.to_line()),
    }

    Ok(())
}

/// Select from an artifact file and write the adjacent result file
///
/// # Errors
///
/// Returns an error if the artifact cannot be read or parsed, or the output
/// cannot be written.
pub fn select_file(
    artifact: &Path,
    selector: &BoundarySelector,
) -> anyhow::Result<(PathBuf, Selection)> {
    let text = std::fs::read_to_string(artifact)
        .with_context(|| format!("Failed to read {}", artifact.display()))?;

    let selection = selector
        .select_text(&text)
        .with_context(|| format!("Failed to parse {}", artifact.display()))?;

    let output = boundaries_path(artifact);
    write_selection_file(&output, &selection)?;
    Ok((output, selection))
}

/// Write the single result line
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_selection_file(path: &Path, selection: &Selection) -> anyhow::Result<()> {
    std::fs::write(path, selection.to_line())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote selection to {}", path.display());
    Ok(())
}
