//! Command-line interface for prophage-bounds.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compose**: Derive one boundary per anchor gene from a single-contig annotation
//! - **select**: Pick the best boundary from a boundary-statement file
//! - **split**: Split a multi-contig annotation into one file per contig
//! - **run**: Split, compose, and select for every contig in one go
//!
//! ## Usage
//!
//! ```text
//! # Stage by stage
//! prophage-bounds split pharokka.gff parts/
//! prophage-bounds compose parts/pharokka_1.gff results/
//! prophage-bounds select results/pharokka_1_output.txt
//!
//! # Everything at once
//! prophage-bounds run pharokka.gff results/
//!
//! # Tighter span limit, JSON report on stdout
//! prophage-bounds --format json run pharokka.gff results/ --max-span 40000
//! ```

use clap::{Parser, Subcommand};

pub mod compose;
pub mod run;
pub mod select;
pub mod split;

#[derive(Parser)]
#[command(name = "prophage-bounds")]
#[command(version)]
#[command(about = "Locate candidate prophage boundaries from phage gene annotations")]
#[command(
    long_about = "prophage-bounds finds prophage regions in annotated contigs.\n\nFor every terminase large subunit and portal protein it finds the nearest integrase and endolysin, derives a span, and then reports the largest span within the length limit for each contig."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format of the report printed to stdout (output files are unaffected)
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write boundary statements for each anchor gene in an annotation file
    Compose(compose::ComposeArgs),

    /// Select the best boundary from a boundary-statement file
    Select(select::SelectArgs),

    /// Split a multi-contig annotation file into one file per contig
    Split(split::SplitArgs),

    /// Split, compose, and select for every contig of an annotation file
    Run(run::RunArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
