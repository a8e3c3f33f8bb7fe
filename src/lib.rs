//! # prophage-bounds
//!
//! A library for locating candidate prophage boundaries in annotated contigs.
//!
//! Phage annotation tools such as pharokka label genes by function. A prophage
//! integrated into a bacterial chromosome is usually flagged by structural
//! genes (terminase large subunit, portal protein) and bracketed by an
//! integrase at one end and lysis genes such as an endolysin near the other.
//!
//! `prophage-bounds` turns those labels into coordinates:
//!
//! ## Features
//!
//! - **Feature extraction**: Reads CDS records and keeps the four roles that matter
//! - **Nearest-marker matching**: Finds the integrase and endolysin closest to each anchor
//! - **Span composition**: Writes a human-readable boundary statement per anchor
//! - **Boundary selection**: Keeps spans within a length limit and reports the largest
//! - **Contig splitting**: Breaks multi-contig annotations into per-contig files
//!
//! ## Example
//!
//! ```rust
//! use prophage_bounds::matching::{compose, BoundarySelector};
//! use prophage_bounds::parsing::gff::extract_features;
//! use prophage_bounds::parsing::statements::render_statements;
//!
//! let gff = "\
//! NODE_1_length_40000_cov_8||full\tp\tCDS\t1000\t2000\t.\t+\t0\tID=t1;product=terminase large subunit
//! NODE_1_length_40000_cov_8||full\tp\tCDS\t500\t900\t.\t+\t0\tID=i1;product=integrase
//! ";
//! let features = extract_features(gff).unwrap();
//! let statements = render_statements(&compose(&features));
//! assert!(statements.contains("Boundaries for terminase 1: 500 to 2000"));
//!
//! let selection = BoundarySelector::default().select_text(&statements).unwrap();
//! println!("{selection}");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Gene features, boundary candidates, and selections
//! - [`parsing`]: Annotation, boundary-statement, and node-token parsers
//! - [`matching`]: Nearest-marker search, composition, and selection
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Output file naming

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::boundary::{BoundaryCandidate, ComposedBoundary, SelectedBoundary, Selection};
pub use crate::core::feature::{AnnotatedFeatures, GeneFeature};
pub use crate::core::types::*;
pub use matching::{compose, find_closest, BoundarySelector, MatchResult, SelectionConfig};
pub use parsing::ParseError;
