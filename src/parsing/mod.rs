//! Parsers for the text formats that flow through the pipeline.
//!
//! This module provides parsers for:
//!
//! - **Annotation files** ([`gff`]): pharokka-style GFF3, reduced to the four
//!   gene roles that matter for prophage boundaries; also splits multi-contig
//!   files into per-contig runs
//! - **Boundary statements** ([`statements`]): the human-readable intermediate
//!   artifact written by the composer and read back by the selector
//! - **Assembly node tokens** ([`nodes`]): `NODE_<n>_length_<n>_cov_<n>||full`
//!   style identifiers found anywhere in free text
//!
//! ## Example
//!
//! ```rust
//! use prophage_bounds::parsing::gff::extract_features;
//!
//! let gff = "c1\tpharokka\tCDS\t1000\t2000\t.\t+\t0\tID=g1;product=terminase large subunit\n";
//! let features = extract_features(gff).unwrap();
//! assert_eq!(features.terminases.len(), 1);
//! ```

use thiserror::Error;

pub mod gff;
pub mod nodes;
pub mod statements;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {column} coordinate on line {line}: '{value}'")]
    InvalidCoordinate {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
