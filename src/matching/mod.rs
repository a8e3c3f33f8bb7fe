//! Boundary derivation: nearest-marker matching, span composition, and selection.
//!
//! This module provides the core algorithms:
//!
//! - [`find_closest`]: Nearest marker to an anchor by end-to-end distance
//! - [`compose`]: One [`ComposedBoundary`](crate::core::ComposedBoundary) per anchor gene
//! - [`BoundarySelector`]: Filters spans by length and picks the largest
//!
//! ## Algorithm
//!
//! 1. **Anchors**: every terminase large subunit, then every portal protein,
//!    in first-seen order, each pass numbered from 1
//! 2. **Markers**: the closest integrase and the closest endolysin, where
//!    distance is `|anchor.end - marker.end|` and the first minimum wins
//! 3. **Span**: `min` of the two marker starts to `max` of the two marker ends;
//!    a missing marker role is replaced by the anchor itself
//! 4. **Selection**: drop spans with `|end - start|` over the maximum
//!    (60 000 bp by default), keep the largest signed `end - start`, pair it
//!    with the first assembly node token in the artifact
//!
//! ## Example
//!
//! ```rust
//! use prophage_bounds::matching::{compose, BoundarySelector, SelectionConfig};
//! use prophage_bounds::parsing::gff::extract_features;
//! use prophage_bounds::parsing::statements::render_statements;
//!
//! let gff = "\
//! NODE_3_length_50000_cov_10.5||full\tp\tCDS\t1000\t2000\t.\t+\t0\tproduct=terminase large subunit
//! NODE_3_length_50000_cov_10.5||full\tp\tCDS\t500\t900\t.\t+\t0\tproduct=integrase
//! NODE_3_length_50000_cov_10.5||full\tp\tCDS\t2200\t2600\t.\t+\t0\tproduct=endolysin
//! ";
//! let features = extract_features(gff).unwrap();
//! let artifact = render_statements(&compose(&features));
//!
//! let selector = BoundarySelector::new(SelectionConfig::default());
//! let selection = selector.select_text(&artifact).unwrap();
//! assert_eq!(selection.to_string(), "NODE_3_length_50000_cov_10.5||full\t500\t2600");
//! ```

pub mod composer;
pub mod nearest;
pub mod selector;

pub use composer::compose;
pub use nearest::{find_closest, MatchResult};
pub use selector::{BoundarySelector, SelectionConfig, DEFAULT_MAX_SPAN};
