//! Core data types for prophage boundary detection.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`GeneFeature`]: One annotated CDS with a recognized role and its coordinates
//! - [`AnnotatedFeatures`]: The four role collections extracted from one contig
//! - [`BoundaryCandidate`]: A span derived from one anchor gene
//! - [`Selection`]: The single boundary chosen for a contig, or its absence
//! - [`GeneRole`], [`AnchorKind`], [`NodeId`]: Classification and identifier types
//!
//! ## Gene Roles
//!
//! Only four products are recognized, matched exactly against the `product`
//! attribute of a CDS record:
//!
//! | Product                   | Role                    | Used as |
//! |---------------------------|-------------------------|---------|
//! | `terminase large subunit` | `TerminaseLargeSubunit` | anchor  |
//! | `portal protein`          | `PortalProtein`         | anchor  |
//! | `integrase`               | `Integrase`             | marker  |
//! | `endolysin`               | `Endolysin`             | marker  |
//!
//! Coordinates are 1-based and inclusive, as in GFF3.

pub mod boundary;
pub mod feature;
pub mod types;

pub use boundary::{BoundaryCandidate, ComposedBoundary, NoSelectionReason, Selection};
pub use feature::{AnnotatedFeatures, GeneFeature};
pub use types::{AnchorKind, GeneRole, NodeId};
