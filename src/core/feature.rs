use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::types::GeneRole;

/// A single annotated CDS with a recognized role
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneFeature {
    /// Sequence the feature lies on (GFF column 1)
    pub contig_id: String,

    /// `ID` attribute, if the record carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<String>,

    /// 1-based inclusive start (GFF column 4)
    pub start: i64,

    /// 1-based inclusive end (GFF column 5)
    pub end: i64,

    pub role: GeneRole,
}

impl GeneFeature {
    pub fn new(contig_id: impl Into<String>, start: i64, end: i64, role: GeneRole) -> Self {
        Self {
            contig_id: contig_id.into(),
            feature_id: None,
            start,
            end,
            role,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.feature_id = Some(id.into());
        self
    }

    /// Feature ID for display, `.` when absent (GFF's empty-value convention)
    #[must_use]
    pub fn display_id(&self) -> &str {
        self.feature_id.as_deref().unwrap_or(".")
    }
}

/// Insertion-ordered set of anchor features.
///
/// Duplicate records (same contig, ID, start, end) collapse to the first
/// occurrence, and iteration follows first-seen input order so anchor
/// numbering is reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct AnchorSet {
    order: Vec<GeneFeature>,
    seen: HashSet<GeneFeature>,
}

impl AnchorSet {
    /// Insert a feature; returns false if it was already present
    pub fn insert(&mut self, feature: GeneFeature) -> bool {
        if self.seen.contains(&feature) {
            return false;
        }
        self.seen.insert(feature.clone());
        self.order.push(feature);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneFeature> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[GeneFeature] {
        &self.order
    }
}

impl<'a> IntoIterator for &'a AnchorSet {
    type Item = &'a GeneFeature;
    type IntoIter = std::slice::Iter<'a, GeneFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Role-partitioned features extracted from one contig's annotation
#[derive(Debug, Clone, Default)]
pub struct AnnotatedFeatures {
    /// Terminase large subunit anchors (deduplicated)
    pub terminases: AnchorSet,

    /// Portal protein anchors (deduplicated)
    pub portals: AnchorSet,

    /// Integrase markers in input order, duplicates kept
    pub integrases: Vec<GeneFeature>,

    /// Endolysin markers in input order, duplicates kept
    pub endolysins: Vec<GeneFeature>,
}

impl AnnotatedFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a feature into the collection for its role
    pub fn push(&mut self, feature: GeneFeature) {
        match feature.role {
            GeneRole::TerminaseLargeSubunit => {
                self.terminases.insert(feature);
            }
            GeneRole::PortalProtein => {
                self.portals.insert(feature);
            }
            GeneRole::Integrase => self.integrases.push(feature),
            GeneRole::Endolysin => self.endolysins.push(feature),
        }
    }

    /// Number of anchor features (terminases + portals)
    pub fn anchor_count(&self) -> usize {
        self.terminases.len() + self.portals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchor_count() == 0 && self.integrases.is_empty() && self.endolysins.is_empty()
    }
}
