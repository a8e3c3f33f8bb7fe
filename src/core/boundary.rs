use serde::{Deserialize, Serialize};

use crate::core::feature::GeneFeature;
use crate::core::types::{AnchorKind, NodeId};

/// Line written when no boundary could be selected
pub const NO_VALID_PAIR_MESSAGE: &str = "No valid coordinate pairs found within the distance limit.";

/// A candidate prophage span derived from one anchor gene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryCandidate {
    /// Anchor label plus ordinal, e.g. "terminase 1" or "portal protein 2"
    pub identifier: String,
    pub start: i64,
    pub end: i64,
}

impl BoundaryCandidate {
    pub fn new(identifier: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            identifier: identifier.into(),
            start,
            end,
        }
    }

    /// Signed range `end - start`; negative when the pair is mis-ordered
    #[must_use]
    pub fn signed_span(&self) -> i64 {
        self.end - self.start
    }

    /// Absolute distance between the two coordinates
    #[must_use]
    pub fn abs_span(&self) -> u64 {
        self.end.abs_diff(self.start)
    }
}

/// Everything the composer derived for one anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedBoundary {
    pub kind: AnchorKind,

    /// 1-based position of the anchor within its pass
    pub ordinal: usize,

    pub anchor: GeneFeature,

    /// Closest integrase, or the anchor itself when the contig has none
    pub closest_integrase: GeneFeature,

    /// End-to-end distance to the integrase; `None` when the anchor stood in
    pub integrase_distance: Option<u64>,

    /// Closest endolysin, or the anchor itself when the contig has none
    pub closest_endolysin: GeneFeature,

    /// End-to-end distance to the endolysin; `None` when the anchor stood in
    pub endolysin_distance: Option<u64>,

    pub candidate: BoundaryCandidate,
}

/// The chosen boundary for a contig
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedBoundary {
    pub node: NodeId,

    /// Identifier of the statement the span came from
    pub identifier: String,
    pub start: i64,
    pub end: i64,
}

/// Why no boundary was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoSelectionReason {
    /// The input held no boundary statements
    NoCandidates,
    /// Every candidate exceeded the maximum span
    AllExceedMaxSpan,
    /// A span survived but no assembly node token was found
    NoNodeToken,
}

impl std::fmt::Display for NoSelectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "no boundary statements found"),
            Self::AllExceedMaxSpan => write!(f, "all boundaries exceed the maximum span"),
            Self::NoNodeToken => write!(f, "no assembly node identifier found"),
        }
    }
}

/// Final answer for one contig
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Selection {
    Found(SelectedBoundary),
    NoValidPair { reason: NoSelectionReason },
}

impl Selection {
    #[must_use]
    pub fn boundary(&self) -> Option<&SelectedBoundary> {
        match self {
            Self::Found(b) => Some(b),
            Self::NoValidPair { .. } => None,
        }
    }

    /// The single output line, newline included
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found(b) => write!(f, "{}\t{}\t{}", b.node, b.start, b.end),
            Self::NoValidPair { .. } => write!(f, "{NO_VALID_PAIR_MESSAGE}"),
        }
    }
}
