use crate::core::feature::GeneFeature;

/// Outcome of a nearest-marker search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The closest candidate, `None` when there were no candidates
    pub feature: Option<&'a GeneFeature>,

    /// Distance to `feature`; `u64::MAX` when there is no match
    pub distance: u64,
}

impl<'a> MatchResult<'a> {
    /// A search over zero candidates
    #[must_use]
    pub fn empty() -> Self {
        Self {
            feature: None,
            distance: u64::MAX,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.feature.is_none()
    }

    /// The matched feature, or `anchor` when nothing matched
    #[must_use]
    pub fn or_anchor(&self, anchor: &'a GeneFeature) -> &'a GeneFeature {
        self.feature.unwrap_or(anchor)
    }

    /// Distance as an option, `None` when nothing matched
    #[must_use]
    pub fn found_distance(&self) -> Option<u64> {
        self.feature.map(|_| self.distance)
    }
}

/// End-to-end distance between an anchor and a candidate marker
#[must_use]
pub fn end_distance(anchor: &GeneFeature, candidate: &GeneFeature) -> u64 {
    anchor.end.abs_diff(candidate.end)
}

/// Find the candidate whose end lies closest to the anchor's end.
///
/// Candidates are scanned in the given order and only a strictly smaller
/// distance replaces the current best, so the first of several equally close
/// candidates wins. Pass candidates in annotation order for reproducible ties.
#[must_use]
pub fn find_closest<'a>(anchor: &GeneFeature, candidates: &'a [GeneFeature]) -> MatchResult<'a> {
    let mut best = MatchResult::empty();

    for candidate in candidates {
        let distance = end_distance(anchor, candidate);
        if best.feature.is_none() || distance < best.distance {
            best = MatchResult {
                feature: Some(candidate),
                distance,
            };
        }
    }

    best
}
