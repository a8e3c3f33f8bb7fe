use tracing::{debug, info};

use crate::core::boundary::{BoundaryCandidate, NoSelectionReason, SelectedBoundary, Selection};
use crate::core::types::NodeId;
use crate::parsing::nodes::first_node_id;
use crate::parsing::statements::parse_boundary_statements;
use crate::parsing::ParseError;

/// Default maximum prophage span in bp (inclusive)
pub const DEFAULT_MAX_SPAN: u64 = 60_000;

/// Configuration for boundary selection
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SelectionConfig {
    /// Spans with `|end - start|` above this are never selected
    pub max_span: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_span: DEFAULT_MAX_SPAN,
        }
    }
}

/// Picks one boundary out of all candidates for a contig
pub struct BoundarySelector {
    config: SelectionConfig,
}

impl BoundarySelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Whether a candidate passes the span filter
    #[must_use]
    pub fn within_max_span(&self, candidate: &BoundaryCandidate) -> bool {
        candidate.abs_span() <= self.config.max_span
    }

    /// Largest surviving candidate by signed `end - start`.
    ///
    /// The filter uses the absolute span but the ranking does not, so a
    /// reversed pair ranks below every forward pair. Ties keep the earliest
    /// candidate.
    pub fn best_candidate<'a>(
        &self,
        candidates: &'a [BoundaryCandidate],
    ) -> Result<&'a BoundaryCandidate, NoSelectionReason> {
        if candidates.is_empty() {
            return Err(NoSelectionReason::NoCandidates);
        }

        let mut best: Option<&BoundaryCandidate> = None;
        for candidate in candidates.iter().filter(|c| self.within_max_span(c)) {
            match best {
                Some(b) if candidate.signed_span() <= b.signed_span() => {}
                _ => best = Some(candidate),
            }
        }

        best.ok_or(NoSelectionReason::AllExceedMaxSpan)
    }

    /// Select from structured candidates, pairing the winner with `node`
    #[must_use]
    pub fn select(&self, candidates: &[BoundaryCandidate], node: Option<NodeId>) -> Selection {
        let best = match self.best_candidate(candidates) {
            Ok(best) => best,
            Err(reason) => {
                info!("No boundary selected: {reason}");
                return Selection::NoValidPair { reason };
            }
        };

        let Some(node) = node else {
            info!("No boundary selected: {}", NoSelectionReason::NoNodeToken);
            return Selection::NoValidPair {
                reason: NoSelectionReason::NoNodeToken,
            };
        };

        debug!(
            "Selected {} ({} to {}) on {}",
            best.identifier, best.start, best.end, node
        );
        Selection::Found(SelectedBoundary {
            node,
            identifier: best.identifier.clone(),
            start: best.start,
            end: best.end,
        })
    }

    /// Select from a boundary-statement artifact.
    ///
    /// The node is the first node token anywhere in `text`, independent of
    /// which statement won.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` if a statement coordinate is out of range.
    pub fn select_text(&self, text: &str) -> Result<Selection, ParseError> {
        let candidates = parse_boundary_statements(text)?;
        debug!("Parsed {} boundary statements", candidates.len());
        Ok(self.select(&candidates, first_node_id(text)))
    }
}

impl Default for BoundarySelector {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> Option<NodeId> {
        Some(NodeId::new("NODE_1_length_100_cov_5||full"))
    }

    #[test]
    fn test_filter_is_inclusive() {
        let selector = BoundarySelector::default();
        let at_limit = BoundaryCandidate::new("terminase 1", 0, 60_000);
        let over = BoundaryCandidate::new("terminase 2", 0, 60_001);
        assert!(selector.within_max_span(&at_limit));
        assert!(!selector.within_max_span(&over));
    }

    #[test]
    fn test_oversized_only_candidate_degrades_to_sentinel() {
        let selector = BoundarySelector::default();
        let candidates = vec![BoundaryCandidate::new("portal protein 1", 10, 100_000)];
        assert_eq!(
            selector.select(&candidates, node()),
            Selection::NoValidPair {
                reason: NoSelectionReason::AllExceedMaxSpan
            }
        );
    }

    #[test]
    fn test_signed_range_ranks_reversed_pairs_low() {
        let selector = BoundarySelector::default();
        let candidates = vec![
            BoundaryCandidate::new("terminase 1", 5000, 3000),
            BoundaryCandidate::new("terminase 2", 100, 600),
        ];
        let best = selector.best_candidate(&candidates).unwrap();
        assert_eq!(best.identifier, "terminase 2");
    }

    #[test]
    fn test_reversed_pair_still_selectable_when_alone() {
        let selector = BoundarySelector::default();
        let candidates = vec![BoundaryCandidate::new("terminase 1", 5000, 3000)];
        let selection = selector.select(&candidates, node());
        assert_eq!(selection.to_string(), "NODE_1_length_100_cov_5||full\t5000\t3000");
    }

    #[test]
    fn test_largest_valid_wins_and_first_breaks_ties() {
        let selector = BoundarySelector::default();
        let candidates = vec![
            BoundaryCandidate::new("terminase 1", 0, 100_000),
            BoundaryCandidate::new("terminase 2", 1000, 11_000),
            BoundaryCandidate::new("portal protein 1", 5000, 15_000),
            BoundaryCandidate::new("portal protein 2", 0, 500),
        ];
        let best = selector.best_candidate(&candidates).unwrap();
        assert_eq!(best.identifier, "terminase 2");
    }

    #[test]
    fn test_no_node_token_gives_sentinel() {
        let selector = BoundarySelector::default();
        let candidates = vec![BoundaryCandidate::new("terminase 1", 1, 10)];
        assert_eq!(
            selector.select(&candidates, None),
            Selection::NoValidPair {
                reason: NoSelectionReason::NoNodeToken
            }
        );
    }

    #[test]
    fn test_no_candidates() {
        let selector = BoundarySelector::default();
        let selection = selector.select_text("nothing to see here").unwrap();
        assert_eq!(
            selection,
            Selection::NoValidPair {
                reason: NoSelectionReason::NoCandidates
            }
        );
    }

    #[test]
    fn test_custom_max_span() {
        let selector = BoundarySelector::new(SelectionConfig { max_span: 1000 });
        let candidates = vec![
            BoundaryCandidate::new("terminase 1", 0, 5000),
            BoundaryCandidate::new("terminase 2", 0, 900),
        ];
        assert_eq!(
            selector.best_candidate(&candidates).unwrap().identifier,
            "terminase 2"
        );
    }

    #[test]
    fn test_select_text_pairs_with_first_node() {
        let text = "Closest integrase for terminase 1: NODE_9_length_5_cov_1||full . 500 900\n\
                    Closest endolysin for terminase 1: NODE_3_length_50000_cov_10.5||full . 2200 2600\n\
                    Boundaries for terminase 1: 500 to 2600\n";
        let selection = BoundarySelector::default().select_text(text).unwrap();
        assert_eq!(selection.to_line(), "NODE_9_length_5_cov_1||full\t500\t2600\n");
    }
}
