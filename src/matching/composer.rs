use tracing::debug;

use crate::core::boundary::{BoundaryCandidate, ComposedBoundary};
use crate::core::feature::{AnnotatedFeatures, GeneFeature};
use crate::core::types::AnchorKind;
use crate::matching::nearest::find_closest;

/// Derive the span around one anchor from its closest markers.
///
/// A marker role with no candidates on the contig is replaced by the anchor,
/// so an anchor with no markers at all yields its own coordinates.
#[must_use]
pub fn compose_one(
    kind: AnchorKind,
    ordinal: usize,
    anchor: &GeneFeature,
    integrases: &[GeneFeature],
    endolysins: &[GeneFeature],
) -> ComposedBoundary {
    let integrase = find_closest(anchor, integrases);
    let endolysin = find_closest(anchor, endolysins);

    let int_feature = integrase.or_anchor(anchor);
    let endo_feature = endolysin.or_anchor(anchor);

    let start = int_feature.start.min(endo_feature.start);
    let end = int_feature.end.max(endo_feature.end);

    ComposedBoundary {
        kind,
        ordinal,
        anchor: anchor.clone(),
        closest_integrase: int_feature.clone(),
        integrase_distance: integrase.found_distance(),
        closest_endolysin: endo_feature.clone(),
        endolysin_distance: endolysin.found_distance(),
        candidate: BoundaryCandidate::new(format!("{} {ordinal}", kind.label()), start, end),
    }
}

/// Compose a boundary for every anchor: all terminases first, then all portal
/// proteins, each pass numbered from 1.
#[must_use]
pub fn compose(features: &AnnotatedFeatures) -> Vec<ComposedBoundary> {
    let passes = [
        (AnchorKind::Terminase, features.terminases.as_slice()),
        (AnchorKind::PortalProtein, features.portals.as_slice()),
    ];

    let mut boundaries = Vec::with_capacity(features.anchor_count());
    for (kind, anchors) in passes {
        for (i, anchor) in anchors.iter().enumerate() {
            let composed = compose_one(
                kind,
                i + 1,
                anchor,
                &features.integrases,
                &features.endolysins,
            );
            debug!(
                "Boundaries for {}: {} to {}",
                composed.candidate.identifier, composed.candidate.start, composed.candidate.end
            );
            boundaries.push(composed);
        }
    }

    boundaries
}
