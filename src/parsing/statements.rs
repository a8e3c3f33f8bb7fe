//! Boundary-statement artifact: rendering and parsing.
//!
//! Three lines are written per anchor:
//!
//! ```text
//! Closest integrase for <label> <n>: <contig> <id> <start> <end>
//! Closest endolysin for <label> <n>: <contig> <id> <start> <end>
//! Boundaries for <label> <n>: <start> to <end>
//! ```
//!
//! Only the `Boundaries for` form is parsed back; the descriptor lines are for
//! people reading the file (and carry the contig names that node tokens are
//! pulled from).

use std::io::Write;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::boundary::{BoundaryCandidate, ComposedBoundary};
use crate::core::feature::GeneFeature;
use crate::parsing::ParseError;

const BOUNDARY_PATTERN: &str = r"Boundaries for ([^:]+): ([0-9]+) to ([0-9]+)";

fn boundary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BOUNDARY_PATTERN).expect("boundary pattern is valid"))
}

fn descriptor(feature: &GeneFeature) -> String {
    format!(
        "{} {} {} {}",
        feature.contig_id,
        feature.display_id(),
        feature.start,
        feature.end
    )
}

/// Write the three statement lines for each composed boundary
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statements<W: Write>(
    out: &mut W,
    boundaries: &[ComposedBoundary],
) -> std::io::Result<()> {
    for b in boundaries {
        let label = b.kind.label();
        let n = b.ordinal;
        writeln!(
            out,
            "Closest integrase for {label} {n}: {}",
            descriptor(&b.closest_integrase)
        )?;
        writeln!(
            out,
            "Closest endolysin for {label} {n}: {}",
            descriptor(&b.closest_endolysin)
        )?;
        writeln!(
            out,
            "Boundaries for {label} {n}: {} to {}",
            b.candidate.start, b.candidate.end
        )?;
    }
    Ok(())
}

/// Render the statement artifact to a string
#[must_use]
pub fn render_statements(boundaries: &[ComposedBoundary]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_statements(&mut buf, boundaries);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Extract every `Boundaries for ...` statement from `text`, in order
///
/// The pattern is applied to the whole text, so statements need not start a
/// line.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a coordinate does not fit in an `i64`.
pub fn parse_boundary_statements(text: &str) -> Result<Vec<BoundaryCandidate>, ParseError> {
    boundary_regex()
        .captures_iter(text)
        .map(|caps| {
            let identifier = &caps[1];
            let start = parse_statement_coordinate(&caps[2], identifier)?;
            let end = parse_statement_coordinate(&caps[3], identifier)?;
            Ok(BoundaryCandidate::new(identifier, start, end))
        })
        .collect()
}

fn parse_statement_coordinate(value: &str, identifier: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Coordinate out of range in boundary for '{identifier}': {value}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{AnchorKind, GeneRole};

    fn composed() -> ComposedBoundary {
        let anchor = GeneFeature::new("c1", 1000, 2000, GeneRole::TerminaseLargeSubunit).with_id("t1");
        ComposedBoundary {
            kind: AnchorKind::Terminase,
            ordinal: 1,
            closest_integrase: GeneFeature::new("c1", 500, 900, GeneRole::Integrase).with_id("i1"),
            integrase_distance: Some(1100),
            closest_endolysin: anchor.clone(),
            endolysin_distance: None,
            anchor,
            candidate: BoundaryCandidate::new("terminase 1", 500, 2000),
        }
    }

    #[test]
    fn test_render_three_lines_per_anchor() {
        let text = render_statements(&[composed()]);
        assert_eq!(
            text,
            "Closest integrase for terminase 1: c1 i1 500 900\n\
             Closest endolysin for terminase 1: c1 t1 1000 2000\n\
             Boundaries for terminase 1: 500 to 2000\n"
        );
    }

    #[test]
    fn test_parse_statements_in_order() {
        let text = "Closest integrase for terminase 1: c1 i1 500 900\n\
                    Boundaries for terminase 1: 500 to 2600\n\
                    Boundaries for portal protein 1: 10 to 100000\n";
        let parsed = parse_boundary_statements(text).unwrap();
        assert_eq!(
            parsed,
            vec![
                BoundaryCandidate::new("terminase 1", 500, 2600),
                BoundaryCandidate::new("portal protein 1", 10, 100_000),
            ]
        );
    }

    #[test]
    fn test_parse_ignores_negative_and_malformed_lines() {
        let text = "Boundaries for terminase 1: -5 to 10\nBoundaries for x 1 10 to 20\n";
        assert!(parse_boundary_statements(text).unwrap().is_empty());
    }

    #[test]
    fn test_parse_overflow_is_an_error() {
        let text = "Boundaries for terminase 1: 1 to 99999999999999999999999\n";
        assert!(matches!(
            parse_boundary_statements(text),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_render_then_parse_recovers_candidate() {
        let b = composed();
        let parsed = parse_boundary_statements(&render_statements(&[b.clone()])).unwrap();
        assert_eq!(parsed, vec![b.candidate]);
    }
}
