//! Parser for pharokka-style GFF3 annotation files.
//!
//! Only CDS records are read. Columns used:
//!
//! | Column | Content |
//! |--------|---------|
//! | 1      | Contig ID |
//! | 3      | Record type (`CDS`) |
//! | 4, 5   | 1-based start/end |
//! | 9      | `;`-separated `key=value` attributes (`ID`, `product`) |
//!
//! Files ending in `.gz` or `.bgz` are decompressed transparently.

use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::core::feature::{AnnotatedFeatures, GeneFeature};
use crate::core::types::GeneRole;
use crate::parsing::ParseError;
use crate::utils::paths::is_gzipped;

/// Minimum number of tab-separated columns in a feature line
pub const MIN_GFF_COLUMNS: usize = 9;

/// Read an annotation file into memory, gunzipping `.gz` inputs
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or decompressed.
pub fn read_annotation_text(path: &Path) -> Result<String, ParseError> {
    if is_gzipped(path) {
        let file = std::fs::File::open(path)?;
        let mut text = String::new();
        MultiGzDecoder::new(file).read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Extract role-partitioned features from an annotation file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidCoordinate` if any CDS line has a non-integer start or end.
pub fn extract_features_from_file(path: &Path) -> Result<AnnotatedFeatures, ParseError> {
    let text = read_annotation_text(path)?;
    extract_features(&text)
}

/// Extract role-partitioned features from annotation text
///
/// Coordinates are parsed for every CDS line, recognized product or not, and a
/// single bad value fails the whole input.
///
/// # Errors
///
/// Returns `ParseError::InvalidCoordinate` on a malformed start or end column.
pub fn extract_features(text: &str) -> Result<AnnotatedFeatures, ParseError> {
    let mut features = AnnotatedFeatures::new();
    let mut cds_lines = 0usize;

    for (i, raw) in text.lines().enumerate() {
        if raw.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = raw.trim().split('\t').collect();
        if fields.len() < MIN_GFF_COLUMNS || fields[2] != "CDS" {
            continue;
        }
        cds_lines += 1;

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let start = parse_coordinate(fields[3], line_num, "start")?;
        let end = parse_coordinate(fields[4], line_num, "end")?;

        let attributes = parse_attributes(fields[8]);
        let Some(role) = attributes.product.and_then(GeneRole::from_product) else {
            continue;
        };

        features.push(GeneFeature {
            contig_id: fields[0].to_string(),
            feature_id: attributes.id.map(str::to_string),
            start,
            end,
            role,
        });
    }

    debug!(
        "Read {} CDS records: {} terminase, {} portal, {} integrase, {} endolysin",
        cds_lines,
        features.terminases.len(),
        features.portals.len(),
        features.integrases.len(),
        features.endolysins.len()
    );

    Ok(features)
}

fn parse_coordinate(value: &str, line: usize, column: &'static str) -> Result<i64, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidCoordinate {
            line,
            column,
            value: value.to_string(),
        })
}

/// The two attributes we care about from column 9
#[derive(Debug, Default, PartialEq, Eq)]
struct CdsAttributes<'a> {
    id: Option<&'a str>,
    product: Option<&'a str>,
}

/// Items that are not exactly one `key=value` pair are ignored; later keys win.
fn parse_attributes(column: &str) -> CdsAttributes<'_> {
    let mut attributes = CdsAttributes::default();

    for item in column.split(';') {
        let mut parts = item.split('=');
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };
        match key {
            "ID" => attributes.id = Some(value),
            "product" => attributes.product = Some(value),
            _ => {}
        }
    }

    attributes
}

/// Feature lines of one consecutive run of a single contig
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContigChunk {
    pub contig_id: String,
    pub lines: Vec<String>,
}

impl ContigChunk {
    /// Lines joined back into GFF text, one trailing newline per line
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Split a multi-contig annotation into consecutive runs of one contig each
///
/// Comment, directive, blank, and short lines are dropped. A contig whose
/// records are interleaved with another contig's produces one chunk per run.
#[must_use]
pub fn partition_by_contig(text: &str) -> Vec<ContigChunk> {
    let mut chunks: Vec<ContigChunk> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < MIN_GFF_COLUMNS {
            continue;
        }
        let contig_id = columns[0];

        match chunks.last_mut() {
            Some(chunk) if chunk.contig_id == contig_id => chunk.lines.push(line.to_string()),
            _ => chunks.push(ContigChunk {
                contig_id: contig_id.to_string(),
                lines: vec![line.to_string()],
            }),
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cds(contig: &str, start: &str, end: &str, attrs: &str) -> String {
        format!("{contig}\tpharokka\tCDS\t{start}\t{end}\t.\t+\t0\t{attrs}\n")
    }

    #[test]
    fn test_extract_features_by_role() {
        let mut gff = String::from("##gff-version 3\n");
        gff.push_str(&cds("c1", "1000", "2000", "ID=t1;product=terminase large subunit"));
        gff.push_str(&cds("c1", "3000", "4000", "ID=p1;product=portal protein"));
        gff.push_str(&cds("c1", "500", "900", "ID=i1;product=integrase"));
        gff.push_str(&cds("c1", "2200", "2600", "ID=e1;product=endolysin"));
        gff.push_str(&cds("c1", "5000", "5100", "ID=x1;product=hypothetical protein"));

        let features = extract_features(&gff).unwrap();
        assert_eq!(features.terminases.len(), 1);
        assert_eq!(features.portals.len(), 1);
        assert_eq!(features.integrases.len(), 1);
        assert_eq!(features.endolysins.len(), 1);

        let t = &features.terminases.as_slice()[0];
        assert_eq!(t.contig_id, "c1");
        assert_eq!(t.feature_id.as_deref(), Some("t1"));
        assert_eq!((t.start, t.end), (1000, 2000));
    }

    #[test]
    fn test_skips_non_cds_and_short_lines() {
        let gff = "c1\tpharokka\tgene\t1\t10\t.\t+\t0\tproduct=integrase\n\
                   c1\tpharokka\tCDS\t1\t10\n\
                   # c1\tpharokka\tCDS\t1\t10\t.\t+\t0\tproduct=integrase\n";
        let features = extract_features(gff).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn test_missing_product_contributes_nothing() {
        let gff = cds("c1", "1", "10", "ID=g1;note=integrase");
        let features = extract_features(&gff).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn test_malformed_coordinate_is_fatal_even_for_unrecognized_product() {
        let mut gff = cds("c1", "1", "10", "product=integrase");
        gff.push_str(&cds("c1", "12x", "20", "product=tail fiber"));

        let err = extract_features(&gff).unwrap_err();
        match err {
            ParseError::InvalidCoordinate { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "start");
                assert_eq!(value, "12x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_attribute_parsing_rules() {
        // Items with more than one '=' are ignored; later keys override earlier ones
        let attrs = parse_attributes("ID=a;product=x=y;product=integrase;ID=b;bare");
        assert_eq!(
            attrs,
            CdsAttributes {
                id: Some("b"),
                product: Some("integrase"),
            }
        );
    }

    #[test]
    fn test_absent_id_is_kept_as_none() {
        let gff = cds("c1", "1", "10", "product=endolysin");
        let features = extract_features(&gff).unwrap();
        assert!(features.endolysins[0].feature_id.is_none());
    }

    #[test]
    fn test_duplicate_anchors_collapse() {
        let line = cds("c1", "1", "10", "ID=t;product=terminase large subunit");
        let gff = format!("{line}{line}");
        let features = extract_features(&gff).unwrap();
        assert_eq!(features.terminases.len(), 1);
    }

    #[test]
    fn test_partition_by_contig_runs() {
        let mut gff = String::from("##gff-version 3\n##sequence-region c1 1 100\n\n");
        gff.push_str(&cds("c1", "1", "10", "product=integrase"));
        gff.push_str(&cds("c1", "20", "30", "product=endolysin"));
        gff.push_str(&cds("c2", "1", "10", "product=integrase"));
        gff.push_str("c2\tshort\tline\n");
        gff.push_str(&cds("c1", "40", "50", "product=integrase"));

        let chunks = partition_by_contig(&gff);
        let ids: Vec<&str> = chunks.iter().map(|c| c.contig_id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c1"]);
        assert_eq!(chunks[0].lines.len(), 2);
        assert_eq!(chunks[1].lines.len(), 1);
        assert!(chunks[0].to_text().ends_with("product=endolysin\n"));
    }

    #[test]
    fn test_read_gzip_annotation() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.gff.gz");
        let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        encoder
            .write_all(cds("c1", "1", "10", "product=integrase").as_bytes())
            .unwrap();
        encoder.finish().unwrap();

        let features = extract_features_from_file(&path).unwrap();
        assert_eq!(features.integrases.len(), 1);
    }
}
