//! Output file naming for each pipeline stage.
//!
//! | Stage   | Input                | Output                                 |
//! |---------|----------------------|----------------------------------------|
//! | split   | `sample.gff`         | `<dir>/pharokka_<n>.gff`               |
//! | compose | `pharokka_1.gff`     | `<dir>/pharokka_1_output.txt`          |
//! | select  | `pharokka_1_output.txt` | `pharokka_1_output_prophage_boundaries.tsv` (same directory) |

use std::path::{Path, PathBuf};

/// Prefix of the per-contig files written by the splitter
pub const SPLIT_FILE_PREFIX: &str = "pharokka_";

/// Suffix appended to the input stem for the boundary-statement artifact
pub const STATEMENTS_SUFFIX: &str = "_output.txt";

/// Suffix appended to the artifact stem for the selected boundary
pub const BOUNDARIES_SUFFIX: &str = "_prophage_boundaries.tsv";

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// File name with its final extension removed; a compression extension is
/// stripped first, so `sample.gff.gz` gives `sample`.
#[must_use]
pub fn file_stem(path: &Path) -> String {
    let stem_of = |p: &Path| {
        p.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    if is_gzipped(path) {
        stem_of(Path::new(&stem_of(path)))
    } else {
        stem_of(path)
    }
}

/// Where the composer writes the statements for `input`
#[must_use]
pub fn statements_path(input: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(format!("{}{STATEMENTS_SUFFIX}", file_stem(input)))
}

/// Where the selector writes its answer, next to the artifact
#[must_use]
pub fn boundaries_path(artifact: &Path) -> PathBuf {
    let name = format!("{}{BOUNDARIES_SUFFIX}", file_stem(artifact));
    match artifact.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Per-contig file `n` (1-based) written by the splitter
#[must_use]
pub fn split_path(output_dir: &Path, n: usize) -> PathBuf {
    output_dir.join(format!("{SPLIT_FILE_PREFIX}{n}.gff"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_path() {
        let path = statements_path(Path::new("in/pharokka_1.gff"), Path::new("out"));
        assert_eq!(path, PathBuf::from("out/pharokka_1_output.txt"));

        let gz = statements_path(Path::new("sample.gff.gz"), Path::new("out"));
        assert_eq!(gz, PathBuf::from("out/sample_output.txt"));
    }

    #[test]
    fn test_boundaries_path_is_adjacent() {
        let path = boundaries_path(Path::new("out/pharokka_1_output.txt"));
        assert_eq!(
            path,
            PathBuf::from("out/pharokka_1_output_prophage_boundaries.tsv")
        );

        let bare = boundaries_path(Path::new("artifact.txt"));
        assert_eq!(bare, PathBuf::from("artifact_prophage_boundaries.tsv"));
    }

    #[test]
    fn test_split_path() {
        assert_eq!(
            split_path(Path::new("parts"), 3),
            PathBuf::from("parts/pharokka_3.gff")
        );
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("a.GFF.GZ")));
        assert!(is_gzipped(Path::new("a.gff.bgz")));
        assert!(!is_gzipped(Path::new("a.gff")));
    }
}
