//! Extraction of assembly node identifiers from free text.
//!
//! Two forms are recognized:
//!
//! ```text
//! NODE_<n>_length_<n>_cov_<cov>||full
//! NODE_<n>_length_<n>_cov_<cov>||<n>_partial
//! ```
//!
//! `<cov>` is an integer or a decimal such as `10.5`.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::types::NodeId;

const NODE_PATTERN: &str =
    r"NODE_[0-9]+_length_[0-9]+_cov_[0-9]+(?:\.[0-9]+)?\|\|(?:full|[0-9]+_partial)";

fn node_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NODE_PATTERN).expect("node pattern is valid"))
}

/// All node tokens in `text`, in order of appearance
#[must_use]
pub fn extract_node_ids(text: &str) -> Vec<NodeId> {
    node_regex()
        .find_iter(text)
        .map(|m| NodeId::new(m.as_str()))
        .collect()
}

/// First node token in `text`, if any
#[must_use]
pub fn first_node_id(text: &str) -> Option<NodeId> {
    node_regex().find(text).map(|m| NodeId::new(m.as_str()))
}
