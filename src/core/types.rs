use serde::{Deserialize, Serialize};

/// Biological role of an annotated CDS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneRole {
    TerminaseLargeSubunit,
    PortalProtein,
    Integrase,
    Endolysin,
}

impl GeneRole {
    /// Map a `product` attribute value to a role.
    ///
    /// Matching is exact and case-sensitive; anything else is not a role we track.
    #[must_use]
    pub fn from_product(product: &str) -> Option<Self> {
        match product {
            "terminase large subunit" => Some(Self::TerminaseLargeSubunit),
            "portal protein" => Some(Self::PortalProtein),
            "integrase" => Some(Self::Integrase),
            "endolysin" => Some(Self::Endolysin),
            _ => None,
        }
    }

    /// The product string this role is recognized from
    #[must_use]
    pub fn product(self) -> &'static str {
        match self {
            Self::TerminaseLargeSubunit => "terminase large subunit",
            Self::PortalProtein => "portal protein",
            Self::Integrase => "integrase",
            Self::Endolysin => "endolysin",
        }
    }

    /// Anchor roles seed a prophage region
    #[must_use]
    pub fn is_anchor(self) -> bool {
        matches!(self, Self::TerminaseLargeSubunit | Self::PortalProtein)
    }
}

impl std::fmt::Display for GeneRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.product())
    }
}

/// Which anchor pass produced a boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    Terminase,
    PortalProtein,
}

impl AnchorKind {
    /// Label used in boundary statements ("terminase", "portal protein")
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Terminase => "terminase",
            Self::PortalProtein => "portal protein",
        }
    }
}

impl std::fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Assembly node identifier, e.g. `NODE_3_length_50000_cov_10.5||full`
///
/// Opaque: it only names which assembly node a boundary is reported against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product_exact_match_only() {
        assert_eq!(
            GeneRole::from_product("terminase large subunit"),
            Some(GeneRole::TerminaseLargeSubunit)
        );
        assert_eq!(GeneRole::from_product("endolysin"), Some(GeneRole::Endolysin));
        assert_eq!(GeneRole::from_product("Integrase"), None);
        assert_eq!(GeneRole::from_product("terminase small subunit"), None);
        assert_eq!(GeneRole::from_product("portal protein "), None);
    }

    #[test]
    fn test_product_roundtrips_through_from_product() {
        for role in [
            GeneRole::TerminaseLargeSubunit,
            GeneRole::PortalProtein,
            GeneRole::Integrase,
            GeneRole::Endolysin,
        ] {
            assert_eq!(GeneRole::from_product(role.product()), Some(role));
        }
    }

    #[test]
    fn test_anchor_labels() {
        assert_eq!(AnchorKind::Terminase.to_string(), "terminase");
        assert_eq!(AnchorKind::PortalProtein.to_string(), "portal protein");
        assert!(GeneRole::PortalProtein.is_anchor());
        assert!(!GeneRole::Integrase.is_anchor());
    }
}
