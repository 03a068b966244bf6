//! Relationship markers
//!
//! The matrix encodes relations with four single-character sentinels. Only
//! two behavioural subsets are observed in practice, so that is all this
//! module models: which markers link a sub-assembly to a component, which
//! link a component to a parameter, and which link a defect to a
//! sub-assembly.

use crate::error::MatrixError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four relationship sentinels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// `ê`
    #[serde(rename = "ê")]
    ECircumflex,
    /// `è`
    #[serde(rename = "è")]
    EGrave,
    /// `ç`
    #[serde(rename = "ç")]
    CCedilla,
    /// `ª`
    #[serde(rename = "ª")]
    Ordinal,
}

impl Marker {
    /// All markers, in their conventional order
    pub const ALL: [Self; 4] = [Self::ECircumflex, Self::EGrave, Self::CCedilla, Self::Ordinal];

    /// Cell text for this marker
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ECircumflex => "ê",
            Self::EGrave => "è",
            Self::CCedilla => "ç",
            Self::Ordinal => "ª",
        }
    }

    /// Parse cell text by exact trimmed equality
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL.into_iter().find(|m| m.as_str() == text)
    }

    /// Links a component column to a parameter row (`è`, `ê`)
    #[inline]
    #[must_use]
    pub const fn links_parameter(self) -> bool {
        matches!(self, Self::EGrave | Self::ECircumflex)
    }

    /// Links a defect column to a sub-assembly row (`ç`)
    #[inline]
    #[must_use]
    pub const fn links_defect(self) -> bool {
        matches!(self, Self::CCedilla)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Marker {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| MatrixError::UnknownMarker(s.to_string()))
    }
}

/// Check whether text is exactly one of the marker strings
#[inline]
#[must_use]
pub fn is_marker_text(text: &str) -> bool {
    Marker::parse(text).is_some()
}

/// Named marker subsets used by the resolvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerClass {
    /// Any of the four markers: sub-assembly to component
    Any,
    /// `è` or `ê`: component to parameter
    ComponentParameter,
    /// `ç`: defect to sub-assembly
    DefectLink,
}

impl MarkerClass {
    /// Whether `marker` belongs to this subset
    #[inline]
    #[must_use]
    pub const fn contains(self, marker: Marker) -> bool {
        match self {
            Self::Any => true,
            Self::ComponentParameter => marker.links_parameter(),
            Self::DefectLink => marker.links_defect(),
        }
    }

    /// Whether a cell value holds a marker of this subset
    #[inline]
    #[must_use]
    pub fn matches(self, cell: Option<&str>) -> bool {
        cell.and_then(Marker::parse)
            .is_some_and(|marker| self.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact_after_trim() {
        assert_eq!(Marker::parse(" ç "), Some(Marker::CCedilla));
        assert_eq!(Marker::parse("ê"), Some(Marker::ECircumflex));
        assert_eq!(Marker::parse("çç"), None);
        assert_eq!(Marker::parse("e"), None);
        assert_eq!(Marker::parse("Ç"), None);
    }

    #[test]
    fn from_str_reports_unknown() {
        assert_eq!("ª".parse::<Marker>(), Ok(Marker::Ordinal));
        assert_eq!(
            "x".parse::<Marker>(),
            Err(MatrixError::UnknownMarker("x".to_string()))
        );
    }

    #[test]
    fn subsets() {
        for marker in Marker::ALL {
            assert!(MarkerClass::Any.contains(marker));
        }
        assert!(MarkerClass::ComponentParameter.contains(Marker::EGrave));
        assert!(MarkerClass::ComponentParameter.contains(Marker::ECircumflex));
        assert!(!MarkerClass::ComponentParameter.contains(Marker::CCedilla));
        assert!(!MarkerClass::ComponentParameter.contains(Marker::Ordinal));
        assert!(MarkerClass::DefectLink.contains(Marker::CCedilla));
        assert!(!MarkerClass::DefectLink.contains(Marker::EGrave));
    }

    #[test]
    fn class_matches_cells() {
        assert!(MarkerClass::Any.matches(Some("ª")));
        assert!(!MarkerClass::Any.matches(None));
        assert!(!MarkerClass::Any.matches(Some("Bolt")));
        assert!(MarkerClass::DefectLink.matches(Some("ç")));
        assert!(!MarkerClass::DefectLink.matches(Some("ê")));
    }

    #[test]
    fn marker_text_detection() {
        assert!(is_marker_text("è"));
        assert!(!is_marker_text(""));
        assert!(!is_marker_text("Housing"));
    }

    #[test]
    fn display_round_trips_text() {
        for marker in Marker::ALL {
            assert_eq!(marker.to_string().parse::<Marker>(), Ok(marker));
        }
    }
}
