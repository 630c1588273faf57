// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource URIs and the shape matcher.
//!
//! A [`PetUri`] is a structured `scheme://authority/path[/id]` address naming
//! either the whole pet collection or one record. The [`UriMatcher`] holds an
//! immutable ordered list of `(pattern, kind)` routes, built once at
//! initialization and consulted read-only thereafter.

use std::fmt;
use std::str::FromStr;

use crate::contract;
use crate::error::ShelterError;

/// A parsed resource URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PetUri {
    scheme: String,
    authority: String,
    segments: Vec<String>,
}

impl PetUri {
    /// The URI addressing the whole pet collection.
    pub fn collection() -> Self {
        PetUri {
            scheme: contract::SCHEME.to_string(),
            authority: contract::AUTHORITY.to_string(),
            segments: vec![contract::PATH_PETS.to_string()],
        }
    }

    /// The URI addressing the single record with the given row id.
    pub fn record(id: i64) -> Self {
        let mut uri = Self::collection();
        uri.segments.push(id.to_string());
        uri
    }

    /// Parse a `scheme://authority/seg[/seg…]` string.
    ///
    /// Parsing only checks structural well-formedness; whether the address
    /// names a known shape is the matcher's job.
    pub fn parse(input: &str) -> Result<Self, ShelterError> {
        let (scheme, rest) = input
            .split_once("://")
            .ok_or_else(|| ShelterError::unsupported_uri("parse", input))?;
        let mut parts = rest.split('/');
        let authority = parts.next().unwrap_or_default();
        if scheme.is_empty() || authority.is_empty() {
            return Err(ShelterError::unsupported_uri("parse", input));
        }
        let segments = parts
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Ok(PetUri {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            segments,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The numeric id suffix, if the last path segment is one.
    pub fn record_id(&self) -> Option<i64> {
        if self.segments.len() < 2 {
            return None;
        }
        self.segments.last()?.parse().ok()
    }

    /// Whether this URI equals `other` or is an ancestor of it.
    ///
    /// The collection URI covers every record URI beneath it; a record URI
    /// covers only itself. Used for change-notification fan-out.
    pub fn covers(&self, other: &PetUri) -> bool {
        self.scheme == other.scheme
            && self.authority == other.authority
            && self.segments.len() <= other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| a == b)
    }
}

impl fmt::Display for PetUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for PetUri {
    type Err = ShelterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetUri::parse(s)
    }
}

/// The two addressable shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriKind {
    /// The whole pet collection.
    PetCollection,
    /// A single record, addressed by numeric id suffix.
    PetItem,
}

/// One registered route: an authority plus a path pattern.
///
/// A pattern segment of `#` matches any non-empty all-digit segment; every
/// other segment matches literally.
#[derive(Debug, Clone)]
pub struct UriPattern {
    authority: String,
    segments: Vec<String>,
}

impl UriPattern {
    pub fn new(authority: &str, path: &str) -> Self {
        UriPattern {
            authority: authority.to_string(),
            segments: path.split('/').map(str::to_string).collect(),
        }
    }

    fn matches(&self, uri: &PetUri) -> bool {
        if uri.authority() != self.authority || uri.segments().len() != self.segments.len() {
            return false;
        }
        self.segments.iter().zip(uri.segments()).all(|(pat, seg)| {
            if pat == "#" {
                !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit())
            } else {
                pat == seg
            }
        })
    }
}

/// Immutable ordered route table. First matching route wins.
#[derive(Debug, Clone)]
pub struct UriMatcher {
    routes: Vec<(UriPattern, UriKind)>,
}

impl UriMatcher {
    pub fn new(routes: Vec<(UriPattern, UriKind)>) -> Self {
        UriMatcher { routes }
    }

    /// Resolve a URI to the shape it addresses, or `None` if no route matches.
    pub fn match_uri(&self, uri: &PetUri) -> Option<UriKind> {
        self.routes
            .iter()
            .find(|(pattern, _)| pattern.matches(uri))
            .map(|&(_, kind)| kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract;

    #[test]
    fn collection_uri_displays_and_parses_back() {
        let uri = PetUri::collection();
        assert_eq!(uri.to_string(), "shelter://app.shelter/pets");
        assert_eq!(PetUri::parse(&uri.to_string()).unwrap(), uri);
    }

    #[test]
    fn record_uri_carries_its_id() {
        let uri = PetUri::record(5);
        assert_eq!(uri.to_string(), "shelter://app.shelter/pets/5");
        assert_eq!(uri.record_id(), Some(5));
        assert_eq!(PetUri::collection().record_id(), None);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(PetUri::parse("no-scheme-separator").is_err());
        assert!(PetUri::parse("://app.shelter/pets").is_err());
        assert!(PetUri::parse("shelter:///pets").is_err());
    }

    #[test]
    fn matcher_resolves_the_two_registered_shapes() {
        let matcher = contract::uri_matcher();

        let collection = PetUri::collection();
        assert_eq!(matcher.match_uri(&collection), Some(UriKind::PetCollection));

        let item = PetUri::record(42);
        assert_eq!(matcher.match_uri(&item), Some(UriKind::PetItem));
    }

    #[test]
    fn matcher_rejects_unregistered_shapes() {
        let matcher = contract::uri_matcher();

        // Different path.
        let other_path = PetUri::parse("shelter://app.shelter/cats").unwrap();
        assert_eq!(matcher.match_uri(&other_path), None);

        // Different authority.
        let other_authority = PetUri::parse("shelter://elsewhere/pets").unwrap();
        assert_eq!(matcher.match_uri(&other_authority), None);

        // Non-numeric id segment.
        let non_numeric = PetUri::parse("shelter://app.shelter/pets/abc").unwrap();
        assert_eq!(matcher.match_uri(&non_numeric), None);

        // Extra trailing segment.
        let too_deep = PetUri::parse("shelter://app.shelter/pets/5/extra").unwrap();
        assert_eq!(matcher.match_uri(&too_deep), None);

        // Bare authority with no path.
        let bare = PetUri::parse("shelter://app.shelter").unwrap();
        assert_eq!(matcher.match_uri(&bare), None);
    }

    #[test]
    fn collection_covers_records_but_not_vice_versa() {
        let collection = PetUri::collection();
        let record = PetUri::record(7);

        assert!(collection.covers(&record));
        assert!(collection.covers(&collection));
        assert!(record.covers(&record));
        assert!(!record.covers(&collection));
        assert!(!record.covers(&PetUri::record(8)));

        let foreign = PetUri::parse("shelter://elsewhere/pets/7").unwrap();
        assert!(!collection.covers(&foreign));
    }
}
