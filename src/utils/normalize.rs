//! Centralized normalization helpers.
//!
//! Checklist identifiers are URN-style strings such as
//! `urn:lsid:dyntaxa.se:Taxon:6011638`. Only the trailing segment is
//! semantically meaningful; the segment before it names the namespace.

/// Separator between namespace segments of a compound identifier.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Marker character that starts a comment row.
pub const COMMENT_MARKER: char = '#';

/// Taxonomic status of a record that is itself the valid name.
pub const ACCEPTED_STATUS: &str = "accepted";

/// Return the trimmed segment after the last namespace separator.
///
/// A value without any separator is returned trimmed as a whole, and an
/// empty value yields an empty string.
///
/// # Examples
///
/// ```
/// use taxon_solver::utils::normalize::last_segment;
///
/// assert_eq!(last_segment("urn:lsid:dyntaxa.se:Taxon:6011638"), "6011638");
/// assert_eq!(last_segment(" 42 "), "42");
/// assert_eq!(last_segment(""), "");
/// ```
#[must_use]
pub fn last_segment(value: &str) -> String {
    value
        .rsplit(NAMESPACE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Return the trimmed second-to-last namespace segment, or an empty string
/// when the value has fewer than two segments.
///
/// # Examples
///
/// ```
/// use taxon_solver::utils::normalize::namespace_tag;
///
/// assert_eq!(namespace_tag("urn:lsid:dyntaxa.se:Taxon:6011638"), "Taxon");
/// assert_eq!(namespace_tag("6011638"), "");
/// ```
#[must_use]
pub fn namespace_tag(value: &str) -> String {
    value
        .rsplit(NAMESPACE_SEPARATOR)
        .nth(1)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Key used for case- and whitespace-insensitive name comparison.
#[must_use]
pub fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether a raw identifier marks a comment row.
#[must_use]
pub fn is_comment(raw_id: &str, marker: char) -> bool {
    raw_id.trim_start().starts_with(marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment_trims_whitespace() {
        assert_eq!(last_segment("urn:lsid:dyntaxa.se:Taxon: 1000 "), "1000");
    }

    #[test]
    fn test_last_segment_trailing_separator() {
        assert_eq!(last_segment("urn:lsid:dyntaxa.se:Taxon:"), "");
    }

    #[test]
    fn test_namespace_tag() {
        assert_eq!(namespace_tag("urn:lsid:dyntaxa.se:TaxonName:12"), "TaxonName");
        assert_eq!(namespace_tag(""), "");
        assert_eq!(namespace_tag("Taxon:12"), "Taxon");
    }

    #[test]
    fn test_name_key() {
        assert_eq!(name_key("Gadus  Morhua"), "gadusmorhua");
        assert_eq!(name_key(" ABRA alba\t"), "abraalba");
    }

    #[test]
    fn test_is_comment() {
        assert!(is_comment("#urn:lsid:dyntaxa.se:Taxon:1", COMMENT_MARKER));
        assert!(is_comment("  # note", COMMENT_MARKER));
        assert!(!is_comment("urn:lsid:dyntaxa.se:Taxon:1", COMMENT_MARKER));
    }
}
