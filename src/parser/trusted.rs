//! Fast parsers for trusted (already validated) input.
//!
//! Using this in wrong way will lead to unexpected wrong result.

pub(crate) mod authority;

use crate::parser::str::{find_split2_hole, find_split3, find_split4_hole, find_split_hole};

/// Hierarchical part of a matched string.
///
/// The presence of the authority decides which form of path applies, so the
/// two are kept together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HierPart<'a> {
    /// `"//" authority path-abempty`.
    WithAuthority {
        /// Authority, without the leading `//`.
        ///
        /// Note that this can be empty.
        authority: &'a str,
        /// Path.
        path: &'a str,
    },
    /// Any path without authority.
    WithoutAuthority {
        /// Path.
        path: &'a str,
    },
}

impl<'a> HierPart<'a> {
    /// Returns the authority, if present.
    #[inline]
    #[must_use]
    pub(crate) fn authority(&self) -> Option<&'a str> {
        match *self {
            Self::WithAuthority { authority, .. } => Some(authority),
            Self::WithoutAuthority { .. } => None,
        }
    }

    /// Returns the path.
    #[inline]
    #[must_use]
    pub(crate) fn path(&self) -> &'a str {
        match *self {
            Self::WithAuthority { path, .. } | Self::WithoutAuthority { path } => path,
        }
    }
}

/// Spans of the components of a matched string.
///
/// Presence is kept apart from emptiness: `Some("")` means the delimiter was
/// present but the component was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchedSpans<'a> {
    /// Scheme, without the trailing colon.
    pub(crate) scheme: Option<&'a str>,
    /// Authority and path.
    pub(crate) hier: HierPart<'a>,
    /// Query, without the leading `?`.
    pub(crate) query: Option<&'a str>,
    /// Fragment, without the leading `#`.
    pub(crate) fragment: Option<&'a str>,
}

/// Eats a `scheme` and a following colon if available, and returns the rest and the scheme.
#[must_use]
fn scheme_colon_opt(i: &str) -> (&str, Option<&str>) {
    match find_split4_hole(i, b':', b'/', b'?', b'#') {
        Some((scheme, b':', rest)) => (rest, Some(scheme)),
        _ => (i, None),
    }
}

/// Eats double slash and the following authority if available, and returns the authority.
#[must_use]
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    // A slash, question mark, and hash character won't appear in `authority`.
    match find_split3(s, b'/', b'?', b'#') {
        Some((authority, rest)) => (rest, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Decomposes the path, the query, and the fragment.
#[must_use]
fn decompose_path_query_fragment(i: &str) -> (&str, Option<&str>, Option<&str>) {
    match find_split2_hole(i, b'?', b'#') {
        None => (i, None, None),
        Some((path, b'?', rest)) => match find_split_hole(rest, b'#') {
            Some((query, fragment)) => (path, Some(query), Some(fragment)),
            None => (path, Some(rest), None),
        },
        Some((path, delim, fragment)) => {
            debug_assert_eq!(delim, b'#');
            (path, None, Some(fragment))
        }
    }
}

/// Decomposes the string into the spans of the components.
///
/// # Precondition
///
/// The given string must be a valid IRI reference.
#[must_use]
pub(super) fn decompose(i: &str) -> MatchedSpans<'_> {
    let (i, scheme) = scheme_colon_opt(i);
    let (i, authority) = slash_slash_authority_opt(i);
    let (path, query, fragment) = decompose_path_query_fragment(i);
    let hier = match authority {
        Some(authority) => HierPart::WithAuthority { authority, path },
        None => HierPart::WithoutAuthority { path },
    };
    MatchedSpans {
        scheme,
        hier,
        query,
        fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full() {
        let spans = decompose("https://jason@example.com:80/foo?bar#baz");
        assert_eq!(spans.scheme, Some("https"));
        assert_eq!(spans.hier.authority(), Some("jason@example.com:80"));
        assert_eq!(spans.hier.path(), "/foo");
        assert_eq!(spans.query, Some("bar"));
        assert_eq!(spans.fragment, Some("baz"));
    }

    #[test]
    fn presence_is_not_emptiness() {
        let spans = decompose("foo://?#");
        assert_eq!(spans.scheme, Some("foo"));
        assert_eq!(spans.hier.authority(), Some(""));
        assert_eq!(spans.hier.path(), "");
        assert_eq!(spans.query, Some(""));
        assert_eq!(spans.fragment, Some(""));

        let spans = decompose("");
        assert_eq!(spans.scheme, None);
        assert_eq!(spans.hier, HierPart::WithoutAuthority { path: "" });
        assert_eq!(spans.query, None);
        assert_eq!(spans.fragment, None);
    }

    #[test]
    fn relative() {
        let spans = decompose("../a:b?c");
        assert_eq!(spans.scheme, None);
        assert_eq!(spans.hier, HierPart::WithoutAuthority { path: "../a:b" });
        assert_eq!(spans.query, Some("c"));

        let spans = decompose("#a?b");
        assert_eq!(spans.hier.path(), "");
        assert_eq!(spans.query, None);
        assert_eq!(spans.fragment, Some("a?b"));
    }

    #[test]
    fn path_starting_with_double_slash() {
        let spans = decompose("foo:////bar");
        assert_eq!(
            spans.hier,
            HierPart::WithAuthority {
                authority: "",
                path: "//bar"
            }
        );
    }
}
