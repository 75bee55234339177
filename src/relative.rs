//! Relative reference calculation.
//!
//! [`to_relative`] computes a reference which is resolved against `from`
//! into `to`. Scheme and authority are compared as opaque strings: if either
//! differs, `to` is returned unchanged.
//!
//! ```
//! use iri_canon::{resolve_uri, to_relative_uri};
//!
//! let from = "http://example.com/a/b/c";
//! let to = "http://example.com/a/d?q#f";
//! let relative = to_relative_uri(from, to)?;
//! assert_eq!(relative, "../d?q#f");
//! assert_eq!(resolve_uri(&relative, from)?, to);
//! # Ok::<_, iri_canon::validate::Error>(())
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::components::{parse, parse_absolute};
use crate::spec::{IriSpec, Spec, UriSpec};
use crate::validate::Error;

/// Returns the reference relative to `from` which points to `to`.
///
/// `from` is parsed as an absolute IRI (no fragment), and `to` as an IRI
/// (or absolute URI and URI, for [`UriSpec`]).
///
/// Only directory segments are compared: the last segment of each path is
/// never part of the common prefix. The result is not normalized, so `to`
/// should not contain dot segments.
///
/// # Failures
///
/// Fails if `from` or `to` is invalid.
///
/// ```
/// use iri_canon::relative::to_relative;
/// use iri_canon::spec::UriSpec;
///
/// let from = "http://example.com/a/b";
/// assert_eq!(to_relative::<UriSpec>(from, "http://example.com/a/b")?, "");
/// assert_eq!(to_relative::<UriSpec>(from, "http://example.com/a/c:d")?, "./c:d");
/// assert_eq!(
///     to_relative::<UriSpec>(from, "https://example.com/a/c")?,
///     "https://example.com/a/c"
/// );
/// # Ok::<_, iri_canon::validate::Error>(())
/// ```
pub fn to_relative<S: Spec>(from: &str, to: &str) -> Result<String, Error> {
    let from_components = parse_absolute::<S>(from)?;
    let to_components = parse::<S>(to)?;

    if from_components.scheme_str() != to_components.scheme_str()
        || from_components.authority_str() != to_components.authority_str()
    {
        return Ok(String::from(to));
    }

    let from_path = from_components.path_str();
    let to_path = to_components.path_str();
    let to_query = to_components.query_str();
    // An empty reference would inherit the query of `from`.
    let inherits_query = to_query.is_none() && from_components.query_str().is_some();

    let mut relative = if from_path == to_path && !inherits_query {
        String::new()
    } else {
        match relative_path(from_path, to_path) {
            Some(path) => path,
            None => return Ok(String::from(to)),
        }
    };
    if let Some(query) = to_query {
        relative.push('?');
        relative.push_str(query);
    }
    if let Some(fragment) = to_components.fragment_str() {
        relative.push('#');
        relative.push_str(fragment);
    }
    Ok(relative)
}

/// Returns the relative path from `from` to `to`.
///
/// Returns `None` if no relative path reaches `to`.
fn relative_path(from: &str, to: &str) -> Option<String> {
    // An empty path cannot be reached by a relative path.
    if to.is_empty() {
        return None;
    }

    let from_segments: Vec<&str> = from.split('/').collect();
    let to_segments: Vec<&str> = to.split('/').collect();

    // Length of the common directory prefix.
    let common = from_segments[..(from_segments.len() - 1)]
        .iter()
        .zip(&to_segments[..(to_segments.len() - 1)])
        .take_while(|(from_seg, to_seg)| from_seg == to_seg)
        .count();
    // A rootless path without a common directory is reached only from a
    // path without any slash.
    if common == 0 && !to.starts_with('/') && from.contains('/') {
        return None;
    }
    // Without a common directory, `to` is absolute (or `from` has no
    // directory at all) and parent segments cannot help.
    let num_parents = if common == 0 {
        0
    } else {
        from_segments.len() - common - 1
    };

    let mut relative = String::with_capacity(3 * num_parents + to.len());
    for _ in 0..num_parents {
        relative.push_str("../");
    }
    relative.push_str(&to_segments[common..].join("/"));

    // The first segment must not be read as a scheme, an authority, or an
    // absolute path (unless the whole path is intended to be absolute).
    let first_segment = relative.split('/').next().unwrap_or("");
    let prefix = if common == 0 && relative.starts_with("//") {
        "/."
    } else if first_segment.contains(':')
        || (common != 0 && (relative.is_empty() || relative.starts_with('/')))
    {
        "./"
    } else {
        ""
    };
    relative.insert_str(0, prefix);
    Some(relative)
}

/// Returns the URI reference relative to `from` which points to `to`.
#[inline]
pub fn to_relative_uri(from: &str, to: &str) -> Result<String, Error> {
    to_relative::<UriSpec>(from, to)
}

/// Returns the IRI reference relative to `from` which points to `to`.
#[inline]
pub fn to_relative_iri(from: &str, to: &str) -> Result<String, Error> {
    to_relative::<IriSpec>(from, to)
}
