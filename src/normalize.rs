//! Normalization.
//!
//! An identifier is normalized by recomposing its components:
//!
//! * the scheme is lowercased,
//! * the authority is lowercased as a whole (including userinfo),
//! * dot segments are removed from the path,
//! * unnecessarily percent-encoded characters in the path, query and fragment
//!   are decoded, and the hexadecimal digits of the rest are uppercased.
//!
//! # Paths starting with `//`
//!
//! An identifier without authority cannot have a path starting with `//`,
//! since that is read as an authority. For example, `foo:/.//bar` has no
//! authority and the path `/.//bar`, whose dot segments are removed to
//! `//bar`. Serializing it as `foo://bar` would yield an identifier with the
//! authority `bar`, so `/.` is prepended to such paths and `foo:/.//bar` is
//! written back.
//!
//! ## Examples
//!
//! ```
//! use iri_canon::normalize_uri;
//!
//! assert_eq!(
//!     normalize_uri("HTTP://Example.COM/a/./b/../c/%7euser?%2fq")?,
//!     "http://example.com/a/c/~user?/q"
//! );
//! assert_eq!(normalize_uri("foo:/.//bar")?, "foo:/.//bar");
//! # Ok::<_, iri_canon::validate::Error>(())
//! ```

mod pct_case;
mod remove_dot_segments;

use core::fmt::{self, Write as _};
use core::marker::PhantomData;

use alloc::string::{String, ToString};

use crate::components::parse;
use crate::spec::{IriSpec, Spec, UriSpec};
use crate::validate::Error;

use self::pct_case::{Component, PctCaseNormalized};
use self::remove_dot_segments::remove_dot_segments;

/// Components to be composed into an identifier.
///
/// The path is raw: dot segments are removed on composition.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Composition<'a> {
    /// Scheme.
    pub(crate) scheme: &'a str,
    /// Authority.
    pub(crate) authority: Option<&'a str>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    pub(crate) fragment: Option<&'a str>,
}

impl Composition<'_> {
    /// Composes the components into a normalized string.
    #[must_use]
    pub(crate) fn compose<S: Spec>(&self) -> String {
        let path = remove_dot_segments(self.path);
        Normalized::<S> {
            scheme: self.scheme,
            authority: self.authority,
            path: &path,
            query: self.query,
            fragment: self.fragment,
            _spec: PhantomData,
        }
        .to_string()
    }
}

/// Writable as a normalized identifier.
#[derive(Debug, Clone, Copy)]
struct Normalized<'a, S> {
    /// Scheme.
    scheme: &'a str,
    /// Authority.
    authority: Option<&'a str>,
    /// Path, with dot segments already removed.
    path: &'a str,
    /// Query.
    query: Option<&'a str>,
    /// Fragment.
    fragment: Option<&'a str>,
    /// Spec.
    _spec: PhantomData<fn() -> S>,
}

impl<S: Spec> fmt::Display for Normalized<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `scheme` is ASCII-only.
        self.scheme
            .chars()
            .try_for_each(|c| f.write_char(c.to_ascii_lowercase()))?;
        f.write_char(':')?;

        match self.authority {
            Some(authority) => {
                f.write_str("//")?;
                authority
                    .chars()
                    .flat_map(char::to_lowercase)
                    .try_for_each(|c| f.write_char(c))?;
            }
            None if self.path.starts_with("//") => f.write_str("/.")?,
            None => {}
        }

        write!(f, "{}", PctCaseNormalized::<S>::new(self.path, Component::Path))?;
        if let Some(query) = self.query {
            f.write_char('?')?;
            write!(f, "{}", PctCaseNormalized::<S>::new(query, Component::QueryOrFragment))?;
        }
        if let Some(fragment) = self.fragment {
            f.write_char('#')?;
            write!(f, "{}", PctCaseNormalized::<S>::new(fragment, Component::QueryOrFragment))?;
        }
        Ok(())
    }
}

/// Parses the string as an IRI (or URI), and returns the normalized string.
///
/// The fragment is kept.
pub fn normalize<S: Spec>(s: &str) -> Result<String, Error> {
    let components = parse::<S>(s)?;
    Ok(Composition {
        scheme: components.scheme_str(),
        authority: components.authority_str(),
        path: components.path_str(),
        query: components.query_str(),
        fragment: components.fragment_str(),
    }
    .compose::<S>())
}

/// Parses the string as an IRI (or URI), and returns the normalized string
/// without the fragment.
///
/// ```
/// use iri_canon::to_absolute_uri;
///
/// assert_eq!(to_absolute_uri("http://a/b/../c?q#frag")?, "http://a/c?q");
/// # Ok::<_, iri_canon::validate::Error>(())
/// ```
pub fn to_absolute<S: Spec>(s: &str) -> Result<String, Error> {
    let components = parse::<S>(s)?;
    Ok(Composition {
        scheme: components.scheme_str(),
        authority: components.authority_str(),
        path: components.path_str(),
        query: components.query_str(),
        fragment: None,
    }
    .compose::<S>())
}

/// Normalizes the URI.
#[inline]
pub fn normalize_uri(s: &str) -> Result<String, Error> {
    normalize::<UriSpec>(s)
}

/// Normalizes the IRI.
#[inline]
pub fn normalize_iri(s: &str) -> Result<String, Error> {
    normalize::<IriSpec>(s)
}

/// Normalizes the URI and drops its fragment.
#[inline]
pub fn to_absolute_uri(s: &str) -> Result<String, Error> {
    to_absolute::<UriSpec>(s)
}

/// Normalizes the IRI and drops its fragment.
#[inline]
pub fn to_absolute_iri(s: &str) -> Result<String, Error> {
    to_absolute::<IriSpec>(s)
}
