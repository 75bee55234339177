//! URI and IRI resolvers.
//!
//! References are resolved by the algorithm of [RFC 3986 section 5.2.2], and
//! the result is normalized as described in the [`normalize`][crate::normalize]
//! module.
//!
//! The base is parsed only when the reference has no scheme. A reference with
//! a scheme does not need the base at all, so an invalid (or empty) base is not
//! an error in that case.
//!
//! ```
//! use iri_canon::resolve_iri;
//!
//! assert_eq!(resolve_iri("urn:some:ip:prop", "")?, "urn:some:ip:prop");
//! assert!(resolve_iri("some:ip:prop", "").is_ok());
//! assert!(resolve_iri("ip:prop", "#").is_ok());
//! assert!(resolve_iri("prop", "").is_err());
//! # Ok::<_, iri_canon::validate::Error>(())
//! ```
//!
//! # Paths starting with `//`
//!
//! Resolution can produce an identifier without authority whose path starts
//! with `//`, for example the reference `.///bar` against the base `scheme:`.
//! Such results are serialized as `scheme:/.//bar`, following the WHATWG URL
//! Standard, so that the path is not read back as an authority.
//!
//! [RFC 3986 section 5.2.2]: https://tools.ietf.org/html/rfc3986#section-5.2.2


use alloc::borrow::Cow;
use alloc::string::String;

use crate::components::{parse_absolute, parse_reference, RiAbsoluteComponents, RiReferenceComponents};
use crate::normalize::Composition;
use crate::parser::str::rfind;
use crate::spec::{IriSpec, Spec, UriSpec};
use crate::validate::Error;

/// Resolves the reference against the base, and returns the normalized result.
///
/// The reference is parsed as an IRI reference, and the base as an absolute
/// IRI (or URI reference and absolute URI, for [`UriSpec`]).
///
/// # Failures
///
/// Fails if the reference is not a valid reference, or if the base is needed
/// and is not a valid absolute identifier.
///
/// ```
/// use iri_canon::resolve::resolve;
/// use iri_canon::spec::UriSpec;
///
/// let base = "http://a/b/c/d;p?q";
/// assert_eq!(resolve::<UriSpec>("../../../g", base)?, "http://a/g");
/// assert_eq!(resolve::<UriSpec>("./g/.", base)?, "http://a/b/c/g/");
/// assert_eq!(resolve::<UriSpec>("g;x=1/../y", base)?, "http://a/b/c/y");
///
/// let err = resolve::<UriSpec>("g", "http://a/b#frag").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid absolute-URI: http://a/b#frag");
/// # Ok::<_, iri_canon::validate::Error>(())
/// ```
pub fn resolve<S: Spec>(reference: &str, base: &str) -> Result<String, Error> {
    let reference = parse_reference::<S>(reference)?;
    resolve_components(reference, || parse_absolute::<S>(base))
}

/// Resolves the URI reference against the base URI.
#[inline]
pub fn resolve_uri(reference: &str, base: &str) -> Result<String, Error> {
    resolve::<UriSpec>(reference, base)
}

/// Resolves the IRI reference against the base IRI.
#[inline]
pub fn resolve_iri(reference: &str, base: &str) -> Result<String, Error> {
    resolve::<IriSpec>(reference, base)
}

/// A resolver against the fixed base.
///
/// The base is validated once, when the resolver is created.
#[derive(Debug, Clone, Copy)]
pub struct FixedBaseResolver<'a, S: Spec> {
    /// Components of the base.
    base: RiAbsoluteComponents<'a, S>,
}

impl<'a, S: Spec> FixedBaseResolver<'a, S> {
    /// Creates a new resolver with the given base.
    ///
    /// # Failures
    ///
    /// Fails if the base is not a valid absolute identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_canon::resolve::FixedBaseResolver;
    /// use iri_canon::spec::IriSpec;
    ///
    /// let resolver = FixedBaseResolver::<IriSpec>::new("http://example.com/base/")?;
    /// assert_eq!(resolver.resolve("../there")?, "http://example.com/there");
    /// assert_eq!(resolver.resolve("%2e%2e/here")?, "http://example.com/here");
    /// # Ok::<_, iri_canon::validate::Error>(())
    /// ```
    pub fn new(base: &'a str) -> Result<Self, Error> {
        Ok(Self {
            base: parse_absolute::<S>(base)?,
        })
    }

    /// Returns the components of the base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> RiAbsoluteComponents<'a, S> {
        self.base
    }

    /// Resolves the given reference against the fixed base.
    ///
    /// # Failures
    ///
    /// Fails if the reference is not a valid reference.
    pub fn resolve(&self, reference: &str) -> Result<String, Error> {
        let reference = parse_reference::<S>(reference)?;
        resolve_components(reference, || Ok(self.base))
    }
}

/// Resolves the reference components against the base.
///
/// `base` is called only when the reference has no scheme.
fn resolve_components<'r, 'b, S, F>(
    reference: RiReferenceComponents<'r, S>,
    base: F,
) -> Result<String, Error>
where
    S: Spec,
    F: FnOnce() -> Result<RiAbsoluteComponents<'b, S>, Error>,
{
    let ref_path = reference.path_str();
    let (scheme, authority, path, query) = match reference.scheme_str() {
        Some(scheme) => (
            scheme,
            reference.authority_str(),
            Cow::Borrowed(ref_path),
            reference.query_str(),
        ),
        None => {
            let base = base()?;
            match reference.authority_str() {
                Some(authority) => (
                    base.scheme_str(),
                    Some(authority),
                    Cow::Borrowed(ref_path),
                    reference.query_str(),
                ),
                None if ref_path.is_empty() => (
                    base.scheme_str(),
                    base.authority_str(),
                    Cow::Borrowed(base.path_str()),
                    reference.query_str().or_else(|| base.query_str()),
                ),
                None if ref_path.starts_with('/') => (
                    base.scheme_str(),
                    base.authority_str(),
                    Cow::Borrowed(ref_path),
                    reference.query_str(),
                ),
                None => (
                    base.scheme_str(),
                    base.authority_str(),
                    merge_paths(ref_path, &base),
                    reference.query_str(),
                ),
            }
        }
    };

    Ok(Composition {
        scheme,
        authority,
        path: &path,
        query,
        fragment: reference.fragment_str(),
    }
    .compose::<S>())
}

/// Merges the relative-path reference with the path of the base.
///
/// See [RFC 3986 section 5.2.3](https://tools.ietf.org/html/rfc3986#section-5.2.3).
fn merge_paths<'r, S: Spec>(ref_path: &'r str, base: &RiAbsoluteComponents<'_, S>) -> Cow<'r, str> {
    let base_path = base.path_str();
    if base.authority_str().is_some() && base_path.is_empty() {
        let mut merged = String::with_capacity(ref_path.len() + 1);
        merged.push('/');
        merged.push_str(ref_path);
        return Cow::Owned(merged);
    }
    match rfind(base_path.as_bytes(), b'/') {
        Some(last_slash) => {
            let dir = &base_path[..=last_slash];
            let mut merged = String::with_capacity(dir.len() + ref_path.len());
            merged.push_str(dir);
            merged.push_str(ref_path);
            Cow::Owned(merged)
        }
        None => Cow::Borrowed(ref_path),
    }
}
