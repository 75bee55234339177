//! Validators.

use core::fmt;

#[cfg(feature = "std")]
use std::error;

use alloc::string::String;

use crate::parser::{self, Rule};
use crate::spec::{IriSpec, Spec, UriSpec};

/// Grammar (production rule) an input is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Grammar {
    /// `URI`.
    #[cfg_attr(feature = "serde", serde(rename = "URI"))]
    Uri,
    /// `URI-reference`.
    #[cfg_attr(feature = "serde", serde(rename = "URI-reference"))]
    UriReference,
    /// `absolute-URI`.
    #[cfg_attr(feature = "serde", serde(rename = "absolute-URI"))]
    AbsoluteUri,
    /// `IRI`.
    #[cfg_attr(feature = "serde", serde(rename = "IRI"))]
    Iri,
    /// `IRI-reference`.
    #[cfg_attr(feature = "serde", serde(rename = "IRI-reference"))]
    IriReference,
    /// `absolute-IRI`.
    #[cfg_attr(feature = "serde", serde(rename = "absolute-IRI"))]
    AbsoluteIri,
}

impl Grammar {
    /// Returns the name of the production rule, as written in RFC 3986 and RFC 3987.
    ///
    /// ```
    /// # use iri_canon::validate::Grammar;
    /// assert_eq!(Grammar::AbsoluteIri.name(), "absolute-IRI");
    /// ```
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Uri => "URI",
            Self::UriReference => "URI-reference",
            Self::AbsoluteUri => "absolute-URI",
            Self::Iri => "IRI",
            Self::IriReference => "IRI-reference",
            Self::AbsoluteIri => "absolute-IRI",
        }
    }

    /// Returns the grammar for the rule and the spec.
    #[must_use]
    pub(crate) fn of<S: Spec>(rule: Rule) -> Self {
        match rule {
            Rule::Absolute => S::GRAMMAR,
            Rule::AbsoluteWithoutFragment => S::GRAMMAR_ABSOLUTE,
            Rule::Any => S::GRAMMAR_REFERENCE,
        }
    }
}

impl fmt::Display for Grammar {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resource identifier validation error.
///
/// This is the only error this crate returns. It carries the grammar the
/// input was checked against and the input itself.
///
/// ```
/// # use iri_canon::parse_uri;
/// let err = parse_uri("//example.com/").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid URI: //example.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// Grammar the value failed to match.
    grammar: Grammar,
    /// The offending value.
    value: String,
}

impl Error {
    /// Creates a new `Error`.
    #[inline]
    #[must_use]
    pub(crate) fn new(grammar: Grammar, value: &str) -> Self {
        Self {
            grammar,
            value: String::from(value),
        }
    }

    /// Returns the grammar the value failed to match.
    #[inline]
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Returns the offending value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.grammar, self.value)
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

/// Validates the string against the rule.
fn validate<S: Spec>(rule: Rule, s: &str) -> Result<(), Error> {
    if parser::matches::<S>(rule, s) {
        Ok(())
    } else {
        Err(Error::new(Grammar::of::<S>(rule), s))
    }
}

/// Validates [IRI][uri].
///
/// [uri]: https://tools.ietf.org/html/rfc3986#section-3
///
/// ```
/// use iri_canon::spec::{IriSpec, UriSpec};
/// use iri_canon::validate::iri;
///
/// assert!(iri::<IriSpec>("http://example.com/r\u{E9}sum\u{E9}").is_ok());
/// assert!(iri::<UriSpec>("http://example.com/r\u{E9}sum\u{E9}").is_err());
/// ```
pub fn iri<S: Spec>(s: &str) -> Result<(), Error> {
    validate::<S>(Rule::Absolute, s)
}

/// Validates [IRI reference][uri-reference].
///
/// [uri-reference]: https://tools.ietf.org/html/rfc3986#section-4.1
pub fn iri_reference<S: Spec>(s: &str) -> Result<(), Error> {
    validate::<S>(Rule::Any, s)
}

/// Validates [absolute IRI][absolute-uri].
///
/// [absolute-uri]: https://tools.ietf.org/html/rfc3986#section-4.3
pub fn absolute_iri<S: Spec>(s: &str) -> Result<(), Error> {
    validate::<S>(Rule::AbsoluteWithoutFragment, s)
}

/// Returns `true` if the string is a `URI`.
///
/// ```
/// # use iri_canon::is_uri;
/// assert!(is_uri("https://example.com/foo"));
/// assert!(!is_uri("//example.com/foo"));
/// ```
#[inline]
#[must_use]
pub fn is_uri(s: &str) -> bool {
    parser::matches::<UriSpec>(Rule::Absolute, s)
}

/// Returns `true` if the string is a `URI-reference`.
///
/// ```
/// # use iri_canon::is_uri_reference;
/// assert!(is_uri_reference("//example.com/foo"));
/// ```
#[inline]
#[must_use]
pub fn is_uri_reference(s: &str) -> bool {
    parser::matches::<UriSpec>(Rule::Any, s)
}

/// Returns `true` if the string is an `absolute-URI`.
#[inline]
#[must_use]
pub fn is_absolute_uri(s: &str) -> bool {
    parser::matches::<UriSpec>(Rule::AbsoluteWithoutFragment, s)
}

/// Returns `true` if the string is an `IRI`.
///
/// ```
/// # use iri_canon::{is_iri, is_uri};
/// assert!(is_iri("http://exampl\u{E9}.org/ros\u{E9}#"));
/// assert!(!is_uri("http://exampl\u{E9}.org/ros\u{E9}#"));
/// ```
#[inline]
#[must_use]
pub fn is_iri(s: &str) -> bool {
    parser::matches::<IriSpec>(Rule::Absolute, s)
}

/// Returns `true` if the string is an `IRI-reference`.
#[inline]
#[must_use]
pub fn is_iri_reference(s: &str) -> bool {
    parser::matches::<IriSpec>(Rule::Any, s)
}

/// Returns `true` if the string is an `absolute-IRI`.
#[inline]
#[must_use]
pub fn is_absolute_iri(s: &str) -> bool {
    parser::matches::<IriSpec>(Rule::AbsoluteWithoutFragment, s)
}
