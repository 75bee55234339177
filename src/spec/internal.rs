//! A private module for sealed trait and internal implementations.
//!
//! Note that this MUST be a private module.
//! See [Rust API Guidelines][sealed-trait] about the necessity of being private.
//!
//! [sealed-trait]:
//! https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed

use crate::parser::char::{is_iprivate, is_ucschar};
use crate::spec::{IriSpec, UriSpec};
use crate::validate::Grammar;

/// A trait to prohibit user-defined types from implementing `Spec`.
///
/// About sealed trait, see [Rust API Guidelines][future-proofing].
///
/// [future-proofing]: https://rust-lang.github.io/api-guidelines/future-proofing.html
pub trait Sealed: SpecInternal {}

impl Sealed for IriSpec {}
impl Sealed for UriSpec {}

/// Internal implementations for spec types.
pub trait SpecInternal: Sized {
    /// `URI` or `IRI` grammar.
    const GRAMMAR: Grammar;
    /// `URI-reference` or `IRI-reference` grammar.
    const GRAMMAR_REFERENCE: Grammar;
    /// `absolute-URI` or `absolute-IRI` grammar.
    const GRAMMAR_ABSOLUTE: Grammar;

    /// Checks if the given non-ASCII character matches `unreserved` or `iunreserved` rule.
    #[must_use]
    fn is_nonascii_char_unreserved(c: char) -> bool;
    /// Checks if the given character matches `iprivate` rule.
    #[must_use]
    fn is_nonascii_char_private(c: char) -> bool;
}

impl SpecInternal for IriSpec {
    const GRAMMAR: Grammar = Grammar::Iri;
    const GRAMMAR_REFERENCE: Grammar = Grammar::IriReference;
    const GRAMMAR_ABSOLUTE: Grammar = Grammar::AbsoluteIri;

    #[inline]
    fn is_nonascii_char_unreserved(c: char) -> bool {
        is_ucschar(c)
    }

    #[inline]
    fn is_nonascii_char_private(c: char) -> bool {
        is_iprivate(c)
    }
}

impl SpecInternal for UriSpec {
    const GRAMMAR: Grammar = Grammar::Uri;
    const GRAMMAR_REFERENCE: Grammar = Grammar::UriReference;
    const GRAMMAR_ABSOLUTE: Grammar = Grammar::AbsoluteUri;

    #[inline]
    fn is_nonascii_char_unreserved(_: char) -> bool {
        false
    }

    #[inline]
    fn is_nonascii_char_private(_: char) -> bool {
        false
    }
}
