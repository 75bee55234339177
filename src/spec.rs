//! URI and IRI specifications.
//!
//! The grammars of URI ([RFC 3986]) and IRI ([RFC 3987]) are structurally
//! identical. They differ only in the characters accepted literally: IRIs
//! extend `unreserved` with `ucschar`, and allow `iprivate` characters in
//! queries.
//!
//! Every algorithm in this crate is written once, generic over a type
//! implementing [`Spec`], and the character classes are chosen by the type
//! parameter at the call site.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987

mod internal;

/// A trait for spec types.
///
/// This trait is not intended to be implemented by crate users.
// Note that all types which implement `Spec` also implement `SpecInternal`.
pub trait Spec: internal::Sealed + Copy + 'static {}

/// A type that represents specification of IRI.
///
/// Note that this is an uninhabited type, and used only as a type parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IriSpec {}

impl Spec for IriSpec {}

/// A type that represents specification of URI.
///
/// Note that this is an uninhabited type, and used only as a type parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UriSpec {}

impl Spec for UriSpec {}
