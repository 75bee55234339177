//! Validate, decompose, resolve, and canonicalize [RFC 3986 URI][RFC 3986]
//! and [RFC 3987 IRI][RFC 3987] strings.
//!
//! Note that this crate does not have any extra knowledge about protocols.
//! No scheme-specific rule is applied, and hosts are neither resolved nor
//! converted by IDNA.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987
//!
//! # Operations
//!
//! * Validation: [`is_uri`], [`is_iri_reference`], ... return `bool`.
//! * Decomposition: [`parse_uri`], [`parse_iri_reference`], ... return
//!   borrowed component records (see [`components`]).
//! * Normalization: [`normalize_uri`], [`to_absolute_iri`], ...
//! * Resolution: [`resolve_uri`], [`resolve_iri`], and
//!   [`resolve::FixedBaseResolver`].
//! * Relative reference calculation: [`to_relative_uri`], [`to_relative_iri`].
//!
//! Every operation is written once, generic over [`spec::Spec`], and the
//! fixed-kind functions above are thin wrappers for [`spec::UriSpec`] and
//! [`spec::IriSpec`].
//!
//! ```
//! use iri_canon::{parse_iri, resolve_iri, to_relative_iri};
//!
//! let base = "http://example.com/r\u{E9}sum\u{E9}/index.html";
//! let components = parse_iri(base)?;
//! assert_eq!(components.authority_str(), Some("example.com"));
//!
//! let resolved = resolve_iri("../%7Euser/./photo.png?size=L", base)?;
//! assert_eq!(resolved, "http://example.com/~user/photo.png?size=L");
//! assert_eq!(to_relative_iri(base, &resolved)?, "../~user/photo.png?size=L");
//! # Ok::<_, iri_canon::validate::Error>(())
//! ```
//!
//! # Errors
//!
//! All fallible operations return [`validate::Error`], which carries the
//! grammar the input failed to match and the input itself. Its message is
//! `Invalid <grammar>: <input>`, for example `Invalid absolute-IRI: foo`.
//!
//! # `std` support
//!
//! This crate supports `no_std` usage, but requires the `alloc` crate.
//!
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + The feature let the crate utilize std-specific stuff, such as `std::error::Error` trait.
//! * `memchr` feature:
//!     + Use [`memchr`](https://crates.io/crates/memchr) crate to search delimiters.
//! * `serde` feature:
//!     + Implement `serde::Serialize` for the component records and [`validate::Grammar`].
//!
//! # Rationale
//!
//! ## `foo:`, `foo:/`, `foo://`, `foo:///`, `foo:////`, ... are valid IRIs
//!
//! All of these are valid IRIs.
//!
//! * `foo:`
//!     + Decomposed to `<scheme="foo">:<path-empty="">`.
//! * `foo:/`
//!     + Decomposed to `<scheme="foo">:<path-absolute="/">`.
//! * `foo://`
//!     + Decomposed to `<scheme="foo">://<authority=""><path-absolute="">`.
//! * `foo:///`
//!     + Decomposed to `<scheme="foo">://<authority=""><path-absolute="/">`.
//! * `foo:////`
//!     + Decomposed to `<scheme="foo">://<authority=""><path-absolute="//">`.
//!
//! A literal `//` after the scheme always starts an authority, even an empty
//! one. An authority which is empty is still **present**: `foo://` and
//! `foo:` are different identifiers, and the components report
//! `Some("")` and `None` respectively.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod components;
pub mod normalize;
pub(crate) mod parser;
pub mod relative;
pub mod resolve;
pub mod spec;
pub mod validate;

pub use self::components::{
    parse_absolute_iri, parse_absolute_uri, parse_iri, parse_iri_reference, parse_uri,
    parse_uri_reference,
};
pub use self::normalize::{normalize_iri, normalize_uri, to_absolute_iri, to_absolute_uri};
pub use self::relative::{to_relative_iri, to_relative_uri};
pub use self::resolve::{resolve_iri, resolve_uri};
pub use self::validate::{
    is_absolute_iri, is_absolute_uri, is_iri, is_iri_reference, is_uri, is_uri_reference,
};
