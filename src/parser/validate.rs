//! Validating parsers for non-trusted (possibly invalid) input.
//!
//! All validators are anchored to both ends of the input, and run in time
//! linear to the input length: they never backtrack over the string.

mod authority;
mod path;

use crate::parser::char;
use crate::parser::str::{
    find_split, find_split2_hole, find_split4_hole, find_split_hole, satisfy_chars_with_pct_encoded,
};
use crate::parser::Mismatch;
use crate::spec::Spec;

use self::authority::validate_authority;
use self::path::{validate_path_abempty, validate_path_authority_absent, validate_path_noscheme};

/// Syntax rule for URI/IRI references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Rule {
    /// `URI` and `IRI`.
    ///
    /// This can have a fragment.
    Absolute,
    /// `absolute-URI` and `absolute-IRI`.
    ///
    /// This cannot have a fragment.
    AbsoluteWithoutFragment,
    /// `URI-reference` and `IRI-reference`.
    ///
    /// This can be relative.
    Any,
}

impl Rule {
    /// Returns `true` is the relative reference is allowed.
    #[inline]
    #[must_use]
    fn is_relative_allowed(self) -> bool {
        self == Self::Any
    }

    /// Returns `true` is the fragment part is allowed.
    #[inline]
    #[must_use]
    fn is_fragment_allowed(self) -> bool {
        matches!(self, Self::Absolute | Self::Any)
    }
}

/// Returns `Ok(_)` if the string matches `scheme`.
fn validate_scheme(i: &str) -> Result<(), Mismatch> {
    let bytes = i.as_bytes();
    match bytes.split_first() {
        Some((first, rest))
            if first.is_ascii_alphabetic()
                && rest.iter().all(|&b| char::is_ascii_scheme_continue(b)) =>
        {
            Ok(())
        }
        _ => Err(Mismatch),
    }
}

/// Returns `Ok(_)` if the string matches `query` or `iquery`.
fn validate_query<S: Spec>(i: &str) -> Result<(), Mismatch> {
    let is_valid =
        satisfy_chars_with_pct_encoded(i, char::is_ascii_frag_query, char::is_nonascii_query::<S>);
    if is_valid {
        Ok(())
    } else {
        Err(Mismatch)
    }
}

/// Returns `Ok(_)` if the string matches `fragment` or `ifragment`.
fn validate_fragment<S: Spec>(i: &str) -> Result<(), Mismatch> {
    let is_valid = satisfy_chars_with_pct_encoded(
        i,
        char::is_ascii_frag_query,
        char::is_nonascii_fragment::<S>,
    );
    if is_valid {
        Ok(())
    } else {
        Err(Mismatch)
    }
}

/// Returns `Ok(_)` if the string matches `authority path-abempty` rule sequence.
fn validate_authority_path_abempty<S: Spec>(i: &str) -> Result<(), Mismatch> {
    let (maybe_authority, maybe_path) = match find_split(i, b'/') {
        Some(v) => v,
        None => (i, ""),
    };
    validate_authority::<S>(maybe_authority)?;
    validate_path_abempty::<S>(maybe_path)
}

/// Splits the string at the beginning of the query or the fragment.
///
/// Returns the string before the delimiter, and the delimiter with the rest.
fn split_before_query(i: &str) -> (&str, Option<(u8, &str)>) {
    match find_split2_hole(i, b'?', b'#') {
        Some((before, delim, rest)) => (before, Some((delim, rest))),
        None => (i, None),
    }
}

/// Returns `Ok(_)` if the string matches the given syntax rule.
pub(crate) fn validate<S: Spec>(i: &str, rule: Rule) -> Result<(), Mismatch> {
    // Validate `scheme ":"`.
    let i = match find_split4_hole(i, b':', b'/', b'?', b'#') {
        Some((maybe_scheme, b':', rest)) => {
            // A colon before any other delimiter cannot start `path-noscheme`,
            // so the prefix must be a scheme even for relative references.
            validate_scheme(maybe_scheme)?;
            rest
        }
        _ if rule.is_relative_allowed() => return validate_relative_ref::<S>(i),
        _ => return Err(Mismatch),
    };

    // Validate `hier-part`.
    // A literal `//` always commits to the `"//" authority path-abempty` branch.
    let after_path = match i.strip_prefix("//") {
        Some(i) => {
            let (maybe_authority_path, after_path) = split_before_query(i);
            validate_authority_path_abempty::<S>(maybe_authority_path)?;
            after_path
        }
        None => {
            let (maybe_path, after_path) = split_before_query(i);
            validate_path_authority_absent::<S>(maybe_path)?;
            after_path
        }
    };

    // Validate `[ "?" query ] [ "#" fragment ]`.
    match after_path {
        Some((first, rest)) => validate_after_path::<S>(first, rest, rule.is_fragment_allowed()),
        None => Ok(()),
    }
}

/// Returns `Ok(_)` if the string matches `relative-ref`/`irelative-ref` rules.
fn validate_relative_ref<S: Spec>(i: &str) -> Result<(), Mismatch> {
    // Validate `relative-part`.
    let after_path = match i.strip_prefix("//") {
        Some(i) => {
            let (maybe_authority_path, after_path) = split_before_query(i);
            validate_authority_path_abempty::<S>(maybe_authority_path)?;
            after_path
        }
        None => {
            let (maybe_path, after_path) = split_before_query(i);
            if maybe_path.starts_with('/') {
                validate_path_authority_absent::<S>(maybe_path)?;
            } else {
                validate_path_noscheme::<S>(maybe_path)?;
            }
            after_path
        }
    };

    // Validate `[ "?" query ] [ "#" fragment ]`.
    match after_path {
        Some((first, rest)) => validate_after_path::<S>(first, rest, true),
        None => Ok(()),
    }
}

/// Returns `Ok(_)` if the string matches `[ "?" query ] [ "#" fragment ]` (or IRI version).
///
/// `first` is the delimiter (`?` or `#`) and `rest` is the string after it.
fn validate_after_path<S: Spec>(
    first: u8,
    rest: &str,
    accept_fragment: bool,
) -> Result<(), Mismatch> {
    let (maybe_query, maybe_fragment) = if first == b'?' {
        match find_split_hole(rest, b'#') {
            Some((query, fragment)) => (Some(query), Some(fragment)),
            None => (Some(rest), None),
        }
    } else {
        debug_assert_eq!(first, b'#');
        (None, Some(rest))
    };
    if let Some(query) = maybe_query {
        validate_query::<S>(query)?;
    }
    match maybe_fragment {
        // Even an empty fragment needs the `#` delimiter, which is not
        // allowed for `absolute-URI`.
        Some(_) if !accept_fragment => Err(Mismatch),
        Some(fragment) => validate_fragment::<S>(fragment),
        None => Ok(()),
    }
}
