//! Parsers for path.

use crate::parser::char;
use crate::parser::str::{find_split, satisfy_chars_with_pct_encoded};
use crate::parser::Mismatch;
use crate::spec::Spec;

/// Returns `Ok(_)` if the string consists of `pchar`s and slashes.
fn validate_path_chars<S: Spec>(i: &str) -> Result<(), Mismatch> {
    let is_valid = satisfy_chars_with_pct_encoded(
        i,
        char::is_ascii_pchar_slash,
        char::is_nonascii_unreserved::<S>,
    );
    if is_valid {
        Ok(())
    } else {
        Err(Mismatch)
    }
}

/// Returns `Ok(_)` if the string matches `path-abempty` or `ipath-abempty`.
pub(super) fn validate_path_abempty<S: Spec>(i: &str) -> Result<(), Mismatch> {
    if !i.is_empty() && !i.starts_with('/') {
        return Err(Mismatch);
    }
    validate_path_chars::<S>(i)
}

/// Returns `Ok(_)` if the string matches `path-absolute`, `path-rootless`, or `path-empty`
/// (or their IRI versions).
///
/// This is the path of a URI or an IRI without authority.
pub(super) fn validate_path_authority_absent<S: Spec>(i: &str) -> Result<(), Mismatch> {
    if i.starts_with("//") {
        // Would be read as an authority.
        return Err(Mismatch);
    }
    validate_path_chars::<S>(i)
}

/// Returns `Ok(_)` if the string matches `path-noscheme` or `path-empty`
/// (or their IRI versions).
pub(super) fn validate_path_noscheme<S: Spec>(i: &str) -> Result<(), Mismatch> {
    let first_segment = match find_split(i, b'/') {
        Some((first, _)) => first,
        None => i,
    };
    if first_segment.contains(':') {
        return Err(Mismatch);
    }
    validate_path_chars::<S>(i)
}
