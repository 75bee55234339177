//! Parsers for trusted `authority` string.

use crate::parser::str::{find_split_hole, rfind_split_hole};

/// Decomposes the authority into `(userinfo, host, port)`.
///
/// The delimiters (`@` and `:`) are not included.
///
/// # Precondition
///
/// The given string must be a valid authority.
#[must_use]
pub(crate) fn decompose_authority(authority: &str) -> (Option<&str>, &str, Option<&str>) {
    let (userinfo, host_port) = match find_split_hole(authority, b'@') {
        Some((userinfo, rest)) => (Some(userinfo), rest),
        None => (None, authority),
    };
    let (host, port) = if host_port.starts_with('[') {
        // `IP-literal` contains colons, so the port starts after the bracket.
        match find_split_hole(host_port, b']') {
            Some((_, after)) => {
                let host = &host_port[..(host_port.len() - after.len())];
                (host, after.strip_prefix(':'))
            }
            None => (host_port, None),
        }
    } else {
        match rfind_split_hole(host_port, b':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };
    (userinfo, host, port)
}
