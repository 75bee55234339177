//! `remove_dot_segments` algorithm described in [RFC 3986 5.2.4].
//!
//! [RFC 3986 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use alloc::string::String;

use crate::parser::str::{find, rfind};

/// Kind of a dot segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DotSegment {
    /// `.`.
    Current,
    /// `..`.
    Parent,
}

/// Returns the length of the leading dot, if the string starts with one.
///
/// A percent-encoded dot (`%2E` or `%2e`) is also a dot (RFC 3986 section 6.2.2.2).
#[must_use]
fn leading_dot_len(s: &str) -> Option<usize> {
    match s.as_bytes() {
        [b'.', ..] => Some(1),
        [b'%', b'2', b'E' | b'e', ..] => Some(3),
        _ => None,
    }
}

/// Returns the kind of the segment if it is a dot segment.
///
/// The segment must not contain a slash.
#[must_use]
fn dot_segment(segment: &str) -> Option<DotSegment> {
    let rest = &segment[leading_dot_len(segment)?..];
    if rest.is_empty() {
        return Some(DotSegment::Current);
    }
    if rest.len() == leading_dot_len(rest)? {
        return Some(DotSegment::Parent);
    }
    None
}

/// Splits the path at the end of the first segment.
///
/// The first segment includes the leading slash if present. The second
/// string is empty or starts with a slash.
#[must_use]
fn split_first_segment(path: &str) -> (&str, &str) {
    let start = usize::from(path.starts_with('/'));
    match find(&path.as_bytes()[start..], b'/') {
        Some(pos) => path.split_at(start + pos),
        None => (path, ""),
    }
}

/// Removes the last segment and its preceding slash (if any) from the buffer.
fn pop_last_segment(output: &mut String) {
    match rfind(output.as_bytes(), b'/') {
        Some(pos) => output.truncate(pos),
        None => output.clear(),
    }
}

/// Removes dot segments from the path.
///
/// ```text
/// /a/b/c/./../../g     -> /a/g
/// mid/content=5/../6   -> mid/6
/// ```
#[must_use]
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let mut output = String::with_capacity(path.len());
    let mut input = path;

    while !input.is_empty() {
        let (segment, rest) = split_first_segment(input);
        match segment.strip_prefix('/') {
            // Rules A and D: `../`, `./`, `..`, and `.` at the beginning.
            None => {
                if dot_segment(segment).is_some() {
                    // `rest` is empty or starts with a slash.
                    input = rest.get(1..).unwrap_or("");
                } else {
                    // Rule E.
                    output.push_str(segment);
                    input = rest;
                }
            }
            Some(name) => match dot_segment(name) {
                // Rule B: `/./` and `/.`.
                Some(DotSegment::Current) => {
                    input = if rest.is_empty() { "/" } else { rest };
                }
                // Rule C: `/../` and `/..`.
                Some(DotSegment::Parent) => {
                    input = if rest.is_empty() { "/" } else { rest };
                    pop_last_segment(&mut output);
                }
                // Rule E.
                None => {
                    output.push_str(segment);
                    input = rest;
                }
            },
        }
    }

    output
}
