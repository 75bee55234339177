//! Percent-encoding normalization and case normalization.

use core::fmt::{self, Write as _};
use core::marker::PhantomData;

use crate::parser::char::{
    is_ascii_frag_query, is_ascii_pchar, is_nonascii_unreserved, is_utf8_byte_continue,
};
use crate::parser::str::{find_split_hole, take_xdigits2};
use crate::spec::Spec;

/// Component the percent-encoded string belongs to.
///
/// This decides which characters are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Component {
    /// Path.
    ///
    /// `unreserved`, `sub-delims`, `:`, and `@` are decoded.
    Path,
    /// Query or fragment.
    ///
    /// In addition to the characters decoded in paths, `/` and `?` are decoded.
    QueryOrFragment,
}

impl Component {
    /// Returns `true` if the ASCII character can appear unescaped in the component.
    #[inline]
    #[must_use]
    fn is_ascii_allowed(self, b: u8) -> bool {
        match self {
            Self::Path => is_ascii_pchar(b),
            Self::QueryOrFragment => is_ascii_frag_query(b),
        }
    }
}

/// Writable as a percent-encoding normalized component.
///
/// This wrapper does the things below when being formatted:
///
/// * Decode unnecessarily percent-encoded characters.
/// * Convert alphabetic characters uppercase in percent-encoded triplets.
///
/// A sequence of triplets is decoded only when it forms a complete UTF-8
/// character allowed in the component. For URIs, no non-ASCII character is
/// allowed, so such triplets are always kept.
///
/// Note that this does not newly encode raw characters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PctCaseNormalized<'a, S> {
    /// Valid component to normalize.
    source: &'a str,
    /// Component kind.
    component: Component,
    /// Spec.
    _spec: PhantomData<fn() -> S>,
}

impl<'a, S: Spec> PctCaseNormalized<'a, S> {
    /// Creates a new `PctCaseNormalized` value.
    #[inline]
    #[must_use]
    pub(crate) fn new(source: &'a str, component: Component) -> Self {
        Self {
            source,
            component,
            _spec: PhantomData,
        }
    }
}

impl<S: Spec> fmt::Display for PctCaseNormalized<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.source;

        while let Some((prefix, after_percent)) = find_split_hole(rest, b'%') {
            // Write the string before the percent-encoded triplet.
            f.write_str(prefix)?;
            let (first_decoded, after_triplet) = match take_xdigits2(after_percent) {
                Some(v) => v,
                None => {
                    // Not a triplet. This does not happen for valid input.
                    f.write_char('%')?;
                    rest = after_percent;
                    continue;
                }
            };
            rest = after_triplet;

            if first_decoded.is_ascii() {
                if self.component.is_ascii_allowed(first_decoded) {
                    f.write_char(char::from(first_decoded))?;
                } else {
                    write!(f, "%{:02X}", first_decoded)?;
                }
                continue;
            }

            match decode_utf8_char(first_decoded, after_triplet) {
                Some((c, after_char)) if is_nonascii_unreserved::<S>(c) => {
                    f.write_char(c)?;
                    rest = after_char;
                }
                // Leave the following triplets for the next iteration: the
                // first of them may start a new character.
                _ => write!(f, "%{:02X}", first_decoded)?,
            }
        }

        f.write_str(rest)
    }
}

/// Decodes the rest of the UTF-8 character from the percent-encoded triplets.
///
/// `first` is the already decoded first byte, and `rest` is the string after
/// the first triplet. Returns the character and the string after it.
#[must_use]
fn decode_utf8_char(first: u8, mut rest: &str) -> Option<(char, &str)> {
    let len = match first {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let mut buf = [first, 0, 0, 0];
    for dest in &mut buf[1..len] {
        let (byte, after_triplet) = take_xdigits2(rest.strip_prefix('%')?)?;
        if !is_utf8_byte_continue(byte) {
            return None;
        }
        *dest = byte;
        rest = after_triplet;
    }
    // Overlong and surrogate sequences are rejected here.
    let c = core::str::from_utf8(&buf[..len]).ok()?.chars().next()?;
    Some((c, rest))
}
