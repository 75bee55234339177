//! Functions for common string operations.

/// Returns the position of the first occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle)
    }
}

/// Returns the position of the last occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memrchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().rposition(|&b| b == needle)
    }
}

/// Returns the position of the first occurrence of either of the given bytes.
#[inline]
#[must_use]
fn find2(haystack: &[u8], needle1: u8, needle2: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr2(needle1, needle2, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .iter()
            .position(|&b| b == needle1 || b == needle2)
    }
}

/// Returns the position of the first occurrence of any of the given bytes.
#[inline]
#[must_use]
fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr3(needle1, needle2, needle3, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .iter()
            .position(|&b| b == needle1 || b == needle2 || b == needle3)
    }
}

/// Splits the string at the first occurrence of the byte.
///
/// The byte at the split position remains at the head of the second string.
///
/// # Precondition
///
/// The given byte must be an ASCII character.
#[inline]
#[must_use]
pub(crate) fn find_split(s: &str, c: u8) -> Option<(&str, &str)> {
    debug_assert!(c.is_ascii());
    find(s.as_bytes(), c).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of the byte, and drops the byte.
///
/// # Precondition
///
/// The given byte must be an ASCII character.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, c: u8) -> Option<(&str, &str)> {
    debug_assert!(c.is_ascii());
    find(s.as_bytes(), c).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the last occurrence of the byte, and drops the byte.
///
/// # Precondition
///
/// The given byte must be an ASCII character.
#[inline]
#[must_use]
pub(crate) fn rfind_split_hole(s: &str, c: u8) -> Option<(&str, &str)> {
    debug_assert!(c.is_ascii());
    rfind(s.as_bytes(), c).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of either of the bytes, and drops it.
///
/// Returns the prefix, the found byte, and the suffix.
#[inline]
#[must_use]
pub(crate) fn find_split2_hole(s: &str, c1: u8, c2: u8) -> Option<(&str, u8, &str)> {
    debug_assert!(c1.is_ascii() && c2.is_ascii());
    find2(s.as_bytes(), c1, c2).map(|pos| (&s[..pos], s.as_bytes()[pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of any of the bytes.
///
/// The byte at the split position remains at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn find_split3(s: &str, c1: u8, c2: u8, c3: u8) -> Option<(&str, &str)> {
    debug_assert!(c1.is_ascii() && c2.is_ascii() && c3.is_ascii());
    find3(s.as_bytes(), c1, c2, c3).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of any of the bytes, and drops it.
///
/// Returns the prefix, the found byte, and the suffix.
#[must_use]
pub(crate) fn find_split4_hole(
    s: &str,
    c1: u8,
    c2: u8,
    c3: u8,
    c4: u8,
) -> Option<(&str, u8, &str)> {
    debug_assert!(c1.is_ascii() && c2.is_ascii() && c3.is_ascii() && c4.is_ascii());
    s.bytes()
        .position(|b| b == c1 || b == c2 || b == c3 || b == c4)
        .map(|pos| (&s[..pos], s.as_bytes()[pos], &s[(pos + 1)..]))
}

/// Returns `true` if the string starts with two hexadecimal digits.
#[inline]
#[must_use]
pub(crate) fn starts_with_double_hexdigits(s: &str) -> bool {
    matches!(s.as_bytes(), [a, b, ..] if a.is_ascii_hexdigit() && b.is_ascii_hexdigit())
}

/// Decodes two hexadecimal digits at the head of the string into a byte.
///
/// Returns `None` if the string does not start with two hexadecimal digits.
#[must_use]
pub(crate) fn take_xdigits2(s: &str) -> Option<(u8, &str)> {
    /// Converts a hexadecimal digit into its value.
    fn hexdigit_value(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    match s.as_bytes() {
        [upper, lower, ..] => {
            let value = (hexdigit_value(*upper)? << 4) | hexdigit_value(*lower)?;
            Some((value, &s[2..]))
        }
        _ => None,
    }
}

/// Returns `true` if all characters in the string satisfy the predicates.
///
/// `pred_ascii` is applied to ASCII characters and `pred_nonascii` to the others.
#[must_use]
fn satisfy_chars<F, G>(s: &str, pred_ascii: F, pred_nonascii: G) -> bool
where
    F: Copy + Fn(u8) -> bool,
    G: Copy + Fn(char) -> bool,
{
    if s.is_ascii() {
        return s.bytes().all(pred_ascii);
    }
    s.chars().all(|c| {
        if c.is_ascii() {
            pred_ascii(c as u8)
        } else {
            pred_nonascii(c)
        }
    })
}

/// Returns `true` if the string consists of characters satisfying the
/// predicates and well-formed percent-encoded triplets.
///
/// The predicates are never called for `%`.
#[must_use]
pub(crate) fn satisfy_chars_with_pct_encoded<F, G>(
    mut s: &str,
    pred_ascii: F,
    pred_nonascii: G,
) -> bool
where
    F: Copy + Fn(u8) -> bool,
    G: Copy + Fn(char) -> bool,
{
    while let Some((prefix, after_percent)) = find_split_hole(s, b'%') {
        if !satisfy_chars(prefix, pred_ascii, pred_nonascii)
            || !starts_with_double_hexdigits(after_percent)
        {
            return false;
        }
        s = &after_percent[2..];
    }
    satisfy_chars(s, pred_ascii, pred_nonascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits() {
        assert_eq!(find_split("a/b/c", b'/'), Some(("a", "/b/c")));
        assert_eq!(find_split_hole("a/b/c", b'/'), Some(("a", "b/c")));
        assert_eq!(rfind_split_hole("a/b/c", b'/'), Some(("a/b", "c")));
        assert_eq!(find_split2_hole("p?q#f", b'?', b'#'), Some(("p", b'?', "q#f")));
        assert_eq!(find_split3("auth#f", b'/', b'?', b'#'), Some(("auth", "#f")));
        assert_eq!(
            find_split4_hole("//a:b", b':', b'/', b'?', b'#'),
            Some(("", b'/', "/a:b"))
        );
        assert_eq!(find_split_hole("abc", b'/'), None);
    }

    #[test]
    fn xdigits() {
        assert_eq!(take_xdigits2("2fx"), Some((0x2f, "x")));
        assert_eq!(take_xdigits2("E9"), Some((0xE9, "")));
        assert_eq!(take_xdigits2("g0"), None);
        assert_eq!(take_xdigits2("0"), None);
    }

    #[test]
    fn pct_encoded_triplets_must_be_complete() {
        let pred = |b: u8| b.is_ascii_alphanumeric();
        let never = |_: char| false;
        assert!(satisfy_chars_with_pct_encoded("a%20b", pred, never));
        assert!(!satisfy_chars_with_pct_encoded("a%2", pred, never));
        assert!(!satisfy_chars_with_pct_encoded("%%30%30", pred, never));
        assert!(!satisfy_chars_with_pct_encoded("\u{E9}", pred, never));
    }
}
