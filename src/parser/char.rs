//! Helpers for characters.

use crate::spec::Spec;

/// Checks if the given character matches `unreserved` rule (ASCII only).
#[inline]
#[must_use]
pub(crate) fn is_ascii_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given character matches `sub-delims` rule.
#[inline]
#[must_use]
pub(crate) fn is_ascii_sub_delim(c: u8) -> bool {
    matches!(
        c,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Checks if the given character can appear after the first character of `scheme`.
#[inline]
#[must_use]
pub(crate) fn is_ascii_scheme_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'+' | b'-' | b'.')
}

/// Checks if the given ASCII character is allowed in `reg-name`.
///
/// Note that `%` is not included: percent-encoded triplets are checked separately.
#[inline]
#[must_use]
pub(crate) fn is_ascii_regname(c: u8) -> bool {
    is_ascii_unreserved(c) || is_ascii_sub_delim(c)
}

/// Checks if the given ASCII character is allowed in `userinfo` or the address part of `IPvFuture`.
#[inline]
#[must_use]
pub(crate) fn is_ascii_userinfo_ipvfutureaddr(c: u8) -> bool {
    is_ascii_regname(c) || c == b':'
}

/// Checks if the given ASCII character matches `pchar` (except percent-encoded triplets).
#[inline]
#[must_use]
pub(crate) fn is_ascii_pchar(c: u8) -> bool {
    is_ascii_regname(c) || c == b':' || c == b'@'
}

/// Checks if the given ASCII character is allowed in `path` (except percent-encoded triplets).
#[inline]
#[must_use]
pub(crate) fn is_ascii_pchar_slash(c: u8) -> bool {
    is_ascii_pchar(c) || c == b'/'
}

/// Checks if the given ASCII character is allowed in `query` or `fragment`.
#[inline]
#[must_use]
pub(crate) fn is_ascii_frag_query(c: u8) -> bool {
    is_ascii_pchar(c) || c == b'/' || c == b'?'
}

/// Checks if the given character matches `ucschar` rule.
#[must_use]
pub(crate) fn is_ucschar(c: char) -> bool {
    matches!(
        u32::from(c),
        0xA0..=0xD7FF |
        0xF900..=0xFDCF |
        0xFDF0..=0xFFEF |
        0x1_0000..=0x1_FFFD |
        0x2_0000..=0x2_FFFD |
        0x3_0000..=0x3_FFFD |
        0x4_0000..=0x4_FFFD |
        0x5_0000..=0x5_FFFD |
        0x6_0000..=0x6_FFFD |
        0x7_0000..=0x7_FFFD |
        0x8_0000..=0x8_FFFD |
        0x9_0000..=0x9_FFFD |
        0xA_0000..=0xA_FFFD |
        0xB_0000..=0xB_FFFD |
        0xC_0000..=0xC_FFFD |
        0xD_0000..=0xD_FFFD |
        0xE_1000..=0xE_FFFD
    )
}

/// Checks if the given character matches `iprivate` rule.
#[must_use]
pub(crate) fn is_iprivate(c: char) -> bool {
    matches!(
        u32::from(c),
        0xE000..=0xF8FF | 0xF_0000..=0xF_FFFD | 0x10_0000..=0x10_FFFD
    )
}

/// Checks if the given non-ASCII character matches `unreserved` or `iunreserved` rule.
#[inline]
#[must_use]
pub(crate) fn is_nonascii_unreserved<S: Spec>(c: char) -> bool {
    S::is_nonascii_char_unreserved(c)
}

/// Checks if the given non-ASCII character is allowed in `query` or `iquery`.
#[inline]
#[must_use]
pub(crate) fn is_nonascii_query<S: Spec>(c: char) -> bool {
    S::is_nonascii_char_unreserved(c) || S::is_nonascii_char_private(c)
}

/// Checks if the given non-ASCII character is allowed in `fragment` or `ifragment`.
#[inline]
#[must_use]
pub(crate) fn is_nonascii_fragment<S: Spec>(c: char) -> bool {
    S::is_nonascii_char_unreserved(c)
}

/// Checks if the given byte is a continue byte of UTF-8 sequence.
#[inline]
#[must_use]
pub(crate) fn is_utf8_byte_continue(b: u8) -> bool {
    (b & 0b1100_0000) == 0b1000_0000
}
