//! Parsers for authority.

use crate::parser::char;
use crate::parser::str::{
    find_split_hole, rfind_split_hole, satisfy_chars_with_pct_encoded,
};
use crate::parser::Mismatch;
use crate::spec::Spec;

/// Returns `Ok(_)` if the string matches `authority` or `iauthority`.
pub(super) fn validate_authority<S: Spec>(i: &str) -> Result<(), Mismatch> {
    // Neither `host` nor `port` can contain `@`, so the first `@` (if any)
    // terminates `userinfo`.
    let host_port = match find_split_hole(i, b'@') {
        Some((userinfo, rest)) => {
            validate_userinfo::<S>(userinfo)?;
            rest
        }
        None => i,
    };
    validate_host_port::<S>(host_port)
}

/// Returns `Ok(_)` if the string matches `userinfo` or `iuserinfo`.
fn validate_userinfo<S: Spec>(i: &str) -> Result<(), Mismatch> {
    let is_valid = satisfy_chars_with_pct_encoded(
        i,
        char::is_ascii_userinfo_ipvfutureaddr,
        char::is_nonascii_unreserved::<S>,
    );
    if is_valid {
        Ok(())
    } else {
        Err(Mismatch)
    }
}

/// Returns `Ok(_)` if the string matches `host [ ":" port ]` (or IRI version).
fn validate_host_port<S: Spec>(i: &str) -> Result<(), Mismatch> {
    if let Some(rest) = i.strip_prefix('[') {
        let (ip_literal, after) = find_split_hole(rest, b']').ok_or(Mismatch)?;
        validate_ip_literal(ip_literal)?;
        return match after.strip_prefix(':') {
            Some(port) => validate_port(port),
            None if after.is_empty() => Ok(()),
            None => Err(Mismatch),
        };
    }

    // `reg-name` and `IPv4address` never contain colons.
    let (host, port) = match rfind_split_hole(i, b':') {
        Some((host, port)) => (host, Some(port)),
        None => (i, None),
    };
    // `IPv4address` is also a valid `reg-name`, so no need to check it separately.
    validate_reg_name::<S>(host)?;
    match port {
        Some(port) => validate_port(port),
        None => Ok(()),
    }
}

/// Returns `Ok(_)` if the string matches `reg-name` or `ireg-name`.
fn validate_reg_name<S: Spec>(i: &str) -> Result<(), Mismatch> {
    let is_valid =
        satisfy_chars_with_pct_encoded(i, char::is_ascii_regname, char::is_nonascii_unreserved::<S>);
    if is_valid {
        Ok(())
    } else {
        Err(Mismatch)
    }
}

/// Returns `Ok(_)` if the string matches `port`.
fn validate_port(i: &str) -> Result<(), Mismatch> {
    if i.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Mismatch)
    }
}

/// Returns `Ok(_)` if the string matches the content of `IP-literal` (without brackets).
fn validate_ip_literal(i: &str) -> Result<(), Mismatch> {
    match i.as_bytes().first() {
        Some(b'v') | Some(b'V') => validate_ipvfuture(&i[1..]),
        _ => validate_ipv6address(i),
    }
}

/// Returns `Ok(_)` if the string matches `IPvFuture` without the leading `v`.
///
/// ```text
/// IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
/// ```
fn validate_ipvfuture(i: &str) -> Result<(), Mismatch> {
    let (version, address) = find_split_hole(i, b'.').ok_or(Mismatch)?;
    if version.is_empty() || !version.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Mismatch);
    }
    if address.is_empty()
        || !address
            .bytes()
            .all(char::is_ascii_userinfo_ipvfutureaddr)
    {
        return Err(Mismatch);
    }
    Ok(())
}

/// Returns `Ok(_)` if the string matches `IPv6address`.
///
/// ```text
/// IPv6address =                            6( h16 ":" ) ls32
///             /                       "::" 5( h16 ":" ) ls32
///             / [               h16 ] "::" 4( h16 ":" ) ls32
///             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
///             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
///             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
///             / [ *4( h16 ":" ) h16 ] "::"              ls32
///             / [ *5( h16 ":" ) h16 ] "::"              h16
///             / [ *6( h16 ":" ) h16 ] "::"
/// ls32        = ( h16 ":" h16 ) / IPv4address
/// ```
///
/// All nine forms are covered by counting 16-bit pieces on both sides of
/// the (at most one) `::`.
fn validate_ipv6address(i: &str) -> Result<(), Mismatch> {
    match i.find("::") {
        None => {
            if count_h16_pieces(i, true)? == 8 {
                Ok(())
            } else {
                Err(Mismatch)
            }
        }
        Some(pos) => {
            let (before, after) = (&i[..pos], &i[(pos + 2)..]);
            if after.contains("::") {
                return Err(Mismatch);
            }
            let num_before = if before.is_empty() {
                0
            } else {
                count_h16_pieces(before, false)?
            };
            let num_after = if after.is_empty() {
                0
            } else {
                count_h16_pieces(after, true)?
            };
            // `::` stands for at least one piece.
            if num_before + num_after <= 7 {
                Ok(())
            } else {
                Err(Mismatch)
            }
        }
    }
}

/// Counts 16-bit pieces in the colon-separated list of `h16`s.
///
/// If `allow_ipv4_tail` is true, the last element can be an `IPv4address`
/// which counts as two pieces.
fn count_h16_pieces(i: &str, allow_ipv4_tail: bool) -> Result<usize, Mismatch> {
    let (h16s, last) = match rfind_split_hole(i, b':') {
        Some((h16s, last)) => (Some(h16s), last),
        None => (None, i),
    };
    let num_last = if allow_ipv4_tail && last.contains('.') {
        validate_ipv4address(last)?;
        2
    } else {
        validate_h16(last)?;
        1
    };
    let num_h16s = match h16s {
        Some(h16s) => h16s.split(':').try_fold(0_usize, |n, h16| {
            validate_h16(h16)?;
            Ok::<_, Mismatch>(n + 1)
        })?,
        None => 0,
    };
    Ok(num_h16s + num_last)
}

/// Returns `Ok(_)` if the string matches `h16`.
fn validate_h16(i: &str) -> Result<(), Mismatch> {
    if (1..=4).contains(&i.len()) && i.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(Mismatch)
    }
}

/// Returns `Ok(_)` if the string matches `IPv4address`.
fn validate_ipv4address(i: &str) -> Result<(), Mismatch> {
    let mut num_octets = 0;
    for octet in i.split('.') {
        validate_dec_octet(octet)?;
        num_octets += 1;
    }
    if num_octets == 4 {
        Ok(())
    } else {
        Err(Mismatch)
    }
}

/// Returns `Ok(_)` if the string matches `dec-octet`.
///
/// ```text
/// dec-octet   = DIGIT                 ; 0-9
///             / %x31-39 DIGIT         ; 10-99
///             / "1" 2DIGIT            ; 100-199
///             / "2" %x30-34 DIGIT     ; 200-249
///             / "25" %x30-35          ; 250-255
/// ```
fn validate_dec_octet(i: &str) -> Result<(), Mismatch> {
    match i.as_bytes() {
        [b'0'..=b'9']
        | [b'1'..=b'9', b'0'..=b'9']
        | [b'1', b'0'..=b'9', b'0'..=b'9']
        | [b'2', b'0'..=b'4', b'0'..=b'9']
        | [b'2', b'5', b'0'..=b'5'] => Ok(()),
        _ => Err(Mismatch),
    }
}
