//! Tests for relative reference calculation.

use iri_canon::{resolve_iri, resolve_uri, to_relative_iri, to_relative_uri};

/// Test cases for relative reference calculation.
// [(from, to, relative)]
const TEST_CASES: &[(&str, &str, &str)] = &[
    ("http://example.com/a/b/c", "http://example.com/a/d?q#f", "../d?q#f"),
    ("http://a/b/c/d;p?q", "http://a/b/c/g", "g"),
    ("http://a/b/c/d;p?q", "http://a/b/c/g/", "g/"),
    ("http://a/b/c/d;p?q", "http://a/b/c/", "./"),
    ("http://a/b/c/d;p?q", "http://a/b/", "../"),
    ("http://a/b/c/d;p?q", "http://a/g", "../../g"),
    ("http://a/b/c/d;p?q", "http://a/", "../../"),
    ("http://a/b/c/d;p?q", "http://a/b/c/d;p?q", "?q"),
    ("http://a/b/c/d;p?q", "http://a/b/c/d;p?y", "?y"),
    ("http://a/b/c/d;p?q", "http://a/b/c/d;p?q#s", "?q#s"),
    ("http://a/b/c/d;p?q", "http://a/b/c/d;p", "d;p"),
    ("http://a/b/c/d;p", "http://a/b/c/d;p", ""),
    ("http://a/b/c/d;p", "http://a/b/c/d;p#s", "#s"),
    ("http://a/b/c/d;p", "http://a/b/c/g:h", "./g:h"),
    ("http://a/b/c/d;p", "http://a/b/c//g", ".//g"),
    ("http://a/b/c/d;p", "http://a/x/y/z", "../../x/y/z"),
    ("http://a/b/c/d;p", "https://a/b/c/g", "https://a/b/c/g"),
    ("http://a/b/c/d;p", "http://b/b/c/g", "http://b/b/c/g"),
    ("http://a/b/c/d;p", "http://a", "http://a"),
    ("foo:a/b", "foo:a/c", "c"),
    ("urn:x/y/z", "urn:x/w", "../w"),
    ("foo:a/b/c", "foo:a/d", "../d"),
    ("foo:x/b", "foo:a/c", "foo:a/c"),
    ("foo:a/b", "foo:/c", "/c"),
    ("foo:a", "foo:b", "b"),
    ("foo:/a/b", "foo:/a//c", ".//c"),
    ("file:///home/user/a.txt", "file:///home/user/b/c.txt", "b/c.txt"),
    ("file:///home/user/a.txt", "file:///etc/hosts", "../../etc/hosts"),
];

#[test]
fn relative() {
    for (from, to, expected) in TEST_CASES {
        assert_eq!(
            to_relative_uri(from, to).as_deref(),
            Ok(*expected),
            "from = {from:?}, to = {to:?}"
        );
        assert_eq!(
            to_relative_iri(from, to).as_deref(),
            Ok(*expected),
            "from = {from:?}, to = {to:?}"
        );
    }
}

/// Resolving the relative reference against `from` should give `to` back.
#[test]
fn round_trip() {
    for (from, to, _) in TEST_CASES {
        let relative = to_relative_uri(from, to).expect("should be valid URIs");
        assert_eq!(
            resolve_uri(&relative, from).as_deref(),
            Ok(*to),
            "from = {from:?}, to = {to:?}, relative = {relative:?}"
        );
    }
}

#[test]
fn non_ascii() {
    let from = "http://example.com/r\u{E9}sum\u{E9}/index.html";
    let to = "http://example.com/r\u{E9}sum\u{E9}/photos/\u{3042}.png";
    let relative = to_relative_iri(from, to).expect("should be valid IRIs");
    assert_eq!(relative, "photos/\u{3042}.png");
    assert_eq!(resolve_iri(&relative, from).as_deref(), Ok(to));
    assert!(to_relative_uri(from, to).is_err());
}

#[test]
fn invalid_input() {
    let err = to_relative_uri("http://a/b#f", "http://a/c").unwrap_err();
    assert_eq!(err.to_string(), "Invalid absolute-URI: http://a/b#f");
    let err = to_relative_uri("http://a/b", "c").unwrap_err();
    assert_eq!(err.to_string(), "Invalid URI: c");
}
