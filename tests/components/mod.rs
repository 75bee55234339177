//! Components.
#![allow(dead_code)]

/// Test case.
#[derive(Debug, Clone, Copy)]
pub struct TestCase<'a> {
    /// Test case name.
    pub name: &'a str,
    /// Composed string.
    pub composed: &'a str,
    /// Components.
    pub components: Components<'a>,
    /// Normalized string as URI, if the composed string is an absolute URI.
    pub normalized_uri: Option<&'a str>,
    /// Normalized string as IRI, if the composed string is an absolute IRI.
    pub normalized_iri: Option<&'a str>,
}

impl TestCase<'_> {
    #[inline]
    #[must_use]
    pub fn is_uri_class(&self) -> bool {
        self.composed.is_ascii()
    }

    #[inline]
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.components.scheme.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_absolute_without_fragment(&self) -> bool {
        self.components.scheme.is_some() && self.components.fragment.is_none()
    }
}

/// Components.
#[derive(Default, Debug, Clone, Copy)]
pub struct Components<'a> {
    /// `scheme`.
    pub scheme: Option<&'a str>,
    /// `authority`.
    pub authority: Option<&'a str>,
    /// `userinfo`.
    ///
    /// Note that `authority` should also be `Some(_)` if this is `Some(_)`.
    pub userinfo: Option<&'a str>,
    /// `host`, if the authority is present.
    pub host: Option<&'a str>,
    /// `port`.
    ///
    /// Note that `authority` should also be `Some(_)` if this is `Some(_)`.
    pub port: Option<&'a str>,
    /// `path`.
    pub path: &'a str,
    /// `query`.
    pub query: Option<&'a str>,
    /// `fragment`.
    pub fragment: Option<&'a str>,
}

pub static TEST_CASES: &[TestCase<'static>] = &[
    TestCase {
        name: "full",
        composed: "https://jason@example.com:80/foo?bar#baz",
        components: Components {
            scheme: Some("https"),
            authority: Some("jason@example.com:80"),
            userinfo: Some("jason"),
            host: Some("example.com"),
            port: Some("80"),
            path: "/foo",
            query: Some("bar"),
            fragment: Some("baz"),
        },
        normalized_uri: Some("https://jason@example.com:80/foo?bar#baz"),
        normalized_iri: Some("https://jason@example.com:80/foo?bar#baz"),
    },
    TestCase {
        name: "no path with query",
        composed: "https://example.org?bar",
        components: Components {
            scheme: Some("https"),
            authority: Some("example.org"),
            userinfo: None,
            host: Some("example.org"),
            port: None,
            path: "",
            query: Some("bar"),
            fragment: None,
        },
        normalized_uri: Some("https://example.org?bar"),
        normalized_iri: Some("https://example.org?bar"),
    },
    TestCase {
        name: "no path with fragment",
        composed: "https://example.org#baz",
        components: Components {
            scheme: Some("https"),
            authority: Some("example.org"),
            userinfo: None,
            host: Some("example.org"),
            port: None,
            path: "",
            query: None,
            fragment: Some("baz"),
        },
        normalized_uri: Some("https://example.org#baz"),
        normalized_iri: Some("https://example.org#baz"),
    },
    TestCase {
        name: "no authority",
        composed: "uri:/foo?bar#baz",
        components: Components {
            scheme: Some("uri"),
            path: "/foo",
            query: Some("bar"),
            fragment: Some("baz"),
            ..Components::EMPTY
        },
        normalized_uri: Some("uri:/foo?bar#baz"),
        normalized_iri: Some("uri:/foo?bar#baz"),
    },
    TestCase {
        name: "rootless path",
        composed: "uri:foo?bar#baz",
        components: Components {
            scheme: Some("uri"),
            path: "foo",
            query: Some("bar"),
            fragment: Some("baz"),
            ..Components::EMPTY
        },
        normalized_uri: Some("uri:foo?bar#baz"),
        normalized_iri: Some("uri:foo?bar#baz"),
    },
    TestCase {
        name: "mailto",
        composed: "mailto:John.Doe@example.com",
        components: Components {
            scheme: Some("mailto"),
            path: "John.Doe@example.com",
            ..Components::EMPTY
        },
        normalized_uri: Some("mailto:John.Doe@example.com"),
        normalized_iri: Some("mailto:John.Doe@example.com"),
    },
    TestCase {
        name: "urn",
        composed: "urn:oasis:names:specification:docbook:dtd:xml:4.1.2",
        components: Components {
            scheme: Some("urn"),
            path: "oasis:names:specification:docbook:dtd:xml:4.1.2",
            ..Components::EMPTY
        },
        normalized_uri: Some("urn:oasis:names:specification:docbook:dtd:xml:4.1.2"),
        normalized_iri: Some("urn:oasis:names:specification:docbook:dtd:xml:4.1.2"),
    },
    TestCase {
        name: "IPv6 literal host",
        composed: "ldap://[2001:db8::7]/c=GB?objectClass?one",
        components: Components {
            scheme: Some("ldap"),
            authority: Some("[2001:db8::7]"),
            userinfo: None,
            host: Some("[2001:db8::7]"),
            port: None,
            path: "/c=GB",
            query: Some("objectClass?one"),
            fragment: None,
        },
        normalized_uri: Some("ldap://[2001:db8::7]/c=GB?objectClass?one"),
        normalized_iri: Some("ldap://[2001:db8::7]/c=GB?objectClass?one"),
    },
    TestCase {
        name: "IPv4 host",
        composed: "telnet://192.0.2.16:80/",
        components: Components {
            scheme: Some("telnet"),
            authority: Some("192.0.2.16:80"),
            userinfo: None,
            host: Some("192.0.2.16"),
            port: Some("80"),
            path: "/",
            query: None,
            fragment: None,
        },
        normalized_uri: Some("telnet://192.0.2.16:80/"),
        normalized_iri: Some("telnet://192.0.2.16:80/"),
    },
    TestCase {
        name: "empty port",
        composed: "http://example.com:/",
        components: Components {
            scheme: Some("http"),
            authority: Some("example.com:"),
            userinfo: None,
            host: Some("example.com"),
            port: Some(""),
            path: "/",
            query: None,
            fragment: None,
        },
        normalized_uri: Some("http://example.com:/"),
        normalized_iri: Some("http://example.com:/"),
    },
    TestCase {
        name: "empty authority",
        composed: "foo://",
        components: Components {
            scheme: Some("foo"),
            authority: Some(""),
            userinfo: None,
            host: Some(""),
            port: None,
            path: "",
            query: None,
            fragment: None,
        },
        normalized_uri: Some("foo://"),
        normalized_iri: Some("foo://"),
    },
    TestCase {
        name: "scheme only",
        composed: "foo:",
        components: Components {
            scheme: Some("foo"),
            ..Components::EMPTY
        },
        normalized_uri: Some("foo:"),
        normalized_iri: Some("foo:"),
    },
    TestCase {
        name: "uppercase and dot segments",
        composed: "HTTP://User@Example.COM:8080/a/./b/../c/%7euser?Q%2fx#F%3f",
        components: Components {
            scheme: Some("HTTP"),
            authority: Some("User@Example.COM:8080"),
            userinfo: Some("User"),
            host: Some("Example.COM"),
            port: Some("8080"),
            path: "/a/./b/../c/%7euser",
            query: Some("Q%2fx"),
            fragment: Some("F%3f"),
        },
        normalized_uri: Some("http://user@example.com:8080/a/c/~user?Q/x#F?"),
        normalized_iri: Some("http://user@example.com:8080/a/c/~user?Q/x#F?"),
    },
    TestCase {
        name: "percent-encoded non-ASCII",
        composed: "http://example.com/%C3%A9t%c3%a9",
        components: Components {
            scheme: Some("http"),
            authority: Some("example.com"),
            userinfo: None,
            host: Some("example.com"),
            port: None,
            path: "/%C3%A9t%c3%a9",
            query: None,
            fragment: None,
        },
        normalized_uri: Some("http://example.com/%C3%A9t%C3%A9"),
        normalized_iri: Some("http://example.com/\u{E9}t\u{E9}"),
    },
    TestCase {
        name: "path starting with double slash",
        composed: "foo:/.//bar",
        components: Components {
            scheme: Some("foo"),
            path: "/.//bar",
            ..Components::EMPTY
        },
        normalized_uri: Some("foo:/.//bar"),
        normalized_iri: Some("foo:/.//bar"),
    },
    TestCase {
        name: "rootless path escaping to double slash",
        composed: "foo:a/../..//b",
        components: Components {
            scheme: Some("foo"),
            path: "a/../..//b",
            ..Components::EMPTY
        },
        normalized_uri: Some("foo:/.//b"),
        normalized_iri: Some("foo:/.//b"),
    },
    TestCase {
        name: "IRI full",
        composed: "http://j\u{E1}s\u{F3}n@exampl\u{E9}.org:80/ros\u{E9}?f\u{F3}o#b\u{E1}r",
        components: Components {
            scheme: Some("http"),
            authority: Some("j\u{E1}s\u{F3}n@exampl\u{E9}.org:80"),
            userinfo: Some("j\u{E1}s\u{F3}n"),
            host: Some("exampl\u{E9}.org"),
            port: Some("80"),
            path: "/ros\u{E9}",
            query: Some("f\u{F3}o"),
            fragment: Some("b\u{E1}r"),
        },
        normalized_uri: None,
        normalized_iri: Some("http://j\u{E1}s\u{F3}n@exampl\u{E9}.org:80/ros\u{E9}?f\u{F3}o#b\u{E1}r"),
    },
    TestCase {
        name: "IRI private use in query",
        composed: "http://example.org/D\u{FC}rst?\u{E000}",
        components: Components {
            scheme: Some("http"),
            authority: Some("example.org"),
            userinfo: None,
            host: Some("example.org"),
            port: None,
            path: "/D\u{FC}rst",
            query: Some("\u{E000}"),
            fragment: None,
        },
        normalized_uri: None,
        normalized_iri: Some("http://example.org/D\u{FC}rst?\u{E000}"),
    },
    TestCase {
        name: "network-path reference",
        composed: "//example.com/foo?bar#baz",
        components: Components {
            scheme: None,
            authority: Some("example.com"),
            userinfo: None,
            host: Some("example.com"),
            port: None,
            path: "/foo",
            query: Some("bar"),
            fragment: Some("baz"),
        },
        normalized_uri: None,
        normalized_iri: None,
    },
    TestCase {
        name: "no double slash",
        composed: "example.com/foo?bar#baz",
        components: Components {
            path: "example.com/foo",
            query: Some("bar"),
            fragment: Some("baz"),
            ..Components::EMPTY
        },
        normalized_uri: None,
        normalized_iri: None,
    },
    TestCase {
        name: "absolute-path reference",
        composed: "/foo?bar#baz",
        components: Components {
            path: "/foo",
            query: Some("bar"),
            fragment: Some("baz"),
            ..Components::EMPTY
        },
        normalized_uri: None,
        normalized_iri: None,
    },
    TestCase {
        name: "relative path with empty query",
        composed: "../a/b?",
        components: Components {
            path: "../a/b",
            query: Some(""),
            ..Components::EMPTY
        },
        normalized_uri: None,
        normalized_iri: None,
    },
    TestCase {
        name: "query only",
        composed: "?bar#baz",
        components: Components {
            query: Some("bar"),
            fragment: Some("baz"),
            ..Components::EMPTY
        },
        normalized_uri: None,
        normalized_iri: None,
    },
    TestCase {
        name: "fragment only",
        composed: "#baz",
        components: Components {
            fragment: Some("baz"),
            ..Components::EMPTY
        },
        normalized_uri: None,
        normalized_iri: None,
    },
    TestCase {
        name: "empty",
        composed: "",
        components: Components::EMPTY,
        normalized_uri: None,
        normalized_iri: None,
    },
    TestCase {
        name: "IRI relative path",
        composed: "ros\u{E9}?f\u{F3}o#b\u{E1}r",
        components: Components {
            path: "ros\u{E9}",
            query: Some("f\u{F3}o"),
            fragment: Some("b\u{E1}r"),
            ..Components::EMPTY
        },
        normalized_uri: None,
        normalized_iri: None,
    },
];

impl Components<'static> {
    /// Components of the empty reference.
    pub const EMPTY: Self = Self {
        scheme: None,
        authority: None,
        userinfo: None,
        host: None,
        port: None,
        path: "",
        query: None,
        fragment: None,
    };
}
