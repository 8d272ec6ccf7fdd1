use std::borrow::Cow;
use std::collections::HashSet;

/// The set of request methods the parser recognizes.
///
/// The set is injectable so that new registry methods can be accepted
/// without touching the parser itself: start from [`MethodSet::empty`] or
/// the default set and [`insert`](MethodSet::insert) as needed, then hand
/// the set to [`Request::with_methods`](crate::Request::with_methods).
#[derive(Clone, Debug)]
pub struct MethodSet {
    methods: HashSet<Cow<'static, str>>,
}

impl MethodSet {
    /// Create a set holding the nine methods of the RFC 9110 registry.
    #[must_use]
    pub fn new() -> Self {
        let mut methods = Self::empty();
        for method in &[
            "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
        ] {
            methods.insert(*method);
        }
        methods
    }

    /// Create a set recognizing no methods at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            methods: HashSet::new(),
        }
    }

    pub fn insert<M>(&mut self, method: M)
        where M: Into<Cow<'static, str>>
    {
        self.methods.insert(method.into());
    }

    /// Whether the given token is a recognized method.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.methods.contains(token)
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the given token is an acceptable request target.
///
/// A target is exactly `/`, or begins with `/` and splits on `/` into an
/// odd number of pieces, counting the empty leading piece.  This is a loose
/// approximation of origin-form; percent-encoding, query strings, and
/// fragments are not examined.
#[must_use]
pub fn is_request_target(token: &str) -> bool {
    if token == "/" {
        return true;
    }
    token.starts_with('/') && token.split('/').count() % 2 == 1
}

/// Whether the given token names the one protocol version the parser
/// speaks, literally `HTTP/1.1`.
#[must_use]
pub fn is_http_version(token: &str) -> bool {
    token == "HTTP/1.1"
}
