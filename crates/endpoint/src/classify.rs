use memchr::memchr2;

/// Scheme prefix that marks a transfer endpoint as remote.
///
/// Endpoints that do not begin with this literal are paths on the local
/// filesystem and carry no hostname.
pub const REMOTE_SCHEME: &str = "root://";

/// Classification of a transfer endpoint locator.
///
/// Produced by [`Endpoint::classify`]; borrows the hostname substring from
/// the input so classification allocates nothing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endpoint<'a> {
    /// The endpoint names a path on the local filesystem.
    Local,
    /// The endpoint names a remote location reached over the network.
    Remote {
        /// Bare hostname between the scheme and the first `:` or `/`.
        ///
        /// Empty when the locator is malformed (`root://` followed directly
        /// by a delimiter or end of string). Callers skip resolution for an
        /// empty hostname and report the address as unresolved.
        host: &'a str,
    },
}

impl<'a> Endpoint<'a> {
    /// Classifies an endpoint locator.
    ///
    /// An endpoint is remote iff it begins with [`REMOTE_SCHEME`]. The
    /// hostname is the substring from immediately after the scheme up to
    /// (but not including) the first `:` or `/`, or the end of the string.
    ///
    /// # Examples
    ///
    /// ```
    /// use endpoint::Endpoint;
    ///
    /// assert_eq!(
    ///     Endpoint::classify("root://host:1094/file"),
    ///     Endpoint::Remote { host: "host" },
    /// );
    /// assert_eq!(Endpoint::classify("/local/path"), Endpoint::Local);
    /// ```
    #[must_use]
    pub fn classify(spec: &'a str) -> Self {
        let Some(rest) = spec.strip_prefix(REMOTE_SCHEME) else {
            return Self::Local;
        };

        let end = memchr2(b':', b'/', rest.as_bytes()).unwrap_or(rest.len());
        Self::Remote { host: &rest[..end] }
    }

    /// Returns `true` when the endpoint refers to a remote location.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Returns the bare hostname for remote endpoints.
    ///
    /// Local endpoints have no hostname; remote endpoints may return an
    /// empty string when the locator is malformed.
    #[must_use]
    pub const fn host(&self) -> Option<&'a str> {
        match *self {
            Self::Local => None,
            Self::Remote { host } => Some(host),
        }
    }
}
