/// This is the enumeration of all the different kinds of errors which this
/// crate generates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The method token in the request line is not in the set of
    /// recognized methods.
    #[error("unrecognized method in request line: {0:?}")]
    InvalidMethod(String),

    /// The request target token in the request line is not a valid
    /// origin-form target.
    #[error("invalid request target in request line: {0:?}")]
    InvalidTarget(String),

    /// The version token in the request line is not the literal `HTTP/1.1`.
    #[error("unrecognized HTTP version in request line: {0:?}")]
    InvalidVersion(String),

    /// More data was offered to a request whose request line was already
    /// completely parsed.  This indicates caller misuse, not bad input.
    #[error("attempted to parse data after the request line was complete")]
    ParseAfterComplete,

    /// The attached request line does not have the three space-separated
    /// tokens of method, target, and version.
    #[error("invalid request line: {0:?}")]
    RequestLineMalformed(String),

    /// The attached bytes before the line terminator did not parse as
    /// valid text.
    #[error("request line is not valid text")]
    RequestLineNotValidText(Vec<u8>),

    /// The underlying stream reported an error other than a clean
    /// end-of-stream.
    #[error("error reading from stream")]
    StreamRead(#[source] std::io::Error),

    /// The stream ended before a complete request line was seen.
    #[error("stream ended before the request line was complete")]
    UnexpectedEndOfStream,
}

// Tests compare whole `Result` values, so errors need equality; I/O errors
// carry no useful identity beyond their kind.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidMethod(a), Self::InvalidMethod(b))
            | (Self::InvalidTarget(a), Self::InvalidTarget(b))
            | (Self::InvalidVersion(a), Self::InvalidVersion(b))
            | (Self::RequestLineMalformed(a), Self::RequestLineMalformed(b)) => a == b,
            (Self::RequestLineNotValidText(a), Self::RequestLineNotValidText(b)) => a == b,
            (Self::StreamRead(a), Self::StreamRead(b)) => a.kind() == b.kind(),
            (Self::ParseAfterComplete, Self::ParseAfterComplete)
            | (Self::UnexpectedEndOfStream, Self::UnexpectedEndOfStream) => true,
            _ => false,
        }
    }
}
