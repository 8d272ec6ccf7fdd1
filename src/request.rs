use std::io::Read;

use super::buffer::ReadBuffer;
use super::error::Error;
use super::validate::{is_http_version, is_request_target, MethodSet};
use super::{find_crlf, CRLF};

/// A single parsed HTTP/1.1 request line.
///
/// Only the tokenizer constructs these, from tokens that already passed
/// their validators, so all three fields are non-empty and individually
/// valid.  `http_version` holds the part after the slash, `"1.1"`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestLine {
    pub method: String,
    pub target: String,
    pub http_version: String,
}

/// Tokenize and validate the first line of the given window.
///
/// Returns `Ok(None)` when the window holds no complete line yet.  On
/// success the returned count is the total number of bytes to discard from
/// the front of the window: the tokens, the separating spaces, and the
/// terminator itself.
fn parse_request_line(
    raw_message: &[u8],
    methods: &MethodSet,
) -> Result<Option<(RequestLine, usize)>, Error> {
    let line_end = match find_crlf(raw_message) {
        Some(line_end) => line_end,
        None => return Ok(None),
    };
    let request_line = &raw_message[..line_end];
    let request_line = std::str::from_utf8(request_line)
        .map_err(|_| Error::RequestLineNotValidText(request_line.to_vec()))?;

    // Exactly one space between tokens is assumed; anything past the third
    // token is ignored.
    let tokens = request_line.split(' ').collect::<Vec<&str>>();
    if tokens.len() < 3 {
        return Err(Error::RequestLineMalformed(request_line.into()));
    }
    let (method, target, version) = (tokens[0], tokens[1], tokens[2]);
    if !methods.contains(method) {
        return Err(Error::InvalidMethod(method.into()));
    }
    if !is_request_target(target) {
        return Err(Error::InvalidTarget(target.into()));
    }
    if !is_http_version(version) {
        return Err(Error::InvalidVersion(version.into()));
    }
    Ok(Some((
        RequestLine {
            method: method.into(),
            target: target.into(),
            http_version: version["HTTP/".len()..].into(),
        },
        line_end + CRLF.len(),
    )))
}

// Completion owns the result, so a completed request provably has a
// request line and an incomplete one provably does not.
#[derive(Debug, Eq, PartialEq)]
enum RequestState {
    RequestLine,
    Complete(RequestLine),
}

#[derive(Debug, Eq, PartialEq)]
pub enum ParseStatus {
    Complete,
    Incomplete,
}

/// An in-flight request-line parse.
///
/// Feed it byte windows with [`parse`](Request::parse) as they arrive, or
/// let [`from_reader`](Request::from_reader) drive the whole loop.  Each
/// `Request` parses exactly one request line; once complete, further
/// `parse` calls fail with [`Error::ParseAfterComplete`].
pub struct Request {
    methods: MethodSet,
    state: RequestState,
}

impl Request {
    #[must_use]
    pub fn new() -> Self {
        Self::with_methods(MethodSet::new())
    }

    /// Create a request recognizing a caller-chosen set of methods instead
    /// of the default one.
    #[must_use]
    pub fn with_methods(methods: MethodSet) -> Self {
        Self {
            methods,
            state: RequestState::RequestLine,
        }
    }

    /// Offer the unconsumed bytes read so far.
    ///
    /// Returns the number of bytes consumed, which the caller must discard
    /// from the front of its buffer before the next call.
    /// `(Incomplete, 0)` means no complete line is present yet and more
    /// bytes are needed; validation failures are fatal and leave the
    /// request unchanged, so re-offering the same bytes fails the same way.
    pub fn parse<T>(&mut self, raw_message: T) -> Result<(ParseStatus, usize), Error>
        where T: AsRef<[u8]>
    {
        match self.state {
            RequestState::RequestLine => {
                match parse_request_line(raw_message.as_ref(), &self.methods)? {
                    Some((request_line, consumed)) => {
                        self.state = RequestState::Complete(request_line);
                        Ok((ParseStatus::Complete, consumed))
                    },
                    None => Ok((ParseStatus::Incomplete, 0)),
                }
            },
            RequestState::Complete(_) => Err(Error::ParseAfterComplete),
        }
    }

    /// The parsed request line, once complete.
    #[must_use]
    pub fn request_line(&self) -> Option<&RequestLine> {
        match &self.state {
            RequestState::Complete(request_line) => Some(request_line),
            RequestState::RequestLine => None,
        }
    }

    /// Read from the given stream until a complete request line has been
    /// parsed, using the default method set.
    pub fn from_reader<R>(reader: R) -> Result<RequestLine, Error>
        where R: Read
    {
        Self::new().read_request_line(reader)
    }

    /// Drive this request against the given stream: read a chunk, offer it
    /// to the parser, compact the buffer, repeat.
    ///
    /// The buffer starts small and doubles whenever a read would find it
    /// full.  A stream that ends before the terminator was seen yields
    /// [`Error::UnexpectedEndOfStream`]; any other read error is passed
    /// through as [`Error::StreamRead`] without retrying.
    pub fn read_request_line<R>(mut self, mut reader: R) -> Result<RequestLine, Error>
        where R: Read
    {
        let mut buffer = ReadBuffer::new();
        loop {
            let read = reader.read(buffer.spare_mut()).map_err(Error::StreamRead)?;
            if read == 0 {
                return Err(Error::UnexpectedEndOfStream);
            }
            buffer.advance(read);
            let (status, consumed) = self.parse(buffer.filled())?;
            buffer.consume(consumed);
            if status == ParseStatus::Complete {
                break;
            }
        }
        match self.state {
            RequestState::Complete(request_line) => Ok(request_line),
            RequestState::RequestLine => Err(Error::UnexpectedEndOfStream),
        }
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}
