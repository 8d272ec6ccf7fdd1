//! Incremental parser for the first line of an HTTP/1.1 request.
//!
//! Bytes arrive from a stream in chunks of arbitrary size, including chunks
//! that end in the middle of a token or between the carriage return and line
//! feed of the terminator.  [`Request`] holds the parse state between
//! chunks, [`ReadBuffer`] accumulates unconsumed bytes, and
//! [`Request::from_reader`] drives both against any [`std::io::Read`]
//! source until a complete request line is available:
//!
//! ```
//! use std::io::Cursor;
//!
//! let stream = Cursor::new("GET / HTTP/1.1\r\n");
//! let request_line = reqline::Request::from_reader(stream).unwrap();
//! assert_eq!("GET", request_line.method);
//! assert_eq!("/", request_line.target);
//! assert_eq!("1.1", request_line.http_version);
//! ```
//!
//! Headers, bodies, and connection handling are out of scope; the crate
//! parses exactly one request line per [`Request`] and then refuses
//! further input.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod buffer;
mod error;
mod request;
mod validate;

pub use crate::buffer::ReadBuffer;
pub use crate::error::Error;
pub use crate::request::{ParseStatus, Request, RequestLine};
pub use crate::validate::{is_http_version, is_request_target, MethodSet};

// Carriage return followed by line feed, the delimiter of every line of an
// HTTP request.
const CRLF: &str = "\r\n";

// Locate the first CRLF in the given window, returning the offset of the
// carriage return.  A lone CR at the end of the window is not a match; the
// line feed may still arrive with the next chunk.
pub(crate) fn find_crlf<T>(window: T) -> Option<usize>
    where T: AsRef<[u8]>
{
    window
        .as_ref()
        .windows(CRLF.len())
        .position(|pair| pair == CRLF.as_bytes())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn find_crlf_basic() {
        assert_eq!(Some(3), find_crlf(b"abc\r\ndef"));
        assert_eq!(Some(0), find_crlf(b"\r\n"));
        assert_eq!(None, find_crlf(b"abc"));
        assert_eq!(None, find_crlf(b""));
    }

    #[test]
    fn find_crlf_ignores_lone_cr_and_lf() {
        assert_eq!(None, find_crlf(b"abc\r"));
        assert_eq!(None, find_crlf(b"abc\rdef"));
        assert_eq!(None, find_crlf(b"abc\ndef"));
        assert_eq!(Some(4), find_crlf(b"ab\rc\r\n"));
    }
}
