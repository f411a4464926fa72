use std::fmt;

use crate::http::request::{MAX_PATH_LEN, Method, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    UnsupportedMethod(String),
    MissingPath,
    PathTooLong(usize),
    MissingVersion,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidRequest => f.write_str("malformed request line"),
            ParseError::UnsupportedMethod(m) => write!(f, "unsupported method {:?}", m),
            ParseError::MissingPath => f.write_str("request line has no path"),
            ParseError::PathTooLong(len) => {
                write!(f, "request path is {} bytes, limit is {}", len, MAX_PATH_LEN)
            }
            ParseError::MissingVersion => f.write_str("request line has no version"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses `METHOD PATH VERSION` from the first line of `buf`.
///
/// Tokens are whitespace-delimited. Anything after the first line is ignored,
/// as is anything after the third token.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = buf.iter().position(|&b| b == b'\n').unwrap_or(buf.len());
    let line = std::str::from_utf8(&buf[..line_end]).map_err(|_| ParseError::InvalidRequest)?;

    let mut parts = line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let method = Method::from_str(method_str)
        .ok_or_else(|| ParseError::UnsupportedMethod(method_str.to_string()))?;

    let path = parts.next().ok_or(ParseError::MissingPath)?;
    if path.len() > MAX_PATH_LEN {
        return Err(ParseError::PathTooLong(path.len()));
    }

    let version = parts.next().ok_or(ParseError::MissingVersion)?;

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
    })
}
