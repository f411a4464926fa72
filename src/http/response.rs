use std::fmt;

use chrono::Local;

/// Format of the `Date:` header, in the server's local time zone.
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Charset declaration, written on its own line after `Content-Type`.
const CHARSET_LINE: &str = "charset=UTF-8";

/// Status codes the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 File Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "File Not Found",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// The header block sent ahead of a file body.
///
/// The layout is fixed:
///
/// ```text
/// HTTP/1.1 200 OK
/// Date: Fri, 16 Oct 2026 21:04:11 +0200
/// Content-Type: text/html
/// charset=UTF-8
/// Content-Length: 1024
/// Connection: close
///
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    /// Version token copied from the request line
    pub version: String,
    pub status: StatusCode,
    pub date: String,
    pub content_type: String,
    pub content_length: u64,
}

impl ResponseHeader {
    /// Builds a header dated with the current local time.
    pub fn new(
        status: StatusCode,
        version: impl Into<String>,
        content_type: impl Into<String>,
        content_length: u64,
    ) -> Self {
        Self {
            version: version.into(),
            status,
            date: Local::now().format(DATE_FORMAT).to_string(),
            content_type: content_type.into(),
            content_length,
        }
    }

    /// Replaces the generated date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Serializes the header block, terminating blank line included.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for ResponseHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}\r\n", self.version, self.status)?;
        write!(f, "Date: {}\r\n", self.date)?;
        write!(f, "Content-Type: {}\r\n", self.content_type)?;
        write!(f, "{}\r\n", CHARSET_LINE)?;
        write!(f, "Content-Length: {}\r\n", self.content_length)?;
        f.write_str("Connection: close\r\n")?;
        f.write_str("\r\n")
    }
}
