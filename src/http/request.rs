use std::fmt;

/// Longest raw request path accepted, in bytes.
pub const MAX_PATH_LEN: usize = 127;

/// HTTP request methods.
///
/// The server only ever retrieves files, so `GET` is the only method it
/// recognises. Everything else is rejected during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The request line of an incoming request.
///
/// Only the first line of what the client sent is ever looked at; headers
/// and bodies are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The path exactly as the client sent it (e.g. "/index.html")
    pub path: String,
    /// Protocol version token, echoed back in the status line
    pub version: String,
}

impl Request {
    /// Path the file is actually served from.
    ///
    /// A path naming a directory (trailing `/`) is served as that
    /// directory's `index.html`.
    pub fn target(&self) -> String {
        if self.path.ends_with('/') {
            format!("{}index.html", self.path)
        } else {
            self.path.clone()
        }
    }
}
