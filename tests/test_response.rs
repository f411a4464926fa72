use staticd::http::response::{ResponseHeader, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "File Not Found");
}

#[test]
fn test_status_code_display() {
    assert_eq!(StatusCode::Ok.to_string(), "200 OK");
    assert_eq!(StatusCode::NotFound.to_string(), "404 File Not Found");
}

#[test]
fn test_header_block_layout() {
    let header = ResponseHeader::new(StatusCode::Ok, "HTTP/1.1", "text/css", 42)
        .with_date("Fri, 16 Oct 2026 21:04:11 +0000");

    let expected = "HTTP/1.1 200 OK\r\n\
                    Date: Fri, 16 Oct 2026 21:04:11 +0000\r\n\
                    Content-Type: text/css\r\n\
                    charset=UTF-8\r\n\
                    Content-Length: 42\r\n\
                    Connection: close\r\n\
                    \r\n";

    assert_eq!(header.to_string(), expected);
    assert_eq!(header.to_bytes(), expected.as_bytes());
}

#[test]
fn test_header_echoes_request_version() {
    let header = ResponseHeader::new(StatusCode::NotFound, "HTTP/1.0", "text/html", 0);
    let text = header.to_string();

    assert!(text.starts_with("HTTP/1.0 404 File Not Found\r\n"));
    assert!(text.contains("Content-Length: 0\r\n"));
}

#[test]
fn test_header_date_is_filled_in() {
    let header = ResponseHeader::new(StatusCode::Ok, "HTTP/1.1", "text/html", 1);

    assert!(!header.date.is_empty());
    assert!(header.to_string().contains(&format!("Date: {}\r\n", header.date)));
}

#[test]
fn test_header_ends_with_blank_line() {
    let header = ResponseHeader::new(StatusCode::Ok, "HTTP/1.1", "image/png", 7);
    let text = header.to_string();

    assert!(text.ends_with("Connection: close\r\n\r\n"));
    assert_eq!(text.matches("\r\n\r\n").count(), 1);
}
