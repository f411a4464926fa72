use staticd::http::request::{Method, Request};

fn get(path: &str) -> Request {
    Request {
        method: Method::GET,
        path: path.to_string(),
        version: "HTTP/1.1".to_string(),
    }
}

#[test]
fn test_method_from_str() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), None);
    assert_eq!(Method::from_str("Get"), None);
    assert_eq!(Method::from_str(""), None);
}

#[test]
fn test_method_display() {
    assert_eq!(Method::GET.to_string(), "GET");
}

#[test]
fn test_target_of_plain_file() {
    assert_eq!(get("/docs/guide.html").target(), "/docs/guide.html");
}

#[test]
fn test_target_of_root() {
    assert_eq!(get("/").target(), "/index.html");
}

#[test]
fn test_target_of_directory() {
    assert_eq!(get("/docs/").target(), "/docs/index.html");
}

#[test]
fn test_request_clone() {
    let req = get("/a.txt");
    assert_eq!(req.clone(), req);
}
