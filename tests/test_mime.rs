use staticd::http::mime::{DEFAULT_CONTENT_TYPE, MimeTable, extract_extension};

const TABLE: &str = "\
text/html html htm
text/css css
image/jpeg jpg jpeg
image/pjpeg jpg
text/plain txt
";

#[test]
fn test_known_extension() {
    let table = MimeTable::parse(TABLE);

    assert_eq!(table.content_type_for("/style.css"), "text/css");
    assert_eq!(table.content_type_for("/photos/cat.jpeg"), "image/jpeg");
    assert_eq!(table.content_type_for("notes.txt"), "text/plain");
}

#[test]
fn test_first_match_wins() {
    let table = MimeTable::parse(TABLE);
    assert_eq!(table.content_type_for("/cat.jpg"), "image/jpeg");
}

#[test]
fn test_unknown_extension_uses_default() {
    let table = MimeTable::parse(TABLE);
    assert_eq!(table.content_type_for("/archive.zip"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_missing_extension_uses_default() {
    let table = MimeTable::parse(TABLE);

    assert_eq!(table.content_type_for("/README"), "text/html");
    assert_eq!(table.content_type_for("/"), "text/html");
}

#[test]
fn test_lookup_is_case_sensitive() {
    let table = MimeTable::parse(TABLE);
    assert_eq!(table.content_type_for("/STYLE.CSS"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_only_last_dot_counts() {
    let table = MimeTable::parse(TABLE);

    assert_eq!(table.content_type_for("/page.css.txt"), "text/plain");
    assert_eq!(extract_extension("/dir.d/file"), Some("d/file"));
    assert_eq!(table.content_type_for("/dir.d/file"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_blank_line_ends_table() {
    let table = MimeTable::parse("text/css css\n\nimage/png png\n");

    assert_eq!(table.len(), 1);
    assert_eq!(table.content_type_for("/a.png"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_whitespace_leading_line_ends_table() {
    let table = MimeTable::parse("text/css css\n  image/png png\nimage/gif gif\n");

    assert_eq!(table.len(), 1);
    assert_eq!(table.content_type_for("/a.gif"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_type_without_extensions() {
    let table = MimeTable::parse("application/x-nothing\ntext/css css\n");

    assert_eq!(table.len(), 2);
    assert!(table.entries()[0].extensions.is_empty());
    assert_eq!(table.content_type_for("/a.css"), "text/css");
}

#[test]
fn test_empty_table_still_answers() {
    let table = MimeTable::parse("");

    assert!(table.is_empty());
    assert_eq!(table.content_type_for("/a.css"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_load_missing_file_fails() {
    let result = MimeTable::load("/nonexistent/staticd/mime.types");
    assert!(result.is_err());
}

#[test]
fn test_load_bundled_table() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/mime.types");
    let table = MimeTable::load(path).unwrap();

    assert_eq!(table.content_type_for("/index.html"), "text/html");
    assert_eq!(table.content_type_for("/logo.png"), "image/png");
}

#[test]
fn test_load_table_with_invalid_utf8() {
    let dir = std::env::temp_dir().join(format!("staticd-mime-latin1-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("mime.types");
    std::fs::write(&path, b"text/css css\napplication/x-caf\xe9 caf\nimage/png png\n").unwrap();

    let table = MimeTable::load(&path).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.content_type_for("/a.css"), "text/css");
    assert_eq!(table.content_type_for("/a.png"), "image/png");
    assert_eq!(table.content_type_for("/a.zip"), DEFAULT_CONTENT_TYPE);

    std::fs::remove_dir_all(&dir).unwrap();
}
