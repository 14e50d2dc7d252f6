use dot_path::{
    format_dot_path, get, is_child, parent, parse_dot_path, validate_dot_path, ValidationError,
};
use serde_json::json;

#[test]
fn single_segment_paths_have_no_separator() {
    assert_eq!(parse_dot_path("a"), vec!["a".to_string()]);
    assert_eq!(format_dot_path(&["a".to_string()]), "a");
}

#[test]
fn degenerate_strings_parse_but_fail_validation() {
    // parse stays permissive; validation is the gate.
    assert_eq!(parse_dot_path("a..b"), vec!["a", "", "b"]);
    assert_eq!(validate_dot_path("a..b"), Err(ValidationError::EmptySegment));
    assert_eq!(parse_dot_path("."), vec!["", ""]);
    assert_eq!(validate_dot_path("."), Err(ValidationError::EmptySegment));
}

#[test]
fn containment_and_parent_agree() {
    let deep = parse_dot_path("a.b.c");
    let mut up = deep.as_slice();
    while let Some(p) = parent(up) {
        assert!(is_child(p, &deep));
        up = p;
    }
    assert!(up.is_empty());
}

#[test]
fn lookup_follows_the_same_grammar() {
    let doc = json!({"settings": {"volume": 3, "tags": ["a", "b"]}});
    assert_eq!(
        get(&doc, &parse_dot_path("settings.volume")),
        Some(&json!(3))
    );
    assert_eq!(
        get(&doc, &parse_dot_path("settings.tags.1")),
        Some(&json!("b"))
    );
    assert_eq!(get(&doc, &parse_dot_path("settings.missing")), None);
}
