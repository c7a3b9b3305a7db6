use super::*;

#[test]
fn test_strip_comment_basic() {
    assert_eq!(strip_comment("key = 1 # note"), "key = 1 ");
    assert_eq!(strip_comment("# whole line"), "");
    assert_eq!(strip_comment("no comment here"), "no comment here");
}

#[test]
fn test_hash_inside_string_is_literal() {
    assert_eq!(strip_comment(r#"key = "a#b""#), r#"key = "a#b""#);
    assert_eq!(strip_comment(r#"key = "a#b" # real"#), r#"key = "a#b" "#);
}

#[test]
fn test_unclosed_quote_swallows_hash() {
    // Quote state simply toggles; the malformed literal is caught later by
    // the value classifier, not here.
    assert_eq!(strip_comment(r#"key = "a#b"#), r#"key = "a#b"#);
}

#[test]
fn test_trim_spaces_is_ascii_space_only() {
    assert_eq!(trim_spaces("  padded  "), "padded");
    assert_eq!(trim_spaces("\tkeep-tabs\t"), "\tkeep-tabs\t");
    assert_eq!(trim_spaces("   "), "");
}

#[test]
fn test_split_lines_keeps_trailing_empty_segment() {
    let lines: Vec<&str> = split_lines("a\nb\n").collect();
    assert_eq!(lines, vec!["a", "b", ""]);

    let lines: Vec<&str> = split_lines("single").collect();
    assert_eq!(lines, vec!["single"]);
}

#[test]
fn test_normalize_combines_both_passes() {
    assert_eq!(normalize("  key = 1  # note"), "key = 1");
    assert_eq!(normalize(" # only a comment "), "");
}

#[test]
fn test_split_path_drops_empty_segments() {
    assert_eq!(split_path("a.b.c"), vec!["a", "b", "c"]);
    assert_eq!(split_path("a..b"), vec!["a", "b"]);
    assert_eq!(split_path(".a.b."), vec!["a", "b"]);
    assert!(split_path("").is_empty());
    assert!(split_path("...").is_empty());
}
