use std::collections::HashMap;
use std::io::Write;

use super::*;
use crate::ast::Value;

const SAMPLE: &str = "\
app = \"demo\"

[servers.first]
ip = \"127.0.0.1\"
port = 8080
secure = true
weights = [1, 2, 3]
timeout = 2.5

[servers.second]
ip = \"10.0.0.1\"
max-retries = 4
";

#[test]
fn test_config_from_str_typed_access() {
    let config = OmflConfig::from_str(SAMPLE).expect("sample config should parse");

    let app: String = config.get("app").expect("app");
    assert_eq!(app, "demo");

    let ip: String = config.get("servers.first.ip").expect("ip");
    assert_eq!(ip, "127.0.0.1");

    let port: u16 = config.get("servers.first.port").expect("port");
    assert_eq!(port, 8080);

    let secure: bool = config.get("servers.first.secure").expect("secure");
    assert!(secure);

    let weights: Vec<i32> = config.get("servers.first.weights").expect("weights");
    assert_eq!(weights, vec![1, 2, 3]);

    let timeout: f32 = config.get("servers.first.timeout").expect("timeout");
    assert_eq!(timeout, 2.5);

    assert!(config.has("servers.second.ip"));
    assert!(!config.has("servers.third.ip"));
}

#[test]
fn test_snake_and_kebab_case_are_interchangeable() {
    let config = OmflConfig::from_str(SAMPLE).unwrap();

    let retries: i32 = config.get("servers.second.max-retries").unwrap();
    assert_eq!(retries, 4);

    let retries: i32 = config.get("servers.second.max_retries").unwrap();
    assert_eq!(retries, 4);
}

#[test]
fn test_get_or_and_get_optional() {
    let config = OmflConfig::from_str(SAMPLE).unwrap();

    assert_eq!(config.get_or("servers.first.port", 1u16), 8080);
    assert_eq!(config.get_or("servers.first.missing", 9000u16), 9000);

    let present: Option<String> = config.get_optional("app").unwrap();
    assert_eq!(present.as_deref(), Some("demo"));

    let absent: Option<String> = config.get_optional("nope").unwrap();
    assert!(absent.is_none());
}

#[test]
fn test_get_optional_still_reports_type_errors() {
    let config = OmflConfig::from_str(SAMPLE).unwrap();
    let result: Result<Option<i32>, OmflError> = config.get_optional("app");
    assert!(matches!(result, Err(OmflError::TypeError { .. })));
}

#[test]
fn test_get_keys_preserves_declaration_order() {
    let config = OmflConfig::from_str(SAMPLE).unwrap();
    let keys = config.get_keys("servers.first").unwrap();
    assert_eq!(keys, vec!["ip", "port", "secure", "weights", "timeout"]);

    let err = config.get_keys("servers.first.port");
    assert!(matches!(err, Err(OmflError::TypeError { .. })));
}

#[test]
fn test_get_value_root_and_sections() {
    let config = OmflConfig::from_str(SAMPLE).unwrap();

    let root = config.get_value("").unwrap();
    assert!(root.is_section());

    let section: HashMap<String, Value> = config.get("servers.second").unwrap();
    assert_eq!(section.get("ip"), Some(&Value::String("10.0.0.1".into())));
}

#[test]
fn test_string_section_conversion() {
    let config = OmflConfig::from_str("[env]\nuser = \"root\"\nshell = \"bash\"\n").unwrap();
    let map: HashMap<String, String> = config.get("env").unwrap();
    assert_eq!(map.get("user").map(String::as_str), Some("root"));
    assert_eq!(map.len(), 2);

    let mixed = OmflConfig::from_str("[env]\nuser = \"root\"\ncount = 1\n").unwrap();
    let result: Result<HashMap<String, String>, OmflError> = mixed.get("env");
    assert!(result.is_err());
}

#[test]
fn test_type_error_carries_declaring_line() {
    let config = OmflConfig::from_str(SAMPLE).unwrap();
    let result: Result<i32, OmflError> = config.get("servers.first.ip");
    match result {
        Err(OmflError::TypeError { line, message, .. }) => {
            assert_eq!(line, 4);
            assert!(message.contains("Expected integer"));
        }
        other => panic!("expected TypeError, got {:?}", other),
    }
}

#[test]
fn test_unsigned_conversion_is_range_checked() {
    let config = OmflConfig::from_str("small = 200\nbig = 70000\nneg = -1\n").unwrap();

    let small: u8 = config.get("small").unwrap();
    assert_eq!(small, 200);

    let too_big: Result<u16, OmflError> = config.get("big");
    assert!(matches!(too_big, Err(OmflError::TypeError { .. })));

    let negative: Result<u32, OmflError> = config.get("neg");
    assert!(matches!(negative, Err(OmflError::TypeError { .. })));
}

#[test]
fn test_invalid_document_becomes_syntax_error() {
    let source = "[servers]\nip = \"ok\"\nbad@key = 1\n";
    match OmflConfig::from_str(source) {
        Err(OmflError::SyntaxError { line, hint, .. }) => {
            assert_eq!(line, 3);
            assert!(hint.unwrap().contains("bad@key"));
        }
        other => panic!("expected SyntaxError, got {:?}", other.err()),
    }
}

#[test]
fn test_get_string_enum() {
    let config = OmflConfig::from_str("[theme]\nborder = \"Rounded\"\n").unwrap();

    let border = config.get_string_enum("theme.border", &["plain", "rounded", "thick"]);
    assert_eq!(border.unwrap(), "Rounded");

    let invalid = config.get_string_enum("theme.border", &["good", "better"]);
    assert!(matches!(invalid, Err(OmflError::ValidationError { .. })));
}

#[test]
fn test_get_validated() {
    let config = OmflConfig::from_str("port = 8080\n").unwrap();

    let port = config.get_validated("port", |p: &i32| (1..=65535).contains(p), "1-65535");
    assert_eq!(port.unwrap(), 8080);

    let bad = config.get_validated("port", |p: &i32| *p < 100, "under 100");
    match bad {
        Err(OmflError::ValidationError { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_from_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write config");

    let config = OmflConfig::from_file(file.path()).expect("load config");
    let ip: String = config.get("servers.first.ip").unwrap();
    assert_eq!(ip, "127.0.0.1");
    assert!(config.document().valid());
}

#[test]
fn test_from_file_missing_is_file_error() {
    let result = OmflConfig::from_file("/definitely/not/a/real/path.omfl");
    assert!(matches!(result, Err(OmflError::FileError { .. })));
}

#[test]
fn test_from_file_with_fallback() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"key = 1\n").expect("write config");

    let config =
        OmflConfig::from_file_with_fallback(Path::new("/missing/primary.omfl"), file.path())
            .expect("fallback should load");
    assert_eq!(config.get_or("key", 0), 1);

    let neither = OmflConfig::from_file_with_fallback(
        Path::new("/missing/one.omfl"),
        Path::new("/missing/two.omfl"),
    );
    match neither {
        Err(OmflError::FileError { message, .. }) => {
            assert!(message.contains("fallback"));
        }
        other => panic!("expected FileError, got {:?}", other.err()),
    }
}
