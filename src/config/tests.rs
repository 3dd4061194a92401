//! Tests for configuration module

use super::*;
use crate::error::Error;

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_config() {
    let yaml = r"
url: https://api.example.com
resources:
  users: /users
";

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(config.url.as_deref(), Some("https://api.example.com"));
    assert_eq!(config.resources.len(), 1);
    assert_eq!(config.resources["users"].path(), Some("/users"));
    assert_eq!(config.resources["users"].resolve(), None);
}

#[test]
fn test_load_detailed_resource() {
    let yaml = r"
resources:
  posts:
    path: /posts
    resolve: data.items
";

    let config = load_config_from_str(yaml).unwrap();
    let posts = &config.resources["posts"];
    assert_eq!(posts.path(), Some("/posts"));
    assert_eq!(posts.resolve(), Some("data.items"));
}

#[test]
fn test_resources_keep_file_order() {
    let yaml = r"
resources:
  zebras: /zebras
  apes: /apes
  mice: /mice
";

    let config = load_config_from_str(yaml).unwrap();
    let names: Vec<_> = config.resources.keys().map(String::as_str).collect();
    assert_eq!(names, ["zebras", "apes", "mice"]);
}

#[test]
fn test_load_headers() {
    let yaml = r#"
headers:
  authorization: "Bearer token"
resources:
  users: /users
"#;

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(
        config.headers.get("authorization").map(String::as_str),
        Some("Bearer token")
    );
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_no_resources_is_config_error() {
    let err = load_config_from_str("url: https://api.example.com\n").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("No resources declared"));
}

#[test]
fn test_resource_missing_path_is_rejected() {
    let yaml = r"
resources:
  posts:
    resolve: data
";

    let err = load_config_from_str(yaml).unwrap_err();
    match err {
        Error::MissingResourcePath { resource } => assert_eq!(resource, "posts"),
        other => panic!("expected missing-path error, got {other}"),
    }
}

#[test]
fn test_empty_resource_path_is_rejected() {
    let yaml = r#"
resources:
  posts: ""
"#;

    let err = load_config_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("path cannot be empty"));
}

#[test]
fn test_empty_resolve_is_rejected() {
    let yaml = r#"
resources:
  posts:
    path: /posts
    resolve: ""
"#;

    let err = load_config_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("empty 'resolve' path"));
}

#[test]
fn test_invalid_yaml_is_rejected() {
    let err = load_config_from_str("resources: [not: valid: yaml").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

// ============================================================================
// Resolve Precedence Tests
// ============================================================================

#[test]
fn test_resolve_precedence() {
    let yaml = r"
resolve: global.path
resources:
  a:
    path: /a
    resolve: own.path
  b: /b
";

    let config = load_config_from_str(yaml).unwrap();
    let a = config.resources["a"].clone();
    let b = config.resources["b"].clone();

    assert_eq!(config.resolve_for(&a, false).as_deref(), Some("own.path"));
    assert_eq!(config.resolve_for(&b, false).as_deref(), Some("global.path"));
}

#[test]
fn test_resolve_data_prop_fallback() {
    let yaml = r"
resources:
  users: /users
";

    let config = load_config_from_str(yaml).unwrap();
    let users = config.resources["users"].clone();

    assert_eq!(config.resolve_for(&users, false), None);
    assert_eq!(config.resolve_for(&users, true).as_deref(), Some("data"));
}

// ============================================================================
// Base URL Tests
// ============================================================================

#[test]
fn test_base_url_join() {
    let base = BaseUrl::parse("https://api.example.com").unwrap();
    assert_eq!(base.join("/users"), "https://api.example.com/users");
    assert_eq!(base.join("users"), "https://api.example.com/users");
}

#[test]
fn test_base_url_strips_trailing_slash() {
    let base = BaseUrl::parse("https://api.example.com/").unwrap();
    assert_eq!(base.join("/users"), "https://api.example.com/users");
}

#[test]
fn test_base_url_keeps_query_after_path() {
    let base = BaseUrl::parse("https://api.example.com?key=1").unwrap();
    assert_eq!(base.join("/users"), "https://api.example.com/users?key=1");
    assert_eq!(base.to_string(), "https://api.example.com?key=1");
}

#[test]
fn test_base_url_with_path_prefix() {
    let base = BaseUrl::parse("https://api.example.com/v2").unwrap();
    assert_eq!(base.join("/users"), "https://api.example.com/v2/users");
}

#[test]
fn test_base_url_rejects_invalid() {
    assert!(matches!(
        BaseUrl::parse("not a url").unwrap_err(),
        Error::InvalidUrl(_)
    ));
    assert!(BaseUrl::parse("").is_err());
}

#[test]
fn test_default_config_file_name() {
    assert_eq!(DEFAULT_CONFIG_FILE, "typeforge.yaml");
}
