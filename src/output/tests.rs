//! Tests for output module

use super::*;
use crate::typegen::{Declarations, Dialect, TypeInferrer};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn infer(sample: &serde_json::Value, resource: &str, dialect: Dialect) -> Declarations {
    TypeInferrer::new()
        .with_root_name(resource)
        .with_dialect(dialect)
        .infer(sample)
        .unwrap()
}

// ============================================================================
// Path Building Tests
// ============================================================================

#[test]
fn test_declaration_path() {
    let path = declaration_path(Path::new("types"), "users", ".d.ts");
    assert_eq!(path, Path::new("types/users.d.ts"));
}

#[test]
fn test_declaration_path_per_dialect() {
    let out = Path::new("out");
    assert_eq!(
        declaration_path(out, "posts", Dialect::TypeScript.extension()),
        Path::new("out/posts.d.ts")
    );
    assert_eq!(
        declaration_path(out, "posts", Dialect::Flow.extension()),
        Path::new("out/posts.flow.js")
    );
    assert_eq!(
        declaration_path(out, "posts", Dialect::GraphQl.extension()),
        Path::new("out/posts.graphql")
    );
}

// ============================================================================
// Writer Tests
// ============================================================================

#[test]
fn test_write_declarations_creates_file() {
    let dir = tempdir().unwrap();
    let decls = infer(
        &json!({"id": 1, "name": "Alice"}),
        "users",
        Dialect::TypeScript,
    );

    let path = write_declarations(dir.path(), "users", &decls).unwrap();

    assert_eq!(path, dir.path().join("users.d.ts"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "export interface Users {\n  id: number,\n  name: string\n}\n"
    );
}

#[test]
fn test_write_declarations_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("generated").join("types");
    let decls = infer(&json!({"id": 1}), "users", Dialect::TypeScript);

    let path = write_declarations(&out_dir, "users", &decls).unwrap();

    assert!(path.exists());
    assert_eq!(path, out_dir.join("users.d.ts"));
}

#[test]
fn test_write_declarations_flow_file() {
    let dir = tempdir().unwrap();
    let decls = infer(&json!({"id": 1}), "users", Dialect::Flow);

    let path = write_declarations(dir.path(), "users", &decls).unwrap();

    assert_eq!(path, dir.path().join("users.flow.js"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "// @flow\n\nexport interface Users {\n  id: number\n}\n");
}

#[test]
fn test_write_declarations_graphql_file() {
    let dir = tempdir().unwrap();
    let decls = infer(&json!({"id": 1}), "users", Dialect::GraphQl);

    let path = write_declarations(dir.path(), "users", &decls).unwrap();

    assert_eq!(path, dir.path().join("users.graphql"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "type Users {\n  id: Number\n}\n");
}

#[test]
fn test_write_declarations_overwrites_existing_file() {
    let dir = tempdir().unwrap();

    let first = infer(&json!({"id": 1}), "users", Dialect::TypeScript);
    write_declarations(dir.path(), "users", &first).unwrap();

    let second = infer(&json!({"name": "Alice"}), "users", Dialect::TypeScript);
    let path = write_declarations(dir.path(), "users", &second).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "export interface Users {\n  name: string\n}\n");
}

#[test]
fn test_write_declarations_reports_blocked_directory() {
    let dir = tempdir().unwrap();
    // A file standing where the output directory should go.
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, "not a directory").unwrap();

    let decls = infer(&json!({"id": 1}), "users", Dialect::TypeScript);
    let result = write_declarations(blocker.join("types"), "users", &decls);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("output directory"));
}
