//! End-to-end tests running the compiled `postie` binary.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

const WORKSPACE: &str = r#"{
  "meta": {"format": "httpie", "version": "1.0.0", "contentType": "workspace"},
  "entry": {
    "name": "Petstore",
    "requests": [
      {
        "name": "List pets",
        "method": "GET",
        "url": "{{baseUrl}}/pets?limit=10",
        "headers": [
          {"name": "Accept", "value": "application/json", "enabled": true},
          {"name": "X-Debug", "value": "1", "enabled": false}
        ],
        "auth": {"type": "bearer", "credentials": {"username": "", "password": "{{token}}"}},
        "body": {"type": "none"}
      }
    ],
    "collections": [
      {
        "name": "Admin",
        "requests": [
          {
            "name": "Create pet",
            "method": "POST",
            "url": "https://api.example.com/v1/pets",
            "headers": [],
            "auth": {"type": "basic", "credentials": {"username": "admin", "password": "secret"}},
            "body": {"type": "text", "text": {"value": "{\"name\": \"{{petName}}\"}", "format": "application/json"}}
          }
        ]
      }
    ]
  },
  "environments": [
    {
      "name": "Production",
      "isDefault": true,
      "variables": [
        {"name": "baseUrl", "value": "https://api.example.com", "isSecret": false},
        {"name": "token", "value": "abc", "isSecret": true}
      ]
    }
  ]
}"#;

const LEGACY: &str = r#"{
  "name": "Inventory",
  "requests": [
    {"name": "Stock", "method": "GET", "url": "https://{{host}}/stock", "headers": []}
  ]
}"#;

fn postie() -> Command {
    Command::new(env!("CARGO_BIN_EXE_postie"))
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_convert_command() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "workspace.json", WORKSPACE);
    let output_path = dir.path().join("out.postman.json");

    let output = postie()
        .arg("convert")
        .arg(&input)
        .arg(&output_path)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let text = stdout(&output);
    assert!(text.contains("* Total APIs: 2"));
    assert!(text.contains("* Total problematic APIs: 0"));
    assert!(text.contains("* Total variables: 3"));
    assert!(text.contains("* Warnings: 1 (1 raw URLs, 0 dropped auth, 0 untranslated bodies)"));

    let json = read_json(&output_path);
    assert_eq!(json["info"]["name"], "Petstore");
    assert_eq!(
        json["info"]["schema"],
        "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
    );

    let folder = &json["item"][0];
    assert_eq!(folder["name"], "Petstore");
    let items = folder["item"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    let list = &items[0]["request"];
    assert_eq!(list["url"]["raw"], "{{baseUrl}}/pets?limit=10");
    assert_eq!(list["header"][1]["disabled"], true);
    assert_eq!(list["auth"]["bearer"][0]["value"], "{{token}}");
    assert!(list.get("body").is_none());

    let create = &items[1]["request"];
    assert_eq!(create["url"]["path"], serde_json::json!(["v1", "pets"]));
    assert_eq!(create["body"]["options"]["raw"]["language"], "json");
    assert_eq!(create["header"][0]["key"], "Content-Type");

    let mut keys: Vec<_> = json["variable"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["key"].as_str().unwrap().to_string())
        .collect();
    keys.sort();
    assert_eq!(keys, vec!["baseUrl", "petName", "token"]);
}

#[test]
fn test_default_path_converts() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "legacy.json", LEGACY);
    let output_path = dir.path().join("legacy.postman.json");

    let output = postie().arg(&input).arg(&output_path).output().unwrap();

    assert!(output.status.success());
    let json = read_json(&output_path);
    assert_eq!(json["info"]["description"], "Converted from HTTPie collection");
    assert_eq!(json["variable"][0]["key"], "host");
}

#[test]
fn test_existing_output_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "legacy.json", LEGACY);
    let taken = write(&dir, "out.json", "keep me");

    let output = postie().arg(&input).arg(&taken).output().unwrap();

    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&taken).unwrap(), "keep me");
    assert!(dir.path().join("out_1.json").exists());
    assert!(stdout(&output).contains("out_1.json"));
}

#[test]
fn test_merge_skips_malformed_input() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "workspace.json", WORKSPACE);
    let broken = write(&dir, "broken.json", "{ this is not json");
    let second = write(&dir, "legacy.json", LEGACY);
    let output_path = dir.path().join("merged.json");

    let output = postie()
        .arg("merge")
        .arg(&output_path)
        .arg(&first)
        .arg(&broken)
        .arg(&second)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("* Skipped inputs: 1"));

    let json = read_json(&output_path);
    assert_eq!(json["info"]["name"], "Merged HTTPie Collections");
    let folders: Vec<_> = json["item"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(folders, vec!["Petstore", "Inventory"]);
}

#[test]
fn test_missing_arguments_fail_with_usage() {
    let output = postie().output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));

    let output = postie().arg("only-one.json").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_missing_input_is_an_input_error() {
    let dir = TempDir::new().unwrap();
    let output = postie()
        .arg("convert")
        .arg(dir.path().join("absent.json"))
        .arg(dir.path().join("out.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_unknown_format_is_an_input_error() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "postman.json", r#"{"info": {"name": "x"}, "item": []}"#);

    let output = postie()
        .arg(&input)
        .arg(dir.path().join("out.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
}
