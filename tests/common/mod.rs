// Common test utilities and helpers
//
// A three version lineage over checkouts/builds/tests collections:
//   v1.0  checkouts, builds
//   v2.1  "origin" required everywhere, tests added (v2.1 adds an optional
//         checkout "start_time")
//   v3.0  ids prefixed with their origin
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use schema_lineage::prelude::*;
use serde_json::{Value, json};

/// Majors of the versions whose transforms ran, in call order.
pub type CallLog = Arc<Mutex<Vec<u32>>>;

fn version_schema(major: u32) -> Value {
    json!({
        "type": "object",
        "properties": {
            "major": {"const": major},
            "minor": {"type": "integer", "minimum": 0}
        },
        "required": ["major", "minor"],
        "additionalProperties": false
    })
}

fn list_of(reference: &str) -> Value {
    json!({"type": "array", "items": {"$ref": format!("#/definitions/{reference}")}})
}

pub fn schema_v1() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "v1",
        "type": "object",
        "properties": {
            "version": version_schema(1),
            "checkouts": list_of("checkout"),
            "builds": list_of("build")
        },
        "required": ["version"],
        "additionalProperties": false,
        "definitions": {
            "checkout": {
                "type": "object",
                "properties": {"id": {"type": "string"}},
                "required": ["id"],
                "additionalProperties": false
            },
            "build": {
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "checkout_id": {"type": "string"}
                },
                "required": ["id", "checkout_id"],
                "additionalProperties": false
            }
        }
    })
}

fn schema_with_origin(major: u32, id_pattern: &str) -> Value {
    let id = json!({"type": "string", "pattern": id_pattern});
    let origin = json!({"type": "string", "pattern": "^[a-z0-9_]+$"});
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": format!("v{major}"),
        "type": "object",
        "properties": {
            "version": version_schema(major),
            "checkouts": list_of("checkout"),
            "builds": list_of("build"),
            "tests": list_of("test")
        },
        "required": ["version"],
        "additionalProperties": false,
        "definitions": {
            "checkout": {
                "type": "object",
                "properties": {
                    "id": id,
                    "origin": origin,
                    "start_time": {"type": "string", "format": "date-time"}
                },
                "required": ["id", "origin"],
                "additionalProperties": false
            },
            "build": {
                "type": "object",
                "properties": {"id": id, "checkout_id": id, "origin": origin},
                "required": ["id", "checkout_id", "origin"],
                "additionalProperties": false
            },
            "test": {
                "type": "object",
                "properties": {
                    "id": id,
                    "build_id": id,
                    "origin": origin,
                    "status": {"enum": ["PASS", "FAIL", "SKIP"]}
                },
                "required": ["id", "build_id", "origin"],
                "additionalProperties": false
            }
        }
    })
}

pub fn schema_v2() -> Value {
    schema_with_origin(2, "^.+$")
}

pub fn schema_v3() -> Value {
    schema_with_origin(3, "^[a-z0-9_]+:.+$")
}

pub fn tree_v1() -> Tree {
    Tree::new([
        ("", vec!["checkouts"]),
        ("checkouts", vec!["builds"]),
        ("builds", vec![]),
    ])
}

pub fn tree_v2() -> Tree {
    Tree::new([
        ("", vec!["checkouts"]),
        ("checkouts", vec!["builds"]),
        ("builds", vec!["tests"]),
        ("tests", vec![]),
    ])
}

fn records_mut<'d>(data: &'d mut Value, name: &str) -> impl Iterator<Item = &'d mut Value> {
    data.get_mut(name)
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
}

/// v1 -> v2: every object gets the "legacy" origin.
pub fn inherit_v2(mut data: Value) -> Value {
    for name in ["checkouts", "builds"] {
        for record in records_mut(&mut data, name) {
            record["origin"] = json!("legacy");
        }
    }
    data["version"] = json!({"major": 2, "minor": 1});
    data
}

fn prefix(record: &mut Value, origin: &str, field: &str) {
    let prefixed = record
        .get(field)
        .and_then(Value::as_str)
        .map(|value| format!("{origin}:{value}"));
    if let Some(prefixed) = prefixed {
        record[field] = json!(prefixed);
    }
}

/// v2 -> v3: ids and references prefixed with the object's origin.
pub fn inherit_v3(mut data: Value) -> Value {
    for (name, references) in [
        ("checkouts", &[][..]),
        ("builds", &["checkout_id"][..]),
        ("tests", &["build_id"][..]),
    ] {
        for record in records_mut(&mut data, name) {
            let origin = record["origin"].as_str().unwrap_or("unknown").to_string();
            prefix(record, &origin, "id");
            for field in references {
                prefix(record, &origin, field);
            }
        }
    }
    data["version"] = json!({"major": 3, "minor": 0});
    data
}

fn recorded(
    log: &CallLog,
    major: u32,
    inherit: fn(Value) -> Value,
) -> impl Fn(Value) -> Value + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |data: Value| {
        log.lock().unwrap().push(major);
        inherit(data)
    }
}

pub fn build_lineage(config: LineageConfig, log: &CallLog) -> Lineage {
    Lineage::builder("reports")
        .config(config)
        .version(VersionSpec::root(1, 0, schema_v1(), tree_v1()))
        .version(VersionSpec::new(
            2,
            1,
            schema_v2(),
            tree_v2(),
            recorded(log, 2, inherit_v2),
        ))
        .version(VersionSpec::new(
            3,
            0,
            schema_v3(),
            tree_v2(),
            recorded(log, 3, inherit_v3),
        ))
        .build()
        .expect("fixture lineage is valid")
}

pub fn lineage() -> Lineage {
    build_lineage(LineageConfig::default(), &CallLog::default())
}

pub fn strict_lineage() -> Lineage {
    build_lineage(
        LineageConfig::builder().strict(true).build(),
        &CallLog::default(),
    )
}

pub fn recording_lineage() -> (Lineage, CallLog) {
    let log = CallLog::default();
    (build_lineage(LineageConfig::default(), &log), log)
}

pub fn calls(log: &CallLog) -> Vec<u32> {
    log.lock().unwrap().clone()
}

pub fn v1_sample() -> Value {
    json!({
        "version": {"major": 1, "minor": 0},
        "checkouts": [{"id": "c1"}],
        "builds": [{"id": "b1", "checkout_id": "c1"}]
    })
}

pub fn v2_sample() -> Value {
    json!({
        "version": {"major": 2, "minor": 0},
        "checkouts": [{"id": "c2", "origin": "ci"}],
        "builds": [{"id": "b2", "checkout_id": "c2", "origin": "ci"}],
        "tests": [
            {"id": "t1", "build_id": "b2", "origin": "ci", "status": "PASS"},
            {"id": "t2", "build_id": "b2", "origin": "ci", "status": "FAIL"}
        ]
    })
}

pub fn v3_sample() -> Value {
    json!({
        "version": {"major": 3, "minor": 0},
        "checkouts": [{"id": "lab:c3", "origin": "lab"}]
    })
}

/// Ids of a collection, in order.
pub fn ids(data: &Value, name: &str) -> Vec<String> {
    data[name]
        .as_array()
        .map(|records| {
            records
                .iter()
                .filter_map(|r| r["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
