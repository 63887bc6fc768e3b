//! Demonstration data and self-check scenarios
//!
//! Shared by the `keypath demo` / `keypath check` subcommands and the tests.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::PathError;
use crate::resolve::{resolve, resolve_safe};

/// A document and a key path to look up in it
#[derive(Debug, Clone)]
pub struct Example {
    pub title: &'static str,
    pub object: Value,
    pub key_path: &'static str,
}

/// Examples printed by `keypath demo`
pub fn examples() -> Vec<Example> {
    vec![
        Example {
            title: "Example 1",
            object: json!({"a": {"b": {"c": "d"}}}),
            key_path: "a/b/c",
        },
        Example {
            title: "Example 2",
            object: json!({"x": {"y": {"z": "a"}}}),
            key_path: "x/y/z",
        },
        Example {
            title: "Additional Example",
            object: json!({
                "config": {
                    "database": {
                        "host": "localhost",
                        "port": 5432,
                        "credentials": {
                            "username": "admin",
                            "password": "secret"
                        }
                    }
                }
            }),
            key_path: "config/database/credentials/username",
        },
    ]
}

/// A passed self-check
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub case: usize,
    pub description: String,
}

/// Run the self-check scenarios in order, stopping at the first failure
pub fn run_checks() -> Result<Vec<CheckOutcome>, PathError> {
    let obj1 = json!({"a": {"b": {"c": "d"}}});
    let obj2 = json!({"x": {"y": {"z": "a"}}});
    let obj3 = json!({"name": "John", "age": 30});
    let obj4 = json!({
        "user": {
            "profile": {
                "personal": {"name": "Alice", "age": 25},
                "contact": {"email": "alice@example.com", "phone": "123-456-7890"}
            }
        }
    });

    let mut outcomes = Vec::with_capacity(8);

    outcomes.push(expect_value(1, &obj1, "a/b/c", &json!("d"))?);
    outcomes.push(expect_value(2, &obj2, "x/y/z", &json!("a"))?);
    outcomes.push(expect_value(3, &obj3, "name", &json!("John"))?);
    outcomes.push(expect_value(4, &obj4, "user/profile/personal/name", &json!("Alice"))?);

    match resolve(&obj1, "a/b/nonexistent") {
        Err(e @ PathError::NotFound { .. }) => outcomes.push(CheckOutcome {
            case: 5,
            description: format!("Correctly raised NotFound - {e}"),
        }),
        other => {
            return Err(PathError::CheckFailed {
                case: 5,
                details: format!("should have raised NotFound, got {other:?}"),
            })
        }
    }

    outcomes.push(expect_absent(
        6,
        resolve_safe(&obj1, "a/b/nonexistent"),
        "Safe version returns None for nonexistent key",
    )?);
    outcomes.push(expect_absent(
        7,
        resolve_safe(&obj1, ""),
        "Empty key path returns None",
    )?);
    outcomes.push(expect_absent(
        8,
        resolve_safe(&json!({}), "a/b/c"),
        "Empty object returns None",
    )?);

    Ok(outcomes)
}

fn expect_value(
    case: usize,
    obj: &Value,
    key_path: &str,
    expected: &Value,
) -> Result<CheckOutcome, PathError> {
    let result = resolve(obj, key_path)?;
    if result != Some(expected) {
        return Err(PathError::CheckFailed {
            case,
            details: format!("expected {expected}, got {}", display_result(result)),
        });
    }
    Ok(CheckOutcome {
        case,
        description: format!("{key_path} -> {}", display_value(expected)),
    })
}

fn expect_absent(
    case: usize,
    result: Option<&Value>,
    description: &str,
) -> Result<CheckOutcome, PathError> {
    match result {
        None => Ok(CheckOutcome {
            case,
            description: description.to_string(),
        }),
        Some(v) => Err(PathError::CheckFailed {
            case,
            details: format!("expected None, got {v}"),
        }),
    }
}

/// Strings print bare, everything else as compact JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn display_result(result: Option<&Value>) -> String {
    result.map_or_else(|| "None".to_string(), display_value)
}
