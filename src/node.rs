//! Value trees that key paths can walk
//!
//! Implemented for `serde_json::Value` and `serde_yaml::Value`. Only mappings
//! are descended into; sequences are leaves as far as a key path is concerned.

/// A node in a nested key-value tree
pub trait Node {
    /// Whether this value counts as present when used as a resolution root.
    ///
    /// Null, `false`, zero, `""`, and empty sequences/mappings are not.
    fn is_truthy(&self) -> bool;

    /// Value under `key`, only if `self` is a mapping that holds it
    fn child(&self, key: &str) -> Option<&Self>;

    /// Short type name for diagnostics
    fn kind(&self) -> &'static str;
}

impl Node for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64() != Some(0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }

    fn child(&self, key: &str) -> Option<&Self> {
        match self {
            serde_json::Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        use serde_json::Value;

        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Node for serde_yaml::Value {
    fn is_truthy(&self) -> bool {
        use serde_yaml::Value;

        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64() != Some(0.0),
            Value::String(s) => !s.is_empty(),
            Value::Sequence(items) => !items.is_empty(),
            Value::Mapping(map) => !map.is_empty(),
            Value::Tagged(tagged) => tagged.value.is_truthy(),
        }
    }

    fn child(&self, key: &str) -> Option<&Self> {
        use serde_yaml::Value;

        match self {
            Value::Mapping(map) => map.get(key),
            // `!Tag { .. }` is still a mapping underneath
            Value::Tagged(tagged) => tagged.value.child(key),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        use serde_yaml::Value;

        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Tagged(tagged) => tagged.value.kind(),
        }
    }
}
