use serde::Deserialize;
use std::collections::BTreeMap;

/// Wraps the JSON Schema `default` keyword to preserve `null`.
/// Serde deserializes `Option<Value>` with JSON null as `None`; we need to
/// distinguish absent key from `"default": null`.
#[derive(Debug, Default)]
pub enum DefaultKeyword {
    /// Key "default" was absent from the schema.
    #[default]
    Absent,
    /// Key "default" was present; the value may be `Value::Null`.
    Present(serde_json::Value),
}

impl DefaultKeyword {
    /// The default value, if the key was present.
    #[must_use]
    pub const fn value(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }
}

impl<'de> Deserialize<'de> for DefaultKeyword {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v: serde_json::Value = Deserialize::deserialize(deserializer)?;
        Ok(Self::Present(v))
    }
}

/// Root or nested JSON Schema object.
///
/// Only the schema fields used by the TypeScript emitter are modeled.
/// Extra keys in the JSON are ignored via serde's default behavior.
/// Uses `BTreeMap` for deterministic property ordering (alphabetical by key).
#[derive(Debug, Default, Deserialize)]
pub struct JsonSchema {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub r#type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub properties: Option<BTreeMap<String, Box<JsonSchema>>>,

    #[serde(default)]
    pub required: Option<Vec<String>>,

    #[serde(default)]
    pub r#enum: Option<Vec<serde_json::Value>>,

    #[serde(default)]
    pub items: Option<Box<JsonSchema>>,

    #[serde(default, rename = "readOnly")]
    pub read_only: bool,

    #[serde(default)]
    pub default: DefaultKeyword,
}

impl JsonSchema {
    /// String values of `enum`, or `None` if absent, empty, or not all strings.
    #[must_use]
    pub fn string_enum_values(&self) -> Option<Vec<String>> {
        let values: &Vec<serde_json::Value> = self.r#enum.as_ref()?;
        if values.is_empty() {
            return None;
        }
        values
            .iter()
            .map(|v| v.as_str().map(String::from))
            .collect()
    }
}
