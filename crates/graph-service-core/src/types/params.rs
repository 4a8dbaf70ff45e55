//! Algorithm parameter maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

/// Algorithm-specific parameters, a JSON object keyed by parameter name.
///
/// Readers distinguish "absent" (`Ok(None)`) from "present with the wrong
/// type" (`Err(InvalidParameter)`).
///
/// # Example
///
/// ```rust
/// use graph_service_core::Parameters;
///
/// let params = Parameters::new().with("dimensions", 128).with("p", 1.0);
/// assert_eq!(params.get_u64("dimensions").unwrap(), Some(128));
/// assert_eq!(params.get_u64("walk_length").unwrap(), None);
/// assert!(params.get_str("p").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, Value>);

impl Parameters {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build from an arbitrary JSON value, which must be an object.
    pub fn from_value(value: Value) -> CoreResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(CoreError::invalid_parameter(
                "parameters",
                format!("expected a JSON object, got {}", json_type_name(&other)),
            )),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn get_u64(&self, key: &str) -> CoreResult<Option<u64>> {
        self.read(key, "an unsigned integer", Value::as_u64)
    }

    pub fn get_f64(&self, key: &str) -> CoreResult<Option<f64>> {
        self.read(key, "a number", Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> CoreResult<Option<bool>> {
        self.read(key, "a boolean", Value::as_bool)
    }

    pub fn get_str(&self, key: &str) -> CoreResult<Option<&str>> {
        self.read(key, "a string", Value::as_str)
    }

    pub fn require_u64(&self, key: &str) -> CoreResult<u64> {
        self.get_u64(key)?.ok_or_else(|| missing(key))
    }

    pub fn require_f64(&self, key: &str) -> CoreResult<f64> {
        self.get_f64(key)?.ok_or_else(|| missing(key))
    }

    pub fn require_str(&self, key: &str) -> CoreResult<&str> {
        self.get_str(key)?.ok_or_else(|| missing(key))
    }

    /// Overlay `self` on top of `defaults`; keys in `self` win.
    #[must_use]
    pub fn merged_over(&self, defaults: &Parameters) -> Parameters {
        let mut merged = defaults.0.clone();
        for (key, value) in &self.0 {
            merged.insert(key.clone(), value.clone());
        }
        Parameters(merged)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    fn read<'a, T>(
        &'a self,
        key: &str,
        expected: &str,
        convert: impl FnOnce(&'a Value) -> Option<T>,
    ) -> CoreResult<Option<T>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => convert(value).map(Some).ok_or_else(|| {
                CoreError::invalid_parameter(
                    key,
                    format!("expected {}, got {}", expected, json_type_name(value)),
                )
            }),
        }
    }
}

impl From<Map<String, Value>> for Parameters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn missing(key: &str) -> CoreError {
    CoreError::MissingParameter {
        name: key.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
