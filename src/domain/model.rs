use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Ages must be strictly greater than this to count as adult.
pub const ADULT_AGE: u32 = 18;

/// A user as it arrives from the input. Both fields are kept as raw JSON so
/// that wrongly typed values can be filtered instead of failing the parse.
///
/// `name` is `None` only when the key is absent; an explicit `null` is
/// `Some(Value::Null)` and renders differently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,
    #[serde(default)]
    pub age: Value,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl UserRecord {
    pub fn new(name: impl Into<Value>, age: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            age: age.into(),
        }
    }

    /// Only numeric ages qualify; `"20"` is not an adult.
    pub fn is_adult(&self) -> bool {
        self.age
            .as_f64()
            .is_some_and(|age| age > f64::from(ADULT_AGE))
    }

    /// The name as trimmed text, or `None` if nothing printable remains.
    pub fn display_name(&self) -> Option<String> {
        let name = match &self.name {
            Some(value) => coerce_to_text(value),
            None => "undefined".to_string(),
        };
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Text form of a JSON value with ECMAScript `String(value)` semantics.
fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Numbers are IEEE doubles: shortest round-trip digits, exponent form at
/// or above 1e21 and below 1e-6.
fn number_to_text(n: &Number) -> String {
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }

    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        // f64's Display drops the fractional part of integral values: 20.0 -> "20"
        return f.to_string();
    }

    let exponent_form = format!("{:e}", f);
    match exponent_form.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => exponent_form,
    }
}

/// A generic JSON object record. Field order from the input is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Numeric grade. Booleans count as 1 and 0.
    pub fn grade(&self) -> Option<f64> {
        match self.get("grade")? {
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            other => other.as_f64(),
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}
