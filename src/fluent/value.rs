// src/fluent/value.rs

use chrono::NaiveDateTime;
use serde::Serialize;

/// Value stored behind a fluent accessor.
///
/// The map is weakly typed: any variant may replace any other, except that a
/// `List` slot always stays a list (see [`FluentValue::into_list`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FluentValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
    List(Vec<FluentValue>),
}

impl FluentValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FluentValue::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, FluentValue::List(_))
    }

    /// Coerce to a list: `Null` → empty, `List` → itself, scalar → one element.
    pub fn into_list(self) -> Vec<FluentValue> {
        match self {
            FluentValue::Null => Vec::new(),
            FluentValue::List(items) => items,
            other => vec![other],
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FluentValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FluentValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FluentValue]> {
        match self {
            FluentValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for FluentValue {
    fn from(v: bool) -> Self {
        FluentValue::Bool(v)
    }
}

impl From<i64> for FluentValue {
    fn from(v: i64) -> Self {
        FluentValue::Int(v)
    }
}

impl From<i32> for FluentValue {
    fn from(v: i32) -> Self {
        FluentValue::Int(i64::from(v))
    }
}

impl From<f64> for FluentValue {
    fn from(v: f64) -> Self {
        FluentValue::Float(v)
    }
}

impl From<&str> for FluentValue {
    fn from(v: &str) -> Self {
        FluentValue::Text(v.to_string())
    }
}

impl From<String> for FluentValue {
    fn from(v: String) -> Self {
        FluentValue::Text(v)
    }
}

impl From<NaiveDateTime> for FluentValue {
    fn from(v: NaiveDateTime) -> Self {
        FluentValue::DateTime(v)
    }
}

impl<T: Into<FluentValue>> From<Option<T>> for FluentValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FluentValue::Null, Into::into)
    }
}

impl<T: Into<FluentValue>> From<Vec<T>> for FluentValue {
    fn from(v: Vec<T>) -> Self {
        FluentValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for FluentValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;

        match v {
            Value::Null => FluentValue::Null,
            Value::Bool(b) => FluentValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FluentValue::Int(i),
                None => n.as_f64().map_or(FluentValue::Null, FluentValue::Float),
            },
            Value::String(s) => FluentValue::Text(s),
            Value::Array(items) => {
                FluentValue::List(items.into_iter().map(FluentValue::from).collect())
            }
            // objects are kept as their JSON text
            obj @ Value::Object(_) => FluentValue::Text(obj.to_string()),
        }
    }
}
