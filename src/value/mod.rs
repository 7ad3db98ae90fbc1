//! Dynamic values exchanged with the scripting side.

use std::time::Duration;

use strum::IntoEnumIterator;

mod callback;
mod object;
mod record;

pub use callback::Callback;
pub use object::Object;
pub use record::Record;

/// A dynamically-typed value, as seen by a script.
///
/// Native enumerations cross the boundary as numbers, and durations as milliseconds.
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Record(Record),
    Callback(Callback),
    Object(Object),
}

impl Value {
    /// Returns a short, human-readable name of the value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Record(_) => "record",
            Self::Callback(_) => "callback",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` if this is `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the underlying value, if this is a `Value::Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns the underlying value, if this is a `Value::Number`.
    pub fn as_number(&self) -> Option<f64> {
        if let Self::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Borrows the underlying string, if this is a `Value::String`.
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Borrows the underlying elements, if this is a `Value::Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        if let Self::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Borrows the underlying record, if this is a `Value::Record`.
    pub fn as_record(&self) -> Option<&Record> {
        if let Self::Record(record) = self {
            Some(record)
        } else {
            None
        }
    }

    /// Borrows the underlying callback, if this is a `Value::Callback`.
    pub fn as_callback(&self) -> Option<&Callback> {
        if let Self::Callback(callback) = self {
            Some(callback)
        } else {
            None
        }
    }

    /// Borrows the underlying object, if this is a `Value::Object`.
    pub fn as_object(&self) -> Option<&Object> {
        if let Self::Object(object) = self {
            Some(object)
        } else {
            None
        }
    }
}

/// Converts a script number into the variant at that position in the enumeration's declaration
/// order. Fractional, negative, and out-of-range numbers yield `None`.
pub fn from_ordinal<E: IntoEnumIterator>(number: f64) -> Option<E> {
    if !number.is_finite() || number < 0.0 || number.fract() != 0.0 {
        return None;
    }
    E::iter().nth(number as usize)
}

/// Returns the position of the variant in the enumeration's declaration order.
pub fn to_ordinal<E: IntoEnumIterator + PartialEq>(variant: &E) -> usize {
    E::iter().position(|v| v == *variant).unwrap_or_default()
}

impl From<bool> for Value {
    fn from(source: bool) -> Self {
        Self::Bool(source)
    }
}

impl From<f64> for Value {
    fn from(source: f64) -> Self {
        Self::Number(source)
    }
}

impl From<f32> for Value {
    fn from(source: f32) -> Self {
        Self::Number(source.into())
    }
}

impl From<i32> for Value {
    fn from(source: i32) -> Self {
        Self::Number(source.into())
    }
}

impl From<u32> for Value {
    fn from(source: u32) -> Self {
        Self::Number(source.into())
    }
}

impl From<usize> for Value {
    fn from(source: usize) -> Self {
        Self::Number(source as f64)
    }
}

impl From<Duration> for Value {
    fn from(source: Duration) -> Self {
        Self::Number(source.as_secs_f64() * 1000.0)
    }
}

impl From<String> for Value {
    fn from(source: String) -> Self {
        Self::String(source)
    }
}

impl From<&str> for Value {
    fn from(source: &str) -> Self {
        Self::String(source.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(source: Vec<Value>) -> Self {
        Self::Array(source)
    }
}

impl From<Record> for Value {
    fn from(source: Record) -> Self {
        Self::Record(source)
    }
}

impl From<Callback> for Value {
    fn from(source: Callback) -> Self {
        Self::Callback(source)
    }
}

impl From<Object> for Value {
    fn from(source: Object) -> Self {
        Self::Object(source)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(source: Option<T>) -> Self {
        source.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}
