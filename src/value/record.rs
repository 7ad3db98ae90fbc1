use std::collections::BTreeMap;
use std::ops::Index;

use super::Value;

static NULL: Value = Value::Null;

/// A generic, string-keyed record with a type name, used for event payloads and descriptive
/// results.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record with the given type name.
    pub fn new<S: Into<String>>(type_name: S) -> Self {
        Self {
            type_name: type_name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// The type name the record was created with.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Sets a field and returns the record, for chained construction.
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Borrows the value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Iterates over the fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Missing fields read as `Value::Null`.
impl Index<&str> for Record {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&NULL)
    }
}
