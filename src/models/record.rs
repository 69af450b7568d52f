//! Lenient field access on raw records

use crate::types::{JsonValue, Record};

/// Builds an entity from a raw record
///
/// Implementations must not fail; missing fields take their defaults.
pub trait FromRecord: Sized {
    /// Map one record
    fn from_record(record: &Record) -> Self;
}

impl FromRecord for Record {
    fn from_record(record: &Record) -> Self {
        record.clone()
    }
}

/// Typed getters that default instead of failing
pub trait RecordExt {
    /// String field, or `""`
    fn str_or_empty(&self, key: &str) -> String;

    /// Number field, or `default`
    fn f64_or(&self, key: &str, default: f64) -> f64;

    /// Integer field, or `default`
    fn i64_or(&self, key: &str, default: i64) -> i64;

    /// List of strings; non-string entries are skipped
    fn strings(&self, key: &str) -> Vec<String>;

    /// Nested object, if present
    fn object(&self, key: &str) -> Option<&Record>;

    /// List of nested objects; non-object entries are skipped
    fn objects(&self, key: &str) -> Vec<&Record>;
}

impl RecordExt for Record {
    fn str_or_empty(&self, key: &str) -> String {
        match self.get(key) {
            Some(JsonValue::String(s)) => s.clone(),
            Some(JsonValue::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(JsonValue::as_f64).unwrap_or(default)
    }

    fn i64_or(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(JsonValue::as_i64).unwrap_or(default)
    }

    fn strings(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(JsonValue::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn object(&self, key: &str) -> Option<&Record> {
        self.get(key).and_then(JsonValue::as_object)
    }

    fn objects(&self, key: &str) -> Vec<&Record> {
        self.get(key)
            .and_then(JsonValue::as_array)
            .map(|items| items.iter().filter_map(JsonValue::as_object).collect())
            .unwrap_or_default()
    }
}
