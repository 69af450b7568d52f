//! Filter expressions for the `q` parameter

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `field:value` predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// Field path, e.g. `name` or `set.id`
    pub field: String,
    /// Value to match
    pub value: String,
    /// Wrap the value in double quotes
    pub quoted: bool,
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "{}:\"{}\"", self.field, self.value)
        } else {
            write!(f, "{}:{}", self.field, self.value)
        }
    }
}

/// Comma-joined list of predicates
///
/// ```
/// use ptcg_sdk::query::Filter;
///
/// let filter = Filter::new().eq("name", "charizard").quoted("set.id", "base1");
/// assert_eq!(filter.to_string(), "name:charizard,set.id:\"base1\"");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unquoted `field:value` predicate
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate {
            field: field.into(),
            value: value.into(),
            quoted: false,
        });
        self
    }

    /// Add a `field:"value"` predicate
    #[must_use]
    pub fn quoted(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate {
            field: field.into(),
            value: value.into(),
            quoted: true,
        });
        self
    }

    /// Build a filter from `(field, value)` pairs, in order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |filter, (k, v)| filter.eq(k, v))
    }

    /// Predicates in insertion order
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// True when no predicate has been added
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{predicate}")?;
        }
        Ok(())
    }
}
